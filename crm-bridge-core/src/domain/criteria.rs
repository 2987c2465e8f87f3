use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Search tab used when the criteria do not name one.
pub const DEFAULT_SEARCH_TYPE: &str = "advanced";

/// Filter applied to a single field, as sent by the front end.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SearchFieldFilter {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub field_type: Option<String>,
    #[serde(default)]
    pub operator: String,
    #[serde(default)]
    pub values: Vec<String>,
}

impl SearchFieldFilter {
    pub fn new(operator: impl Into<String>, values: Vec<String>) -> Self {
        Self {
            field: None,
            field_type: None,
            operator: operator.into(),
            values,
        }
    }

    pub fn equals(value: impl Into<String>) -> Self {
        Self::new("=", vec![value.into()])
    }

    pub fn between(start: impl Into<String>, end: impl Into<String>) -> Self {
        Self::new("between", vec![start.into(), end.into()])
    }

    pub fn with_field(mut self, field: impl Into<String>) -> Self {
        self.field = Some(field.into());
        self
    }
}

/// Front-end filter criteria for a list view.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Criteria {
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub search_type: Option<String>,
    #[serde(default)]
    pub filters: BTreeMap<String, SearchFieldFilter>,
}

impl Criteria {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_type(mut self, search_type: impl Into<String>) -> Self {
        self.search_type = Some(search_type.into());
        self
    }

    pub fn with_filter(mut self, field: impl Into<String>, filter: SearchFieldFilter) -> Self {
        self.filters.insert(field.into(), filter);
        self
    }

    /// The search tab type, falling back to `advanced`.
    pub fn search_type(&self) -> &str {
        self.search_type
            .as_deref()
            .filter(|t| !t.is_empty())
            .unwrap_or(DEFAULT_SEARCH_TYPE)
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Sort {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub order_by: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sort_order: Option<String>,
}

impl Sort {
    pub fn new(order_by: impl Into<String>, sort_order: impl Into<String>) -> Self {
        Self {
            order_by: Some(order_by.into()),
            sort_order: Some(sort_order.into()),
        }
    }
}

/// Value stored in the legacy search-form array.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(untagged)]
pub enum CriteriaValue {
    Single(String),
    Multiple(Vec<String>),
}

impl CriteriaValue {
    /// Single value for one entry, a list otherwise.
    pub fn from_values(values: &[String]) -> Self {
        match values {
            [single] => CriteriaValue::Single(single.clone()),
            many => CriteriaValue::Multiple(many.to_vec()),
        }
    }

    pub fn as_single(&self) -> Option<&str> {
        match self {
            CriteriaValue::Single(value) => Some(value.as_str()),
            CriteriaValue::Multiple(values) if values.len() == 1 => Some(values[0].as_str()),
            CriteriaValue::Multiple(_) => None,
        }
    }

    /// Non-empty values, in order.
    pub fn values(&self) -> Vec<&str> {
        let values: Vec<&str> = match self {
            CriteriaValue::Single(value) => vec![value.as_str()],
            CriteriaValue::Multiple(values) => values.iter().map(String::as_str).collect(),
        };

        values.into_iter().filter(|v| !v.trim().is_empty()).collect()
    }
}

impl From<&str> for CriteriaValue {
    fn from(value: &str) -> Self {
        CriteriaValue::Single(value.to_string())
    }
}

impl From<String> for CriteriaValue {
    fn from(value: String) -> Self {
        CriteriaValue::Single(value)
    }
}

/// Legacy search-form array (`searchFormTab`, `query`, `<field>_<type>`, ...).
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(transparent)]
pub struct LegacyCriteria(BTreeMap<String, CriteriaValue>);

impl LegacyCriteria {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<CriteriaValue>) {
        self.0.insert(key.into(), value.into());
    }

    pub fn get(&self, key: &str) -> Option<&CriteriaValue> {
        self.0.get(key)
    }

    /// Single string value of `key`, if present and non-empty.
    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.get(key)
            .and_then(CriteriaValue::as_single)
            .filter(|v| !v.is_empty())
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    /// Merges `other` into `self`; keys of `other` win.
    pub fn merge(mut self, other: LegacyCriteria) -> Self {
        self.0.extend(other.0);
        self
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &CriteriaValue)> {
        self.0.iter()
    }
}
