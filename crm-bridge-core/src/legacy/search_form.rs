use crate::domain::{BeanDefinition, FieldKind, LegacyCriteria, SearchFieldDef};

use super::condition::{ConditionOp, SearchCondition, WhereClause};

/// Search form of a bean, populated from the legacy criteria array.
#[derive(Debug, Clone)]
pub struct SearchForm<'a> {
    bean: &'a BeanDefinition,
    search_type: String,
    criteria: LegacyCriteria,
}

impl<'a> SearchForm<'a> {
    pub fn new(bean: &'a BeanDefinition, search_type: impl Into<String>) -> Self {
        Self {
            bean,
            search_type: search_type.into(),
            criteria: LegacyCriteria::new(),
        }
    }

    /// Keeps the entries that belong to this form's search tab.
    pub fn populate_from_array(mut self, criteria: &LegacyCriteria) -> Self {
        let suffix = format!("_{}", self.search_type);
        let range_suffix = format!("{}_range_choice", suffix);

        for (key, value) in criteria.iter() {
            if key.ends_with(&suffix) || key.ends_with(&range_suffix) {
                self.criteria.insert(key.clone(), value.clone());
            }
        }

        self
    }

    pub fn search_tab(&self) -> String {
        format!("{}_search", self.search_type)
    }

    /// One condition per searchable field with a usable value.
    pub fn generate_search_where(&self) -> Vec<SearchCondition> {
        self.bean
            .search_fields
            .iter()
            .filter_map(|field| self.condition_for(field))
            .collect()
    }

    pub fn build_filter_clause(&self) -> WhereClause {
        WhereClause::new(self.generate_search_where())
    }

    fn condition_for(&self, field: &SearchFieldDef) -> Option<SearchCondition> {
        let key = format!("{}_{}", field.name, self.search_type);

        let op = match self.criteria.get_str(&format!("{}_range_choice", key)) {
            Some(choice) => self.range_op(&key, choice)?,
            None => self.value_op(&key, field.kind)?,
        };

        Some(SearchCondition::new(self.bean.table_name.clone(), field.name.clone(), op))
    }

    fn range_op(&self, key: &str, choice: &str) -> Option<ConditionOp> {
        if choice == "between" {
            let start = self.criteria.get_str(&format!("start_range_{}", key))?;
            let end = self.criteria.get_str(&format!("end_range_{}", key))?;
            return Some(ConditionOp::Between(start.to_string(), end.to_string()));
        }

        let value = self.criteria.get_str(&format!("range_{}", key))?.to_string();
        match choice {
            "=" => Some(ConditionOp::Eq(value)),
            "not_equal" => Some(ConditionOp::Ne(value)),
            "greater_than" => Some(ConditionOp::Gt(value)),
            "less_than" => Some(ConditionOp::Lt(value)),
            _ => None,
        }
    }

    fn value_op(&self, key: &str, kind: FieldKind) -> Option<ConditionOp> {
        let values = self.criteria.get(key)?.values();

        match (kind, values.as_slice()) {
            (_, []) => None,
            (FieldKind::Text, [value]) => Some(ConditionOp::Like(like_pattern(value))),
            (_, [value]) => Some(ConditionOp::Eq(value.to_string())),
            (_, many) => Some(ConditionOp::In(many.iter().map(|v| v.to_string()).collect())),
        }
    }
}

// `*` is the legacy wildcard; text searches are prefix matches.
fn like_pattern(value: &str) -> String {
    let mut pattern = value.trim().replace('*', "%");
    if !pattern.ends_with('%') {
        pattern.push('%');
    }
    pattern
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{BeanRegistry, CriteriaValue, LegacyModule};

    fn accounts() -> BeanDefinition {
        BeanRegistry::builtin()
            .get(LegacyModule::Accounts)
            .cloned()
            .unwrap()
    }

    #[test]
    fn test_text_field_becomes_prefix_like() {
        let bean = accounts();
        let mut criteria = LegacyCriteria::new();
        criteria.insert("name_advanced", "Acme");

        let form = SearchForm::new(&bean, "advanced").populate_from_array(&criteria);
        let clause = form.build_filter_clause();

        assert_eq!(clause.to_string(), "(accounts.name LIKE 'Acme%')");
    }

    #[test]
    fn test_wildcard_is_translated() {
        assert_eq!(like_pattern("*corp"), "%corp%");
        assert_eq!(like_pattern("acme%"), "acme%");
    }

    #[test]
    fn test_enum_field_with_many_values_becomes_in() {
        let bean = accounts();
        let mut criteria = LegacyCriteria::new();
        criteria.insert(
            "industry_advanced",
            CriteriaValue::Multiple(vec!["Energy".into(), "Banking".into()]),
        );

        let conditions = SearchForm::new(&bean, "advanced")
            .populate_from_array(&criteria)
            .generate_search_where();

        assert_eq!(conditions.len(), 1);
        assert_eq!(
            conditions[0].op,
            ConditionOp::In(vec!["Energy".into(), "Banking".into()])
        );
    }

    #[test]
    fn test_range_choice() {
        let bean = accounts();
        let mut criteria = LegacyCriteria::new();
        criteria.insert("range_annual_revenue_advanced", "5000");
        criteria.insert("annual_revenue_advanced_range_choice", "less_than");
        criteria.insert("start_range_date_entered_advanced", "2020-01-01");
        criteria.insert("end_range_date_entered_advanced", "2020-02-01");
        criteria.insert("date_entered_advanced_range_choice", "between");

        let conditions = SearchForm::new(&bean, "advanced")
            .populate_from_array(&criteria)
            .generate_search_where();

        assert!(conditions.contains(&SearchCondition::new(
            "accounts",
            "annual_revenue",
            ConditionOp::Lt("5000".into())
        )));
        assert!(conditions.contains(&SearchCondition::new(
            "accounts",
            "date_entered",
            ConditionOp::Between("2020-01-01".into(), "2020-02-01".into())
        )));
    }

    #[test]
    fn test_other_search_tab_and_unknown_fields_are_ignored() {
        let bean = accounts();
        let mut criteria = LegacyCriteria::new();
        criteria.insert("searchFormTab", "advanced_search");
        criteria.insert("query", "true");
        criteria.insert("name_basic", "Acme");
        criteria.insert("shoe_size_advanced", "42");

        let form = SearchForm::new(&bean, "advanced").populate_from_array(&criteria);

        assert!(form.generate_search_where().is_empty());
        assert_eq!(form.search_tab(), "advanced_search");
    }

    #[test]
    fn test_blank_values_are_ignored() {
        let bean = accounts();
        let mut criteria = LegacyCriteria::new();
        criteria.insert("name_advanced", "  ");

        let form = SearchForm::new(&bean, "advanced").populate_from_array(&criteria);
        assert!(form.build_filter_clause().is_empty());
    }
}
