//! Row shaping shared by the list view adapters.

use crm_bridge_core::{compare_field_values, sanitize_identifier, LegacyRow, Ordering, SortingParams};
use std::cmp::Ordering as CmpOrdering;

/// Column used when no usable sort was requested.
pub const DEFAULT_ORDER_COLUMN: &str = "date_entered";

/// Resolved `ORDER BY` column and direction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderSpec {
    pub column: String,
    pub direction: &'static str,
}

impl OrderSpec {
    /// Requested sort when it names a list column, newest first otherwise.
    pub fn resolve(params: &SortingParams, filter_fields: &[String]) -> Self {
        let requested = params.order_by.to_lowercase();
        let listed = filter_fields
            .iter()
            .any(|field| field.eq_ignore_ascii_case(&requested));

        if !params.is_empty() && listed {
            Self {
                column: sanitize_identifier(&requested),
                direction: params.direction(),
            }
        } else {
            Self::default()
        }
    }

    pub fn is_descending(&self) -> bool {
        self.direction == "DESC"
    }

    pub fn ordering(&self) -> Ordering {
        Ordering::new(self.column.clone(), self.direction)
    }
}

impl Default for OrderSpec {
    fn default() -> Self {
        Self {
            column: DEFAULT_ORDER_COLUMN.to_string(),
            direction: "DESC",
        }
    }
}

/// Case-insensitive column lookup.
pub fn column_value<'a>(row: &'a LegacyRow, column: &str) -> Option<&'a str> {
    row.iter()
        .find(|(key, _)| key.eq_ignore_ascii_case(column))
        .map(|(_, value)| value.as_str())
}

/// Keeps the requested fields, keyed upper-case like the legacy list view.
pub fn project_row(row: &LegacyRow, filter_fields: &[String]) -> LegacyRow {
    filter_fields
        .iter()
        .filter_map(|field| {
            column_value(row, field).map(|value| (field.to_uppercase(), value.to_string()))
        })
        .collect()
}

/// Flattens a JSON object into string columns. `null` becomes an empty string.
pub fn json_to_row(value: &serde_json::Value) -> Option<LegacyRow> {
    let object = value.as_object()?;

    Some(
        object
            .iter()
            .map(|(key, value)| {
                let text = match value {
                    serde_json::Value::Null => String::new(),
                    serde_json::Value::String(s) => s.clone(),
                    other => other.to_string(),
                };
                (key.clone(), text)
            })
            .collect(),
    )
}

/// Sort comparison: missing values first, numbers numerically, text case-insensitively.
pub fn compare_values(left: Option<&str>, right: Option<&str>) -> CmpOrdering {
    match (left, right) {
        (None, None) => CmpOrdering::Equal,
        (None, Some(_)) => CmpOrdering::Less,
        (Some(_), None) => CmpOrdering::Greater,
        (Some(l), Some(r)) => compare_field_values(l, r),
    }
}
