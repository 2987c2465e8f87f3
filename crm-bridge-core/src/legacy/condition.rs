//! Typed where-conditions produced by the search form.
//!
//! Conditions render as the SQL fragments the legacy query layer expects and
//! can also be evaluated against a row, which keeps non-SQL data ports honest.

use std::cmp::Ordering;
use std::fmt;

use crate::domain::LegacyRow;

/// Comparison applied by a [`SearchCondition`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConditionOp {
    /// SQL `LIKE` pattern, `%` matches any run of characters.
    Like(String),
    Eq(String),
    Ne(String),
    Gt(String),
    Lt(String),
    In(Vec<String>),
    Between(String, String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchCondition {
    pub table: String,
    pub field: String,
    pub op: ConditionOp,
}

impl SearchCondition {
    pub fn new(table: impl Into<String>, field: impl Into<String>, op: ConditionOp) -> Self {
        Self {
            table: table.into(),
            field: field.into(),
            op,
        }
    }

    /// Qualified, sanitized column reference.
    pub fn column(&self) -> String {
        format!("{}.{}", sanitize_identifier(&self.table), sanitize_identifier(&self.field))
    }

    /// Evaluates the condition against a column value. NULL never matches.
    pub fn matches(&self, value: Option<&str>) -> bool {
        let Some(value) = value else {
            return false;
        };

        match &self.op {
            ConditionOp::Like(pattern) => like_match(pattern, value),
            ConditionOp::Eq(expected) => compare_field_values(value, expected) == Ordering::Equal,
            ConditionOp::Ne(expected) => compare_field_values(value, expected) != Ordering::Equal,
            ConditionOp::Gt(expected) => compare_field_values(value, expected) == Ordering::Greater,
            ConditionOp::Lt(expected) => compare_field_values(value, expected) == Ordering::Less,
            ConditionOp::In(values) => values
                .iter()
                .any(|v| compare_field_values(value, v) == Ordering::Equal),
            ConditionOp::Between(start, end) => {
                compare_field_values(value, start) != Ordering::Less
                    && compare_field_values(value, end) != Ordering::Greater
            }
        }
    }

    /// Evaluates the condition against a row, matching column names case-insensitively.
    pub fn matches_row(&self, row: &LegacyRow) -> bool {
        let value = row
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(&self.field))
            .map(|(_, value)| value.as_str());
        self.matches(value)
    }
}

impl fmt::Display for SearchCondition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let column = self.column();
        match &self.op {
            ConditionOp::Like(pattern) => write!(f, "{} LIKE '{}'", column, sanitize_value(pattern)),
            ConditionOp::Eq(value) => write!(f, "{} = '{}'", column, sanitize_value(value)),
            ConditionOp::Ne(value) => write!(f, "{} != '{}'", column, sanitize_value(value)),
            ConditionOp::Gt(value) => write!(f, "{} > '{}'", column, sanitize_value(value)),
            ConditionOp::Lt(value) => write!(f, "{} < '{}'", column, sanitize_value(value)),
            ConditionOp::In(values) => {
                let list: Vec<String> = values
                    .iter()
                    .map(|v| format!("'{}'", sanitize_value(v)))
                    .collect();
                write!(f, "{} IN ({})", column, list.join(","))
            }
            ConditionOp::Between(start, end) => write!(
                f,
                "{} BETWEEN '{}' AND '{}'",
                column,
                sanitize_value(start),
                sanitize_value(end)
            ),
        }
    }
}

/// Conjunction of search conditions, rendered `(a ) AND ( b)`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WhereClause {
    conditions: Vec<SearchCondition>,
}

impl WhereClause {
    pub fn new(conditions: Vec<SearchCondition>) -> Self {
        Self { conditions }
    }

    pub fn conditions(&self) -> &[SearchCondition] {
        &self.conditions
    }

    pub fn is_empty(&self) -> bool {
        self.conditions.is_empty()
    }

    pub fn matches_row(&self, row: &LegacyRow) -> bool {
        self.conditions.iter().all(|c| c.matches_row(row))
    }
}

impl fmt::Display for WhereClause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.conditions.is_empty() {
            return Ok(());
        }

        let clauses: Vec<String> = self.conditions.iter().map(ToString::to_string).collect();
        write!(f, "({})", clauses.join(" ) AND ( "))
    }
}

/// Keeps alphanumerics and underscores only.
pub fn sanitize_identifier(identifier: &str) -> String {
    identifier
        .chars()
        .filter(|c| c.is_alphanumeric() || *c == '_')
        .collect()
}

/// Escapes a SQL string literal body.
pub fn sanitize_value(value: &str) -> String {
    value.replace('\'', "''")
}

/// Finite numbers compare numerically, everything else case-insensitively.
pub fn compare_field_values(left: &str, right: &str) -> Ordering {
    match (finite_number(left), finite_number(right)) {
        (Some(l), Some(r)) => l.partial_cmp(&r).unwrap_or(Ordering::Equal),
        _ => left.to_lowercase().cmp(&right.to_lowercase()),
    }
}

fn finite_number(value: &str) -> Option<f64> {
    value.trim().parse::<f64>().ok().filter(|n| n.is_finite())
}

fn like_match(pattern: &str, value: &str) -> bool {
    let pattern = pattern.to_lowercase();
    let value = value.to_lowercase();
    let parts: Vec<&str> = pattern.split('%').collect();

    if parts.len() == 1 {
        return pattern == value;
    }

    let first = parts[0];
    let last = parts[parts.len() - 1];
    if !value.starts_with(first) || value.len() < first.len() + last.len() || !value.ends_with(last) {
        return false;
    }

    let mut rest = &value[first.len()..value.len() - last.len()];
    for part in &parts[1..parts.len() - 1] {
        match rest.find(part) {
            Some(index) => rest = &rest[index + part.len()..],
            None => return false,
        }
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("jo%", "John", true)]
    #[case("jo%", "Mary", false)]
    #[case("%son", "Jackson", true)]
    #[case("%ck%", "Jackson", true)]
    #[case("a%b%c", "aXbYc", true)]
    #[case("a%b%c", "acb", false)]
    #[case("exact", "EXACT", true)]
    #[case("ab%ba", "aba", false)]
    fn test_like_match(#[case] pattern: &str, #[case] value: &str, #[case] expected: bool) {
        assert_eq!(like_match(pattern, value), expected);
    }

    #[test]
    fn test_condition_renders_sql() {
        let condition = SearchCondition::new("accounts", "name", ConditionOp::Like("O'Brien%".into()));
        assert_eq!(condition.to_string(), "accounts.name LIKE 'O''Brien%'");

        let condition = SearchCondition::new(
            "cases",
            "status",
            ConditionOp::In(vec!["New".into(), "Closed".into()]),
        );
        assert_eq!(condition.to_string(), "cases.status IN ('New','Closed')");
    }

    #[test]
    fn test_where_clause_joins_like_legacy_layer() {
        let clause = WhereClause::new(vec![
            SearchCondition::new("accounts", "name", ConditionOp::Like("a%".into())),
            SearchCondition::new("accounts", "industry", ConditionOp::Eq("Energy".into())),
        ]);
        assert_eq!(
            clause.to_string(),
            "(accounts.name LIKE 'a%' ) AND ( accounts.industry = 'Energy')"
        );
        assert_eq!(WhereClause::default().to_string(), "");
    }

    #[test]
    fn test_numeric_comparisons() {
        let gt = SearchCondition::new("t", "amount", ConditionOp::Gt("900".into()));
        assert!(gt.matches(Some("1000")));
        assert!(!gt.matches(Some("800")));
        assert!(!gt.matches(None));

        let between = SearchCondition::new(
            "t",
            "date_entered",
            ConditionOp::Between("2020-01-01".into(), "2020-12-31".into()),
        );
        assert!(between.matches(Some("2020-06-03")));
        assert!(!between.matches(Some("2021-01-01")));
    }

    #[test]
    fn test_non_finite_values_compare_as_text() {
        let eq = SearchCondition::new("t", "amount", ConditionOp::Eq("5".into()));
        assert!(!eq.matches(Some("NaN")));
        assert!(!eq.matches(Some("inf")));
        assert!(eq.matches(Some("5.0")));

        let any = SearchCondition::new("t", "amount", ConditionOp::In(vec!["1".into(), "2".into()]));
        assert!(!any.matches(Some("NaN")));

        assert_eq!(compare_field_values("NaN", "NaN"), Ordering::Equal);
        assert_eq!(compare_field_values("NaN", "7"), Ordering::Greater);
    }

    #[test]
    fn test_identifier_sanitized() {
        let condition = SearchCondition::new("accounts; drop", "name--", ConditionOp::Eq("x".into()));
        assert_eq!(condition.column(), "accountsdrop.name");
    }
}
