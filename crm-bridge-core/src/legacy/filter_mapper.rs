use crate::domain::{Criteria, CriteriaValue, LegacyCriteria, SearchFieldFilter, Sort};

/// Maps front-end filter criteria onto the legacy search-form array.
#[derive(Debug, Clone, Copy, Default)]
pub struct LegacyFilterMapper;

impl LegacyFilterMapper {
    pub fn new() -> Self {
        Self
    }

    /// Maps every field filter of `criteria` to `<field>_<type>` style keys.
    pub fn map_filters(&self, criteria: &Criteria, search_type: &str) -> LegacyCriteria {
        let mut mapped = LegacyCriteria::new();

        for (key, filter) in &criteria.filters {
            if filter.operator.is_empty() || filter.values.is_empty() {
                continue;
            }

            let field = filter
                .field
                .as_deref()
                .filter(|f| !f.is_empty())
                .unwrap_or(key);
            let legacy_key = format!("{}_{}", field, search_type);

            self.map_filter(&mut mapped, &legacy_key, filter);
        }

        mapped
    }

    fn map_filter(&self, mapped: &mut LegacyCriteria, legacy_key: &str, filter: &SearchFieldFilter) {
        let operator = filter.operator.as_str();

        match operator {
            "=" | "like" | "in" => {
                mapped.insert(legacy_key, CriteriaValue::from_values(&filter.values));
            }
            "not_equal" | "greater_than" | "less_than" => {
                mapped.insert(format!("range_{}", legacy_key), filter.values[0].as_str());
                mapped.insert(format!("{}_range_choice", legacy_key), operator);
            }
            "between" => {
                let [start, end] = match filter.values.as_slice() {
                    [start, end, ..] => [start, end],
                    _ => {
                        tracing::warn!(key = legacy_key, "Skipping between filter without two values");
                        return;
                    }
                };
                mapped.insert(format!("start_range_{}", legacy_key), start.as_str());
                mapped.insert(format!("end_range_{}", legacy_key), end.as_str());
                mapped.insert(format!("{}_range_choice", legacy_key), operator);
            }
            other => {
                tracing::warn!(key = legacy_key, operator = other, "Skipping filter with unsupported operator");
            }
        }
    }

    pub fn get_order_by(&self, sort: &Sort) -> String {
        sort.order_by.clone().unwrap_or_default()
    }

    pub fn get_sort_order(&self, sort: &Sort) -> String {
        match sort.sort_order.as_deref() {
            Some(order) if order.eq_ignore_ascii_case("asc") => "ASC".to_string(),
            Some(order) if order.eq_ignore_ascii_case("desc") => "DESC".to_string(),
            _ => String::new(),
        }
    }
}
