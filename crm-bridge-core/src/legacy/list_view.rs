use serde::{Deserialize, Serialize};

use crate::domain::{LegacyCriteria, LegacyRow, Offsets, Ordering};

/// Page size used when the caller leaves the limit unset.
pub const DEFAULT_LIST_LIMIT: i64 = 20;

/// Marker for an unset offset or limit.
pub const UNSET: i64 = -1;

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct PageData {
    pub offsets: Offsets,
    pub ordering: Ordering,
}

/// Raw page returned by a list-view data port.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ListViewData {
    pub data: Vec<LegacyRow>,
    pub page_data: PageData,
}

impl ListViewData {
    pub fn new(data: Vec<LegacyRow>, offsets: Offsets, ordering: Ordering) -> Self {
        Self {
            data,
            page_data: PageData { offsets, ordering },
        }
    }
}

/// Explicit ordering handed to the legacy query layer.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SortingParams {
    pub order_by: String,
    pub sort_order: String,
    pub skip_order_save: bool,
    pub override_order: bool,
    pub custom_order: bool,
}

impl SortingParams {
    /// Sorting requested by the search-form array; empty without `orderBy`.
    pub fn from_criteria(criteria: &LegacyCriteria) -> Self {
        match criteria.get_str("orderBy").filter(|order_by| !order_by.is_empty()) {
            Some(order_by) => Self {
                order_by: order_by.to_uppercase(),
                sort_order: criteria.get_str("sortOrder").unwrap_or_default().to_string(),
                skip_order_save: true,
                override_order: true,
                custom_order: true,
            },
            None => Self::default(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.order_by.is_empty()
    }

    /// Sort direction, `ASC` unless `DESC` was requested.
    pub fn direction(&self) -> &'static str {
        if self.sort_order.eq_ignore_ascii_case("desc") {
            "DESC"
        } else {
            "ASC"
        }
    }
}

/// Resolves unset (`-1`) or invalid paging arguments.
pub fn resolve_paging(offset: i64, limit: i64, default_limit: i64) -> (i64, i64) {
    let offset = offset.max(0);
    let limit = if limit > 0 { limit } else { default_limit.max(1) };
    (offset, limit)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sorting_params_from_criteria() {
        let mut criteria = LegacyCriteria::new();
        criteria.insert("orderBy", "date_entered");
        criteria.insert("sortOrder", "DESC");

        let params = SortingParams::from_criteria(&criteria);
        assert_eq!(params.order_by, "DATE_ENTERED");
        assert_eq!(params.sort_order, "DESC");
        assert!(params.skip_order_save && params.override_order && params.custom_order);
        assert_eq!(params.direction(), "DESC");
    }

    #[test]
    fn test_sorting_params_empty_without_order_by() {
        let mut criteria = LegacyCriteria::new();
        criteria.insert("orderBy", "");
        criteria.insert("sortOrder", "DESC");

        let params = SortingParams::from_criteria(&criteria);
        assert!(params.is_empty());
        assert!(!params.custom_order);
    }

    #[test]
    fn test_resolve_paging() {
        assert_eq!(resolve_paging(UNSET, UNSET, 20), (0, 20));
        assert_eq!(resolve_paging(40, 10, 20), (40, 10));
        assert_eq!(resolve_paging(0, 0, 20), (0, 20));
        assert_eq!(resolve_paging(-5, -1, 0), (0, 1));
    }

    #[test]
    fn test_list_view_data_serializes_page_data() {
        let data = ListViewData::new(vec![], Offsets::compute(0, 20, 0), Ordering::default());
        let json = serde_json::to_value(&data).unwrap();
        assert!(json.get("pageData").is_some());
    }
}
