use crm_bridge_core::{Criteria, Sort, UNSET};
use serde::{Deserialize, Serialize};
use validator::Validate;

fn unset() -> i64 {
    UNSET
}

/// Query string of `GET /api/records/:module`.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct RecordListQuery {
    #[validate(range(min = -1))]
    #[serde(default = "unset")]
    pub offset: i64,
    #[validate(range(min = -1, max = 100))]
    #[serde(default = "unset")]
    pub limit: i64,
    pub order_by: Option<String>,
    pub sort_order: Option<String>,
    #[serde(rename = "type")]
    pub search_type: Option<String>,
}

impl Default for RecordListQuery {
    fn default() -> Self {
        Self {
            offset: UNSET,
            limit: UNSET,
            order_by: None,
            sort_order: None,
            search_type: None,
        }
    }
}

impl RecordListQuery {
    pub fn criteria(&self) -> Criteria {
        match &self.search_type {
            Some(search_type) => Criteria::new().with_type(search_type.clone()),
            None => Criteria::new(),
        }
    }

    pub fn sort(&self) -> Sort {
        Sort {
            order_by: self.order_by.clone(),
            sort_order: self.sort_order.clone(),
        }
    }
}

/// Body of `POST /api/records/:module/list`.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct RecordListRequest {
    #[serde(default)]
    pub criteria: Criteria,
    #[validate(range(min = -1))]
    #[serde(default = "unset")]
    pub offset: i64,
    #[validate(range(min = -1, max = 100))]
    #[serde(default = "unset")]
    pub limit: i64,
    #[serde(default)]
    pub sort: Sort,
}

impl Default for RecordListRequest {
    fn default() -> Self {
        Self {
            criteria: Criteria::default(),
            offset: UNSET,
            limit: UNSET,
            sort: Sort::default(),
        }
    }
}

// Error response format
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub details: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_defaults_to_unset_paging() {
        let request: RecordListRequest = serde_json::from_str("{}").unwrap();

        assert_eq!(request.offset, -1);
        assert_eq!(request.limit, -1);
        assert!(request.criteria.filters.is_empty());
        assert!(request.validate().is_ok());
    }

    #[test]
    fn test_limit_out_of_range() {
        let request = RecordListRequest {
            limit: 500,
            ..Default::default()
        };
        assert!(request.validate().is_err());

        let query = RecordListQuery {
            offset: -2,
            ..Default::default()
        };
        assert!(query.validate().is_err());
    }

    #[test]
    fn test_request_body_shape() {
        let request: RecordListRequest = serde_json::from_value(serde_json::json!({
            "criteria": {
                "type": "basic",
                "filters": {
                    "name": {"operator": "=", "values": ["Acme"]}
                }
            },
            "offset": 20,
            "limit": 10,
            "sort": {"orderBy": "name", "sortOrder": "DESC"}
        }))
        .unwrap();

        assert_eq!(request.criteria.search_type(), "basic");
        assert_eq!(request.sort.order_by.as_deref(), Some("name"));
        assert_eq!(request.offset, 20);
    }
}
