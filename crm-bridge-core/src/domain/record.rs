use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Attribute map of a normalized record, keyed by lower-case field name.
pub type Attributes = BTreeMap<String, String>;

/// Raw row as produced by the legacy list-view layer (upper-case keys).
pub type LegacyRow = BTreeMap<String, String>;

/// Pagination offsets in legacy list-view semantics.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Offsets {
    pub current: i64,
    pub next: i64,
    pub prev: i64,
    pub end: i64,
    pub total: i64,
    pub total_counted: bool,
}

impl Offsets {
    /// Computes the offsets of the page starting at `offset` for `total` rows.
    ///
    /// `next` and `prev` are `-1` when there is no such page. `current` is
    /// reported as requested, even when it lies past the last row.
    pub fn compute(offset: i64, limit: i64, total: i64) -> Self {
        let offset = offset.max(0);
        let limit = limit.max(1);
        let total = total.max(0);

        let next_offset = offset.saturating_add(limit);
        let next = if next_offset < total { next_offset } else { -1 };
        let prev = if offset > 0 { offset.saturating_sub(limit).max(0) } else { -1 };
        let end = if total > 0 { ((total - 1) / limit) * limit } else { 0 };

        Self {
            current: offset,
            next,
            prev,
            end,
            total,
            total_counted: true,
        }
    }

    /// True when the requested page starts past the last available row.
    pub fn is_past_end(&self) -> bool {
        self.total > 0 && self.current > 0 && self.current >= self.total
    }
}

impl Default for Offsets {
    fn default() -> Self {
        Self::compute(0, 1, 0)
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Ordering {
    pub order_by: String,
    pub sort_order: String,
}

impl Ordering {
    pub fn new(order_by: impl Into<String>, sort_order: impl Into<String>) -> Self {
        Self {
            order_by: order_by.into(),
            sort_order: sort_order.into(),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ListMeta {
    pub offsets: Offsets,
    pub ordering: Ordering,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Record {
    #[serde(rename = "type")]
    pub record_type: String,
    pub module: String,
    pub id: String,
    pub attributes: Attributes,
    pub relationships: Vec<serde_json::Value>,
}

impl Record {
    pub fn new(
        record_type: impl Into<String>,
        module: impl Into<String>,
        id: impl Into<String>,
        attributes: Attributes,
    ) -> Self {
        Self {
            record_type: record_type.into(),
            module: module.into(),
            id: id.into(),
            attributes,
            relationships: Vec::new(),
        }
    }

    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(String::as_str)
    }
}

/// Envelope returned to the front end for a list view request.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct RecordList {
    pub id: String,
    pub meta: ListMeta,
    pub records: Vec<Record>,
}

impl RecordList {
    pub fn new(id: impl Into<String>, meta: ListMeta, records: Vec<Record>) -> Self {
        Self {
            id: id.into(),
            meta,
            records,
        }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_offsets_first_page() {
        let offsets = Offsets::compute(0, 20, 83);
        assert_eq!(offsets.current, 0);
        assert_eq!(offsets.next, 20);
        assert_eq!(offsets.prev, -1);
        assert_eq!(offsets.end, 80);
        assert_eq!(offsets.total, 83);
        assert!(offsets.total_counted);
    }

    #[test]
    fn test_offsets_last_page() {
        let offsets = Offsets::compute(80, 20, 83);
        assert_eq!(offsets.next, -1);
        assert_eq!(offsets.prev, 60);
        assert_eq!(offsets.end, 80);
    }

    #[test]
    fn test_offsets_empty_result() {
        let offsets = Offsets::compute(0, 20, 0);
        assert_eq!(offsets.next, -1);
        assert_eq!(offsets.end, 0);
        assert!(!offsets.is_past_end());
    }

    #[test]
    fn test_offsets_at_max_offset() {
        let offsets = Offsets::compute(i64::MAX, 10, 30);
        assert_eq!(offsets.current, i64::MAX);
        assert_eq!(offsets.next, -1);
        assert_eq!(offsets.prev, i64::MAX - 10);
        assert!(offsets.is_past_end());

        let offsets = Offsets::compute(20, i64::MAX, 30);
        assert_eq!(offsets.next, -1);
        assert_eq!(offsets.prev, 0);
    }

    #[test]
    fn test_offsets_past_end() {
        let offsets = Offsets::compute(40, 20, 30);
        assert_eq!(offsets.current, 40);
        assert!(offsets.is_past_end());
    }

    #[test]
    fn test_record_serializes_type_field() {
        let record = Record::new("Contact", "contacts", "abc", Attributes::new());
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["type"], "Contact");
        assert_eq!(json["relationships"], serde_json::json!([]));
    }

    #[test]
    fn test_offsets_serialize_camel_case() {
        let json = serde_json::to_value(Offsets::compute(0, 10, 5)).unwrap();
        assert_eq!(json["totalCounted"], true);
    }
}
