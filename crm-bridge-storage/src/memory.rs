//! In-memory list view data, used for demos and tests.
//!
//! Fixture files map a module name (legacy or front-end form) to an array of
//! row objects:
//!
//! ```json
//! { "Accounts": [ { "id": "a-1", "name": "Acme", "date_entered": "2024-01-02" } ] }
//! ```

use anyhow::Context;
use async_trait::async_trait;
use crm_bridge_core::{
    BeanDefinition, CoreError, LegacyModule, LegacyRow, ListViewData, ListViewDataPort, Offsets,
    Result, SortingParams, WhereClause,
};
use dashmap::DashMap;
use std::collections::BTreeMap;
use std::path::Path;

use crate::rows::{column_value, compare_values, json_to_row, project_row, OrderSpec};

#[derive(Debug, Default)]
pub struct InMemoryListViewData {
    rows: DashMap<LegacyModule, Vec<LegacyRow>>,
}

impl InMemoryListViewData {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_rows(self, module: LegacyModule, rows: Vec<LegacyRow>) -> Self {
        self.rows.entry(module).or_default().extend(rows);
        self
    }

    pub fn insert(&self, module: LegacyModule, row: LegacyRow) {
        self.rows.entry(module).or_default().push(row);
    }

    /// Stored rows for `module`, including deleted ones.
    pub fn row_count(&self, module: LegacyModule) -> usize {
        self.rows.get(&module).map(|rows| rows.len()).unwrap_or(0)
    }

    pub fn from_json(json: &str) -> Result<Self> {
        let fixtures: BTreeMap<String, Vec<serde_json::Value>> = serde_json::from_str(json)?;
        let store = Self::new();

        for (name, rows) in fixtures {
            let module = LegacyModule::from_legacy_name(&name)
                .or_else(|| LegacyModule::from_front_end_name(&name))
                .ok_or_else(|| {
                    CoreError::invalid_argument(format!("Unknown fixture module: {}", name))
                })?;

            for value in rows {
                let row = json_to_row(&value).ok_or_else(|| {
                    CoreError::Serialization(format!("{} fixture rows must be objects", name))
                })?;
                store.insert(module, row);
            }
        }

        Ok(store)
    }

    pub async fn from_fixtures_file(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let json = tokio::fs::read_to_string(path)
            .await
            .with_context(|| format!("failed to read fixtures from {}", path.display()))?;

        let store = Self::from_json(&json)
            .with_context(|| format!("invalid fixtures in {}", path.display()))?;

        tracing::info!(
            path = %path.display(),
            modules = store.rows.len(),
            "Loaded list view fixtures"
        );

        Ok(store)
    }
}

fn is_deleted(row: &LegacyRow) -> bool {
    matches!(column_value(row, "deleted"), Some("1") | Some("true"))
}

#[async_trait]
impl ListViewDataPort for InMemoryListViewData {
    async fn get(
        &self,
        bean: &BeanDefinition,
        filter: &WhereClause,
        offset: i64,
        limit: i64,
        filter_fields: &[String],
        params: &SortingParams,
    ) -> Result<ListViewData> {
        let offset = offset.max(0);
        let limit = limit.max(1);
        let order = OrderSpec::resolve(params, filter_fields);

        let mut matching: Vec<LegacyRow> = self
            .rows
            .get(&bean.module)
            .map(|rows| {
                rows.iter()
                    .filter(|row| !is_deleted(row) && filter.matches_row(row))
                    .cloned()
                    .collect()
            })
            .unwrap_or_default();

        matching.sort_by(|a, b| {
            let ordering = compare_values(
                column_value(a, &order.column),
                column_value(b, &order.column),
            );
            if order.is_descending() {
                ordering.reverse()
            } else {
                ordering
            }
        });

        let total = matching.len() as i64;
        let data = matching
            .iter()
            .skip(offset as usize)
            .take(limit as usize)
            .map(|row| project_row(row, filter_fields))
            .collect();

        Ok(ListViewData::new(
            data,
            Offsets::compute(offset, limit, total),
            order.ordering(),
        ))
    }
}
