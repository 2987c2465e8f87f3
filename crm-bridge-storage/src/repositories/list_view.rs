use async_trait::async_trait;
use crm_bridge_core::{
    sanitize_identifier, BeanDefinition, ListViewData, ListViewDataPort, Offsets, Result,
    SortingParams, WhereClause,
};
use sqlx::{PgPool, Row};

use crate::rows::{json_to_row, project_row, OrderSpec};

/// SQL for one list view page of a bean's table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListViewQuery {
    table: String,
    filter: String,
    order: OrderSpec,
}

impl ListViewQuery {
    pub fn new(bean: &BeanDefinition, filter: &WhereClause, order: OrderSpec) -> Self {
        Self {
            table: sanitize_identifier(&bean.table_name),
            filter: filter.to_string(),
            order,
        }
    }

    pub fn order(&self) -> &OrderSpec {
        &self.order
    }

    fn where_sql(&self) -> String {
        let mut sql = format!("{}.deleted = 0", self.table);
        if !self.filter.is_empty() {
            sql.push_str(" AND (");
            sql.push_str(&self.filter);
            sql.push(')');
        }
        sql
    }

    /// Page query; binds `$1` limit and `$2` offset. Each row is one JSON object.
    pub fn select_sql(&self) -> String {
        format!(
            "SELECT to_jsonb({table}) AS row FROM {table} WHERE {filter} ORDER BY {table}.{column} {direction} LIMIT $1 OFFSET $2",
            table = self.table,
            filter = self.where_sql(),
            column = self.order.column,
            direction = self.order.direction,
        )
    }

    pub fn count_sql(&self) -> String {
        format!("SELECT COUNT(*) FROM {} WHERE {}", self.table, self.where_sql())
    }
}

/// List view data read from the legacy PostgreSQL schema.
pub struct PostgresListViewData {
    pool: PgPool,
}

impl PostgresListViewData {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ListViewDataPort for PostgresListViewData {
    async fn get(
        &self,
        bean: &BeanDefinition,
        filter: &WhereClause,
        offset: i64,
        limit: i64,
        filter_fields: &[String],
        params: &SortingParams,
    ) -> Result<ListViewData> {
        let query = ListViewQuery::new(bean, filter, OrderSpec::resolve(params, filter_fields));
        let offset = offset.max(0);
        let limit = limit.max(1);

        let count_sql = query.count_sql();
        let total: i64 = sqlx::query_scalar(&count_sql)
            .fetch_one(&self.pool)
            .await?;

        let select_sql = query.select_sql();
        let rows = sqlx::query(&select_sql)
            .bind(limit)
            .bind(offset)
            .fetch_all(&self.pool)
            .await?;

        let mut data = Vec::with_capacity(rows.len());
        for row in rows {
            let value: serde_json::Value = row.try_get("row")?;
            if let Some(row) = json_to_row(&value) {
                data.push(project_row(&row, filter_fields));
            }
        }

        tracing::debug!(
            table = %bean.table_name,
            total,
            returned = data.len(),
            "Fetched list view page"
        );

        Ok(ListViewData::new(
            data,
            Offsets::compute(offset, limit, total),
            query.order().ordering(),
        ))
    }
}
