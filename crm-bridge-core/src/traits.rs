use async_trait::async_trait;

use crate::domain::{BeanDefinition, Criteria, LegacyRequest, RecordList, Sort};
use crate::error::Result;
use crate::legacy::{ListViewData, SortingParams, WhereClause};

/// Legacy query execution: runs a list-view query for a bean.
#[async_trait]
pub trait ListViewDataPort: Send + Sync {
    async fn get(
        &self,
        bean: &BeanDefinition,
        filter: &WhereClause,
        offset: i64,
        limit: i64,
        filter_fields: &[String],
        params: &SortingParams,
    ) -> Result<ListViewData>;
}

#[async_trait]
pub trait RecordListProvider: Send + Sync {
    fn handler_key(&self) -> &'static str;

    async fn get_list(
        &self,
        module_name: &str,
        criteria: &Criteria,
        offset: i64,
        limit: i64,
        sort: &Sort,
    ) -> Result<RecordList>;
}

pub trait RouteConverter: Send + Sync {
    fn is_legacy_view_route(&self, request: &LegacyRequest) -> bool;

    fn convert(&self, request: &LegacyRequest) -> Result<String>;
}
