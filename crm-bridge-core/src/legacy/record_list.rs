use async_trait::async_trait;
use std::sync::Arc;

use crate::domain::{
    Attributes, BeanDefinition, BeanRegistry, Criteria, LegacyCriteria, LegacyModule, LegacyRow,
    ListMeta, Record, RecordList, Sort,
};
use crate::error::{CoreError, Result};
use crate::traits::{ListViewDataPort, RecordListProvider};

use super::filter_mapper::LegacyFilterMapper;
use super::list_view::{resolve_paging, ListViewData, PageData, SortingParams, DEFAULT_LIST_LIMIT};
use super::module_name_mapper::ModuleNameMapper;
use super::scope::LegacyScopeState;
use super::search_form::SearchForm;

/// Fetches legacy list views and packages them as record lists.
pub struct RecordListHandler {
    scope: LegacyScopeState,
    module_name_mapper: ModuleNameMapper,
    legacy_filter_mapper: LegacyFilterMapper,
    beans: Arc<BeanRegistry>,
    data_port: Arc<dyn ListViewDataPort>,
    default_limit: i64,
}

impl RecordListHandler {
    pub const HANDLER_KEY: &'static str = "list-view";

    pub fn new(
        scope: LegacyScopeState,
        beans: Arc<BeanRegistry>,
        data_port: Arc<dyn ListViewDataPort>,
    ) -> Self {
        Self {
            scope,
            module_name_mapper: ModuleNameMapper::new(),
            legacy_filter_mapper: LegacyFilterMapper::new(),
            beans,
            data_port,
            default_limit: DEFAULT_LIST_LIMIT,
        }
    }

    pub fn with_default_limit(mut self, limit: i64) -> Self {
        self.default_limit = limit.max(1);
        self
    }

    /// Search-form array for `criteria`: base clause merged with mapped filters.
    pub fn build_legacy_criteria(&self, criteria: &Criteria, sort: &Sort) -> LegacyCriteria {
        let search_type = criteria.search_type();
        let mapped = self.legacy_filter_mapper.map_filters(criteria, search_type);

        let mut base = LegacyCriteria::new();
        base.insert("searchFormTab", format!("{}_search", search_type));
        base.insert("query", "true");
        base.insert("orderBy", self.legacy_filter_mapper.get_order_by(sort));
        base.insert("sortOrder", self.legacy_filter_mapper.get_sort_order(sort));

        base.merge(mapped)
    }

    fn validate_module_name(&self, module_name: &str) -> Result<LegacyModule> {
        let legacy_name = self.module_name_mapper.to_legacy(module_name);

        match LegacyModule::from_legacy_name(&legacy_name) {
            Some(module) if self.module_name_mapper.is_valid_module(&legacy_name) => Ok(module),
            _ => Err(CoreError::invalid_argument(format!(
                "Invalid module name: {}",
                legacy_name
            ))),
        }
    }

    fn new_bean_safe(&self, module: LegacyModule) -> Result<&BeanDefinition> {
        self.beans.get(module).ok_or_else(|| {
            CoreError::invalid_argument(format!("Module {} does not exist", module.legacy_name()))
        })
    }

    async fn get_data(
        &self,
        bean: &BeanDefinition,
        criteria: &Criteria,
        offset: i64,
        limit: i64,
        sort: &Sort,
    ) -> Result<ListViewData> {
        let legacy_criteria = self.build_legacy_criteria(criteria, sort);
        self.find(criteria.search_type(), bean, offset, limit, &legacy_criteria)
            .await
    }

    async fn find(
        &self,
        search_type: &str,
        bean: &BeanDefinition,
        offset: i64,
        limit: i64,
        criteria: &LegacyCriteria,
    ) -> Result<ListViewData> {
        let search_form = SearchForm::new(bean, search_type).populate_from_array(criteria);
        let filter = search_form.build_filter_clause();
        let params = SortingParams::from_criteria(criteria);
        let filter_fields = bean.filter_fields();

        tracing::debug!(
            module = bean.module_name(),
            search_tab = %search_form.search_tab(),
            filter = %filter,
            offset,
            limit,
            "Querying legacy list view"
        );

        self.data_port
            .get(bean, &filter, offset, limit, &filter_fields, &params)
            .await
    }

    fn current_page_has_no_records(list_view_data: &ListViewData) -> bool {
        list_view_data.page_data.offsets.is_past_end()
    }

    fn get_meta(page_data: PageData) -> ListMeta {
        ListMeta {
            offsets: page_data.offsets,
            ordering: page_data.ordering,
        }
    }

    fn get_records(&self, bean: &BeanDefinition, data: Vec<LegacyRow>) -> Result<Vec<Record>> {
        let module = self.module_name_mapper.to_front_end(bean.module_name())?;

        Ok(data
            .into_iter()
            .map(|row| {
                let mut attributes: Attributes = row
                    .into_iter()
                    .map(|(key, value)| (key.to_lowercase(), value))
                    .collect();
                let id = attributes.remove("id").unwrap_or_default();

                Record::new(bean.object_name.clone(), module.clone(), id, attributes)
            })
            .collect())
    }
}

#[async_trait]
impl RecordListProvider for RecordListHandler {
    fn handler_key(&self) -> &'static str {
        Self::HANDLER_KEY
    }

    async fn get_list(
        &self,
        module_name: &str,
        criteria: &Criteria,
        offset: i64,
        limit: i64,
        sort: &Sort,
    ) -> Result<RecordList> {
        let _scope = self.scope.enter(Self::HANDLER_KEY);

        let module = self.validate_module_name(module_name)?;
        let bean = self.new_bean_safe(module)?;
        let (offset, limit) = resolve_paging(offset, limit, self.default_limit);

        let mut list_view_data = self.get_data(bean, criteria, offset, limit, sort).await?;

        if Self::current_page_has_no_records(&list_view_data) {
            tracing::info!(
                module = module.legacy_name(),
                current = list_view_data.page_data.offsets.current,
                total = list_view_data.page_data.offsets.total,
                "Requested page is past the last record, re-querying from the first page"
            );
            list_view_data = self.get_data(bean, criteria, 0, limit, sort).await?;
        }

        let ListViewData { data, page_data } = list_view_data;
        let records = self.get_records(bean, data)?;

        Ok(RecordList::new(
            module.legacy_name(),
            Self::get_meta(page_data),
            records,
        ))
    }
}
