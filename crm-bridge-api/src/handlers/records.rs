use axum::{
    extract::{Path, Query, State},
    Json,
};
use crm_bridge_core::RecordList;
use validator::Validate;

use crate::{dto::*, error::ApiResult, AppState};

pub async fn list(
    State(state): State<AppState>,
    Path(module): Path<String>,
    Query(query): Query<RecordListQuery>,
) -> ApiResult<Json<RecordList>> {
    query.validate()?;

    let list = state
        .record_lists
        .get_list(&module, &query.criteria(), query.offset, query.limit, &query.sort())
        .await?;

    Ok(Json(list))
}

pub async fn search(
    State(state): State<AppState>,
    Path(module): Path<String>,
    Json(payload): Json<RecordListRequest>,
) -> ApiResult<Json<RecordList>> {
    payload.validate()?;

    tracing::debug!(
        module = %module,
        filters = payload.criteria.filters.len(),
        offset = payload.offset,
        limit = payload.limit,
        "Record list search"
    );

    let list = state
        .record_lists
        .get_list(
            &module,
            &payload.criteria,
            payload.offset,
            payload.limit,
            &payload.sort,
        )
        .await?;

    Ok(Json(list))
}
