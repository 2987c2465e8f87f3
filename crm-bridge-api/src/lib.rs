//! HTTP surface of the CRM bridge: record list endpoints and legacy view redirects.

pub mod dto;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod observability;

pub use dto::*;
pub use error::{ApiError, ApiResult};
pub use middleware::*;

use axum::{
    routing::{get, post},
    Router,
};
use crm_bridge_core::{RecordListProvider, RouteConverter};
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub record_lists: Arc<dyn RecordListProvider>,
    pub route_converter: Arc<dyn RouteConverter>,
    /// Install base of the legacy application, e.g. `/suiteinstance`.
    pub base_path: Option<String>,
}

impl AppState {
    pub fn new(
        record_lists: Arc<dyn RecordListProvider>,
        route_converter: Arc<dyn RouteConverter>,
    ) -> Self {
        Self {
            record_lists,
            route_converter,
            base_path: None,
        }
    }

    pub fn with_base_path(mut self, base_path: impl Into<String>) -> Self {
        let base_path = base_path.into();
        self.base_path = if base_path.trim_matches('/').is_empty() {
            None
        } else {
            Some(base_path)
        };
        self
    }
}

/// Routes plus the legacy redirect, which also covers unmatched paths.
pub fn routes(state: AppState) -> Router {
    Router::new()
        .route("/health", get(handlers::health_check))
        .route("/api/records/:module", get(handlers::records::list))
        .route("/api/records/:module/list", post(handlers::records::search))
        .fallback(handlers::not_found)
        .layer(axum::middleware::from_fn_with_state(
            state.clone(),
            legacy_redirect_middleware,
        ))
        .with_state(state)
}
