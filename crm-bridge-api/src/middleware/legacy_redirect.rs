use axum::{
    extract::{Request, State},
    http::{header, HeaderMap, StatusCode},
    middleware::Next,
    response::{IntoResponse, Response},
};
use crm_bridge_core::LegacyRequest;

use crate::AppState;

/// Header set by reverse proxies that mount the bridge under a sub path.
pub const FORWARDED_PREFIX_HEADER: &str = "X-Forwarded-Prefix";

/// Legacy view of a request target. A configured base path wins over the proxy header.
pub fn legacy_request_from(
    path_and_query: &str,
    headers: &HeaderMap,
    base_path: Option<&str>,
) -> LegacyRequest {
    let request = LegacyRequest::from_uri(path_and_query);

    let forwarded = headers
        .get(FORWARDED_PREFIX_HEADER)
        .and_then(|value| value.to_str().ok());

    match base_path.or(forwarded) {
        Some(base) => request.with_base(base),
        None => request,
    }
}

/// Answers legacy `index.php?module=..` view requests with a redirect to the front end.
pub async fn legacy_redirect_middleware(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Response {
    let path_and_query = request
        .uri()
        .path_and_query()
        .map(|pq| pq.as_str())
        .unwrap_or("/");
    let legacy = legacy_request_from(path_and_query, request.headers(), state.base_path.as_deref());

    if !state.route_converter.is_legacy_view_route(&legacy) {
        return next.run(request).await;
    }

    match state.route_converter.convert(&legacy) {
        Ok(route) => {
            tracing::info!(from = %path_and_query, to = %route, "Redirecting legacy view");
            (StatusCode::FOUND, [(header::LOCATION, route)]).into_response()
        }
        Err(err) => {
            tracing::warn!(uri = %path_and_query, error = %err, "Legacy route conversion failed");
            next.run(request).await
        }
    }
}
