pub mod records;

use axum::http::Uri;

use crate::error::ApiError;

pub async fn health_check() -> &'static str {
    "OK"
}

pub async fn not_found(uri: Uri) -> ApiError {
    ApiError::NotFound(format!("No route for {}", uri.path()))
}
