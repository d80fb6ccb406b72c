pub mod echo;
pub mod health;

pub use echo::echo_message;
pub use health::health_check;

use axum::{http::Uri, Json};
use service_core::error::AppError;
use utoipa::OpenApi;

use crate::ApiDoc;

/// Fallback for unknown routes.
pub async fn not_found(uri: Uri) -> AppError {
    tracing::debug!(path = %uri.path(), "No route matched");
    AppError::NotFound(anyhow::anyhow!("Not Found"))
}

/// Fallback for known paths hit with an unsupported method.
pub async fn method_not_allowed() -> AppError {
    AppError::MethodNotAllowed
}

pub async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}
