use axum::Json;

use crate::dtos::MessageResponse;

/// Liveness check. Always answers while the process is serving.
#[utoipa::path(
    get,
    path = "/test",
    responses(
        (status = 200, description = "Service is running", body = MessageResponse)
    ),
    tag = "Echo"
)]
pub async fn health_check() -> Json<MessageResponse> {
    Json(MessageResponse::hello())
}
