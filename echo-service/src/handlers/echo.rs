use axum::Json;
use service_core::validation::ValidatedJson;

use crate::dtos::{EchoRequest, MessageResponse};

#[utoipa::path(
    post,
    path = "/echo",
    request_body = EchoRequest,
    responses(
        (status = 200, description = "Message echoed back with prefix", body = MessageResponse),
        (
            status = 422,
            description = "Validation error",
            body = service_core::validation::ValidationErrorResponse
        )
    ),
    tag = "Echo"
)]
#[tracing::instrument(skip_all)]
pub async fn echo_message(
    ValidatedJson(request): ValidatedJson<EchoRequest>,
) -> Json<MessageResponse> {
    Json(request.reply())
}
