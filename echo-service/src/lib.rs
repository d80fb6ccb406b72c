pub mod config;
pub mod dtos;
pub mod handlers;
pub mod startup;

use service_core::validation::{FieldError, ValidationErrorResponse};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    paths(handlers::health::health_check, handlers::echo::echo_message),
    components(schemas(
        dtos::EchoRequest,
        dtos::MessageResponse,
        ValidationErrorResponse,
        FieldError,
    )),
    tags((name = "Echo", description = "Health check and echo endpoints"))
)]
pub struct ApiDoc;
