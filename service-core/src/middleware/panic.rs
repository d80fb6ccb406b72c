use std::any::Any;

use axum::response::{IntoResponse, Response};
use tower_http::catch_panic::CatchPanicLayer;

use crate::error::AppError;

type PanicPayload = Box<dyn Any + Send + 'static>;

/// Turn a handler panic into the standard 500 error body.
pub fn panic_response(payload: PanicPayload) -> Response {
    let detail = if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = payload.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "unknown panic payload".to_string()
    };

    AppError::InternalError(anyhow::anyhow!("Handler panicked: {}", detail)).into_response()
}

pub fn catch_panic_layer() -> CatchPanicLayer<fn(PanicPayload) -> Response> {
    CatchPanicLayer::custom(panic_response as fn(PanicPayload) -> Response)
}
