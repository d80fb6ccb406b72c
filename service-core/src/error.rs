use axum::{
    Json,
    extract::rejection::BytesRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;

use crate::validation::{FieldError, field_errors};

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Validation error: {} field error(s)", .0.len())]
    ValidationError(Vec<FieldError>),

    #[error("Request body rejected: {0}")]
    BodyRejected(BytesRejection),

    #[error("Not found: {0}")]
    NotFound(anyhow::Error),

    #[error("Method not allowed")]
    MethodNotAllowed,

    #[error("Internal server error: {0}")]
    InternalError(#[from] anyhow::Error),

    #[error("Configuration error: {0}")]
    ConfigError(anyhow::Error),
}

impl From<validator::ValidationErrors> for AppError {
    fn from(err: validator::ValidationErrors) -> Self {
        AppError::ValidationError(field_errors(&err))
    }
}

impl From<config::ConfigError> for AppError {
    fn from(err: config::ConfigError) -> Self {
        AppError::ConfigError(anyhow::Error::new(err))
    }
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        AppError::InternalError(anyhow::Error::new(err))
    }
}

/// `{"detail": ...}` envelope shared by every error response.
#[derive(Serialize)]
struct ErrorResponse<T: Serialize> {
    detail: T,
}

fn detail<T: Serialize>(status: StatusCode, detail: T) -> Response {
    (status, Json(ErrorResponse { detail })).into_response()
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::ValidationError(errors) => {
                tracing::debug!(errors = ?errors, "Request failed validation");
                detail(StatusCode::UNPROCESSABLE_ENTITY, errors)
            }
            AppError::BodyRejected(rejection) => detail(rejection.status(), rejection.body_text()),
            AppError::NotFound(err) => detail(StatusCode::NOT_FOUND, err.to_string()),
            AppError::MethodNotAllowed => {
                detail(StatusCode::METHOD_NOT_ALLOWED, "Method Not Allowed")
            }
            AppError::InternalError(err) => {
                tracing::error!(error = ?err, "Internal server error");
                detail(StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error")
            }
            AppError::ConfigError(err) => {
                tracing::error!(error = %err, "Configuration error");
                detail(StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error")
            }
        }
    }
}
