//! Request-body validation.
//!
//! [`ValidatedJson`] replaces `axum::Json` for endpoints with a declared body
//! shape. It parses the body, runs the `validator` rules of the target type and
//! rejects with [`AppError::ValidationError`] carrying one [`FieldError`] per
//! failure, so the handler only ever sees a value that passed both steps.

use axum::{
    body::Bytes,
    extract::{FromRequest, Request},
};
use serde::{Serialize, de::DeserializeOwned};
use serde_json::error::Category;
use utoipa::ToSchema;
use validator::{Validate, ValidationErrors};

use crate::error::AppError;

/// Root segment of every body-level error location.
pub const BODY_LOC: &str = "body";

/// A single field-level validation failure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct FieldError {
    /// Path to the offending value, starting at `"body"`.
    pub loc: Vec<String>,
    #[schema(example = "Field required")]
    pub msg: String,
    #[serde(rename = "type")]
    #[schema(example = "missing")]
    pub kind: String,
}

impl FieldError {
    pub fn new(loc: Vec<String>, msg: impl Into<String>, kind: impl Into<String>) -> Self {
        Self {
            loc,
            msg: msg.into(),
            kind: kind.into(),
        }
    }

    fn body(segments: impl IntoIterator<Item = String>) -> Vec<String> {
        std::iter::once(BODY_LOC.to_string()).chain(segments).collect()
    }
}

/// Body of every 422 response.
#[derive(Debug, Serialize, ToSchema)]
pub struct ValidationErrorResponse {
    pub detail: Vec<FieldError>,
}

/// Flatten `validator` output into field errors, sorted by field name.
pub fn field_errors(errors: &ValidationErrors) -> Vec<FieldError> {
    let mut out: Vec<FieldError> = errors
        .field_errors()
        .into_iter()
        .flat_map(|(field, errs)| {
            let field = field.to_string();
            errs.iter().map(move |err| {
                let msg = err
                    .message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| format!("Invalid value for {}", field));
                FieldError::new(FieldError::body([field.clone()]), msg, err.code.to_string())
            })
        })
        .collect();

    out.sort_by(|a, b| a.loc.cmp(&b.loc));
    out
}

/// Deserialize a raw JSON body into `T`, reporting failures as field errors.
///
/// An empty body is reported as a missing body; syntax errors as
/// `json_invalid`; shape mismatches carry the path to the offending value.
/// The body is read as a JSON document first, so a repeated object key keeps
/// its last value.
pub fn parse_json_body<T: DeserializeOwned>(bytes: &[u8]) -> Result<T, Vec<FieldError>> {
    if bytes.is_empty() {
        return Err(vec![FieldError::new(
            FieldError::body([]),
            "Field required",
            "missing",
        )]);
    }

    let document: serde_json::Value =
        serde_json::from_slice(bytes).map_err(|err| vec![json_invalid(&err)])?;

    serde_path_to_error::deserialize(document).map_err(|err| vec![from_path_error(err)])
}

fn from_path_error(err: serde_path_to_error::Error<serde_json::Error>) -> FieldError {
    let inner = err.inner();
    match inner.classify() {
        Category::Data => {
            let loc = FieldError::body(err.path().iter().map(|segment| segment.to_string()));
            let msg = strip_position(&inner.to_string());
            let kind = if msg.starts_with("invalid type") {
                "invalid_type"
            } else if msg.starts_with("missing field") {
                "missing"
            } else {
                "value_error"
            };
            FieldError::new(loc, msg, kind)
        }
        Category::Syntax | Category::Eof | Category::Io => json_invalid(inner),
    }
}

fn json_invalid(err: &serde_json::Error) -> FieldError {
    FieldError::new(
        FieldError::body([]),
        format!("JSON decode error: {}", err),
        "json_invalid",
    )
}

// serde_json appends " at line L column C" to data errors.
fn strip_position(msg: &str) -> String {
    match msg.rfind(" at line ") {
        Some(idx) => msg[..idx].to_string(),
        None => msg.to_string(),
    }
}

/// JSON extractor that also runs `validator` rules before the handler.
pub struct ValidatedJson<T>(pub T);

#[axum::async_trait]
impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(AppError::BodyRejected)?;

        let value: T = parse_json_body(&bytes).map_err(AppError::ValidationError)?;
        value.validate()?;

        Ok(ValidatedJson(value))
    }
}
