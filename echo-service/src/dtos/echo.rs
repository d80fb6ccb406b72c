use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// Prepended to every echoed message.
pub const ECHO_PREFIX: &str = "Api says: ";

/// Fixed reply of the `/test` endpoint.
pub const HELLO_MESSAGE: &str = "Hello, World!";

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct EchoRequest {
    /// Any string, including the empty string.
    #[validate(required(message = "Field required"))]
    #[schema(value_type = String, example = "hi")]
    pub message: Option<String>,
}

impl EchoRequest {
    pub fn reply(&self) -> MessageResponse {
        // Presence is enforced by `validate()` before handlers see the request.
        MessageResponse::echo(self.message.as_deref().unwrap_or_default())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct MessageResponse {
    #[schema(example = "Hello, World!")]
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    pub fn hello() -> Self {
        Self::new(HELLO_MESSAGE)
    }

    pub fn echo(message: &str) -> Self {
        Self::new(format!("{}{}", ECHO_PREFIX, message))
    }
}
