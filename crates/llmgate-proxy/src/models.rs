//! Response bodies produced by the gateway itself.
//!
//! Upstream payloads are relayed as opaque JSON and never modelled here.

use llmgate_core::GatewayError;
use serde::Serialize;

/// Error body returned for every failed forward.
///
/// `message` carries diagnostic text when there is any (upstream body,
/// connection hint, failure description).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl ErrorResponse {
    /// Create an error response without diagnostic text.
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            message: None,
        }
    }

    /// Create an error response with diagnostic text.
    pub fn with_message(error: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            message: Some(message.into()),
        }
    }
}

impl From<&GatewayError> for ErrorResponse {
    fn from(err: &GatewayError) -> Self {
        match err.message() {
            Some(message) => Self::with_message(err.to_string(), message),
            None => Self::new(err.to_string()),
        }
    }
}

/// Body of `GET /health`.
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub message: &'static str,
}

impl HealthResponse {
    pub const fn healthy() -> Self {
        Self {
            status: "healthy",
            message: "Proxy server is running",
        }
    }
}

/// Body of a preflight acknowledgement.
#[derive(Debug, Clone, Serialize)]
pub struct PreflightResponse {
    pub status: &'static str,
}

impl PreflightResponse {
    pub const fn ok() -> Self {
        Self { status: "ok" }
    }
}
