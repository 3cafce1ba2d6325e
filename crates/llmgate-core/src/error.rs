//! Error taxonomy for the forwarding gateway.
//!
//! Every variant is handled inside the request that produced it; the HTTP
//! adapter turns it into a status code and a JSON body. Nothing here ever
//! escalates past a single request.

use thiserror::Error;

/// Which upstream a request was routed to.
///
/// Carries the upstream-specific wording used in error payloads.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Upstream {
    /// Local Ollama daemon (`/api/generate`).
    Ollama,
    /// OpenAI-compatible cloud completion API (`/chat/completions`).
    OpenAi,
}

impl Upstream {
    /// Human-readable upstream name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Ollama => "Ollama",
            Self::OpenAi => "OpenAI",
        }
    }

    /// Diagnostic shown when the upstream cannot be reached.
    pub const fn connection_hint(self) -> &'static str {
        match self {
            Self::Ollama => {
                "Could not connect to Ollama. Make sure Ollama is running on localhost:11434"
            }
            Self::OpenAi => "Could not connect to OpenAI. Check network access.",
        }
    }

    /// Diagnostic shown when the upstream call exceeds its timeout.
    pub const fn timeout_hint(self) -> &'static str {
        match self {
            Self::Ollama => "Ollama request timed out",
            Self::OpenAi => "OpenAI request timed out",
        }
    }
}

impl std::fmt::Display for Upstream {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Request-level failure of a forwarding route.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GatewayError {
    /// Body parsed to a JSON value that is not an object.
    #[error("Invalid request body")]
    InvalidBody,

    /// Resolved upstream base URL has no `http://` or `https://` scheme.
    #[error("Invalid {0} base URL")]
    InvalidUpstreamUrl(Upstream),

    /// No `Authorization` header and no configured API key.
    #[error("Missing {0} API key")]
    MissingCredential(Upstream),

    /// Upstream refused or dropped the connection.
    #[error("Connection failed")]
    UpstreamConnection(Upstream),

    /// Upstream did not answer within the configured timeout.
    #[error("Request timeout")]
    UpstreamTimeout(Upstream),

    /// Upstream answered with a non-success status.
    #[error("{upstream} API error: {status}")]
    UpstreamStatus {
        upstream: Upstream,
        status: u16,
        body: String,
    },

    /// Anything else that went wrong while forwarding.
    #[error("Proxy server error")]
    Unclassified(String),
}

impl GatewayError {
    /// HTTP status code this failure is reported with.
    ///
    /// Upstream status errors relay the upstream's own code.
    pub const fn status_code(&self) -> u16 {
        match self {
            Self::InvalidBody | Self::InvalidUpstreamUrl(_) => 400,
            Self::MissingCredential(_) => 401,
            Self::UpstreamConnection(_) => 503,
            Self::UpstreamTimeout(_) => 504,
            Self::UpstreamStatus { status, .. } => *status,
            Self::Unclassified(_) => 500,
        }
    }

    /// Diagnostic text accompanying the error, if any.
    pub fn message(&self) -> Option<&str> {
        match self {
            Self::InvalidBody | Self::InvalidUpstreamUrl(_) | Self::MissingCredential(_) => None,
            Self::UpstreamConnection(upstream) => Some(upstream.connection_hint()),
            Self::UpstreamTimeout(upstream) => Some(upstream.timeout_hint()),
            Self::UpstreamStatus { body, .. } => Some(body),
            Self::Unclassified(reason) => Some(reason),
        }
    }
}

/// Startup configuration failure.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// `PROXY_PORT` is not a valid TCP port.
    #[error("Invalid PROXY_PORT value: {0:?}")]
    InvalidPort(String),
}
