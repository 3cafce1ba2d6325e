//! Upstream target resolution.
//!
//! Turns configured defaults and per-request overrides into the exact URL a
//! forwarding route posts to.

use serde_json::Value;
use tracing::debug;

use crate::body::JsonBody;
use crate::error::{GatewayError, Upstream};

/// Path of the Ollama generate endpoint.
pub const GENERATE_PATH: &str = "/api/generate";

/// Path of the chat completion endpoint, relative to the API base.
pub const COMPLETIONS_PATH: &str = "/chat/completions";

/// Body key that overrides the Ollama base URL for one request.
pub const BASE_URL_OVERRIDE_KEY: &str = "ollama_base_url";

/// Fully resolved destination of one forwarded call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpstreamTarget {
    pub upstream: Upstream,
    pub url: String,
}

/// Remove the base URL override from the body and return it if usable.
///
/// The key is always stripped. Empty strings, `null` and non-string values
/// are ignored so the caller falls back to its default.
pub fn take_base_url_override(body: &mut JsonBody) -> Option<String> {
    match body.remove(BASE_URL_OVERRIDE_KEY)? {
        Value::String(url) if !url.is_empty() => Some(url),
        ignored => {
            debug!(value = %ignored, "Ignoring unusable {BASE_URL_OVERRIDE_KEY} override");
            None
        }
    }
}

/// Resolve the generate URL for a request body.
///
/// Precedence is the body override, then `default_base`. The override key is
/// stripped from `body` before it is forwarded. Fails without touching the
/// network if the chosen base has no HTTP scheme.
pub fn resolve_generate_target(
    body: &mut JsonBody,
    default_base: &str,
) -> Result<UpstreamTarget, GatewayError> {
    let base = take_base_url_override(body).unwrap_or_else(|| default_base.to_string());

    if !has_http_scheme(&base) {
        return Err(GatewayError::InvalidUpstreamUrl(Upstream::Ollama));
    }

    let base = base.trim_end_matches('/');
    let url = if base.ends_with(GENERATE_PATH) {
        base.to_string()
    } else {
        format!("{base}{GENERATE_PATH}")
    };

    Ok(UpstreamTarget {
        upstream: Upstream::Ollama,
        url,
    })
}

/// Resolve the chat completion URL from the configured API base.
pub fn resolve_completions_target(api_base: &str) -> UpstreamTarget {
    UpstreamTarget {
        upstream: Upstream::OpenAi,
        url: format!("{}{COMPLETIONS_PATH}", api_base.trim_end_matches('/')),
    }
}

fn has_http_scheme(url: &str) -> bool {
    url.starts_with("http://") || url.starts_with("https://")
}
