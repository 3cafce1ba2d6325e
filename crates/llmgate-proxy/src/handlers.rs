//! Route handlers for the forwarding endpoints.

use axum::{
    Json,
    extract::State,
    http::{
        HeaderMap, StatusCode,
        header::{
            ACCESS_CONTROL_ALLOW_HEADERS, ACCESS_CONTROL_ALLOW_METHODS,
            ACCESS_CONTROL_ALLOW_ORIGIN, AUTHORIZATION, CONTENT_TYPE,
        },
    },
    response::{IntoResponse, Response},
};
use bytes::Bytes;
use llmgate_core::{
    GatewayError, parse_body, resolve_authorization, resolve_completions_target,
    resolve_generate_target,
};
use tracing::debug;

use crate::forward::{UpstreamReply, forward_json};
use crate::models::{ErrorResponse, PreflightResponse};
use crate::server::AppState;

/// Headers a browser may send to the generate route.
const GENERATE_ALLOW_HEADERS: &str = "Content-Type";

/// Headers a browser may send to the completion route.
const OPENAI_ALLOW_HEADERS: &str = "Content-Type, Authorization";

const ALLOW_METHODS: &str = "POST, OPTIONS";

/// `OPTIONS /api/generate`.
pub async fn generate_preflight() -> Response {
    preflight_response(GENERATE_ALLOW_HEADERS)
}

/// `OPTIONS /api/openai`.
pub async fn openai_preflight() -> Response {
    preflight_response(OPENAI_ALLOW_HEADERS)
}

/// `POST /api/generate` - forward to Ollama.
pub async fn generate(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Bytes,
) -> Response {
    debug!("POST /api/generate");
    relay(forward_generate(&state, &headers, &body).await)
}

/// `POST /api/openai` - forward to the chat completion API.
pub async fn openai(State(state): State<AppState>, headers: HeaderMap, body: Bytes) -> Response {
    debug!("POST /api/openai");
    relay(forward_openai(&state, &headers, &body).await)
}

async fn forward_generate(
    state: &AppState,
    headers: &HeaderMap,
    body: &[u8],
) -> Result<UpstreamReply, GatewayError> {
    let mut payload = parse_body(header_str(headers, CONTENT_TYPE), body)?;
    let target = resolve_generate_target(&mut payload, &state.config.ollama_base_url)?;
    forward_json(&state.client, &target, None, &payload).await
}

async fn forward_openai(
    state: &AppState,
    headers: &HeaderMap,
    body: &[u8],
) -> Result<UpstreamReply, GatewayError> {
    let payload = parse_body(header_str(headers, CONTENT_TYPE), body)?;
    let authorization = resolve_authorization(
        header_str(headers, AUTHORIZATION),
        state.config.openai_api_key.as_deref(),
    )?;
    let target = resolve_completions_target(&state.config.openai_api_base);
    forward_json(&state.client, &target, Some(&authorization), &payload).await
}

/// Render a forwarding outcome.
fn relay(outcome: Result<UpstreamReply, GatewayError>) -> Response {
    match outcome {
        Ok(reply) => reply.into_response(),
        Err(err) => error_response(&err),
    }
}

/// Convert a gateway error to its status code and JSON body.
pub fn error_response(err: &GatewayError) -> Response {
    let status =
        StatusCode::from_u16(err.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    (status, Json(ErrorResponse::from(err))).into_response()
}

fn preflight_response(allow_headers: &'static str) -> Response {
    (
        [
            (ACCESS_CONTROL_ALLOW_ORIGIN, "*"),
            (ACCESS_CONTROL_ALLOW_HEADERS, allow_headers),
            (ACCESS_CONTROL_ALLOW_METHODS, ALLOW_METHODS),
        ],
        Json(PreflightResponse::ok()),
    )
        .into_response()
}

/// Header value as UTF-8; non-UTF-8 values are treated as absent.
fn header_str(headers: &HeaderMap, name: axum::http::HeaderName) -> Option<&str> {
    headers.get(name).and_then(|value| value.to_str().ok())
}
