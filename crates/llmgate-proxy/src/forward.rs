//! Request forwarding to the resolved upstream.
//!
//! Each inbound request produces exactly one outbound POST. The outcome is
//! either an [`UpstreamReply`] to relay or a classified [`GatewayError`];
//! the HTTP layer decides how either is rendered.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use llmgate_core::{GatewayConfig, GatewayError, JsonBody, Upstream, UpstreamTarget};
use reqwest::{
    Client,
    header::{AUTHORIZATION, CONTENT_TYPE},
};
use serde_json::Value;
use tracing::{debug, warn};

/// Successful upstream answer: 2xx status plus its parsed JSON body.
#[derive(Debug, Clone, PartialEq)]
pub struct UpstreamReply {
    pub status: u16,
    pub body: Value,
}

impl IntoResponse for UpstreamReply {
    fn into_response(self) -> Response {
        let status = StatusCode::from_u16(self.status).unwrap_or(StatusCode::OK);
        (status, Json(self.body)).into_response()
    }
}

/// Build the HTTP client used for all upstream calls.
///
/// The configured timeout bounds each call end to end.
pub fn build_client(config: &GatewayConfig) -> reqwest::Result<Client> {
    Client::builder().timeout(config.upstream_timeout).build()
}

/// POST `body` as JSON to `target`, optionally with an `Authorization` header.
///
/// No retries. Non-success statuses, transport failures and undecodable
/// success bodies all come back as errors.
pub async fn forward_json(
    client: &Client,
    target: &UpstreamTarget,
    authorization: Option<&str>,
    body: &JsonBody,
) -> Result<UpstreamReply, GatewayError> {
    let upstream = target.upstream;
    debug!(%upstream, url = %target.url, "Forwarding request");

    let mut req_builder = client
        .post(&target.url)
        .header(CONTENT_TYPE, "application/json")
        .json(body);

    if let Some(authorization) = authorization {
        req_builder = req_builder.header(AUTHORIZATION, authorization);
    }

    let response = req_builder
        .send()
        .await
        .map_err(|e| classify(upstream, &e))?;

    let status = response.status();

    if !status.is_success() {
        let text = response.text().await.map_err(|e| classify(upstream, &e))?;
        warn!(%upstream, status = status.as_u16(), "Upstream returned an error status");
        return Err(GatewayError::UpstreamStatus {
            upstream,
            status: status.as_u16(),
            body: text,
        });
    }

    let body = response
        .json::<Value>()
        .await
        .map_err(|e| classify(upstream, &e))?;

    debug!(%upstream, status = status.as_u16(), "Upstream request succeeded");
    Ok(UpstreamReply {
        status: status.as_u16(),
        body,
    })
}

/// Map a client error onto the gateway taxonomy.
///
/// Connection failures take priority over timeouts, so a connect timeout is
/// reported as a connection failure.
fn classify(upstream: Upstream, err: &reqwest::Error) -> GatewayError {
    if err.is_connect() {
        warn!(%upstream, "Failed to connect to upstream: {err}");
        GatewayError::UpstreamConnection(upstream)
    } else if err.is_timeout() {
        warn!(%upstream, "Upstream request timed out: {err}");
        GatewayError::UpstreamTimeout(upstream)
    } else {
        warn!(%upstream, "Upstream request failed: {err}");
        GatewayError::Unclassified(err.to_string())
    }
}
