//! Shared helpers for gateway integration tests.

#![allow(dead_code)]

use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use axum::http::{HeaderMap, Request, StatusCode, header};
use http_body_util::BodyExt;
use llmgate_core::GatewayConfig;
use llmgate_proxy::{AppState, build_client, create_router};
use serde_json::Value;
use tower::ServiceExt;

/// Build a router for `config` with a real upstream client.
pub fn app(config: GatewayConfig) -> Router {
    let client = build_client(&config).expect("client should build");
    create_router(AppState {
        client,
        config: Arc::new(config),
    })
}

/// A base URL nothing is listening on.
pub fn unreachable_base_url() -> String {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("bind ephemeral port");
    let port = listener.local_addr().expect("local addr").port();
    drop(listener);
    format!("http://127.0.0.1:{port}")
}

/// `POST uri` with a JSON body.
pub fn post_json(uri: &str, body: &Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

/// Send `request` through the router and decode the JSON response.
///
/// An empty body decodes to `Value::Null`.
pub async fn send(app: &Router, request: Request<Body>) -> (StatusCode, HeaderMap, Value) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let headers = response.headers().clone();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).expect("gateway responses are JSON")
    };
    (status, headers, body)
}
