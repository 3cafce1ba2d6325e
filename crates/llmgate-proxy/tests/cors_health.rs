//! Integration tests for the health endpoint, preflight handling and the
//! origin allow-list.

mod common;

use axum::body::Body;
use axum::http::{Method, Request, StatusCode, header};
use llmgate_core::{CorsConfig, GatewayConfig};
use serde_json::json;

use common::{app, send, unreachable_base_url};

fn get_health(origin: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder().method(Method::GET).uri("/health");
    if let Some(origin) = origin {
        builder = builder.header(header::ORIGIN, origin);
    }
    builder.body(Body::empty()).unwrap()
}

fn options(uri: &str) -> Request<Body> {
    Request::builder()
        .method(Method::OPTIONS)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

#[tokio::test]
async fn health_is_independent_of_upstreams() {
    let config = GatewayConfig {
        ollama_base_url: unreachable_base_url(),
        openai_api_base: unreachable_base_url(),
        ..GatewayConfig::default()
    };
    let app = app(config);

    let (status, _, body) = send(&app, get_health(None)).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({"status": "healthy", "message": "Proxy server is running"})
    );
}

#[tokio::test]
async fn generate_preflight_is_acknowledged() {
    let app = app(GatewayConfig::default());

    let (status, headers, body) = send(&app, options("/api/generate")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"status": "ok"}));
    assert_eq!(headers[header::ACCESS_CONTROL_ALLOW_ORIGIN], "*");
    assert_eq!(headers[header::ACCESS_CONTROL_ALLOW_HEADERS], "Content-Type");
    assert_eq!(headers[header::ACCESS_CONTROL_ALLOW_METHODS], "POST, OPTIONS");
}

#[tokio::test]
async fn openai_preflight_allows_authorization() {
    let config = GatewayConfig {
        cors: CorsConfig::AllowOrigins(vec!["https://app.test".to_string()]),
        ..GatewayConfig::default()
    };
    let app = app(config);

    let (status, headers, body) = send(&app, options("/api/openai")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"status": "ok"}));
    assert_eq!(headers[header::ACCESS_CONTROL_ALLOW_ORIGIN], "*");
    assert_eq!(
        headers[header::ACCESS_CONTROL_ALLOW_HEADERS],
        "Content-Type, Authorization"
    );
}

#[tokio::test]
async fn allow_all_policy_sets_wildcard_origin() {
    let app = app(GatewayConfig::default());

    let (_, headers, _) = send(&app, get_health(Some("https://anywhere.test"))).await;

    assert_eq!(headers[header::ACCESS_CONTROL_ALLOW_ORIGIN], "*");
}

#[tokio::test]
async fn allow_list_echoes_only_listed_origins() {
    let config = GatewayConfig {
        cors: CorsConfig::AllowOrigins(vec![
            "https://app.test".to_string(),
            "http://localhost:3000".to_string(),
        ]),
        ..GatewayConfig::default()
    };
    let app = app(config);

    let (status, headers, _) = send(&app, get_health(Some("http://localhost:3000"))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        headers[header::ACCESS_CONTROL_ALLOW_ORIGIN],
        "http://localhost:3000"
    );

    let (status, headers, _) = send(&app, get_health(Some("https://evil.test"))).await;
    assert_eq!(status, StatusCode::OK);
    assert!(!headers.contains_key(header::ACCESS_CONTROL_ALLOW_ORIGIN));
}

#[tokio::test]
async fn unknown_route_is_not_found() {
    let app = app(GatewayConfig::default());
    let (status, _, _) = send(&app, options("/api/unknown")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}
