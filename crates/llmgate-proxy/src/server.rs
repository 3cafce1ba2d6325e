//! Gateway HTTP server.
//!
//! Routes:
//! - `GET /health`
//! - `POST`/`OPTIONS /api/generate` (Ollama)
//! - `POST`/`OPTIONS /api/openai` (OpenAI-compatible chat completions)

use std::sync::Arc;

use axum::{
    Json, Router,
    extract::DefaultBodyLimit,
    http::HeaderValue,
    response::IntoResponse,
    routing::{get, options, post},
};
use llmgate_core::{CorsConfig, GatewayConfig};
use reqwest::Client;
use tokio::net::TcpListener;
use tokio_util::sync::CancellationToken;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::{debug, info};

use crate::forward::build_client;
use crate::handlers;
use crate::models::HealthResponse;

/// State shared by all handlers.
#[derive(Clone)]
pub struct AppState {
    /// Client for upstream calls.
    pub client: Client,
    /// Immutable startup configuration.
    pub config: Arc<GatewayConfig>,
}

/// Build the origin policy applied to forwarded and health responses.
///
/// Unlisted origins are still served; they just receive no
/// `Access-Control-Allow-Origin` header.
fn build_cors_layer(config: &CorsConfig) -> CorsLayer {
    match config {
        CorsConfig::AllowAll => CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any),
        CorsConfig::AllowOrigins(origins) => {
            let allowed: Vec<HeaderValue> = origins.iter().filter_map(|o| o.parse().ok()).collect();
            CorsLayer::new()
                .allow_origin(allowed)
                .allow_methods(Any)
                .allow_headers(Any)
        }
    }
}

/// Create the gateway router.
///
/// The origin policy wraps the `POST` and `GET` endpoints only. The explicit
/// `OPTIONS` handlers answer with their own fixed headers. Request bodies
/// are not size-limited; they are forwarded whole.
pub fn create_router(state: AppState) -> Router {
    let cors = build_cors_layer(&state.config.cors);

    Router::new()
        .route("/health", get(health_check).layer(cors.clone()))
        .route("/api/generate", post(handlers::generate).layer(cors.clone()))
        .route("/api/generate", options(handlers::generate_preflight))
        .route("/api/openai", post(handlers::openai).layer(cors))
        .route("/api/openai", options(handlers::openai_preflight))
        .layer(DefaultBodyLimit::disable())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Run the gateway on `listener` until `cancel` fires.
///
/// In-flight requests are drained before returning.
pub async fn serve(
    listener: TcpListener,
    config: GatewayConfig,
    cancel: CancellationToken,
) -> anyhow::Result<()> {
    let addr = listener.local_addr()?;
    info!("Proxy server starting on {addr}");

    let client = build_client(&config)?;
    debug!(cors = ?config.cors, timeout = ?config.upstream_timeout, "Gateway configuration");

    let app = create_router(AppState {
        client,
        config: Arc::new(config),
    });

    info!("Proxy listening on http://{addr}");

    axum::serve(listener, app)
        .with_graceful_shutdown(cancel.cancelled_owned())
        .await?;

    info!("Proxy server shut down");
    Ok(())
}

/// Health check endpoint.
async fn health_check() -> impl IntoResponse {
    Json(HealthResponse::healthy())
}
