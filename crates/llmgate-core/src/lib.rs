//! # llmgate-core
//!
//! Pure request-translation logic for the llmgate forwarding gateway:
//! configuration, inbound body parsing, upstream target resolution,
//! bearer credential resolution and the error taxonomy.
//!
//! This crate has no HTTP server or client dependencies. The Axum adapter
//! in `llmgate-proxy` performs the actual network I/O.

pub mod body;
pub mod config;
pub mod credential;
pub mod error;
pub mod upstream;

pub use body::{JsonBody, is_json_content_type, parse_body};
pub use config::{
    CorsConfig, DEFAULT_OLLAMA_BASE_URL, DEFAULT_OPENAI_API_BASE, DEFAULT_PROXY_HOST,
    DEFAULT_PROXY_PORT, GatewayConfig, UPSTREAM_TIMEOUT,
};
pub use credential::resolve_authorization;
pub use error::{ConfigError, GatewayError, Upstream};
pub use upstream::{
    BASE_URL_OVERRIDE_KEY, COMPLETIONS_PATH, GENERATE_PATH, UpstreamTarget,
    resolve_completions_target, resolve_generate_target, take_base_url_override,
};
