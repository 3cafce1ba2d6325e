//! # llmgate-proxy
//!
//! Axum adapter for the llmgate forwarding gateway. Receives JSON requests,
//! forwards them to a local Ollama daemon or an OpenAI-compatible completion
//! API, and relays the upstream status and body. Transport failures are
//! turned into fixed JSON error payloads.

#![deny(unsafe_code)]

pub mod forward;
pub mod handlers;
pub mod models;
pub mod server;

pub use forward::{UpstreamReply, build_client, forward_json};
pub use server::{AppState, create_router, serve};
