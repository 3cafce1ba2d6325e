//! CLI entry point - the composition root.
//!
//! Configuration is read exactly once here and passed down; nothing else in
//! the process touches the environment.

use clap::Parser;
use llmgate_cli::{Cli, init_tracing};
use llmgate_core::GatewayConfig;
use tokio::net::TcpListener;
use tokio_util::sync::CancellationToken;
use tracing::{info, warn};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables before reading any configuration
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = cli.apply(GatewayConfig::from_env()?);

    init_tracing(config.debug);

    let addr = config.bind_address();
    info!("Starting CORS proxy server for Ollama...");
    info!("Server will run on http://{addr}");
    info!("Make sure Ollama is running on {}", config.ollama_base_url);

    let listener = TcpListener::bind(&addr).await?;

    let cancel = CancellationToken::new();
    tokio::spawn({
        let cancel = cancel.clone();
        async move {
            if let Err(e) = tokio::signal::ctrl_c().await {
                warn!("Failed to listen for shutdown signal: {e}");
                return;
            }
            info!("Shutdown signal received");
            cancel.cancel();
        }
    });

    llmgate_proxy::serve(listener, config, cancel).await
}
