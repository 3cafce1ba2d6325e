//! Command-line arguments.
//!
//! Flags override the corresponding environment variables for this
//! invocation only.

use clap::Parser;
use llmgate_core::GatewayConfig;

/// Forward JSON requests to Ollama or an OpenAI-compatible API.
#[derive(Debug, Parser)]
#[command(name = "llmgate")]
#[command(about = "CORS-friendly forwarding gateway for Ollama and OpenAI-compatible APIs")]
#[command(version)]
pub struct Cli {
    /// Host to bind to (overrides PROXY_HOST)
    #[arg(long)]
    pub host: Option<String>,

    /// Port to bind to (overrides PROXY_PORT)
    #[arg(short, long)]
    pub port: Option<u16>,

    /// Enable debug logging (overrides PROXY_DEBUG)
    #[arg(short, long)]
    pub debug: bool,
}

impl Cli {
    /// Apply command-line overrides on top of an environment-derived config.
    pub fn apply(&self, mut config: GatewayConfig) -> GatewayConfig {
        if let Some(host) = &self.host {
            config.host.clone_from(host);
        }
        if let Some(port) = self.port {
            config.port = port;
        }
        if self.debug {
            config.debug = true;
        }
        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_parser_builds() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_no_flags_keep_environment_values() {
        let cli = Cli::parse_from(["llmgate"]);
        let config = GatewayConfig {
            host: "0.0.0.0".to_string(),
            port: 9000,
            debug: true,
            ..GatewayConfig::default()
        };
        assert_eq!(cli.apply(config.clone()), config);
    }

    #[test]
    fn test_flags_override_environment_values() {
        let cli = Cli::parse_from(["llmgate", "--host", "0.0.0.0", "-p", "9191", "--debug"]);
        let config = cli.apply(GatewayConfig::default());
        assert_eq!(config.bind_address(), "0.0.0.0:9191");
        assert!(config.debug);
    }
}
