//! Gateway configuration.
//!
//! Everything here is read once at startup and never mutated afterwards.
//! Handlers receive the resulting [`GatewayConfig`] through shared state
//! instead of reading the environment themselves.

use std::time::Duration;

use crate::error::ConfigError;

/// Fallback Ollama base URL when neither the request nor the environment names one.
pub const DEFAULT_OLLAMA_BASE_URL: &str = "http://localhost:11434";

/// Fallback base URL for the OpenAI-compatible completion API.
pub const DEFAULT_OPENAI_API_BASE: &str = "https://api.openai.com/v1";

/// Default listener host.
pub const DEFAULT_PROXY_HOST: &str = "127.0.0.1";

/// Default listener port.
pub const DEFAULT_PROXY_PORT: u16 = 8080;

/// Upper bound on a single upstream call.
pub const UPSTREAM_TIMEOUT: Duration = Duration::from_secs(120);

/// Origin allow-list applied to forwarded and health responses.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum CorsConfig {
    /// Allow all origins.
    #[default]
    AllowAll,
    /// Allow only the listed origins.
    AllowOrigins(Vec<String>),
}

impl CorsConfig {
    /// Parse a comma-separated origin list.
    ///
    /// Entries are trimmed and empty ones dropped. No entries at all means
    /// every origin is allowed.
    pub fn from_origin_list(raw: Option<&str>) -> Self {
        let origins: Vec<String> = raw
            .unwrap_or_default()
            .split(',')
            .map(str::trim)
            .filter(|origin| !origin.is_empty())
            .map(str::to_string)
            .collect();

        if origins.is_empty() {
            Self::AllowAll
        } else {
            Self::AllowOrigins(origins)
        }
    }
}

/// Immutable process-wide configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GatewayConfig {
    /// Origin policy (`CORS_ORIGINS`).
    pub cors: CorsConfig,
    /// Default Ollama base URL (`OLLAMA_BASE_URL`).
    pub ollama_base_url: String,
    /// Fallback bearer key (`OPENAI_API_KEY`), trimmed; `None` when empty.
    pub openai_api_key: Option<String>,
    /// Completion API base URL (`OPENAI_API_BASE`).
    pub openai_api_base: String,
    /// Timeout applied to every upstream call.
    pub upstream_timeout: Duration,
    /// Listener host (`PROXY_HOST`).
    pub host: String,
    /// Listener port (`PROXY_PORT`).
    pub port: u16,
    /// Verbose logging (`PROXY_DEBUG`).
    pub debug: bool,
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            cors: CorsConfig::AllowAll,
            ollama_base_url: DEFAULT_OLLAMA_BASE_URL.to_string(),
            openai_api_key: None,
            openai_api_base: DEFAULT_OPENAI_API_BASE.to_string(),
            upstream_timeout: UPSTREAM_TIMEOUT,
            host: DEFAULT_PROXY_HOST.to_string(),
            port: DEFAULT_PROXY_PORT,
            debug: false,
        }
    }
}

impl GatewayConfig {
    /// Build the configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build the configuration from an arbitrary key lookup.
    ///
    /// A variable that is set, even to an empty string, replaces the
    /// built-in default for `OLLAMA_BASE_URL` and `OPENAI_API_BASE`.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let port = match lookup("PROXY_PORT") {
            Some(raw) => raw
                .trim()
                .parse::<u16>()
                .map_err(|_| ConfigError::InvalidPort(raw.clone()))?,
            None => defaults.port,
        };

        let openai_api_key = lookup("OPENAI_API_KEY")
            .map(|key| key.trim().to_string())
            .filter(|key| !key.is_empty());

        Ok(Self {
            cors: CorsConfig::from_origin_list(lookup("CORS_ORIGINS").as_deref()),
            ollama_base_url: lookup("OLLAMA_BASE_URL").unwrap_or(defaults.ollama_base_url),
            openai_api_key,
            openai_api_base: lookup("OPENAI_API_BASE").unwrap_or(defaults.openai_api_base),
            upstream_timeout: defaults.upstream_timeout,
            host: lookup("PROXY_HOST").unwrap_or(defaults.host),
            port,
            debug: lookup("PROXY_DEBUG").is_some_and(|raw| parse_flag(&raw)),
        })
    }

    /// Address the listener binds to.
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Boolean-like environment flag: `1`, `true`, `yes` or `on`, any case.
fn parse_flag(raw: &str) -> bool {
    matches!(
        raw.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}
