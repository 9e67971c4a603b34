//! Configuration management for the MCP server.
//!
//! The configuration is assembled once at startup from environment variables
//! (optionally loaded from a `.env` file) and is read-only afterwards.

use super::error::{Error, Result};
use super::transport::TransportConfig;
use serde::{Deserialize, Serialize};

/// Default BatchData API base URL.
pub const DEFAULT_BASE_URL: &str = "https://api.batchdata.com/api/v1";

/// Default timeout for a single BatchData request.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Main configuration structure for the MCP server.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Server identification and metadata.
    pub server: ServerConfig,

    /// Logging configuration.
    pub logging: LoggingConfig,

    /// Transport configuration.
    pub transport: TransportConfig,

    /// BatchData API access.
    pub batchdata: BatchDataConfig,
}

/// Server identification configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// The name of the server as reported to clients.
    pub name: String,

    /// The version of the server.
    pub version: String,
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level filter (e.g., "info", "debug", "trace").
    pub level: String,
}

/// Connection settings for the BatchData API.
#[derive(Clone, Serialize, Deserialize)]
pub struct BatchDataConfig {
    /// Bearer credential sent with every request.
    pub api_key: String,

    /// Base URL that endpoint paths are appended to (no trailing slash).
    pub base_url: String,

    /// Upper bound for a single request, in seconds.
    pub timeout_secs: u64,
}

/// Custom Debug implementation to redact secrets from logs.
impl std::fmt::Debug for BatchDataConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BatchDataConfig")
            .field("api_key", &"[REDACTED]")
            .field("base_url", &self.base_url)
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}

impl BatchDataConfig {
    /// Create a config for the given credential with default URL and timeout.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }

    /// Override the base URL. A trailing slash is dropped.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                name: "batchdata-property-server".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
            },
            logging: LoggingConfig {
                level: "info".to_string(),
            },
            transport: TransportConfig::default(),
            batchdata: BatchDataConfig::new(""),
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// `BATCHDATA_API_KEY` is required. Server settings use the `MCP_` prefix,
    /// for example `MCP_SERVER_NAME` and `MCP_LOG_LEVEL`.
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();

        let mut config = Self::default();

        let api_key = std::env::var("BATCHDATA_API_KEY")
            .ok()
            .filter(|key| !key.trim().is_empty())
            .ok_or_else(|| Error::config("BATCHDATA_API_KEY environment variable is required"))?;
        config.batchdata.api_key = api_key;

        if let Ok(base_url) = std::env::var("BATCHDATA_BASE_URL") {
            config.batchdata = config.batchdata.with_base_url(base_url);
        }

        if let Ok(timeout) = std::env::var("BATCHDATA_TIMEOUT_SECS") {
            config.batchdata.timeout_secs = parse_timeout(&timeout)?;
        }

        if let Ok(name) = std::env::var("MCP_SERVER_NAME") {
            config.server.name = name;
        }

        if let Ok(level) = std::env::var("MCP_LOG_LEVEL") {
            config.logging.level = level;
        }

        config.transport = TransportConfig::from_env();

        Ok(config)
    }
}

/// Whole seconds, at least one. Runs before logging is initialized, so it
/// reports through the returned error only.
fn parse_timeout(raw: &str) -> Result<u64> {
    raw.trim()
        .parse::<u64>()
        .ok()
        .filter(|secs| *secs > 0)
        .ok_or_else(|| {
            Error::config(format!(
                "BATCHDATA_TIMEOUT_SECS must be a positive number of seconds, got {raw:?}"
            ))
        })
}
