//! Configuration management for the MCP server.
//!
//! Configuration is read from environment variables (a `.env` file is
//! honoured). The Teamtailor API key is mandatory; everything else has a
//! default.

use serde::{Deserialize, Serialize};

use super::error::{Error, Result};
use super::transport::TransportConfig;

/// Default Teamtailor API base URL.
pub const DEFAULT_TEAMTAILOR_URL: &str = "https://api.teamtailor.com/v1";

/// Main configuration structure for the MCP server.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Server identification and metadata.
    pub server: ServerConfig,

    /// Logging configuration.
    pub logging: LoggingConfig,

    /// Transport configuration.
    pub transport: TransportConfig,

    /// Upstream Teamtailor API settings.
    pub teamtailor: TeamtailorConfig,
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

/// Teamtailor API endpoint and credential.
#[derive(Clone, Serialize, Deserialize)]
pub struct TeamtailorConfig {
    /// API base URL, without a trailing resource path.
    pub base_url: String,

    /// API key with Admin scope.
    pub api_key: String,
}

/// Custom Debug implementation to redact secrets from logs.
impl std::fmt::Debug for TeamtailorConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TeamtailorConfig")
            .field("base_url", &self.base_url)
            .field("api_key", &"[REDACTED]")
            .finish()
    }
}

impl TeamtailorConfig {
    /// Settings for the public API with the given key.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            base_url: DEFAULT_TEAMTAILOR_URL.to_string(),
            api_key: api_key.into(),
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            name: "teamtailor".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

impl Config {
    /// Create a configuration with default values around the given API settings.
    pub fn new(teamtailor: TeamtailorConfig) -> Self {
        Self {
            server: ServerConfig::default(),
            logging: LoggingConfig::default(),
            transport: TransportConfig::default(),
            teamtailor,
        }
    }

    /// Load configuration from environment variables.
    ///
    /// `TEAMTAILOR_API_KEY` is required; `TEAMTAILOR_URL` overrides the API
    /// base URL. Server settings use the `MCP_` prefix, for example
    /// `MCP_SERVER_NAME` and `MCP_LOG_LEVEL`.
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();

        let api_key = std::env::var("TEAMTAILOR_API_KEY")
            .ok()
            .filter(|key| !key.trim().is_empty())
            .ok_or_else(|| Error::config("Missing TEAMTAILOR_API_KEY environment variable"))?;

        let mut teamtailor = TeamtailorConfig::new(api_key);
        if let Ok(url) = std::env::var("TEAMTAILOR_URL") {
            if !url.is_empty() {
                teamtailor.base_url = url;
            }
        }

        let mut config = Self::new(teamtailor);

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
