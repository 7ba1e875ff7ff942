//! Error types and handling for the MCP server.
//!
//! This module defines a unified error type that wraps the errors of every
//! startup step: loading configuration and constructing the Teamtailor client.
//! Transports report their own `TransportError`.

use thiserror::Error;

/// A specialized Result type for MCP server operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Unified error type for the MCP server.
#[derive(Debug, Error)]
pub enum Error {
    /// Error originating from the Teamtailor API client (e.g. an invalid base URL).
    #[error("Teamtailor API error: {0}")]
    Api(#[from] crate::teamtailor::ApiError),

    /// Configuration-related errors. Fatal at startup.
    #[error("Configuration error: {0}")]
    Config(String),
}

impl Error {
    /// Create a new configuration error.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }
}
