//! Teamtailor MCP Server Library
//!
//! This crate exposes the candidates resource of the Teamtailor recruiting
//! API as Model Context Protocol (MCP) tools, so an agent can list and fetch
//! candidate records.
//!
//! # Architecture
//!
//! - **core**: configuration, error handling, the MCP server handler and transports
//! - **domains**: MCP tools (`list_candidates`, `get_candidate`)
//! - **teamtailor**: a small read-only client for the Teamtailor REST API
//!
//! # Example
//!
//! ```rust,no_run
//! use teamtailor_mcp_server::{core::McpServer, core::Config};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::from_env()?;
//!     let server = McpServer::new(config)?;
//!     // Start the server...
//!     Ok(())
//! }
//! ```

pub mod core;
pub mod domains;
pub mod teamtailor;

// Re-export commonly used types for convenience
pub use core::{Config, Error, McpServer, Result};
