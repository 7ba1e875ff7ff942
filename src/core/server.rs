//! MCP Server implementation and lifecycle management.
//!
//! This module contains the main server handler that implements the MCP
//! protocol. Only the tools capability is exposed; tool routing is built in
//! `domains/tools/router.rs` from the per-tool definitions.

use rmcp::{ServerHandler, handler::server::tool::ToolRouter, model::*, tool_handler};
use std::sync::Arc;

use super::config::Config;
use crate::domains::tools::{ToolRegistry, build_tool_router};
use crate::teamtailor::TeamtailorClient;

#[cfg(feature = "http")]
use crate::domains::tools::ToolError;

/// Instructions sent to clients on initialization.
pub const SERVER_INSTRUCTIONS: &str = "Read-only access to Teamtailor candidates. \
     Use list_candidates to page through and filter candidates by creation or update time, \
     and get_candidate to fetch a single candidate by its numeric id.";

/// The main MCP server handler.
///
/// Cloning is cheap: the configuration and the API client are shared.
#[derive(Clone)]
pub struct McpServer {
    /// Server configuration.
    config: Arc<Config>,

    /// Teamtailor API client shared by all tools.
    #[cfg_attr(not(feature = "http"), allow(dead_code))]
    client: Arc<TeamtailorClient>,

    /// Tool router for handling tool calls.
    tool_router: ToolRouter<Self>,
}

impl McpServer {
    /// Create a new MCP server with the given configuration.
    ///
    /// Fails if the configured Teamtailor base URL is not a valid URL.
    pub fn new(config: Config) -> super::Result<Self> {
        let client = Arc::new(TeamtailorClient::new(
            &config.teamtailor.base_url,
            config.teamtailor.api_key.clone(),
        )?);

        Ok(Self {
            tool_router: build_tool_router::<Self>(client.clone()),
            config: Arc::new(config),
            client,
        })
    }

    /// Get the server name.
    pub fn name(&self) -> &str {
        &self.config.server.name
    }

    /// Get the server version.
    pub fn version(&self) -> &str {
        &self.config.server.version
    }

    /// List all available tools as JSON (for HTTP transport).
    pub fn list_tools(&self) -> Vec<serde_json::Value> {
        ToolRegistry::get_all_tools()
            .into_iter()
            .map(|t| {
                serde_json::json!({
                    "name": t.name,
                    "description": t.description,
                    "inputSchema": t.input_schema
                })
            })
            .collect()
    }

    /// Call a tool by name (for HTTP transport).
    #[cfg(feature = "http")]
    pub async fn call_tool(
        &self,
        name: &str,
        arguments: serde_json::Value,
    ) -> std::result::Result<serde_json::Value, ToolError> {
        ToolRegistry::new(self.client.clone())
            .call_tool(name, arguments)
            .await
    }
}

/// ServerHandler implementation with tool_handler macro for automatic tool routing.
#[tool_handler]
impl ServerHandler for McpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            instructions: Some(SERVER_INSTRUCTIONS.to_string()),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            ..Default::default()
        }
    }
}
