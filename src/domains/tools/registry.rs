//! Tool Registry - central registration and dispatch for all tools.
//!
//! This module provides:
//! - The list of available tools and their metadata
//! - HTTP dispatch for tool calls (when the http feature is enabled)

use std::sync::Arc;
#[cfg(feature = "http")]
use tracing::warn;

use rmcp::model::Tool;

use crate::teamtailor::TeamtailorClient;

use super::definitions::{GetCandidateTool, ListCandidatesTool};
#[cfg(feature = "http")]
use super::ToolError;

/// Tool registry - manages all available tools.
pub struct ToolRegistry {
    #[cfg_attr(not(feature = "http"), allow(dead_code))]
    client: Arc<TeamtailorClient>,
}

impl ToolRegistry {
    /// Create a new tool registry dispatching to the given client.
    pub fn new(client: Arc<TeamtailorClient>) -> Self {
        Self { client }
    }

    /// Get all tools as Tool models (metadata).
    pub fn get_all_tools() -> Vec<Tool> {
        vec![ListCandidatesTool::to_tool(), GetCandidateTool::to_tool()]
    }

    /// Dispatch an HTTP tool call to the appropriate handler.
    #[cfg(feature = "http")]
    pub async fn call_tool(
        &self,
        name: &str,
        arguments: serde_json::Value,
    ) -> Result<serde_json::Value, ToolError> {
        match name {
            ListCandidatesTool::NAME => ListCandidatesTool::http_handler(arguments, &self.client).await,
            GetCandidateTool::NAME => GetCandidateTool::http_handler(arguments, &self.client).await,
            _ => {
                warn!("Unknown tool requested: {}", name);
                Err(ToolError::not_found(name))
            }
        }
    }
}
