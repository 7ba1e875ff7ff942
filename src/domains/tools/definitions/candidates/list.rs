//! List candidates tool definition.
//!
//! Fetches one page of candidates, optionally filtered by creation or update
//! time, and returns the records as a JSON array.

use futures::FutureExt;
use rmcp::{
    handler::server::tool::{ToolCallContext, ToolRoute, cached_schema_for_type},
    model::{CallToolResult, Tool},
};
use schemars::JsonSchema;
use serde::Deserialize;
use std::sync::Arc;
use tracing::{info, instrument};

use crate::teamtailor::{CandidateFilter, ListCandidatesParams, TeamtailorClient};

use super::common::{api_error_result, json_result, parse_params};

#[cfg(feature = "http")]
use super::common::http_response;
#[cfg(feature = "http")]
use crate::domains::tools::ToolError;

// ============================================================================
// Tool Parameters
// ============================================================================

/// Parameters for the list candidates tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ListCandidatesToolParams {
    /// Number of candidates per page. Zero lets the API choose.
    #[schemars(description = "Number of candidates per page (default: 10)")]
    #[serde(default = "default_page_size")]
    pub page_size: u32,

    /// Page to fetch, starting at 1. Zero lets the API choose.
    #[schemars(description = "Page number, starting at 1 (default: 1)")]
    #[serde(default = "default_page")]
    pub page: u32,

    /// Optional creation/update time bounds.
    #[schemars(description = "Optional ISO-8601 time bounds on creation and update time")]
    #[serde(default)]
    pub filter: Option<CandidateFilter>,
}

fn default_page_size() -> u32 {
    10
}

fn default_page() -> u32 {
    1
}

impl ListCandidatesToolParams {
    /// Translate into client parameters; zero pagination values are dropped.
    pub fn to_query(&self) -> ListCandidatesParams {
        let query = ListCandidatesParams::new()
            .page(self.page)
            .per_page(self.page_size);

        match &self.filter {
            Some(filter) => query.filter(filter.clone()),
            None => query,
        }
    }
}

// ============================================================================
// Tool Definition
// ============================================================================

/// List candidates tool.
pub struct ListCandidatesTool;

impl ListCandidatesTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "list_candidates";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "List and filter candidates. Returns one page of candidate records as a JSON array. \
         Use page and pageSize to paginate, and filter (createdAfter, createdBefore, updatedAfter, \
         updatedBefore as ISO-8601 timestamps) to narrow the results.";

    /// Execute the tool logic.
    #[instrument(skip_all, fields(page = params.page, page_size = params.page_size))]
    pub async fn execute(params: &ListCandidatesToolParams, client: &TeamtailorClient) -> CallToolResult {
        info!("List candidates tool called");

        match client.list_candidates(&params.to_query()).await {
            Ok(candidates) => {
                info!("Returning {} candidate(s)", candidates.len());
                json_result(&candidates)
            }
            Err(e) => api_error_result(&e),
        }
    }

    /// HTTP handler for this tool (for HTTP transport).
    #[cfg(feature = "http")]
    pub async fn http_handler(
        arguments: serde_json::Value,
        client: &TeamtailorClient,
    ) -> Result<serde_json::Value, ToolError> {
        let params: ListCandidatesToolParams = serde_json::from_value(arguments)
            .map_err(|e| ToolError::invalid_arguments(e.to_string()))?;

        http_response(Self::execute(&params, client).await)
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: cached_schema_for_type::<ListCandidatesToolParams>(),
            annotations: None,
            output_schema: None,
            icons: None,
            meta: None,
            title: None,
        }
    }

    /// Create a ToolRoute for the rmcp tool router.
    pub fn create_route<S>(client: Arc<TeamtailorClient>) -> ToolRoute<S>
    where
        S: Send + Sync + 'static,
    {
        ToolRoute::new_dyn(Self::to_tool(), move |ctx: ToolCallContext<'_, S>| {
            let args = ctx.arguments.clone().unwrap_or_default();
            let client = client.clone();
            async move {
                let params: ListCandidatesToolParams = parse_params(args)?;
                Ok(Self::execute(&params, &client).await)
            }
            .boxed()
        })
    }
}
