//! Get candidate tool definition.

use futures::FutureExt;
use rmcp::{
    handler::server::tool::{ToolCallContext, ToolRoute, cached_schema_for_type},
    model::{CallToolResult, Tool},
};
use schemars::JsonSchema;
use serde::{Deserialize, Deserializer, de};
use std::sync::Arc;
use tracing::{info, instrument};

use crate::teamtailor::TeamtailorClient;

use super::common::{api_error_result, json_result, parse_params};

#[cfg(feature = "http")]
use super::common::http_response;
#[cfg(feature = "http")]
use crate::domains::tools::ToolError;

/// Parameters for the get candidate tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct GetCandidateToolParams {
    /// Numeric id of the candidate.
    #[schemars(description = "The candidate's numeric id")]
    #[serde(deserialize_with = "deserialize_candidate_id")]
    pub candidate_id: u64,
}

/// Accept any JSON number with an integral, non-negative value (`42` or `42.0`).
fn deserialize_candidate_id<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    let number = serde_json::Number::deserialize(deserializer)?;
    if let Some(id) = number.as_u64() {
        return Ok(id);
    }

    match number.as_f64() {
        Some(id) if id >= 0.0 && id.fract() == 0.0 && id < u64::MAX as f64 => Ok(id as u64),
        _ => Err(de::Error::custom(format!(
            "invalid candidate id {number}, expected a non-negative integer"
        ))),
    }
}

/// Get candidate tool - fetches a single candidate by id.
pub struct GetCandidateTool;

impl GetCandidateTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "get_candidate";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str =
        "Get a single candidate by their id. Returns the candidate record as a JSON object.";

    /// Execute the tool logic.
    #[instrument(skip_all, fields(candidate_id = params.candidate_id))]
    pub async fn execute(params: &GetCandidateToolParams, client: &TeamtailorClient) -> CallToolResult {
        info!("Get candidate tool called");

        match client.get_candidate(params.candidate_id).await {
            Ok(candidate) => json_result(&candidate),
            Err(e) => api_error_result(&e),
        }
    }

    /// HTTP handler for this tool (for HTTP transport).
    #[cfg(feature = "http")]
    pub async fn http_handler(
        arguments: serde_json::Value,
        client: &TeamtailorClient,
    ) -> Result<serde_json::Value, ToolError> {
        let params: GetCandidateToolParams = serde_json::from_value(arguments)
            .map_err(|e| ToolError::invalid_arguments(e.to_string()))?;

        http_response(Self::execute(&params, client).await)
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: cached_schema_for_type::<GetCandidateToolParams>(),
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
                let params: GetCandidateToolParams = parse_params(args)?;
                Ok(Self::execute(&params, &client).await)
            }
            .boxed()
        })
    }
}
