//! Common utilities shared across the candidate tools.

use rmcp::{
    ErrorData as McpError,
    model::{CallToolResult, Content, JsonObject},
};
use serde::{Serialize, de::DeserializeOwned};
use tracing::warn;

use crate::teamtailor::ApiError;

#[cfg(feature = "http")]
use crate::domains::tools::ToolError;

/// Deserialize tool arguments, rejecting them as invalid params on failure.
pub fn parse_params<T: DeserializeOwned>(args: JsonObject) -> Result<T, McpError> {
    serde_json::from_value(serde_json::Value::Object(args))
        .map_err(|e| McpError::invalid_params(e.to_string(), None))
}

/// Create an error result with a formatted message.
pub fn error_result(message: &str) -> CallToolResult {
    warn!("{}", message);
    CallToolResult::error(vec![Content::text(message.to_string())])
}

/// Create an error result for a failed upstream call.
///
/// The message is the error's own display, with nothing added, so callers can
/// tell an HTTP status apart from an unparseable body.
pub fn api_error_result(err: &ApiError) -> CallToolResult {
    if let Some(status) = err.status() {
        warn!(status, "Teamtailor request failed");
    }
    error_result(&err.to_string())
}

/// Create a success result whose single text content is `value` as JSON.
pub fn json_result<T: Serialize>(value: &T) -> CallToolResult {
    match serde_json::to_string(value) {
        Ok(text) => CallToolResult::success(vec![Content::text(text)]),
        Err(e) => error_result(&format!("Failed to serialize result: {}", e)),
    }
}

/// Convert a tool result into the JSON body of a `tools/call` response.
#[cfg(feature = "http")]
pub fn http_response(result: CallToolResult) -> Result<serde_json::Value, ToolError> {
    let content = serde_json::to_value(&result.content)
        .map_err(|e| ToolError::internal(format!("Failed to serialize tool result: {}", e)))?;

    Ok(serde_json::json!({
        "content": content,
        "isError": result.is_error.unwrap_or(false)
    }))
}

/// Text of the first content item of a result.
#[cfg(test)]
pub fn first_text(result: &CallToolResult) -> String {
    use rmcp::model::RawContent;

    match &result.content[0].raw {
        RawContent::Text(text) => text.text.clone(),
        other => panic!("expected text content, got {other:?}"),
    }
}
