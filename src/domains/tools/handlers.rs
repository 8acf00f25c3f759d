//! Tool handler contract and the call envelope.
//!
//! Every tool is executed through a [`ToolHandler`]. The registry hands the
//! handler arguments that have already been validated, and wraps whatever
//! comes back into a [`ToolCallResult`].

use rmcp::model::JsonObject;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::sync::Arc;

use super::error::ToolError;
use super::validator::Arguments;

/// A single tool invocation as received from a caller.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolCallRequest {
    /// The name of the tool to execute.
    pub tool_name: String,

    /// The arguments to pass to the tool.
    #[serde(default)]
    pub arguments: Value,
}

/// Failure detail of a tool call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorDetail {
    pub message: String,
}

/// Uniform outcome of a tool call.
///
/// Exactly one of `payload` and `error` is set; the constructors are the
/// only way to build one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToolCallResult {
    success: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    payload: Option<Value>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    error: Option<ErrorDetail>,
}

impl ToolCallResult {
    /// Create a successful result.
    pub fn success(payload: Value) -> Self {
        Self {
            success: true,
            payload: Some(payload),
            error: None,
        }
    }

    /// Create a failed result.
    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            success: false,
            payload: None,
            error: Some(ErrorDetail {
                message: message.into(),
            }),
        }
    }

    pub fn is_success(&self) -> bool {
        self.success
    }

    pub fn payload(&self) -> Option<&Value> {
        self.payload.as_ref()
    }

    pub fn error(&self) -> Option<&ErrorDetail> {
        self.error.as_ref()
    }

    /// The failure message, if any.
    pub fn error_message(&self) -> Option<&str> {
        self.error.as_ref().map(|e| e.message.as_str())
    }
}

impl From<Result<Value, ToolError>> for ToolCallResult {
    fn from(result: Result<Value, ToolError>) -> Self {
        match result {
            Ok(payload) => Self::success(payload),
            Err(e) => Self::failure(e.to_string()),
        }
    }
}

/// Trait implemented by every tool.
///
/// Handlers only see arguments that passed validation, with defaults
/// injected. Faults are returned, never raised.
#[async_trait::async_trait]
pub trait ToolHandler: Send + Sync {
    /// Execute the tool with normalized arguments.
    async fn call(&self, arguments: Arguments) -> Result<Value, ToolError>;

    /// JSON Schema of a successful payload, if the tool publishes one.
    fn output_schema(&self) -> Option<Arc<JsonObject>> {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_success_serialization() {
        let result = ToolCallResult::success(json!({ "status": "ok" }));
        assert_eq!(
            serde_json::to_value(&result).unwrap(),
            json!({ "success": true, "payload": { "status": "ok" } })
        );
    }

    #[test]
    fn test_failure_serialization() {
        let result = ToolCallResult::failure("unknown tool: nope");
        assert_eq!(
            serde_json::to_value(&result).unwrap(),
            json!({ "success": false, "error": { "message": "unknown tool: nope" } })
        );
        assert_eq!(result.error_message(), Some("unknown tool: nope"));
        assert!(result.payload().is_none());
    }

    #[test]
    fn test_from_tool_error() {
        let result: ToolCallResult = Err(ToolError::Timeout).into();
        assert!(!result.is_success());
        assert_eq!(result.error_message(), Some("tool execution timed out"));
    }

    #[test]
    fn test_request_defaults_arguments() {
        let request: ToolCallRequest =
            serde_json::from_value(json!({ "tool_name": "health" })).unwrap();
        assert_eq!(request.tool_name, "health");
        assert_eq!(request.arguments, Value::Null);
    }
}
