//! Health tool definition.
//!
//! A parameterless status probe. It cannot fail.

use serde_json::{Value, json};

use crate::domains::tools::error::ToolError;
use crate::domains::tools::handlers::ToolHandler;
use crate::domains::tools::validator::Arguments;

/// Service status check.
pub struct HealthTool;

impl HealthTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "health";

    /// The status payload.
    pub fn status() -> Value {
        json!({ "status": "ok" })
    }
}

#[async_trait::async_trait]
impl ToolHandler for HealthTool {
    async fn call(&self, _arguments: Arguments) -> Result<Value, ToolError> {
        Ok(Self::status())
    }
}
