//! Tool definitions tool.
//!
//! Returns the catalog discovery document, so clients without the HTTP
//! `/tools` endpoint can still read the parameter schemas. The document
//! covers the catalog it was built with and never lists this tool itself.

use serde_json::Value;

use crate::domains::tools::catalog::{ParameterSchema, SchemaCatalog, ToolDefinition};
use crate::domains::tools::error::ToolError;
use crate::domains::tools::export;
use crate::domains::tools::handlers::ToolHandler;
use crate::domains::tools::validator::Arguments;

pub struct ToolDefinitionsTool {
    catalog: SchemaCatalog,
}

impl ToolDefinitionsTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "get_tool_definitions";

    pub const DESCRIPTION: &'static str = "Provides MCP tool definitions in JSON format.";

    pub fn new(catalog: SchemaCatalog) -> Self {
        Self { catalog }
    }

    /// The parameterless definition this tool is registered under.
    pub fn definition() -> ToolDefinition {
        ToolDefinition::new(Self::NAME, Self::DESCRIPTION, ParameterSchema::empty())
    }
}

#[async_trait::async_trait]
impl ToolHandler for ToolDefinitionsTool {
    async fn call(&self, _arguments: Arguments) -> Result<Value, ToolError> {
        Ok(export::export_value(self.catalog.list())?)
    }
}
