//! Tool Router - builds the rmcp ToolRouter from the registry.
//!
//! Every route forwards to [`ToolRegistry::dispatch`], so MCP clients on any
//! transport get the same validation and fault handling as the HTTP surface.

use std::sync::Arc;

use futures::FutureExt;
use rmcp::{
    handler::server::tool::{ToolCallContext, ToolRoute, ToolRouter},
    model::{CallToolResult, Content, Tool},
};
use serde_json::Value;

use super::error::ToolError;
use super::handlers::ToolCallResult;
use super::registry::{RegisteredTool, ToolRegistry};

/// Build the tool router with all registered tools.
///
/// Fails if a tool's input schema cannot be rendered as a JSON object.
pub fn build_tool_router<S>(registry: Arc<ToolRegistry>) -> Result<ToolRouter<S>, ToolError>
where
    S: Send + Sync + 'static,
{
    registry.tools().try_fold(ToolRouter::new(), |router, tool| {
        Ok(router.with_route(create_route(tool, registry.clone())?))
    })
}

/// MCP metadata for a registered tool.
pub fn to_tool(tool: &RegisteredTool) -> Result<Tool, ToolError> {
    let definition = &tool.definition;
    let input_schema = definition.parameters.to_json_object().map_err(|e| {
        ToolError::invalid_definition(format!(
            "input schema of '{}' is not a JSON object: {e}",
            definition.name
        ))
    })?;

    Ok(Tool {
        name: definition.name.clone().into(),
        description: Some(definition.description.clone().into()),
        input_schema: Arc::new(input_schema),
        annotations: None,
        output_schema: tool.handler.output_schema(),
        icons: None,
        meta: None,
        title: None,
    })
}

fn create_route<S>(
    tool: &RegisteredTool,
    registry: Arc<ToolRegistry>,
) -> Result<ToolRoute<S>, ToolError>
where
    S: Send + Sync + 'static,
{
    let name = tool.definition.name.clone();
    Ok(ToolRoute::new_dyn(to_tool(tool)?, move |ctx: ToolCallContext<'_, S>| {
        let arguments = ctx.arguments.clone().map(Value::Object).unwrap_or(Value::Null);
        let registry = registry.clone();
        let name = name.clone();
        async move { Ok(to_call_tool_result(registry.dispatch(&name, arguments).await)) }.boxed()
    }))
}

/// Convert a dispatch outcome into the MCP result shape.
///
/// Failures are reported as tool errors (`isError: true`) rather than
/// protocol errors, so the client sees the message.
pub fn to_call_tool_result(result: ToolCallResult) -> CallToolResult {
    if let Some(message) = result.error_message() {
        return CallToolResult::error(vec![Content::text(message)]);
    }

    let payload = result.payload().cloned().unwrap_or(Value::Null);
    CallToolResult {
        content: vec![Content::text(payload.to_string())],
        structured_content: Some(payload),
        is_error: Some(false),
        meta: None,
    }
}
