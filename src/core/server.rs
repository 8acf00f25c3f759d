//! MCP Server implementation and lifecycle management.
//!
//! This module contains the main server handler that implements the MCP
//! protocol on top of the tool registry.
//!
//! ## Tool Architecture
//!
//! Tools are described in `domains/tools/catalog.rs` and executed by the
//! handlers in `domains/tools/definitions/`. The [`ToolRegistry`] pairs the
//! two and owns dispatch; the rmcp ToolRouter is built from it in
//! `domains/tools/router.rs`, so every transport shares one code path.

use rmcp::{ServerHandler, handler::server::tool::ToolRouter, model::*, tool_handler};
use serde_json::Value;
use std::path::Path;
use std::sync::Arc;
use tracing::instrument;

use super::config::Config;
use crate::domains::tools::{SchemaCatalog, ToolCallResult, ToolRegistry, build_tool_router, export};

/// The main MCP server handler.
///
/// This struct implements the `ServerHandler` trait from rmcp and exposes
/// the same registry to the HTTP transport.
#[derive(Clone)]
pub struct McpServer {
    /// Server configuration.
    config: Arc<Config>,

    /// Tool registry shared with the router.
    registry: Arc<ToolRegistry>,

    /// Tool router for handling tool calls.
    tool_router: ToolRouter<Self>,
}

impl McpServer {
    /// Create a new MCP server with the built-in tools.
    pub fn new(config: Config) -> crate::Result<Self> {
        let registry = ToolRegistry::from_config(&config)?;
        Self::with_registry(config, registry)
    }

    /// Create a server around an already populated registry.
    pub fn with_registry(config: Config, registry: ToolRegistry) -> crate::Result<Self> {
        let registry = Arc::new(registry);
        Ok(Self {
            tool_router: build_tool_router::<Self>(registry.clone())?,
            config: Arc::new(config),
            registry,
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

    /// Get the server configuration.
    pub fn config(&self) -> &Arc<Config> {
        &self.config
    }

    pub fn registry(&self) -> &Arc<ToolRegistry> {
        &self.registry
    }

    // ========================================================================
    // HTTP Transport Support Methods
    // ========================================================================

    /// List all available tools in MCP `tools/list` shape.
    pub fn list_tools(&self) -> Vec<Value> {
        self.tool_router
            .list_all()
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

    /// Call a tool by name.
    #[instrument(skip(self, arguments))]
    pub async fn call_tool(&self, name: &str, arguments: Value) -> ToolCallResult {
        self.registry.dispatch(name, arguments).await
    }

    /// The catalog discovery document.
    ///
    /// Lists the built-in catalog only. `get_tool_definitions` is callable
    /// but describes the catalog rather than belonging to it.
    pub fn catalog_document(&self) -> serde_json::Result<Value> {
        export::export_value(SchemaCatalog::builtin().list())
    }

    /// Write the catalog discovery document to `path`.
    pub fn export_catalog(&self, path: &Path) -> crate::Result<()> {
        export::write_catalog(SchemaCatalog::builtin().list(), path)
    }
}

/// ServerHandler implementation with tool_handler macro for automatic tool routing.
#[tool_handler]
impl ServerHandler for McpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            instructions: Some(
                "Weather MCP server. Provides current weather, multi-day forecasts and air \
                 quality for a city. Pass `api_key` if no default key is configured."
                    .to_string(),
            ),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: self.config.server.name.clone(),
                version: self.config.server.version.clone(),
                ..Implementation::from_build_env()
            },
            ..Default::default()
        }
    }
}
