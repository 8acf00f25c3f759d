//! Tool Registry - central registration and dispatch for all tools.
//!
//! This module provides:
//! - The name to handler table, populated once at startup
//! - `dispatch`, the single entry point every transport uses to call a tool
//! - Tool metadata for listing
//!
//! `dispatch` is the fault boundary: unknown names, validation failures,
//! credential and provider errors, timeouts and handler panics all come back
//! as a failed [`ToolCallResult`].

use futures::FutureExt;
use serde_json::Value;
use std::collections::HashMap;
use std::panic::AssertUnwindSafe;
use std::sync::Arc;
use std::time::Duration;
use tracing::{info, instrument, warn};

use crate::core::config::Config;
use crate::domains::providers::{CredentialResolver, WeatherApiClient};

use super::catalog::{SchemaCatalog, ToolDefinition};
use super::definitions::{AirQualityTool, HealthTool, ToolDefinitionsTool, WeatherTool};
use super::error::ToolError;
use super::handlers::{ToolCallResult, ToolHandler};
use super::validator;

/// A definition together with the handler that executes it.
#[derive(Clone)]
pub struct RegisteredTool {
    pub definition: ToolDefinition,
    pub handler: Arc<dyn ToolHandler>,
}

// ============================================================================
// Tool Registry
// ============================================================================

/// Tool registry - manages all available tools.
///
/// Built before the server starts and read-only afterwards, so lookups need
/// no locking.
#[derive(Clone, Default)]
pub struct ToolRegistry {
    tools: HashMap<String, RegisteredTool>,
    order: Vec<String>,
    call_timeout: Option<Duration>,
}

impl ToolRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Abandon any call that runs longer than `timeout`.
    pub fn with_call_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.call_timeout = timeout;
        self
    }

    /// Build the registry with every built-in tool, wired to the providers
    /// described by `config`, followed by `get_tool_definitions`.
    pub fn from_config(config: &Config) -> Result<Self, ToolError> {
        let client = Arc::new(WeatherApiClient::new(
            config.providers.weather_api_url.clone(),
            config.providers.request_timeout(),
        )?);
        let credentials = CredentialResolver::new(config.credentials.weather_api_key.clone());

        if !credentials.has_default() {
            warn!("No default weather API key configured; callers must pass `api_key`");
        }

        let mut handlers: HashMap<&str, Arc<dyn ToolHandler>> = HashMap::new();
        handlers.insert(HealthTool::NAME, Arc::new(HealthTool));
        handlers.insert(
            WeatherTool::NAME,
            Arc::new(WeatherTool::new(client.clone(), credentials.clone())),
        );
        handlers.insert(
            AirQualityTool::NAME,
            Arc::new(AirQualityTool::new(client, credentials)),
        );

        let catalog = SchemaCatalog::builtin();
        let mut registry = Self::new().with_call_timeout(config.tools.call_timeout());
        for definition in catalog.list() {
            let handler = handlers.remove(definition.name.as_str()).ok_or_else(|| {
                ToolError::internal(format!("no handler for tool '{}'", definition.name))
            })?;
            registry.register(definition.clone(), handler)?;
        }
        registry.register(
            ToolDefinitionsTool::definition(),
            Arc::new(ToolDefinitionsTool::new(catalog)),
        )?;

        info!("Registered {} tools", registry.len());
        Ok(registry)
    }

    /// Register a tool. Names must be unique and the definition must pass
    /// its schema checks.
    pub fn register(
        &mut self,
        definition: ToolDefinition,
        handler: Arc<dyn ToolHandler>,
    ) -> Result<(), ToolError> {
        definition.check()?;
        if self.tools.contains_key(&definition.name) {
            return Err(ToolError::duplicate(&definition.name));
        }

        self.order.push(definition.name.clone());
        self.tools.insert(
            definition.name.clone(),
            RegisteredTool {
                definition,
                handler,
            },
        );
        Ok(())
    }

    /// Get all tool names in registration order.
    pub fn tool_names(&self) -> Vec<&str> {
        self.order.iter().map(String::as_str).collect()
    }

    /// All registered tools in registration order.
    pub fn tools(&self) -> impl Iterator<Item = &RegisteredTool> {
        self.order.iter().filter_map(|name| self.tools.get(name))
    }

    pub fn get(&self, name: &str) -> Option<&RegisteredTool> {
        self.tools.get(name)
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Call a tool by name and package the outcome.
    ///
    /// Never fails: every fault becomes a failed result.
    #[instrument(skip(self, arguments))]
    pub async fn dispatch(&self, name: &str, arguments: Value) -> ToolCallResult {
        match self.try_dispatch(name, arguments).await {
            Ok(payload) => {
                info!("Tool call succeeded");
                ToolCallResult::success(payload)
            }
            Err(e) => {
                warn!("Tool call failed: {}", e);
                ToolCallResult::failure(e.to_string())
            }
        }
    }

    async fn try_dispatch(&self, name: &str, arguments: Value) -> Result<Value, ToolError> {
        let tool = self.tools.get(name).ok_or_else(|| ToolError::unknown_tool(name))?;
        let arguments = validator::validate(&tool.definition, &arguments)?;

        let call = AssertUnwindSafe(tool.handler.call(arguments)).catch_unwind();
        let outcome = match self.call_timeout {
            Some(limit) => tokio::time::timeout(limit, call)
                .await
                .map_err(|_| ToolError::Timeout)?,
            None => call.await,
        };

        outcome.map_err(|_| ToolError::internal(format!("tool '{name}' panicked")))?
    }
}
