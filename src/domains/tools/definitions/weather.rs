//! Weather tool definition.
//!
//! Returns current conditions and a daily forecast for a city.

use rmcp::{handler::server::tool::cached_schema_for_type, model::JsonObject};
use serde::Deserialize;
use serde_json::Value;
use std::sync::Arc;
use tracing::{info, instrument};

use crate::domains::providers::{CredentialResolver, Location, WeatherProvider, WeatherReport};
use crate::domains::tools::error::ToolError;
use crate::domains::tools::handlers::ToolHandler;
use crate::domains::tools::validator::Arguments;

// ============================================================================
// Tool Parameters
// ============================================================================

/// Parameters for the weather tool.
#[derive(Debug, Clone, Deserialize)]
pub struct WeatherParams {
    /// City name to check the weather for
    pub city: String,

    /// Country code (e.g., 'US', 'UK')
    #[serde(default)]
    pub country_code: Option<String>,

    /// Number of days for the forecast
    #[serde(default = "default_days")]
    pub days: u8,

    /// Weather API key (uses default if not provided)
    #[serde(default)]
    pub api_key: Option<String>,
}

fn default_days() -> u8 {
    3
}

// ============================================================================
// Tool Definition
// ============================================================================

/// Weather tool - current weather and forecast for a city.
pub struct WeatherTool {
    provider: Arc<dyn WeatherProvider>,
    credentials: CredentialResolver,
}

impl WeatherTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "get_weather";

    pub fn new(provider: Arc<dyn WeatherProvider>, credentials: CredentialResolver) -> Self {
        Self {
            provider,
            credentials,
        }
    }

    /// Execute the tool logic.
    #[instrument(skip_all, fields(city = %params.city, days = params.days))]
    pub async fn execute(&self, params: WeatherParams) -> Result<WeatherReport, ToolError> {
        info!("Weather request for city: {}, days: {}", params.city, params.days);

        let api_key = self.credentials.resolve(params.api_key.as_deref())?;
        let location = Location::new(params.city, params.country_code);

        let report = self
            .provider
            .forecast(&location, params.days, &api_key)
            .await?;

        info!("Weather data retrieved successfully for {}", location.city);
        Ok(report)
    }
}

#[async_trait::async_trait]
impl ToolHandler for WeatherTool {
    async fn call(&self, arguments: Arguments) -> Result<Value, ToolError> {
        let params: WeatherParams = serde_json::from_value(Value::Object(arguments))
            .map_err(|e| ToolError::internal(format!("undecodable weather arguments: {e}")))?;
        let report = self.execute(params).await?;
        Ok(serde_json::to_value(report)?)
    }

    fn output_schema(&self) -> Option<Arc<JsonObject>> {
        Some(cached_schema_for_type::<WeatherReport>())
    }
}

// ============================================================================
// Tests
// ============================================================================
