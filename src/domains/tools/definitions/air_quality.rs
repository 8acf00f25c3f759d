//! Air quality tool definition.

use rmcp::{handler::server::tool::cached_schema_for_type, model::JsonObject};
use serde::Deserialize;
use serde_json::Value;
use std::sync::Arc;
use tracing::{info, instrument};

use crate::domains::providers::{AirQualityProvider, AirQualityReport, CredentialResolver, Location};
use crate::domains::tools::error::ToolError;
use crate::domains::tools::handlers::ToolHandler;
use crate::domains::tools::validator::Arguments;

/// Parameters for the air quality tool.
#[derive(Debug, Clone, Deserialize)]
pub struct AirQualityParams {
    pub city: String,

    #[serde(default)]
    pub country_code: Option<String>,

    #[serde(default)]
    pub api_key: Option<String>,
}

/// Air quality tool - current pollutant levels for a city.
pub struct AirQualityTool {
    provider: Arc<dyn AirQualityProvider>,
    credentials: CredentialResolver,
}

impl AirQualityTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "get_air_quality";

    pub fn new(provider: Arc<dyn AirQualityProvider>, credentials: CredentialResolver) -> Self {
        Self {
            provider,
            credentials,
        }
    }

    #[instrument(skip_all, fields(city = %params.city))]
    pub async fn execute(&self, params: AirQualityParams) -> Result<AirQualityReport, ToolError> {
        info!("Air quality request for city: {}", params.city);

        let api_key = self.credentials.resolve(params.api_key.as_deref())?;
        let location = Location::new(params.city, params.country_code);

        let report = self.provider.air_quality(&location, &api_key).await?;

        info!("Air quality data retrieved successfully for {}", location.city);
        Ok(report)
    }
}

#[async_trait::async_trait]
impl ToolHandler for AirQualityTool {
    async fn call(&self, arguments: Arguments) -> Result<Value, ToolError> {
        let params: AirQualityParams = serde_json::from_value(Value::Object(arguments))
            .map_err(|e| ToolError::internal(format!("undecodable air quality arguments: {e}")))?;
        let report = self.execute(params).await?;
        Ok(serde_json::to_value(report)?)
    }

    fn output_schema(&self) -> Option<Arc<JsonObject>> {
        Some(cached_schema_for_type::<AirQualityReport>())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::providers::fake::{FakeOutcome, FakeProvider};
    use serde_json::json;

    fn params(city: &str, api_key: Option<&str>) -> AirQualityParams {
        AirQualityParams {
            city: city.to_string(),
            country_code: None,
            api_key: api_key.map(str::to_string),
        }
    }

    #[tokio::test]
    async fn test_air_quality_success() {
        let provider = Arc::new(FakeProvider::ok());
        let tool = AirQualityTool::new(provider.clone(), CredentialResolver::new(None));

        let report = tool.execute(params("Seoul", Some("mine"))).await.unwrap();

        assert_eq!(report.city, "Seoul");
        assert_eq!(report.quality_level, "Good");
        assert_eq!(provider.last_key().as_deref(), Some("mine"));
    }

    #[tokio::test]
    async fn test_rejected_credential_mentions_credential() {
        let provider = Arc::new(FakeProvider::new(FakeOutcome::Unauthorized));
        let tool = AirQualityTool::new(provider, CredentialResolver::new(Some("expired".into())));

        let err = tool.execute(params("Seoul", None)).await.unwrap_err();

        assert!(err.to_string().contains("credential"));
        assert!(err.to_string().contains("disabled"));
    }

    #[tokio::test]
    async fn test_handler_serializes_payload() {
        let tool = AirQualityTool::new(Arc::new(FakeProvider::ok()), CredentialResolver::new(Some("k".into())));
        let mut args = Arguments::new();
        args.insert("city".to_string(), json!("Busan"));

        let value = tool.call(args).await.unwrap();

        assert_eq!(value["pollutants"]["pm10"], 25.3);
        assert_eq!(value["aqi"], 1);
    }
}
