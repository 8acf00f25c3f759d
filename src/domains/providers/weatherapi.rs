//! WeatherAPI.com client.
//!
//! Serves both the weather and the air-quality tools: forecasts come from
//! `/forecast.json`, air quality from `/current.json?aqi=yes`.

use chrono::NaiveDate;
use serde::Deserialize;
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::{debug, instrument, warn};

use super::models::{AirQualityLevel, AirQualityReport, ForecastDay, Pollutants, WeatherReport};
use super::{AirQualityProvider, Location, ProviderError, WeatherProvider};

// ============================================================================
// Configuration & Constants
// ============================================================================

/// Public WeatherAPI endpoint.
pub const DEFAULT_BASE_URL: &str = "https://api.weatherapi.com/v1";

/// Longest slice of a raw error body carried into an error message.
const MAX_ERROR_DETAIL_LEN: usize = 200;

// ============================================================================
// WeatherAPI Response Structures
// ============================================================================

#[derive(Debug, Deserialize)]
struct ApiLocation {
    name: String,
    country: String,
}

#[derive(Debug, Deserialize)]
struct ApiCondition {
    text: String,
}

#[derive(Debug, Deserialize)]
struct ApiCurrent {
    temp_c: f64,
    condition: ApiCondition,
    #[serde(default)]
    air_quality: Option<ApiAirQuality>,
}

#[derive(Debug, Deserialize)]
struct ApiAirQuality {
    co: f64,
    no2: f64,
    o3: f64,
    so2: f64,
    pm2_5: f64,
    pm10: f64,
    #[serde(rename = "us-epa-index")]
    us_epa_index: u8,
}

#[derive(Debug, Deserialize)]
struct ApiForecast {
    forecastday: Vec<ApiForecastDay>,
}

#[derive(Debug, Deserialize)]
struct ApiForecastDay {
    date: NaiveDate,
    day: ApiDay,
}

#[derive(Debug, Deserialize)]
struct ApiDay {
    maxtemp_c: f64,
    mintemp_c: f64,
    condition: ApiCondition,
}

#[derive(Debug, Deserialize)]
struct ForecastResponse {
    location: ApiLocation,
    current: ApiCurrent,
    forecast: ApiForecast,
}

#[derive(Debug, Deserialize)]
struct CurrentResponse {
    location: ApiLocation,
    current: ApiCurrent,
}

#[derive(Debug, Deserialize)]
struct ErrorResponse {
    error: ErrorBody,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: String,
}

// ============================================================================
// Client
// ============================================================================

/// Async client for the WeatherAPI service.
#[derive(Debug, Clone)]
pub struct WeatherApiClient {
    client: reqwest::Client,
    base_url: String,
}

impl WeatherApiClient {
    /// Create a client for `base_url` with a per-request timeout.
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, ProviderError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(concat!("weather-mcp-server/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| ProviderError::Connection(format!("failed to create HTTP client: {e}")))?;

        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    /// Issue a GET and decode the JSON body.
    async fn get<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        query: &[(&str, &str)],
    ) -> Result<T, ProviderError> {
        let url = format!("{}/{}", self.base_url, endpoint);

        let response = self.client.get(&url).query(query).send().await?;
        let status = response.status();
        let body = response.bytes().await?;

        debug!("{} answered {} ({} bytes)", endpoint, status, body.len());

        if !status.is_success() {
            let detail = error_detail(&body);
            warn!("Provider error from {}: {} {}", endpoint, status, detail);
            return Err(match status.as_u16() {
                401 | 403 => ProviderError::Unauthorized {
                    status: status.as_u16(),
                    detail,
                },
                code => ProviderError::Status {
                    status: code,
                    detail,
                },
            });
        }

        serde_json::from_slice(&body)
            .map_err(|e| ProviderError::invalid_response(format!("JSON parse error: {e}")))
    }
}

/// Extract a human-readable reason from an error body.
fn error_detail(body: &[u8]) -> String {
    if let Ok(parsed) = serde_json::from_slice::<ErrorResponse>(body) {
        return parsed.error.message;
    }

    let text = String::from_utf8_lossy(body);
    let text = text.trim();
    if text.is_empty() {
        return "no details".to_string();
    }
    text.chars().take(MAX_ERROR_DETAIL_LEN).collect()
}

#[async_trait::async_trait]
impl WeatherProvider for WeatherApiClient {
    #[instrument(skip(self, api_key), fields(q = %location.query()))]
    async fn forecast(
        &self,
        location: &Location,
        days: u8,
        api_key: &str,
    ) -> Result<WeatherReport, ProviderError> {
        let q = location.query();
        let days = days.to_string();
        let response: ForecastResponse = self
            .get(
                "forecast.json",
                &[
                    ("key", api_key),
                    ("q", q.as_str()),
                    ("days", days.as_str()),
                    ("aqi", "no"),
                ],
            )
            .await?;

        Ok(WeatherReport {
            city: response.location.name,
            country: response.location.country,
            current_temp: response.current.temp_c,
            current_condition: response.current.condition.text,
            forecast: response
                .forecast
                .forecastday
                .into_iter()
                .map(|d| ForecastDay {
                    date: d.date.format("%Y-%m-%d").to_string(),
                    min_temp: d.day.mintemp_c,
                    max_temp: d.day.maxtemp_c,
                    condition: d.day.condition.text,
                })
                .collect(),
        })
    }
}

#[async_trait::async_trait]
impl AirQualityProvider for WeatherApiClient {
    #[instrument(skip(self, api_key), fields(q = %location.query()))]
    async fn air_quality(
        &self,
        location: &Location,
        api_key: &str,
    ) -> Result<AirQualityReport, ProviderError> {
        let q = location.query();
        let response: CurrentResponse = self
            .get(
                "current.json",
                &[("key", api_key), ("q", q.as_str()), ("aqi", "yes")],
            )
            .await?;

        let air = response
            .current
            .air_quality
            .ok_or_else(|| ProviderError::invalid_response("response has no air_quality block"))?;

        let level = AirQualityLevel::from_epa_index(air.us_epa_index).ok_or_else(|| {
            ProviderError::invalid_response(format!(
                "US EPA index out of range: {}",
                air.us_epa_index
            ))
        })?;

        Ok(AirQualityReport {
            city: response.location.name,
            country: response.location.country,
            aqi: air.us_epa_index,
            quality_level: level.label().to_string(),
            pollutants: Pollutants {
                pm2_5: air.pm2_5,
                pm10: air.pm10,
                o3: air.o3,
                no2: air.no2,
                so2: air.so2,
                co: air.co,
            },
            health_recommendations: level.recommendation().to_string(),
        })
    }
}

// ============================================================================
// Tests
// ============================================================================
