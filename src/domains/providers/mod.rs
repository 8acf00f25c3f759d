//! External data providers consulted by the tools.
//!
//! Handlers talk to providers through the [`WeatherProvider`] and
//! [`AirQualityProvider`] traits. The production implementation is
//! [`WeatherApiClient`]; tests substitute their own.

mod credentials;
mod error;
#[cfg(test)]
pub(crate) mod fake;
pub mod models;
mod weatherapi;

pub use credentials::CredentialResolver;
pub use error::{CredentialError, ProviderError};
pub use models::{AirQualityReport, ForecastDay, Pollutants, WeatherReport};
pub use weatherapi::{DEFAULT_BASE_URL, WeatherApiClient};

/// Location a provider is asked about.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Location {
    pub city: String,
    pub country_code: Option<String>,
}

impl Location {
    pub fn new(city: impl Into<String>, country_code: Option<String>) -> Self {
        Self {
            city: city.into(),
            country_code: country_code.filter(|c| !c.trim().is_empty()),
        }
    }

    /// Free-text query understood by the provider: `city` or `city,CC`.
    pub fn query(&self) -> String {
        match &self.country_code {
            Some(code) => format!("{},{}", self.city, code),
            None => self.city.clone(),
        }
    }
}

/// Source of current weather and daily forecasts.
#[async_trait::async_trait]
pub trait WeatherProvider: Send + Sync {
    /// Fetch current conditions and a forecast of `days` days.
    async fn forecast(
        &self,
        location: &Location,
        days: u8,
        api_key: &str,
    ) -> Result<WeatherReport, ProviderError>;
}

/// Source of current air-quality measurements.
#[async_trait::async_trait]
pub trait AirQualityProvider: Send + Sync {
    /// Fetch the current air quality.
    async fn air_quality(
        &self,
        location: &Location,
        api_key: &str,
    ) -> Result<AirQualityReport, ProviderError>;
}
