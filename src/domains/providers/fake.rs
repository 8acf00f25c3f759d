//! In-memory provider used by unit tests.

use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use super::models::{AirQualityReport, ForecastDay, Pollutants, WeatherReport};
use super::{AirQualityProvider, Location, ProviderError, WeatherProvider};

/// How the fake answers.
#[derive(Debug, Clone)]
pub enum FakeOutcome {
    Ok,
    Status(u16, &'static str),
    Unauthorized,
    Timeout,
}

/// Provider that records calls and answers with canned data.
#[derive(Debug)]
pub struct FakeProvider {
    outcome: FakeOutcome,
    calls: AtomicUsize,
    last_key: Mutex<Option<String>>,
    last_location: Mutex<Option<Location>>,
}

impl FakeProvider {
    pub fn new(outcome: FakeOutcome) -> Self {
        Self {
            outcome,
            calls: AtomicUsize::new(0),
            last_key: Mutex::new(None),
            last_location: Mutex::new(None),
        }
    }

    pub fn ok() -> Self {
        Self::new(FakeOutcome::Ok)
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn last_key(&self) -> Option<String> {
        self.last_key.lock().unwrap().clone()
    }

    pub fn last_location(&self) -> Option<Location> {
        self.last_location.lock().unwrap().clone()
    }

    fn record(&self, location: &Location, api_key: &str) -> Result<(), ProviderError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        *self.last_key.lock().unwrap() = Some(api_key.to_string());
        *self.last_location.lock().unwrap() = Some(location.clone());

        match &self.outcome {
            FakeOutcome::Ok => Ok(()),
            FakeOutcome::Status(status, detail) => Err(ProviderError::Status {
                status: *status,
                detail: detail.to_string(),
            }),
            FakeOutcome::Unauthorized => Err(ProviderError::Unauthorized {
                status: 401,
                detail: "API key has been disabled.".to_string(),
            }),
            FakeOutcome::Timeout => Err(ProviderError::Timeout),
        }
    }
}

#[async_trait::async_trait]
impl WeatherProvider for FakeProvider {
    async fn forecast(
        &self,
        location: &Location,
        days: u8,
        api_key: &str,
    ) -> Result<WeatherReport, ProviderError> {
        self.record(location, api_key)?;
        Ok(WeatherReport {
            city: location.city.clone(),
            country: location.country_code.clone().unwrap_or_else(|| "US".to_string()),
            current_temp: 23.5,
            current_condition: "Sunny".to_string(),
            forecast: (0..days)
                .map(|i| ForecastDay {
                    date: format!("2025-05-{:02}", 27 + i),
                    min_temp: 18.0 + f64::from(i) * 0.5,
                    max_temp: 25.0 + f64::from(i) * 0.7,
                    condition: if i % 2 == 0 { "Sunny" } else { "Cloudy" }.to_string(),
                })
                .collect(),
        })
    }
}

#[async_trait::async_trait]
impl AirQualityProvider for FakeProvider {
    async fn air_quality(
        &self,
        location: &Location,
        api_key: &str,
    ) -> Result<AirQualityReport, ProviderError> {
        self.record(location, api_key)?;
        Ok(AirQualityReport {
            city: location.city.clone(),
            country: location.country_code.clone().unwrap_or_else(|| "US".to_string()),
            aqi: 1,
            quality_level: "Good".to_string(),
            pollutants: Pollutants {
                pm2_5: 12.5,
                pm10: 25.3,
                o3: 68.2,
                no2: 15.7,
                so2: 5.2,
                co: 0.8,
            },
            health_recommendations: "Air quality is good. Suitable for outdoor activities."
                .to_string(),
        })
    }
}
