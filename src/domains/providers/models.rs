//! Output shapes returned by the weather and air-quality tools.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Current weather plus a daily forecast.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct WeatherReport {
    /// City name
    pub city: String,
    /// Country
    pub country: String,
    /// Current temperature (Celsius)
    pub current_temp: f64,
    /// Current weather condition
    pub current_condition: String,
    /// Daily forecast list
    pub forecast: Vec<ForecastDay>,
}

/// One day of a forecast.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct ForecastDay {
    /// Forecast date (YYYY-MM-DD)
    pub date: String,
    /// Minimum temperature (Celsius)
    pub min_temp: f64,
    /// Maximum temperature (Celsius)
    pub max_temp: f64,
    /// Weather condition
    pub condition: String,
}

/// Current air quality for a city.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct AirQualityReport {
    pub city: String,
    pub country: String,
    /// US EPA air quality index (1 = good, 6 = hazardous)
    pub aqi: u8,
    pub quality_level: String,
    pub pollutants: Pollutants,
    pub health_recommendations: String,
}

/// Pollutant concentrations in μg/m³.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Pollutants {
    pub pm2_5: f64,
    pub pm10: f64,
    pub o3: f64,
    pub no2: f64,
    pub so2: f64,
    pub co: f64,
}

/// Air quality band derived from the US EPA index.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AirQualityLevel {
    Good,
    Moderate,
    UnhealthyForSensitiveGroups,
    Unhealthy,
    VeryUnhealthy,
    Hazardous,
}

impl AirQualityLevel {
    /// Map a US EPA index (1-6) to a band.
    pub fn from_epa_index(index: u8) -> Option<Self> {
        match index {
            1 => Some(Self::Good),
            2 => Some(Self::Moderate),
            3 => Some(Self::UnhealthyForSensitiveGroups),
            4 => Some(Self::Unhealthy),
            5 => Some(Self::VeryUnhealthy),
            6 => Some(Self::Hazardous),
            _ => None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Good => "Good",
            Self::Moderate => "Moderate",
            Self::UnhealthyForSensitiveGroups => "Unhealthy for Sensitive Groups",
            Self::Unhealthy => "Unhealthy",
            Self::VeryUnhealthy => "Very Unhealthy",
            Self::Hazardous => "Hazardous",
        }
    }

    pub fn recommendation(self) -> &'static str {
        match self {
            Self::Good => "Air quality is good. Suitable for outdoor activities.",
            Self::Moderate => {
                "Air quality is acceptable. Unusually sensitive people should limit prolonged outdoor exertion."
            }
            Self::UnhealthyForSensitiveGroups => {
                "Sensitive groups should reduce prolonged or heavy outdoor exertion."
            }
            Self::Unhealthy => {
                "Everyone should reduce prolonged outdoor exertion. Sensitive groups should stay indoors."
            }
            Self::VeryUnhealthy => "Avoid outdoor activities. Keep windows closed.",
            Self::Hazardous => "Health warning: stay indoors and avoid all outdoor activity.",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_epa_index_mapping() {
        assert_eq!(AirQualityLevel::from_epa_index(1), Some(AirQualityLevel::Good));
        assert_eq!(
            AirQualityLevel::from_epa_index(6).map(AirQualityLevel::label),
            Some("Hazardous")
        );
        assert_eq!(AirQualityLevel::from_epa_index(0), None);
        assert_eq!(AirQualityLevel::from_epa_index(7), None);
    }

    #[test]
    fn test_good_recommendation() {
        assert_eq!(
            AirQualityLevel::Good.recommendation(),
            "Air quality is good. Suitable for outdoor activities."
        );
    }
}
