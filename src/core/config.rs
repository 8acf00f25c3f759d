//! Configuration management for the MCP server.
//!
//! This module provides a centralized configuration structure that can be
//! populated from environment variables (and a `.env` file) or defaults.

use super::transport::TransportConfig;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

use crate::domains::providers::DEFAULT_BASE_URL;

/// Main configuration structure for the MCP server.
///
/// This struct contains all configurable aspects of the server, organized
/// by domain for clarity and maintainability.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Server identification and metadata.
    pub server: ServerConfig,

    /// Logging configuration.
    pub logging: LoggingConfig,

    /// Transport configuration.
    pub transport: TransportConfig,

    /// External API credentials configuration.
    pub credentials: CredentialsConfig,

    /// Weather data provider settings.
    pub providers: ProvidersConfig,

    /// Tool dispatch settings.
    pub tools: ToolsConfig,

    /// Catalog export settings.
    pub catalog: CatalogConfig,

    /// Problems found while reading the environment. Logging is not set up
    /// yet when `from_env` runs, so `main` reports these afterwards.
    #[serde(skip)]
    warnings: Vec<String>,
}

/// Server identification configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// The name of the server as reported to clients.
    pub name: String,

    /// The version of the server.
    pub version: String,
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level filter (e.g., "info", "debug", "trace").
    pub level: String,

    /// Whether to include timestamps in log output.
    pub with_timestamps: bool,
}

/// Configuration for external API credentials.
#[derive(Clone, Default, Serialize, Deserialize)]
pub struct CredentialsConfig {
    /// Default WeatherAPI key, used when a call does not pass `api_key`.
    pub weather_api_key: Option<String>,
}

/// Custom Debug implementation to redact secrets from logs.
impl std::fmt::Debug for CredentialsConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CredentialsConfig")
            .field(
                "weather_api_key",
                &self.weather_api_key.as_ref().map(|_| "[REDACTED]"),
            )
            .finish()
    }
}

/// Weather data provider configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProvidersConfig {
    /// Base URL of the WeatherAPI service.
    pub weather_api_url: String,

    /// Per-request timeout, in seconds.
    pub timeout_secs: u64,
}

impl ProvidersConfig {
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

impl Default for ProvidersConfig {
    fn default() -> Self {
        Self {
            weather_api_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: 10,
        }
    }
}

/// Tool dispatch configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolsConfig {
    /// Upper bound on a single tool call, in seconds. `0` disables it.
    pub call_timeout_secs: u64,
}

impl ToolsConfig {
    /// The dispatch timeout, or `None` when disabled.
    pub fn call_timeout(&self) -> Option<Duration> {
        (self.call_timeout_secs > 0).then(|| Duration::from_secs(self.call_timeout_secs))
    }
}

impl Default for ToolsConfig {
    fn default() -> Self {
        Self {
            call_timeout_secs: 30,
        }
    }
}

/// Catalog export configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CatalogConfig {
    /// Where to write the tool definitions document at startup.
    pub export_path: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                name: "weather-mcp-server".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
            },
            logging: LoggingConfig {
                level: "info".to_string(),
                with_timestamps: true,
            },
            transport: TransportConfig::default(),
            credentials: CredentialsConfig::default(),
            providers: ProvidersConfig::default(),
            tools: ToolsConfig::default(),
            catalog: CatalogConfig::default(),
            warnings: Vec::new(),
        }
    }
}

impl Config {

    /// Load configuration from environment variables.
    ///
    /// Environment variables are expected to be prefixed with `MCP_`.
    /// For example: `MCP_SERVER_NAME`, `MCP_LOG_LEVEL`.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let mut config = Self::default();

        if let Ok(name) = std::env::var("MCP_SERVER_NAME") {
            config.server.name = name;
        }

        if let Ok(level) = std::env::var("MCP_LOG_LEVEL") {
            config.logging.level = level;
        }

        if let Ok(timestamps) = std::env::var("MCP_LOG_TIMESTAMPS") {
            config.logging.with_timestamps = parse_flag(&timestamps);
        }

        // Load transport configuration from environment
        config.transport = TransportConfig::from_env();

        // Load the default weather API key
        config.credentials.weather_api_key = std::env::var("MCP_WEATHER_API_KEY")
            .or_else(|_| std::env::var("WEATHER_API_KEY"))
            .ok()
            .filter(|key| !key.trim().is_empty());

        if let Ok(url) = std::env::var("MCP_WEATHER_API_URL") {
            config.providers.weather_api_url = url;
        }

        if let Some(secs) = config.parse_secs("MCP_PROVIDER_TIMEOUT_SECS") {
            config.providers.timeout_secs = secs;
        }

        if let Some(secs) = config.parse_secs("MCP_TOOL_TIMEOUT_SECS") {
            config.tools.call_timeout_secs = secs;
        }

        if let Ok(path) = std::env::var("MCP_TOOL_DEFINITIONS_PATH") {
            config.catalog.export_path = Some(PathBuf::from(path));
        }

        config
    }

    /// Environment values that were ignored while loading.
    pub fn warnings(&self) -> &[String] {
        &self.warnings
    }

    fn parse_secs(&mut self, var: &str) -> Option<u64> {
        let raw = std::env::var(var).ok()?;
        match raw.trim().parse() {
            Ok(secs) => Some(secs),
            Err(_) => {
                self.warnings
                    .push(format!("Ignoring {var}: '{raw}' is not a number of seconds"));
                None
            }
        }
    }
}

fn parse_flag(value: &str) -> bool {
    let value = value.to_lowercase();
    value != "false" && value != "0"
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    // Mutex to ensure env var tests run serially
    static ENV_TEST_LOCK: Mutex<()> = Mutex::new(());

    const VARS: &[&str] = &[
        "MCP_WEATHER_API_KEY",
        "WEATHER_API_KEY",
        "MCP_WEATHER_API_URL",
        "MCP_PROVIDER_TIMEOUT_SECS",
        "MCP_TOOL_TIMEOUT_SECS",
        "MCP_TOOL_DEFINITIONS_PATH",
        "MCP_LOG_TIMESTAMPS",
    ];

    fn clear_env() {
        for var in VARS {
            unsafe {
                std::env::remove_var(var);
            }
        }
    }

    #[test]
    fn test_credentials_from_env() {
        let _lock = ENV_TEST_LOCK.lock().unwrap();
        clear_env();
        unsafe {
            std::env::set_var("MCP_WEATHER_API_KEY", "test_key_12345");
        }
        let config = Config::from_env();
        assert_eq!(
            config.credentials.weather_api_key.as_deref(),
            Some("test_key_12345")
        );
        clear_env();
    }

    #[test]
    fn test_credentials_fallback_variable() {
        let _lock = ENV_TEST_LOCK.lock().unwrap();
        clear_env();
        unsafe {
            std::env::set_var("WEATHER_API_KEY", "legacy_key");
        }
        let config = Config::from_env();
        assert_eq!(config.credentials.weather_api_key.as_deref(), Some("legacy_key"));
        clear_env();
    }

    #[test]
    fn test_blank_credential_is_absent() {
        let _lock = ENV_TEST_LOCK.lock().unwrap();
        clear_env();
        unsafe {
            std::env::set_var("MCP_WEATHER_API_KEY", "   ");
        }
        let config = Config::from_env();
        assert!(config.credentials.weather_api_key.is_none());
        clear_env();
    }

    #[test]
    fn test_provider_and_tool_settings_from_env() {
        let _lock = ENV_TEST_LOCK.lock().unwrap();
        clear_env();
        unsafe {
            std::env::set_var("MCP_WEATHER_API_URL", "http://127.0.0.1:9999/v1");
            std::env::set_var("MCP_PROVIDER_TIMEOUT_SECS", "3");
            std::env::set_var("MCP_TOOL_TIMEOUT_SECS", "0");
            std::env::set_var("MCP_TOOL_DEFINITIONS_PATH", "/tmp/tool_definitions.json");
            std::env::set_var("MCP_LOG_TIMESTAMPS", "false");
        }
        let config = Config::from_env();
        assert_eq!(config.providers.weather_api_url, "http://127.0.0.1:9999/v1");
        assert_eq!(config.providers.request_timeout(), Duration::from_secs(3));
        assert_eq!(config.tools.call_timeout(), None);
        assert_eq!(
            config.catalog.export_path,
            Some(PathBuf::from("/tmp/tool_definitions.json"))
        );
        assert!(!config.logging.with_timestamps);
        clear_env();
    }

    #[test]
    fn test_invalid_timeout_keeps_default() {
        let _lock = ENV_TEST_LOCK.lock().unwrap();
        clear_env();
        unsafe {
            std::env::set_var("MCP_TOOL_TIMEOUT_SECS", "soon");
        }
        let config = Config::from_env();
        assert_eq!(config.tools.call_timeout(), Some(Duration::from_secs(30)));
        assert_eq!(config.warnings().len(), 1);
        assert!(config.warnings()[0].contains("MCP_TOOL_TIMEOUT_SECS"));
        assert!(config.warnings()[0].contains("'soon'"));
        clear_env();
    }

    #[test]
    fn test_clean_env_has_no_warnings() {
        let _lock = ENV_TEST_LOCK.lock().unwrap();
        clear_env();
        unsafe {
            std::env::set_var("MCP_PROVIDER_TIMEOUT_SECS", "5");
        }
        let config = Config::from_env();
        assert!(config.warnings().is_empty());
        clear_env();
    }

    #[test]
    fn test_credentials_redacted_in_debug() {
        let creds = CredentialsConfig {
            weather_api_key: Some("super_secret_key".to_string()),
        };
        let debug_str = format!("{:?}", creds);
        assert!(debug_str.contains("REDACTED"));
        assert!(!debug_str.contains("super_secret_key"));
    }

    #[test]
    fn test_config_defaults() {
        let config = Config::default();
        assert_eq!(config.server.name, "weather-mcp-server");
        assert!(config.credentials.weather_api_key.is_none());
        assert_eq!(config.providers.weather_api_url, DEFAULT_BASE_URL);
        assert_eq!(config.tools.call_timeout(), Some(Duration::from_secs(30)));
        assert!(config.catalog.export_path.is_none());
    }
}
