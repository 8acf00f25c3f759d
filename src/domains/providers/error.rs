//! Provider and credential error types.

use thiserror::Error;

/// No usable credential could be resolved.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CredentialError {
    /// Neither the request nor the configuration supplied an API key.
    #[error(
        "no API credential available: pass `api_key` or configure MCP_WEATHER_API_KEY"
    )]
    Missing,
}

/// Errors returned by an external data provider.
#[derive(Debug, Error)]
pub enum ProviderError {
    /// The provider could not be reached.
    #[error("connection failed: {0}")]
    Connection(String),

    /// The provider did not answer in time.
    #[error("request timed out")]
    Timeout,

    /// The provider refused the API credential (invalid or expired key).
    #[error("credential rejected by provider ({status}): {detail}")]
    Unauthorized { status: u16, detail: String },

    /// The provider answered with a non-success status.
    #[error("provider returned status {status}: {detail}")]
    Status { status: u16, detail: String },

    /// The provider's response body could not be understood.
    #[error("malformed provider response: {0}")]
    InvalidResponse(String),
}

impl ProviderError {
    /// Create a new "invalid response" error.
    pub fn invalid_response(msg: impl Into<String>) -> Self {
        Self::InvalidResponse(msg.into())
    }
}

impl From<reqwest::Error> for ProviderError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            Self::Timeout
        } else if e.is_connect() {
            Self::Connection(e.to_string())
        } else if e.is_decode() {
            Self::InvalidResponse(e.to_string())
        } else {
            Self::Connection(e.to_string())
        }
    }
}
