//! Tool-specific error types.

use thiserror::Error;

use super::validator::ValidationError;
use crate::domains::providers::{CredentialError, ProviderError};

/// Errors that can occur during tool registration and dispatch.
///
/// The display text of each variant is what callers see in the `message`
/// of a failed call, so it names the fault category.
#[derive(Debug, Error)]
pub enum ToolError {
    /// The requested tool was not found.
    #[error("unknown tool: {0}")]
    UnknownTool(String),

    /// The arguments did not satisfy the tool's schema.
    #[error("invalid arguments: {0}")]
    InvalidArguments(#[from] ValidationError),

    /// No usable credential could be resolved for a provider call.
    #[error(transparent)]
    Credential(#[from] CredentialError),

    /// The external provider failed or returned an unusable response.
    #[error("provider error: {0}")]
    Provider(#[from] ProviderError),

    /// The tool timed out during execution.
    #[error("tool execution timed out")]
    Timeout,

    /// A tool definition violates the schema invariants.
    #[error("invalid tool definition: {0}")]
    InvalidDefinition(String),

    /// A tool with this name is already registered.
    #[error("tool already registered: {0}")]
    Duplicate(String),

    /// An internal error occurred.
    #[error("internal error: {0}")]
    Internal(String),
}

impl ToolError {
    /// Create a new "unknown tool" error.
    pub fn unknown_tool(name: impl Into<String>) -> Self {
        Self::UnknownTool(name.into())
    }

    /// Create a new "invalid definition" error.
    pub fn invalid_definition(msg: impl Into<String>) -> Self {
        Self::InvalidDefinition(msg.into())
    }

    /// Create a new "duplicate" error.
    pub fn duplicate(name: impl Into<String>) -> Self {
        Self::Duplicate(name.into())
    }

    /// Create a new "internal" error.
    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }
}

impl From<serde_json::Error> for ToolError {
    fn from(e: serde_json::Error) -> Self {
        Self::Internal(e.to_string())
    }
}
