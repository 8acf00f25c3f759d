//! Weather MCP Server Library
//!
//! A Model Context Protocol server exposing weather tools (`health`,
//! `get_weather`, `get_air_quality`) behind a schema-validated registry.
//!
//! # Architecture
//!
//! - **core**: configuration, error handling, the rmcp server and transports
//! - **domains**: business logic organized by bounded contexts
//!   - **tools**: schema catalog, validator, registry/dispatcher, exporter
//!   - **providers**: WeatherAPI client and credential resolution
//!
//! # Example
//!
//! ```rust,no_run
//! use weather_mcp_server::{core::Config, core::McpServer};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let server = McpServer::new(Config::from_env())?;
//!     let result = server
//!         .call_tool("get_weather", serde_json::json!({ "city": "Seoul", "days": 2 }))
//!         .await;
//!     println!("{}", serde_json::to_string_pretty(&result)?);
//!     Ok(())
//! }
//! ```

pub mod core;
pub mod domains;

// Re-export commonly used types for convenience
pub use core::{Config, Error, McpServer, Result};
pub use domains::tools::{ToolCallRequest, ToolCallResult, ToolRegistry};
