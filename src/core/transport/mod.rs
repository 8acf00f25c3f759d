//! Transport layer for the MCP server.
//!
//! This module provides two transport implementations:
//! - **HTTP**: JSON-RPC over POST plus plain tool endpoints - feature: `http`
//! - **STDIO**: rmcp over standard input/output - feature: `stdio`
//!
//! Both hand every tool call to the same registry.
//!
//! # Feature Flags
//!
//! - `http` (default): adds axum, tower, tower-http
//! - `stdio`: STDIO transport - minimal dependencies

mod config;
mod error;
mod service;

#[cfg(feature = "http")]
pub mod http;

#[cfg(feature = "stdio")]
pub mod stdio;

pub use config::TransportConfig;
pub use error::{TransportError, TransportResult};
pub use service::TransportService;

#[cfg(feature = "http")]
pub use config::HttpConfig;
