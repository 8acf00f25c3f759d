//! Tools domain module.
//!
//! Everything needed to advertise and execute the weather tools.
//!
//! ## Architecture
//!
//! - `catalog.rs` - Tool definitions and their parameter schemas
//! - `validator.rs` - Argument checking and default injection
//! - `registry.rs` - Name to handler table and `dispatch`, the fault boundary
//! - `definitions/` - Individual tool handlers (one file per tool)
//! - `router.rs` - rmcp ToolRouter built from the registry
//! - `export.rs` - The `{"tools": [...]}` discovery document
//! - `error.rs` - Tool-specific error types
//!
//! ## Adding a New Tool
//!
//! 1. Create a new file in `definitions/` implementing `ToolHandler`
//! 2. Export it in `definitions/mod.rs`
//! 3. Describe its parameters in `SchemaCatalog::builtin`
//! 4. Insert its handler in `ToolRegistry::from_config`
//!
//! The rmcp router and the HTTP surface both pick it up from the registry.

pub mod catalog;
pub mod definitions;
mod error;
pub mod export;
mod handlers;
mod registry;
pub mod router;
pub mod validator;

pub use catalog::{SchemaCatalog, ToolDefinition};
pub use error::ToolError;
pub use handlers::*;
pub use registry::{RegisteredTool, ToolRegistry};
pub use router::build_tool_router;
pub use validator::{ValidationError, validate};
