//! Tool definitions module.
//!
//! One file per tool. Each exposes its registered `NAME` and implements
//! [`ToolHandler`](super::handlers::ToolHandler); the advertised schemas live
//! in the catalog, except for `get_tool_definitions`, which describes the
//! catalog and is not part of it.

pub mod air_quality;
pub mod health;
pub mod tool_definitions;
pub mod weather;

pub use air_quality::{AirQualityParams, AirQualityTool};
pub use health::HealthTool;
pub use tool_definitions::ToolDefinitionsTool;
pub use weather::{WeatherParams, WeatherTool};
