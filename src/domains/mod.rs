//! Domains module containing business logic organized by bounded contexts.
//!
//! - `tools` - the tool catalog, validation and dispatch
//! - `providers` - clients for the external weather data services

pub mod providers;
pub mod tools;
