//! Startup sequence: write the catalog document if one was requested, then
//! serve on the configured transport.

use std::path::PathBuf;
use tracing::{error, info};

use super::TransportConfig;
use crate::core::{Config, McpServer};

#[cfg(feature = "stdio")]
use super::stdio::StdioTransport;

#[cfg(feature = "http")]
use super::http::HttpTransport;

/// Runs the server on one transport.
pub struct TransportService {
    transport: TransportConfig,
    catalog_path: Option<PathBuf>,
}

impl TransportService {
    pub fn new(transport: TransportConfig) -> Self {
        Self {
            transport,
            catalog_path: None,
        }
    }

    /// Transport and catalog export settings taken from `config`.
    pub fn from_config(config: &Config) -> Self {
        Self {
            transport: config.transport.clone(),
            catalog_path: config.catalog.export_path.clone(),
        }
    }

    /// Write the catalog document to `path` before serving.
    pub fn with_catalog_export(mut self, path: impl Into<PathBuf>) -> Self {
        self.catalog_path = Some(path.into());
        self
    }

    fn export_catalog(&self, server: &McpServer) -> crate::Result<()> {
        let Some(path) = &self.catalog_path else {
            return Ok(());
        };
        server
            .export_catalog(path)
            .inspect_err(|e| error!("Failed to write tool catalog to {}: {}", path.display(), e))
    }

    /// Export the catalog, then serve until the transport shuts down.
    ///
    /// A failed export stops startup before anything is bound.
    pub async fn run(self, server: McpServer) -> crate::Result<()> {
        self.export_catalog(&server)?;

        info!("Starting transport: {}", self.transport.description());
        let served = match self.transport {
            #[cfg(feature = "stdio")]
            TransportConfig::Stdio => StdioTransport::run(server).await,
            #[cfg(feature = "http")]
            TransportConfig::Http(cfg) => HttpTransport::new(cfg).run(server).await,
        };
        Ok(served?)
    }
}
