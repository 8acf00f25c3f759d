//! Catalog Exporter - the `{"tools": [...]}` discovery document.

use serde::Serialize;
use std::path::Path;
use tracing::info;

use super::catalog::ToolDefinition;

#[derive(Serialize)]
struct CatalogDocument<'a> {
    tools: &'a [ToolDefinition],
}

/// Render the tool definitions as the discovery document.
///
/// Output is pretty-printed with two-space indentation and keys in
/// declaration order, so the same catalog always yields the same bytes.
pub fn export_json(tools: &[ToolDefinition]) -> serde_json::Result<String> {
    serde_json::to_string_pretty(&CatalogDocument { tools })
}

/// The discovery document as a JSON value.
pub fn export_value(tools: &[ToolDefinition]) -> serde_json::Result<serde_json::Value> {
    serde_json::to_value(CatalogDocument { tools })
}

/// Write the discovery document to `path`.
pub fn write_catalog(tools: &[ToolDefinition], path: &Path) -> crate::Result<()> {
    let json = export_json(tools)?;
    std::fs::write(path, json)?;
    info!("Tool definition JSON file has been generated: {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::tools::catalog::SchemaCatalog;
    use serde_json::json;

    const EXPECTED: &str = r#"{
  "tools": [
    {
      "name": "health",
      "description": "Service status check",
      "parameters": {
        "type": "object",
        "properties": {},
        "required": []
      }
    },
    {
      "name": "get_weather",
      "description": "Provides current weather and forecast for a specific city.",
      "parameters": {
        "type": "object",
        "properties": {
          "city": {
            "type": "string",
            "description": "City name to check the weather for"
          },
          "country_code": {
            "type": "string",
            "description": "Country code (e.g., 'US', 'UK')"
          },
          "days": {
            "type": "integer",
            "description": "Number of days for the forecast",
            "default": 3,
            "minimum": 1,
            "maximum": 7
          },
          "api_key": {
            "type": "string",
            "description": "Weather API key (uses default if not provided)"
          }
        },
        "required": [
          "city"
        ]
      }
    },
    {
      "name": "get_air_quality",
      "description": "Provides air quality information for a specific city.",
      "parameters": {
        "type": "object",
        "properties": {
          "city": {
            "type": "string",
            "description": "City name to check air quality for"
          },
          "country_code": {
            "type": "string",
            "description": "Country code (e.g., 'US', 'UK')"
          },
          "api_key": {
            "type": "string",
            "description": "Air quality API key (uses default if not provided)"
          }
        },
        "required": [
          "city"
        ]
      }
    }
  ]
}"#;

    #[test]
    fn test_export_matches_document() {
        let catalog = SchemaCatalog::builtin();
        assert_eq!(export_json(catalog.list()).unwrap(), EXPECTED);
    }

    #[test]
    fn test_export_is_deterministic() {
        let first = export_json(SchemaCatalog::builtin().list()).unwrap();
        let second = export_json(SchemaCatalog::builtin().list()).unwrap();
        assert_eq!(first.as_bytes(), second.as_bytes());
    }

    #[test]
    fn test_export_value() {
        let value = export_value(SchemaCatalog::builtin().list()).unwrap();
        assert_eq!(value["tools"][0]["parameters"]["properties"], json!({}));
        assert_eq!(value["tools"].as_array().unwrap().len(), 3);
    }

    #[test]
    fn test_write_catalog() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("tool_definitions.json");

        write_catalog(SchemaCatalog::builtin().list(), &path).unwrap();

        let written = std::fs::read_to_string(&path).unwrap();
        assert_eq!(written, EXPECTED);
    }
}
