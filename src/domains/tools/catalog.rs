//! Schema Catalog - the static description of every tool.
//!
//! The catalog is hand-authored data: tool names, descriptions and the
//! JSON-Schema-shaped parameter definitions that callers see. Handlers live
//! in `definitions/` and are attached to these entries by the registry, so
//! the catalog can be checked and exported without touching any handler.

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::{Number, Value};

use super::definitions::{AirQualityTool, HealthTool, WeatherTool};
use super::error::ToolError;

// ============================================================================
// Schema Types
// ============================================================================

/// JSON type a property value must have.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PropertyType {
    String,
    Integer,
    Number,
    Boolean,
    Object,
}

impl PropertyType {
    /// Name used in the schema document and in error messages.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::String => "string",
            Self::Integer => "integer",
            Self::Number => "number",
            Self::Boolean => "boolean",
            Self::Object => "object",
        }
    }

    /// Check whether a JSON value has this type.
    pub fn matches(self, value: &Value) -> bool {
        match self {
            Self::String => value.is_string(),
            Self::Integer => value.is_i64() || value.is_u64() || integral_float(value).is_some(),
            Self::Number => value.is_number(),
            Self::Boolean => value.is_boolean(),
            Self::Object => value.is_object(),
        }
    }

    /// Whether `minimum`/`maximum` apply to this type.
    pub fn is_numeric(self) -> bool {
        matches!(self, Self::Integer | Self::Number)
    }
}

impl std::fmt::Display for PropertyType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An integral float such as `7.0`, as the integer it stands for.
///
/// Values outside the `i64` range are not integral for this purpose.
pub fn integral_float(value: &Value) -> Option<i64> {
    let n = match value {
        Value::Number(n) if n.is_f64() => n.as_f64()?,
        _ => return None,
    };
    (n.fract() == 0.0 && n >= i64::MIN as f64 && n < i64::MAX as f64).then_some(n as i64)
}

/// Name of the JSON type of an arbitrary value.
pub fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(n) if n.is_i64() || n.is_u64() => "integer",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Declaration of a single tool parameter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PropertySpec {
    #[serde(rename = "type")]
    pub kind: PropertyType,

    pub description: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default: Option<Value>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub minimum: Option<Number>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub maximum: Option<Number>,
}

impl PropertySpec {
    fn new(kind: PropertyType, description: &str) -> Self {
        Self {
            kind,
            description: description.to_string(),
            default: None,
            minimum: None,
            maximum: None,
        }
    }

    /// A string property.
    pub fn string(description: &str) -> Self {
        Self::new(PropertyType::String, description)
    }

    /// An integer property.
    pub fn integer(description: &str) -> Self {
        Self::new(PropertyType::Integer, description)
    }

    /// Set the value injected when the caller omits this property.
    pub fn with_default(mut self, default: impl Into<Value>) -> Self {
        self.default = Some(default.into());
        self
    }

    /// Set the inclusive numeric bounds.
    pub fn with_range(mut self, minimum: impl Into<Number>, maximum: impl Into<Number>) -> Self {
        self.minimum = Some(minimum.into());
        self.maximum = Some(maximum.into());
        self
    }
}

/// Marker for the `"type": "object"` field of a parameter schema.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SchemaKind {
    #[default]
    Object,
}

/// Properties in declaration order.
///
/// Serialized as a JSON object whose keys keep the order they were declared
/// in, which keeps the exported catalog byte-stable.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Properties(Vec<(String, PropertySpec)>);

impl Properties {
    /// Look up a property by name.
    pub fn get(&self, name: &str) -> Option<&PropertySpec> {
        self.0.iter().find(|(n, _)| n == name).map(|(_, spec)| spec)
    }

    /// Whether a property with this name is declared.
    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Iterate properties in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &PropertySpec)> {
        self.0.iter().map(|(name, spec)| (name.as_str(), spec))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Serialize for Properties {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (name, spec) in &self.0 {
            map.serialize_entry(name, spec)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for Properties {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct PropertiesVisitor;

        impl<'de> Visitor<'de> for PropertiesVisitor {
            type Value = Properties;

            fn expecting(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str("a map of property name to property spec")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Properties, A::Error> {
                let mut entries = Vec::with_capacity(access.size_hint().unwrap_or(0));
                while let Some((name, spec)) = access.next_entry::<String, PropertySpec>()? {
                    entries.push((name, spec));
                }
                Ok(Properties(entries))
            }
        }

        deserializer.deserialize_map(PropertiesVisitor)
    }
}

/// The `parameters` object of a tool definition.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ParameterSchema {
    #[serde(rename = "type")]
    pub kind: SchemaKind,

    pub properties: Properties,

    pub required: Vec<String>,
}

impl ParameterSchema {
    /// An empty schema (no parameters).
    pub fn empty() -> Self {
        Self::default()
    }

    /// Declare a property. Later declarations keep their position.
    pub fn property(mut self, name: &str, spec: PropertySpec) -> Self {
        self.properties.0.push((name.to_string(), spec));
        self
    }

    /// Mark a declared property as required.
    pub fn require(mut self, name: &str) -> Self {
        self.required.push(name.to_string());
        self
    }

    /// Whether a property is listed in `required`.
    pub fn is_required(&self, name: &str) -> bool {
        self.required.iter().any(|r| r == name)
    }

    /// Render as a JSON object (for MCP `inputSchema`).
    pub fn to_json_object(&self) -> serde_json::Result<serde_json::Map<String, Value>> {
        match serde_json::to_value(self)? {
            Value::Object(map) => Ok(map),
            other => Err(serde::ser::Error::custom(format!(
                "parameter schema rendered as {}, expected object",
                json_type_name(&other)
            ))),
        }
    }
}

/// A tool as advertised to callers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToolDefinition {
    pub name: String,
    pub description: String,
    pub parameters: ParameterSchema,
}

impl ToolDefinition {
    pub fn new(name: &str, description: &str, parameters: ParameterSchema) -> Self {
        Self {
            name: name.to_string(),
            description: description.to_string(),
            parameters,
        }
    }

    /// Verify the schema invariants of this definition.
    ///
    /// Every required name must be declared, and a declared default must
    /// have the declared type and lie within any declared bounds.
    pub fn check(&self) -> Result<(), ToolError> {
        if self.name.is_empty() {
            return Err(ToolError::invalid_definition("tool name cannot be empty"));
        }

        for name in &self.parameters.required {
            if !self.parameters.properties.contains(name) {
                return Err(ToolError::invalid_definition(format!(
                    "tool '{}' requires undeclared property '{}'",
                    self.name, name
                )));
            }
        }

        for (name, spec) in self.parameters.properties.iter() {
            let Some(default) = &spec.default else {
                continue;
            };

            if !spec.kind.matches(default) {
                return Err(ToolError::invalid_definition(format!(
                    "default of '{}.{}' is {}, expected {}",
                    self.name,
                    name,
                    json_type_name(default),
                    spec.kind
                )));
            }

            let value = default.as_f64();
            let below = spec
                .minimum
                .as_ref()
                .and_then(Number::as_f64)
                .zip(value)
                .is_some_and(|(min, v)| v < min);
            let above = spec
                .maximum
                .as_ref()
                .and_then(Number::as_f64)
                .zip(value)
                .is_some_and(|(max, v)| v > max);
            if below || above {
                return Err(ToolError::invalid_definition(format!(
                    "default of '{}.{}' lies outside its declared range",
                    self.name, name
                )));
            }
        }

        Ok(())
    }
}

// ============================================================================
// Built-in Catalog
// ============================================================================

/// The ordered set of all tool definitions known to the service.
#[derive(Debug, Clone, Default)]
pub struct SchemaCatalog {
    tools: Vec<ToolDefinition>,
}

impl SchemaCatalog {
    /// Build a catalog from explicit definitions.
    pub fn new(tools: Vec<ToolDefinition>) -> Self {
        Self { tools }
    }

    /// The catalog shipped with the server.
    pub fn builtin() -> Self {
        Self::new(vec![
            ToolDefinition::new(
                HealthTool::NAME,
                "Service status check",
                ParameterSchema::empty(),
            ),
            ToolDefinition::new(
                WeatherTool::NAME,
                "Provides current weather and forecast for a specific city.",
                ParameterSchema::empty()
                    .property(
                        "city",
                        PropertySpec::string("City name to check the weather for"),
                    )
                    .property(
                        "country_code",
                        PropertySpec::string("Country code (e.g., 'US', 'UK')"),
                    )
                    .property(
                        "days",
                        PropertySpec::integer("Number of days for the forecast")
                            .with_default(3)
                            .with_range(1, 7),
                    )
                    .property(
                        "api_key",
                        PropertySpec::string("Weather API key (uses default if not provided)"),
                    )
                    .require("city"),
            ),
            ToolDefinition::new(
                AirQualityTool::NAME,
                "Provides air quality information for a specific city.",
                ParameterSchema::empty()
                    .property(
                        "city",
                        PropertySpec::string("City name to check air quality for"),
                    )
                    .property(
                        "country_code",
                        PropertySpec::string("Country code (e.g., 'US', 'UK')"),
                    )
                    .property(
                        "api_key",
                        PropertySpec::string(
                            "Air quality API key (uses default if not provided)",
                        ),
                    )
                    .require("city"),
            ),
        ])
    }

    /// All definitions in declaration order.
    pub fn list(&self) -> &[ToolDefinition] {
        &self.tools
    }

    /// Find a definition by tool name.
    pub fn get(&self, name: &str) -> Option<&ToolDefinition> {
        self.tools.iter().find(|t| t.name == name)
    }

    /// Check every definition and reject duplicate names.
    pub fn check(&self) -> Result<(), ToolError> {
        for (i, tool) in self.tools.iter().enumerate() {
            tool.check()?;
            if self.tools[..i].iter().any(|t| t.name == tool.name) {
                return Err(ToolError::duplicate(&tool.name));
            }
        }
        Ok(())
    }
}
