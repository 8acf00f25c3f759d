//! Argument validation against a tool's parameter schema.
//!
//! Checks run in a fixed order: required fields, then types, then numeric
//! bounds. The first violation is returned. On success the caller gets a new
//! argument map with declared defaults injected and integral floats given to
//! `integer` properties rewritten as integers; unknown keys pass through.

use serde_json::{Map, Number, Value};
use thiserror::Error;

use super::catalog::{PropertyType, ToolDefinition, integral_float, json_type_name};

/// Normalized tool arguments, ready for a handler.
pub type Arguments = Map<String, Value>;

/// Which declared bound a value violated.
#[derive(Debug, Clone, PartialEq)]
pub enum Bound {
    Minimum(Number),
    Maximum(Number),
}

impl std::fmt::Display for Bound {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Minimum(n) => write!(f, "at least {n} (minimum)"),
            Self::Maximum(n) => write!(f, "at most {n} (maximum)"),
        }
    }
}

/// Reasons an argument set is rejected.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    /// The arguments value is not a JSON object.
    #[error("arguments must be a JSON object, got {0}")]
    NotAnObject(&'static str),

    /// A required field is absent.
    #[error("missing required field: {0}")]
    MissingRequiredField(String),

    /// A field's value has the wrong JSON type.
    #[error("field '{field}' expected {expected}, got {actual}")]
    TypeMismatch {
        field: String,
        expected: PropertyType,
        actual: &'static str,
    },

    /// A numeric field lies outside its declared bounds.
    #[error("field '{field}' must be {bound}, got {value}")]
    OutOfRange {
        field: String,
        value: Value,
        bound: Bound,
    },
}

/// Validate raw arguments for a tool and return the normalized set.
///
/// `null` is accepted as an empty argument set. An explicit `null` for an
/// optional property is treated as if the property were absent.
pub fn validate(tool: &ToolDefinition, arguments: &Value) -> Result<Arguments, ValidationError> {
    let empty = Map::new();
    let args = match arguments {
        Value::Object(map) => map,
        Value::Null => &empty,
        other => return Err(ValidationError::NotAnObject(json_type_name(other))),
    };

    let schema = &tool.parameters;

    for name in &schema.required {
        if !args.contains_key(name) {
            return Err(ValidationError::MissingRequiredField(name.clone()));
        }
    }

    let is_absent = |name: &str| match args.get(name) {
        None => true,
        Some(Value::Null) => !schema.is_required(name),
        Some(_) => false,
    };

    for (name, spec) in schema.properties.iter() {
        if is_absent(name) {
            continue;
        }
        let Some(value) = args.get(name) else {
            continue;
        };
        if !spec.kind.matches(value) {
            return Err(ValidationError::TypeMismatch {
                field: name.to_string(),
                expected: spec.kind,
                actual: json_type_name(value),
            });
        }
    }

    for (name, spec) in schema.properties.iter() {
        if !spec.kind.is_numeric() || is_absent(name) {
            continue;
        }
        let Some(actual) = args.get(name).and_then(Value::as_f64) else {
            continue;
        };

        if let Some(min) = &spec.minimum {
            if min.as_f64().is_some_and(|min| actual < min) {
                return Err(out_of_range(name, &args[name], Bound::Minimum(min.clone())));
            }
        }
        if let Some(max) = &spec.maximum {
            if max.as_f64().is_some_and(|max| actual > max) {
                return Err(out_of_range(name, &args[name], Bound::Maximum(max.clone())));
            }
        }
    }

    let mut normalized = args.clone();
    for (name, spec) in schema.properties.iter() {
        if is_absent(name) {
            if let Some(default) = &spec.default {
                normalized.insert(name.to_string(), default.clone());
            }
            continue;
        }
        if spec.kind == PropertyType::Integer {
            if let Some(n) = args.get(name).and_then(integral_float) {
                normalized.insert(name.to_string(), Value::from(n));
            }
        }
    }

    Ok(normalized)
}

fn out_of_range(field: &str, value: &Value, bound: Bound) -> ValidationError {
    ValidationError::OutOfRange {
        field: field.to_string(),
        value: value.clone(),
        bound,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::tools::catalog::{ParameterSchema, PropertySpec, SchemaCatalog};
    use serde_json::json;

    fn weather() -> ToolDefinition {
        SchemaCatalog::builtin().get("get_weather").cloned().unwrap()
    }

    #[test]
    fn test_injects_default_days() {
        let args = validate(&weather(), &json!({ "city": "Seoul" })).unwrap();
        assert_eq!(args["city"], "Seoul");
        assert_eq!(args["days"], 3);
        assert!(!args.contains_key("api_key"));
    }

    #[test]
    fn test_keeps_supplied_days() {
        let args = validate(&weather(), &json!({ "city": "Seoul", "days": 7 })).unwrap();
        assert_eq!(args["days"], 7);
    }

    #[test]
    fn test_missing_city() {
        let err = validate(&weather(), &json!({ "days": 2 })).unwrap_err();
        assert_eq!(err, ValidationError::MissingRequiredField("city".to_string()));
    }

    #[test]
    fn test_type_mismatch() {
        let err = validate(&weather(), &json!({ "city": "Seoul", "days": "two" })).unwrap_err();
        assert_eq!(
            err,
            ValidationError::TypeMismatch {
                field: "days".to_string(),
                expected: PropertyType::Integer,
                actual: "string",
            }
        );
        assert_eq!(err.to_string(), "field 'days' expected integer, got string");
    }

    #[test]
    fn test_fractional_days_is_not_an_integer() {
        let err = validate(&weather(), &json!({ "city": "Seoul", "days": 2.5 })).unwrap_err();
        assert!(matches!(err, ValidationError::TypeMismatch { actual: "number", .. }));
    }

    #[test]
    fn test_integral_float_days_become_integer() {
        let args = validate(&weather(), &json!({ "city": "Seoul", "days": 7.0 })).unwrap();
        assert_eq!(args["days"], json!(7));
        assert!(args["days"].is_u64() || args["days"].is_i64());
    }

    #[test]
    fn test_integral_float_still_range_checked() {
        let err = validate(&weather(), &json!({ "city": "Seoul", "days": 10.0 })).unwrap_err();
        assert!(matches!(err, ValidationError::OutOfRange { bound: Bound::Maximum(_), .. }));
    }

    #[test]
    fn test_days_above_maximum() {
        let err = validate(&weather(), &json!({ "city": "Seoul", "days": 10 })).unwrap_err();
        assert!(matches!(err, ValidationError::OutOfRange { bound: Bound::Maximum(_), .. }));
        assert_eq!(err.to_string(), "field 'days' must be at most 7 (maximum), got 10");
    }

    #[test]
    fn test_days_below_minimum() {
        let err = validate(&weather(), &json!({ "city": "Seoul", "days": 0 })).unwrap_err();
        assert!(err.to_string().contains("minimum"));
    }

    #[test]
    fn test_first_violation_wins() {
        // Missing field is reported before the type and range problems.
        let err = validate(&weather(), &json!({ "days": "ten" })).unwrap_err();
        assert!(matches!(err, ValidationError::MissingRequiredField(_)));

        // Type problems are reported before range problems.
        let err = validate(&weather(), &json!({ "city": 5, "days": 99 })).unwrap_err();
        assert!(matches!(err, ValidationError::TypeMismatch { .. }));
    }

    #[test]
    fn test_unknown_fields_pass_through() {
        let args = validate(&weather(), &json!({ "city": "Seoul", "units": "metric" })).unwrap();
        assert_eq!(args["units"], "metric");
    }

    #[test]
    fn test_null_optional_is_absent() {
        let args = validate(
            &weather(),
            &json!({ "city": "Seoul", "country_code": null, "days": null }),
        )
        .unwrap();
        assert_eq!(args["country_code"], Value::Null);
        assert_eq!(args["days"], 3);
    }

    #[test]
    fn test_null_required_is_type_mismatch() {
        let err = validate(&weather(), &json!({ "city": null })).unwrap_err();
        assert!(matches!(err, ValidationError::TypeMismatch { actual: "null", .. }));
    }

    #[test]
    fn test_null_arguments_are_empty() {
        let health = SchemaCatalog::builtin().get("health").cloned().unwrap();
        assert!(validate(&health, &Value::Null).unwrap().is_empty());

        let err = validate(&weather(), &Value::Null).unwrap_err();
        assert!(matches!(err, ValidationError::MissingRequiredField(_)));
    }

    #[test]
    fn test_non_object_arguments() {
        let err = validate(&weather(), &json!(["Seoul"])).unwrap_err();
        assert_eq!(err, ValidationError::NotAnObject("array"));
    }

    #[test]
    fn test_validation_is_idempotent() {
        let tool = weather();
        let inputs = [
            json!({ "city": "Seoul" }),
            json!({ "city": "Paris", "country_code": "FR", "days": 5, "extra": true }),
            json!({ "city": "Lima", "days": null }),
            json!({ "city": "Oslo", "days": 4.0 }),
        ];

        for input in inputs {
            let once = validate(&tool, &input).unwrap();
            let twice = validate(&tool, &Value::Object(once.clone())).unwrap();
            assert_eq!(once, twice);
        }
    }

    #[test]
    fn test_number_bounds() {
        let tool = ToolDefinition::new(
            "ratio",
            "",
            ParameterSchema::empty().property(
                "value",
                PropertySpec {
                    kind: PropertyType::Number,
                    description: String::new(),
                    default: None,
                    minimum: Number::from_f64(0.0),
                    maximum: Number::from_f64(1.0),
                },
            ),
        );

        assert!(validate(&tool, &json!({ "value": 0.5 })).is_ok());
        assert!(validate(&tool, &json!({ "value": 1 })).is_ok());
        assert!(validate(&tool, &json!({ "value": 1.5 })).is_err());
    }
}
