//! Inspection of a statically configured schema.

use horizon_metaform_core::InspectionResult;
use serde_json::{Map, Value};

use super::Inspector;
use crate::error::{Error, Result};

/// Inspects a JSON-Schema-shaped value supplied up front, instead of the
/// domain value itself.
///
/// Traversal follows `names` through nested `properties` blocks: inspecting
/// with `names = ["bar"]` returns the schema fragment at
/// `properties.bar`, complete with any `properties` it declares of its own.
/// Paths absent from the schema yield `None`.
///
/// Typically composed with [`PropertyTypeInspector`] through a
/// [`CompositeInspector`] so that static metadata (required flags, enums,
/// ordering) overlays the runtime structure.
///
/// [`PropertyTypeInspector`]: super::PropertyTypeInspector
/// [`CompositeInspector`]: super::CompositeInspector
#[derive(Debug, Clone)]
pub struct JsonSchemaInspector {
    schema: Map<String, Value>,
}

impl JsonSchemaInspector {
    /// Create an inspector over the given schema.
    ///
    /// Returns [`Error::Config`] when the schema is not a JSON object.
    pub fn new(schema: Value) -> Result<Self> {
        match schema {
            Value::Object(schema) => Ok(Self { schema }),
            other => Err(Error::config(format!(
                "JsonSchemaInspector expects a JSON object schema, got {other}"
            ))),
        }
    }
}

impl Inspector for JsonSchemaInspector {
    fn inspect(
        &self,
        _to_inspect: Option<&Value>,
        _type_name: &str,
        names: &[String],
    ) -> Option<InspectionResult> {
        let mut current: &Map<String, Value> = &self.schema;
        for name in names {
            current = current
                .get("properties")
                .and_then(Value::as_object)?
                .get(name)
                .and_then(Value::as_object)?;
        }
        InspectionResult::try_from_value(Value::Object(current.clone())).ok()
    }
}
