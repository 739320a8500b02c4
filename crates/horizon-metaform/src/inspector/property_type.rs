//! Inspection of a value's actual structure.

use horizon_metaform_core::inspection::{AttributeMap, InspectionResult, attr, type_name};
use horizon_metaform_core::util;
use serde_json::{Map, Value};

use super::Inspector;

/// Inspects the runtime structure of the domain value itself.
///
/// The value is traversed along `names`; the value found there is reported
/// with its JSON type, and — when it is an object — one property per key in
/// declaration order. Nested objects are reported as `"object"` typed
/// properties without descending further; the pipeline recurses into them
/// with a nested Metaform, which triggers a fresh inspection at the deeper
/// path.
///
/// This is the default inspector.
#[derive(Debug, Clone, Copy, Default)]
pub struct PropertyTypeInspector;

impl PropertyTypeInspector {
    pub fn new() -> Self {
        Self
    }

    fn type_of(value: &Value) -> &'static str {
        match value {
            Value::Null => type_name::OBJECT,
            Value::Bool(_) => type_name::BOOLEAN,
            Value::Number(_) => type_name::NUMBER,
            Value::String(_) => type_name::STRING,
            Value::Array(_) => type_name::ARRAY,
            Value::Object(_) => type_name::OBJECT,
        }
    }
}

impl Inspector for PropertyTypeInspector {
    fn inspect(
        &self,
        to_inspect: Option<&Value>,
        _type_name: &str,
        names: &[String],
    ) -> Option<InspectionResult> {
        let value = util::traverse(to_inspect?, names)?;
        if value.is_null() {
            return None;
        }

        let mut result = InspectionResult::new();
        result.set_attribute(attr::TYPE, Value::String(Self::type_of(value).to_string()));

        if let Value::Object(entries) = value {
            for (name, entry) in entries {
                let mut attributes: AttributeMap = Map::new();
                attributes.insert(
                    attr::TYPE.to_string(),
                    Value::String(Self::type_of(entry).to_string()),
                );
                result.insert_property(name, attributes);
            }
        }

        tracing::trace!(
            target: "horizon_metaform::inspector",
            names = names.len(),
            "inspected value structure"
        );
        Some(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use horizon_metaform_core::attr_str;
    use serde_json::json;

    #[test]
    fn test_reports_properties_in_declaration_order() {
        let value = json!({ "foo": "Foo", "bar": 42, "baz": true });
        let result = PropertyTypeInspector::new()
            .inspect(Some(&value), "object", &[])
            .unwrap();

        let properties = result.properties();
        assert_eq!(properties.len(), 3);
        assert_eq!(properties[0].0, "foo");
        assert_eq!(attr_str(&properties[0].1, attr::TYPE), Some("string"));
        assert_eq!(properties[1].0, "bar");
        assert_eq!(attr_str(&properties[1].1, attr::TYPE), Some("number"));
        assert_eq!(properties[2].0, "baz");
        assert_eq!(attr_str(&properties[2].1, attr::TYPE), Some("boolean"));
    }

    #[test]
    fn test_traverses_names_before_inspecting() {
        let value = json!({ "foo": { "nestedFoo": "Foo" } });
        let result = PropertyTypeInspector::new()
            .inspect(Some(&value), "object", &["foo".to_string()])
            .unwrap();

        assert_eq!(result.attribute(attr::TYPE), Some(&json!("object")));
        assert_eq!(result.properties()[0].0, "nestedFoo");
    }

    #[test]
    fn test_missing_value_or_path_yields_none() {
        let inspector = PropertyTypeInspector::new();
        assert!(inspector.inspect(None, "object", &[]).is_none());

        let value = json!({ "foo": "Foo" });
        assert!(
            inspector
                .inspect(Some(&value), "object", &["missing".to_string()])
                .is_none()
        );
    }

    #[test]
    fn test_scalar_value_reports_type_without_properties() {
        let value = json!("just a string");
        let result = PropertyTypeInspector::new()
            .inspect(Some(&value), "object", &[])
            .unwrap();
        assert_eq!(result.attribute(attr::TYPE), Some(&json!("string")));
        assert!(!result.has_properties());
    }
}
