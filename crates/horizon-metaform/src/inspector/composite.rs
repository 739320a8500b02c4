//! Composition of several inspectors into one.

use std::sync::Arc;

use horizon_metaform_core::InspectionResult;
use serde_json::Value;

use super::Inspector;

/// Runs an ordered set of inspectors and merges what they report.
///
/// Later inspectors overlay earlier ones: root attributes win on collision,
/// already-known properties gain the newer attributes, new properties append
/// in the order the reporting inspector declared them. Inspectors returning
/// `None` simply contribute nothing; the composite returns `None` only when
/// every inspector does.
pub struct CompositeInspector {
    inspectors: Vec<Arc<dyn Inspector>>,
}

impl CompositeInspector {
    /// Create an empty composite. Usually followed by [`add`](Self::add).
    pub fn new() -> Self {
        Self {
            inspectors: Vec::new(),
        }
    }

    /// Append an inspector to the composition.
    pub fn add(mut self, inspector: impl Inspector + 'static) -> Self {
        self.inspectors.push(Arc::new(inspector));
        self
    }
}

impl Default for CompositeInspector {
    fn default() -> Self {
        Self::new()
    }
}

impl Inspector for CompositeInspector {
    fn inspect(
        &self,
        to_inspect: Option<&Value>,
        type_name: &str,
        names: &[String],
    ) -> Option<InspectionResult> {
        let mut merged: Option<InspectionResult> = None;
        for inspector in &self.inspectors {
            let Some(result) = inspector.inspect(to_inspect, type_name, names) else {
                continue;
            };
            match &mut merged {
                Some(combined) => combined.merge(result),
                None => merged = Some(result),
            }
        }
        merged
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::inspector::{JsonSchemaInspector, PropertyTypeInspector};
    use horizon_metaform_core::{attr, attr_str, attr_truthy};
    use serde_json::json;

    #[test]
    fn test_schema_metadata_overlays_runtime_structure() {
        let inspector = CompositeInspector::new()
            .add(PropertyTypeInspector::new())
            .add(
                JsonSchemaInspector::new(json!({
                    "properties": {
                        "name": { "required": true }
                    }
                }))
                .unwrap(),
            );

        let value = json!({ "name": "Foo", "age": 42 });
        let result = inspector.inspect(Some(&value), "object", &[]).unwrap();

        let properties = result.properties();
        assert_eq!(properties[0].0, "name");
        assert_eq!(attr_str(&properties[0].1, attr::TYPE), Some("string"));
        assert!(attr_truthy(&properties[0].1, attr::REQUIRED));
        assert_eq!(properties[1].0, "age");
    }

    #[test]
    fn test_none_only_when_every_inspector_declines() {
        let inspector = CompositeInspector::new()
            .add(|_: Option<&Value>, _: &str, _: &[String]| None::<InspectionResult>)
            .add(|_: Option<&Value>, _: &str, _: &[String]| None::<InspectionResult>);
        assert!(inspector.inspect(None, "object", &[]).is_none());
    }
}
