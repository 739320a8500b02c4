//! Widget id derivation.

use horizon_metaform_core::inspection::{AttributeMap, ElementKind, attr, attr_str};
use horizon_metaform_core::{WidgetNode, util};

use super::WidgetProcessor;
use crate::metaform::Metaform;

/// Sets each widget's `id` from the owning path and property name,
/// camel-joined: property `nestedFoo` under path `object.foo` becomes
/// `fooNestedFoo`. Widgets that already carry an id keep it.
///
/// Layouts rely on these ids for `label for=` association and for their own
/// derived ids (`table-<id>-row` and friends), so this processor runs first
/// in the default chain.
#[derive(Debug, Clone, Copy, Default)]
pub struct IdProcessor;

impl IdProcessor {
    pub fn new() -> Self {
        Self
    }
}

impl WidgetProcessor for IdProcessor {
    fn process_widget(
        &self,
        mut widget: WidgetNode,
        _element: ElementKind,
        attributes: &AttributeMap,
        metaform: &mut Metaform,
    ) -> Option<WidgetNode> {
        if widget.has_attribute("id") {
            return Some(widget);
        }
        let id = util::widget_id(metaform.path(), attr_str(attributes, attr::NAME));
        if !id.is_empty() {
            widget.set_attribute("id", id);
        }
        Some(widget)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_derives_id_from_path_and_name() {
        let mut metaform = Metaform::new(WidgetNode::new("div"));
        metaform.set_path("object.foo");

        let mut attributes = AttributeMap::new();
        attributes.insert("name".into(), json!("nestedFoo"));

        let widget = IdProcessor::new()
            .process_widget(
                WidgetNode::new("input"),
                ElementKind::Property,
                &attributes,
                &mut metaform,
            )
            .unwrap();
        assert_eq!(widget.attribute("id"), Some("fooNestedFoo"));
    }

    #[test]
    fn test_existing_id_is_kept() {
        let mut metaform = Metaform::new(WidgetNode::new("div"));
        let mut attributes = AttributeMap::new();
        attributes.insert("name".into(), json!("foo"));

        let widget = IdProcessor::new()
            .process_widget(
                WidgetNode::new("input").with_attribute("id", "custom"),
                ElementKind::Property,
                &attributes,
                &mut metaform,
            )
            .unwrap();
        assert_eq!(widget.attribute("id"), Some("custom"));
    }
}
