//! Block-based layout.

use horizon_metaform_core::inspection::{AttributeMap, ElementKind, attr, attr_str};
use horizon_metaform_core::{WidgetNode, util};

use super::{Layout, is_ignored_stub};
use crate::metaform::Metaform;

/// Wraps each widget in a `div` block: an outer `div` per entry holding an
/// optional label `div` and the widget `div`.
///
/// Labels get `for` and `<id>-label` attributes when the widget carries an
/// id, so the association survives whatever the consuming front end does
/// with the blocks.
#[derive(Debug, Clone, Copy, Default)]
pub struct DivLayout;

impl DivLayout {
    pub fn new() -> Self {
        Self
    }
}

impl Layout for DivLayout {
    fn layout_widget(
        &self,
        widget: WidgetNode,
        element: ElementKind,
        attributes: &AttributeMap,
        container: &mut WidgetNode,
        metaform: &mut Metaform,
    ) {
        if is_ignored_stub(&widget) {
            return;
        }

        let mut outer = WidgetNode::new("div");

        let label = match element {
            ElementKind::Property => util::label_for(attributes),
            _ => None,
        };
        if let Some(label) = label {
            let mut label_node = WidgetNode::new("label");
            let id = util::widget_id(metaform.path(), attr_str(attributes, attr::NAME));
            if !id.is_empty() {
                label_node.set_attribute("for", &id);
                label_node.set_attribute("id", format!("{id}-label"));
            }
            label_node.set_text(format!("{label}:"));
            outer.append_child(WidgetNode::new("div").with_child(label_node));
        }

        outer.append_child(WidgetNode::new("div").with_child(widget));
        container.append_child(outer);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_labelled_entry_produces_label_and_widget_blocks() {
        let layout = DivLayout::new();
        let mut container = WidgetNode::new("div");
        let mut metaform = Metaform::new(WidgetNode::new("div"));
        let mut attributes = AttributeMap::new();
        attributes.insert("name".into(), json!("bar"));

        layout.layout_widget(
            WidgetNode::new("input")
                .with_attribute("type", "text")
                .with_attribute("id", "bar"),
            ElementKind::Property,
            &attributes,
            &mut container,
            &mut metaform,
        );

        let outer = &container.children()[0];
        assert_eq!(outer.tag(), "div");
        assert_eq!(outer.child_count(), 2);

        let label = &outer.children()[0].children()[0];
        assert_eq!(label.to_string(), "label for=\"bar\" id=\"bar-label\"");
        assert_eq!(label.text(), "Bar:");

        let widget = &outer.children()[1].children()[0];
        assert_eq!(widget.attribute("id"), Some("bar"));
    }

    #[test]
    fn test_unlabelled_entry_gets_widget_block_only() {
        let layout = DivLayout::new();
        let mut container = WidgetNode::new("div");
        let mut metaform = Metaform::new(WidgetNode::new("div"));

        layout.layout_widget(
            WidgetNode::new("div"),
            ElementKind::Property,
            &AttributeMap::new(),
            &mut container,
            &mut metaform,
        );

        let outer = &container.children()[0];
        assert_eq!(outer.child_count(), 1);
        assert_eq!(outer.children()[0].children()[0].tag(), "div");
    }
}
