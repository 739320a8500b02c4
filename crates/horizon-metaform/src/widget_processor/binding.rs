//! Two-way value binding.

use horizon_metaform_core::inspection::{AttributeMap, ElementKind, attr, attr_str};
use horizon_metaform_core::{WidgetNode, util};

use super::WidgetProcessor;
use crate::metaform::Metaform;

/// Binds widgets to the domain value in both directions.
///
/// At build time this writes the current value of the bound property into
/// the widget (`value` for inputs, `checked` for checkboxes, text content
/// for outputs), sets the widget's `name`, and records the
/// `(widget id, property path)` pair in the owning instance's binding
/// table. [`Metaform::save`] later walks that table, reads each widget's
/// current value back out of the container tree and writes it onto the
/// domain value at the recorded path.
///
/// Action buttons carry their label in `value` and are never bound.
#[derive(Debug, Clone, Copy, Default)]
pub struct SimpleBindingProcessor;

impl SimpleBindingProcessor {
    pub fn new() -> Self {
        Self
    }
}

impl WidgetProcessor for SimpleBindingProcessor {
    fn process_widget(
        &self,
        mut widget: WidgetNode,
        element: ElementKind,
        attributes: &AttributeMap,
        metaform: &mut Metaform,
    ) -> Option<WidgetNode> {
        if element == ElementKind::Action {
            return Some(widget);
        }
        let bindable = matches!(widget.tag(), "input" | "select" | "textarea" | "output")
            && widget.attribute("type") != Some("button");
        if !bindable {
            return Some(widget);
        }

        let name = attr_str(attributes, attr::NAME);
        let (_, mut names) = util::split_path(metaform.path());
        if let Some(name) = name {
            names.push(name.to_string());
        }

        let widget_name = util::widget_id(metaform.path(), name);
        if !widget_name.is_empty() {
            widget.set_attribute("name", &widget_name);
        }

        let checkbox = widget.attribute("type") == Some("checkbox");
        let value = metaform
            .to_inspect()
            .and_then(|value| util::traverse(value, &names))
            .cloned();
        if let Some(value) = &value {
            if checkbox {
                if value.as_bool() == Some(true) {
                    widget.set_attribute("checked", "checked");
                }
            } else if widget.tag() == "output" {
                widget.set_text(util::display_string(value));
            } else {
                widget.set_attribute("value", util::display_string(value));
            }
        }

        if let Some(id) = widget.attribute("id") {
            metaform.push_binding(id.to_string(), names, checkbox);
        }

        tracing::trace!(
            target: "horizon_metaform::widget_processor",
            widget = %widget,
            "bound widget to domain value"
        );
        Some(widget)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_writes_value_and_name_onto_inputs() {
        let mut metaform = Metaform::new(WidgetNode::new("div"));
        metaform.set_to_inspect(Some(json!({ "foo": "Foo" })));

        let mut attributes = AttributeMap::new();
        attributes.insert("name".into(), json!("foo"));

        let widget = SimpleBindingProcessor::new()
            .process_widget(
                WidgetNode::new("input")
                    .with_attribute("type", "text")
                    .with_attribute("id", "foo"),
                ElementKind::Property,
                &attributes,
                &mut metaform,
            )
            .unwrap();
        assert_eq!(widget.attribute("value"), Some("Foo"));
        assert_eq!(widget.attribute("name"), Some("foo"));
    }

    #[test]
    fn test_checkbox_binding_sets_checked() {
        let mut metaform = Metaform::new(WidgetNode::new("div"));
        metaform.set_to_inspect(Some(json!({ "flag": true })));

        let mut attributes = AttributeMap::new();
        attributes.insert("name".into(), json!("flag"));

        let widget = SimpleBindingProcessor::new()
            .process_widget(
                WidgetNode::new("input")
                    .with_attribute("type", "checkbox")
                    .with_attribute("id", "flag"),
                ElementKind::Property,
                &attributes,
                &mut metaform,
            )
            .unwrap();
        assert_eq!(widget.attribute("checked"), Some("checked"));
    }

    #[test]
    fn test_actions_are_not_bound() {
        let mut metaform = Metaform::new(WidgetNode::new("div"));
        metaform.set_to_inspect(Some(json!({ "fooAction": "unused" })));

        let mut attributes = AttributeMap::new();
        attributes.insert("name".into(), json!("fooAction"));

        let widget = SimpleBindingProcessor::new()
            .process_widget(
                WidgetNode::new("input")
                    .with_attribute("type", "button")
                    .with_attribute("id", "fooAction"),
                ElementKind::Action,
                &attributes,
                &mut metaform,
            )
            .unwrap();
        assert!(!widget.has_attribute("value"));
        assert!(!widget.has_attribute("name"));
    }
}
