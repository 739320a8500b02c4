//! Required-input marking.

use horizon_metaform_core::inspection::{AttributeMap, ElementKind, attr, attr_truthy};
use horizon_metaform_core::WidgetNode;

use super::WidgetProcessor;
use crate::metaform::Metaform;

/// Marks editable widgets of required entries with `required="required"`.
///
/// Read-only entries are left alone — an output cannot be "required" — and
/// so are non-input tags and action buttons.
#[derive(Debug, Clone, Copy, Default)]
pub struct RequiredAttributeProcessor;

impl RequiredAttributeProcessor {
    pub fn new() -> Self {
        Self
    }
}

impl WidgetProcessor for RequiredAttributeProcessor {
    fn process_widget(
        &self,
        mut widget: WidgetNode,
        _element: ElementKind,
        attributes: &AttributeMap,
        metaform: &mut Metaform,
    ) -> Option<WidgetNode> {
        if !attr_truthy(attributes, attr::REQUIRED) || metaform.is_read_only(attributes) {
            return Some(widget);
        }
        let editable = matches!(widget.tag(), "input" | "select" | "textarea")
            && widget.attribute("type") != Some("button");
        if editable {
            widget.set_attribute("required", "required");
        }
        Some(widget)
    }
}
