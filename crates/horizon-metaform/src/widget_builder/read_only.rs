//! Read-only rendering.

use horizon_metaform_core::inspection::{
    AttributeMap, ElementKind, attr, attr_truthy, attr_str, type_name,
};
use horizon_metaform_core::WidgetNode;

use super::WidgetBuilder;
use crate::metaform::Metaform;

/// Builds display-only widgets for read-only entries.
///
/// Simple types become `"output"` nodes (the binding processor fills in
/// their text). Hidden entries and read-only actions become empty stubs, so
/// they occupy no visible space. Compound types are declined so the nested
/// Metaform strategy still runs — a read-only nested value renders as a
/// nested form of outputs, not as a single opaque node.
///
/// Declines every entry when neither the entry nor the owning instance is
/// read-only, so it sits harmlessly in front of [`HtmlWidgetBuilder`] in
/// the default chain.
///
/// [`HtmlWidgetBuilder`]: super::HtmlWidgetBuilder
#[derive(Debug, Clone, Copy, Default)]
pub struct ReadOnlyWidgetBuilder;

impl ReadOnlyWidgetBuilder {
    pub fn new() -> Self {
        Self
    }
}

impl WidgetBuilder for ReadOnlyWidgetBuilder {
    fn build_widget(
        &self,
        element: ElementKind,
        attributes: &AttributeMap,
        metaform: &mut Metaform,
    ) -> Option<WidgetNode> {
        if !metaform.is_read_only(attributes) {
            return None;
        }
        if attr_truthy(attributes, attr::HIDDEN) {
            return Some(WidgetNode::new("stub"));
        }
        if element == ElementKind::Action {
            return Some(WidgetNode::new("stub"));
        }
        if attributes.contains_key(attr::ENUM) {
            return Some(WidgetNode::new("output"));
        }
        match attr_str(attributes, attr::TYPE) {
            Some(
                type_name::STRING
                | type_name::NUMBER
                | type_name::INTEGER
                | type_name::BOOLEAN
                | type_name::DATE,
            ) => Some(WidgetNode::new("output")),
            // Arrays still render as tables; compound values recurse
            _ => None,
        }
    }
}
