//! Flat, structure-free layout.

use horizon_metaform_core::{AttributeMap, ElementKind, WidgetNode};

use super::{Layout, is_ignored_stub};
use crate::metaform::Metaform;

/// Appends each widget directly to the container, with no labels and no
/// wrapping structure.
///
/// Useful when the surrounding markup already provides structure, or as
/// the innermost delegate of a decorator stack.
#[derive(Debug, Clone, Copy, Default)]
pub struct SimpleLayout;

impl SimpleLayout {
    pub fn new() -> Self {
        Self
    }
}

impl Layout for SimpleLayout {
    fn layout_widget(
        &self,
        widget: WidgetNode,
        _element: ElementKind,
        _attributes: &AttributeMap,
        container: &mut WidgetNode,
        _metaform: &mut Metaform,
    ) {
        if is_ignored_stub(&widget) {
            return;
        }
        container.append_child(widget);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_widgets_are_appended_in_order() {
        let layout = SimpleLayout::new();
        let mut container = WidgetNode::new("div");
        let mut metaform = Metaform::new(WidgetNode::new("div"));
        let attributes = AttributeMap::new();

        layout.layout_widget(
            WidgetNode::new("input").with_attribute("id", "first"),
            ElementKind::Property,
            &attributes,
            &mut container,
            &mut metaform,
        );
        layout.layout_widget(
            WidgetNode::new("input").with_attribute("id", "second"),
            ElementKind::Property,
            &attributes,
            &mut container,
            &mut metaform,
        );

        assert_eq!(container.child_count(), 2);
        assert_eq!(container.children()[0].attribute("id"), Some("first"));
        assert_eq!(container.children()[1].attribute("id"), Some("second"));
    }

    #[test]
    fn test_empty_stubs_are_skipped() {
        let layout = SimpleLayout::new();
        let mut container = WidgetNode::new("div");
        let mut metaform = Metaform::new(WidgetNode::new("div"));

        layout.layout_widget(
            WidgetNode::new("stub"),
            ElementKind::Property,
            &AttributeMap::new(),
            &mut container,
            &mut metaform,
        );
        assert_eq!(container.child_count(), 0);
    }
}
