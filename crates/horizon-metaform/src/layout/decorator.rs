//! Layout decoration by composition.

use std::sync::Arc;

use horizon_metaform_core::inspection::{AttributeMap, ElementKind, attr, attr_str};
use horizon_metaform_core::WidgetNode;
use parking_lot::Mutex;

use super::Layout;
use crate::metaform::Metaform;

/// Wraps a delegate layout, emitting a heading widget whenever an entry's
/// `section` attribute changes.
///
/// The heading is handed to the delegate like any other widget (an `h1`
/// node laid out as an entity, so table layouts give it a full-width row),
/// then the entry itself is delegated. All other hooks pass straight
/// through — decoration is composition over the [`Layout`] interface, not a
/// subclass of any particular layout.
///
/// ```
/// use horizon_metaform::layout::{SectionHeadingLayoutDecorator, TableLayout};
///
/// let layout = SectionHeadingLayoutDecorator::new(TableLayout::new());
/// # let _ = layout;
/// ```
pub struct SectionHeadingLayoutDecorator {
    delegate: Arc<dyn Layout>,
    current_section: Mutex<Option<String>>,
}

impl SectionHeadingLayoutDecorator {
    /// Decorate the given delegate layout.
    pub fn new(delegate: impl Layout + 'static) -> Self {
        Self {
            delegate: Arc::new(delegate),
            current_section: Mutex::new(None),
        }
    }
}

impl Layout for SectionHeadingLayoutDecorator {
    fn on_start_build(&self, metaform: &mut Metaform) {
        self.delegate.on_start_build(metaform);
    }

    fn start_container_layout(&self, container: &mut WidgetNode, metaform: &mut Metaform) {
        *self.current_section.lock() = None;
        self.delegate.start_container_layout(container, metaform);
    }

    fn layout_widget(
        &self,
        widget: WidgetNode,
        element: ElementKind,
        attributes: &AttributeMap,
        container: &mut WidgetNode,
        metaform: &mut Metaform,
    ) {
        if let Some(section) = attr_str(attributes, attr::SECTION) {
            let mut current = self.current_section.lock();
            if !section.is_empty() && current.as_deref() != Some(section) {
                *current = Some(section.to_string());
                drop(current);
                let heading = WidgetNode::new("h1").with_text(section);
                self.delegate.layout_widget(
                    heading,
                    ElementKind::Entity,
                    &AttributeMap::new(),
                    container,
                    metaform,
                );
            }
        }
        self.delegate
            .layout_widget(widget, element, attributes, container, metaform);
    }

    fn end_container_layout(&self, container: &mut WidgetNode, metaform: &mut Metaform) {
        self.delegate.end_container_layout(container, metaform);
    }

    fn on_end_build(&self, metaform: &mut Metaform) {
        self.delegate.on_end_build(metaform);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::SimpleLayout;
    use serde_json::json;

    fn attributes(name: &str, section: &str) -> AttributeMap {
        let mut attributes = AttributeMap::new();
        attributes.insert("name".into(), json!(name));
        attributes.insert("section".into(), json!(section));
        attributes
    }

    #[test]
    fn test_heading_emitted_once_per_section() {
        let layout = SectionHeadingLayoutDecorator::new(SimpleLayout::new());
        let mut container = WidgetNode::new("div");
        let mut metaform = Metaform::new(WidgetNode::new("div"));

        layout.start_container_layout(&mut container, &mut metaform);
        layout.layout_widget(
            WidgetNode::new("input").with_attribute("id", "a"),
            ElementKind::Property,
            &attributes("a", "Details"),
            &mut container,
            &mut metaform,
        );
        layout.layout_widget(
            WidgetNode::new("input").with_attribute("id", "b"),
            ElementKind::Property,
            &attributes("b", "Details"),
            &mut container,
            &mut metaform,
        );
        layout.layout_widget(
            WidgetNode::new("input").with_attribute("id", "c"),
            ElementKind::Property,
            &attributes("c", "Contact"),
            &mut container,
            &mut metaform,
        );

        let tags: Vec<_> = container
            .children()
            .iter()
            .map(|child| (child.tag().to_string(), child.text().to_string()))
            .collect();
        assert_eq!(
            tags,
            [
                ("h1".to_string(), "Details".to_string()),
                ("input".to_string(), String::new()),
                ("input".to_string(), String::new()),
                ("h1".to_string(), "Contact".to_string()),
                ("input".to_string(), String::new()),
            ]
        );
    }

    #[test]
    fn test_sectionless_entries_delegate_untouched() {
        let layout = SectionHeadingLayoutDecorator::new(SimpleLayout::new());
        let mut container = WidgetNode::new("div");
        let mut metaform = Metaform::new(WidgetNode::new("div"));

        layout.start_container_layout(&mut container, &mut metaform);
        layout.layout_widget(
            WidgetNode::new("input"),
            ElementKind::Property,
            &AttributeMap::new(),
            &mut container,
            &mut metaform,
        );
        assert_eq!(container.child_count(), 1);
        assert_eq!(container.children()[0].tag(), "input");
    }
}
