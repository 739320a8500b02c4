//! Widget processors: ordered transforms over each built widget node.
//!
//! Widget processors mirror the inspection-result processor chain at the
//! widget level: the ordered concatenation of `prepend`, core and `append`
//! sequences runs over every widget the builder chain produces, before the
//! layout places it. A processor returning `None` removes that single
//! widget from layout consideration; the rest of the build proceeds.
//!
//! # Built-in Widget Processors
//!
//! The default chain, in order:
//!
//! - [`IdProcessor`]: derives `id` from the path and property name
//! - [`RequiredAttributeProcessor`]: marks required editable widgets
//! - [`SimpleBindingProcessor`]: two-way value binding, feeds `save()`
//!
//! Processors may also expose `on_start_build`/`on_end_build`, fired once
//! per build pass (not per widget) in chain order.

mod binding;
mod id;
mod required;

pub use binding::SimpleBindingProcessor;
pub use id::IdProcessor;
pub use required::RequiredAttributeProcessor;

use horizon_metaform_core::{AttributeMap, ElementKind, WidgetNode};

use crate::metaform::Metaform;

/// The widget transform capability.
pub trait WidgetProcessor: Send + Sync {
    /// Transform a built widget, returning the (possibly different) node to
    /// hand to the next processor, or `None` to drop the widget from layout.
    ///
    /// # Arguments
    ///
    /// * `widget` - The widget built so far (owned; return it to keep it)
    /// * `element` - What kind of inspection entry the widget represents
    /// * `attributes` - The entry's attributes (a defensive copy)
    /// * `metaform` - The instance running the build
    fn process_widget(
        &self,
        widget: WidgetNode,
        element: ElementKind,
        attributes: &AttributeMap,
        metaform: &mut Metaform,
    ) -> Option<WidgetNode>;

    /// Called once before the first widget of a build pass.
    fn on_start_build(&self, _metaform: &mut Metaform) {}

    /// Called once after the last widget of a build pass.
    fn on_end_build(&self, _metaform: &mut Metaform) {}
}

// A bare function is the single method
impl<F> WidgetProcessor for F
where
    F: Fn(WidgetNode, ElementKind, &AttributeMap, &mut Metaform) -> Option<WidgetNode>
        + Send
        + Sync,
{
    fn process_widget(
        &self,
        widget: WidgetNode,
        element: ElementKind,
        attributes: &AttributeMap,
        metaform: &mut Metaform,
    ) -> Option<WidgetNode> {
        self(widget, element, attributes, metaform)
    }
}
