//! Widget builders: the capability that turns one inspection entry into a
//! widget node.
//!
//! Builders form a chain, attempted in configured order; the first builder
//! to return a widget wins and the rest are skipped. When every builder
//! declines, the pipeline falls back to its terminal strategies: recursion
//! into a nested Metaform for compound-typed entries, a `"stub"`
//! placeholder for everything else — an inspected property is never
//! silently dropped.
//!
//! # Built-in Widget Builders
//!
//! The default chain, in order:
//!
//! - [`OverriddenWidgetBuilder`]: claims pre-existing markup by id
//! - [`ReadOnlyWidgetBuilder`]: `"output"` nodes for read-only entries
//! - [`HtmlWidgetBuilder`]: inputs, selects, textareas, tables
//!
//! Builders may also expose `on_start_build`/`on_end_build`, fired once per
//! build pass (not per widget).

mod html;
mod overridden;
mod read_only;

pub use html::HtmlWidgetBuilder;
pub use overridden::OverriddenWidgetBuilder;
pub use read_only::ReadOnlyWidgetBuilder;

use horizon_metaform_core::{AttributeMap, ElementKind, WidgetNode};

use crate::metaform::Metaform;

/// The widget construction capability.
pub trait WidgetBuilder: Send + Sync {
    /// Attempt to build a widget for one inspection entry.
    ///
    /// Returning `None` passes the entry to the next builder in the chain.
    ///
    /// # Arguments
    ///
    /// * `element` - What kind of entry is being built
    /// * `attributes` - The entry's attributes (a defensive copy)
    /// * `metaform` - The instance running the build
    fn build_widget(
        &self,
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
impl<F> WidgetBuilder for F
where
    F: Fn(ElementKind, &AttributeMap, &mut Metaform) -> Option<WidgetNode> + Send + Sync,
{
    fn build_widget(
        &self,
        element: ElementKind,
        attributes: &AttributeMap,
        metaform: &mut Metaform,
    ) -> Option<WidgetNode> {
        self(element, attributes, metaform)
    }
}
