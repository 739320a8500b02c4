//! Core Layout trait definition.

use horizon_metaform_core::{AttributeMap, ElementKind, WidgetNode};

use crate::metaform::Metaform;

/// The layout capability.
///
/// A build pass drives a layout through five hooks, in this order:
///
/// 1. `on_start_build` — once, before any widget is built
/// 2. `start_container_layout` — once, to set up container structure
/// 3. `layout_widget` — once per processed widget
/// 4. `end_container_layout` — once, after the last widget
/// 5. `on_end_build` — once, as the build lifecycle unwinds
///
/// Only `layout_widget` is required; the bracketing hooks default to
/// no-ops for layouts without container-level structure.
pub trait Layout: Send + Sync {
    /// Called once when the build lifecycle starts.
    fn on_start_build(&self, _metaform: &mut Metaform) {}

    /// Called once per build to set up container-level structure (for
    /// example, [`TableLayout`] creates its `table`/`tbody` here).
    ///
    /// [`TableLayout`]: super::TableLayout
    fn start_container_layout(&self, _container: &mut WidgetNode, _metaform: &mut Metaform) {}

    /// Place one widget into the container.
    ///
    /// Ownership of the widget transfers to the container here.
    ///
    /// # Arguments
    ///
    /// * `widget` - The processed widget to place
    /// * `element` - What kind of inspection entry it represents
    /// * `attributes` - The entry's attributes (label, required, ...)
    /// * `container` - The container being populated
    /// * `metaform` - The instance running the build
    fn layout_widget(
        &self,
        widget: WidgetNode,
        element: ElementKind,
        attributes: &AttributeMap,
        container: &mut WidgetNode,
        metaform: &mut Metaform,
    );

    /// Called once per build after the last widget was placed.
    fn end_container_layout(&self, _container: &mut WidgetNode, _metaform: &mut Metaform) {}

    /// Called once when the build lifecycle ends.
    fn on_end_build(&self, _metaform: &mut Metaform) {}
}
