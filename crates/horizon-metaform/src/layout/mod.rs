//! Layouts: the capability that arranges built widgets in the container.
//!
//! A layout owns the visual structure of a build pass: it brackets the pass
//! with `start_container_layout`/`end_container_layout` (once per build, not
//! per widget) and places each processed widget with `layout_widget`.
//!
//! # Built-in Layouts
//!
//! - [`SimpleLayout`]: appends widgets directly to the container
//! - [`DivLayout`]: one labelled `div` block per widget
//! - [`TableLayout`]: label/widget/required-marker table rows
//! - [`SectionHeadingLayoutDecorator`]: wraps any other layout, adding a
//!   heading whenever the `section` attribute changes
//!
//! Layouts extend by *composition*: a decorator holds a delegate layout and
//! wraps its hooks, as [`SectionHeadingLayoutDecorator`] does. There is no
//! layout inheritance.

mod decorator;
mod div_layout;
mod simple_layout;
mod table_layout;
mod traits;

pub use decorator::SectionHeadingLayoutDecorator;
pub use div_layout::DivLayout;
pub use simple_layout::SimpleLayout;
pub use table_layout::TableLayout;
pub use traits::Layout;

use horizon_metaform_core::WidgetNode;

/// Whether a widget is an empty placeholder that layouts should not render.
///
/// Stubs *with* children (or attributes) are real overridden markup and are
/// laid out normally.
pub(crate) fn is_ignored_stub(widget: &WidgetNode) -> bool {
    widget.tag() == "stub" && widget.child_count() == 0 && widget.attributes().is_empty()
}
