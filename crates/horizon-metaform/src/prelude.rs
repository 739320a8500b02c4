//! Prelude module for Horizon Metaform.
//!
//! This module re-exports the most commonly used types for convenient
//! importing:
//!
//! ```ignore
//! use horizon_metaform::prelude::*;
//! ```

// ============================================================================
// Orchestrator and Configuration
// ============================================================================

pub use crate::{Error, Metaform, MetaformConfig, Result};

// ============================================================================
// Core Data Model
// ============================================================================

pub use horizon_metaform_core::{
    AttributeMap, ElementKind, InspectionResult, Signal, WidgetNode, attr, type_name,
};

// ============================================================================
// Capabilities
// ============================================================================

pub use crate::inspector::Inspector;
pub use crate::layout::Layout;
pub use crate::result_processor::InspectionResultProcessor;
pub use crate::widget_builder::WidgetBuilder;
pub use crate::widget_processor::WidgetProcessor;

// ============================================================================
// Built-in Strategies
// ============================================================================

pub use crate::inspector::{CompositeInspector, JsonSchemaInspector, PropertyTypeInspector};
pub use crate::layout::{
    DivLayout, SectionHeadingLayoutDecorator, SimpleLayout, TableLayout,
};
pub use crate::widget_builder::{
    HtmlWidgetBuilder, OverriddenWidgetBuilder, ReadOnlyWidgetBuilder,
};
pub use crate::widget_processor::{
    IdProcessor, RequiredAttributeProcessor, SimpleBindingProcessor,
};

#[cfg(test)]
mod tests {
    #![allow(unused)]
    use super::*;

    /// Verify that all prelude exports are accessible and the types exist.
    #[test]
    fn test_prelude_types_exist() {
        let _config = MetaformConfig::new()
            .with_inspector(PropertyTypeInspector::new())
            .with_layout(SectionHeadingLayoutDecorator::new(TableLayout::new()));
        let _metaform = Metaform::with_config(WidgetNode::new("div"), _config);

        let _signal: Signal<()> = Signal::new();
        let _node = WidgetNode::new("input");
    }

    /// Verify capability trait bounds are accessible (compile-time check).
    #[allow(dead_code)]
    fn _capability_types_check() {
        fn _takes_inspector<I: Inspector>(_inspector: &I) {}
        fn _takes_layout<L: Layout>(_layout: &L) {}
        fn _takes_builder<B: WidgetBuilder>(_builder: &B) {}

        _takes_inspector(&PropertyTypeInspector::new());
        _takes_layout(&SimpleLayout::new());
        _takes_builder(&HtmlWidgetBuilder::new());
    }
}
