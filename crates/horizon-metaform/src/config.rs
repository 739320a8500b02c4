//! Pipeline configuration.
//!
//! A [`MetaformConfig`] is a *partial* description of a pipeline: any field
//! left unset falls back to the built-in default when the configuration is
//! resolved. Chain fields (`inspection_result_processors`,
//! `widget_builders`, `widget_processors` and their `prepend`/`append`
//! variants) are ordered sequences; the `with_*` builder methods push, so a
//! single item and a sequence of items configure through the same call —
//! there is no separate single-item form to normalize downstream.
//!
//! Several partial configurations can be merged in order with
//! [`MetaformConfig::merged`]: sequence fields concatenate, scalar fields
//! take the last value set. This is how framework integrations layer their
//! own processors around a user's configuration without re-declaring it.
//!
//! # Example
//!
//! ```
//! use horizon_metaform::{MetaformConfig, layout::SimpleLayout};
//!
//! let config = MetaformConfig::new()
//!     .with_layout(SimpleLayout::new())
//!     .with_style_class("compact-form")
//!     .with_read_only(false);
//! # let _ = config;
//! ```

use std::sync::Arc;

use crate::inspector::{Inspector, PropertyTypeInspector};
use crate::layout::{Layout, TableLayout};
use crate::result_processor::InspectionResultProcessor;
use crate::widget_builder::{
    HtmlWidgetBuilder, OverriddenWidgetBuilder, ReadOnlyWidgetBuilder, WidgetBuilder,
};
use crate::widget_processor::{
    IdProcessor, RequiredAttributeProcessor, SimpleBindingProcessor, WidgetProcessor,
};

/// How many nested Metaform levels a build pass may descend before the
/// recursion guard builds an empty leaf instead.
pub const DEFAULT_MAXIMUM_INSPECTION_DEPTH: usize = 10;

/// A partial pipeline configuration.
///
/// Cheap to clone: capabilities are shared behind `Arc`s.
#[derive(Clone, Default)]
pub struct MetaformConfig {
    pub(crate) inspector: Option<Arc<dyn Inspector>>,
    pub(crate) prepend_inspection_result_processors: Vec<Arc<dyn InspectionResultProcessor>>,
    pub(crate) inspection_result_processors: Vec<Arc<dyn InspectionResultProcessor>>,
    pub(crate) append_inspection_result_processors: Vec<Arc<dyn InspectionResultProcessor>>,
    pub(crate) widget_builders: Vec<Arc<dyn WidgetBuilder>>,
    pub(crate) prepend_widget_processors: Vec<Arc<dyn WidgetProcessor>>,
    pub(crate) widget_processors: Vec<Arc<dyn WidgetProcessor>>,
    pub(crate) append_widget_processors: Vec<Arc<dyn WidgetProcessor>>,
    pub(crate) layout: Option<Arc<dyn Layout>>,
    pub(crate) style_class: Option<String>,
    pub(crate) read_only: Option<bool>,
    pub(crate) maximum_inspection_depth: Option<usize>,
}

impl MetaformConfig {
    /// An empty configuration: everything defaulted at resolve time.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the inspector. A bare closure with the inspect signature works.
    pub fn with_inspector(mut self, inspector: impl Inspector + 'static) -> Self {
        self.inspector = Some(Arc::new(inspector));
        self
    }

    /// Append a processor to the core inspection-result chain.
    pub fn with_inspection_result_processor(
        mut self,
        processor: impl InspectionResultProcessor + 'static,
    ) -> Self {
        self.inspection_result_processors.push(Arc::new(processor));
        self
    }

    /// Append a processor to the prepend inspection-result chain, which
    /// runs before the core chain.
    pub fn with_prepend_inspection_result_processor(
        mut self,
        processor: impl InspectionResultProcessor + 'static,
    ) -> Self {
        self.prepend_inspection_result_processors
            .push(Arc::new(processor));
        self
    }

    /// Append a processor to the append inspection-result chain, which
    /// runs after the core chain.
    pub fn with_append_inspection_result_processor(
        mut self,
        processor: impl InspectionResultProcessor + 'static,
    ) -> Self {
        self.append_inspection_result_processors
            .push(Arc::new(processor));
        self
    }

    /// Append a builder to the widget builder chain. The first builder to
    /// return a widget wins; setting any builder replaces the default chain.
    pub fn with_widget_builder(mut self, builder: impl WidgetBuilder + 'static) -> Self {
        self.widget_builders.push(Arc::new(builder));
        self
    }

    /// Append a processor to the core widget processor chain. Setting any
    /// core processor replaces the default chain.
    pub fn with_widget_processor(mut self, processor: impl WidgetProcessor + 'static) -> Self {
        self.widget_processors.push(Arc::new(processor));
        self
    }

    /// Append a processor to the prepend widget processor chain.
    pub fn with_prepend_widget_processor(
        mut self,
        processor: impl WidgetProcessor + 'static,
    ) -> Self {
        self.prepend_widget_processors.push(Arc::new(processor));
        self
    }

    /// Append a processor to the append widget processor chain.
    pub fn with_append_widget_processor(
        mut self,
        processor: impl WidgetProcessor + 'static,
    ) -> Self {
        self.append_widget_processors.push(Arc::new(processor));
        self
    }

    /// Set the layout.
    pub fn with_layout(mut self, layout: impl Layout + 'static) -> Self {
        self.layout = Some(Arc::new(layout));
        self
    }

    /// Set the style class token appended to the container's `class`
    /// attribute whenever this configuration is applied.
    pub fn with_style_class(mut self, style_class: impl Into<String>) -> Self {
        self.style_class = Some(style_class.into());
        self
    }

    /// Set the instance-wide read-only flag.
    pub fn with_read_only(mut self, read_only: bool) -> Self {
        self.read_only = Some(read_only);
        self
    }

    /// Set the nesting depth bound for the recursion guard.
    pub fn with_maximum_inspection_depth(mut self, depth: usize) -> Self {
        self.maximum_inspection_depth = Some(depth);
        self
    }

    /// Merge another partial configuration over this one: sequences
    /// concatenate, scalars take `other`'s value when it is set.
    pub fn merge(mut self, other: MetaformConfig) -> Self {
        if other.inspector.is_some() {
            self.inspector = other.inspector;
        }
        self.prepend_inspection_result_processors
            .extend(other.prepend_inspection_result_processors);
        self.inspection_result_processors
            .extend(other.inspection_result_processors);
        self.append_inspection_result_processors
            .extend(other.append_inspection_result_processors);
        self.widget_builders.extend(other.widget_builders);
        self.prepend_widget_processors
            .extend(other.prepend_widget_processors);
        self.widget_processors.extend(other.widget_processors);
        self.append_widget_processors
            .extend(other.append_widget_processors);
        if other.layout.is_some() {
            self.layout = other.layout;
        }
        if other.style_class.is_some() {
            self.style_class = other.style_class;
        }
        if other.read_only.is_some() {
            self.read_only = other.read_only;
        }
        if other.maximum_inspection_depth.is_some() {
            self.maximum_inspection_depth = other.maximum_inspection_depth;
        }
        self
    }

    /// Fold an ordered sequence of partial configurations into one.
    pub fn merged(configs: impl IntoIterator<Item = MetaformConfig>) -> Self {
        configs
            .into_iter()
            .fold(MetaformConfig::new(), MetaformConfig::merge)
    }
}

impl std::fmt::Debug for MetaformConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MetaformConfig")
            .field("inspector", &self.inspector.is_some())
            .field(
                "inspection_result_processors",
                &(self.prepend_inspection_result_processors.len()
                    + self.inspection_result_processors.len()
                    + self.append_inspection_result_processors.len()),
            )
            .field("widget_builders", &self.widget_builders.len())
            .field(
                "widget_processors",
                &(self.prepend_widget_processors.len()
                    + self.widget_processors.len()
                    + self.append_widget_processors.len()),
            )
            .field("layout", &self.layout.is_some())
            .field("style_class", &self.style_class)
            .field("read_only", &self.read_only)
            .field("maximum_inspection_depth", &self.maximum_inspection_depth)
            .finish()
    }
}

/// A fully resolved pipeline: every chain flattened, every default applied.
///
/// Cloned once per build pass and by nested Metaforms; the `Arc`s make that
/// a pointer copy.
#[derive(Clone)]
pub(crate) struct Pipeline {
    pub inspector: Arc<dyn Inspector>,
    /// prepend ++ core ++ append, flattened.
    pub inspection_result_processors: Vec<Arc<dyn InspectionResultProcessor>>,
    pub widget_builders: Vec<Arc<dyn WidgetBuilder>>,
    /// prepend ++ core ++ append, flattened.
    pub widget_processors: Vec<Arc<dyn WidgetProcessor>>,
    pub layout: Arc<dyn Layout>,
    pub style_class: Option<String>,
    pub read_only: bool,
    pub maximum_inspection_depth: usize,
}

impl Pipeline {
    pub fn resolve(config: MetaformConfig) -> Self {
        let inspector = config
            .inspector
            .unwrap_or_else(|| Arc::new(PropertyTypeInspector::new()));

        let mut inspection_result_processors = config.prepend_inspection_result_processors;
        inspection_result_processors.extend(config.inspection_result_processors);
        inspection_result_processors.extend(config.append_inspection_result_processors);

        let widget_builders = if config.widget_builders.is_empty() {
            vec![
                Arc::new(OverriddenWidgetBuilder::new()) as Arc<dyn WidgetBuilder>,
                Arc::new(ReadOnlyWidgetBuilder::new()),
                Arc::new(HtmlWidgetBuilder::new()),
            ]
        } else {
            config.widget_builders
        };

        let core_widget_processors = if config.widget_processors.is_empty() {
            vec![
                Arc::new(IdProcessor::new()) as Arc<dyn WidgetProcessor>,
                Arc::new(RequiredAttributeProcessor::new()),
                Arc::new(SimpleBindingProcessor::new()),
            ]
        } else {
            config.widget_processors
        };
        let mut widget_processors = config.prepend_widget_processors;
        widget_processors.extend(core_widget_processors);
        widget_processors.extend(config.append_widget_processors);

        let layout = config
            .layout
            .unwrap_or_else(|| Arc::new(TableLayout::new()));

        Self {
            inspector,
            inspection_result_processors,
            widget_builders,
            widget_processors,
            layout,
            style_class: config.style_class,
            read_only: config.read_only.unwrap_or(false),
            maximum_inspection_depth: config
                .maximum_inspection_depth
                .unwrap_or(DEFAULT_MAXIMUM_INSPECTION_DEPTH),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::SimpleLayout;

    #[test]
    fn test_defaults_resolve_to_the_standard_chains() {
        let pipeline = Pipeline::resolve(MetaformConfig::new());
        assert!(pipeline.inspection_result_processors.is_empty());
        assert_eq!(pipeline.widget_builders.len(), 3);
        assert_eq!(pipeline.widget_processors.len(), 3);
        assert!(!pipeline.read_only);
        assert_eq!(
            pipeline.maximum_inspection_depth,
            DEFAULT_MAXIMUM_INSPECTION_DEPTH
        );
    }

    #[test]
    fn test_user_chains_replace_defaults() {
        let config = MetaformConfig::new()
            .with_widget_builder(HtmlWidgetBuilder::new())
            .with_widget_processor(IdProcessor::new());
        let pipeline = Pipeline::resolve(config);
        assert_eq!(pipeline.widget_builders.len(), 1);
        assert_eq!(pipeline.widget_processors.len(), 1);
    }

    #[test]
    fn test_prepend_and_append_wrap_the_core_chain() {
        let config = MetaformConfig::new()
            .with_prepend_widget_processor(IdProcessor::new())
            .with_append_widget_processor(SimpleBindingProcessor::new());
        let pipeline = Pipeline::resolve(config);
        // 1 prepended + 3 defaults + 1 appended
        assert_eq!(pipeline.widget_processors.len(), 5);
    }

    #[test]
    fn test_merge_concatenates_sequences_and_overwrites_scalars() {
        let merged = MetaformConfig::merged([
            MetaformConfig::new()
                .with_widget_processor(IdProcessor::new())
                .with_style_class("first"),
            MetaformConfig::new()
                .with_widget_processor(SimpleBindingProcessor::new())
                .with_style_class("second")
                .with_layout(SimpleLayout::new()),
        ]);
        assert_eq!(merged.widget_processors.len(), 2);
        assert_eq!(merged.style_class.as_deref(), Some("second"));
        assert!(merged.layout.is_some());
    }
}
