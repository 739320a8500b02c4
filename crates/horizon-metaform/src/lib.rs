//! Horizon Metaform - build native UI widgets from a domain value's
//! structure.
//!
//! Metaform inspects a domain value (its properties, types and metadata)
//! and populates a container node with widgets matching that structure:
//! tables, forms, inputs. Every stage of the pipeline is a pluggable
//! capability:
//!
//! - **Inspector**: describes the value as an [`InspectionResult`]
//! - **Inspection Result Processors**: transform the description
//! - **Widget Builders**: turn one entry into a widget node, first match wins
//! - **Widget Processors**: transform each built widget
//! - **Layout**: arranges the widgets in the container
//!
//! The [`Metaform`] orchestrator drives the chain, preserves pre-existing
//! markup in the container, recurses into nested values (bounded by a
//! recursion guard) and supports two-way binding via [`Metaform::save`].
//!
//! # Example
//!
//! ```
//! use horizon_metaform::prelude::*;
//! use serde_json::json;
//!
//! let mut metaform = Metaform::new(WidgetNode::new("div"));
//! metaform.set_to_inspect(Some(json!({ "name": "Homer", "retired": false })));
//! metaform.build_widgets()?;
//!
//! // A table row per property, with typed inputs
//! let name = metaform.container().find_by_id("name").unwrap();
//! assert_eq!(name.attribute("type"), Some("text"));
//! let retired = metaform.container().find_by_id("retired").unwrap();
//! assert_eq!(retired.attribute("type"), Some("checkbox"));
//! # Ok::<(), horizon_metaform::Error>(())
//! ```

pub mod config;
mod error;
pub mod inspector;
pub mod layout;
mod metaform;
pub mod prelude;
pub mod result_processor;
pub mod widget_builder;
pub mod widget_processor;

pub use config::{DEFAULT_MAXIMUM_INSPECTION_DEPTH, MetaformConfig};
pub use error::{Error, Result};
pub use metaform::Metaform;

// Re-export the core data model this crate's capabilities exchange
pub use horizon_metaform_core::{
    AttributeMap, ConnectionId, CoreError, ElementKind, InspectionResult, Signal, WidgetNode,
    attr, attr_f64, attr_str, attr_truthy, type_name,
};

/// Naming and path utilities, re-exported from the core crate.
pub mod util {
    pub use horizon_metaform_core::util::*;
}
