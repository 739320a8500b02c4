//! Core systems for Horizon Metaform.
//!
//! This crate provides the foundational components of the Horizon Metaform
//! object-to-UI pipeline:
//!
//! - **Widget Node Model**: Abstract, DOM-like UI elements with tags,
//!   ordered attributes, text and children
//! - **Inspection Results**: Tree-shaped, JSON-object-shaped descriptions of
//!   a domain value's properties and metadata
//! - **Signal System**: Observer notifications for build lifecycle events
//! - **Naming Utilities**: Path splitting, camel-case ids, label derivation
//!
//! The pipeline itself — inspectors, processors, widget builders, layouts
//! and the `Metaform` orchestrator — lives in the `horizon-metaform` crate;
//! this crate carries only the data model those capabilities exchange.
//!
//! # Inspection Result Example
//!
//! ```
//! use horizon_metaform_core::InspectionResult;
//! use serde_json::json;
//!
//! let result = InspectionResult::try_from_value(json!({
//!     "type": "object",
//!     "properties": {
//!         "name": { "type": "string", "required": true },
//!         "age": { "type": "number" }
//!     }
//! }))?;
//!
//! let properties = result.properties();
//! assert_eq!(properties[0].0, "name");
//! assert_eq!(properties[1].0, "age");
//! # Ok::<(), horizon_metaform_core::CoreError>(())
//! ```
//!
//! # Widget Node Example
//!
//! ```
//! use horizon_metaform_core::WidgetNode;
//!
//! let input = WidgetNode::new("input")
//!     .with_attribute("type", "text")
//!     .with_attribute("id", "name");
//!
//! assert_eq!(input.to_string(), "input type=\"text\" id=\"name\"");
//! ```

mod error;
pub mod inspection;
pub mod logging;
mod node;
pub mod signal;
pub mod util;

pub use error::{CoreError, Result};
pub use inspection::{AttributeMap, ElementKind, InspectionResult, attr, attr_f64, attr_str, attr_truthy, type_name};
pub use node::WidgetNode;
pub use signal::{ConnectionId, Signal};
