//! Inspectors: the capability that describes a domain value's structure.
//!
//! An inspector produces an [`InspectionResult`] for a given value, type and
//! property path. It is the first stage of every build pass; everything
//! downstream (processors, builders, layouts) consumes what it reports.
//!
//! # Built-in Inspectors
//!
//! - [`PropertyTypeInspector`]: reads the actual structure of the value
//! - [`JsonSchemaInspector`]: reads a statically configured schema
//! - [`CompositeInspector`]: merges the results of several inspectors
//!
//! A bare closure with the right signature is accepted anywhere an inspector
//! is accepted — the closure *is* the single method:
//!
//! ```
//! use horizon_metaform::MetaformConfig;
//! use horizon_metaform_core::InspectionResult;
//! use serde_json::{Value, json};
//!
//! let config = MetaformConfig::new().with_inspector(
//!     |_to_inspect: Option<&Value>, _type_name: &str, _names: &[String]| {
//!         InspectionResult::try_from_value(json!({
//!             "properties": { "foo": { "type": "string" } }
//!         }))
//!         .ok()
//!     },
//! );
//! # let _ = config;
//! ```

mod composite;
mod json_schema;
mod property_type;

pub use composite::CompositeInspector;
pub use json_schema::JsonSchemaInspector;
pub use property_type::PropertyTypeInspector;

use horizon_metaform_core::InspectionResult;
use serde_json::Value;

/// The inspection capability.
///
/// Returning `None` means the inspector has nothing to say about the value;
/// the build then ends with a validly cleared, empty container.
pub trait Inspector: Send + Sync {
    /// Describe `to_inspect` (or the value at `names` within it) as an
    /// inspection result.
    ///
    /// # Arguments
    ///
    /// * `to_inspect` - The domain value under inspection, if any
    /// * `type_name` - The first segment of the owning Metaform's path
    /// * `names` - The remaining path segments, from the root value down
    fn inspect(
        &self,
        to_inspect: Option<&Value>,
        type_name: &str,
        names: &[String],
    ) -> Option<InspectionResult>;
}

// A bare function is the single method
impl<F> Inspector for F
where
    F: Fn(Option<&Value>, &str, &[String]) -> Option<InspectionResult> + Send + Sync,
{
    fn inspect(
        &self,
        to_inspect: Option<&Value>,
        type_name: &str,
        names: &[String],
    ) -> Option<InspectionResult> {
        self(to_inspect, type_name, names)
    }
}
