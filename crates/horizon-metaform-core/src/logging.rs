//! Logging facilities for Horizon Metaform.
//!
//! Horizon Metaform uses the `tracing` crate for instrumentation. To see
//! logs, install a tracing subscriber in your application:
//!
//! ```ignore
//! use tracing_subscriber;
//!
//! fn main() {
//!     tracing_subscriber::fmt::init();
//!
//!     // Your application code...
//! }
//! ```

/// Target names for log filtering.
///
/// Use these with `tracing` directives to filter logs by subsystem.
pub mod targets {
    /// Core data model target.
    pub const CORE: &str = "horizon_metaform_core";
    /// Signal system target.
    pub const SIGNAL: &str = "horizon_metaform::signal";
    /// Build pipeline target.
    pub const PIPELINE: &str = "horizon_metaform::pipeline";
    /// Inspector target.
    pub const INSPECTOR: &str = "horizon_metaform::inspector";
    /// Widget builder target.
    pub const WIDGET_BUILDER: &str = "horizon_metaform::widget_builder";
    /// Widget processor target.
    pub const WIDGET_PROCESSOR: &str = "horizon_metaform::widget_processor";
    /// Layout target.
    pub const LAYOUT: &str = "horizon_metaform::layout";
}
