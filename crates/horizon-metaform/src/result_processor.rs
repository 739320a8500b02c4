//! Inspection result processors: ordered transforms over the raw
//! inspection result.
//!
//! Processors run between inspection and widget building, in the ordered
//! concatenation of the configuration's `prepend`, core and `append`
//! sequences. The three-part ordering lets external collaborators inject
//! behavior before or after a user's declared chain without the user
//! re-declaring it — the mechanism by which framework integrations extend a
//! base configuration non-invasively.
//!
//! Returning `None` from a processor halts the chain; the build then ends
//! with a validly cleared, empty container. That is a supported outcome,
//! not an error.

use horizon_metaform_core::InspectionResult;

use crate::metaform::Metaform;

/// The inspection-result transform capability.
pub trait InspectionResultProcessor: Send + Sync {
    /// Transform an inspection result, returning the (possibly new) result
    /// to hand to the next processor, or `None` to end the build with an
    /// empty container.
    ///
    /// # Arguments
    ///
    /// * `inspection_result` - The result produced so far
    /// * `metaform` - The instance running the build
    /// * `type_name` - The first segment of the instance's path
    /// * `names` - The remaining path segments
    fn process_inspection_result(
        &self,
        inspection_result: InspectionResult,
        metaform: &mut Metaform,
        type_name: &str,
        names: &[String],
    ) -> Option<InspectionResult>;
}

// A bare function is the single method
impl<F> InspectionResultProcessor for F
where
    F: Fn(InspectionResult, &mut Metaform, &str, &[String]) -> Option<InspectionResult>
        + Send
        + Sync,
{
    fn process_inspection_result(
        &self,
        inspection_result: InspectionResult,
        metaform: &mut Metaform,
        type_name: &str,
        names: &[String],
    ) -> Option<InspectionResult> {
        self(inspection_result, metaform, type_name, names)
    }
}
