//! Pre-existing markup takes precedence over generated widgets.

use horizon_metaform_core::inspection::{AttributeMap, ElementKind, attr, attr_str};
use horizon_metaform_core::{WidgetNode, util};

use super::WidgetBuilder;
use crate::metaform::Metaform;

/// Claims a pre-existing (overridden) container child in place of building
/// a fresh widget.
///
/// The container's original children are recorded at the first clear step.
/// When one of them carries the id this entry's widget would receive, the
/// user's markup wins: the node is removed from the overridden set and
/// returned as the widget, short-circuiting the rest of the chain.
/// Unclaimed nodes are preserved into the layout's catch-all slot at the
/// end of the pass.
#[derive(Debug, Clone, Copy, Default)]
pub struct OverriddenWidgetBuilder;

impl OverriddenWidgetBuilder {
    pub fn new() -> Self {
        Self
    }
}

impl WidgetBuilder for OverriddenWidgetBuilder {
    fn build_widget(
        &self,
        _element: ElementKind,
        attributes: &AttributeMap,
        metaform: &mut Metaform,
    ) -> Option<WidgetNode> {
        let id = util::widget_id(metaform.path(), attr_str(attributes, attr::NAME));
        if id.is_empty() {
            return None;
        }
        let claimed = metaform.claim_overridden(&id);
        if claimed.is_some() {
            tracing::trace!(
                target: "horizon_metaform::widget_builder",
                id = %id,
                "pre-existing markup claimed for entry"
            );
        }
        claimed
    }
}
