//! Table-based layout.

use horizon_metaform_core::inspection::{AttributeMap, ElementKind, attr, attr_str, attr_truthy};
use horizon_metaform_core::{WidgetNode, util};

use super::{Layout, is_ignored_stub};
use crate::metaform::Metaform;

/// Arranges widgets as table rows: a label header cell, the widget cell and
/// a required-marker cell per entry.
///
/// `start_container_layout` creates the `table`/`tbody` bracket (with id
/// `table-<pathId>` when the owning path yields one); each widget then
/// becomes a `tr` appended to that `tbody`. Ids follow the widget's own id:
/// `table-<id>-row`, `table-<id>-label-cell`, `table-<id>-label` and
/// `table-<id>-cell`. Entries without a label span both leading columns
/// with `colspan="2"`; required editable entries get a `*` marker cell.
///
/// This is the default layout.
#[derive(Debug, Clone, Copy, Default)]
pub struct TableLayout;

impl TableLayout {
    pub fn new() -> Self {
        Self
    }
}

impl Layout for TableLayout {
    fn start_container_layout(&self, container: &mut WidgetNode, metaform: &mut Metaform) {
        let mut table = WidgetNode::new("table");
        let path_id = util::widget_id(metaform.path(), None);
        if !path_id.is_empty() {
            table.set_attribute("id", format!("table-{path_id}"));
        }
        table.append_child(WidgetNode::new("tbody"));
        container.append_child(table);
    }

    fn layout_widget(
        &self,
        widget: WidgetNode,
        element: ElementKind,
        attributes: &AttributeMap,
        container: &mut WidgetNode,
        metaform: &mut Metaform,
    ) {
        if is_ignored_stub(&widget) {
            return;
        }

        // Row ids derive from the path and entry name, like widget ids do,
        // so unnamed entries (unclaimed markup, headings) get plain rows
        let id = Some(util::widget_id(
            metaform.path(),
            attr_str(attributes, attr::NAME),
        ))
        .filter(|id| !id.is_empty());
        let label = match element {
            ElementKind::Property => util::label_for(attributes),
            _ => None,
        };

        let mut row = WidgetNode::new("tr");
        if let Some(id) = &id {
            row.set_attribute("id", format!("table-{id}-row"));
        }

        // Label header cell; actions keep the cell but carry their label on
        // the button itself
        let has_header_cell = label.is_some() || element == ElementKind::Action;
        if has_header_cell {
            let mut header_cell = WidgetNode::new("th");
            if let Some(id) = &id {
                header_cell.set_attribute("id", format!("table-{id}-label-cell"));
            }
            if let Some(label) = &label {
                let mut label_node = WidgetNode::new("label");
                if let Some(id) = &id {
                    label_node.set_attribute("for", id);
                    label_node.set_attribute("id", format!("table-{id}-label"));
                }
                label_node.set_text(format!("{label}:"));
                header_cell.append_child(label_node);
            }
            row.append_child(header_cell);
        }

        let mut widget_cell = WidgetNode::new("td");
        if let Some(id) = &id {
            widget_cell.set_attribute("id", format!("table-{id}-cell"));
        }
        if !has_header_cell {
            widget_cell.set_attribute("colspan", "2");
        }
        widget_cell.append_child(widget);
        row.append_child(widget_cell);

        let mut marker_cell = WidgetNode::new("td");
        if attr_truthy(attributes, attr::REQUIRED) && !metaform.is_read_only(attributes) {
            marker_cell.set_text("*");
        }
        row.append_child(marker_cell);

        // Rows land in the tbody created by start_container_layout; fall
        // back to the container itself if the bracket was replaced
        if let Some(table) = container
            .children_mut()
            .iter_mut()
            .rev()
            .find(|child| child.tag() == "table")
        {
            if let Some(tbody) = table.child_by_tag_mut("tbody") {
                tbody.append_child(row);
                return;
            }
        }
        container.append_child(row);
    }
}
