//! Widget construction over the HTML tag vocabulary.

use horizon_metaform_core::inspection::{
    AttributeMap, ElementKind, attr, attr_f64, attr_str, attr_truthy, type_name,
};
use horizon_metaform_core::{WidgetNode, util};
use serde_json::Value;

use super::WidgetBuilder;
use crate::metaform::Metaform;

/// Builds editable widgets using HTML-flavoured tags.
///
/// Type mapping:
///
/// | entry                    | widget                              |
/// |--------------------------|-------------------------------------|
/// | `enum` present           | `select` with one `option` per value |
/// | `boolean`                | `input type="checkbox"`             |
/// | `number` / `integer`     | `input type="number"`               |
/// | `date`                   | `input type="date"`                 |
/// | `string`                 | `input type="text"` (or `password` when masked, `textarea` when large) |
/// | `function` (action)      | `input type="button"`               |
/// | `array`                  | read-only `table` over the collection |
///
/// Compound and unknown types are declined; the pipeline recurses into a
/// nested Metaform for those.
#[derive(Debug, Clone, Copy, Default)]
pub struct HtmlWidgetBuilder;

impl HtmlWidgetBuilder {
    pub fn new() -> Self {
        Self
    }

    fn build_select(&self, values: &[Value], attributes: &AttributeMap) -> WidgetNode {
        let mut select = WidgetNode::new("select");
        if !attr_truthy(attributes, attr::REQUIRED) {
            // Non-required enums get an empty first choice
            select.append_child(WidgetNode::new("option"));
        }
        let titles = attributes
            .get(attr::ENUM_TITLES)
            .and_then(Value::as_array);
        for (index, value) in values.iter().enumerate() {
            let text = titles
                .and_then(|titles| titles.get(index))
                .map(util::display_string)
                .unwrap_or_else(|| util::display_string(value));
            select.append_child(
                WidgetNode::new("option")
                    .with_attribute("value", util::display_string(value))
                    .with_text(text),
            );
        }
        select
    }

    fn build_string_input(&self, attributes: &AttributeMap) -> WidgetNode {
        if attr_truthy(attributes, attr::LARGE) {
            return WidgetNode::new("textarea");
        }
        let type_of = if attr_truthy(attributes, attr::MASKED) {
            "password"
        } else {
            "text"
        };
        let mut input = WidgetNode::new("input").with_attribute("type", type_of);
        if let Some(max_length) = attr_f64(attributes, attr::MAX_LENGTH) {
            input.set_attribute("maxlength", format!("{max_length}"));
        }
        input
    }

    fn build_number_input(&self, attributes: &AttributeMap) -> WidgetNode {
        let mut input = WidgetNode::new("input").with_attribute("type", "number");
        if let Some(minimum) = attr_f64(attributes, attr::MINIMUM) {
            input.set_attribute("min", format!("{minimum}"));
        }
        if let Some(maximum) = attr_f64(attributes, attr::MAXIMUM) {
            input.set_attribute("max", format!("{maximum}"));
        }
        input
    }

    /// Render a collection as a read-only table: a header row from the
    /// first element's keys, one body row per element.
    fn build_table(&self, attributes: &AttributeMap, metaform: &Metaform) -> WidgetNode {
        let mut table = WidgetNode::new("table");

        let (_, mut names) = util::split_path(metaform.path());
        if let Some(name) = attr_str(attributes, attr::NAME) {
            names.push(name.to_string());
        }
        let rows = metaform
            .to_inspect()
            .and_then(|value| util::traverse(value, &names))
            .and_then(Value::as_array)
            .cloned()
            .unwrap_or_default();

        let columns: Vec<String> = rows
            .first()
            .and_then(Value::as_object)
            .map(|first| first.keys().cloned().collect())
            .unwrap_or_default();

        if !columns.is_empty() {
            let mut header_row = WidgetNode::new("tr");
            for column in &columns {
                header_row.append_child(
                    WidgetNode::new("th").with_text(util::uncamel_case(column)),
                );
            }
            table.append_child(WidgetNode::new("thead").with_child(header_row));
        }

        let mut tbody = WidgetNode::new("tbody");
        for row in &rows {
            let mut table_row = WidgetNode::new("tr");
            if columns.is_empty() {
                table_row.append_child(WidgetNode::new("td").with_text(util::display_string(row)));
            } else {
                for column in &columns {
                    let cell = row.get(column).map(util::display_string).unwrap_or_default();
                    table_row.append_child(WidgetNode::new("td").with_text(cell));
                }
            }
            tbody.append_child(table_row);
        }
        table.append_child(tbody);
        table
    }
}

impl WidgetBuilder for HtmlWidgetBuilder {
    fn build_widget(
        &self,
        element: ElementKind,
        attributes: &AttributeMap,
        metaform: &mut Metaform,
    ) -> Option<WidgetNode> {
        if attr_truthy(attributes, attr::HIDDEN) {
            return Some(WidgetNode::new("stub"));
        }
        if element == ElementKind::Action {
            let label = util::label_for(attributes).unwrap_or_default();
            return Some(
                WidgetNode::new("input")
                    .with_attribute("type", "button")
                    .with_attribute("value", label),
            );
        }
        if let Some(values) = attributes.get(attr::ENUM).and_then(Value::as_array) {
            return Some(self.build_select(values, attributes));
        }
        match attr_str(attributes, attr::TYPE) {
            Some(type_name::STRING) => Some(self.build_string_input(attributes)),
            Some(type_name::NUMBER | type_name::INTEGER) => {
                Some(self.build_number_input(attributes))
            }
            Some(type_name::BOOLEAN) => {
                Some(WidgetNode::new("input").with_attribute("type", "checkbox"))
            }
            Some(type_name::DATE) => {
                Some(WidgetNode::new("input").with_attribute("type", "date"))
            }
            Some(type_name::ARRAY) => Some(self.build_table(attributes, metaform)),
            _ => None,
        }
    }
}
