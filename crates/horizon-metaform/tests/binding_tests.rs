//! Integration tests for two-way binding: values flowing into widgets at
//! build time and back onto the domain value via save().

use horizon_metaform::prelude::*;
use serde_json::json;

#[test]
fn test_save_writes_an_edited_value_back() {
    let mut metaform = Metaform::with_config(
        WidgetNode::new("div"),
        MetaformConfig::new().with_layout(SimpleLayout::new()),
    );
    metaform.set_to_inspect(Some(json!({ "bar": "Bar" })));
    metaform.build_widgets().unwrap();

    let input = &metaform.container().children()[0];
    assert_eq!(
        input.to_string(),
        "input type=\"text\" id=\"bar\" name=\"bar\" value=\"Bar\""
    );

    // Simulate the user editing the rendered input
    metaform
        .container_mut()
        .find_by_id_mut("bar")
        .unwrap()
        .set_attribute("value", "Bar2");
    metaform.save();

    assert_eq!(metaform.to_inspect(), Some(&json!({ "bar": "Bar2" })));

    // The next build renders the updated value
    metaform.build_widgets().unwrap();
    assert_eq!(
        metaform.container().children()[0].attribute("value"),
        Some("Bar2")
    );
}

#[test]
fn test_save_reaches_into_nested_metaforms() {
    let mut metaform = Metaform::new(WidgetNode::new("div"));
    metaform.set_to_inspect(Some(json!({ "foo": { "nestedFoo": "Foo" } })));
    metaform.build_widgets().unwrap();

    metaform
        .container_mut()
        .find_by_id_mut("fooNestedFoo")
        .unwrap()
        .set_attribute("value", "Foo2");
    metaform.save();

    assert_eq!(
        metaform.to_inspect(),
        Some(&json!({ "foo": { "nestedFoo": "Foo2" } }))
    );
}

#[test]
fn test_save_coerces_to_the_existing_json_type() {
    let mut metaform = Metaform::with_config(
        WidgetNode::new("div"),
        MetaformConfig::new().with_layout(SimpleLayout::new()),
    );
    metaform.set_to_inspect(Some(json!({ "age": 39, "ratio": 0.5 })));
    metaform.build_widgets().unwrap();

    metaform
        .container_mut()
        .find_by_id_mut("age")
        .unwrap()
        .set_attribute("value", "40");
    metaform
        .container_mut()
        .find_by_id_mut("ratio")
        .unwrap()
        .set_attribute("value", "0.75");
    metaform.save();

    assert_eq!(
        metaform.to_inspect(),
        Some(&json!({ "age": 40, "ratio": 0.75 }))
    );
}

#[test]
fn test_save_reads_checkbox_state() {
    let mut metaform = Metaform::with_config(
        WidgetNode::new("div"),
        MetaformConfig::new().with_layout(SimpleLayout::new()),
    );
    metaform.set_to_inspect(Some(json!({ "retired": true, "employed": false })));
    metaform.build_widgets().unwrap();

    assert_eq!(
        metaform
            .container()
            .find_by_id("retired")
            .unwrap()
            .attribute("checked"),
        Some("checked")
    );
    assert!(
        !metaform
            .container()
            .find_by_id("employed")
            .unwrap()
            .has_attribute("checked")
    );

    // Toggle both
    metaform
        .container_mut()
        .find_by_id_mut("retired")
        .unwrap()
        .remove_attribute("checked");
    metaform
        .container_mut()
        .find_by_id_mut("employed")
        .unwrap()
        .set_attribute("checked", "checked");
    metaform.save();

    assert_eq!(
        metaform.to_inspect(),
        Some(&json!({ "retired": false, "employed": true }))
    );
}

#[test]
fn test_inspects_from_a_parent_path() {
    let mut metaform = Metaform::with_config(
        WidgetNode::new("div"),
        MetaformConfig::new().with_inspector(
            JsonSchemaInspector::new(json!({
                "properties": {
                    "bar": { "type": "string", "required": true }
                }
            }))
            .unwrap(),
        ),
    );
    metaform.set_to_inspect(Some(json!({ "bar": "Bar" })));
    metaform.set_path("foo.bar");
    metaform.build_widgets().unwrap();

    let table = &metaform.container().children()[0];
    assert_eq!(table.attribute("id"), Some("table-fooBar"));

    let row = &table.children()[0].children()[0];
    assert_eq!(row.to_string(), "tr id=\"table-fooBar-row\"");
    assert_eq!(row.child_count(), 2);

    // Root-level widget: no label cell, full-width, required marker
    let cell = &row.children()[0];
    assert_eq!(cell.to_string(), "td id=\"table-fooBar-cell\" colspan=\"2\"");
    assert_eq!(
        cell.children()[0].to_string(),
        "input type=\"text\" id=\"fooBar\" required=\"required\" name=\"fooBar\" value=\"Bar\""
    );
    assert_eq!(row.children()[1].text(), "*");

    // Saving writes through the parent path onto the right property
    metaform
        .container_mut()
        .find_by_id_mut("fooBar")
        .unwrap()
        .set_attribute("value", "Bar2");
    metaform.save();
    assert_eq!(metaform.to_inspect(), Some(&json!({ "bar": "Bar2" })));
}

#[test]
fn test_collections_render_as_tables() {
    // A collection-valued property
    let mut metaform = Metaform::new(WidgetNode::new("div"));
    metaform.set_to_inspect(Some(json!({
        "collection": [
            { "name": "Foo", "description": "A Foo" },
            { "name": "Bar", "description": "A Bar" }
        ]
    })));
    metaform.build_widgets().unwrap();

    let row = &metaform.container().children()[0].children()[0].children()[0];
    assert_eq!(row.to_string(), "tr id=\"table-collection-row\"");
    let widget = &row.children()[1].children()[0];
    assert_eq!(widget.to_string(), "table id=\"collection\"");

    let thead = &widget.children()[0];
    assert_eq!(thead.children()[0].children()[0].text(), "Name");
    assert_eq!(thead.children()[0].children()[1].text(), "Description");

    let tbody = &widget.children()[1];
    assert_eq!(tbody.child_count(), 2);
    assert_eq!(tbody.children()[0].children()[0].text(), "Foo");
    assert_eq!(tbody.children()[0].children()[1].text(), "A Foo");
    assert_eq!(tbody.children()[1].children()[0].text(), "Bar");

    // A collection as the root value renders as the entity widget
    let mut metaform = Metaform::new(WidgetNode::new("div"));
    metaform.set_to_inspect(Some(json!([
        { "name": "Foo", "description": "A Foo" }
    ])));
    metaform.build_widgets().unwrap();

    let row = &metaform.container().children()[0].children()[0].children()[0];
    let widget = &row.children()[0].children()[0];
    assert_eq!(widget.tag(), "table");
    assert!(!widget.has_attribute("id"));
    assert_eq!(widget.children()[0].tag(), "thead");
    assert_eq!(widget.children()[1].children()[0].children()[0].text(), "Foo");
}

#[test]
fn test_enum_metadata_builds_a_select() {
    let mut metaform = Metaform::with_config(
        WidgetNode::new("div"),
        MetaformConfig::new()
            .with_inspector(
                CompositeInspector::new()
                    .add(PropertyTypeInspector::new())
                    .add(
                        JsonSchemaInspector::new(json!({
                            "properties": {
                                "color": {
                                    "enum": ["r", "g"],
                                    "enumTitles": ["Red", "Green"]
                                }
                            }
                        }))
                        .unwrap(),
                    ),
            )
            .with_layout(SimpleLayout::new()),
    );
    metaform.set_to_inspect(Some(json!({ "color": "g" })));
    metaform.build_widgets().unwrap();

    let select = &metaform.container().children()[0];
    assert_eq!(select.tag(), "select");
    assert_eq!(select.attribute("id"), Some("color"));
    assert_eq!(select.attribute("value"), Some("g"));
    assert_eq!(select.child_count(), 3);
    assert_eq!(select.children()[1].text(), "Red");
    assert_eq!(select.children()[2].attribute("value"), Some("g"));
}
