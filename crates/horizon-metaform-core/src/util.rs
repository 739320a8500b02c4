//! Naming, path and value utilities shared across the pipeline.
//!
//! Widget ids are camel-joined from the owning path and the property name
//! (`object.foo` + `nestedFoo` -> `fooNestedFoo`; the root `object` segment
//! never contributes). Labels go the other way: `nestedFoo` -> `Nested Foo`.

use serde_json::Value;

use crate::inspection::{AttributeMap, attr, attr_str};

/// The root path segment for an anonymous top-level value. It identifies
/// "the object itself" and is dropped from generated widget ids.
pub const ROOT_TYPE: &str = "object";

/// Split a dotted path into its type (first segment) and names (the rest).
///
/// ```
/// use horizon_metaform_core::util::split_path;
///
/// let (type_name, names) = split_path("foo.bar.baz");
/// assert_eq!(type_name, "foo");
/// assert_eq!(names, ["bar", "baz"]);
/// ```
pub fn split_path(path: &str) -> (String, Vec<String>) {
    let mut segments = path.split('.').filter(|segment| !segment.is_empty());
    let type_name = segments.next().unwrap_or_default().to_string();
    (type_name, segments.map(str::to_string).collect())
}

/// Uppercase the first character.
pub fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

/// Join segments camel-case style: the first segment is kept as-is, every
/// following segment is capitalized.
pub fn camel_case_join<'a>(segments: impl IntoIterator<Item = &'a str>) -> String {
    let mut joined = String::new();
    for segment in segments {
        if segment.is_empty() {
            continue;
        }
        if joined.is_empty() {
            joined.push_str(segment);
        } else {
            joined.push_str(&capitalize(segment));
        }
    }
    joined
}

/// Turn a camel-cased name into human-readable words: `nestedFoo` becomes
/// `Nested Foo`.
pub fn uncamel_case(name: &str) -> String {
    let mut words = String::new();
    let mut previous_lowercase = false;
    for character in name.chars() {
        if character.is_uppercase() && previous_lowercase {
            words.push(' ');
        }
        previous_lowercase = character.is_lowercase() || character.is_ascii_digit();
        if words.is_empty() {
            words.extend(character.to_uppercase());
        } else {
            words.push(character);
        }
    }
    words
}

/// Derive the widget id for a property under the given path.
///
/// The path's segments and the property name are camel-joined; the root
/// [`ROOT_TYPE`] segment is dropped. An empty result means "no id" (the
/// anonymous root entity).
///
/// ```
/// use horizon_metaform_core::util::widget_id;
///
/// assert_eq!(widget_id("object", Some("foo")), "foo");
/// assert_eq!(widget_id("object.foo", Some("nestedFoo")), "fooNestedFoo");
/// assert_eq!(widget_id("foo.bar", None), "fooBar");
/// ```
pub fn widget_id(path: &str, name: Option<&str>) -> String {
    let (type_name, names) = split_path(path);
    let mut segments = Vec::new();
    if type_name != ROOT_TYPE {
        segments.push(type_name);
    }
    segments.extend(names);
    if let Some(name) = name {
        segments.push(name.to_string());
    }
    camel_case_join(segments.iter().map(String::as_str))
}

/// Resolve the label text for an inspection entry.
///
/// Precedence: an explicit `label` attribute (localization writes here),
/// then a `title` attribute (typically carried by overridden markup), then
/// the uncamel-cased property name. `None` means the entry has no label at
/// all and layouts should let the widget span the label slot.
pub fn label_for(attributes: &AttributeMap) -> Option<String> {
    if let Some(label) = attr_str(attributes, attr::LABEL) {
        return Some(label.to_string());
    }
    if let Some(title) = attr_str(attributes, attr::TITLE) {
        return Some(title.to_string());
    }
    attr_str(attributes, attr::NAME).map(uncamel_case)
}

/// Walk a JSON value along a chain of property names.
pub fn traverse<'a>(value: &'a Value, names: &[String]) -> Option<&'a Value> {
    let mut current = value;
    for name in names {
        current = current.get(name)?;
    }
    Some(current)
}

/// Mutable variant of [`traverse`].
pub fn traverse_mut<'a>(value: &'a mut Value, names: &[String]) -> Option<&'a mut Value> {
    let mut current = value;
    for name in names {
        current = current.get_mut(name)?;
    }
    Some(current)
}

/// Render a JSON value the way a widget would display it: strings verbatim,
/// numbers and booleans via their canonical form, null as empty.
pub fn display_string(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(text) => text.clone(),
        Value::Bool(flag) => flag.to_string(),
        Value::Number(number) => number.to_string(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_split_path() {
        assert_eq!(split_path("object"), ("object".to_string(), vec![]));
        assert_eq!(
            split_path("object.foo.bar"),
            (
                "object".to_string(),
                vec!["foo".to_string(), "bar".to_string()]
            )
        );
        assert_eq!(split_path(""), (String::new(), vec![]));
    }

    #[test]
    fn test_camel_case_join() {
        assert_eq!(camel_case_join(["foo", "bar"]), "fooBar");
        assert_eq!(camel_case_join(["foo", "nestedFoo"]), "fooNestedFoo");
        assert_eq!(camel_case_join(["foo"]), "foo");
        assert_eq!(camel_case_join([]), "");
    }

    #[test]
    fn test_uncamel_case() {
        assert_eq!(uncamel_case("foo"), "Foo");
        assert_eq!(uncamel_case("nestedFoo"), "Nested Foo");
        assert_eq!(uncamel_case("fooAction"), "Foo Action");
        assert_eq!(uncamel_case(""), "");
    }

    #[test]
    fn test_widget_id_drops_root_segment() {
        assert_eq!(widget_id("object", Some("foo")), "foo");
        assert_eq!(widget_id("object.foo", Some("nestedFoo")), "fooNestedFoo");
        assert_eq!(widget_id("foo.bar", None), "fooBar");
        assert_eq!(widget_id("object", None), "");
    }

    #[test]
    fn test_label_precedence() {
        let mut attributes = AttributeMap::new();
        attributes.insert("name".into(), json!("fooBar"));
        assert_eq!(label_for(&attributes), Some("Foo Bar".to_string()));

        attributes.insert("title".into(), json!("From Markup"));
        assert_eq!(label_for(&attributes), Some("From Markup".to_string()));

        attributes.insert("label".into(), json!("Localized"));
        assert_eq!(label_for(&attributes), Some("Localized".to_string()));

        assert_eq!(label_for(&AttributeMap::new()), None);
    }

    #[test]
    fn test_traverse() {
        let value = json!({ "foo": { "bar": 42 } });
        let names = vec!["foo".to_string(), "bar".to_string()];
        assert_eq!(traverse(&value, &names), Some(&json!(42)));
        assert_eq!(traverse(&value, &["missing".to_string()]), None);
        assert_eq!(traverse(&value, &[]), Some(&value));
    }

    #[test]
    fn test_display_string() {
        assert_eq!(display_string(&json!("Foo")), "Foo");
        assert_eq!(display_string(&json!(42)), "42");
        assert_eq!(display_string(&json!(true)), "true");
        assert_eq!(display_string(&Value::Null), "");
    }
}
