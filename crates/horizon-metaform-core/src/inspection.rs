//! The inspection result model.
//!
//! An [`InspectionResult`] is a tree-shaped description of a domain value:
//! optional root-level attributes describing the entity itself, plus an
//! optional ordered `properties` mapping from property name to an attribute
//! map (`type`, `required`, `readOnly`, `propertyOrder`, `enum`, ...).
//!
//! Results are JSON-object-shaped. Inspectors that read JSON Schema can pass
//! schema fragments through nearly verbatim, and processors can add or
//! rewrite attributes without any schema of their own. Attribute values are
//! [`serde_json::Value`]s: strings for names and types, booleans for flags,
//! numbers for ordering, arrays for enums.
//!
//! Property iteration preserves declaration order; [`sorted_properties`]
//! applies the explicit `propertyOrder` sort on top of it.
//!
//! [`sorted_properties`]: InspectionResult::sorted_properties

use std::fmt;

use serde_json::{Map, Value};

/// An ordered attribute mapping, as used both for root-level entity
/// attributes and for each property's attributes.
pub type AttributeMap = Map<String, Value>;

/// Well-known attribute names.
///
/// These are the vocabulary shared by inspectors, processors, builders and
/// layouts. Nothing stops a custom inspector from adding attributes of its
/// own; unknown attributes flow through the pipeline untouched.
pub mod attr {
    /// Property name, injected into each property's defensive copy.
    pub const NAME: &str = "name";
    /// Value type (`"string"`, `"number"`, `"boolean"`, `"array"`, ...).
    pub const TYPE: &str = "type";
    /// Whether a value is required.
    pub const REQUIRED: &str = "required";
    /// Whether a value is read-only.
    pub const READ_ONLY: &str = "readOnly";
    /// Explicit numeric ordering among sibling properties.
    pub const PROPERTY_ORDER: &str = "propertyOrder";
    /// Allowed values.
    pub const ENUM: &str = "enum";
    /// Human-readable titles for [`ENUM`] entries, index-aligned.
    pub const ENUM_TITLES: &str = "enumTitles";
    /// Explicit label text (localization writes here).
    pub const LABEL: &str = "label";
    /// Fallback label text, typically carried by overridden markup.
    pub const TITLE: &str = "title";
    /// Section grouping, consumed by layout decorators.
    pub const SECTION: &str = "section";
    /// Whether a value should not be shown at all.
    pub const HIDDEN: &str = "hidden";
    /// Whether string input should be obscured.
    pub const MASKED: &str = "masked";
    /// Whether string input is expected to be multi-line.
    pub const LARGE: &str = "large";
    /// Maximum string length.
    pub const MAX_LENGTH: &str = "maxLength";
    /// Minimum numeric value.
    pub const MINIMUM: &str = "minimum";
    /// Maximum numeric value.
    pub const MAXIMUM: &str = "maximum";
}

/// Well-known values for the [`attr::TYPE`] attribute.
pub mod type_name {
    pub const STRING: &str = "string";
    pub const NUMBER: &str = "number";
    pub const INTEGER: &str = "integer";
    pub const BOOLEAN: &str = "boolean";
    pub const DATE: &str = "date";
    pub const ARRAY: &str = "array";
    pub const OBJECT: &str = "object";
    /// An invokable action rather than a data property.
    pub const FUNCTION: &str = "function";
}

const PROPERTIES: &str = "properties";

/// What kind of inspection entry a widget is being built for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ElementKind {
    /// The inspected value itself (root-level widget).
    Entity,
    /// One named data property of the inspected value.
    Property,
    /// One invokable action of the inspected value.
    Action,
}

impl fmt::Display for ElementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ElementKind::Entity => write!(f, "entity"),
            ElementKind::Property => write!(f, "property"),
            ElementKind::Action => write!(f, "action"),
        }
    }
}

/// A tree-shaped description of a domain value's properties and metadata.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct InspectionResult {
    entries: Map<String, Value>,
}

impl InspectionResult {
    /// An empty result: no root attributes, no properties.
    pub fn new() -> Self {
        Self::default()
    }

    /// Wrap a JSON object as an inspection result.
    ///
    /// Returns [`CoreError::InvalidInspectionResult`] when the value is not
    /// an object.
    pub fn try_from_value(value: Value) -> crate::Result<Self> {
        match value {
            Value::Object(entries) => Ok(Self { entries }),
            other => Err(crate::CoreError::InvalidInspectionResult(format!(
                "expected a JSON object, got {other}"
            ))),
        }
    }

    /// Wrap an already-built attribute map as an inspection result.
    pub fn from_map(entries: Map<String, Value>) -> Self {
        Self { entries }
    }

    /// Whether the result carries neither root attributes nor properties.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The root-level attributes (everything except `properties`), cloned.
    pub fn attributes(&self) -> AttributeMap {
        self.entries
            .iter()
            .filter(|(name, _)| *name != PROPERTIES)
            .map(|(name, value)| (name.clone(), value.clone()))
            .collect()
    }

    /// Read a single root-level attribute.
    pub fn attribute(&self, name: &str) -> Option<&Value> {
        if name == PROPERTIES {
            return None;
        }
        self.entries.get(name)
    }

    /// Set a root-level attribute.
    pub fn set_attribute(&mut self, name: impl Into<String>, value: Value) {
        self.entries.insert(name.into(), value);
    }

    /// Whether the result declares any properties.
    pub fn has_properties(&self) -> bool {
        matches!(self.entries.get(PROPERTIES), Some(Value::Object(map)) if !map.is_empty())
    }

    /// Add or replace a property's attribute map.
    pub fn insert_property(&mut self, name: impl Into<String>, attributes: AttributeMap) {
        let properties = self
            .entries
            .entry(PROPERTIES.to_string())
            .or_insert_with(|| Value::Object(Map::new()));
        if let Value::Object(map) = properties {
            map.insert(name.into(), Value::Object(attributes));
        } else {
            let mut map = Map::new();
            map.insert(name.into(), Value::Object(attributes));
            *properties = Value::Object(map);
        }
    }

    /// The properties in declaration order, each as a cloned attribute map.
    ///
    /// A property declared as a bare string (shorthand for its type) is
    /// normalized to `{ "type": <string> }`.
    pub fn properties(&self) -> Vec<(String, AttributeMap)> {
        let Some(Value::Object(properties)) = self.entries.get(PROPERTIES) else {
            return Vec::new();
        };
        properties
            .iter()
            .map(|(name, value)| {
                let attributes = match value {
                    Value::Object(map) => map.clone(),
                    Value::String(type_of) => {
                        let mut map = Map::new();
                        map.insert(attr::TYPE.to_string(), Value::String(type_of.clone()));
                        map
                    }
                    _ => Map::new(),
                };
                (name.clone(), attributes)
            })
            .collect()
    }

    /// The properties sorted for building.
    ///
    /// Properties carrying a numeric `propertyOrder` sort by it, ascending
    /// and stable: equal orders keep declaration order. Properties without
    /// one do not participate in explicit ordering — they sort after the
    /// ordered entries, preserving their own declaration order. When no
    /// property carries an order (the common case) this is declaration
    /// order untouched.
    pub fn sorted_properties(&self) -> Vec<(String, AttributeMap)> {
        let mut properties = self.properties();
        if properties
            .iter()
            .all(|(_, attributes)| attr_f64(attributes, attr::PROPERTY_ORDER).is_none())
        {
            return properties;
        }
        properties.sort_by(|(_, a), (_, b)| {
            let a = attr_f64(a, attr::PROPERTY_ORDER).unwrap_or(f64::INFINITY);
            let b = attr_f64(b, attr::PROPERTY_ORDER).unwrap_or(f64::INFINITY);
            a.partial_cmp(&b).unwrap_or(std::cmp::Ordering::Equal)
        });
        properties
    }

    /// Merge another result into this one.
    ///
    /// Root attributes from `other` win on collision. Properties merge by
    /// name — attributes of an already-known property are overlaid, new
    /// properties append in `other`'s order.
    pub fn merge(&mut self, other: InspectionResult) {
        for (name, value) in other.entries {
            if name != PROPERTIES {
                self.entries.insert(name, value);
                continue;
            }
            let Value::Object(incoming) = value else { continue };
            for (property, incoming_attributes) in incoming {
                let mut merged = self
                    .properties()
                    .into_iter()
                    .find(|(name, _)| *name == property)
                    .map(|(_, attributes)| attributes)
                    .unwrap_or_default();
                if let Value::Object(map) = incoming_attributes {
                    merged.extend(map);
                } else if let Value::String(type_of) = incoming_attributes {
                    merged.insert(attr::TYPE.to_string(), Value::String(type_of));
                }
                self.insert_property(property, merged);
            }
        }
    }

    /// Consume the result, yielding the underlying JSON object.
    pub fn into_value(self) -> Value {
        Value::Object(self.entries)
    }
}

/// Read an attribute as a string slice.
pub fn attr_str<'a>(attributes: &'a AttributeMap, name: &str) -> Option<&'a str> {
    attributes.get(name).and_then(Value::as_str)
}

/// Read an attribute as a number, accepting numeric strings.
pub fn attr_f64(attributes: &AttributeMap, name: &str) -> Option<f64> {
    match attributes.get(name)? {
        Value::Number(number) => number.as_f64(),
        Value::String(text) => text.parse().ok(),
        _ => None,
    }
}

/// Whether an attribute is truthy: boolean `true` or the string `"true"`.
pub fn attr_truthy(attributes: &AttributeMap, name: &str) -> bool {
    match attributes.get(name) {
        Some(Value::Bool(flag)) => *flag,
        Some(Value::String(text)) => text == "true",
        _ => false,
    }
}
