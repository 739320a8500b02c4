//! The widget node model.
//!
//! Widget builders, widget processors and layouts all produce and consume
//! [`WidgetNode`]s: abstract, DOM-like UI elements with a tag, an ordered
//! attribute list, text content and child nodes. The tree is the final
//! product of a build pass — whichever front end ultimately consumes it maps
//! tags like `"input"`, `"select"` or `"table"` onto its own native widgets.
//!
//! Nodes have plain value semantics. Cloning a node clones its whole
//! subtree, which is what makes the defensive-copy guarantees of the build
//! pipeline cheap to state: a node handed to a processor is *the* node, not
//! a view onto shared state.
//!
//! # Example
//!
//! ```
//! use horizon_metaform_core::WidgetNode;
//!
//! let mut row = WidgetNode::new("tr");
//! row.append_child(WidgetNode::new("td").with_attribute("colspan", "2"));
//!
//! assert_eq!(row.child_count(), 1);
//! assert_eq!(row.children()[0].attribute("colspan"), Some("2"));
//! ```

use std::fmt;

use serde::Serialize;

/// An abstract UI element: a tag, ordered attributes, text and children.
///
/// Attributes keep insertion order, mirroring how a DOM element would
/// serialize, so two nodes built by the same pipeline steps in the same
/// order compare equal attribute-for-attribute.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct WidgetNode {
    tag: String,
    attributes: Vec<(String, String)>,
    text: String,
    children: Vec<WidgetNode>,
    /// Set on nodes placed into a container by a build pass. The clear step
    /// uses this to tell rebuilt output from pre-existing markup.
    #[serde(skip)]
    built: bool,
}

impl WidgetNode {
    /// Create an empty node with the given tag.
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            attributes: Vec::new(),
            text: String::new(),
            children: Vec::new(),
            built: false,
        }
    }

    /// The node's tag (`"input"`, `"table"`, `"div"`, ...).
    pub fn tag(&self) -> &str {
        &self.tag
    }

    /// Set an attribute, replacing the value in place if the name already
    /// exists (the attribute keeps its original position).
    pub fn set_attribute(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        let value = value.into();
        match self.attributes.iter_mut().find(|(n, _)| *n == name) {
            Some(entry) => entry.1 = value,
            None => self.attributes.push((name, value)),
        }
    }

    /// Builder-style [`set_attribute`](Self::set_attribute).
    pub fn with_attribute(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.set_attribute(name, value);
        self
    }

    /// Look up an attribute value by name.
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    /// Remove an attribute, returning its value if it was present.
    pub fn remove_attribute(&mut self, name: &str) -> Option<String> {
        let index = self.attributes.iter().position(|(n, _)| n == name)?;
        Some(self.attributes.remove(index).1)
    }

    /// Whether the node carries the given attribute.
    pub fn has_attribute(&self, name: &str) -> bool {
        self.attributes.iter().any(|(n, _)| n == name)
    }

    /// All attributes in insertion order.
    pub fn attributes(&self) -> &[(String, String)] {
        &self.attributes
    }

    /// The node's text content.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Set the node's text content.
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    /// Builder-style [`set_text`](Self::set_text).
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.set_text(text);
        self
    }

    /// Append a child node, transferring ownership into this subtree.
    pub fn append_child(&mut self, child: WidgetNode) {
        self.children.push(child);
    }

    /// Builder-style [`append_child`](Self::append_child).
    pub fn with_child(mut self, child: WidgetNode) -> Self {
        self.append_child(child);
        self
    }

    /// Remove and return the child at `index`, or `None` if out of bounds.
    pub fn remove_child(&mut self, index: usize) -> Option<WidgetNode> {
        if index < self.children.len() {
            Some(self.children.remove(index))
        } else {
            None
        }
    }

    /// Remove all children, returning them in order.
    pub fn take_children(&mut self) -> Vec<WidgetNode> {
        std::mem::take(&mut self.children)
    }

    /// Number of direct children.
    pub fn child_count(&self) -> usize {
        self.children.len()
    }

    /// The child nodes in order.
    pub fn children(&self) -> &[WidgetNode] {
        &self.children
    }

    /// Mutable access to the child nodes.
    pub fn children_mut(&mut self) -> &mut Vec<WidgetNode> {
        &mut self.children
    }

    /// Depth-first search for a descendant (or this node) with the given id.
    pub fn find_by_id(&self, id: &str) -> Option<&WidgetNode> {
        if self.attribute("id") == Some(id) {
            return Some(self);
        }
        self.children.iter().find_map(|child| child.find_by_id(id))
    }

    /// Mutable variant of [`find_by_id`](Self::find_by_id).
    pub fn find_by_id_mut(&mut self, id: &str) -> Option<&mut WidgetNode> {
        if self.attribute("id") == Some(id) {
            return Some(self);
        }
        self.children
            .iter_mut()
            .find_map(|child| child.find_by_id_mut(id))
    }

    /// First direct child with the given tag.
    pub fn child_by_tag_mut(&mut self, tag: &str) -> Option<&mut WidgetNode> {
        self.children.iter_mut().find(|child| child.tag == tag)
    }

    /// Whether this node was placed by a build pass.
    pub fn is_built(&self) -> bool {
        self.built
    }

    /// Mark (or unmark) this node as build-pass output. Consumed by the
    /// clear step at the start of the next pass.
    pub fn set_built(&mut self, built: bool) {
        self.built = built;
    }
}

impl fmt::Display for WidgetNode {
    /// Renders the opening tag, e.g. `input type="text" id="foo"`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.tag)?;
        for (name, value) in &self.attributes {
            write!(f, " {name}=\"{value}\"")?;
        }
        Ok(())
    }
}
