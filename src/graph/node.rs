//! Node implementation for the attribute graph

use super::property::{AttrValue, AttributeMap};
use super::types::NodeKey;
use serde::{Deserialize, Serialize};

/// A node in the graph
///
/// Nodes have:
/// - A unique, caller-chosen key
/// - An open attribute map
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Node {
    /// Unique key of this node
    pub key: NodeKey,

    /// Attributes associated with this node
    pub attributes: AttributeMap,
}

impl Node {
    /// Create a node with no attributes
    pub fn new(key: impl Into<NodeKey>) -> Self {
        Node {
            key: key.into(),
            attributes: AttributeMap::new(),
        }
    }

    /// Create a node with attributes
    pub fn new_with_attributes(key: impl Into<NodeKey>, attributes: AttributeMap) -> Self {
        Node {
            key: key.into(),
            attributes,
        }
    }

    /// Set an attribute value, returning the previous one
    pub fn set_attribute(
        &mut self,
        name: impl Into<String>,
        value: impl Into<AttrValue>,
    ) -> Option<AttrValue> {
        self.attributes.insert(name.into(), value.into())
    }

    /// Get an attribute value
    pub fn attribute(&self, name: &str) -> Option<&AttrValue> {
        self.attributes.get(name)
    }

    /// Remove an attribute
    pub fn remove_attribute(&mut self, name: &str) -> Option<AttrValue> {
        self.attributes.shift_remove(name)
    }

    pub fn has_attribute(&self, name: &str) -> bool {
        self.attributes.contains_key(name)
    }

    /// Merge `attributes` into this node; incoming values overwrite existing ones
    pub fn merge_attributes(&mut self, attributes: AttributeMap) {
        self.attributes.extend(attributes);
    }

    pub fn attribute_count(&self) -> usize {
        self.attributes.len()
    }
}
