//! Elements accepted by the bulk insertion operations
//!
//! `add_nodes_from` takes anything convertible to a [`NodeEntry`]: a bare key
//! or a `(key, attributes)` pair. `add_edges_from` takes `(u, v)` or
//! `(u, v, attributes)` tuples via [`EdgeEntry`].
//!
//! Sequences are treated uniformly. A text value passed as one element is one
//! key, but iterating the text first (`"spam".chars()`) yields one node per
//! character.

use super::property::AttributeMap;
use super::types::NodeKey;

/// One element of a bulk node insertion
#[derive(Debug, Clone, PartialEq)]
pub struct NodeEntry {
    pub key: NodeKey,
    pub attributes: AttributeMap,
}

impl NodeEntry {
    pub fn new(key: impl Into<NodeKey>) -> Self {
        NodeEntry {
            key: key.into(),
            attributes: AttributeMap::new(),
        }
    }
}

impl From<NodeKey> for NodeEntry {
    fn from(key: NodeKey) -> Self {
        NodeEntry::new(key)
    }
}

impl From<&NodeKey> for NodeEntry {
    fn from(key: &NodeKey) -> Self {
        NodeEntry::new(key)
    }
}

impl From<&str> for NodeEntry {
    fn from(key: &str) -> Self {
        NodeEntry::new(key)
    }
}

impl From<String> for NodeEntry {
    fn from(key: String) -> Self {
        NodeEntry::new(key)
    }
}

impl From<char> for NodeEntry {
    fn from(key: char) -> Self {
        NodeEntry::new(key)
    }
}

impl From<i64> for NodeEntry {
    fn from(key: i64) -> Self {
        NodeEntry::new(key)
    }
}

impl From<i32> for NodeEntry {
    fn from(key: i32) -> Self {
        NodeEntry::new(key)
    }
}

impl<K: Into<NodeKey>> From<(K, AttributeMap)> for NodeEntry {
    fn from((key, attributes): (K, AttributeMap)) -> Self {
        NodeEntry {
            key: key.into(),
            attributes,
        }
    }
}

/// One element of a bulk edge insertion
#[derive(Debug, Clone, PartialEq)]
pub struct EdgeEntry {
    pub u: NodeKey,
    pub v: NodeKey,
    pub attributes: AttributeMap,
}

impl<U: Into<NodeKey>, V: Into<NodeKey>> From<(U, V)> for EdgeEntry {
    fn from((u, v): (U, V)) -> Self {
        EdgeEntry {
            u: u.into(),
            v: v.into(),
            attributes: AttributeMap::new(),
        }
    }
}

impl<U: Into<NodeKey>, V: Into<NodeKey>> From<(U, V, AttributeMap)> for EdgeEntry {
    fn from((u, v, attributes): (U, V, AttributeMap)) -> Self {
        EdgeEntry {
            u: u.into(),
            v: v.into(),
            attributes,
        }
    }
}
