//! Core graph store implementation
//!
//! This module implements the undirected attribute graph:
//! - Nodes identified by caller-chosen keys, each with an open attribute map
//! - Undirected edges, at most one per unordered pair, self-loops allowed
//! - Graph-level metadata
//! - Degree and adjacency queries over insertion-ordered storage

pub mod edge;
pub mod entry;
pub mod node;
pub mod property;
pub mod snapshot;
pub mod store;
pub mod types;

// Re-export main types
pub use edge::Edge;
pub use entry::{EdgeEntry, NodeEntry};
pub use node::Node;
pub use property::{attributes, AttrValue, AttributeMap, DisplayMap, WEIGHT};
pub use snapshot::GraphSnapshot;
pub use store::{GraphError, GraphResult, GraphStore};
pub use types::{EdgeKey, NodeKey};
