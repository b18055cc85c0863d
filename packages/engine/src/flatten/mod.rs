//! Structural flattening
//!
//! Walks a [`Node`] and emits one `(path, value)` pair per leaf, in
//! traversal order. See [`crate::path`] for the path format.

pub mod pairs;
pub mod walker;

pub use pairs::FlatPairs;
pub use walker::Flattener;

use crate::node::Node;

/// Flattens `root` with the default configuration
#[must_use]
pub fn flatten_structure(root: &Node) -> FlatPairs {
    Flattener::default().flatten(root)
}
