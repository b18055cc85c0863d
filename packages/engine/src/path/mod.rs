//! Structural paths
//!
//! A structural path names the route from the root of a structure to one
//! node. Mapping steps render as `/key` (or `/"key"` when the key contains a
//! token meaningful to the query grammar) and sequence steps as `/*[index]`.
//! The root itself renders as `/`.

pub mod escape;
pub mod operations;
pub mod parser;
pub mod types;

pub use escape::{escape_key, needs_quoting, push_index, push_key};
pub use types::{PathSegment, StructuralPath};

/// Rendered form of the root path
pub const ROOT_PATH: &str = "/";
