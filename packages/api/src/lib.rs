//! flatpath public API
//!
//! Flattens nested data into an ordered sequence of `(path, value)` pairs and
//! appends caller-named aliases resolved through a path-query engine.
//!
//! ```rust
//! use flatpath::{AliasSpec, Node, flatten};
//! use serde_json::json;
//!
//! let data = json!({"A": 1, "B": 2, "C": {"D": 3, "E": 4}, "F": [5, 6]});
//! let pairs = flatten(data, Some(AliasSpec::pairs([("One", "/B"), ("Two", "/Z")])));
//!
//! assert_eq!(pairs.first("/C/D"), Some(&Node::from(3)));
//! assert_eq!(pairs.first("/F/*[1]"), Some(&Node::from(6)));
//! assert_eq!(pairs.first("One"), Some(&Node::from(2)));
//! assert_eq!(pairs.first("Two"), Some(&Node::Absent));
//! ```

#![deny(unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]

pub mod builder;

// Re-export all public API components
pub use builder::*;

// Re-export important types from the engine package
pub use flatpath_engine::{
    AliasError, AliasInput, AliasPolicy, AliasSpec, CompiledQuery, Diagnostic, ExactPathQuery,
    FlatPairs, FlattenConfig, FlattenError, FlattenResult, Flattened, KeyOrder, MapRef, Node,
    Opaque, PathQuery, PathSegment, QueryError, Scalar, SeqRef, StepQuery, StructuralPath,
};

/// Flattens `data` and appends `aliases` resolved with [`StepQuery`]
///
/// Never fails: structural traversal has no error conditions and aliases
/// that match nothing yield `(name, Node::Absent)`.
pub fn flatten(data: impl Into<Node>, aliases: Option<AliasSpec>) -> FlatPairs {
    flatten_with(data, aliases, &StepQuery::new())
}

/// Like [`flatten`] with a caller-supplied query engine
pub fn flatten_with<Q: PathQuery + ?Sized>(
    data: impl Into<Node>,
    aliases: Option<AliasSpec>,
    engine: &Q,
) -> FlatPairs {
    let root = data.into();
    flatpath_engine::flatten_lenient(&root, aliases.as_ref(), engine)
}

/// Flattens `data` without aliases
pub fn flatten_structure(data: impl Into<Node>) -> FlatPairs {
    flatpath_engine::flatten_structure(&data.into())
}
