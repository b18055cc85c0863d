//! # flatpath engine
//!
//! Turns an arbitrary nested structure into a flat, ordered sequence of
//! `(path, value)` pairs, then appends caller-named aliases resolved through
//! a path-query engine.
//!
//! ## Features
//!
//! - **Closed data model** ([`node::Node`]) with shared, possibly cyclic
//!   containers and an opaque fallback for anything else
//! - **Re-queryable paths**: keys containing query tokens are quoted
//! - **Cycle-safe traversal** guarded by the identities on the current route
//! - **Duplicate-preserving output** ([`flatten::FlatPairs`])
//! - **Pluggable query engine** behind [`query::PathQuery`], with the
//!   [`query::StepQuery`] default
//!
//! ## Usage
//!
//! ```rust
//! use flatpath_engine::prelude::*;
//! use serde_json::json;
//!
//! let root = Node::from(json!({"A": 1, "F": [5, 6]}));
//! let aliases = AliasSpec::pairs([("first", "/F/*[0]")]);
//! let result = run(&root, aliases.into(), &StepQuery::new(), &FlattenConfig::default())
//!     .expect("default configuration is valid");
//!
//! assert_eq!(result.pairs.first("/F/*[1]"), Some(&Node::from(6)));
//! assert_eq!(result.pairs.first("first"), Some(&Node::from(5)));
//! ```

#![deny(unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]

pub mod alias;
pub mod config;
pub mod error;
pub mod flatten;
pub mod node;
pub mod path;
pub mod pipeline;
pub mod query;

// Prelude with canonical types
pub mod prelude;

pub use crate::prelude::*;
