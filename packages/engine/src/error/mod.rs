//! Error types for path parsing, query evaluation and alias handling
//!
//! Structural traversal itself never fails. Errors only arise from malformed
//! path strings, malformed query expressions, misuse of the alias argument
//! and invalid configuration.

pub mod constructors;
mod conversions;
mod types;

pub use constructors::{invalid_path_error, invalid_query_error};
pub use types::{
    AliasError, ConfigError, FlattenError, FlattenResult, PathError, PathResult, QueryError,
    QueryResult,
};
