//! Error enums for each concern

use thiserror::Error;

/// Result alias for structural path parsing
pub type PathResult<T> = Result<T, PathError>;

/// Result alias for query compilation and evaluation
pub type QueryResult<T> = Result<T, QueryError>;

/// Result alias for the top-level flatten operation
pub type FlattenResult<T> = Result<T, FlattenError>;

/// Malformed structural path string
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum PathError {
    #[error("invalid path '{path}' at position {position}: {reason}")]
    Invalid {
        path: String,
        position: usize,
        reason: String,
    },
}

/// Malformed query expression
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum QueryError {
    #[error("invalid query '{expression}' at position {position}: {reason}")]
    Invalid {
        expression: String,
        position: usize,
        reason: String,
    },
    #[error("query engine failure: {0}")]
    Engine(String),
}

/// Caller misuse of the alias argument
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum AliasError {
    #[error("odd number of entries ({len}) in flat alias list")]
    OddLength { len: usize },
    #[error("alias entry {index} is not a string or a name/expression pair: found {found}")]
    InvalidMember { index: usize, found: String },
    #[error("alias value for '{name}' is not a string: found {found}")]
    InvalidExpression { name: String, found: String },
    #[error("unsupported alias container: {found}")]
    UnsupportedContainer { found: String },
}

/// Invalid configuration
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid max depth: {0}")]
    InvalidMaxDepth(String),
}

/// Top-level failure, reachable only under the strict alias policy or with
/// an invalid configuration
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum FlattenError {
    #[error("alias error: {0}")]
    Alias(#[from] AliasError),
    #[error("alias '{name}' query failed: {source}")]
    Query {
        name: String,
        #[source]
        source: QueryError,
    },
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),
}
