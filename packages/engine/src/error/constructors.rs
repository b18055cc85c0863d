//! Error constructor functions
//!
//! Shorthands used by the parsers so call sites stay on one line.

use super::types::{FlattenError, PathError, QueryError};

/// Creates an invalid structural path error
pub fn invalid_path_error(
    path: impl Into<String>,
    reason: impl Into<String>,
    position: usize,
) -> PathError {
    PathError::Invalid {
        path: path.into(),
        position,
        reason: reason.into(),
    }
}

/// Creates an invalid query expression error
pub fn invalid_query_error(
    expression: impl Into<String>,
    reason: impl Into<String>,
    position: usize,
) -> QueryError {
    QueryError::Invalid {
        expression: expression.into(),
        position,
        reason: reason.into(),
    }
}

impl QueryError {
    /// Position of the offending character, when known
    #[must_use]
    pub fn position(&self) -> Option<usize> {
        match self {
            Self::Invalid { position, .. } => Some(*position),
            Self::Engine(_) => None,
        }
    }
}

impl FlattenError {
    /// Wraps a query failure with the alias name it was resolved for
    pub fn query(name: impl Into<String>, source: QueryError) -> Self {
        Self::Query {
            name: name.into(),
            source,
        }
    }
}
