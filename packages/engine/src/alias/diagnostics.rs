//! Non-fatal problems reported alongside a result

use std::fmt;

use crate::error::{AliasError, QueryError};

/// Caller misuse that was tolerated rather than failing the call
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Diagnostic {
    /// The alias argument had an unusable shape and was ignored
    MalformedAliases(AliasError),
    /// An alias expression could not be evaluated and was treated as
    /// matching nothing
    QueryFailed { name: String, error: QueryError },
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Diagnostic::MalformedAliases(error) => {
                write!(f, "aliases ignored: {error}")
            }
            Diagnostic::QueryFailed { name, error } => {
                write!(f, "alias '{name}' matched nothing: {error}")
            }
        }
    }
}
