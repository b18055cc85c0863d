//! Conversions between error types

use super::types::{PathError, QueryError};

impl From<PathError> for QueryError {
    fn from(error: PathError) -> Self {
        match error {
            PathError::Invalid {
                path,
                position,
                reason,
            } => QueryError::Invalid {
                expression: path,
                position,
                reason,
            },
        }
    }
}
