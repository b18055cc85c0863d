//! Path-query engines
//!
//! The alias resolver only depends on [`PathQuery`]. [`StepQuery`] is the
//! default engine: it understands every path the flattener emits plus a
//! small query subset (wildcards, positional filters, descendant steps).
//! [`ExactPathQuery`] accepts structural paths only.

pub mod ast;
pub mod evaluator;
pub mod exact;
pub mod parser;

pub use ast::{Axis, CompiledQuery, Step, StepTest};
pub use evaluator::StepQuery;
pub use exact::ExactPathQuery;

use crate::error::QueryResult;
use crate::node::Node;

/// Resolves a path expression against a root structure
///
/// Implementations return an empty vector, not an error, when nothing
/// matches. Errors are reserved for expressions the engine cannot read.
pub trait PathQuery {
    /// Returns every node matched by `expression`, in engine order
    ///
    /// # Errors
    ///
    /// Returns a [`crate::error::QueryError`] if `expression` is malformed.
    fn select(&self, expression: &str, root: &Node) -> QueryResult<Vec<Node>>;
}

impl<Q: PathQuery + ?Sized> PathQuery for &Q {
    fn select(&self, expression: &str, root: &Node) -> QueryResult<Vec<Node>> {
        (**self).select(expression, root)
    }
}

impl<Q: PathQuery + ?Sized> PathQuery for Box<Q> {
    fn select(&self, expression: &str, root: &Node) -> QueryResult<Vec<Node>> {
        (**self).select(expression, root)
    }
}

impl<Q: PathQuery + ?Sized> PathQuery for std::sync::Arc<Q> {
    fn select(&self, expression: &str, root: &Node) -> QueryResult<Vec<Node>> {
        (**self).select(expression, root)
    }
}
