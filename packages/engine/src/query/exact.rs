//! Exact structural path lookup

use super::PathQuery;
use crate::error::QueryResult;
use crate::node::{Node, StructuralKind};
use crate::path::{PathSegment, StructuralPath};

/// [`PathQuery`] engine that accepts only structural paths
///
/// Every expression must parse as a [`StructuralPath`]; each step selects at
/// most one node, so results hold zero or one value. `*[n]` means element
/// `n` of a sequence.
#[derive(Debug, Default, Clone, Copy)]
pub struct ExactPathQuery;

impl ExactPathQuery {
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Looks up one parsed path
    #[must_use]
    pub fn lookup(&self, path: &StructuralPath, root: &Node) -> Option<Node> {
        path.segments()
            .iter()
            .try_fold(root.clone(), |current, segment| {
                match (segment, current.resolve_refs().kind()) {
                    (PathSegment::Key(key), StructuralKind::Mapping(map)) => map.get(key),
                    (PathSegment::Index(index), StructuralKind::Sequence(seq)) => seq.get(*index),
                    _ => None,
                }
            })
    }
}

impl PathQuery for ExactPathQuery {
    fn select(&self, expression: &str, root: &Node) -> QueryResult<Vec<Node>> {
        let path = StructuralPath::parse(expression)?;
        Ok(self.lookup(&path, root).into_iter().collect())
    }
}
