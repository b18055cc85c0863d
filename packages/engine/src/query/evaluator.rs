//! Default step-path evaluator

use hashbrown::HashSet;

use super::PathQuery;
use super::ast::{Axis, CompiledQuery, Step, StepTest};
use crate::error::QueryResult;
use crate::node::{Node, StructuralKind};

/// Default [`PathQuery`] engine
///
/// Stateless; every call compiles its expression. Use
/// [`StepQuery::evaluate`] with a [`CompiledQuery`] to reuse a compiled
/// expression.
#[derive(Debug, Default, Clone, Copy)]
pub struct StepQuery;

impl StepQuery {
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Evaluates a compiled query against `root`
    #[must_use]
    pub fn evaluate(&self, query: &CompiledQuery, root: &Node) -> Vec<Node> {
        let mut context = vec![root.clone()];

        for step in query.steps() {
            let mut next = Vec::new();
            for node in &context {
                match step.axis {
                    Axis::Child => next.extend(apply_step(node, step)),
                    Axis::DescendantOrSelf => {
                        for candidate in descendants_or_self(node) {
                            next.extend(apply_step(&candidate, step));
                        }
                    }
                }
            }
            context = next;
            if context.is_empty() {
                break;
            }
        }

        tracing::trace!(
            expression = query.expression(),
            matches = context.len(),
            "query evaluated"
        );
        context
    }
}

impl PathQuery for StepQuery {
    fn select(&self, expression: &str, root: &Node) -> QueryResult<Vec<Node>> {
        let query = CompiledQuery::compile(expression)?;
        Ok(self.evaluate(&query, root))
    }
}

fn apply_step(node: &Node, step: &Step) -> Vec<Node> {
    let matches = match (&step.test, node.resolve_refs().kind()) {
        (StepTest::Key(key), StructuralKind::Mapping(map)) => map.get(key).into_iter().collect(),
        (StepTest::Wildcard, StructuralKind::Mapping(map)) => map
            .snapshot()
            .into_iter()
            .map(|(_, value)| value)
            .collect(),
        (StepTest::Wildcard, StructuralKind::Sequence(seq)) => seq.snapshot(),
        _ => Vec::new(),
    };

    match step.position {
        None => matches,
        Some(position) => select_position(matches, position).into_iter().collect(),
    }
}

fn select_position(mut matches: Vec<Node>, position: i64) -> Option<Node> {
    let len = i64::try_from(matches.len()).ok()?;
    let index = if position < 0 { len + position } else { position };
    if !(0..len).contains(&index) {
        return None;
    }
    let index = usize::try_from(index).ok()?;
    Some(matches.swap_remove(index))
}

/// Containers reachable from `node`, including itself, in pre-order
///
/// Each container instance is yielded once, so cyclic input terminates.
fn descendants_or_self(node: &Node) -> Vec<Node> {
    let mut visited = HashSet::new();
    let mut out = Vec::new();
    let mut stack = vec![node.clone()];

    while let Some(current) = stack.pop() {
        let current = current.resolve_refs().clone();
        let children = match current.kind() {
            StructuralKind::Sequence(seq) => {
                if !visited.insert(seq.identity()) {
                    continue;
                }
                seq.snapshot()
            }
            StructuralKind::Mapping(map) => {
                if !visited.insert(map.identity()) {
                    continue;
                }
                map.snapshot().into_iter().map(|(_, value)| value).collect()
            }
            _ => continue,
        };
        stack.extend(children.into_iter().rev());
        out.push(current);
    }

    out
}
