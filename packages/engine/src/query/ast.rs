//! Query expression syntax tree

use std::fmt;

/// Which nodes a step is tested against
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    /// Direct children (`/step`)
    Child,
    /// The context node and all of its descendants (`//step`)
    DescendantOrSelf,
}

/// Node test of a step
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StepTest {
    /// Mapping entry with this exact key
    Key(String),
    /// Every child: sequence elements in order, mapping values in map order
    Wildcard,
}

/// One step of a compiled query
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Step {
    pub axis: Axis,
    pub test: StepTest,
    /// Positional filter applied to this step's matches per context node;
    /// negative positions count from the end
    pub position: Option<i64>,
}

/// Parsed query expression, reusable across roots
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompiledQuery {
    pub(crate) expression: String,
    pub(crate) steps: Vec<Step>,
}

impl CompiledQuery {
    #[must_use]
    pub fn expression(&self) -> &str {
        &self.expression
    }

    #[must_use]
    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    /// Whether the query selects the root itself (`/`)
    #[must_use]
    pub fn is_root(&self) -> bool {
        self.steps.is_empty()
    }
}

impl fmt::Display for CompiledQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.expression)
    }
}
