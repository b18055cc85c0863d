//! Alias evaluation against a root structure

use super::diagnostics::Diagnostic;
use super::spec::AliasSpec;
use crate::flatten::FlatPairs;
use crate::node::Node;
use crate::query::PathQuery;

/// Resolves aliases through a [`PathQuery`] engine
pub struct AliasResolver<'q, Q: ?Sized> {
    engine: &'q Q,
    include_absent: bool,
}

/// Pairs emitted for a set of aliases plus anything tolerated on the way
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Resolution {
    pub pairs: FlatPairs,
    pub diagnostics: Vec<Diagnostic>,
}

impl<'q, Q: PathQuery + ?Sized> AliasResolver<'q, Q> {
    pub fn new(engine: &'q Q) -> Self {
        Self {
            engine,
            include_absent: true,
        }
    }

    /// Controls whether zero-match aliases emit `(name, absent)`
    #[must_use]
    pub fn include_absent(mut self, include: bool) -> Self {
        self.include_absent = include;
        self
    }

    /// Resolves every alias in `aliases` order
    ///
    /// An expression the engine rejects is logged, recorded as a
    /// [`Diagnostic::QueryFailed`] and handled as matching nothing.
    pub fn resolve(&self, root: &Node, aliases: &AliasSpec) -> Resolution {
        let mut resolution = Resolution {
            pairs: FlatPairs::with_capacity(aliases.len()),
            diagnostics: Vec::new(),
        };

        for (name, expression) in aliases.iter() {
            let matches = match self.engine.select(expression, root) {
                Ok(matches) => matches,
                Err(error) => {
                    tracing::warn!(alias = name, expression, %error, "alias query failed");
                    resolution.diagnostics.push(Diagnostic::QueryFailed {
                        name: name.to_owned(),
                        error,
                    });
                    Vec::new()
                }
            };

            if matches.is_empty() {
                if self.include_absent {
                    resolution.pairs.push(name, Node::Absent);
                }
                continue;
            }
            for value in matches {
                resolution.pairs.push(name, value);
            }
        }

        tracing::debug!(
            aliases = aliases.len(),
            pairs = resolution.pairs.len(),
            "resolved aliases"
        );
        resolution
    }
}

/// Resolves `aliases` against `root`, one pair per match or one absent pair
/// per alias with no match
pub fn resolve_aliases<Q: PathQuery + ?Sized>(
    root: &Node,
    aliases: &AliasSpec,
    engine: &Q,
) -> FlatPairs {
    AliasResolver::new(engine).resolve(root, aliases).pairs
}
