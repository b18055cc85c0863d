//! One complete flatten call: structural pass, then alias pass

use crate::alias::{AliasResolver, AliasSpec, Diagnostic, Resolution};
use crate::config::{FlattenConfig, Validator};
use crate::error::{FlattenError, FlattenResult};
use crate::flatten::{FlatPairs, Flattener};
use crate::node::Node;
use crate::query::PathQuery;

/// Alias argument of a flatten call
#[derive(Debug, Clone, Default)]
pub enum AliasInput {
    /// No aliases
    #[default]
    None,
    /// Already-typed aliases
    Spec(AliasSpec),
    /// Aliases supplied as data; the shape is checked by
    /// [`AliasSpec::from_node`]
    Data(Node),
}

impl From<AliasSpec> for AliasInput {
    fn from(spec: AliasSpec) -> Self {
        AliasInput::Spec(spec)
    }
}

impl From<Option<AliasSpec>> for AliasInput {
    fn from(spec: Option<AliasSpec>) -> Self {
        spec.map_or(AliasInput::None, AliasInput::Spec)
    }
}

/// Result of a flatten call
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Flattened {
    /// Structural pairs followed by alias pairs
    pub pairs: FlatPairs,
    /// Misuse that was tolerated under the lenient policy
    pub diagnostics: Vec<Diagnostic>,
}

impl Flattened {
    /// Whether the call completed without diagnostics
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.diagnostics.is_empty()
    }

    #[must_use]
    pub fn into_pairs(self) -> FlatPairs {
        self.pairs
    }
}

/// Flattens `root` and appends the resolved aliases
///
/// # Errors
///
/// Fails only if `config` is invalid, or under [`crate::config::AliasPolicy::Strict`]
/// when the alias argument is malformed or an alias expression is rejected by
/// the engine.
pub fn run<Q: PathQuery + ?Sized>(
    root: &Node,
    aliases: AliasInput,
    engine: &Q,
    config: &FlattenConfig,
) -> FlattenResult<Flattened> {
    config.validate()?;

    let mut pairs = Flattener::new(config.clone()).flatten(root);
    let mut diagnostics = Vec::new();

    let spec = match aliases {
        AliasInput::None => None,
        AliasInput::Spec(spec) => Some(spec),
        AliasInput::Data(data) => match AliasSpec::from_node(&data) {
            Ok(spec) => Some(spec),
            Err(error) if config.is_strict() => return Err(error.into()),
            Err(error) => {
                tracing::warn!(%error, "ignoring malformed aliases");
                diagnostics.push(Diagnostic::MalformedAliases(error));
                None
            }
        },
    };

    if let Some(spec) = spec.filter(|spec| !spec.is_empty()) {
        let Resolution {
            pairs: alias_pairs,
            diagnostics: alias_diagnostics,
        } = AliasResolver::new(engine)
            .include_absent(config.include_absent_aliases)
            .resolve(root, &spec);

        if config.is_strict() {
            if let Some(Diagnostic::QueryFailed { name, error }) =
                alias_diagnostics.into_iter().next()
            {
                return Err(FlattenError::query(name, error));
            }
        } else {
            diagnostics.extend(alias_diagnostics);
        }
        pairs.append(alias_pairs);
    }

    Ok(Flattened { pairs, diagnostics })
}

/// Lenient flatten with the default configuration; never fails
pub fn flatten_lenient<Q: PathQuery + ?Sized>(
    root: &Node,
    aliases: Option<&AliasSpec>,
    engine: &Q,
) -> FlatPairs {
    let mut pairs = Flattener::default().flatten(root);
    if let Some(spec) = aliases.filter(|spec| !spec.is_empty()) {
        pairs.append(AliasResolver::new(engine).resolve(root, spec).pairs);
    }
    pairs
}
