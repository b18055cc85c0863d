//! Alias argument shapes

use hashbrown::HashMap;

use crate::error::AliasError;
use crate::node::{Node, StructuralKind};

/// Ordered `(name, expression)` pairs, or a name-keyed mapping
///
/// `OrderedPairs` keeps input order and duplicate names. `Mapping` follows
/// map rules: names are unique and resolution order is unspecified.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AliasSpec {
    OrderedPairs(Vec<(String, String)>),
    Mapping(HashMap<String, String>),
}

impl Default for AliasSpec {
    fn default() -> Self {
        AliasSpec::OrderedPairs(Vec::new())
    }
}

impl AliasSpec {
    /// Builds an ordered pair list
    pub fn pairs<I, N, E>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (N, E)>,
        N: Into<String>,
        E: Into<String>,
    {
        AliasSpec::OrderedPairs(
            pairs
                .into_iter()
                .map(|(name, expression)| (name.into(), expression.into()))
                .collect(),
        )
    }

    /// Builds a name-keyed mapping; later duplicates replace earlier ones
    pub fn mapping<I, N, E>(entries: I) -> Self
    where
        I: IntoIterator<Item = (N, E)>,
        N: Into<String>,
        E: Into<String>,
    {
        AliasSpec::Mapping(
            entries
                .into_iter()
                .map(|(name, expression)| (name.into(), expression.into()))
                .collect(),
        )
    }

    /// Builds ordered pairs from a flat `name, expression, name, ...` list
    ///
    /// # Errors
    ///
    /// Returns [`AliasError::OddLength`] if the list has an odd length.
    pub fn from_flat<I, S>(items: I) -> Result<Self, AliasError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let items: Vec<String> = items.into_iter().map(Into::into).collect();
        if items.len() % 2 != 0 {
            return Err(AliasError::OddLength { len: items.len() });
        }
        let mut pairs = Vec::with_capacity(items.len() / 2);
        let mut iter = items.into_iter();
        while let (Some(name), Some(expression)) = (iter.next(), iter.next()) {
            pairs.push((name, expression));
        }
        Ok(AliasSpec::OrderedPairs(pairs))
    }

    /// Reads an alias argument supplied as data
    ///
    /// Accepted shapes, looking through scalar references:
    /// - absent: no aliases
    /// - a sequence of strings: flat `name, expression, ...` list
    /// - a sequence of two-string sequences: list of pairs
    /// - a mapping of names to expression strings
    ///
    /// # Errors
    ///
    /// Returns an [`AliasError`] for any other shape, including an odd-length
    /// flat list.
    pub fn from_node(node: &Node) -> Result<Self, AliasError> {
        match node.resolve_refs().kind() {
            StructuralKind::Absent => Ok(Self::default()),
            StructuralKind::Sequence(seq) => Self::from_sequence(&seq.snapshot()),
            StructuralKind::Mapping(map) => {
                let mut entries = HashMap::with_capacity(map.len());
                for (name, value) in map.snapshot() {
                    match value.resolve_refs().as_str() {
                        Some(expression) => {
                            let expression = expression.to_owned();
                            entries.insert(name, expression);
                        }
                        None => {
                            return Err(AliasError::InvalidExpression {
                                name,
                                found: value.type_name().to_owned(),
                            });
                        }
                    }
                }
                Ok(AliasSpec::Mapping(entries))
            }
            StructuralKind::Leaf(other) | StructuralKind::Reference(other) => {
                Err(AliasError::UnsupportedContainer {
                    found: other.type_name().to_owned(),
                })
            }
        }
    }

    fn from_sequence(items: &[Node]) -> Result<Self, AliasError> {
        let Some(first) = items.first() else {
            return Ok(Self::default());
        };

        if first.resolve_refs().as_str().is_some() {
            let names = items
                .iter()
                .enumerate()
                .map(|(index, item)| {
                    item.resolve_refs()
                        .as_str()
                        .map(str::to_owned)
                        .ok_or_else(|| invalid_member(index, item))
                })
                .collect::<Result<Vec<_>, _>>()?;
            return Self::from_flat(names);
        }

        let pairs = items
            .iter()
            .enumerate()
            .map(|(index, item)| string_pair(item).ok_or_else(|| invalid_member(index, item)))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(AliasSpec::OrderedPairs(pairs))
    }

    /// Number of aliases
    #[must_use]
    pub fn len(&self) -> usize {
        match self {
            AliasSpec::OrderedPairs(pairs) => pairs.len(),
            AliasSpec::Mapping(entries) => entries.len(),
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Adds one alias; a mapping replaces an existing entry of the same name
    pub fn push(&mut self, name: impl Into<String>, expression: impl Into<String>) {
        match self {
            AliasSpec::OrderedPairs(pairs) => pairs.push((name.into(), expression.into())),
            AliasSpec::Mapping(entries) => {
                entries.insert(name.into(), expression.into());
            }
        }
    }

    /// `(name, expression)` pairs in resolution order
    pub fn iter(&self) -> Box<dyn Iterator<Item = (&str, &str)> + '_> {
        match self {
            AliasSpec::OrderedPairs(pairs) => Box::new(
                pairs
                    .iter()
                    .map(|(name, expression)| (name.as_str(), expression.as_str())),
            ),
            AliasSpec::Mapping(entries) => Box::new(
                entries
                    .iter()
                    .map(|(name, expression)| (name.as_str(), expression.as_str())),
            ),
        }
    }
}

fn string_pair(item: &Node) -> Option<(String, String)> {
    let pair = item.resolve_refs().as_sequence()?.snapshot();
    match pair.as_slice() {
        [name, expression] => Some((
            name.resolve_refs().as_str()?.to_owned(),
            expression.resolve_refs().as_str()?.to_owned(),
        )),
        _ => None,
    }
}

fn invalid_member(index: usize, item: &Node) -> AliasError {
    AliasError::InvalidMember {
        index,
        found: item.type_name().to_owned(),
    }
}
