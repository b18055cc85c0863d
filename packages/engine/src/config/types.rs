//! Configuration types

use serde::{Deserialize, Serialize};

/// Order in which mapping entries are visited
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KeyOrder {
    /// Whatever order the mapping yields
    #[default]
    Unspecified,
    /// Lexicographic by key, per mapping
    Sorted,
}

/// How misuse of the alias argument is reported
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AliasPolicy {
    /// Warn, record a diagnostic and continue with an empty alias set
    #[default]
    Lenient,
    /// Fail the whole call with [`crate::error::FlattenError`]
    Strict,
}

/// Options for one flatten call
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FlattenConfig {
    pub key_order: KeyOrder,
    pub alias_policy: AliasPolicy,
    /// Emit `(name, absent)` for aliases that match nothing
    pub include_absent_aliases: bool,
    /// Containers nested deeper than this many steps are emitted verbatim
    pub max_depth: Option<usize>,
}
