//! Option methods

use flatpath_engine::{AliasPolicy, FlattenConfig, KeyOrder};

use crate::builder::core::FlattenBuilder;

impl<E> FlattenBuilder<E> {
    /// Replace all options
    #[must_use]
    pub fn config(mut self, config: FlattenConfig) -> Self {
        self.config = config;
        self
    }

    /// Visit mapping keys in lexicographic order
    #[must_use]
    pub fn sorted_keys(mut self) -> Self {
        self.config.key_order = KeyOrder::Sorted;
        self
    }

    /// Fail instead of warning on malformed aliases or rejected expressions
    #[must_use]
    pub fn strict(mut self) -> Self {
        self.config.alias_policy = AliasPolicy::Strict;
        self
    }

    /// Warn and continue on alias misuse (the default)
    #[must_use]
    pub fn lenient(mut self) -> Self {
        self.config.alias_policy = AliasPolicy::Lenient;
        self
    }

    /// Skip the `(name, absent)` pair for aliases that match nothing
    #[must_use]
    pub fn skip_absent_aliases(mut self) -> Self {
        self.config.include_absent_aliases = false;
        self
    }

    /// Emit containers deeper than `depth` steps verbatim
    #[must_use]
    pub fn max_depth(mut self, depth: usize) -> Self {
        self.config.max_depth = Some(depth);
        self
    }
}
