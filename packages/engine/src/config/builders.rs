//! Builder methods for [`FlattenConfig`]

use super::types::{AliasPolicy, FlattenConfig, KeyOrder};

impl FlattenConfig {
    /// Sets the mapping visit order
    ///
    /// # Examples
    /// ```
    /// use flatpath_engine::config::{FlattenConfig, KeyOrder};
    ///
    /// let config = FlattenConfig::default().with_key_order(KeyOrder::Sorted);
    /// assert_eq!(config.key_order, KeyOrder::Sorted);
    /// ```
    #[must_use]
    pub fn with_key_order(mut self, key_order: KeyOrder) -> Self {
        self.key_order = key_order;
        self
    }

    /// Sets how alias misuse is reported
    #[must_use]
    pub fn with_alias_policy(mut self, alias_policy: AliasPolicy) -> Self {
        self.alias_policy = alias_policy;
        self
    }

    /// Controls whether zero-match aliases emit the absent marker
    #[must_use]
    pub fn with_absent_aliases(mut self, include: bool) -> Self {
        self.include_absent_aliases = include;
        self
    }

    /// Limits recursion depth; `None` removes the limit
    #[must_use]
    pub fn with_max_depth(mut self, max_depth: Option<usize>) -> Self {
        self.max_depth = max_depth;
        self
    }

    #[must_use]
    pub fn is_strict(&self) -> bool {
        self.alias_policy == AliasPolicy::Strict
    }
}
