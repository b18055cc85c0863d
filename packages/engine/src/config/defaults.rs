//! Default configuration values

use super::types::{AliasPolicy, FlattenConfig, KeyOrder};

impl Default for FlattenConfig {
    fn default() -> Self {
        Self {
            key_order: KeyOrder::Unspecified,
            alias_policy: AliasPolicy::Lenient,
            include_absent_aliases: true,
            max_depth: None,
        }
    }
}
