//! Configuration validation

use super::types::FlattenConfig;
use crate::error::ConfigError;

/// Configuration validation result type
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Configuration validation trait
pub trait Validator {
    /// Validates the configuration settings
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] variant if any setting is out of range.
    fn validate(&self) -> ConfigResult<()>;
}

impl Validator for FlattenConfig {
    fn validate(&self) -> ConfigResult<()> {
        if self.max_depth == Some(0) {
            return Err(ConfigError::InvalidMaxDepth(
                "max depth must be at least 1; use None for no limit".into(),
            ));
        }
        Ok(())
    }
}
