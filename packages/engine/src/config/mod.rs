//! Flattening configuration
//!
//! [`FlattenConfig`] is plain data with fluent `with_*` builder methods and a
//! [`Validator`] check, so it can be built in code or deserialized from any
//! serde format.

pub mod builders;
pub mod defaults;
pub mod types;
pub mod validation;

pub use types::{AliasPolicy, FlattenConfig, KeyOrder};
pub use validation::{ConfigResult, Validator};
