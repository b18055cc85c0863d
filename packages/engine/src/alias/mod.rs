//! Alias resolution
//!
//! An alias binds a caller-chosen name to a query expression. Each alias is
//! resolved independently and appended after the structural pairs; names are
//! never merged with each other or with structural keys.

pub mod diagnostics;
pub mod resolver;
pub mod spec;

pub use diagnostics::Diagnostic;
pub use resolver::{AliasResolver, Resolution, resolve_aliases};
pub use spec::AliasSpec;
