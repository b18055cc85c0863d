//! Fluent flatten builder
//!
//! Collects data, aliases, engine and options, then runs one flatten call.

pub mod aliases;
pub mod core;
pub mod options;

pub use self::core::*;
