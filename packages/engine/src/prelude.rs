//! flatpath engine prelude
//!
//! The types needed for a complete flatten call.

// Data model
pub use crate::node::{MapRef, Node, Opaque, Scalar, SeqRef, StructuralKind};

// Paths
pub use crate::path::{PathSegment, StructuralPath};

// Flattening and aliases
pub use crate::alias::{AliasResolver, AliasSpec, Diagnostic, resolve_aliases};
pub use crate::flatten::{FlatPairs, Flattener, flatten_structure};
pub use crate::pipeline::{AliasInput, Flattened, flatten_lenient, run};

// Query engines
pub use crate::query::{CompiledQuery, ExactPathQuery, PathQuery, StepQuery};

// Configuration and errors
pub use crate::config::{AliasPolicy, FlattenConfig, KeyOrder, Validator};
pub use crate::error::{
    AliasError, ConfigError, FlattenError, FlattenResult, PathError, QueryError, QueryResult,
};
