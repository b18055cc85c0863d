//! Input data model
//!
//! [`Node`] is the closed set of shapes the flattener understands. Containers
//! are shared and interior-mutable so callers can express aliasing and
//! self-reference; everything the traversal does not understand is carried as
//! an [`Opaque`] leaf.

mod conversions;
mod equality;
pub mod kind;
pub mod types;

pub use kind::StructuralKind;
pub use types::{MapRef, Node, Opaque, Scalar, SeqRef};
