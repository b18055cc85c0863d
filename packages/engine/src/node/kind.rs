//! Shape classification used by every traversal

use super::types::{MapRef, Node, SeqRef};

/// What a traversal should do with a node
///
/// `Leaf` is the fallback arm: scalars and opaque values alike are stored
/// verbatim.
#[derive(Debug, Clone, Copy)]
pub enum StructuralKind<'a> {
    Absent,
    Leaf(&'a Node),
    /// Scalar reference; carries the referenced node
    Reference(&'a Node),
    Sequence(&'a SeqRef),
    Mapping(&'a MapRef),
}

impl Node {
    #[inline]
    #[must_use]
    pub fn kind(&self) -> StructuralKind<'_> {
        match self {
            Node::Absent => StructuralKind::Absent,
            Node::ScalarRef(inner) => StructuralKind::Reference(inner),
            Node::Sequence(seq) => StructuralKind::Sequence(seq),
            Node::Mapping(map) => StructuralKind::Mapping(map),
            Node::Scalar(_) | Node::Opaque(_) => StructuralKind::Leaf(self),
        }
    }
}
