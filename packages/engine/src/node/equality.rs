//! Structural equality that terminates on cyclic input

use hashbrown::HashSet;

use super::types::Node;

impl PartialEq for Node {
    fn eq(&self, other: &Self) -> bool {
        let mut assumed = HashSet::new();
        deep_eq(self, other, &mut assumed)
    }
}

// A container pair already under comparison is assumed equal; any actual
// difference is found on the first visit.
fn deep_eq(left: &Node, right: &Node, assumed: &mut HashSet<(usize, usize)>) -> bool {
    match (left, right) {
        (Node::Absent, Node::Absent) => true,
        (Node::Scalar(a), Node::Scalar(b)) => a == b,
        (Node::ScalarRef(a), Node::ScalarRef(b)) => deep_eq(a, b, assumed),
        (Node::Opaque(a), Node::Opaque(b)) => a.ptr_eq(b),
        (Node::Sequence(a), Node::Sequence(b)) => {
            if a.ptr_eq(b) || !assumed.insert((a.identity(), b.identity())) {
                return true;
            }
            let (a, b) = (a.snapshot(), b.snapshot());
            a.len() == b.len() && a.iter().zip(&b).all(|(x, y)| deep_eq(x, y, assumed))
        }
        (Node::Mapping(a), Node::Mapping(b)) => {
            if a.ptr_eq(b) || !assumed.insert((a.identity(), b.identity())) {
                return true;
            }
            if a.len() != b.len() {
                return false;
            }
            a.snapshot()
                .iter()
                .all(|(key, x)| b.get(key).is_some_and(|y| deep_eq(x, &y, assumed)))
        }
        _ => false,
    }
}
