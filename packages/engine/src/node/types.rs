//! Core node types

use std::any::Any;
use std::fmt;
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use hashbrown::HashMap;

/// Terminal value
#[derive(Debug, Clone, PartialEq)]
pub enum Scalar {
    Str(String),
    Int(i64),
    UInt(u64),
    Float(f64),
    Bool(bool),
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scalar::Str(s) => f.write_str(s),
            Scalar::Int(i) => write!(f, "{i}"),
            Scalar::UInt(u) => write!(f, "{u}"),
            Scalar::Float(x) => write!(f, "{x}"),
            Scalar::Bool(b) => write!(f, "{b}"),
        }
    }
}

/// Shared ordered sequence of nodes
///
/// Clones share the same allocation; [`SeqRef::identity`] is stable for the
/// lifetime of the allocation.
#[derive(Clone, Default)]
pub struct SeqRef(Arc<RwLock<Vec<Node>>>);

impl SeqRef {
    #[must_use]
    pub fn new(items: Vec<Node>) -> Self {
        Self(Arc::new(RwLock::new(items)))
    }

    /// Address of the shared allocation
    #[inline]
    #[must_use]
    pub fn identity(&self) -> usize {
        Arc::as_ptr(&self.0) as usize
    }

    /// Clone of the current elements; no lock is held afterwards
    #[must_use]
    pub fn snapshot(&self) -> Vec<Node> {
        self.read().clone()
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<Node> {
        self.read().get(index).cloned()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.read().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.read().is_empty()
    }

    pub fn push(&self, node: impl Into<Node>) {
        self.write().push(node.into());
    }

    /// Replaces the element at `index`, returning the previous one
    pub fn set(&self, index: usize, node: impl Into<Node>) -> Option<Node> {
        self.write()
            .get_mut(index)
            .map(|slot| std::mem::replace(slot, node.into()))
    }

    #[must_use]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }

    // A writer that panicked leaves the data intact; reads carry on.
    fn read(&self) -> RwLockReadGuard<'_, Vec<Node>> {
        self.0.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, Vec<Node>> {
        self.0.write().unwrap_or_else(PoisonError::into_inner)
    }
}

impl fmt::Debug for SeqRef {
    // Elements are not printed: the sequence may contain itself.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SeqRef")
            .field("id", &format_args!("{:#x}", self.identity()))
            .field("len", &self.len())
            .finish()
    }
}

/// Shared string-keyed collection of nodes
///
/// Iteration order is whatever the underlying hash map yields.
#[derive(Clone, Default)]
pub struct MapRef(Arc<RwLock<HashMap<String, Node>>>);

impl MapRef {
    #[must_use]
    pub fn new(entries: HashMap<String, Node>) -> Self {
        Self(Arc::new(RwLock::new(entries)))
    }

    #[inline]
    #[must_use]
    pub fn identity(&self) -> usize {
        Arc::as_ptr(&self.0) as usize
    }

    /// Clone of the current entries in map order; no lock is held afterwards
    #[must_use]
    pub fn snapshot(&self) -> Vec<(String, Node)> {
        self.read()
            .iter()
            .map(|(key, value)| (key.clone(), value.clone()))
            .collect()
    }

    #[must_use]
    pub fn get(&self, key: &str) -> Option<Node> {
        self.read().get(key).cloned()
    }

    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.read().contains_key(key)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.read().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.read().is_empty()
    }

    pub fn insert(&self, key: impl Into<String>, node: impl Into<Node>) -> Option<Node> {
        self.write().insert(key.into(), node.into())
    }

    #[must_use]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }

    fn read(&self) -> RwLockReadGuard<'_, HashMap<String, Node>> {
        self.0.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, HashMap<String, Node>> {
        self.0.write().unwrap_or_else(PoisonError::into_inner)
    }
}

impl fmt::Debug for MapRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MapRef")
            .field("id", &format_args!("{:#x}", self.identity()))
            .field("len", &self.len())
            .finish()
    }
}

/// Value of any other type, carried verbatim and never traversed
///
/// Two opaque values are equal only if they share the same allocation.
#[derive(Clone)]
pub struct Opaque {
    label: String,
    value: Arc<dyn Any + Send + Sync>,
}

impl Opaque {
    /// Wraps `value`, labelled with its type name
    pub fn new<T: Any + Send + Sync>(value: T) -> Self {
        Self::with_label(std::any::type_name::<T>(), value)
    }

    pub fn with_label<T: Any + Send + Sync>(label: impl Into<String>, value: T) -> Self {
        Self {
            label: label.into(),
            value: Arc::new(value),
        }
    }

    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    #[must_use]
    pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
        self.value.downcast_ref::<T>()
    }

    #[must_use]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        std::ptr::addr_eq(Arc::as_ptr(&self.value), Arc::as_ptr(&other.value))
    }
}

impl fmt::Debug for Opaque {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Opaque({})", self.label)
    }
}

/// A node of an input structure
#[derive(Debug, Clone, Default)]
pub enum Node {
    /// Null / none
    #[default]
    Absent,
    Scalar(Scalar),
    /// Single-value container, unwrapped one level by the flattener
    ScalarRef(Arc<Node>),
    Sequence(SeqRef),
    Mapping(MapRef),
    Opaque(Opaque),
}

impl Node {
    /// Builds a fresh sequence node
    pub fn sequence<I, T>(items: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<Node>,
    {
        Node::Sequence(SeqRef::new(items.into_iter().map(Into::into).collect()))
    }

    /// Builds a fresh mapping node; later duplicate keys replace earlier ones
    pub fn mapping<I, K, V>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<Node>,
    {
        Node::Mapping(MapRef::new(
            entries
                .into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
        ))
    }

    /// Wraps `node` in a scalar reference
    pub fn reference(node: impl Into<Node>) -> Self {
        Node::ScalarRef(Arc::new(node.into()))
    }

    pub fn opaque<T: Any + Send + Sync>(value: T) -> Self {
        Node::Opaque(Opaque::new(value))
    }

    #[inline]
    #[must_use]
    pub fn is_absent(&self) -> bool {
        matches!(self, Node::Absent)
    }

    #[inline]
    #[must_use]
    pub fn is_container(&self) -> bool {
        matches!(self, Node::Sequence(_) | Node::Mapping(_))
    }

    #[must_use]
    pub fn as_scalar(&self) -> Option<&Scalar> {
        match self {
            Node::Scalar(scalar) => Some(scalar),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Node::Scalar(Scalar::Str(s)) => Some(s),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Node::Scalar(Scalar::Int(i)) => Some(*i),
            Node::Scalar(Scalar::UInt(u)) => i64::try_from(*u).ok(),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_sequence(&self) -> Option<&SeqRef> {
        match self {
            Node::Sequence(seq) => Some(seq),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_mapping(&self) -> Option<&MapRef> {
        match self {
            Node::Mapping(map) => Some(map),
            _ => None,
        }
    }

    /// Follows scalar references until a non-reference node is reached
    #[must_use]
    pub fn resolve_refs(&self) -> &Node {
        let mut current = self;
        while let Node::ScalarRef(inner) = current {
            current = inner;
        }
        current
    }

    /// Short description of the node's shape, used in diagnostics
    #[must_use]
    pub fn type_name(&self) -> &str {
        match self {
            Node::Absent => "absent",
            Node::Scalar(Scalar::Str(_)) => "string",
            Node::Scalar(Scalar::Int(_) | Scalar::UInt(_) | Scalar::Float(_)) => "number",
            Node::Scalar(Scalar::Bool(_)) => "boolean",
            Node::ScalarRef(_) => "scalar reference",
            Node::Sequence(_) => "sequence",
            Node::Mapping(_) => "mapping",
            Node::Opaque(opaque) => opaque.label(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sequence_set_is_visible_through_clones() {
        let node = Node::sequence([1, 2]);
        let view = node.as_sequence().expect("sequence").clone();

        assert_eq!(view.set(1, "two"), Some(Node::from(2)));
        assert_eq!(view.set(5, 0), None);
        let seq = node.as_sequence().expect("sequence");
        assert!(seq.ptr_eq(&view));
        assert_eq!(seq.get(1), Some(Node::from("two")));
        assert_eq!(seq.len(), 2);
    }

    #[test]
    fn test_mapping_insert_and_contains_key() {
        let map = MapRef::default();
        assert!(map.is_empty());
        assert_eq!(map.insert("k", 1), None);
        assert!(map.contains_key("k"));
        assert!(!map.contains_key("missing"));
        assert_eq!(map.insert("k", 2), Some(Node::from(1)));
        assert_eq!(map.len(), 1);
    }

    #[test]
    fn test_opaque_keeps_its_value_and_label() {
        let opaque = Opaque::with_label("handle", 42u32);
        assert_eq!(opaque.label(), "handle");
        assert_eq!(opaque.downcast_ref::<u32>(), Some(&42));
        assert_eq!(opaque.downcast_ref::<String>(), None);
        assert!(Opaque::new(7u8).label().contains("u8"));
    }

    #[test]
    fn test_shape_predicates() {
        assert!(Node::sequence(Vec::<Node>::new()).is_container());
        assert!(Node::mapping(Vec::<(String, Node)>::new()).is_container());
        assert!(!Node::from(1).is_container());
        assert!(!Node::reference(Node::sequence([1])).is_container());
        assert!(Node::default().is_absent());
        assert_eq!(Node::reference(Node::reference("x")).resolve_refs(), &Node::from("x"));
        assert_eq!(Node::from(u64::MAX).type_name(), "number");
    }
}
