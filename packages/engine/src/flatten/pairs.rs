//! Ordered output pairs

use serde_json::Value as JsonValue;

use crate::node::Node;

/// Ordered `(key, value)` sequence produced by a flatten call
///
/// Keys are not unique. Duplicate aliases, and aliases named like a
/// structural path, all keep their own entry.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FlatPairs {
    entries: Vec<(String, Node)>,
}

impl FlatPairs {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: Vec::with_capacity(capacity),
        }
    }

    pub fn push(&mut self, key: impl Into<String>, value: Node) {
        self.entries.push((key.into(), value));
    }

    /// Appends every entry of `other`, keeping its order
    pub fn append(&mut self, other: FlatPairs) {
        self.entries.extend(other.entries);
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, (String, Node)> {
        self.entries.iter()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(key, _)| key.as_str())
    }

    /// Every value stored under `key`, in output order
    pub fn get_all<'a>(&'a self, key: &'a str) -> impl Iterator<Item = &'a Node> + 'a {
        self.entries
            .iter()
            .filter(move |(k, _)| k == key)
            .map(|(_, value)| value)
    }

    /// First value stored under `key`
    #[must_use]
    pub fn first(&self, key: &str) -> Option<&Node> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, value)| value)
    }

    /// Number of entries stored under `key`
    #[must_use]
    pub fn count(&self, key: &str) -> usize {
        self.entries.iter().filter(|(k, _)| k == key).count()
    }

    #[must_use]
    pub fn as_slice(&self) -> &[(String, Node)] {
        &self.entries
    }

    #[must_use]
    pub fn into_vec(self) -> Vec<(String, Node)> {
        self.entries
    }

    /// Entries reordered by key, then by rendered value
    ///
    /// Mapping order is unspecified, so comparisons between two outputs
    /// should go through this.
    #[must_use]
    pub fn sorted(mut self) -> Self {
        self.entries
            .sort_by_cached_key(|(key, value)| (key.clone(), value.to_json().to_string()));
        self
    }

    /// Reinterprets the pairs as one flat mapping
    ///
    /// A mapping cannot hold duplicate keys: the last entry for a key wins.
    #[must_use]
    pub fn as_node(&self) -> Node {
        Node::mapping(self.entries.iter().cloned())
    }

    /// Renders as a JSON array of `[key, value]` arrays
    #[must_use]
    pub fn to_json(&self) -> JsonValue {
        JsonValue::Array(
            self.entries
                .iter()
                .map(|(key, value)| {
                    JsonValue::Array(vec![JsonValue::from(key.as_str()), value.to_json()])
                })
                .collect(),
        )
    }
}

impl IntoIterator for FlatPairs {
    type Item = (String, Node);
    type IntoIter = std::vec::IntoIter<(String, Node)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl<'a> IntoIterator for &'a FlatPairs {
    type Item = &'a (String, Node);
    type IntoIter = std::slice::Iter<'a, (String, Node)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

impl<K: Into<String>, V: Into<Node>> FromIterator<(K, V)> for FlatPairs {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            entries: iter
                .into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
        }
    }
}

impl<K: Into<String>, V: Into<Node>> Extend<(K, V)> for FlatPairs {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        self.entries
            .extend(iter.into_iter().map(|(key, value)| (key.into(), value.into())));
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_duplicate_keys_are_kept() {
        let pairs: FlatPairs = [("One", 1), ("One", 2), ("Two", 3)].into_iter().collect();
        assert_eq!(pairs.len(), 3);
        assert_eq!(pairs.count("One"), 2);
        let ones: Vec<&Node> = pairs.get_all("One").collect();
        assert_eq!(ones, vec![&Node::from(1), &Node::from(2)]);
    }

    #[test]
    fn test_lookup_with_short_lived_key() {
        let pairs: FlatPairs = [("/a", 1), ("/b", 2), ("/b", 3)].into_iter().collect();
        let (found, count) = {
            let key = String::from("/b");
            (pairs.first(&key), pairs.count(&key))
        };
        assert_eq!(found, Some(&Node::from(2)));
        assert_eq!(count, 2);
        assert_eq!(pairs.first("/z"), None);
    }

    #[test]
    fn test_sorted_is_order_independent() {
        let a: FlatPairs = [("/b", 2), ("/a", 1), ("/a", 0)].into_iter().collect();
        let b: FlatPairs = [("/a", 0), ("/b", 2), ("/a", 1)].into_iter().collect();
        assert_ne!(a, b);
        assert_eq!(a.sorted(), b.sorted());
    }

    #[test]
    fn test_to_json_preserves_duplicates() {
        let pairs: FlatPairs = [("k", Node::from(1)), ("k", Node::Absent)].into_iter().collect();
        assert_eq!(pairs.to_json(), json!([["k", 1], ["k", null]]));
    }

    #[test]
    fn test_as_node_keeps_last_duplicate() {
        let pairs: FlatPairs = [("k", 1), ("k", 2)].into_iter().collect();
        let node = pairs.as_node();
        let map = node.as_mapping().expect("mapping");
        assert_eq!(map.get("k"), Some(Node::from(2)));
    }
}
