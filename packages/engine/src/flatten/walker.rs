//! Recursive traversal

use hashbrown::HashSet;

use crate::config::{FlattenConfig, KeyOrder};
use crate::node::{MapRef, Node, SeqRef, StructuralKind};
use crate::path::{ROOT_PATH, push_index, push_key};

use super::pairs::FlatPairs;

/// Structural flattener
///
/// # Examples
/// ```
/// use flatpath_engine::flatten::Flattener;
/// use flatpath_engine::node::Node;
///
/// let pairs = Flattener::default().flatten(&Node::from(5));
/// assert_eq!(pairs.first("/"), Some(&Node::from(5)));
/// ```
#[derive(Debug, Clone, Default)]
pub struct Flattener {
    config: FlattenConfig,
}

impl Flattener {
    #[must_use]
    pub fn new(config: FlattenConfig) -> Self {
        Self { config }
    }

    #[must_use]
    pub fn config(&self) -> &FlattenConfig {
        &self.config
    }

    /// Emits one pair per leaf reachable from `root`
    ///
    /// A container reached again while it is still being expanded (a cycle)
    /// contributes nothing. A container shared between branches is expanded
    /// once per path that reaches it.
    #[must_use]
    pub fn flatten(&self, root: &Node) -> FlatPairs {
        let mut walk = Walk {
            config: &self.config,
            route: HashSet::new(),
            expanded: 0,
            prefix: String::new(),
            depth: 0,
            out: FlatPairs::new(),
        };
        walk.visit(root);

        tracing::debug!(
            pairs = walk.out.len(),
            containers = walk.expanded,
            "flattened structure"
        );
        walk.out
    }
}

struct Walk<'c> {
    config: &'c FlattenConfig,
    // Containers on the current route; each one is kept alive by the root or
    // by a snapshot held further up the stack.
    route: HashSet<usize>,
    expanded: usize,
    prefix: String,
    depth: usize,
    out: FlatPairs,
}

impl Walk<'_> {
    fn visit(&mut self, node: &Node) {
        match node.kind() {
            StructuralKind::Absent => {}
            StructuralKind::Leaf(leaf) => self.emit(leaf.clone()),
            StructuralKind::Reference(target) => self.emit(target.clone()),
            StructuralKind::Sequence(seq) => {
                if self.at_depth_limit() {
                    self.emit(node.clone());
                } else if self.enter(seq.identity()) {
                    self.visit_sequence(seq);
                    self.route.remove(&seq.identity());
                }
            }
            StructuralKind::Mapping(map) => {
                if self.at_depth_limit() {
                    self.emit(node.clone());
                } else if self.enter(map.identity()) {
                    self.visit_mapping(map);
                    self.route.remove(&map.identity());
                }
            }
        }
    }

    fn visit_sequence(&mut self, seq: &SeqRef) {
        for (index, item) in seq.snapshot().iter().enumerate() {
            let mark = self.prefix.len();
            push_index(&mut self.prefix, index);
            self.descend(item);
            self.prefix.truncate(mark);
        }
    }

    fn visit_mapping(&mut self, map: &MapRef) {
        let mut entries = map.snapshot();
        if self.config.key_order == KeyOrder::Sorted {
            entries.sort_by(|(a, _), (b, _)| a.cmp(b));
        }
        for (key, value) in &entries {
            let mark = self.prefix.len();
            push_key(&mut self.prefix, key);
            self.descend(value);
            self.prefix.truncate(mark);
        }
    }

    fn descend(&mut self, node: &Node) {
        self.depth += 1;
        self.visit(node);
        self.depth -= 1;
    }

    fn enter(&mut self, identity: usize) -> bool {
        if !self.route.insert(identity) {
            tracing::trace!(path = %self.current_path(), "container is its own ancestor, skipping");
            return false;
        }
        self.expanded += 1;
        true
    }

    fn at_depth_limit(&self) -> bool {
        self.config
            .max_depth
            .is_some_and(|limit| self.depth >= limit)
    }

    fn current_path(&self) -> &str {
        if self.prefix.is_empty() {
            ROOT_PATH
        } else {
            &self.prefix
        }
    }

    fn emit(&mut self, value: Node) {
        let key = self.current_path().to_owned();
        self.out.push(key, value);
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn sorted_keys(pairs: &FlatPairs) -> Vec<String> {
        let mut keys: Vec<String> = pairs.keys().map(str::to_owned).collect();
        keys.sort();
        keys
    }

    #[test]
    fn test_bare_scalar_maps_to_root() {
        let pairs = Flattener::default().flatten(&Node::from(5));
        assert_eq!(pairs.len(), 1);
        assert_eq!(pairs.first("/"), Some(&Node::from(5)));
    }

    #[test]
    fn test_absent_emits_nothing() {
        assert!(Flattener::default().flatten(&Node::Absent).is_empty());
        let pairs = Flattener::default().flatten(&Node::from(json!({"a": null, "b": 1})));
        assert_eq!(sorted_keys(&pairs), vec!["/b"]);
    }

    #[test]
    fn test_empty_containers_emit_nothing() {
        let pairs = Flattener::default().flatten(&Node::from(json!({"a": [], "b": {}})));
        assert!(pairs.is_empty());
    }

    #[test]
    fn test_sequence_order_is_preserved() {
        let pairs = Flattener::default().flatten(&Node::from(json!(["x", "y", "z"])));
        let keys: Vec<&str> = pairs.keys().collect();
        assert_eq!(keys, vec!["/*[0]", "/*[1]", "/*[2]"]);
    }

    #[test]
    fn test_scalar_reference_is_unwrapped_one_level() {
        let root = Node::mapping([("r", Node::reference(7))]);
        let pairs = Flattener::default().flatten(&root);
        assert_eq!(pairs.first("/r"), Some(&Node::from(7)));

        let root = Node::reference(Node::reference("deep"));
        let pairs = Flattener::default().flatten(&root);
        assert_eq!(pairs.len(), 1);
        assert_eq!(pairs.first("/"), Some(&Node::reference("deep")));
    }

    #[test]
    fn test_reference_to_container_is_not_traversed() {
        let target = Node::from(json!({"k": 1}));
        let root = Node::mapping([("r", Node::reference(target.clone()))]);
        let pairs = Flattener::default().flatten(&root);
        assert_eq!(pairs.len(), 1);
        assert_eq!(pairs.first("/r"), Some(&target));
    }

    #[test]
    fn test_opaque_is_stored_verbatim() {
        let handle = Node::opaque(vec![1u8, 2, 3]);
        let root = Node::mapping([("h", handle.clone())]);
        let pairs = Flattener::default().flatten(&root);
        assert_eq!(pairs.first("/h"), Some(&handle));
    }

    #[test]
    fn test_significant_keys_are_quoted() {
        let pairs = Flattener::default().flatten(&Node::from(json!({"a*b": {"[x]": 1}})));
        assert_eq!(sorted_keys(&pairs), vec!["/\"a*b\"/\"[x]\""]);
    }

    #[test]
    fn test_sorted_key_order() {
        let config = FlattenConfig::default().with_key_order(KeyOrder::Sorted);
        let root = Node::from(json!({"c": 3, "a": 1, "b": {"z": 26, "y": 25}}));
        let pairs = Flattener::new(config).flatten(&root);
        let keys: Vec<&str> = pairs.keys().collect();
        assert_eq!(keys, vec!["/a", "/b/y", "/b/z", "/c"]);
    }

    #[test]
    fn test_max_depth_emits_containers_verbatim() {
        let config = FlattenConfig::default().with_max_depth(Some(1));
        let root = Node::from(json!({"a": 1, "b": {"c": 2}, "d": [3]}));
        let pairs = Flattener::new(config).flatten(&root);
        assert_eq!(sorted_keys(&pairs), vec!["/a", "/b", "/d"]);
        assert_eq!(pairs.first("/b"), Some(&Node::from(json!({"c": 2}))));
    }

    #[test]
    fn test_self_reference_terminates() {
        let root = Node::mapping([("v", Node::from(1))]);
        root.as_mapping().expect("mapping").insert("me", root.clone());
        let pairs = Flattener::default().flatten(&root);
        assert_eq!(pairs.len(), 1);
        assert_eq!(pairs.first("/v"), Some(&Node::from(1)));
    }

    #[test]
    fn test_mutual_reference_terminates() {
        let x = Node::mapping([("name", Node::from("x"))]);
        let y = Node::sequence([Node::from("y")]);
        x.as_mapping().expect("mapping").insert("y", y.clone());
        y.as_sequence().expect("sequence").push(x.clone());

        let pairs = Flattener::default().flatten(&x);
        assert_eq!(sorted_keys(&pairs), vec!["/name", "/y/*[0]"]);
    }

    #[test]
    fn test_shared_container_is_expanded_per_path() {
        let shared = Node::from(json!({"k": 1}));
        let root = Node::mapping([("a", shared.clone()), ("b", shared)]);
        let pairs = Flattener::default().flatten(&root);
        assert_eq!(sorted_keys(&pairs), vec!["/a/k", "/b/k"]);
    }

    #[test]
    fn test_sequence_of_one_shared_mapping() {
        let shared = Node::from(json!({"k": 1}));
        let root = Node::sequence([shared.clone(), shared]);
        let pairs = Flattener::default().flatten(&root);
        let keys: Vec<&str> = pairs.keys().collect();
        assert_eq!(keys, vec!["/*[0]/k", "/*[1]/k"]);
        assert_eq!(pairs.count("/*[1]/k"), 1);
    }
}
