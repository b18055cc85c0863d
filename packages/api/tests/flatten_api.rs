//! End-to-end tests for the public flatten API

use flatpath::{
    AliasError, AliasSpec, Diagnostic, FlatPairs, FlattenBuilder, FlattenError, Node, PathQuery,
    QueryError, StepQuery, flatten, flatten_structure, flatten_with,
};
use serde_json::{Value, json};
use tracing_subscriber::EnvFilter;

fn init_test_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

fn sample() -> Value {
    json!({"A": 1, "B": 2, "C": {"D": 3, "E": 4}, "F": [5, 6]})
}

fn structural() -> Vec<(&'static str, Node)> {
    vec![
        ("/A", Node::from(1)),
        ("/B", Node::from(2)),
        ("/C/D", Node::from(3)),
        ("/C/E", Node::from(4)),
        ("/F/*[0]", Node::from(5)),
        ("/F/*[1]", Node::from(6)),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flatten_bare_scalar() {
        init_test_tracing();
        let pairs = flatten(5, None);
        assert_eq!(pairs.as_slice(), &[("/".to_owned(), Node::from(5))]);
    }

    #[test]
    fn test_flatten_nested_structure() {
        init_test_tracing();
        let expected: FlatPairs = structural().into_iter().collect();
        assert_eq!(flatten(sample(), None).sorted(), expected.sorted());
        assert_eq!(flatten_structure(sample()).len(), 6);
    }

    #[test]
    fn test_aliases_are_appended() {
        init_test_tracing();
        let aliases = AliasSpec::pairs([("One", "/B"), ("Two", "/Z")]);
        let pairs = flatten(sample(), Some(aliases));

        assert_eq!(pairs.len(), 8);
        let tail = &pairs.as_slice()[6..];
        assert_eq!(
            tail,
            &[
                ("One".to_owned(), Node::from(2)),
                ("Two".to_owned(), Node::Absent)
            ]
        );
        let mut expected: FlatPairs = structural().into_iter().collect();
        expected.extend([("One", Node::from(2)), ("Two", Node::Absent)]);
        assert_eq!(pairs.sorted(), expected.sorted());
    }

    #[test]
    fn test_duplicate_alias_names_are_kept() {
        init_test_tracing();
        let aliases = AliasSpec::pairs([("One", "/A"), ("One", "/B")]);
        let pairs = flatten(sample(), Some(aliases));
        let ones: Vec<&Node> = pairs.get_all("One").collect();
        assert_eq!(ones, vec![&Node::from(1), &Node::from(2)]);
    }

    #[test]
    fn test_alias_named_like_structural_path() {
        init_test_tracing();
        let aliases = AliasSpec::pairs([("/A", "/B")]);
        let pairs = flatten(sample(), Some(aliases));
        let values: Vec<&Node> = pairs.get_all("/A").collect();
        assert_eq!(values, vec![&Node::from(1), &Node::from(2)]);
    }

    #[test]
    fn test_mapping_aliases_collapse_duplicate_names() {
        init_test_tracing();
        let aliases = AliasSpec::mapping([("One", "/A"), ("One", "/B")]);
        let pairs = flatten(sample(), Some(aliases));
        assert_eq!(pairs.count("One"), 1);
        assert_eq!(pairs.first("One"), Some(&Node::from(2)));
    }

    #[test]
    fn test_builder_with_alias_data() {
        init_test_tracing();
        let result = FlattenBuilder::new(sample())
            .alias_data(json!(["One", "/B", "Two", "/Z"]))
            .run()
            .expect("lenient run succeeds");
        assert!(result.is_clean());
        assert_eq!(result.pairs.first("One"), Some(&Node::from(2)));
        assert_eq!(result.pairs.first("Two"), Some(&Node::Absent));
    }

    #[test]
    fn test_builder_tolerates_odd_alias_list() {
        init_test_tracing();
        let result = FlattenBuilder::new(sample())
            .alias_data(json!(["One", "/B", "Two"]))
            .run()
            .expect("lenient run succeeds");
        assert_eq!(result.pairs.len(), 6);
        assert_eq!(
            result.diagnostics,
            vec![Diagnostic::MalformedAliases(AliasError::OddLength { len: 3 })]
        );
        assert!(result.diagnostics[0].to_string().contains("odd number"));
    }

    #[test]
    fn test_builder_strict_rejects_wrong_container() {
        init_test_tracing();
        let error = FlattenBuilder::new(sample())
            .alias_data(Node::opaque(String::from("not aliases")))
            .strict()
            .run()
            .expect_err("strict run rejects opaque aliases");
        assert!(matches!(
            error,
            FlattenError::Alias(AliasError::UnsupportedContainer { .. })
        ));
    }

    #[test]
    fn test_builder_sorted_keys_give_deterministic_order() {
        init_test_tracing();
        let result = FlattenBuilder::new(sample())
            .alias("One", "/B")
            .alias("One", "/A")
            .sorted_keys()
            .run()
            .expect("lenient run succeeds");
        let keys: Vec<&str> = result.pairs.keys().collect();
        assert_eq!(
            keys,
            vec!["/A", "/B", "/C/D", "/C/E", "/F/*[0]", "/F/*[1]", "One", "One"]
        );
        let ones: Vec<&Node> = result.pairs.get_all("One").collect();
        assert_eq!(ones, vec![&Node::from(2), &Node::from(1)]);
    }

    #[test]
    fn test_builder_skip_absent_and_max_depth() {
        init_test_tracing();
        let result = FlattenBuilder::new(sample())
            .alias("missing", "/Z")
            .skip_absent_aliases()
            .max_depth(1)
            .run()
            .expect("lenient run succeeds");
        assert_eq!(result.pairs.count("missing"), 0);
        assert_eq!(
            result.pairs.first("/C"),
            Some(&Node::from(json!({"D": 3, "E": 4})))
        );
    }

    #[test]
    fn test_wildcard_and_descendant_aliases() {
        init_test_tracing();
        let data = json!({"users": [{"name": "ann"}, {"name": "bob", "team": {"name": "core"}}]});
        let aliases = AliasSpec::pairs([
            ("first", "/users/*[0]/name"),
            ("last", "/users/*[-1]/name"),
            ("names", "/users/*/name"),
        ]);
        let pairs = flatten(data, Some(aliases));
        assert_eq!(pairs.first("first"), Some(&Node::from("ann")));
        assert_eq!(pairs.first("last"), Some(&Node::from("bob")));
        let names: Vec<&Node> = pairs.get_all("names").collect();
        assert_eq!(names, vec![&Node::from("ann"), &Node::from("bob")]);

        let result = FlattenBuilder::new(json!({"a": {"name": 1}, "b": [{"name": 2}]}))
            .alias("every", "//name")
            .run()
            .expect("lenient run succeeds");
        assert_eq!(result.pairs.count("every"), 2);
    }

    struct Upper;

    impl PathQuery for Upper {
        fn select(&self, expression: &str, root: &Node) -> Result<Vec<Node>, QueryError> {
            StepQuery::new().select(&expression.to_uppercase(), root)
        }
    }

    #[test]
    fn test_custom_engine() {
        init_test_tracing();
        let pairs = flatten_with(sample(), Some(AliasSpec::pairs([("d", "/c/d")])), &Upper);
        assert_eq!(pairs.first("d"), Some(&Node::from(3)));

        let result = FlattenBuilder::new(sample())
            .engine(Upper)
            .alias("e", "/c/e")
            .run()
            .expect("lenient run succeeds");
        assert_eq!(result.pairs.first("e"), Some(&Node::from(4)));
    }

    #[test]
    fn test_self_referential_input_through_public_api() {
        init_test_tracing();
        let root = Node::mapping([("v", Node::from(1))]);
        let map = root.as_mapping().expect("mapping").clone();
        map.insert("again", root.clone());
        map.insert("list", Node::sequence([root.clone()]));

        let pairs = flatten(root.clone(), Some(AliasSpec::pairs([("v", "/again/again/v")])));
        assert_eq!(pairs.count("/v"), 1);
        assert_eq!(pairs.first("v"), Some(&Node::from(1)));
        assert_eq!(pairs.len(), 2);
    }
}
