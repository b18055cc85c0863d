//! Conversions between [`Node`] and Rust / JSON values

use hashbrown::HashSet;
use serde_json::{Map as JsonMap, Number, Value as JsonValue};

use super::types::{Node, Scalar};

impl From<JsonValue> for Node {
    fn from(value: JsonValue) -> Self {
        match value {
            JsonValue::Null => Node::Absent,
            JsonValue::Bool(b) => Node::Scalar(Scalar::Bool(b)),
            JsonValue::Number(n) => Node::Scalar(Scalar::from(n)),
            JsonValue::String(s) => Node::Scalar(Scalar::Str(s)),
            JsonValue::Array(items) => Node::sequence(items),
            JsonValue::Object(entries) => Node::mapping(entries),
        }
    }
}

impl From<&JsonValue> for Node {
    fn from(value: &JsonValue) -> Self {
        Node::from(value.clone())
    }
}

impl From<Number> for Scalar {
    fn from(n: Number) -> Self {
        if let Some(i) = n.as_i64() {
            Scalar::Int(i)
        } else if let Some(u) = n.as_u64() {
            Scalar::UInt(u)
        } else {
            Scalar::Float(n.as_f64().unwrap_or(f64::NAN))
        }
    }
}

impl From<Scalar> for Node {
    fn from(scalar: Scalar) -> Self {
        Node::Scalar(scalar)
    }
}

impl From<&str> for Node {
    fn from(s: &str) -> Self {
        Node::Scalar(Scalar::Str(s.to_owned()))
    }
}

impl From<String> for Node {
    fn from(s: String) -> Self {
        Node::Scalar(Scalar::Str(s))
    }
}

impl From<bool> for Node {
    fn from(b: bool) -> Self {
        Node::Scalar(Scalar::Bool(b))
    }
}

impl From<i32> for Node {
    fn from(i: i32) -> Self {
        Node::Scalar(Scalar::Int(i64::from(i)))
    }
}

impl From<i64> for Node {
    fn from(i: i64) -> Self {
        Node::Scalar(Scalar::Int(i))
    }
}

impl From<u64> for Node {
    fn from(u: u64) -> Self {
        match i64::try_from(u) {
            Ok(i) => Node::Scalar(Scalar::Int(i)),
            Err(_) => Node::Scalar(Scalar::UInt(u)),
        }
    }
}

impl From<f64> for Node {
    fn from(x: f64) -> Self {
        Node::Scalar(Scalar::Float(x))
    }
}

impl<T: Into<Node>> From<Option<T>> for Node {
    fn from(value: Option<T>) -> Self {
        value.map_or(Node::Absent, Into::into)
    }
}

impl From<&Scalar> for JsonValue {
    fn from(scalar: &Scalar) -> Self {
        match scalar {
            Scalar::Str(s) => JsonValue::String(s.clone()),
            Scalar::Int(i) => JsonValue::from(*i),
            Scalar::UInt(u) => JsonValue::from(*u),
            Scalar::Float(x) => Number::from_f64(*x).map_or(JsonValue::Null, JsonValue::Number),
            Scalar::Bool(b) => JsonValue::Bool(*b),
        }
    }
}

impl Node {
    /// Renders the node as JSON
    ///
    /// Opaque values render as their label. A container reached again while
    /// it is still being rendered renders as `null`.
    #[must_use]
    pub fn to_json(&self) -> JsonValue {
        let mut route = HashSet::new();
        self.to_json_guarded(&mut route)
    }

    fn to_json_guarded(&self, route: &mut HashSet<usize>) -> JsonValue {
        match self {
            Node::Absent => JsonValue::Null,
            Node::Scalar(scalar) => JsonValue::from(scalar),
            Node::ScalarRef(inner) => inner.to_json_guarded(route),
            Node::Opaque(opaque) => JsonValue::String(opaque.label().to_owned()),
            Node::Sequence(seq) => {
                let id = seq.identity();
                if !route.insert(id) {
                    return JsonValue::Null;
                }
                let items = seq
                    .snapshot()
                    .iter()
                    .map(|item| item.to_json_guarded(route))
                    .collect();
                route.remove(&id);
                JsonValue::Array(items)
            }
            Node::Mapping(map) => {
                let id = map.identity();
                if !route.insert(id) {
                    return JsonValue::Null;
                }
                let mut object = JsonMap::new();
                for (key, value) in map.snapshot() {
                    let rendered = value.to_json_guarded(route);
                    object.insert(key, rendered);
                }
                route.remove(&id);
                JsonValue::Object(object)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_json_object_becomes_mapping() {
        let node = Node::from(json!({"a": [1, "two", null], "b": true}));
        let map = node.as_mapping().expect("object should become a mapping");
        assert_eq!(map.len(), 2);
        let seq = map.get("a").expect("key 'a' should exist");
        let seq = seq.as_sequence().expect("array should become a sequence");
        assert_eq!(seq.len(), 3);
        assert!(seq.get(2).is_some_and(|n| n.is_absent()));
    }

    #[test]
    fn test_json_round_trip_for_acyclic_value() {
        let value = json!({"a": {"b": [1, 2.5, "x"]}, "c": false});
        assert_eq!(Node::from(&value).to_json(), value);
    }

    #[test]
    fn test_large_unsigned_stays_unsigned() {
        let node = Node::from(json!(u64::MAX));
        assert_eq!(node.as_scalar(), Some(&Scalar::UInt(u64::MAX)));
    }

    #[test]
    fn test_cyclic_render_terminates() {
        let outer = Node::mapping([("name", Node::from("outer"))]);
        let map = outer.as_mapping().expect("mapping").clone();
        map.insert("self", outer.clone());
        assert_eq!(outer.to_json(), json!({"name": "outer", "self": null}));
    }
}
