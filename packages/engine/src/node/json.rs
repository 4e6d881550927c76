//! `serde_json::Value` node access
//!
//! Objects are maps (field order as stored by `serde_json::Map`), arrays are
//! lists and every other value is a scalar.

use serde_json::Value;

use super::{NodeAccess, NodeKind};
use crate::error::SelectorResult;
use crate::path::PathSegment;

/// Node access over borrowed JSON values
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonAccess;

impl<'a> NodeAccess<&'a Value> for JsonAccess {
    fn kind(&self, node: &&'a Value) -> SelectorResult<NodeKind> {
        Ok(match node {
            Value::Object(_) => NodeKind::Map,
            Value::Array(_) => NodeKind::List,
            Value::Null | Value::Bool(_) | Value::Number(_) | Value::String(_) => {
                NodeKind::Scalar
            }
        })
    }

    fn children(&self, node: &&'a Value) -> SelectorResult<Vec<(PathSegment, &'a Value)>> {
        let node: &'a Value = *node;
        Ok(match node {
            Value::Object(map) => map
                .iter()
                .map(|(name, child)| (PathSegment::Field(name.clone()), child))
                .collect(),
            Value::Array(items) => items
                .iter()
                .enumerate()
                .map(|(index, child)| (PathSegment::Index(index), child))
                .collect(),
            _ => Vec::new(),
        })
    }

    fn child(&self, node: &&'a Value, key: &PathSegment) -> SelectorResult<Option<&'a Value>> {
        let node: &'a Value = *node;
        Ok(match (node, key) {
            (Value::Object(map), PathSegment::Field(name)) => map.get(name),
            (Value::Array(items), PathSegment::Index(index)) => items.get(*index),
            _ => None,
        })
    }

    fn len(&self, node: &&'a Value) -> SelectorResult<Option<usize>> {
        Ok(node.as_array().map(Vec::len))
    }

    fn text(&self, node: &&'a Value) -> SelectorResult<Option<String>> {
        Ok(match node {
            Value::String(text) => Some(text.clone()),
            Value::Number(number) => Some(number.to_string()),
            Value::Bool(flag) => Some(flag.to_string()),
            Value::Null | Value::Array(_) | Value::Object(_) => None,
        })
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_kinds() {
        let value = json!({"a": [1, "x", null]});
        assert_eq!(JsonAccess.kind(&&value).ok(), Some(NodeKind::Map));
        assert_eq!(JsonAccess.kind(&&value["a"]).ok(), Some(NodeKind::List));
        assert_eq!(JsonAccess.kind(&&value["a"][2]).ok(), Some(NodeKind::Scalar));
    }

    #[test]
    fn test_children_and_child() {
        let value = json!({"a": [10, 20], "b": true});
        let children = JsonAccess.children(&&value).expect("json access never fails");
        let keys: Vec<_> = children.iter().map(|(key, _)| key.clone()).collect();
        assert_eq!(keys, vec![PathSegment::from("a"), PathSegment::from("b")]);

        let list = &value["a"];
        assert_eq!(
            JsonAccess.child(&list, &PathSegment::Index(1)).ok().flatten(),
            Some(&json!(20))
        );
        assert_eq!(JsonAccess.child(&list, &PathSegment::Index(2)).ok().flatten(), None);
        assert_eq!(JsonAccess.child(&list, &PathSegment::from("a")).ok().flatten(), None);
        assert_eq!(JsonAccess.len(&list).ok().flatten(), Some(2));
        assert_eq!(JsonAccess.len(&&value).ok().flatten(), None);
    }

    #[test]
    fn test_text_rendering() {
        let value = json!(["hello", 42, false, null]);
        let texts: Vec<_> = (0..4usize)
            .map(|index| JsonAccess.text(&&value[index]).ok().flatten())
            .collect();
        assert_eq!(
            texts,
            vec![
                Some("hello".to_string()),
                Some("42".to_string()),
                Some("false".to_string()),
                None
            ]
        );
    }
}
