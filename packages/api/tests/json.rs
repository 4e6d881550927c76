//! JSON traversal tests
//!
//! End-to-end walks over `serde_json` documents, including property tests
//! for union de-duplication and re-walk determinism.

use proptest::prelude::*;
use selwalk::{Path, PathSegment, RecursionLimit, Selector, SelectorBuilder};
use serde_json::{Value, json};

fn walk_paths(doc: &Value, selector: &Selector) -> Vec<String> {
    selwalk::walk_json(doc, selector)
        .expect("valid selector over json")
        .iter()
        .map(|m| m.path.to_string())
        .collect()
}

fn resolve<'v>(root: &'v Value, path: &Path) -> Option<&'v Value> {
    path.segments()
        .into_iter()
        .try_fold(root, |node, segment| match segment {
            PathSegment::Field(name) => node.get(name.as_str()),
            PathSegment::Index(index) => node.get(index),
        })
}

fn count_nodes(value: &Value) -> usize {
    1 + match value {
        Value::Array(items) => items.iter().map(count_nodes).sum(),
        Value::Object(fields) => fields.values().map(count_nodes).sum(),
        _ => 0,
    }
}

fn json_tree() -> impl Strategy<Value = Value> {
    let leaf = prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::from),
        any::<i32>().prop_map(Value::from),
        "[a-z]{0,4}".prop_map(Value::from),
    ];
    leaf.prop_recursive(4, 32, 4, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..4).prop_map(Value::Array),
            prop::collection::hash_map("[a-c]{1,2}", inner, 0..4)
                .prop_map(|fields| Value::Object(fields.into_iter().collect())),
        ]
    })
}

#[cfg(test)]
mod json_tests {
    use super::*;

    #[test]
    fn test_fields_scenario() {
        let doc = json!({"a": {"b": 1}, "c": [10, 20, 30]});
        let selector = SelectorBuilder::new().field("a").all().matcher();

        let found = selwalk::walk_json(&doc, &selector).expect("valid selector");
        assert_eq!(found.len(), 1);
        assert_eq!(
            found[0].path.segments(),
            vec![PathSegment::from("a"), PathSegment::from("b")]
        );
        assert_eq!(found[0].node, &json!(1));
    }

    #[test]
    fn test_range_scenario() {
        let doc = json!([10, 20, 30, 40]);
        let selector = SelectorBuilder::new().range(1, 3).matcher();
        let found = selwalk::walk_json(&doc, &selector).expect("valid selector");

        let nodes: Vec<&Value> = found.iter().map(|m| m.node).collect();
        assert_eq!(nodes, vec![&json!(20), &json!(30)]);
        assert_eq!(walk_paths(&doc, &selector), vec!["$[1]", "$[2]"]);
    }

    #[test]
    fn test_linked_chain_scenario() {
        let doc = json!({"v": 0, "next": {"v": 1, "next": {"v": 2, "next": {"v": 3}}}});
        let selector = SelectorBuilder::new().recurse(
            RecursionLimit::Depth(2),
            SelectorBuilder::new().union([
                SelectorBuilder::new().field("v").matcher(),
                SelectorBuilder::new().field("next").edge(),
            ]),
        );

        let values: Vec<Value> = selwalk::walk_json(&doc, &selector)
            .expect("valid selector")
            .into_iter()
            .map(|m| m.node.clone())
            .collect();
        assert_eq!(values, vec![json!(0), json!(1), json!(2)]);
    }

    #[test]
    fn test_match_paths_parse_back() {
        let doc = json!({"it's": [{"a\\b": 1}], "plain": {"x": [true]}});
        let selector = Selector::explore_all_recursively(RecursionLimit::None);

        for found in selwalk::walk_json(&doc, &selector).expect("valid selector") {
            let rendered = found.path.to_string();
            let parsed = Path::parse(&rendered).expect("rendered paths are normalized");
            assert_eq!(parsed, found.path, "round trip of {rendered}");
            assert_eq!(resolve(&doc, &parsed), Some(found.node));
        }
    }

    proptest! {
        #[test]
        fn prop_rewalk_is_deterministic(doc in json_tree()) {
            let selector = Selector::explore_all_recursively(RecursionLimit::None);
            let first = walk_paths(&doc, &selector);
            let second = walk_paths(&doc, &selector);
            prop_assert_eq!(&first, &second);
            prop_assert_eq!(first.len(), count_nodes(&doc));
        }

        #[test]
        fn prop_union_reports_each_path_once(doc in json_tree()) {
            let everything = Selector::explore_all_recursively(RecursionLimit::None);
            let doubled = Selector::explore_union([
                everything.clone(),
                Selector::explore_all(Selector::matcher()),
                everything.clone(),
            ]);

            let expected = walk_paths(&doc, &everything);
            let found = walk_paths(&doc, &doubled);
            prop_assert_eq!(found, expected);
        }

        #[test]
        fn prop_matches_resolve_to_their_nodes(doc in json_tree(), depth in 0u64..4) {
            let selector = Selector::explore_all_recursively(RecursionLimit::Depth(depth));
            let found = selwalk::walk_json(&doc, &selector).expect("valid selector");
            for m in &found {
                prop_assert!(m.path.depth() as u64 <= depth);
                prop_assert_eq!(resolve(&doc, &m.path), Some(m.node));
            }
        }
    }
}
