//! Builder module tests
//!
//! Tests for the fluent selector builder, mirroring src/builder/selector.rs

use selwalk::{Condition, NodeKind, RecursionLimit, Selector, SelectorBuilder};

#[cfg(test)]
mod builder_tests {
    use super::*;

    #[test]
    fn test_steps_wrap_outside_in() {
        let built = SelectorBuilder::new()
            .field("a")
            .index(2)
            .range(0, 4)
            .all()
            .matcher();
        let manual = Selector::explore_fields([(
            "a",
            Selector::explore_index(
                2,
                Selector::explore_range(0, 4, Selector::explore_all(Selector::matcher())),
            ),
        )]);
        assert_eq!(built, manual);
    }

    #[test]
    fn test_empty_chain_is_terminal() {
        assert_eq!(SelectorBuilder::new().matcher(), Selector::matcher());
        assert_eq!(SelectorBuilder::new().edge(), Selector::recursive_edge());
        assert_eq!(
            selwalk::selector().labeled("x"),
            Selector::labeled_matcher("x")
        );
    }

    #[test]
    fn test_conditional_step() {
        let built = SelectorBuilder::new()
            .all()
            .when(Condition::is_kind(NodeKind::Map))
            .labeled("map");
        let manual = Selector::explore_all(Selector::explore_conditional(
            Condition::is_kind(NodeKind::Map),
            Selector::labeled_matcher("map"),
        ));
        assert_eq!(built, manual);
        assert!(built.validate().is_ok(), "conditional chain should validate");
    }

    #[test]
    fn test_recursion_helpers() {
        let built = SelectorBuilder::new()
            .field("tree")
            .descendants(RecursionLimit::Depth(3));
        assert_eq!(
            built,
            Selector::explore_fields([(
                "tree",
                Selector::explore_all_recursively(RecursionLimit::Depth(3))
            )])
        );

        let until = SelectorBuilder::new().recurse_until(
            RecursionLimit::None,
            SelectorBuilder::new().union([
                Selector::matcher(),
                SelectorBuilder::new().all().edge(),
            ]),
            Condition::named("leaf"),
        );
        let metrics = until.validate().expect("edge sits below a descent");
        assert!(!metrics.unbounded_recursion, "stop_at bounds the recursion");
        assert_eq!(metrics.recursive_edge_count, 1);
        assert_eq!(metrics.max_recursion_nesting, 1);
    }

    #[test]
    fn test_builder_is_reusable() {
        let base = SelectorBuilder::new().field("items");
        assert_eq!(base.depth(), 1);

        let first = base.clone().index(0).matcher();
        let every = base.all().matcher();
        assert_ne!(first, every);
        assert_eq!(
            every,
            Selector::explore_fields([("items", Selector::explore_all(Selector::matcher()))])
        );
    }

    #[test]
    fn test_fields_terminal() {
        let built = SelectorBuilder::new().field("meta").fields([
            ("name", Selector::matcher()),
            ("tags", SelectorBuilder::new().all().matcher()),
        ]);
        assert!(built.validate().is_ok());
        assert_eq!(built.validate().map(|m| m.selector_count).ok(), Some(5));
    }

    #[test]
    fn test_invalid_chains_fail_validation() {
        assert!(SelectorBuilder::new().index(-1).matcher().validate().is_err());
        assert!(SelectorBuilder::new().range(3, 1).matcher().validate().is_err());
        assert!(SelectorBuilder::new().range(-1, 1).matcher().validate().is_err());
        assert!(SelectorBuilder::new().all().edge().validate().is_err());
        assert!(SelectorBuilder::new().union(Vec::new()).validate().is_err());
    }

    #[test]
    fn test_edge_directly_under_recursion_is_counted() {
        let metrics = SelectorBuilder::new()
            .recurse(RecursionLimit::Depth(1), SelectorBuilder::new().edge())
            .validate()
            .expect("a bounded edge without descent still terminates");
        assert_eq!(metrics.stationary_edge_count, 1);
        assert_eq!(metrics.recursive_edge_count, 1);
    }
}
