//! Selector constructors
//!
//! One constructor per variant. There is no textual or wire-format parser;
//! selectors are built in code.

use std::sync::Arc;

use super::ast::{RecursionLimit, Selector};
use super::condition::Condition;

impl Selector {
    /// Unconditional, unlabeled matcher
    #[must_use]
    pub const fn matcher() -> Self {
        Selector::Matcher {
            only_if: None,
            label: None,
        }
    }

    /// Matcher gated by a condition
    #[must_use]
    pub fn matcher_if(only_if: Condition) -> Self {
        Selector::Matcher {
            only_if: Some(only_if),
            label: None,
        }
    }

    /// Matcher tagging its matches with `label`
    #[must_use]
    pub fn labeled_matcher(label: &str) -> Self {
        Selector::Matcher {
            only_if: None,
            label: Some(Arc::from(label)),
        }
    }

    /// Matcher with every option spelled out
    #[must_use]
    pub fn matcher_with(only_if: Option<Condition>, label: Option<&str>) -> Self {
        Selector::Matcher {
            only_if,
            label: label.map(Arc::from),
        }
    }

    #[must_use]
    pub fn explore_all(next: Selector) -> Self {
        Selector::ExploreAll {
            next: Box::new(next),
        }
    }

    /// Explore the named fields in the given order
    ///
    /// Duplicate names are reported by the validator.
    pub fn explore_fields<K, I>(fields: I) -> Self
    where
        K: Into<String>,
        I: IntoIterator<Item = (K, Selector)>,
    {
        Selector::ExploreFields {
            fields: fields
                .into_iter()
                .map(|(name, selector)| (name.into(), selector))
                .collect(),
        }
    }

    #[must_use]
    pub fn explore_index(index: i64, next: Selector) -> Self {
        Selector::ExploreIndex {
            index,
            next: Box::new(next),
        }
    }

    #[must_use]
    pub fn explore_range(start: i64, end: i64, next: Selector) -> Self {
        Selector::ExploreRange {
            start,
            end,
            next: Box::new(next),
        }
    }

    #[must_use]
    pub fn explore_recursive(limit: RecursionLimit, sequence: Selector) -> Self {
        Selector::ExploreRecursive {
            limit,
            sequence: Box::new(sequence),
            stop_at: None,
        }
    }

    /// Recursive exploration that stops expanding at nodes where `stop_at` holds
    #[must_use]
    pub fn explore_recursive_until(
        limit: RecursionLimit,
        sequence: Selector,
        stop_at: Condition,
    ) -> Self {
        Selector::ExploreRecursive {
            limit,
            sequence: Box::new(sequence),
            stop_at: Some(stop_at),
        }
    }

    /// Union of branches; an empty list is reported by the validator
    pub fn explore_union(list: impl IntoIterator<Item = Selector>) -> Self {
        Selector::ExploreUnion {
            list: list.into_iter().collect(),
        }
    }

    #[must_use]
    pub fn explore_conditional(condition: Condition, next: Selector) -> Self {
        Selector::ExploreConditional {
            condition,
            next: Box::new(next),
        }
    }

    #[must_use]
    pub const fn recursive_edge() -> Self {
        Selector::ExploreRecursiveEdge
    }

    /// Match the current node and every descendant down to `limit` levels
    #[must_use]
    pub fn explore_all_recursively(limit: RecursionLimit) -> Self {
        Selector::explore_recursive(
            limit,
            Selector::explore_union([
                Selector::matcher(),
                Selector::explore_all(Selector::recursive_edge()),
            ]),
        )
    }
}
