//! Static selector validation
//!
//! Runs once per constructed selector, before the first traversal. The
//! traversal engine assumes a validated selector and never repeats these
//! checks.

use hashbrown::HashSet;

use crate::error::{SelectorResult, invalid_selector_error};
use crate::selector::{RecursionLimit, Selector};

/// Complexity summary gathered while validating
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SelectorMetrics {
    /// Total number of selector nodes
    pub selector_count: u32,
    /// Deepest nesting of `ExploreRecursive` selectors
    pub max_recursion_nesting: u32,
    /// Number of branches across all unions
    pub union_branch_count: u32,
    /// Number of `ExploreRecursiveEdge` selectors
    pub recursive_edge_count: u32,
    /// Edges reachable from their frame without descending; each expansion
    /// re-applies the sequence at the same node
    pub stationary_edge_count: u32,
    /// Some `ExploreRecursive` has neither a depth limit nor `stop_at`
    pub unbounded_recursion: bool,
}

/// Recursive-descent selector validator
pub struct SelectorValidator;

#[derive(Clone, Copy)]
struct Scope {
    /// Number of enclosing `ExploreRecursive` selectors
    recursion_nesting: u32,
    /// A descending explore lies between the innermost frame and here
    descended: bool,
}

impl SelectorValidator {
    /// Validate a selector tree
    ///
    /// # Errors
    /// Returns an `InvalidSelector` error for:
    /// - an `ExploreRecursiveEdge` outside any `ExploreRecursive`
    /// - duplicate `ExploreFields` names
    /// - an empty `ExploreUnion`
    /// - a negative `ExploreIndex` index or `ExploreRange` bound
    /// - an `ExploreRange` whose start exceeds its end
    pub fn validate(selector: &Selector) -> SelectorResult<SelectorMetrics> {
        let mut metrics = SelectorMetrics::default();
        Self::visit(
            selector,
            Scope {
                recursion_nesting: 0,
                descended: false,
            },
            &mut metrics,
        )?;
        Ok(metrics)
    }

    fn visit(selector: &Selector, scope: Scope, metrics: &mut SelectorMetrics) -> SelectorResult<()> {
        metrics.selector_count = metrics.selector_count.saturating_add(1);

        let child_scope = if selector.descends() {
            Scope {
                descended: true,
                ..scope
            }
        } else {
            scope
        };

        match selector {
            Selector::Matcher { .. } => {}
            Selector::ExploreAll { next } | Selector::ExploreConditional { next, .. } => {
                Self::visit(next, child_scope, metrics)?;
            }
            Selector::ExploreFields { fields } => {
                let mut seen = HashSet::with_capacity(fields.len());
                for (name, _) in fields {
                    if !seen.insert(name.as_str()) {
                        return Err(invalid_selector_error(
                            "ExploreFields",
                            format!("duplicate field '{name}'"),
                        ));
                    }
                }
                for (_, next) in fields {
                    Self::visit(next, child_scope, metrics)?;
                }
            }
            Selector::ExploreIndex { index, next } => {
                if *index < 0 {
                    return Err(invalid_selector_error(
                        "ExploreIndex",
                        format!("negative index {index}"),
                    ));
                }
                Self::visit(next, child_scope, metrics)?;
            }
            Selector::ExploreRange { start, end, next } => {
                if *start < 0 || *end < 0 {
                    return Err(invalid_selector_error(
                        "ExploreRange",
                        format!("negative bound in {start}..{end}"),
                    ));
                }
                if start > end {
                    return Err(invalid_selector_error(
                        "ExploreRange",
                        format!("start {start} exceeds end {end}"),
                    ));
                }
                Self::visit(next, child_scope, metrics)?;
            }
            Selector::ExploreRecursive {
                limit,
                sequence,
                stop_at,
            } => {
                if *limit == RecursionLimit::None && stop_at.is_none() {
                    metrics.unbounded_recursion = true;
                }
                let nesting = scope.recursion_nesting + 1;
                metrics.max_recursion_nesting = metrics.max_recursion_nesting.max(nesting);
                Self::visit(
                    sequence,
                    Scope {
                        recursion_nesting: nesting,
                        descended: false,
                    },
                    metrics,
                )?;
            }
            Selector::ExploreUnion { list } => {
                if list.is_empty() {
                    return Err(invalid_selector_error("ExploreUnion", "empty union list"));
                }
                metrics.union_branch_count = metrics
                    .union_branch_count
                    .saturating_add(u32::try_from(list.len()).unwrap_or(u32::MAX));
                for branch in list {
                    Self::visit(branch, child_scope, metrics)?;
                }
            }
            Selector::ExploreRecursiveEdge => {
                metrics.recursive_edge_count = metrics.recursive_edge_count.saturating_add(1);
                if scope.recursion_nesting == 0 {
                    return Err(invalid_selector_error(
                        "ExploreRecursiveEdge",
                        "dangling recursive edge",
                    ));
                }
                if !scope.descended {
                    metrics.stationary_edge_count =
                        metrics.stationary_edge_count.saturating_add(1);
                }
            }
        }

        Ok(())
    }
}

/// Validate a selector tree
///
/// # Errors
/// See [`SelectorValidator::validate`].
pub fn validate(selector: &Selector) -> SelectorResult<SelectorMetrics> {
    SelectorValidator::validate(selector)
}

impl Selector {
    /// Validate this selector tree
    ///
    /// # Errors
    /// See [`SelectorValidator::validate`].
    pub fn validate(&self) -> SelectorResult<SelectorMetrics> {
        SelectorValidator::validate(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use crate::selector::Condition;

    fn reason(selector: &Selector) -> String {
        let error = validate(selector).expect_err("selector should be rejected");
        assert_eq!(error.kind, ErrorKind::InvalidSelector);
        error.message
    }

    #[test]
    fn test_dangling_edge_is_rejected() {
        let selector = Selector::explore_all(Selector::recursive_edge());
        assert!(reason(&selector).contains("dangling recursive edge"));
    }

    #[test]
    fn test_edge_in_sibling_of_recursive_is_dangling() {
        let selector = Selector::explore_union([
            Selector::explore_recursive(
                RecursionLimit::Depth(1),
                Selector::explore_all(Selector::recursive_edge()),
            ),
            Selector::explore_all(Selector::recursive_edge()),
        ]);
        assert!(reason(&selector).contains("dangling recursive edge"));
    }

    #[test]
    fn test_edge_without_descent_is_accepted_and_counted() {
        let selector = Selector::explore_recursive(
            RecursionLimit::Depth(2),
            Selector::explore_union([Selector::matcher(), Selector::recursive_edge()]),
        );
        let metrics = validate(&selector).expect("bounded stationary edge is well formed");
        assert_eq!(metrics.stationary_edge_count, 1);
        assert!(!metrics.unbounded_recursion);

        let unbounded = Selector::explore_all(Selector::explore_recursive(
            RecursionLimit::None,
            Selector::explore_conditional(Condition::Always, Selector::recursive_edge()),
        ));
        let metrics = validate(&unbounded).expect("stationary edges are not structural errors");
        assert_eq!(metrics.stationary_edge_count, 1);
        assert!(metrics.unbounded_recursion);

        // descent sits below the frame, not above it
        let descended_outside = Selector::explore_all(Selector::explore_recursive(
            RecursionLimit::Depth(1),
            Selector::recursive_edge(),
        ));
        let metrics = validate(&descended_outside).expect("well formed");
        assert_eq!(metrics.stationary_edge_count, 1);
    }

    #[test]
    fn test_structural_errors() {
        assert!(reason(&Selector::explore_union(Vec::new())).contains("empty union"));
        assert!(
            reason(&Selector::explore_fields([
                ("a", Selector::matcher()),
                ("a", Selector::matcher()),
            ]))
            .contains("duplicate field 'a'")
        );
        assert!(reason(&Selector::explore_range(3, 1, Selector::matcher())).contains("exceeds"));
        assert!(reason(&Selector::explore_range(-1, 1, Selector::matcher())).contains("negative"));
        assert!(reason(&Selector::explore_index(-2, Selector::matcher())).contains("negative"));
    }

    #[test]
    fn test_empty_range_is_accepted() {
        assert!(validate(&Selector::explore_range(2, 2, Selector::matcher())).is_ok());
    }

    #[test]
    fn test_metrics() {
        let selector = Selector::explore_recursive(
            RecursionLimit::None,
            Selector::explore_union([
                Selector::matcher(),
                Selector::explore_all(Selector::explore_recursive(
                    RecursionLimit::Depth(2),
                    Selector::explore_index(0, Selector::recursive_edge()),
                )),
                Selector::explore_fields([("next", Selector::recursive_edge())]),
            ]),
        );
        let metrics = validate(&selector).expect("selector is well formed");
        assert_eq!(metrics.selector_count, 9);
        assert_eq!(metrics.max_recursion_nesting, 2);
        assert_eq!(metrics.union_branch_count, 3);
        assert_eq!(metrics.recursive_edge_count, 2);
        assert_eq!(metrics.stationary_edge_count, 0);
        assert!(metrics.unbounded_recursion);
    }

    #[test]
    fn test_validation_is_idempotent() {
        let selector = Selector::explore_all_recursively(RecursionLimit::Depth(4));
        let first = validate(&selector);
        let second = validate(&selector);
        assert_eq!(first, second);
        assert!(first.is_ok());
    }
}
