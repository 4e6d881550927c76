//! Selector AST definitions
//!
//! Core type definitions for the nine selector variants and the recursion
//! limit value type.

use std::sync::Arc;

use super::condition::Condition;

/// Budget of one `ExploreRecursive` frame
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RecursionLimit {
    /// Unbounded; termination relies on `stop_at` or on the data ending
    None,
    /// Maximum number of `ExploreRecursiveEdge` expansions for the frame
    Depth(u64),
}

impl RecursionLimit {
    /// Whether the frame may not expand its edge any more
    #[inline]
    #[must_use]
    pub const fn is_exhausted(self) -> bool {
        matches!(self, RecursionLimit::Depth(0))
    }

    /// Budget after one edge expansion, `None` if already exhausted
    #[inline]
    #[must_use]
    pub const fn decremented(self) -> Option<Self> {
        match self {
            RecursionLimit::None => Some(RecursionLimit::None),
            RecursionLimit::Depth(0) => None,
            RecursionLimit::Depth(n) => Some(RecursionLimit::Depth(n - 1)),
        }
    }
}

/// Individual selector node
#[derive(Debug, Clone, PartialEq)]
pub enum Selector {
    /// Terminal: report the current node when `only_if` is absent or holds
    Matcher {
        /// Optional predicate gating the match
        only_if: Option<Condition>,
        /// Tag attached to every match produced by this matcher
        label: Option<Arc<str>>,
    },

    /// Visit every child (list element or map field)
    ExploreAll {
        /// Selector applied to each child
        next: Box<Selector>,
    },

    /// Visit the named fields, each with its own selector
    ExploreFields {
        /// Field selectors in declaration order, names unique
        fields: Vec<(String, Selector)>,
    },

    /// Visit a single list element
    ExploreIndex {
        /// Zero-based list index
        index: i64,
        /// Selector applied to the element
        next: Box<Selector>,
    },

    /// Visit list elements in `[start, end)`
    ExploreRange {
        /// First index, inclusive
        start: i64,
        /// Last index, exclusive
        end: i64,
        /// Selector applied to each element
        next: Box<Selector>,
    },

    /// Apply `sequence` repeatedly through `ExploreRecursiveEdge`
    ExploreRecursive {
        /// Number of edge expansions allowed
        limit: RecursionLimit,
        /// Selector applied at the frame root and at every expansion
        sequence: Box<Selector>,
        /// Expansion stops at nodes where this holds
        stop_at: Option<Condition>,
    },

    /// Apply every branch at the current node, de-duplicating by path
    ExploreUnion {
        /// Branches in priority order, non-empty
        list: Vec<Selector>,
    },

    /// Apply `next` only when `condition` holds at the current node
    ExploreConditional {
        /// Gate evaluated at the current node
        condition: Condition,
        /// Selector applied when the gate holds
        next: Box<Selector>,
    },

    /// Re-apply the `sequence` of the nearest enclosing `ExploreRecursive`
    ExploreRecursiveEdge,
}

impl Selector {
    /// Variant name, used in validation messages and logs
    #[must_use]
    pub const fn variant_name(&self) -> &'static str {
        match self {
            Selector::Matcher { .. } => "Matcher",
            Selector::ExploreAll { .. } => "ExploreAll",
            Selector::ExploreFields { .. } => "ExploreFields",
            Selector::ExploreIndex { .. } => "ExploreIndex",
            Selector::ExploreRange { .. } => "ExploreRange",
            Selector::ExploreRecursive { .. } => "ExploreRecursive",
            Selector::ExploreUnion { .. } => "ExploreUnion",
            Selector::ExploreConditional { .. } => "ExploreConditional",
            Selector::ExploreRecursiveEdge => "ExploreRecursiveEdge",
        }
    }

    /// Whether applying this selector moves to a child node
    #[must_use]
    pub const fn descends(&self) -> bool {
        match self {
            Selector::ExploreAll { .. }
            | Selector::ExploreFields { .. }
            | Selector::ExploreIndex { .. }
            | Selector::ExploreRange { .. } => true,
            Selector::Matcher { .. }
            | Selector::ExploreRecursive { .. }
            | Selector::ExploreUnion { .. }
            | Selector::ExploreConditional { .. }
            | Selector::ExploreRecursiveEdge => false,
        }
    }

    /// Direct sub-selectors in declaration order
    #[must_use]
    pub fn children(&self) -> Vec<&Selector> {
        match self {
            Selector::Matcher { .. } | Selector::ExploreRecursiveEdge => Vec::new(),
            Selector::ExploreAll { next }
            | Selector::ExploreIndex { next, .. }
            | Selector::ExploreRange { next, .. }
            | Selector::ExploreConditional { next, .. } => vec![next.as_ref()],
            Selector::ExploreFields { fields } => fields.iter().map(|(_, s)| s).collect(),
            Selector::ExploreRecursive { sequence, .. } => vec![sequence.as_ref()],
            Selector::ExploreUnion { list } => list.iter().collect(),
        }
    }
}
