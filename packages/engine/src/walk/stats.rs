//! Traversal statistics

use serde::Serialize;

/// Counters for one traversal
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct WalkStats {
    /// (selector, node) pairs visited
    pub visits: u64,
    /// Matches emitted
    pub matches: u64,
    /// Matches dropped by union de-duplication
    pub duplicates_suppressed: u64,
    /// `ExploreRecursiveEdge` expansions performed
    pub edges_expanded: u64,
    /// Edges not expanded because the budget was exhausted or `stop_at` held
    pub edges_stopped: u64,
}
