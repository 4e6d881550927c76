//! Serializable traversal reports
//!
//! A [`WalkReport`] is the complete outcome of one traversal: every match
//! plus the engine counters. Indexers serialize it with `serde_json`.

use selwalk_engine::{Match, WalkStats};
use serde::Serialize;

/// All matches of a finished traversal with its statistics
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WalkReport<N> {
    pub matches: Vec<Match<N>>,
    pub stats: WalkStats,
}

impl<N> WalkReport<N> {
    /// Number of matches
    #[must_use]
    pub fn len(&self) -> usize {
        self.matches.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.matches.is_empty()
    }

    /// Matches produced by matchers carrying `label`
    pub fn labeled<'r>(&'r self, label: &'r str) -> impl Iterator<Item = &'r Match<N>> + 'r {
        self.matches
            .iter()
            .filter(move |found| found.label() == Some(label))
    }
}
