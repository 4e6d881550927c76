//! Union combiner
//!
//! Branches of an `ExploreUnion` run in listed order, so the combined stream
//! is branch 0's matches, then branch 1's, and so on. The combiner drops every
//! match whose path was already reported, keeping the first one (and with it
//! the first label).
//!
//! Two visits can only reach the same path if their histories split at a
//! union: every other fan-out appends distinct segments and paths never
//! shrink. A single traversal-wide set of reported paths therefore gives
//! exactly per-union de-duplication, and matches produced outside any union
//! never need to be recorded.

use hashbrown::HashSet;

use crate::path::Path;

/// De-duplicates union matches by path for one traversal
#[derive(Debug, Default)]
pub struct UnionCombiner {
    seen: HashSet<Path>,
}

impl UnionCombiner {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Decide whether a match produced inside `union_nesting` unions is new
    ///
    /// Returns `false` for a duplicate, which the caller drops.
    pub fn admit(&mut self, union_nesting: u32, path: &Path) -> bool {
        union_nesting == 0 || self.seen.insert(path.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_seen_wins() {
        let mut combiner = UnionCombiner::new();
        let a = Path::root().child_field("a");
        let b = Path::root().child_field("b");

        assert!(combiner.admit(1, &a));
        assert!(combiner.admit(2, &b));
        assert!(!combiner.admit(1, &a));
        assert!(!combiner.admit(3, &Path::root().child_field("b")));
        assert!(combiner.admit(1, &a.child_index(0)));
    }

    #[test]
    fn test_matches_outside_unions_are_not_recorded() {
        let mut combiner = UnionCombiner::new();
        let root = Path::root();
        assert!(combiner.admit(0, &root));
        assert!(combiner.admit(0, &root));
        // an unrecorded path is still new to the first union that reports it
        assert!(combiner.admit(1, &root));
        assert!(!combiner.admit(1, &root));
    }
}
