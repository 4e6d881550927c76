//! Traversal results

use std::sync::Arc;

use serde::Serialize;

use crate::path::Path;

/// A node selected by a traversal
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Match<N> {
    /// Path from the traversal root
    pub path: Path,
    /// The matched node
    pub node: N,
    /// Label of the matcher that produced this match
    pub label: Option<Arc<str>>,
}

impl<N> Match<N> {
    #[inline]
    #[must_use]
    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    /// Apply a function to the node, keeping path and label
    pub fn map<M>(self, f: impl FnOnce(N) -> M) -> Match<M> {
        Match {
            path: self.path,
            node: f(self.node),
            label: self.label,
        }
    }
}
