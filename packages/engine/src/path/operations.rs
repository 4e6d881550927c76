//! Path operations and relationships
//!
//! Methods for extending paths, finding parents, and determining
//! relationships between paths.

use std::sync::Arc;

use super::types::{Path, PathLink, PathSegment};

impl Path {
    /// Create a child path by appending a segment
    #[inline]
    #[must_use]
    pub fn child(&self, segment: PathSegment) -> Self {
        let depth = self.depth() + 1;
        Self {
            tail: Some(Arc::new(PathLink {
                segment,
                parent: self.clone(),
                depth,
            })),
        }
    }

    /// Create a child path by appending a field access
    #[inline]
    #[must_use]
    pub fn child_field(&self, name: &str) -> Self {
        self.child(PathSegment::Field(name.to_string()))
    }

    /// Create a child path by appending a list index access
    #[inline]
    #[must_use]
    pub fn child_index(&self, index: usize) -> Self {
        self.child(PathSegment::Index(index))
    }

    /// Get the parent path (all segments except the last)
    #[inline]
    #[must_use]
    pub fn parent(&self) -> Option<Self> {
        self.tail.as_ref().map(|link| link.parent.clone())
    }

    /// Ancestor of this path with exactly `depth` segments
    #[must_use]
    pub fn truncate(&self, depth: usize) -> Option<Self> {
        let mut current = self.clone();
        while current.depth() > depth {
            current = current.parent()?;
        }
        (current.depth() == depth).then_some(current)
    }

    /// Check if this path is a descendant of another path
    #[inline]
    #[must_use]
    pub fn is_descendant_of(&self, ancestor: &Path) -> bool {
        if self.depth() <= ancestor.depth() {
            return false;
        }

        self.truncate(ancestor.depth())
            .is_some_and(|prefix| &prefix == ancestor)
    }

    /// Check if this path is an ancestor of another path
    #[inline]
    #[must_use]
    pub fn is_ancestor_of(&self, descendant: &Path) -> bool {
        descendant.is_descendant_of(self)
    }
}
