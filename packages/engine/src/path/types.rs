//! Core types for traversal paths

use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

use serde::ser::SerializeSeq;
use serde::{Deserialize, Serialize, Serializer};

/// Individual step from a node to one of its children
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PathSegment {
    /// Map field access (`['field']`)
    Field(String),
    /// List index access (`[index]`)
    Index(usize),
}

impl PathSegment {
    /// Field name, if this segment addresses a map field
    #[inline]
    #[must_use]
    pub fn as_field(&self) -> Option<&str> {
        match self {
            PathSegment::Field(name) => Some(name),
            PathSegment::Index(_) => None,
        }
    }

    /// List index, if this segment addresses a list element
    #[inline]
    #[must_use]
    pub fn as_index(&self) -> Option<usize> {
        match self {
            PathSegment::Field(_) => None,
            PathSegment::Index(index) => Some(*index),
        }
    }
}

impl From<&str> for PathSegment {
    fn from(name: &str) -> Self {
        PathSegment::Field(name.to_string())
    }
}

impl From<String> for PathSegment {
    fn from(name: String) -> Self {
        PathSegment::Field(name)
    }
}

impl From<usize> for PathSegment {
    fn from(index: usize) -> Self {
        PathSegment::Index(index)
    }
}

impl fmt::Display for PathSegment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PathSegment::Field(name) => {
                f.write_str("['")?;
                for ch in name.chars() {
                    if ch == '\'' || ch == '\\' {
                        f.write_str("\\")?;
                    }
                    write!(f, "{ch}")?;
                }
                f.write_str("']")
            }
            PathSegment::Index(index) => write!(f, "[{index}]"),
        }
    }
}

/// Persistent path from the traversal root to a node
///
/// Cloning is O(1) and appending a segment allocates one link that points at
/// the shared parent.
#[derive(Clone, Default)]
pub struct Path {
    pub(crate) tail: Option<Arc<PathLink>>,
}

pub(crate) struct PathLink {
    pub(crate) segment: PathSegment,
    pub(crate) parent: Path,
    pub(crate) depth: usize,
}

impl Path {
    /// The empty path addressing the traversal root (`$`)
    #[inline]
    #[must_use]
    pub fn root() -> Self {
        Self { tail: None }
    }

    /// Check if this is the root path
    #[inline]
    #[must_use]
    pub fn is_root(&self) -> bool {
        self.tail.is_none()
    }

    /// Number of segments in the path
    #[inline]
    #[must_use]
    pub fn depth(&self) -> usize {
        self.tail.as_ref().map_or(0, |link| link.depth)
    }

    /// Last segment, `None` for the root
    #[inline]
    #[must_use]
    pub fn last(&self) -> Option<&PathSegment> {
        self.tail.as_ref().map(|link| &link.segment)
    }

    /// Segments from root to leaf
    #[must_use]
    pub fn segments(&self) -> Vec<PathSegment> {
        let mut segments: Vec<PathSegment> = self.iter_rev().cloned().collect();
        segments.reverse();
        segments
    }

    /// Segments from leaf back to root
    pub(crate) fn iter_rev(&self) -> ReverseSegments<'_> {
        ReverseSegments {
            next: self.tail.as_deref(),
        }
    }
}

pub(crate) struct ReverseSegments<'a> {
    next: Option<&'a PathLink>,
}

impl<'a> Iterator for ReverseSegments<'a> {
    type Item = &'a PathSegment;

    fn next(&mut self) -> Option<Self::Item> {
        let link = self.next?;
        self.next = link.parent.tail.as_deref();
        Some(&link.segment)
    }
}

impl PartialEq for Path {
    fn eq(&self, other: &Self) -> bool {
        match (&self.tail, &other.tail) {
            (None, None) => true,
            (Some(a), Some(b)) if Arc::ptr_eq(a, b) => true,
            (Some(a), Some(b)) => {
                a.depth == b.depth && self.iter_rev().zip(other.iter_rev()).all(|(x, y)| x == y)
            }
            _ => false,
        }
    }
}

impl Eq for Path {}

impl Hash for Path {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.depth().hash(state);
        for segment in self.iter_rev() {
            segment.hash(state);
        }
    }
}

// Long chains would otherwise drop recursively, one stack frame per segment.
impl Drop for Path {
    fn drop(&mut self) {
        let mut next = self.tail.take();
        while let Some(link) = next {
            match Arc::try_unwrap(link) {
                Ok(mut owned) => next = owned.parent.tail.take(),
                Err(_) => break,
            }
        }
    }
}

impl FromIterator<PathSegment> for Path {
    fn from_iter<I: IntoIterator<Item = PathSegment>>(iter: I) -> Self {
        iter.into_iter()
            .fold(Path::root(), |path, segment| path.child(segment))
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("$")?;
        for segment in self.segments() {
            write!(f, "{segment}")?;
        }
        Ok(())
    }
}

impl fmt::Debug for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Path({self})")
    }
}

impl Serialize for Path {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let segments = self.segments();
        let mut seq = serializer.serialize_seq(Some(segments.len()))?;
        for segment in &segments {
            seq.serialize_element(segment)?;
        }
        seq.end()
    }
}
