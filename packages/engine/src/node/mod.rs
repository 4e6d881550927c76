//! Node access capability
//!
//! The engine never looks inside nodes directly. Everything it needs (kind,
//! children, a single child, list length, and an optional textual rendering
//! for conditions) goes through [`NodeAccess`], supplied by the storage or
//! decoding layer.

pub mod json;

use serde::Serialize;

use crate::error::SelectorResult;
use crate::path::PathSegment;

pub use json::JsonAccess;

/// Classification of a node
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeKind {
    /// Leaf value without children
    Scalar,
    /// Children addressed by integer index
    List,
    /// Children addressed by field name
    Map,
}

/// Capability to inspect nodes of type `N`
///
/// Every method returns `Err` only for fatal failures (for example an
/// unreachable block store). Absent children are reported as `Ok(None)`;
/// asking a scalar for its children returns an empty list.
pub trait NodeAccess<N> {
    /// Classify a node
    fn kind(&self, node: &N) -> SelectorResult<NodeKind>;

    /// All children of a node in native, deterministic order
    fn children(&self, node: &N) -> SelectorResult<Vec<(PathSegment, N)>>;

    /// A single child, `None` if absent or if the key does not fit the kind
    fn child(&self, node: &N, key: &PathSegment) -> SelectorResult<Option<N>>;

    /// Number of elements of a list node, `None` for maps and scalars
    fn len(&self, node: &N) -> SelectorResult<Option<usize>> {
        match self.kind(node)? {
            NodeKind::List => Ok(Some(self.children(node)?.len())),
            NodeKind::Map | NodeKind::Scalar => Ok(None),
        }
    }

    /// Textual rendering of a scalar, used by text-matching conditions
    fn text(&self, _node: &N) -> SelectorResult<Option<String>> {
        Ok(None)
    }
}

impl<N, A> NodeAccess<N> for &A
where
    A: NodeAccess<N> + ?Sized,
{
    fn kind(&self, node: &N) -> SelectorResult<NodeKind> {
        (**self).kind(node)
    }

    fn children(&self, node: &N) -> SelectorResult<Vec<(PathSegment, N)>> {
        (**self).children(node)
    }

    fn child(&self, node: &N, key: &PathSegment) -> SelectorResult<Option<N>> {
        (**self).child(node, key)
    }

    fn len(&self, node: &N) -> SelectorResult<Option<usize>> {
        (**self).len(node)
    }

    fn text(&self, node: &N) -> SelectorResult<Option<String>> {
        (**self).text(node)
    }
}
