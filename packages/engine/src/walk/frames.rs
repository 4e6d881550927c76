//! Recursion frame tracker
//!
//! Every active `ExploreRecursive` owns one frame holding its remaining depth
//! budget, its `sequence` and its optional `stop_at` condition. The stack is
//! persistent: `push`, `pop` and `decrement` return new stacks and leave the
//! receiver untouched. Each pending visit captures the stack that was active
//! when it was scheduled, so a branch that fails or finishes can never leave
//! stale frames behind for its siblings.

use std::sync::Arc;

use crate::selector::{Condition, RecursionLimit, Selector};

/// One active `ExploreRecursive`
#[derive(Debug, Clone, Copy)]
pub struct Frame<'s> {
    /// Edge expansions still allowed
    pub remaining: RecursionLimit,
    /// Selector re-applied at each expansion
    pub sequence: &'s Selector,
    /// Expansion stops at nodes where this holds
    pub stop_at: Option<&'s Condition>,
}

/// Persistent stack of recursion frames, innermost on top
#[derive(Debug, Clone, Default)]
pub struct FrameStack<'s> {
    top: Option<Arc<FrameLink<'s>>>,
}

#[derive(Debug)]
struct FrameLink<'s> {
    frame: Frame<'s>,
    below: FrameStack<'s>,
}

impl<'s> FrameStack<'s> {
    #[must_use]
    pub fn new() -> Self {
        Self { top: None }
    }

    /// Stack with a new innermost frame
    #[must_use]
    pub fn push(
        &self,
        limit: RecursionLimit,
        sequence: &'s Selector,
        stop_at: Option<&'s Condition>,
    ) -> Self {
        self.with_top(Frame {
            remaining: limit,
            sequence,
            stop_at,
        })
    }

    /// Stack without the innermost frame
    #[must_use]
    pub fn pop(&self) -> Self {
        self.top
            .as_ref()
            .map_or_else(Self::new, |link| link.below.clone())
    }

    /// Innermost frame, the target of an `ExploreRecursiveEdge`
    #[must_use]
    pub fn current(&self) -> Option<&Frame<'s>> {
        self.top.as_ref().map(|link| &link.frame)
    }

    /// Stack whose innermost frame has one expansion less
    ///
    /// Returns `None` when there is no frame or the innermost one is
    /// exhausted.
    #[must_use]
    pub fn decrement(&self) -> Option<Self> {
        let link = self.top.as_ref()?;
        let remaining = link.frame.remaining.decremented()?;
        Some(link.below.with_top(Frame {
            remaining,
            ..link.frame
        }))
    }

    /// Number of active frames
    #[must_use]
    pub fn depth(&self) -> usize {
        let mut depth = 0;
        let mut cursor = self.top.as_deref();
        while let Some(link) = cursor {
            depth += 1;
            cursor = link.below.top.as_deref();
        }
        depth
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.top.is_none()
    }

    fn with_top(&self, frame: Frame<'s>) -> Self {
        Self {
            top: Some(Arc::new(FrameLink {
                frame,
                below: self.clone(),
            })),
        }
    }
}
