//! Traversal of node graphs with selectors
//!
//! [`walk`] starts a lazy, depth-first traversal and returns a [`Walk`]
//! iterator of matches. The recursion frame tracker ([`frames`]) and the
//! union combiner ([`union`]) hold the per-traversal state the engine
//! consults while it interprets the selector.

pub mod engine;
pub mod frames;
pub mod matches;
pub mod stats;
pub mod union;

pub use engine::Walk;
pub use frames::{Frame, FrameStack};
pub use matches::Match;
pub use stats::WalkStats;
pub use union::UnionCombiner;

use crate::condition::ConditionEvaluator;
use crate::config::WalkConfig;
use crate::node::NodeAccess;
use crate::selector::Selector;

/// Walk `root` with an already validated `selector` and default limits
pub fn walk<'s, 'a, N, A, C>(
    root: N,
    selector: &'s Selector,
    access: &'a A,
    conditions: &'a C,
) -> Walk<'s, 'a, N, A, C>
where
    N: Clone,
    A: NodeAccess<N> + ?Sized,
    C: ConditionEvaluator<N> + ?Sized,
{
    Walk::new(root, selector, access, conditions, WalkConfig::default())
}

/// Walk `root` with an already validated `selector` and explicit limits
pub fn walk_with_config<'s, 'a, N, A, C>(
    root: N,
    selector: &'s Selector,
    access: &'a A,
    conditions: &'a C,
    config: WalkConfig,
) -> Walk<'s, 'a, N, A, C>
where
    N: Clone,
    A: NodeAccess<N> + ?Sized,
    C: ConditionEvaluator<N> + ?Sized,
{
    Walk::new(root, selector, access, conditions, config)
}
