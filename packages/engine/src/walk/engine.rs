//! Selector traversal engine
//!
//! Depth-first interpretation of a selector over a node graph, driven by an
//! explicit LIFO work stack instead of host recursion. Each work item is one
//! (selector, node) visit carrying its path, the recursion frames active when
//! it was scheduled and the number of unions it runs inside. Children of a
//! visit are pushed in reverse so they pop in native order, which makes the
//! match order identical to a recursive descent.
//!
//! The walk is lazy: [`Walk::next`] processes visits only until the next
//! match, and at most one node's immediate children are expanded ahead of the
//! consumer.

use std::iter::FusedIterator;

use super::frames::FrameStack;
use super::matches::Match;
use super::stats::WalkStats;
use super::union::UnionCombiner;
use crate::condition::ConditionEvaluator;
use crate::config::WalkConfig;
use crate::error::{SelectorResult, budget_exceeded_error};
use crate::node::{NodeAccess, NodeKind};
use crate::path::{Path, PathSegment};
use crate::selector::{Condition, Selector};

struct Visit<'s, N> {
    selector: &'s Selector,
    node: N,
    path: Path,
    frames: FrameStack<'s>,
    union_nesting: u32,
}

impl<'s, N> Visit<'s, N> {
    /// Same node and scope, different selector
    fn with_selector(self, selector: &'s Selector) -> Self {
        Self { selector, ..self }
    }
}

/// Lazy sequence of matches for one traversal
///
/// Yields `Ok(Match)` in depth-first order. A fatal node-access, condition or
/// budget error is yielded once as `Err`, after which the iterator is
/// exhausted. Dropping the iterator cancels the traversal.
pub struct Walk<'s, 'a, N, A: ?Sized, C: ?Sized> {
    access: &'a A,
    conditions: &'a C,
    config: WalkConfig,
    pending: Vec<Visit<'s, N>>,
    unions: UnionCombiner,
    stats: WalkStats,
    done: bool,
}

impl<'s, 'a, N, A, C> Walk<'s, 'a, N, A, C>
where
    N: Clone,
    A: NodeAccess<N> + ?Sized,
    C: ConditionEvaluator<N> + ?Sized,
{
    /// Start a traversal of `root` with `selector`
    ///
    /// The selector is assumed to be validated; see
    /// [`validate`](crate::validator::validate).
    pub fn new(
        root: N,
        selector: &'s Selector,
        access: &'a A,
        conditions: &'a C,
        config: WalkConfig,
    ) -> Self {
        log::debug!("Starting walk with {selector}");
        Self {
            access,
            conditions,
            config,
            pending: vec![Visit {
                selector,
                node: root,
                path: Path::root(),
                frames: FrameStack::new(),
                union_nesting: 0,
            }],
            unions: UnionCombiner::new(),
            stats: WalkStats::default(),
            done: false,
        }
    }

    /// Counters collected so far
    pub fn stats(&self) -> &WalkStats {
        &self.stats
    }

    /// Whether the sequence has ended
    pub fn is_finished(&self) -> bool {
        self.done
    }

    /// Drain the remaining matches, stopping at the first error
    ///
    /// # Errors
    /// Returns the first fatal error yielded by the traversal.
    pub fn into_matches(self) -> SelectorResult<Vec<Match<N>>> {
        self.collect()
    }

    fn holds(&self, condition: &Condition, node: &N, path: &Path) -> SelectorResult<bool> {
        self.conditions.evaluate(condition, node, path, self.access)
    }

    /// Push visits so that the first one is processed first
    fn schedule<I>(&mut self, visits: I)
    where
        I: IntoIterator<Item = Visit<'s, N>>,
        I::IntoIter: DoubleEndedIterator,
    {
        self.pending.extend(visits.into_iter().rev());
    }

    fn step(&mut self, visit: Visit<'s, N>) -> SelectorResult<Option<Match<N>>> {
        self.stats.visits += 1;
        if let Some(budget) = self.config.node_budget {
            if self.stats.visits > budget {
                return Err(budget_exceeded_error(budget, &visit.path));
            }
        }
        log::trace!("Visit {} at {}", visit.selector.variant_name(), visit.path);

        match visit.selector {
            Selector::Matcher { only_if, label } => {
                if let Some(condition) = only_if {
                    if !self.holds(condition, &visit.node, &visit.path)? {
                        return Ok(None);
                    }
                }
                if !self.unions.admit(visit.union_nesting, &visit.path) {
                    self.stats.duplicates_suppressed += 1;
                    return Ok(None);
                }
                self.stats.matches += 1;
                return Ok(Some(Match {
                    path: visit.path,
                    node: visit.node,
                    label: label.clone(),
                }));
            }

            Selector::ExploreAll { next } => {
                if self.access.kind(&visit.node)? == NodeKind::Scalar {
                    return Ok(None);
                }
                let children = self.access.children(&visit.node)?;
                let Visit {
                    path,
                    frames,
                    union_nesting,
                    ..
                } = visit;
                self.schedule(children.into_iter().map(|(segment, child)| Visit {
                    selector: next,
                    node: child,
                    path: path.child(segment),
                    frames: frames.clone(),
                    union_nesting,
                }));
            }

            Selector::ExploreFields { fields } => {
                if self.access.kind(&visit.node)? != NodeKind::Map {
                    return Ok(None);
                }
                let mut visits = Vec::with_capacity(fields.len());
                for (name, next) in fields {
                    let key = PathSegment::Field(name.clone());
                    if let Some(child) = self.access.child(&visit.node, &key)? {
                        visits.push(Visit {
                            selector: next,
                            node: child,
                            path: visit.path.child(key),
                            frames: visit.frames.clone(),
                            union_nesting: visit.union_nesting,
                        });
                    }
                }
                self.schedule(visits);
            }

            Selector::ExploreIndex { index, next } => {
                let Ok(index) = usize::try_from(*index) else {
                    return Ok(None);
                };
                if self.access.kind(&visit.node)? != NodeKind::List {
                    return Ok(None);
                }
                let key = PathSegment::Index(index);
                if let Some(child) = self.access.child(&visit.node, &key)? {
                    self.pending.push(Visit {
                        selector: next,
                        node: child,
                        path: visit.path.child(key),
                        frames: visit.frames,
                        union_nesting: visit.union_nesting,
                    });
                }
            }

            Selector::ExploreRange { start, end, next } => {
                if self.access.kind(&visit.node)? != NodeKind::List {
                    return Ok(None);
                }
                let len = self.access.len(&visit.node)?.unwrap_or(0);
                let start = usize::try_from(*start).unwrap_or(0);
                let end = usize::try_from(*end).unwrap_or(0).min(len);
                let mut visits = Vec::with_capacity(end.saturating_sub(start));
                for index in start..end {
                    let key = PathSegment::Index(index);
                    if let Some(child) = self.access.child(&visit.node, &key)? {
                        visits.push(Visit {
                            selector: next,
                            node: child,
                            path: visit.path.child(key),
                            frames: visit.frames.clone(),
                            union_nesting: visit.union_nesting,
                        });
                    }
                }
                self.schedule(visits);
            }

            Selector::ExploreRecursive {
                limit,
                sequence,
                stop_at,
            } => {
                let frames = visit.frames.push(*limit, sequence, stop_at.as_ref());
                self.pending.push(Visit {
                    frames,
                    ..visit.with_selector(sequence)
                });
            }

            Selector::ExploreRecursiveEdge => {
                let Some(frame) = visit.frames.current().copied() else {
                    log::warn!(
                        "Recursive edge at {} has no enclosing frame; was the selector validated?",
                        visit.path
                    );
                    return Ok(None);
                };
                let Some(frames) = visit.frames.decrement() else {
                    self.stats.edges_stopped += 1;
                    return Ok(None);
                };
                if let Some(stop_at) = frame.stop_at {
                    if self.holds(stop_at, &visit.node, &visit.path)? {
                        log::trace!("Recursion stopped at {} by {stop_at}", visit.path);
                        self.stats.edges_stopped += 1;
                        return Ok(None);
                    }
                }
                self.stats.edges_expanded += 1;
                self.pending.push(Visit {
                    frames,
                    ..visit.with_selector(frame.sequence)
                });
            }

            Selector::ExploreUnion { list } => {
                let union_nesting = visit.union_nesting.saturating_add(1);
                self.schedule(list.iter().map(|branch| Visit {
                    selector: branch,
                    node: visit.node.clone(),
                    path: visit.path.clone(),
                    frames: visit.frames.clone(),
                    union_nesting,
                }));
            }

            Selector::ExploreConditional { condition, next } => {
                if self.holds(condition, &visit.node, &visit.path)? {
                    self.pending.push(visit.with_selector(next));
                }
            }
        }

        Ok(None)
    }

    fn finish(&mut self) {
        if self.done {
            return;
        }
        self.done = true;
        self.pending.clear();
        log::debug!(
            "Walk finished: {} visits, {} matches, {} duplicates suppressed, {} edges expanded, {} edges stopped",
            self.stats.visits,
            self.stats.matches,
            self.stats.duplicates_suppressed,
            self.stats.edges_expanded,
            self.stats.edges_stopped
        );
    }
}

impl<'s, 'a, N, A, C> Iterator for Walk<'s, 'a, N, A, C>
where
    N: Clone,
    A: NodeAccess<N> + ?Sized,
    C: ConditionEvaluator<N> + ?Sized,
{
    type Item = SelectorResult<Match<N>>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        while let Some(visit) = self.pending.pop() {
            match self.step(visit) {
                Ok(Some(found)) => {
                    let limit_reached = self
                        .config
                        .match_limit
                        .is_some_and(|limit| self.stats.matches >= limit);
                    if limit_reached {
                        log::warn!(
                            "Walk stopped - match limit of {} reached",
                            self.stats.matches
                        );
                        self.finish();
                    }
                    return Some(Ok(found));
                }
                Ok(None) => {}
                Err(error) => {
                    log::debug!("Walk terminated by error: {error}");
                    self.finish();
                    return Some(Err(error));
                }
            }
        }

        self.finish();
        None
    }
}

impl<'s, 'a, N, A, C> FusedIterator for Walk<'s, 'a, N, A, C>
where
    N: Clone,
    A: NodeAccess<N> + ?Sized,
    C: ConditionEvaluator<N> + ?Sized,
{
}
