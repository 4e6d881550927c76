//! `Walker` entry point
//!
//! Bundles a [`WalkConfig`] with a condition evaluator, validates selectors
//! before use and starts traversals as iterators or streams.

use futures::Stream;
use selwalk_engine::{
    ConditionEvaluator, ConfigResult, JsonAccess, Match, NodeAccess, Path, Selector,
    SelectorMetrics, SelectorResult, StandardConditions, Validator, Walk, WalkConfig,
};
use serde_json::Value;

use crate::report::WalkReport;

/// Configured traversal entry point
///
/// Type parameter `C` is the condition evaluator. [`Walker::new`] starts
/// with [`StandardConditions`]; [`Walker::with_conditions`] swaps in any
/// other [`ConditionEvaluator`].
///
/// # Examples
/// ```rust
/// use selwalk::{JsonAccess, SelectorBuilder, WalkConfig, Walker};
/// use serde_json::json;
///
/// let doc = json!({"items": [1, 2, 3]});
/// let selector = SelectorBuilder::new().field("items").range(0, 2).matcher();
/// let walker = Walker::new()
///     .config(WalkConfig::new().with_match_limit(10))
///     .expect("non-zero limits");
///
/// let found = walker
///     .walk(&doc, &selector, &JsonAccess)
///     .expect("valid selector")
///     .into_matches()
///     .expect("json access never fails");
/// assert_eq!(found.len(), 2);
/// ```
#[derive(Debug, Clone)]
pub struct Walker<C> {
    /// Limits applied to every traversal started by this walker
    pub(crate) config: WalkConfig,
    /// Evaluator consulted for every condition
    pub(crate) conditions: C,
    /// Debug logging enabled flag
    pub(crate) debug_enabled: bool,
}

impl<N> Walker<StandardConditions<N>> {
    /// Walker with default limits and the built-in condition forms
    #[must_use]
    pub fn new() -> Self {
        Self::with_conditions(StandardConditions::new())
    }

    /// Register a predicate for [`Condition::Named`](selwalk_engine::Condition::Named)
    ///
    /// # Arguments
    /// * `name` - Name used in `Condition::named`
    /// * `predicate` - Called with the node and its path
    ///
    /// # Returns
    /// `Self` for method chaining
    #[must_use]
    pub fn condition<F>(mut self, name: impl Into<String>, predicate: F) -> Self
    where
        F: Fn(&N, &Path) -> bool + Send + Sync + 'static,
    {
        self.conditions.register(name, predicate);
        self
    }
}

impl<N> Default for Walker<StandardConditions<N>> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C> Walker<C> {
    /// Walker with default limits and a custom condition evaluator
    #[must_use]
    pub fn with_conditions(conditions: C) -> Self {
        Self {
            config: WalkConfig::default(),
            conditions,
            debug_enabled: false,
        }
    }

    /// Replace the traversal limits
    ///
    /// # Errors
    /// Returns a `ConfigurationError` when a limit is zero.
    pub fn config(mut self, config: WalkConfig) -> ConfigResult<Self> {
        config.validate()?;
        self.config = config;
        Ok(self)
    }

    /// Enable debug logging for every traversal started by this walker
    #[must_use]
    pub fn debug(mut self) -> Self {
        self.debug_enabled = true;
        self
    }

    /// Current traversal limits
    #[must_use]
    pub fn walk_config(&self) -> &WalkConfig {
        &self.config
    }

    /// The condition evaluator
    pub fn conditions(&self) -> &C {
        &self.conditions
    }

    /// Validate `selector` and report its complexity
    ///
    /// Unbounded recursion and recursive edges that do not descend are legal
    /// but logged as warnings, since either can walk until the node budget
    /// runs out.
    ///
    /// # Errors
    /// Returns an `InvalidSelector` error for malformed selectors.
    pub fn validate(&self, selector: &Selector) -> SelectorResult<SelectorMetrics> {
        let metrics = selector.validate()?;
        if metrics.unbounded_recursion && self.config.node_budget.is_none() {
            tracing::warn!(
                selector = %selector,
                "Selector recurses without depth limit or stop condition and no node budget is set"
            );
        }
        if metrics.stationary_edge_count > 0 {
            tracing::warn!(
                selector = %selector,
                edges = metrics.stationary_edge_count,
                "Recursive edges re-apply their sequence without descending"
            );
        }
        if self.debug_enabled {
            tracing::debug!(selector = %selector, ?metrics, "Selector validated");
        }
        Ok(metrics)
    }

    /// Start a lazy traversal of `root`
    ///
    /// The selector is validated first unless the configuration was built
    /// with [`WalkConfig::skip_validation`].
    ///
    /// # Errors
    /// Returns an `InvalidSelector` error when validation is enabled and
    /// fails. Errors met during the traversal are yielded by the iterator.
    pub fn walk<'s, 'a, N, A>(
        &'a self,
        root: N,
        selector: &'s Selector,
        access: &'a A,
    ) -> SelectorResult<Walk<'s, 'a, N, A, C>>
    where
        N: Clone,
        A: NodeAccess<N> + ?Sized,
        C: ConditionEvaluator<N>,
    {
        if self.config.validate_before_walk {
            self.validate(selector)?;
        }
        if self.debug_enabled {
            tracing::debug!(selector = %selector, config = ?self.config, "Starting traversal");
        }
        Ok(Walk::new(
            root,
            selector,
            access,
            &self.conditions,
            self.config,
        ))
    }

    /// Start a traversal consumed as a [`Stream`]
    ///
    /// The stream is driven by the same lazy iterator as [`walk`](Self::walk);
    /// each poll advances the traversal to the next match.
    ///
    /// # Errors
    /// Same as [`walk`](Self::walk).
    pub fn walk_stream<'s, 'a, N, A>(
        &'a self,
        root: N,
        selector: &'s Selector,
        access: &'a A,
    ) -> SelectorResult<impl Stream<Item = SelectorResult<Match<N>>>>
    where
        N: Clone,
        A: NodeAccess<N> + ?Sized,
        C: ConditionEvaluator<N>,
    {
        Ok(futures::stream::iter(self.walk(root, selector, access)?))
    }

    /// Run a traversal to completion and keep its statistics
    ///
    /// # Errors
    /// Returns validation errors, or the first error met during the
    /// traversal.
    pub fn report<N, A>(
        &self,
        root: N,
        selector: &Selector,
        access: &A,
    ) -> SelectorResult<WalkReport<N>>
    where
        N: Clone,
        A: NodeAccess<N> + ?Sized,
        C: ConditionEvaluator<N>,
    {
        let mut walk = self.walk(root, selector, access)?;
        let mut matches = Vec::new();
        for found in walk.by_ref() {
            matches.push(found?);
        }
        Ok(WalkReport {
            matches,
            stats: *walk.stats(),
        })
    }

    /// Walk a JSON document and collect every match
    ///
    /// # Errors
    /// Returns validation errors, or the first error met during the
    /// traversal.
    pub fn walk_json<'v>(
        &self,
        root: &'v Value,
        selector: &Selector,
    ) -> SelectorResult<Vec<Match<&'v Value>>>
    where
        C: ConditionEvaluator<&'v Value>,
    {
        self.walk(root, selector, &JsonAccess)?.into_matches()
    }
}
