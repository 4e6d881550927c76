//! Fluent `SelectorBuilder`
//!
//! Describes a selector from the outside in, the way a path reads: each
//! navigation step wraps whatever comes after it, and a terminal method
//! closes the chain and returns the finished [`Selector`].

use selwalk_engine::{Condition, RecursionLimit, Selector};

/// One pending navigation step, wrapped around the terminal selector
#[derive(Debug, Clone, PartialEq)]
enum Step {
    Field(String),
    All,
    Index(i64),
    Range(i64, i64),
    When(Condition),
}

/// Fluent builder for nested explore selectors
///
/// Navigation methods (`field`, `all`, `index`, `range`, `when`) record a
/// step; terminal methods (`matcher`, `then`, `union`, `recurse`, ...)
/// produce the selector with every recorded step wrapped around it.
///
/// # Examples
/// ```rust
/// use selwalk::{Selector, SelectorBuilder};
///
/// let built = SelectorBuilder::new().field("a").all().matcher();
/// let manual = Selector::explore_fields([("a", Selector::explore_all(Selector::matcher()))]);
/// assert_eq!(built, manual);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
#[must_use = "a SelectorBuilder does nothing until a terminal method is called"]
pub struct SelectorBuilder {
    steps: Vec<Step>,
}

impl SelectorBuilder {
    /// Start an empty chain positioned at the traversal root
    pub fn new() -> Self {
        Self::default()
    }

    /// Descend into a single map field
    ///
    /// # Arguments
    /// * `name` - Field name to follow
    ///
    /// # Returns
    /// `Self` for method chaining
    pub fn field(mut self, name: impl Into<String>) -> Self {
        self.steps.push(Step::Field(name.into()));
        self
    }

    /// Descend into every child of a list or map
    pub fn all(mut self) -> Self {
        self.steps.push(Step::All);
        self
    }

    /// Descend into one list element
    ///
    /// # Arguments
    /// * `index` - Zero-based element index; negative indices are rejected by
    ///   validation
    pub fn index(mut self, index: i64) -> Self {
        self.steps.push(Step::Index(index));
        self
    }

    /// Descend into the list elements in `start..end`
    pub fn range(mut self, start: i64, end: i64) -> Self {
        self.steps.push(Step::Range(start, end));
        self
    }

    /// Continue only where `condition` holds
    pub fn when(mut self, condition: Condition) -> Self {
        self.steps.push(Step::When(condition));
        self
    }

    /// Number of navigation steps recorded so far
    #[must_use]
    pub fn depth(&self) -> usize {
        self.steps.len()
    }

    /// Close the chain with an arbitrary selector
    ///
    /// # Arguments
    /// * `next` - Selector applied at the end of the recorded steps
    ///
    /// # Returns
    /// The complete `Selector`
    #[must_use]
    pub fn then(self, next: Selector) -> Selector {
        self.steps
            .into_iter()
            .rev()
            .fold(next, |inner, step| match step {
                Step::Field(name) => Selector::explore_fields([(name, inner)]),
                Step::All => Selector::explore_all(inner),
                Step::Index(index) => Selector::explore_index(index, inner),
                Step::Range(start, end) => Selector::explore_range(start, end, inner),
                Step::When(condition) => Selector::explore_conditional(condition, inner),
            })
    }

    /// Match the node reached by the chain
    #[must_use]
    pub fn matcher(self) -> Selector {
        self.then(Selector::matcher())
    }

    /// Match the node reached by the chain, tagging matches with `label`
    #[must_use]
    pub fn labeled(self, label: &str) -> Selector {
        self.then(Selector::labeled_matcher(label))
    }

    /// Match the node reached by the chain only where `condition` holds
    #[must_use]
    pub fn matcher_if(self, condition: Condition) -> Selector {
        self.then(Selector::matcher_if(condition))
    }

    /// Apply every branch at the node reached by the chain
    #[must_use]
    pub fn union(self, branches: impl IntoIterator<Item = Selector>) -> Selector {
        self.then(Selector::explore_union(branches))
    }

    /// Explore several fields, each with its own selector
    #[must_use]
    pub fn fields<K, I>(self, fields: I) -> Selector
    where
        K: Into<String>,
        I: IntoIterator<Item = (K, Selector)>,
    {
        self.then(Selector::explore_fields(fields))
    }

    /// Start a recursion at the node reached by the chain
    ///
    /// `sequence` must contain at least one [`edge`](Self::edge) below a
    /// descending step for the recursion to go anywhere.
    #[must_use]
    pub fn recurse(self, limit: RecursionLimit, sequence: Selector) -> Selector {
        self.then(Selector::explore_recursive(limit, sequence))
    }

    /// Like [`recurse`](Self::recurse), but expansions stop where `stop_at`
    /// holds
    #[must_use]
    pub fn recurse_until(
        self,
        limit: RecursionLimit,
        sequence: Selector,
        stop_at: Condition,
    ) -> Selector {
        self.then(Selector::explore_recursive_until(limit, sequence, stop_at))
    }

    /// Match the node reached by the chain and all of its descendants
    #[must_use]
    pub fn descendants(self, limit: RecursionLimit) -> Selector {
        self.then(Selector::explore_all_recursively(limit))
    }

    /// Jump back to the innermost enclosing recursion's sequence
    #[must_use]
    pub fn edge(self) -> Selector {
        self.then(Selector::recursive_edge())
    }
}
