//! Condition predicates
//!
//! Conditions are opaque to the traversal engine: it only asks a
//! [`ConditionEvaluator`](crate::condition::ConditionEvaluator) whether one
//! holds at a (node, path) pair. This enum names the predicate forms the
//! standard evaluator understands; `Named` delegates to caller-registered
//! predicates.

use std::fmt;
use std::ops;

use regex::Regex;

use crate::error::{SelectorResult, invalid_selector_error};
use crate::node::NodeKind;

/// Compiled regular expression used by [`Condition::TextMatches`]
#[derive(Debug, Clone)]
pub struct Pattern(Regex);

impl Pattern {
    /// Compile a pattern
    ///
    /// # Errors
    /// Returns an `InvalidSelector` error when the regex does not compile.
    pub fn new(pattern: &str) -> SelectorResult<Self> {
        Regex::new(pattern)
            .map(Pattern)
            .map_err(|e| invalid_selector_error("Condition", format!("invalid pattern: {e}")))
    }

    #[inline]
    #[must_use]
    pub fn is_match(&self, text: &str) -> bool {
        self.0.is_match(text)
    }

    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl PartialEq for Pattern {
    fn eq(&self, other: &Self) -> bool {
        self.as_str() == other.as_str()
    }
}

/// Boolean predicate over (node, path)
#[derive(Debug, Clone, PartialEq)]
pub enum Condition {
    /// Always holds
    Always,
    /// Never holds
    Never,
    /// Node has the given kind
    IsKind(NodeKind),
    /// Node is a map containing the field
    HasField(String),
    /// Node has a textual rendering matching the pattern
    TextMatches(Pattern),
    /// Path has at least this many segments
    MinDepth(usize),
    /// Caller-registered predicate
    Named(String),
    /// Negation
    Not(Box<Condition>),
    /// Conjunction; empty holds
    All(Vec<Condition>),
    /// Disjunction; empty never holds
    Any(Vec<Condition>),
}

impl Condition {
    #[must_use]
    pub fn is_kind(kind: NodeKind) -> Self {
        Condition::IsKind(kind)
    }

    pub fn has_field(name: impl Into<String>) -> Self {
        Condition::HasField(name.into())
    }

    /// Text-matching condition
    ///
    /// # Errors
    /// Returns an `InvalidSelector` error when the regex does not compile.
    pub fn text_matches(pattern: &str) -> SelectorResult<Self> {
        Pattern::new(pattern).map(Condition::TextMatches)
    }

    #[must_use]
    pub fn min_depth(depth: usize) -> Self {
        Condition::MinDepth(depth)
    }

    pub fn named(name: impl Into<String>) -> Self {
        Condition::Named(name.into())
    }

    pub fn all(conditions: impl IntoIterator<Item = Condition>) -> Self {
        Condition::All(conditions.into_iter().collect())
    }

    pub fn any(conditions: impl IntoIterator<Item = Condition>) -> Self {
        Condition::Any(conditions.into_iter().collect())
    }
}

impl ops::Not for Condition {
    type Output = Condition;

    fn not(self) -> Self::Output {
        match self {
            Condition::Not(inner) => *inner,
            other => Condition::Not(Box::new(other)),
        }
    }
}

impl fmt::Display for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fn join(f: &mut fmt::Formatter<'_>, name: &str, items: &[Condition]) -> fmt::Result {
            write!(f, "{name}(")?;
            for (i, item) in items.iter().enumerate() {
                if i > 0 {
                    f.write_str(", ")?;
                }
                write!(f, "{item}")?;
            }
            f.write_str(")")
        }

        match self {
            Condition::Always => f.write_str("always"),
            Condition::Never => f.write_str("never"),
            Condition::IsKind(kind) => write!(f, "kind({kind:?})"),
            Condition::HasField(name) => write!(f, "has('{name}')"),
            Condition::TextMatches(pattern) => write!(f, "matches(/{}/)", pattern.as_str()),
            Condition::MinDepth(depth) => write!(f, "depth>={depth}"),
            Condition::Named(name) => write!(f, "@{name}"),
            Condition::Not(inner) => write!(f, "not({inner})"),
            Condition::All(items) => join(f, "all", items),
            Condition::Any(items) => join(f, "any", items),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    #[test]
    fn test_invalid_pattern_is_rejected() {
        let error = Condition::text_matches("(unclosed").expect_err("pattern must not compile");
        assert_eq!(error.kind, ErrorKind::InvalidSelector);
    }

    #[test]
    fn test_double_negation_collapses() {
        let condition = !!Condition::has_field("a");
        assert_eq!(condition, Condition::has_field("a"));
    }

    #[test]
    fn test_display() {
        let condition = Condition::all([
            Condition::is_kind(NodeKind::Map),
            !Condition::named("archived"),
            Condition::text_matches("^v[0-9]+$").expect("valid pattern"),
        ]);
        assert_eq!(
            condition.to_string(),
            "all(kind(Map), not(@archived), matches(/^v[0-9]+$/))"
        );
    }
}
