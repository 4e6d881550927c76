//! Condition evaluation capability
//!
//! The traversal engine treats conditions as a black box and asks a
//! [`ConditionEvaluator`] whether one holds at the current node.
//! [`StandardConditions`] understands every built-in [`Condition`] form and
//! resolves [`Condition::Named`] through a registry of caller predicates.

use std::fmt;

use hashbrown::HashMap;

use crate::error::SelectorResult;
use crate::node::{NodeAccess, NodeKind};
use crate::path::{Path, PathSegment};
use crate::selector::Condition;

/// Capability deciding whether a condition holds at (node, path)
///
/// Errors are fatal to the traversal, the same as node-access errors.
pub trait ConditionEvaluator<N> {
    fn evaluate<A>(
        &self,
        condition: &Condition,
        node: &N,
        path: &Path,
        access: &A,
    ) -> SelectorResult<bool>
    where
        A: NodeAccess<N> + ?Sized;
}

impl<N, F> ConditionEvaluator<N> for F
where
    F: Fn(&Condition, &N, &Path) -> bool,
{
    fn evaluate<A>(
        &self,
        condition: &Condition,
        node: &N,
        path: &Path,
        _access: &A,
    ) -> SelectorResult<bool>
    where
        A: NodeAccess<N> + ?Sized,
    {
        Ok(self(condition, node, path))
    }
}

/// Caller predicate registered under a name
pub type NamedPredicate<N> = Box<dyn Fn(&N, &Path) -> bool + Send + Sync>;

/// Evaluator for the built-in condition forms plus named predicates
pub struct StandardConditions<N> {
    named: HashMap<String, NamedPredicate<N>>,
}

impl<N> Default for StandardConditions<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<N> StandardConditions<N> {
    #[must_use]
    pub fn new() -> Self {
        Self {
            named: HashMap::new(),
        }
    }

    /// Register a named predicate, replacing any previous one
    #[must_use]
    pub fn with<F>(mut self, name: impl Into<String>, predicate: F) -> Self
    where
        F: Fn(&N, &Path) -> bool + Send + Sync + 'static,
    {
        self.register(name, predicate);
        self
    }

    /// Register a named predicate, replacing any previous one
    pub fn register<F>(&mut self, name: impl Into<String>, predicate: F)
    where
        F: Fn(&N, &Path) -> bool + Send + Sync + 'static,
    {
        self.named.insert(name.into(), Box::new(predicate));
    }

    #[must_use]
    pub fn is_registered(&self, name: &str) -> bool {
        self.named.contains_key(name)
    }
}

impl<N> fmt::Debug for StandardConditions<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut names: Vec<_> = self.named.keys().collect();
        names.sort();
        f.debug_struct("StandardConditions")
            .field("named", &names)
            .finish()
    }
}

impl<N> ConditionEvaluator<N> for StandardConditions<N> {
    fn evaluate<A>(
        &self,
        condition: &Condition,
        node: &N,
        path: &Path,
        access: &A,
    ) -> SelectorResult<bool>
    where
        A: NodeAccess<N> + ?Sized,
    {
        Ok(match condition {
            Condition::Always => true,
            Condition::Never => false,
            Condition::IsKind(kind) => access.kind(node)? == *kind,
            Condition::HasField(name) => {
                access.kind(node)? == NodeKind::Map
                    && access
                        .child(node, &PathSegment::Field(name.clone()))?
                        .is_some()
            }
            Condition::TextMatches(pattern) => access
                .text(node)?
                .is_some_and(|text| pattern.is_match(&text)),
            Condition::MinDepth(depth) => path.depth() >= *depth,
            Condition::Named(name) => match self.named.get(name) {
                Some(predicate) => predicate(node, path),
                None => {
                    log::debug!("Unregistered condition '{name}' at {path} evaluates false");
                    false
                }
            },
            Condition::Not(inner) => !self.evaluate(inner, node, path, access)?,
            Condition::All(items) => {
                for item in items {
                    if !self.evaluate(item, node, path, access)? {
                        return Ok(false);
                    }
                }
                true
            }
            Condition::Any(items) => {
                for item in items {
                    if self.evaluate(item, node, path, access)? {
                        return Ok(true);
                    }
                }
                false
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use serde_json::{Value, json};

    use super::*;
    use crate::node::JsonAccess;

    fn holds<'a>(
        conditions: &StandardConditions<&'a Value>,
        condition: &Condition,
        node: &'a Value,
    ) -> bool {
        conditions
            .evaluate(condition, &node, &Path::root(), &JsonAccess)
            .expect("json access never fails")
    }

    #[test]
    fn test_builtin_forms() {
        let doc = json!({"name": "v12", "tags": []});
        let conditions = StandardConditions::new();

        assert!(holds(&conditions, &Condition::Always, &doc));
        assert!(!holds(&conditions, &Condition::Never, &doc));
        assert!(holds(&conditions, &Condition::is_kind(NodeKind::Map), &doc));
        assert!(holds(&conditions, &Condition::has_field("tags"), &doc));
        assert!(!holds(&conditions, &Condition::has_field("missing"), &doc));
        assert!(!holds(&conditions, &Condition::has_field("0"), &doc["tags"]));

        let versioned = Condition::text_matches("^v[0-9]+$").expect("valid pattern");
        assert!(holds(&conditions, &versioned, &doc["name"]));
        assert!(!holds(&conditions, &versioned, &doc));
    }

    #[test]
    fn test_combinators() {
        let doc = json!(1);
        let conditions = StandardConditions::new();

        assert!(holds(&conditions, &Condition::all(Vec::new()), &doc));
        assert!(!holds(&conditions, &Condition::any(Vec::new()), &doc));
        assert!(holds(
            &conditions,
            &Condition::any([Condition::Never, !Condition::Never]),
            &doc
        ));
        assert!(!holds(
            &conditions,
            &Condition::all([Condition::Always, Condition::is_kind(NodeKind::List)]),
            &doc
        ));
    }

    #[test]
    fn test_min_depth_uses_path() {
        let doc = json!(null);
        let conditions: StandardConditions<&Value> = StandardConditions::new();
        let deep = Path::root().child_field("a").child_index(0);
        let at_depth_two = conditions
            .evaluate(&Condition::min_depth(2), &&doc, &deep, &JsonAccess)
            .expect("json access never fails");
        assert!(at_depth_two);
        assert!(!holds(&conditions, &Condition::min_depth(1), &doc));
    }

    #[test]
    fn test_named_predicates() {
        let positive = json!(3);
        let negative = json!(-3);
        let conditions = StandardConditions::new()
            .with("positive", |node: &&Value, _path: &Path| {
                node.as_i64().is_some_and(|n| n > 0)
            });
        assert!(conditions.is_registered("positive"));
        assert!(holds(&conditions, &Condition::named("positive"), &positive));
        assert!(!holds(&conditions, &Condition::named("positive"), &negative));
        assert!(!holds(&conditions, &Condition::named("unknown"), &positive));
    }

    #[test]
    fn test_closure_evaluator() {
        let doc = json!({});
        let evaluator = |condition: &Condition, _node: &&Value, path: &Path| {
            matches!(condition, Condition::Named(name) if name == "root") && path.is_root()
        };
        let result = evaluator
            .evaluate(&Condition::named("root"), &&doc, &Path::root(), &JsonAccess)
            .expect("closure evaluation never fails");
        assert!(result);
    }
}
