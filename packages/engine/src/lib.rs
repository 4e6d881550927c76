//! # selwalk engine
//!
//! Selector-driven traversal of content-addressed node graphs.
//!
//! A [`Selector`] is a small declarative program describing which nodes of a
//! graph to visit and which to emit as matches. This crate provides:
//!
//! - the selector AST with builders and a compact display form
//! - a static [validator](validator) that rejects malformed selectors once,
//!   before any traversal
//! - a lazy, depth-first [traversal engine](walk) with bounded recursion,
//!   union deduplication and explicit frame tracking
//! - capability traits for node access ([`NodeAccess`]) and condition
//!   evaluation ([`ConditionEvaluator`]), with a JSON adapter
//!
//! ```rust
//! use selwalk_engine::{JsonAccess, Selector, StandardConditions, walk};
//! use serde_json::json;
//!
//! let doc = json!({"a": {"b": 1}, "c": [1, 2, 3]});
//! let selector = Selector::explore_fields([("a", Selector::explore_all(Selector::matcher()))]);
//! selector.validate().expect("well-formed selector");
//!
//! let conditions = StandardConditions::new();
//! let found: Vec<String> = walk(&doc, &selector, &JsonAccess, &conditions)
//!     .map(|m| m.map(|m| m.path.to_string()))
//!     .collect::<Result<_, _>>()
//!     .expect("json access never fails");
//! assert_eq!(found, vec!["$['a']['b']"]);
//! ```

#![deny(unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]

pub mod condition;
pub mod config;
pub mod error;
pub mod node;
pub mod path;
pub mod selector;
pub mod validator;
pub mod walk;

pub use condition::{ConditionEvaluator, NamedPredicate, StandardConditions};
pub use config::{ConfigResult, ConfigurationError, Validator, WalkConfig};
pub use error::{ErrorKind, SelectorError, SelectorResult};
pub use node::{JsonAccess, NodeAccess, NodeKind};
pub use path::{Path, PathSegment};
pub use selector::{Condition, Pattern, RecursionLimit, Selector};
pub use validator::{SelectorMetrics, SelectorValidator, validate};
pub use walk::{Match, Walk, WalkStats, walk, walk_with_config};
