//! # selwalk
//!
//! Selector-driven traversal of node graphs with a fluent builder API.
//!
//! Selectors describe which nodes of a graph to visit and which to report.
//! A traversal yields matches lazily, in depth-first order, as
//! `Result<Match, SelectorError>` items; any node graph can be walked by
//! implementing [`NodeAccess`], and JSON documents work out of the box.
//!
//! ## Usage
//!
//! ```rust
//! use selwalk::{Condition, NodeKind, RecursionLimit, Selector, SelectorBuilder};
//! use serde_json::json;
//!
//! let doc = json!({
//!     "releases": [
//!         {"tag": "v1", "assets": []},
//!         {"tag": "draft", "assets": [{"name": "notes"}]}
//!     ]
//! });
//!
//! // every map below `releases`, two levels deep at most
//! let selector = SelectorBuilder::new()
//!     .field("releases")
//!     .recurse(
//!         RecursionLimit::Depth(2),
//!         SelectorBuilder::new().union([
//!             Selector::matcher_if(Condition::is_kind(NodeKind::Map)),
//!             SelectorBuilder::new().all().edge(),
//!         ]),
//!     );
//!
//! let found = selwalk::walk_json(&doc, &selector).expect("valid selector");
//! let paths: Vec<String> = found.iter().map(|m| m.path.to_string()).collect();
//! assert_eq!(paths, vec!["$['releases'][0]", "$['releases'][1]"]);
//! ```

#![deny(unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]

pub mod builder;
pub mod prelude;
pub mod report;

use serde_json::Value;

pub use builder::{SelectorBuilder, Walker};
pub use report::WalkReport;
// Re-export the engine surface
pub use selwalk_engine::{
    Condition, ConditionEvaluator, ConfigResult, ConfigurationError, ErrorKind, JsonAccess,
    Match, NamedPredicate, NodeAccess, NodeKind, Path, PathSegment, Pattern, RecursionLimit,
    Selector, SelectorError, SelectorMetrics, SelectorResult, StandardConditions, Validator,
    Walk, WalkConfig, WalkStats, validate, walk, walk_with_config,
};

/// Start a fluent selector chain
///
/// Shorthand for `SelectorBuilder::new()`
#[must_use]
pub fn selector() -> SelectorBuilder {
    SelectorBuilder::new()
}

/// Validate `selector` and collect every match in a JSON document
///
/// Uses default limits and the built-in condition forms.
///
/// # Errors
/// Returns an `InvalidSelector` error for malformed selectors.
pub fn walk_json<'v>(root: &'v Value, selector: &Selector) -> SelectorResult<Vec<Match<&'v Value>>> {
    Walker::new().walk_json(root, selector)
}
