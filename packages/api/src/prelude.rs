//! Common imports for selwalk users
//!
//! ```rust
//! use selwalk::prelude::*;
//! ```

pub use crate::builder::{SelectorBuilder, Walker};
pub use crate::report::WalkReport;
pub use selwalk_engine::{
    Condition, ConditionEvaluator, JsonAccess, Match, NodeAccess, NodeKind, Path, PathSegment,
    RecursionLimit, Selector, SelectorError, SelectorResult, StandardConditions, WalkConfig,
};
