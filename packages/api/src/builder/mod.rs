//! Fluent construction and traversal API
//!
//! [`SelectorBuilder`] assembles selectors step by step; [`Walker`] carries
//! the limits and condition evaluator used to run them.

pub mod selector;
pub mod walker;

pub use selector::SelectorBuilder;
pub use walker::Walker;
