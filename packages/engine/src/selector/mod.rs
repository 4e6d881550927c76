//! Selector abstract syntax tree
//!
//! A [`Selector`] is an immutable tree describing which nodes of a linked data
//! value to visit and which of them to report as matches. Selectors are built
//! once (see [`builders`]), validated once (see [`crate::validator`]) and then
//! shared read-only by any number of traversals.

pub mod ast;
pub mod builders;
pub mod condition;
mod display;

pub use ast::{RecursionLimit, Selector};
pub use condition::{Condition, Pattern};
