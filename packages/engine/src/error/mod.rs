//! Selector error handling module
//!
//! Error types and constructor helpers shared by the validator, the path
//! parser, node-access implementations and the traversal engine.

pub mod constructors;
mod types;

pub use constructors::{budget_exceeded_error, invalid_selector_error, node_access_error};
pub use types::{ErrorKind, SelectorError, SelectorResult};
