//! Error constructor functions
//!
//! Factory helpers that attach context to selector errors.

use super::types::SelectorError;

/// Creates an invalid selector error naming the offending selector
///
/// # Examples
/// ```
/// use selwalk_engine::error::{ErrorKind, invalid_selector_error};
///
/// let error = invalid_selector_error("ExploreUnion", "empty union list");
/// assert_eq!(error.kind, ErrorKind::InvalidSelector);
/// ```
pub fn invalid_selector_error(selector: &str, reason: impl Into<String>) -> SelectorError {
    SelectorError::invalid_selector(format!("{selector}: {}", reason.into()))
}

/// Creates a fatal node access error with the path where it happened
pub fn node_access_error(path: impl std::fmt::Display, reason: impl Into<String>) -> SelectorError {
    SelectorError::node_access(format!("at {path}: {}", reason.into()))
}

/// Creates a budget exhaustion error
pub fn budget_exceeded_error(budget: u64, path: impl std::fmt::Display) -> SelectorError {
    SelectorError::budget_exceeded(format!(
        "node budget of {budget} visits exhausted at {path}"
    ))
}
