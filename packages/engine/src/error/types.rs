//! Selector Error Types
//!
//! Core error types for selector validation and traversal.

use std::fmt;

/// Selector processing error kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Structurally malformed selector (detected by the validator)
    InvalidSelector,
    /// Malformed normalized path string
    InvalidPath,
    /// Fatal failure reported by a node-access capability
    NodeAccess,
    /// Traversal visited more nodes than the configured budget allows
    BudgetExceeded,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ErrorKind::InvalidSelector => "invalid selector",
            ErrorKind::InvalidPath => "invalid path",
            ErrorKind::NodeAccess => "node access failed",
            ErrorKind::BudgetExceeded => "budget exceeded",
        };
        f.write_str(name)
    }
}

/// Main selector error type
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Selector Error ({kind}): {message}")]
pub struct SelectorError {
    pub kind: ErrorKind,
    pub message: String,
}

/// Result type for selector operations
pub type SelectorResult<T> = Result<T, SelectorError>;

impl SelectorError {
    #[must_use]
    pub fn new(kind: ErrorKind, message: String) -> Self {
        Self { kind, message }
    }

    pub fn invalid_selector(msg: impl Into<String>) -> Self {
        Self::new(ErrorKind::InvalidSelector, msg.into())
    }

    pub fn invalid_path(msg: impl Into<String>) -> Self {
        Self::new(ErrorKind::InvalidPath, msg.into())
    }

    pub fn node_access(msg: impl Into<String>) -> Self {
        Self::new(ErrorKind::NodeAccess, msg.into())
    }

    pub fn budget_exceeded(msg: impl Into<String>) -> Self {
        Self::new(ErrorKind::BudgetExceeded, msg.into())
    }

    /// Whether this error terminates a running traversal
    #[must_use]
    pub fn is_fatal(&self) -> bool {
        matches!(self.kind, ErrorKind::NodeAccess | ErrorKind::BudgetExceeded)
    }
}
