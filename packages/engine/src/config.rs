//! Traversal configuration
//!
//! Limits applied to a single traversal. All limits are off by default, which
//! gives the unbounded behaviour of the plain selector semantics.

/// Configuration validation result type
pub type ConfigResult<T> = Result<T, ConfigurationError>;

/// Configuration error types
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigurationError {
    #[error("Invalid budget: {0}")]
    InvalidBudget(String),

    #[error("Invalid limit: {0}")]
    InvalidLimit(String),
}

/// Configuration validation trait
pub trait Validator {
    /// Validates the configuration settings
    ///
    /// # Errors
    ///
    /// Returns a `ConfigurationError` variant if any validation fails:
    /// - `InvalidBudget` - if the node budget is zero
    /// - `InvalidLimit` - if the match limit is zero
    fn validate(&self) -> ConfigResult<()>;
}

/// Per-traversal limits
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WalkConfig {
    /// Maximum (selector, node) visits before the walk fails with `BudgetExceeded`
    pub node_budget: Option<u64>,
    /// Stop cleanly after this many matches
    pub match_limit: Option<u64>,
    /// Run the selector validator before walking
    pub validate_before_walk: bool,
}

impl Default for WalkConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl WalkConfig {
    /// Unbounded configuration that validates selectors before walking
    #[must_use]
    pub const fn new() -> Self {
        Self {
            node_budget: None,
            match_limit: None,
            validate_before_walk: true,
        }
    }

    #[must_use]
    pub const fn with_node_budget(mut self, budget: u64) -> Self {
        self.node_budget = Some(budget);
        self
    }

    #[must_use]
    pub const fn with_match_limit(mut self, limit: u64) -> Self {
        self.match_limit = Some(limit);
        self
    }

    #[must_use]
    pub const fn skip_validation(mut self) -> Self {
        self.validate_before_walk = false;
        self
    }
}

impl Validator for WalkConfig {
    fn validate(&self) -> ConfigResult<()> {
        if self.node_budget == Some(0) {
            return Err(ConfigurationError::InvalidBudget(
                "node_budget cannot be zero".to_string(),
            ));
        }
        if self.match_limit == Some(0) {
            return Err(ConfigurationError::InvalidLimit(
                "match_limit cannot be zero".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_unbounded() {
        let config = WalkConfig::default();
        assert_eq!(config.node_budget, None);
        assert_eq!(config.match_limit, None);
        assert!(config.validate_before_walk);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_zero_limits_are_rejected() {
        assert!(matches!(
            WalkConfig::new().with_node_budget(0).validate(),
            Err(ConfigurationError::InvalidBudget(_))
        ));
        assert!(matches!(
            WalkConfig::new().with_match_limit(0).validate(),
            Err(ConfigurationError::InvalidLimit(_))
        ));
        assert!(
            WalkConfig::new()
                .with_node_budget(10)
                .with_match_limit(1)
                .skip_validation()
                .validate()
                .is_ok()
        );
    }
}
