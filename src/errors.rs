// Copyright 2025 Cowboy AI, LLC.

//! Error types for predicate composition

use thiserror::Error;

/// Errors that can occur while composing predicates
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PredicateError {
    /// A required argument was absent or otherwise unusable
    #[error("Invalid argument: {reason}")]
    InvalidArgument {
        /// Why the argument was rejected
        reason: String,
    },

    /// Configuration could not be read
    #[error("Configuration error: {0}")]
    Configuration(String),
}

/// Result type for predicate operations
pub type PredicateResult<T> = Result<T, PredicateError>;

impl From<serde_json::Error> for PredicateError {
    fn from(err: serde_json::Error) -> Self {
        PredicateError::Configuration(err.to_string())
    }
}

impl PredicateError {
    /// Create an invalid-argument error
    pub fn invalid_argument(reason: impl Into<String>) -> Self {
        PredicateError::InvalidArgument {
            reason: reason.into(),
        }
    }

    /// Check if this is an invalid-argument error
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, PredicateError::InvalidArgument { .. })
    }
}
