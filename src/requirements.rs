// Copyright 2025 Cowboy AI, LLC.

//! Argument preconditions

use crate::errors::{PredicateError, PredicateResult};

/// Unwrap a required argument, failing with an invalid-argument error when it is absent.
pub fn require_non_null<V>(value: Option<V>, message: &str) -> PredicateResult<V> {
    value.ok_or_else(|| PredicateError::invalid_argument(message))
}
