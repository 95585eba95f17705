// Copyright 2025 Cowboy AI, LLC.

//! Negation wrapper
//!
//! Negations are never interned: every call to [`NotPredicate::negate`]
//! allocates a new wrapper, even around the same inner predicate.

use std::sync::Arc;

use crate::errors::PredicateResult;
use crate::predicate::{Predicate, SharedPredicate};
use crate::requirements::require_non_null;

const NEGATED_PREDICATE_MESSAGE: &str = "Predicate to negate must not be null.";

/// Inverts the result of the wrapped predicate
pub struct NotPredicate<T> {
    inner: SharedPredicate<T>,
}

impl<T> NotPredicate<T> {
    /// Wrap `inner`, rejecting an absent operand
    pub fn new(inner: Option<SharedPredicate<T>>) -> PredicateResult<Self> {
        let inner = require_non_null(inner, NEGATED_PREDICATE_MESSAGE)?;
        Ok(Self { inner })
    }

    /// The negated predicate
    pub fn inner(&self) -> &SharedPredicate<T> {
        &self.inner
    }
}

impl<T: 'static> NotPredicate<T> {
    /// Fresh shared negation of `inner`
    pub fn negate(inner: Option<SharedPredicate<T>>) -> PredicateResult<SharedPredicate<T>> {
        let negation: SharedPredicate<T> = Arc::new(Self::new(inner)?);
        Ok(negation)
    }
}

impl<T> Predicate<T> for NotPredicate<T> {
    fn apply(&self, input: &T) -> bool {
        !self.inner.apply(input)
    }

    fn description(&self) -> String {
        format!("NOT {}", self.inner.description())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::predicate::{predicate, same_instance};

    #[test]
    fn test_inverts_inner() {
        let positive = predicate("input > 0", |x: &i32| *x > 0);
        let not_positive = NotPredicate::negate(Some(positive)).unwrap();

        assert!(not_positive.apply(&-5));
        assert!(!not_positive.apply(&5));
        assert_eq!(not_positive.description(), "NOT input > 0");
    }

    #[test]
    fn test_every_negation_is_new() {
        let positive = predicate("input > 0", |x: &i32| *x > 0);
        let first = NotPredicate::negate(Some(positive.clone())).unwrap();
        let second = NotPredicate::negate(Some(positive)).unwrap();

        assert!(!same_instance(&first, &second));
    }

    #[test]
    fn test_absent_inner_is_rejected() {
        let err = NotPredicate::<i32>::negate(None).unwrap_err();
        assert!(err.is_invalid_argument());
        assert_eq!(
            err.to_string(),
            format!("Invalid argument: {NEGATED_PREDICATE_MESSAGE}")
        );
    }
}
