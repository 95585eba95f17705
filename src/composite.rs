// Copyright 2025 Cowboy AI, LLC.

//! Binary composite predicates
//!
//! Each composite holds exactly two member predicates and is obtained through
//! `get_instance`, which returns the cached composite for the same ordered
//! operand pair when one exists. Operands are validated only when a new
//! composite has to be built.
//!
//! Evaluation never short-circuits: both members are applied on every call,
//! first member first.

use std::sync::Arc;

use crate::cache::{CacheKey, CompositeKind, PredicateCache};
use crate::errors::PredicateResult;
use crate::predicate::{Predicate, SharedPredicate};
use crate::requirements::require_non_null;

const FIRST_MEMBER_MESSAGE: &str = "First member predicate must not be null.";
const SECOND_MEMBER_MESSAGE: &str = "Second member predicate must not be null.";

/// Look up or build the `kind` composite of `first` and `second`.
fn intern<T, P, F>(
    cache: &PredicateCache<T>,
    kind: CompositeKind,
    first: Option<SharedPredicate<T>>,
    second: Option<SharedPredicate<T>>,
    construct: F,
) -> PredicateResult<SharedPredicate<T>>
where
    T: 'static,
    P: Predicate<T> + 'static,
    F: FnOnce(SharedPredicate<T>, SharedPredicate<T>) -> P,
{
    let key = CacheKey::for_operands(kind, first.as_ref(), second.as_ref());
    cache.get_or_register(key, move || {
        let first = require_non_null(first, FIRST_MEMBER_MESSAGE)?;
        let second = require_non_null(second, SECOND_MEMBER_MESSAGE)?;
        let composite: SharedPredicate<T> = Arc::new(construct(first, second));
        Ok(composite)
    })
}

/// True when both members are true
pub struct AndPredicate<T> {
    first: SharedPredicate<T>,
    second: SharedPredicate<T>,
}

impl<T: 'static> AndPredicate<T> {
    /// Cached AND composite of `first` and `second`
    pub fn get_instance(
        cache: &PredicateCache<T>,
        first: Option<SharedPredicate<T>>,
        second: Option<SharedPredicate<T>>,
    ) -> PredicateResult<SharedPredicate<T>> {
        intern(cache, CompositeKind::And, first, second, |first, second| Self {
            first,
            second,
        })
    }
}

impl<T> AndPredicate<T> {
    /// First member
    pub fn first(&self) -> &SharedPredicate<T> {
        &self.first
    }

    /// Second member
    pub fn second(&self) -> &SharedPredicate<T> {
        &self.second
    }
}

impl<T> Predicate<T> for AndPredicate<T> {
    fn apply(&self, input: &T) -> bool {
        let first = self.first.apply(input);
        let second = self.second.apply(input);
        first && second
    }

    fn description(&self) -> String {
        format!(
            "({} AND {})",
            self.first.description(),
            self.second.description()
        )
    }
}

/// True when at least one member is true
pub struct OrPredicate<T> {
    first: SharedPredicate<T>,
    second: SharedPredicate<T>,
}

impl<T: 'static> OrPredicate<T> {
    /// Cached OR composite of `first` and `second`
    pub fn get_instance(
        cache: &PredicateCache<T>,
        first: Option<SharedPredicate<T>>,
        second: Option<SharedPredicate<T>>,
    ) -> PredicateResult<SharedPredicate<T>> {
        intern(cache, CompositeKind::Or, first, second, |first, second| Self {
            first,
            second,
        })
    }
}

impl<T> OrPredicate<T> {
    /// First member
    pub fn first(&self) -> &SharedPredicate<T> {
        &self.first
    }

    /// Second member
    pub fn second(&self) -> &SharedPredicate<T> {
        &self.second
    }
}

impl<T> Predicate<T> for OrPredicate<T> {
    fn apply(&self, input: &T) -> bool {
        let first = self.first.apply(input);
        let second = self.second.apply(input);
        first || second
    }

    fn description(&self) -> String {
        format!(
            "({} OR {})",
            self.first.description(),
            self.second.description()
        )
    }
}

/// True when exactly one member is true
pub struct XorPredicate<T> {
    first: SharedPredicate<T>,
    second: SharedPredicate<T>,
}

impl<T: 'static> XorPredicate<T> {
    /// Cached XOR composite of `first` and `second`
    pub fn get_instance(
        cache: &PredicateCache<T>,
        first: Option<SharedPredicate<T>>,
        second: Option<SharedPredicate<T>>,
    ) -> PredicateResult<SharedPredicate<T>> {
        intern(cache, CompositeKind::Xor, first, second, |first, second| Self {
            first,
            second,
        })
    }
}

impl<T> XorPredicate<T> {
    /// First member
    pub fn first(&self) -> &SharedPredicate<T> {
        &self.first
    }

    /// Second member
    pub fn second(&self) -> &SharedPredicate<T> {
        &self.second
    }
}

impl<T> Predicate<T> for XorPredicate<T> {
    fn apply(&self, input: &T) -> bool {
        let first = self.first.apply(input);
        let second = self.second.apply(input);
        first != second
    }

    fn description(&self) -> String {
        format!(
            "({} XOR {})",
            self.first.description(),
            self.second.description()
        )
    }
}
