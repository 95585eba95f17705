// Copyright 2025 Cowboy AI, LLC.

//! Logical operators over predicates
//!
//! [`PredicateOperations`] composes predicates against an injected
//! [`PredicateCache`]. The free functions in this module do the same against
//! the process-wide cache for the input type.
//!
//! | operator | result                                           | cached |
//! |----------|--------------------------------------------------|--------|
//! | `and`    | [`AndPredicate`]                                 | yes    |
//! | `or`     | [`OrPredicate`]                                  | yes    |
//! | `xor`    | [`XorPredicate`] (or `or`, see [`XorSemantics`]) | yes    |
//! | `not`    | fresh [`NotPredicate`]                           | no     |
//! | `nand`   | fresh negation of the cached `and`               | inner  |
//! | `nor`    | fresh negation of the cached `or`                | inner  |

use std::sync::Arc;

use crate::cache::PredicateCache;
use crate::composite::{AndPredicate, OrPredicate, XorPredicate};
use crate::config::{OperationsConfig, XorSemantics};
use crate::errors::PredicateResult;
use crate::negation::NotPredicate;
use crate::predicate::SharedPredicate;

/// Anything that can stand as an operand: a handle, a borrowed handle, or an
/// optional one where `None` is an absent argument.
pub trait IntoOperand<T> {
    /// Convert into an optional shared predicate
    fn into_operand(self) -> Option<SharedPredicate<T>>;
}

impl<T> IntoOperand<T> for SharedPredicate<T> {
    fn into_operand(self) -> Option<SharedPredicate<T>> {
        Some(self)
    }
}

impl<T> IntoOperand<T> for &SharedPredicate<T> {
    fn into_operand(self) -> Option<SharedPredicate<T>> {
        Some(Arc::clone(self))
    }
}

impl<T> IntoOperand<T> for Option<SharedPredicate<T>> {
    fn into_operand(self) -> Option<SharedPredicate<T>> {
        self
    }
}

impl<T> IntoOperand<T> for Option<&SharedPredicate<T>> {
    fn into_operand(self) -> Option<SharedPredicate<T>> {
        self.cloned()
    }
}

/// Operator façade bound to one cache
pub struct PredicateOperations<T> {
    cache: Arc<PredicateCache<T>>,
    config: OperationsConfig,
}

impl<T> Clone for PredicateOperations<T> {
    fn clone(&self) -> Self {
        Self {
            cache: Arc::clone(&self.cache),
            config: self.config.clone(),
        }
    }
}

impl<T: 'static> Default for PredicateOperations<T> {
    fn default() -> Self {
        Self::new(Arc::new(PredicateCache::new()))
    }
}

impl<T: 'static> PredicateOperations<T> {
    /// Operations over `cache` with default configuration
    pub fn new(cache: Arc<PredicateCache<T>>) -> Self {
        Self::with_config(cache, OperationsConfig::default())
    }

    /// Operations over `cache` with the given configuration
    pub fn with_config(cache: Arc<PredicateCache<T>>, config: OperationsConfig) -> Self {
        Self { cache, config }
    }

    /// Operations over the process-wide cache for `T`
    pub fn global() -> Self {
        Self::new(PredicateCache::global())
    }

    /// The cache compositions are interned in
    pub fn cache(&self) -> &Arc<PredicateCache<T>> {
        &self.cache
    }

    /// Active configuration
    pub fn config(&self) -> &OperationsConfig {
        &self.config
    }

    /// Negation of `predicate`, newly allocated on every call
    pub fn not(&self, predicate: impl IntoOperand<T>) -> PredicateResult<SharedPredicate<T>> {
        NotPredicate::negate(predicate.into_operand())
    }

    /// True when both operands are true
    pub fn and(
        &self,
        first: impl IntoOperand<T>,
        second: impl IntoOperand<T>,
    ) -> PredicateResult<SharedPredicate<T>> {
        AndPredicate::get_instance(&self.cache, first.into_operand(), second.into_operand())
    }

    /// True when at least one operand is true
    pub fn or(
        &self,
        first: impl IntoOperand<T>,
        second: impl IntoOperand<T>,
    ) -> PredicateResult<SharedPredicate<T>> {
        OrPredicate::get_instance(&self.cache, first.into_operand(), second.into_operand())
    }

    /// Negation of `and(first, second)`
    pub fn nand(
        &self,
        first: impl IntoOperand<T>,
        second: impl IntoOperand<T>,
    ) -> PredicateResult<SharedPredicate<T>> {
        self.not(self.and(first, second)?)
    }

    /// Negation of `or(first, second)`
    pub fn nor(
        &self,
        first: impl IntoOperand<T>,
        second: impl IntoOperand<T>,
    ) -> PredicateResult<SharedPredicate<T>> {
        self.not(self.or(first, second)?)
    }

    /// Exclusive or, unless configured with [`XorSemantics::InclusiveLegacy`]
    pub fn xor(
        &self,
        first: impl IntoOperand<T>,
        second: impl IntoOperand<T>,
    ) -> PredicateResult<SharedPredicate<T>> {
        match self.config.xor_semantics {
            XorSemantics::Exclusive => {
                XorPredicate::get_instance(&self.cache, first.into_operand(), second.into_operand())
            }
            XorSemantics::InclusiveLegacy => self.or(first, second),
        }
    }
}

/// [`PredicateOperations::not`] over the process-wide cache
pub fn not<T: 'static>(predicate: impl IntoOperand<T>) -> PredicateResult<SharedPredicate<T>> {
    NotPredicate::negate(predicate.into_operand())
}

/// [`PredicateOperations::and`] over the process-wide cache
pub fn and<T: 'static>(
    first: impl IntoOperand<T>,
    second: impl IntoOperand<T>,
) -> PredicateResult<SharedPredicate<T>> {
    PredicateOperations::global().and(first, second)
}

/// [`PredicateOperations::or`] over the process-wide cache
pub fn or<T: 'static>(
    first: impl IntoOperand<T>,
    second: impl IntoOperand<T>,
) -> PredicateResult<SharedPredicate<T>> {
    PredicateOperations::global().or(first, second)
}

/// [`PredicateOperations::nand`] over the process-wide cache
pub fn nand<T: 'static>(
    first: impl IntoOperand<T>,
    second: impl IntoOperand<T>,
) -> PredicateResult<SharedPredicate<T>> {
    PredicateOperations::global().nand(first, second)
}

/// [`PredicateOperations::nor`] over the process-wide cache
pub fn nor<T: 'static>(
    first: impl IntoOperand<T>,
    second: impl IntoOperand<T>,
) -> PredicateResult<SharedPredicate<T>> {
    PredicateOperations::global().nor(first, second)
}

/// [`PredicateOperations::xor`] over the process-wide cache, exclusive semantics
pub fn xor<T: 'static>(
    first: impl IntoOperand<T>,
    second: impl IntoOperand<T>,
) -> PredicateResult<SharedPredicate<T>> {
    PredicateOperations::global().xor(first, second)
}
