// Copyright 2025 Cowboy AI, LLC.

//! # CIM Predicate
//!
//! Composable boolean predicates with structural interning.
//!
//! This crate provides:
//! - **Predicate**: Trait for boolean tests over a typed input
//! - **Composites**: AND, OR and XOR of exactly two member predicates
//! - **Negation**: NOT wrapper, always freshly allocated
//! - **Predicate Cache**: Interning of composites by ordered operand pair
//! - **Operations**: `and`, `or`, `not`, `nand`, `nor`, `xor`
//!
//! ## Example
//!
//! ```
//! use cim_predicate::{predicate, same_instance, PredicateOperations};
//!
//! let ops = PredicateOperations::<i32>::default();
//! let positive = predicate("input > 0", |x: &i32| *x > 0);
//! let small = predicate("input < 10", |x: &i32| *x < 10);
//!
//! let in_range = ops.and(&positive, &small)?;
//! assert!(in_range.apply(&5));
//! assert!(!in_range.apply(&15));
//!
//! // The same ordered pair yields the same instance
//! assert!(same_instance(&in_range, &ops.and(&positive, &small)?));
//! # Ok::<(), cim_predicate::PredicateError>(())
//! ```
//!
//! ## Design Principles
//!
//! 1. **Immutability**: Predicates never change after construction
//! 2. **Interning**: Equal compositions share one instance
//! 3. **Eager Evaluation**: Composites always evaluate both members
//! 4. **Fail Fast**: Absent operands are rejected with an invalid-argument error

#![warn(missing_docs)]

mod cache;
mod composite;
mod config;
mod errors;
mod negation;
pub mod operations;
mod predicate;
mod requirements;

// Re-export core types
pub use cache::{CacheKey, CacheStats, CompositeKind, PredicateCache};
pub use composite::{AndPredicate, OrPredicate, XorPredicate};
pub use config::{OperationsConfig, XorSemantics};
pub use errors::{PredicateError, PredicateResult};
pub use negation::NotPredicate;
pub use operations::{IntoOperand, PredicateOperations};
pub use predicate::{
    always_false, always_true, predicate, same_instance, ConstantPredicate, FnPredicate,
    Predicate, SharedPredicate,
};
pub use requirements::require_non_null;
