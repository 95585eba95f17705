// Copyright 2025 Cowboy AI, LLC.

//! The predicate capability and caller-supplied leaf predicates
//!
//! A predicate evaluates an input to `true` or `false`. Predicates are
//! immutable once built and are shared through [`SharedPredicate`] handles,
//! so one leaf can appear as an operand of many compositions.

use std::fmt;
use std::sync::Arc;

/// A boolean test over inputs of type `T`
pub trait Predicate<T>: Send + Sync {
    /// Evaluate the predicate for the given input
    fn apply(&self, input: &T) -> bool;

    /// Human readable rendering of this predicate
    fn description(&self) -> String {
        "<predicate>".to_string()
    }
}

/// Shared, reference counted handle to a predicate
pub type SharedPredicate<T> = Arc<dyn Predicate<T>>;

impl<T> fmt::Debug for dyn Predicate<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Predicate({})", self.description())
    }
}

/// Identity of a shared predicate: the address of its allocation.
///
/// Two handles have the same identity exactly when they point at the same
/// instance. Cache keys hold their operands, so an identity recorded in the
/// cache cannot be reused by a later allocation.
pub(crate) fn identity<T>(predicate: &SharedPredicate<T>) -> usize {
    Arc::as_ptr(predicate) as *const () as usize
}

/// Returns true when both handles refer to the same predicate instance
pub fn same_instance<T>(left: &SharedPredicate<T>, right: &SharedPredicate<T>) -> bool {
    identity(left) == identity(right)
}

/// A leaf predicate backed by a closure
pub struct FnPredicate<F> {
    name: String,
    test: F,
}

impl<F> FnPredicate<F> {
    /// Create a named closure predicate
    pub fn new(name: impl Into<String>, test: F) -> Self {
        Self {
            name: name.into(),
            test,
        }
    }

    /// Name given at construction
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl<T, F> Predicate<T> for FnPredicate<F>
where
    F: Fn(&T) -> bool + Send + Sync,
{
    fn apply(&self, input: &T) -> bool {
        (self.test)(input)
    }

    fn description(&self) -> String {
        self.name.clone()
    }
}

/// A predicate that ignores its input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConstantPredicate(pub bool);

impl<T> Predicate<T> for ConstantPredicate {
    fn apply(&self, _input: &T) -> bool {
        self.0
    }

    fn description(&self) -> String {
        let text = if self.0 { "TRUE" } else { "FALSE" };
        text.to_string()
    }
}

/// Build a shared leaf predicate from a closure
pub fn predicate<T, F>(name: impl Into<String>, test: F) -> SharedPredicate<T>
where
    T: 'static,
    F: Fn(&T) -> bool + Send + Sync + 'static,
{
    Arc::new(FnPredicate::new(name, test))
}

/// A shared predicate that is always true
pub fn always_true<T: 'static>() -> SharedPredicate<T> {
    Arc::new(ConstantPredicate(true))
}

/// A shared predicate that is always false
pub fn always_false<T: 'static>() -> SharedPredicate<T> {
    Arc::new(ConstantPredicate(false))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_closure_predicate() {
        let positive = predicate("input > 0", |x: &i32| *x > 0);

        assert!(positive.apply(&5));
        assert!(!positive.apply(&-5));
        assert_eq!(positive.description(), "input > 0");
    }

    #[test]
    fn test_constants() {
        assert!(always_true::<i32>().apply(&0));
        assert!(!always_false::<i32>().apply(&0));
        assert_eq!(always_true::<i32>().description(), "TRUE");
    }

    #[test]
    fn test_identity_follows_instance_not_behavior() {
        let a = predicate("even", |x: &u32| x % 2 == 0);
        let b = predicate("even", |x: &u32| x % 2 == 0);
        let a_again = Arc::clone(&a);

        assert!(same_instance(&a, &a_again));
        assert!(!same_instance(&a, &b));
    }

    #[test]
    fn test_debug_uses_description() {
        let p = predicate("input < 10", |x: &i32| *x < 10);
        assert_eq!(format!("{p:?}"), "Predicate(input < 10)");
    }
}
