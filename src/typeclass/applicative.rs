//! Applicative type class - applying wrapped functions.
//!
//! This module provides the `Applicative` trait, which extends `Functor` with
//! the ability to:
//!
//! - Lift a plain value into the container (`of`)
//! - Apply a wrapped function to the contents of another container (`ap`)
//!
//! # Laws
//!
//! ## Identity Law
//!
//! ```text
//! of(identity).ap(v) == v
//! ```
//!
//! ## Homomorphism Law
//!
//! ```text
//! of(f).ap(of(x)) == of(f(x))
//! ```
//!
//! # Examples
//!
//! ```rust
//! use algebox::typeclass::{Applicative, Function, Identity, Value};
//!
//! let increment = Identity::of(Value::from(Function::lift(|n: i64| n + 1)));
//! let result = increment.ap(&Value::from(Identity::new(1))).unwrap();
//! assert_eq!(result.value(), &Value::from(2));
//! ```

use super::error::TypeError;
use super::function::Function;
use super::functor::Functor;
use super::guard::require_instance;
use super::identity::Identity;
use super::predicates::is_callable;
use super::value::Value;

/// A type class for functors that can lift values and apply wrapped
/// functions.
pub trait Applicative: Functor {
    /// Lifts a value into the container.
    fn of(value: Value) -> Self;

    /// Applies the function this container wraps to the contents of `other`.
    ///
    /// # Errors
    ///
    /// Returns an argument-shape error if the wrapped value is not callable,
    /// and a nominal mismatch if `other` is not of the same type.
    fn ap(&self, other: &Value) -> Result<Self, TypeError>;
}

// =============================================================================
// Identity Implementation
// =============================================================================

impl Applicative for Identity {
    fn of(value: Value) -> Self {
        Self::new(value)
    }

    fn ap(&self, other: &Value) -> Result<Self, TypeError> {
        if !is_callable(self.value()) {
            return Err(TypeError::argument_shape(
                "Identity.ap",
                "Wrapped value must be a function",
            ));
        }
        let other: &Self = require_instance("Identity.ap", &Self::tag(), other, "Identity required")?;
        let function = Function::from_value("Identity.ap", self.value())?;

        other.map(&function)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::typeclass::{ErrorKind, Setoid};
    use rstest::rstest;

    fn double() -> Value {
        Value::from(Function::lift(|n: i64| n * 2))
    }

    #[rstest]
    fn ap_applies_wrapped_function() {
        let result = Identity::new(double())
            .ap(&Value::from(Identity::new(21)))
            .unwrap();
        assert_eq!(result.value(), &Value::from(42));
    }

    #[rstest]
    fn ap_accepts_type_representative_as_function() {
        let result = Identity::new(Identity::type_rep())
            .ap(&Value::from(Identity::new(1)))
            .unwrap();
        assert_eq!(result.to_string(), "Identity Identity 1");
    }

    #[rstest]
    #[case(Value::from(1))]
    #[case(Value::from("f"))]
    #[case(Value::Unit)]
    fn ap_requires_wrapped_function(#[case] wrapped: Value) {
        let error = Identity::new(wrapped)
            .ap(&Value::from(Identity::new(1)))
            .unwrap_err();
        assert_eq!(error.kind(), ErrorKind::ArgumentShape);
        assert_eq!(error.to_string(), "Identity.ap: Wrapped value must be a function");
    }

    #[rstest]
    #[case(Value::from(1))]
    #[case(Value::from(vec![Value::from(1)]))]
    #[case(double())]
    fn ap_requires_identity_argument(#[case] other: Value) {
        let error = Identity::new(double()).ap(&other).unwrap_err();
        assert_eq!(error.kind(), ErrorKind::NominalMismatch);
        assert_eq!(error.to_string(), "Identity.ap: Identity required");
    }

    #[rstest]
    fn identity_law() {
        let value = Identity::new(7);
        let result = Identity::of(Value::from(Function::new(|x| x)))
            .ap(&Value::from(value.clone()))
            .unwrap();
        assert!(result.equals(&Value::from(value)));
    }

    #[rstest]
    fn homomorphism_law() {
        let function = Function::lift(|n: i64| n - 3);
        let left = Identity::of(Value::from(function.clone()))
            .ap(&Value::from(Identity::of(Value::from(10))))
            .unwrap();
        let right = Identity::of(function.call(Value::from(10)).unwrap());
        assert!(left.equals(&Value::from(right)));
    }
}
