//! Traversable type class - swapping a container with an inner Applicative.
//!
//! `sequence` turns `T (F a)` into `F (T a)`; `traverse` maps with an
//! effectful function first. The Applicative `F` is only known at runtime,
//! so it is passed as a callable (usually its type representative) and the
//! result is returned as a [`Value`].
//!
//! # Examples
//!
//! ```rust
//! use algebox::typeclass::{Function, Identity, Traversable, Value};
//!
//! let nested = Identity::new(Identity::new(3));
//! let swapped = nested.sequence(&Identity::type_rep()).unwrap();
//! assert_eq!(swapped.to_string(), "Identity Identity 3");
//!
//! let lifted = Identity::new(4)
//!     .traverse(&Function::lift(|n: i64| Identity::new(n + 1)), &Identity::type_rep())
//!     .unwrap();
//! assert_eq!(lifted.to_string(), "Identity Identity 5");
//! ```

use super::error::TypeError;
use super::function::Function;
use super::identity::Identity;
use super::predicates::{is_applicative, is_callable};
use super::value::Value;

/// A type class for containers that can be traversed with an Applicative.
pub trait Traversable {
    /// Swaps this container with the Applicative it wraps.
    ///
    /// # Errors
    ///
    /// Returns an argument-shape error if `applicative` is not callable and a
    /// capability violation if the wrapped value is not an Applicative.
    fn sequence(&self, applicative: &Value) -> Result<Value, TypeError>;

    /// Maps `function` over the contents and swaps the container with the
    /// Applicative it returns.
    ///
    /// # Errors
    ///
    /// Returns a capability violation if `function` does not return an
    /// Applicative.
    fn traverse(&self, function: &Function, applicative: &Value) -> Result<Value, TypeError>;
}

impl Traversable for Identity {
    fn sequence(&self, applicative: &Value) -> Result<Value, TypeError> {
        if !is_callable(applicative) {
            return Err(TypeError::argument_shape(
                "Identity.sequence",
                "Applicative Function required",
            ));
        }
        if !is_applicative(self.value()) {
            return Err(TypeError::capability_violation(
                "Identity.sequence",
                "Must wrap an Applicative",
            ));
        }
        self.value().map(&Self::constructor())
    }

    fn traverse(&self, function: &Function, applicative: &Value) -> Result<Value, TypeError> {
        if !is_callable(applicative) {
            return Err(TypeError::argument_shape(
                "Identity.traverse",
                "Applicative function required for second argument",
            ));
        }
        let result = function.call(self.value().clone())?;
        if !is_applicative(&result) {
            return Err(TypeError::capability_violation(
                "Identity.traverse",
                "First function must return an Applicative",
            ));
        }
        result.map(&Self::constructor())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::typeclass::ErrorKind;
    use rstest::rstest;

    #[rstest]
    fn sequence_swaps_nested_identity() {
        let swapped = Identity::new(Identity::new("x"))
            .sequence(&Identity::type_rep())
            .unwrap();
        let outer = swapped.downcast_ref::<Identity>().unwrap();
        assert!(outer.value().downcast_ref::<Identity>().is_some());
    }

    #[rstest]
    fn sequence_requires_callable() {
        let error = Identity::new(Identity::new(1))
            .sequence(&Value::from(1))
            .unwrap_err();
        assert_eq!(error.kind(), ErrorKind::ArgumentShape);
        assert_eq!(
            error.to_string(),
            "Identity.sequence: Applicative Function required"
        );
    }

    #[rstest]
    #[case(Value::from(1))]
    #[case(Value::from(vec![Value::from(1)]))]
    fn sequence_requires_wrapped_applicative(#[case] wrapped: Value) {
        let error = Identity::new(wrapped)
            .sequence(&Identity::type_rep())
            .unwrap_err();
        assert_eq!(error.to_string(), "Identity.sequence: Must wrap an Applicative");
    }

    #[rstest]
    fn traverse_requires_applicative_result() {
        let error = Identity::new(1)
            .traverse(&Function::new(|value| value), &Identity::type_rep())
            .unwrap_err();
        assert_eq!(error.kind(), ErrorKind::CapabilityViolation);
        assert_eq!(
            error.to_string(),
            "Identity.traverse: First function must return an Applicative"
        );
    }

    #[rstest]
    fn traverse_requires_callable_second_argument() {
        let error = Identity::new(1)
            .traverse(
                &Function::lift(|n: i64| Identity::new(n)),
                &Value::from("not applicative"),
            )
            .unwrap_err();
        assert_eq!(error.kind(), ErrorKind::ArgumentShape);
        assert_eq!(
            error.to_string(),
            "Identity.traverse: Applicative function required for second argument"
        );
    }

    #[rstest]
    fn traverse_wraps_result_contents() {
        let result = Identity::new(2)
            .traverse(
                &Function::lift(|n: i64| Identity::new(n * 10)),
                &Identity::type_rep(),
            )
            .unwrap();
        assert_eq!(result.to_string(), "Identity Identity 20");
    }
}
