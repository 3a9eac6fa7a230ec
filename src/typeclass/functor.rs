//! Functor type class - mapping over container values.
//!
//! This module provides the `Functor` trait, which represents containers that
//! can have a function applied to their contents while preserving their shape.
//!
//! # Laws
//!
//! All `Functor` implementations must satisfy these laws, with equality taken
//! by the container's own [`Setoid::equals`](super::Setoid::equals):
//!
//! ## Identity Law
//!
//! ```text
//! fa.map(identity) == fa
//! ```
//!
//! ## Composition Law
//!
//! ```text
//! fa.map(f).map(g) == fa.map(|x| g(f(x)))
//! ```
//!
//! # Examples
//!
//! ```rust
//! use algebox::typeclass::{Function, Functor, Identity, Value};
//!
//! let wrapped = Identity::new(5);
//! let shown = wrapped.map(&Function::lift(|n: i64| n.to_string())).unwrap();
//! assert_eq!(shown.value(), &Value::from("5"));
//! ```

use super::error::TypeError;
use super::function::Function;
use super::identity::Identity;

/// A type class for containers that can have a function mapped over their
/// contents.
///
/// `map` returns a `Result` because the mapped [`Function`] may itself fail
/// (lifted conversions, nested container operations). Such errors propagate
/// unchanged.
pub trait Functor: Sized {
    /// Applies a function to the value(s) inside the functor.
    ///
    /// # Errors
    ///
    /// Returns the error raised by `function`, or one raised by the container
    /// while validating the result.
    fn map(&self, function: &Function) -> Result<Self, TypeError>;
}

// =============================================================================
// Identity Implementation
// =============================================================================

impl Functor for Identity {
    fn map(&self, function: &Function) -> Result<Self, TypeError> {
        function.call(self.value().clone()).map(Self::new)
    }
}
