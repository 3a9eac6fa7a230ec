//! Monad type class - sequencing computations within a context.
//!
//! This module provides the `Monad` trait, which extends `Applicative` with
//! the ability to sequence computations where each step can depend on the
//! result of the previous step.
//!
//! # Laws
//!
//! All `Monad` implementations must satisfy these laws:
//!
//! ## Left Identity Law
//!
//! Lifting a pure value and chaining a function is the same as applying the
//! function:
//!
//! ```text
//! Self::of(a).chain(f) == f(a)
//! ```
//!
//! ## Right Identity Law
//!
//! ```text
//! m.chain(Self::of) == m
//! ```
//!
//! ## Associativity Law
//!
//! ```text
//! m.chain(f).chain(g) == m.chain(|x| f(x).chain(g))
//! ```
//!
//! # Examples
//!
//! ```rust
//! use algebox::typeclass::{Applicative, Function, Identity, Monad, Value};
//!
//! let halve = Function::lift(|n: i64| Identity::new(n / 2));
//! let result = Identity::of(Value::from(84)).chain(&halve).unwrap();
//! assert_eq!(result.value(), &Value::from(42));
//!
//! // The chained function must stay inside Identity.
//! let escape = Function::new(|value| value);
//! assert!(Identity::new(1).chain(&escape).is_err());
//! ```

use super::applicative::Applicative;
use super::error::TypeError;
use super::function::Function;
use super::guard::require_instance;
use super::identity::Identity;

/// A type class for applicatives that can sequence dependent computations.
pub trait Monad: Applicative {
    /// Applies a function returning a container of the same type and returns
    /// that container.
    ///
    /// # Errors
    ///
    /// Returns a nominal mismatch if `function` returns a value of another
    /// type, or the error raised by `function` itself.
    fn chain(&self, function: &Function) -> Result<Self, TypeError>;
}

// =============================================================================
// Identity Implementation
// =============================================================================

impl Monad for Identity {
    fn chain(&self, function: &Function) -> Result<Self, TypeError> {
        let result = function.call(self.value().clone())?;
        require_instance::<Self>(
            "Identity.chain",
            &Self::tag(),
            &result,
            "Function must return an Identity",
        )
        .cloned()
    }
}
