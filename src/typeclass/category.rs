//! Semigroupoid and Category type classes - composing computations.
//!
//! # Laws
//!
//! ## Associativity Law
//!
//! ```text
//! a.compose(b).compose(c) == a.compose(b.compose(c))
//! ```
//!
//! ## Identity Laws
//!
//! ```text
//! a.compose(a.id()) == a
//! a.id().compose(a) == a
//! ```

use super::error::TypeError;
use super::value::Value;

/// A type class for values that compose associatively.
pub trait Semigroupoid: Sized {
    /// Runs `self`, then `other` on its result.
    ///
    /// # Errors
    ///
    /// Returns a nominal mismatch if `other` is not of the same type.
    fn compose(&self, other: &Value) -> Result<Self, TypeError>;
}

/// A semigroupoid with an identity element.
pub trait Category: Semigroupoid {
    /// The identity of the category `self` belongs to.
    #[must_use]
    fn id(&self) -> Self;
}
