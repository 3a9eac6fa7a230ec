//! Semigroup type class - associative combination.
//!
//! A `Semigroup` combines two values of the same type into one. Containers
//! receive the right-hand side as a [`Value`] and guard its type before
//! combining.
//!
//! # Laws
//!
//! ## Associativity Law
//!
//! ```text
//! a.concat(b).concat(c) == a.concat(b.concat(c))
//! ```
//!
//! # Examples
//!
//! ```rust
//! use algebox::control::tuple2;
//! use algebox::typeclass::{Semigroup, Value};
//!
//! let left = tuple2("a", vec![Value::from(1)]);
//! let right = tuple2("b", vec![Value::from(2)]);
//!
//! let combined = left.concat(&Value::from(right)).unwrap();
//! assert_eq!(combined.to_string(), r#"Tuple( "ab", [ 1, 2 ] )"#);
//! ```

use super::error::TypeError;
use super::value::Value;

/// A type class for types with an associative binary operation.
pub trait Semigroup: Sized {
    /// Combines `self` with `other`, in that order.
    ///
    /// # Errors
    ///
    /// Returns a nominal mismatch if `other` is not of the same type, or a
    /// capability violation if the contents cannot be combined.
    fn concat(&self, other: &Value) -> Result<Self, TypeError>;
}
