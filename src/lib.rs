//! # algebox
//!
//! Algebraic data-type containers with runtime capability checks.
//!
//! ## Overview
//!
//! Containers wrap dynamic [`Value`](typeclass::Value)s and implement the
//! usual functional abstractions. Before an operation touches its arguments
//! it checks what they can do and whether they have the right nominal type,
//! and reports a [`TypeError`](typeclass::TypeError) instead of producing a
//! malformed container.
//!
//! - **Type Classes**: Functor, Applicative, Monad, Semigroup, Setoid,
//!   Traversable, Profunctor, Category
//! - **Capability Core**: predicates, nominal type tags, the same-type guard
//! - **Containers**: Identity, Pair, Tuple (arity 1 to 10), Star
//! - **Function Composition**: identity, constant, flip, compose
//!
//! ## Feature Flags
//!
//! - `typeclass`: Type class traits, the capability core and Identity
//! - `compose`: Function composition utilities
//! - `control`: Pair, Tuple and Star
//! - `serde`: Serialization of type tags, descriptors and capabilities
//! - `full`: Enable all features
//!
//! ## Example
//!
//! ```rust
//! use algebox::prelude::*;
//!
//! let family = TupleFamily::new(3).unwrap();
//! let tuple = family
//!     .construct(vec![Value::from(1), Value::from(2), Value::from(3)])
//!     .unwrap();
//!
//! // Only the last slot is mapped.
//! let mapped = tuple.map(&Function::lift(|n: i64| n * 10)).unwrap();
//! assert_eq!(mapped.to_string(), "Tuple( 1, 2, 30 )");
//!
//! // Arity is part of the type.
//! assert!(mapped.concat(&Value::from(tuple2("a", "b"))).is_err());
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::redundant_closure_for_method_calls)]

/// Prelude module for convenient imports.
///
/// Re-exports commonly used types and traits.
///
/// # Usage
///
/// ```rust
/// use algebox::prelude::*;
/// ```
pub mod prelude {

    #[cfg(feature = "typeclass")]
    pub use crate::typeclass::*;

    #[cfg(feature = "compose")]
    pub use crate::compose::*;

    #[cfg(feature = "control")]
    pub use crate::control::*;
}

#[cfg(feature = "typeclass")]
pub mod typeclass;

#[cfg(feature = "compose")]
pub mod compose;

#[cfg(feature = "control")]
pub mod control;
