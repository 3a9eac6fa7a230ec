//! Type class traits and the capability-check core they rest on.
//!
//! This module provides the type classes (traits) implemented by every
//! container in the crate:
//!
//! - [`Functor`]: Mapping over container values
//! - [`Applicative`]: Lifting values and applying wrapped functions
//! - [`Monad`]: Sequencing computations with dependency
//! - [`Semigroup`]: Associative combination
//! - [`Setoid`]: Value-based equality
//! - [`Traversable`]: Swapping a container with an inner Applicative
//! - [`Profunctor`], [`Strong`]: Adapting the input and output of a computation
//! - [`Semigroupoid`], [`Category`]: Composing computations
//!
//! ## Dynamic Values
//!
//! Containers wrap arbitrary runtime values. [`Value`] is the closed sum of
//! everything a container can hold, [`Function`] is the callable form, and
//! the [`Instance`] and [`TypeRep`] traits describe containers and container
//! families once their concrete type has been erased.
//!
//! ## Capability Checks
//!
//! - Predicates ([`is_monad`], [`is_semigroup`], [`is_integer`], ...) decide
//!   what a value can do
//! - The nominal registry ([`TypeDescriptor`], [`TypeTag`]) names each family
//! - The same-type guard ([`is_same_type`], [`require_same_type`]) rejects
//!   binary operations across nominal types
//!
//! Every failed check is reported as a [`TypeError`].
//!
//! # Examples
//!
//! ```rust
//! use algebox::typeclass::{
//!     Applicative, ErrorKind, Function, Identity, Monad, Value, is_monad,
//! };
//!
//! assert!(is_monad(&Identity::type_rep()));
//!
//! let lifted = Identity::of(Value::from(20));
//! let result = lifted
//!     .chain(&Function::lift(|n: i64| Identity::new(n + 22)))
//!     .unwrap();
//! assert_eq!(result.to_string(), "Identity 42");
//!
//! // Applying across families is a nominal mismatch.
//! let wrapped = Identity::new(Function::new(|value| value));
//! let error = wrapped.ap(&Value::from(vec![Value::from(1)])).unwrap_err();
//! assert_eq!(error.kind(), ErrorKind::NominalMismatch);
//! ```

mod applicative;
mod capability;
mod category;
mod error;
mod function;
mod functor;
mod guard;
mod identity;
mod inspect;
mod instance;
mod monad;
mod nominal;
mod predicates;
mod profunctor;
mod semigroup;
mod setoid;
mod traversable;
mod value;

pub use applicative::Applicative;
pub use capability::{Capabilities, Capability};
pub use category::{Category, Semigroupoid};
pub use error::{ErrorKind, TypeError};
pub use function::Function;
pub use functor::Functor;
pub use guard::{is_same_type, require_instance, require_same_type};
pub use identity::{Identity, IdentityType};
pub use inspect::inspect;
pub(crate) use inspect::join;
pub use instance::{Instance, TypeRep, missing_capability};
pub use monad::Monad;
pub use nominal::{NAMESPACE, TypeDescriptor, TypeTag, qualified_name};
pub use predicates::{
    is_applicative, is_apply, is_callable, is_chain, is_functor, is_integer, is_monad,
    is_semigroup, is_setoid, is_type,
};
pub use profunctor::{Profunctor, Strong};
pub use semigroup::Semigroup;
pub use setoid::Setoid;
pub use traversable::Traversable;
pub use value::Value;
