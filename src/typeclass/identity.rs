//! Identity container - the trivial single-value Monad.
//!
//! `Identity` wraps exactly one value and adds no behaviour. It serves as:
//!
//! - The simplest lawful Functor, Applicative and Monad
//! - The default inner Monad for [`Star`](crate::control::Star)
//! - A model for testing typeclass laws
//!
//! Its typeclass implementations live next to the traits themselves
//! ([`Functor`](super::Functor), [`Applicative`](super::Applicative),
//! [`Monad`](super::Monad), [`Setoid`](super::Setoid),
//! [`Traversable`](super::Traversable)).

use std::any::Any;
use std::fmt;

use super::applicative::Applicative;
use super::capability::{Capabilities, Capability};
use super::error::TypeError;
use super::functor::Functor;
use super::instance::{Instance, TypeRep};
use super::monad::Monad;
use super::nominal::{TypeDescriptor, TypeTag};
use super::setoid::Setoid;
use super::value::Value;
use super::{Function, inspect};

/// The identity container.
///
/// # Examples
///
/// ```rust
/// use algebox::typeclass::{Function, Functor, Identity, Monad, Value};
///
/// let wrapped = Identity::new(41);
/// let next = wrapped.map(&Function::lift(|number: i64| number + 1)).unwrap();
/// assert_eq!(next.value(), &Value::from(42));
///
/// let chained = next
///     .chain(&Function::lift(|number: i64| Identity::new(number * 2)))
///     .unwrap();
/// assert_eq!(chained.to_string(), "Identity 84");
/// ```
#[derive(Debug, Clone)]
pub struct Identity(Value);

impl Identity {
    /// The Identity family descriptor. Identity is not versioned.
    pub const DESCRIPTOR: TypeDescriptor = TypeDescriptor::new(
        "Identity",
        None,
        Capabilities::new(&[
            Capability::Ap,
            Capability::Chain,
            Capability::Equals,
            Capability::Map,
            Capability::Of,
            Capability::Sequence,
            Capability::Traverse,
        ]),
    );

    /// Creates a new `Identity` wrapping the given value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use algebox::typeclass::{Identity, Value};
    ///
    /// let x = Identity::new("hello");
    /// assert_eq!(x.value(), &Value::from("hello"));
    /// ```
    pub fn new(value: impl Into<Value>) -> Self {
        Self(value.into())
    }

    /// Returns a reference to the wrapped value.
    pub const fn value(&self) -> &Value {
        &self.0
    }

    /// Consumes the `Identity` and returns the wrapped value.
    pub fn into_inner(self) -> Value {
        self.0
    }

    /// The type tag shared by every `Identity`.
    pub fn tag() -> TypeTag {
        TypeTag::for_family(&Self::DESCRIPTOR)
    }

    /// The Identity type representative.
    ///
    /// Calling it constructs an `Identity`; it is a valid inner Monad for
    /// [`StarFamily`](crate::control::StarFamily).
    pub fn type_rep() -> Value {
        Value::type_rep(IdentityType)
    }

    /// A function wrapping its argument in an `Identity`.
    pub fn constructor() -> Function {
        Function::new(|value| Value::from(Self(value)))
    }
}

impl From<Identity> for Value {
    fn from(identity: Identity) -> Self {
        Self::instance(identity)
    }
}

impl fmt::Display for Identity {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(&Instance::inspect(self))
    }
}

impl Instance for Identity {
    fn type_tag(&self) -> TypeTag {
        Self::tag()
    }

    fn capabilities(&self) -> Capabilities {
        Self::DESCRIPTOR.capabilities
    }

    fn inspect(&self) -> String {
        format!("Identity{}", inspect(&self.0))
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn equals_erased(&self, other: &Value) -> bool {
        self.equals(other)
    }

    fn map_erased(&self, function: &Function) -> Result<Value, TypeError> {
        self.map(function).map(Value::from)
    }

    fn ap_erased(&self, other: &Value) -> Result<Value, TypeError> {
        self.ap(other).map(Value::from)
    }

    fn chain_erased(&self, function: &Function) -> Result<Value, TypeError> {
        self.chain(function).map(Value::from)
    }

    fn of_erased(&self, value: Value) -> Result<Value, TypeError> {
        Ok(Self::of(value).into())
    }
}

/// The Identity type representative.
#[derive(Debug, Clone, Copy, Default)]
pub struct IdentityType;

impl TypeRep for IdentityType {
    fn type_tag(&self) -> TypeTag {
        Identity::tag()
    }

    fn capabilities(&self) -> Capabilities {
        Identity::DESCRIPTOR.capabilities
    }

    fn construct(&self, arguments: Vec<Value>) -> Result<Value, TypeError> {
        arguments
            .into_iter()
            .next()
            .map(|value| Identity(value).into())
            .ok_or_else(|| TypeError::construction("Identity", "Must wrap something"))
    }

    fn of(&self, value: Value) -> Result<Value, TypeError> {
        Ok(Identity::of(value).into())
    }
}
