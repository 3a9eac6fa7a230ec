//! Pair - an ordered product of exactly two values.
//!
//! `Pair` is the input shape of the strong-profunctor operations of
//! [`Star`](super::Star): `first` runs a computation on the first slot,
//! `second` on the second, and `both` on each of them.
//!
//! As a Functor, a `Pair` maps its **second** slot; [`Pair::bimap`] maps both.
//!
//! # Examples
//!
//! ```rust
//! use algebox::control::Pair;
//! use algebox::typeclass::{Function, Functor, Value};
//!
//! let pair = Pair::new("label", 2);
//! let mapped = pair.map(&Function::lift(|n: i64| n * 10)).unwrap();
//! assert_eq!(mapped.to_string(), r#"Pair( "label", 20 )"#);
//! assert_eq!(mapped.swap().fst(), &Value::from(20));
//! ```

use std::any::Any;
use std::fmt;

use crate::typeclass::{
    Capabilities, Capability, Function, Functor, Instance, Semigroup, Setoid, TypeDescriptor,
    TypeError, TypeRep, TypeTag, Value, join, require_instance,
};

/// An ordered pair of values.
#[derive(Debug, Clone)]
pub struct Pair {
    first: Value,
    second: Value,
}

impl Pair {
    /// The Pair family descriptor.
    pub const DESCRIPTOR: TypeDescriptor = TypeDescriptor::new(
        "Pair",
        Some(1),
        Capabilities::new(&[
            Capability::Bimap,
            Capability::Concat,
            Capability::Equals,
            Capability::Map,
        ]),
    );

    /// Creates a pair.
    pub fn new(first: impl Into<Value>, second: impl Into<Value>) -> Self {
        Self {
            first: first.into(),
            second: second.into(),
        }
    }

    /// The type tag shared by every `Pair`.
    pub fn tag() -> TypeTag {
        TypeTag::for_family(&Self::DESCRIPTOR)
    }

    /// The Pair type representative.
    pub fn type_rep() -> Value {
        Value::type_rep(PairType)
    }

    /// Returns the first slot.
    pub const fn fst(&self) -> &Value {
        &self.first
    }

    /// Returns the second slot.
    pub const fn snd(&self) -> &Value {
        &self.second
    }

    /// Returns a pair with the slots exchanged.
    #[must_use]
    pub fn swap(&self) -> Self {
        Self::new(self.second.clone(), self.first.clone())
    }

    /// Returns both slots, in order.
    pub fn to_array(&self) -> Vec<Value> {
        vec![self.first.clone(), self.second.clone()]
    }

    /// Maps `left` over the first slot and `right` over the second.
    ///
    /// # Errors
    ///
    /// Returns the first error raised by either function.
    pub fn bimap(&self, left: &Function, right: &Function) -> Result<Self, TypeError> {
        Ok(Self::new(
            left.call(self.first.clone())?,
            right.call(self.second.clone())?,
        ))
    }

    /// Calls `function` with both slots as positional arguments and returns
    /// its result.
    ///
    /// # Errors
    ///
    /// Returns the error raised by `function`.
    pub fn merge(&self, function: &Function) -> Result<Value, TypeError> {
        function.apply(self.to_array())
    }
}

impl From<Pair> for Value {
    fn from(pair: Pair) -> Self {
        Self::instance(pair)
    }
}

impl fmt::Display for Pair {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(&Instance::inspect(self))
    }
}

impl Functor for Pair {
    fn map(&self, function: &Function) -> Result<Self, TypeError> {
        Ok(Self::new(
            self.first.clone(),
            function.call(self.second.clone())?,
        ))
    }
}

impl Semigroup for Pair {
    fn concat(&self, other: &Value) -> Result<Self, TypeError> {
        let other: &Self = require_instance("Pair.concat", &Self::tag(), other, "Pair required")?;
        Ok(Self::new(
            self.first.concat(&other.first)?,
            self.second.concat(&other.second)?,
        ))
    }
}

impl Setoid for Pair {
    fn equals(&self, other: &Value) -> bool {
        other.downcast_ref::<Self>().is_some_and(|other| {
            self.first.equals(&other.first) && self.second.equals(&other.second)
        })
    }
}

impl Instance for Pair {
    fn type_tag(&self) -> TypeTag {
        Self::tag()
    }

    fn capabilities(&self) -> Capabilities {
        Self::DESCRIPTOR.capabilities
    }

    fn inspect(&self) -> String {
        format!("Pair({} )", join(&[self.first.clone(), self.second.clone()]))
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

    fn concat_erased(&self, other: &Value) -> Result<Value, TypeError> {
        self.concat(other).map(Value::from)
    }
}

/// The Pair type representative.
#[derive(Debug, Clone, Copy, Default)]
pub struct PairType;

impl TypeRep for PairType {
    fn type_tag(&self) -> TypeTag {
        Pair::tag()
    }

    fn capabilities(&self) -> Capabilities {
        Pair::DESCRIPTOR.capabilities
    }

    fn construct(&self, arguments: Vec<Value>) -> Result<Value, TypeError> {
        match <[Value; 2]>::try_from(arguments) {
            Ok([first, second]) => Ok(Pair::new(first, second).into()),
            Err(_) => Err(TypeError::construction(
                "Pair",
                "Must provide a first and second value",
            )),
        }
    }
}
