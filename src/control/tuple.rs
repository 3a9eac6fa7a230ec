//! Tuple - fixed-arity ordered products of 1 to 10 values.
//!
//! A Tuple's arity is part of its nominal type: a `2-Tuple` and a `3-Tuple`
//! are different types, and binary operations between them are rejected by
//! the same-type guard.
//!
//! There are two ways to build one:
//!
//! - [`TupleFamily::new`] selects the family of a runtime arity and checks
//!   the number of values at construction
//! - [`tuple1`] through [`tuple10`] fix the arity at compile time
//!
//! # Mapping
//!
//! [`Functor::map`] applies its function to the **last** slot only; every
//! other slot is carried over unchanged. Use [`Tuple::map_all`] to transform
//! each slot.
//!
//! ```rust
//! use algebox::control::tuple3;
//! use algebox::typeclass::{Function, Functor, Value};
//!
//! let mapped = tuple3(1, 2, 3)
//!     .map(&Function::lift(|n: i64| n * 10))
//!     .unwrap();
//! assert_eq!(mapped.to_array(), vec![Value::from(1), Value::from(2), Value::from(30)]);
//! ```

use std::any::Any;
use std::fmt;

use arrayvec::ArrayVec;

use crate::typeclass::{
    Capabilities, Capability, Function, Functor, Instance, Semigroup, Setoid, TypeDescriptor,
    TypeError, TypeRep, TypeTag, Value, is_integer, is_same_type, is_semigroup, join,
    require_instance,
};

/// The largest supported arity.
pub const MAX_SIZE: usize = 10;

type Parts = ArrayVec<Value, MAX_SIZE>;

/// The family of Tuples of one arity.
///
/// # Examples
///
/// ```rust
/// use algebox::control::TupleFamily;
/// use algebox::typeclass::Value;
///
/// let family = TupleFamily::new(2).unwrap();
/// let tuple = family.construct(vec![Value::from(1), Value::from("a")]).unwrap();
/// assert_eq!(tuple.to_string(), r#"Tuple( 1, "a" )"#);
///
/// assert!(family.construct(vec![Value::from(1)]).is_err());
/// assert!(TupleFamily::new(11).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TupleFamily {
    size: usize,
}

impl TupleFamily {
    /// Selects the family of Tuples of `size` slots.
    ///
    /// # Errors
    ///
    /// Returns a construction error unless `size` is between 1 and 10.
    pub fn new(size: usize) -> Result<Self, TypeError> {
        if (1..=MAX_SIZE).contains(&size) {
            tracing::trace!(size, "tuple family selected");
            Ok(Self { size })
        } else {
            tracing::debug!(size, "tuple size out of range");
            Err(TypeError::construction(
                "Tuple",
                "Tuple size should be a number between 1 and 10",
            ))
        }
    }

    /// The arity of this family.
    pub const fn size(&self) -> usize {
        self.size
    }

    /// The nominal type tag of this family, e.g. `3-Tuple`.
    pub fn tag(&self) -> TypeTag {
        TypeTag::sized(&Tuple::DESCRIPTOR, self.size)
    }

    /// The type representative of this family.
    pub fn type_rep(&self) -> Value {
        Value::type_rep(*self)
    }

    /// Builds a Tuple from exactly `size` values.
    ///
    /// # Errors
    ///
    /// Returns a construction error if the number of values differs from the
    /// family's arity.
    pub fn construct(&self, values: Vec<Value>) -> Result<Tuple, TypeError> {
        if values.len() != self.size {
            return Err(TypeError::construction(
                self.tag().name(),
                format!("Expected {} values, but got {}", self.size, values.len()),
            ));
        }
        Ok(Tuple {
            parts: values.into_iter().collect(),
        })
    }
}

impl TypeRep for TupleFamily {
    fn type_tag(&self) -> TypeTag {
        self.tag()
    }

    fn capabilities(&self) -> Capabilities {
        Tuple::DESCRIPTOR.capabilities
    }

    fn construct(&self, arguments: Vec<Value>) -> Result<Value, TypeError> {
        Self::construct(self, arguments).map(Value::from)
    }
}

/// An ordered product of 1 to 10 values.
#[derive(Debug, Clone)]
pub struct Tuple {
    parts: Parts,
}

impl Tuple {
    /// The Tuple family descriptor, shared by every arity.
    pub const DESCRIPTOR: TypeDescriptor = TypeDescriptor::new(
        "Tuple",
        Some(1),
        Capabilities::new(&[Capability::Concat, Capability::Equals, Capability::Map]),
    );

    /// The number of slots.
    pub fn size(&self) -> usize {
        self.parts.len()
    }

    /// The arity-qualified type tag of this Tuple.
    pub fn tag(&self) -> TypeTag {
        TypeTag::sized(&Self::DESCRIPTOR, self.size())
    }

    /// The family this Tuple belongs to.
    pub fn family(&self) -> TupleFamily {
        TupleFamily { size: self.size() }
    }

    /// Returns a copy of the slots, in order.
    pub fn to_array(&self) -> Vec<Value> {
        self.parts.to_vec()
    }

    /// Returns the slot at a 1-based `index`.
    ///
    /// # Errors
    ///
    /// Returns an argument-shape error unless `index` is an integer between 1
    /// and the Tuple's size.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use algebox::control::tuple2;
    /// use algebox::typeclass::Value;
    ///
    /// let tuple = tuple2("first", "second");
    /// assert_eq!(tuple.project(2).unwrap(), Value::from("second"));
    /// assert!(tuple.project(0).is_err());
    /// assert!(tuple.project(1.5).is_err());
    /// ```
    pub fn project(&self, index: impl Into<Value>) -> Result<Value, TypeError> {
        let index = index.into();
        is_integer(&index)
            .then(|| index.as_integer())
            .flatten()
            .and_then(|index| usize::try_from(index).ok())
            .filter(|index| (1..=self.size()).contains(index))
            .map(|index| self.parts[index - 1].clone())
            .ok_or_else(|| {
                TypeError::argument_shape(
                    self.operation("project"),
                    format!("Index should be an integer between 1 and {}", self.size()),
                )
            })
    }

    /// Applies one function per slot, pointwise.
    ///
    /// # Errors
    ///
    /// Returns an argument-shape error unless exactly one function per slot is
    /// given, or the first error raised by a function.
    pub fn map_all(&self, functions: &[Function]) -> Result<Self, TypeError> {
        if functions.len() != self.size() {
            return Err(TypeError::argument_shape(
                self.operation("mapAll"),
                format!("Requires {} functions", self.size()),
            ));
        }
        let parts = self
            .parts
            .iter()
            .zip(functions)
            .map(|(part, function)| function.call(part.clone()))
            .collect::<Result<Parts, _>>()?;
        Ok(Self { parts })
    }

    /// Calls `function` with the slots as positional arguments and returns its
    /// result.
    ///
    /// # Errors
    ///
    /// Returns the error raised by `function`.
    pub fn merge(&self, function: &Function) -> Result<Value, TypeError> {
        function.apply(self.to_array())
    }

    fn operation(&self, method: &str) -> String {
        format!("{}.{method}", self.tag().name())
    }
}

impl From<Tuple> for Value {
    fn from(tuple: Tuple) -> Self {
        Self::instance(tuple)
    }
}

impl fmt::Display for Tuple {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(&Instance::inspect(self))
    }
}

impl Functor for Tuple {
    fn map(&self, function: &Function) -> Result<Self, TypeError> {
        let mut parts = self.parts.clone();
        if let Some(last) = parts.last_mut() {
            *last = function.call(last.clone())?;
        }
        Ok(Self { parts })
    }
}

impl Semigroup for Tuple {
    fn concat(&self, other: &Value) -> Result<Self, TypeError> {
        let operation = self.operation("concat");
        let other: &Self = require_instance(
            &operation,
            &self.tag(),
            other,
            "Tuple of the same length required",
        )?;

        let parts = self
            .parts
            .iter()
            .zip(&other.parts)
            .map(|(left, right)| {
                if is_semigroup(left) && is_same_type(left, right) {
                    left.concat(right)
                } else {
                    tracing::debug!(
                        operation = operation.as_str(),
                        left = left.type_tag().name(),
                        right = right.type_tag().name(),
                        "tuple slots cannot be combined"
                    );
                    Err(TypeError::capability_violation(
                        operation.as_str(),
                        "Both Tuples must contain Semigroups of the same type",
                    ))
                }
            })
            .collect::<Result<Parts, _>>()?;
        Ok(Self { parts })
    }
}

impl Setoid for Tuple {
    fn equals(&self, other: &Value) -> bool {
        other.downcast_ref::<Self>().is_some_and(|other| {
            self.size() == other.size()
                && self
                    .parts
                    .iter()
                    .zip(&other.parts)
                    .all(|(left, right)| left.equals(right))
        })
    }
}

impl Instance for Tuple {
    fn type_tag(&self) -> TypeTag {
        self.tag()
    }

    fn capabilities(&self) -> Capabilities {
        Self::DESCRIPTOR.capabilities
    }

    fn inspect(&self) -> String {
        format!("Tuple({} )", join(&self.parts))
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

macro_rules! fixed_arity_constructors {
    ($($size:literal => ($($slot:ident),+);)+) => {
        paste::paste! {
            $(
                #[doc = "Creates a " $size "-Tuple."]
                pub fn [<tuple $size>]($($slot: impl Into<Value>),+) -> Tuple {
                    Tuple {
                        parts: [$(Into::<Value>::into($slot)),+].into_iter().collect(),
                    }
                }
            )+
        }
    };
}

fixed_arity_constructors! {
    1 => (first);
    2 => (first, second);
    3 => (first, second, third);
    4 => (first, second, third, fourth);
    5 => (first, second, third, fourth, fifth);
    6 => (first, second, third, fourth, fifth, sixth);
    7 => (first, second, third, fourth, fifth, sixth, seventh);
    8 => (first, second, third, fourth, fifth, sixth, seventh, eighth);
    9 => (first, second, third, fourth, fifth, sixth, seventh, eighth, ninth);
    10 => (first, second, third, fourth, fifth, sixth, seventh, eighth, ninth, tenth);
}
