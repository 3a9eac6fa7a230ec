//! The dynamic value universe.
//!
//! [`Value`] is the closed set of things a container can wrap or receive when
//! the exact type is only known at runtime: primitives, arrays, functions,
//! type representatives and container instances. Values are immutable and
//! cheap to clone; containers are shared through `Rc`.
//!
//! # Examples
//!
//! ```rust
//! use algebox::typeclass::Value;
//!
//! let array = Value::from(vec![Value::from(1), Value::from("two")]);
//! assert_eq!(array.to_string(), r#"[ 1, "two" ]"#);
//! assert_eq!(array.type_tag().name(), "Array");
//! ```

use std::fmt;
use std::rc::Rc;

use super::capability::{Capabilities, Capability};
use super::error::TypeError;
use super::function::Function;
use super::guard::require_same_type;
use super::inspect::render;
use super::instance::{Instance, TypeRep, missing_capability};
use super::nominal::TypeTag;
use super::predicates::{is_integer, is_semigroup};

const EQUALS_ONLY: Capabilities = Capabilities::new(&[Capability::Equals]);
const TEXT_CAPABILITIES: Capabilities =
    Capabilities::new(&[Capability::Concat, Capability::Equals]);
const ARRAY_CAPABILITIES: Capabilities =
    Capabilities::new(&[Capability::Concat, Capability::Equals, Capability::Map]);

/// A runtime value.
#[derive(Clone, Default)]
pub enum Value {
    /// The absence of a value.
    #[default]
    Unit,
    /// A boolean.
    Boolean(bool),
    /// A whole number.
    Integer(i64),
    /// A floating point number.
    Float(f64),
    /// A string.
    Text(String),
    /// An ordered sequence of values.
    Array(Vec<Value>),
    /// A callable.
    Function(Function),
    /// A type representative, such as a container family.
    Type(Rc<dyn TypeRep>),
    /// A container instance.
    Instance(Rc<dyn Instance>),
}

impl Value {
    /// Wraps a container instance.
    pub fn instance<T: Instance>(instance: T) -> Self {
        Self::Instance(Rc::new(instance))
    }

    /// Wraps a type representative.
    pub fn type_rep<T: TypeRep + 'static>(representative: T) -> Self {
        Self::Type(Rc::new(representative))
    }

    /// Returns the runtime type tag of this value.
    ///
    /// Both integers and floats report `Number`.
    pub fn type_tag(&self) -> TypeTag {
        match self {
            Self::Unit => TypeTag::primitive("Unit"),
            Self::Boolean(_) => TypeTag::primitive("Boolean"),
            Self::Integer(_) | Self::Float(_) => TypeTag::primitive("Number"),
            Self::Text(_) => TypeTag::primitive("String"),
            Self::Array(_) => TypeTag::primitive("Array"),
            Self::Function(_) => TypeTag::primitive("Function"),
            Self::Type(representative) => representative.type_tag(),
            Self::Instance(instance) => instance.type_tag(),
        }
    }

    /// Returns the capabilities this value declares.
    pub fn capabilities(&self) -> Capabilities {
        match self {
            Self::Unit | Self::Boolean(_) | Self::Integer(_) | Self::Float(_) => EQUALS_ONLY,
            Self::Text(_) => TEXT_CAPABILITIES,
            Self::Array(_) => ARRAY_CAPABILITIES,
            Self::Function(_) => Capabilities::NONE,
            Self::Type(representative) => representative.capabilities(),
            Self::Instance(instance) => instance.capabilities(),
        }
    }

    /// Downcasts an instance value to a concrete container type.
    pub fn downcast_ref<T: Instance>(&self) -> Option<&T> {
        match self {
            Self::Instance(instance) => instance.as_any().downcast_ref::<T>(),
            _ => None,
        }
    }

    /// Returns the integer this value represents, if any.
    ///
    /// Floats without a fractional part count as integers when they fit in
    /// an `i64`.
    pub fn as_integer(&self) -> Option<i64> {
        match self {
            Self::Integer(number) => Some(*number),
            Self::Float(number) => exact_integer(*number),
            _ => None,
        }
    }

    /// Returns the number this value represents, if any.
    #[allow(clippy::cast_precision_loss)]
    pub fn as_float(&self) -> Option<f64> {
        match self {
            Self::Integer(number) => Some(*number as f64),
            Self::Float(number) => Some(*number),
            _ => None,
        }
    }

    /// Returns the string slice of a text value.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text),
            _ => None,
        }
    }

    /// Returns the elements of an array value.
    pub fn as_array(&self) -> Option<&[Self]> {
        match self {
            Self::Array(items) => Some(items),
            _ => None,
        }
    }

    /// Returns the function of a function value.
    pub const fn as_function(&self) -> Option<&Function> {
        match self {
            Self::Function(function) => Some(function),
            _ => None,
        }
    }

    /// Deep, value-based equality.
    ///
    /// Numbers compare exactly across integer and float, arrays compare
    /// element-wise, functions compare by identity, and instances defer to
    /// their own `equals`.
    #[allow(clippy::float_cmp)]
    pub fn equals(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Unit, Self::Unit) => true,
            (Self::Boolean(left), Self::Boolean(right)) => left == right,
            (Self::Integer(left), Self::Integer(right)) => left == right,
            (Self::Float(left), Self::Float(right)) => left == right,
            (Self::Integer(left), Self::Float(right)) | (Self::Float(right), Self::Integer(left)) => {
                exact_integer(*right) == Some(*left)
            }
            (Self::Text(left), Self::Text(right)) => left == right,
            (Self::Array(left), Self::Array(right)) => {
                left.len() == right.len()
                    && left.iter().zip(right).all(|(left, right)| left.equals(right))
            }
            (Self::Function(left), Self::Function(right)) => left.ptr_eq(right),
            (Self::Type(left), Self::Type(right)) => left.type_tag() == right.type_tag(),
            (Self::Instance(instance), _) => instance.equals_erased(other),
            _ => false,
        }
    }

    /// Calls a callable value.
    ///
    /// # Errors
    ///
    /// Returns an argument-shape error if the value is not callable, or the
    /// error raised by the call.
    pub fn call(&self, arguments: Vec<Self>) -> Result<Self, TypeError> {
        Function::from_value("call", self)?.apply(arguments)
    }

    /// Maps a function over a functor value.
    ///
    /// Arrays map element-wise; instances dispatch to their own `map`.
    ///
    /// # Errors
    ///
    /// Returns a capability violation if the value is not a functor.
    pub fn map(&self, function: &Function) -> Result<Self, TypeError> {
        match self {
            Self::Array(items) => items
                .iter()
                .map(|item| function.call(item.clone()))
                .collect::<Result<Vec<_>, _>>()
                .map(Self::Array),
            Self::Instance(instance) => instance.map_erased(function),
            _ => Err(self.missing(Capability::Map)),
        }
    }

    /// Applies the function wrapped by this value to the contents of `other`.
    ///
    /// # Errors
    ///
    /// Returns a capability violation if the value is not an apply.
    pub fn ap(&self, other: &Self) -> Result<Self, TypeError> {
        match self {
            Self::Instance(instance) => instance.ap_erased(other),
            _ => Err(self.missing(Capability::Ap)),
        }
    }

    /// Sequences a dependent computation over a chain value.
    ///
    /// # Errors
    ///
    /// Returns a capability violation if the value is not a chain.
    pub fn chain(&self, function: &Function) -> Result<Self, TypeError> {
        match self {
            Self::Instance(instance) => instance.chain_erased(function),
            _ => Err(self.missing(Capability::Chain)),
        }
    }

    /// Lifts a value into the applicative this value belongs to.
    ///
    /// Works both on instances and on type representatives.
    ///
    /// # Errors
    ///
    /// Returns a capability violation if no `of` is available.
    pub fn of(&self, value: Self) -> Result<Self, TypeError> {
        match self {
            Self::Instance(instance) => instance.of_erased(value),
            Self::Type(representative) => representative.of(value),
            _ => Err(self.missing(Capability::Of)),
        }
    }

    /// Combines two semigroup values of the same type.
    ///
    /// # Errors
    ///
    /// Returns a capability violation if either side is not a semigroup and a
    /// nominal mismatch if the two sides differ in type.
    pub fn concat(&self, other: &Self) -> Result<Self, TypeError> {
        let operation = format!("{}.concat", self.type_tag().name());
        if !(is_semigroup(self) && is_semigroup(other)) {
            return Err(TypeError::capability_violation(
                operation,
                "Semigroups required",
            ));
        }
        require_same_type(&operation, &self.type_tag(), other, "Semigroups of the same type required")?;

        match (self, other) {
            (Self::Text(left), Self::Text(right)) => Ok(Self::Text(format!("{left}{right}"))),
            (Self::Array(left), Self::Array(right)) => {
                Ok(Self::Array(left.iter().chain(right).cloned().collect()))
            }
            (Self::Instance(instance), _) => instance.concat_erased(other),
            _ => Err(TypeError::capability_violation(
                operation,
                "Semigroups required",
            )),
        }
    }

    fn missing(&self, capability: Capability) -> TypeError {
        missing_capability(&self.type_tag(), capability)
    }
}

/// `2^63`, the first float above every `i64`.
const I64_BOUND: f64 = 9_223_372_036_854_775_808.0;

/// Converts a float to the `i64` it equals, if there is one.
#[allow(clippy::cast_possible_truncation)]
fn exact_integer(number: f64) -> Option<i64> {
    let candidate = Value::Float(number);
    (is_integer(&candidate) && (-I64_BOUND..I64_BOUND).contains(&number))
        .then(|| number as i64)
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        self.equals(other)
    }
}

impl fmt::Display for Value {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(&render(self))
    }
}

impl fmt::Debug for Value {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(&render(self))
    }
}

// =============================================================================
// Conversions into Value
// =============================================================================

impl From<()> for Value {
    fn from((): ()) -> Self {
        Self::Unit
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Self::Boolean(value)
    }
}

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Self::Integer(i64::from(value))
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Self::Text(value.to_owned())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<Vec<Self>> for Value {
    fn from(value: Vec<Self>) -> Self {
        Self::Array(value)
    }
}

impl From<Function> for Value {
    fn from(value: Function) -> Self {
        Self::Function(value)
    }
}

// =============================================================================
// Conversions out of Value
// =============================================================================

fn mismatch(expected: &str, value: &Value) -> TypeError {
    TypeError::argument_shape(
        "Value.try_into",
        format!("{expected} required, got {}", value.type_tag().name()),
    )
}

impl TryFrom<Value> for i64 {
    type Error = TypeError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        value.as_integer().ok_or_else(|| mismatch("Integer", &value))
    }
}

impl TryFrom<Value> for f64 {
    type Error = TypeError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        value.as_float().ok_or_else(|| mismatch("Number", &value))
    }
}

impl TryFrom<Value> for bool {
    type Error = TypeError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Boolean(boolean) => Ok(boolean),
            other => Err(mismatch("Boolean", &other)),
        }
    }
}

impl TryFrom<Value> for String {
    type Error = TypeError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Text(text) => Ok(text),
            other => Err(mismatch("String", &other)),
        }
    }
}

impl TryFrom<Value> for Vec<Value> {
    type Error = TypeError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Array(items) => Ok(items),
            other => Err(mismatch("Array", &other)),
        }
    }
}

static_assertions::assert_impl_all!(Value: Clone, Default, fmt::Debug, fmt::Display);
static_assertions::assert_not_impl_any!(Value: Send, Sync);
