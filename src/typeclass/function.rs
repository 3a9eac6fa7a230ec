//! Callable values.
//!
//! A [`Function`] is a reference-counted closure over positional [`Value`]
//! arguments. Functions may fail: an error raised inside a function (for
//! example a container operation rejecting its input) propagates unchanged to
//! whoever called it.
//!
//! # Examples
//!
//! ```rust
//! use algebox::typeclass::{Function, Value};
//!
//! let double = Function::lift(|number: i64| number * 2);
//! assert_eq!(double.call(Value::from(21)).unwrap(), Value::from(42));
//!
//! // A non-integer input is rejected by the lifted conversion.
//! assert!(double.call(Value::from("21")).is_err());
//! ```

use std::fmt;
use std::rc::Rc;

use super::error::TypeError;
use super::value::Value;

type Body = dyn Fn(Vec<Value>) -> Result<Value, TypeError>;

/// A callable value.
#[derive(Clone)]
pub struct Function {
    body: Rc<Body>,
}

impl Function {
    /// Wraps an infallible unary closure.
    ///
    /// The closure receives the first positional argument, or [`Value::Unit`]
    /// when called without arguments.
    pub fn new<F>(function: F) -> Self
    where
        F: Fn(Value) -> Value + 'static,
    {
        Self::variadic(move |arguments| Ok(function(first_argument(arguments))))
    }

    /// Wraps a fallible unary closure.
    pub fn fallible<F>(function: F) -> Self
    where
        F: Fn(Value) -> Result<Value, TypeError> + 'static,
    {
        Self::variadic(move |arguments| function(first_argument(arguments)))
    }

    /// Wraps a typed unary closure.
    ///
    /// The argument is converted with `TryFrom<Value>`; a failed conversion is
    /// reported as the function's error. The result is converted with
    /// `Into<Value>`.
    pub fn lift<A, B, F>(function: F) -> Self
    where
        A: TryFrom<Value>,
        TypeError: From<A::Error>,
        B: Into<Value>,
        F: Fn(A) -> B + 'static,
    {
        Self::fallible(move |value| Ok(function(A::try_from(value)?).into()))
    }

    /// Wraps a closure over all positional arguments.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use algebox::typeclass::{Function, Value};
    ///
    /// let count = Function::variadic(|arguments| Ok(Value::from(arguments.len() as i64)));
    /// let result = count.apply(vec![Value::Unit, Value::Unit]).unwrap();
    /// assert_eq!(result, Value::from(2));
    /// ```
    pub fn variadic<F>(function: F) -> Self
    where
        F: Fn(Vec<Value>) -> Result<Value, TypeError> + 'static,
    {
        Self {
            body: Rc::new(function),
        }
    }

    /// Calls the function with a single argument.
    ///
    /// # Errors
    ///
    /// Returns whatever error the function body raises.
    pub fn call(&self, argument: Value) -> Result<Value, TypeError> {
        (self.body)(vec![argument])
    }

    /// Calls the function with positional arguments.
    ///
    /// # Errors
    ///
    /// Returns whatever error the function body raises.
    pub fn apply(&self, arguments: Vec<Value>) -> Result<Value, TypeError> {
        (self.body)(arguments)
    }

    /// Returns `true` if both handles refer to the same closure.
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.body, &other.body)
    }

    /// Converts a callable [`Value`] into a function.
    ///
    /// Type representatives are callable: calling one constructs an instance.
    ///
    /// # Errors
    ///
    /// Returns an argument-shape error attributed to `operation` when the value
    /// is not callable.
    pub fn from_value(operation: &str, value: &Value) -> Result<Self, TypeError> {
        match value {
            Value::Function(function) => Ok(function.clone()),
            Value::Type(representative) => {
                let representative = Rc::clone(representative);
                Ok(Self::variadic(move |arguments| {
                    representative.construct(arguments)
                }))
            }
            _ => Err(TypeError::argument_shape(operation, "Function required")),
        }
    }
}

impl TryFrom<Value> for Function {
    type Error = TypeError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        Self::from_value("Function", &value)
    }
}

impl fmt::Debug for Function {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("Function")
    }
}

fn first_argument(arguments: Vec<Value>) -> Value {
    arguments.into_iter().next().unwrap_or(Value::Unit)
}
