//! Capability predicates.
//!
//! Total, side-effect-free checks over arbitrary [`Value`]s. Containers call
//! these at the top of every operation that receives a dynamic value and fail
//! immediately when a predicate does not hold.
//!
//! # Examples
//!
//! ```rust
//! use algebox::typeclass::{Identity, Value, is_integer, is_monad, is_semigroup};
//!
//! assert!(is_integer(&Value::from(4)));
//! assert!(is_integer(&Value::from(4.0)));
//! assert!(!is_integer(&Value::from(4.5)));
//!
//! assert!(is_semigroup(&Value::from("text")));
//! assert!(!is_semigroup(&Value::from(4)));
//!
//! assert!(is_monad(&Identity::type_rep()));
//! assert!(is_monad(&Value::from(Identity::new(1))));
//! ```

use super::capability::Capability;
use super::value::Value;

/// Returns `true` if the value can be invoked: a function, or a type
/// representative (which constructs an instance when called).
pub const fn is_callable(value: &Value) -> bool {
    matches!(value, Value::Function(_) | Value::Type(_))
}

/// Returns `true` if the value is a whole, finite number.
#[allow(clippy::float_cmp)]
pub fn is_integer(value: &Value) -> bool {
    match value {
        Value::Integer(_) => true,
        Value::Float(number) => number.is_finite() && number.trunc() == *number,
        _ => false,
    }
}

/// Returns `true` if the value exposes `concat`.
pub fn is_semigroup(value: &Value) -> bool {
    value.capabilities().implements(Capability::Concat)
}

/// Returns `true` if the value exposes `equals`.
pub fn is_setoid(value: &Value) -> bool {
    value.capabilities().implements(Capability::Equals)
}

/// Returns `true` if the value exposes `map`.
pub fn is_functor(value: &Value) -> bool {
    value.capabilities().implements(Capability::Map)
}

/// Returns `true` if the value exposes `map` and `ap`.
pub fn is_apply(value: &Value) -> bool {
    value
        .capabilities()
        .implements_all(&[Capability::Map, Capability::Ap])
}

/// Returns `true` if the value exposes `map`, `ap` and `of`.
pub fn is_applicative(value: &Value) -> bool {
    value
        .capabilities()
        .implements_all(&[Capability::Map, Capability::Ap, Capability::Of])
}

/// Returns `true` if the value exposes `map` and `chain`.
pub fn is_chain(value: &Value) -> bool {
    value
        .capabilities()
        .implements_all(&[Capability::Map, Capability::Chain])
}

/// Returns `true` if the value exposes `map`, `chain` and `of`.
pub fn is_monad(value: &Value) -> bool {
    value
        .capabilities()
        .implements_all(&[Capability::Map, Capability::Chain, Capability::Of])
}

/// Returns `true` if the value's nominal type is `name`.
///
/// # Examples
///
/// ```rust
/// use algebox::typeclass::{Identity, Value, is_type};
///
/// assert!(is_type("Identity", &Value::from(Identity::new(1))));
/// assert!(is_type("Number", &Value::from(1)));
/// assert!(!is_type("Identity", &Value::from(1)));
/// ```
pub fn is_type(name: &str, value: &Value) -> bool {
    value.type_tag().name() == name
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::typeclass::{Function, Identity};
    use rstest::rstest;

    fn function() -> Value {
        Value::from(Function::new(|value| value))
    }

    #[rstest]
    #[case(function(), true)]
    #[case(Identity::type_rep(), true)]
    #[case(Value::from(1), false)]
    #[case(Value::from("f"), false)]
    #[case(Value::from(Identity::new(1)), false)]
    fn callable(#[case] value: Value, #[case] expected: bool) {
        assert_eq!(is_callable(&value), expected);
    }

    #[rstest]
    #[case(Value::from(0), true)]
    #[case(Value::from(-12), true)]
    #[case(Value::from(3.0), true)]
    #[case(Value::from(-3.0), true)]
    #[case(Value::from(3.25), false)]
    #[case(Value::from(f64::NAN), false)]
    #[case(Value::from(f64::INFINITY), false)]
    #[case(Value::from("3"), false)]
    #[case(Value::from(true), false)]
    #[case(Value::Unit, false)]
    fn integer(#[case] value: Value, #[case] expected: bool) {
        assert_eq!(is_integer(&value), expected);
    }

    #[rstest]
    #[case(Value::from("a"), true)]
    #[case(Value::from(vec![Value::from(1)]), true)]
    #[case(Value::from(1), false)]
    #[case(Value::Unit, false)]
    #[case(function(), false)]
    #[case(Value::from(Identity::new(Value::from("a"))), false)]
    fn semigroup(#[case] value: Value, #[case] expected: bool) {
        assert_eq!(is_semigroup(&value), expected);
    }

    #[rstest]
    #[case(Value::from(Identity::new(1)), true, true)]
    #[case(Identity::type_rep(), true, true)]
    #[case(Value::from(vec![Value::from(1)]), false, false)]
    #[case(Value::from(1), false, false)]
    #[case(function(), false, false)]
    fn monad_and_applicative(
        #[case] value: Value,
        #[case] monad: bool,
        #[case] applicative: bool,
    ) {
        assert_eq!(is_monad(&value), monad);
        assert_eq!(is_chain(&value), monad);
        assert_eq!(is_applicative(&value), applicative);
        assert_eq!(is_apply(&value), applicative);
    }

    #[rstest]
    fn arrays_are_functors_but_not_monads() {
        let array = Value::from(vec![Value::from(1)]);
        assert!(is_functor(&array));
        assert!(!is_monad(&array));
    }

    #[rstest]
    fn primitives_are_setoids() {
        assert!(is_setoid(&Value::from(1)));
        assert!(is_setoid(&Value::from("a")));
        assert!(!is_setoid(&function()));
    }
}
