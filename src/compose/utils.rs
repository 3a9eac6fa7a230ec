//! Helper functions (combinators) for function composition.
//!
//! This module provides fundamental combinators that are commonly used
//! in functional programming:
//!
//! - [`identity`]: The identity function (I combinator)
//! - [`constant`]: Creates a function that always returns the same value (K combinator)
//! - [`flip`]: Swaps the arguments of a binary function (C combinator)
//! - [`compose`]: Right-to-left composition of two functions (B combinator)
//!
//! The same combinators exist for dynamic [`Function`]s as
//! [`Function::identity`], [`Function::constant`] and [`Function::compose`].

use crate::typeclass::{Function, Value};

/// Returns the value unchanged.
///
/// The identity function is the unit element of function composition:
/// - `compose(identity, f)` is equivalent to `f`
/// - `compose(f, identity)` is equivalent to `f`
///
/// # Examples
///
/// ```
/// use algebox::compose::identity;
///
/// assert_eq!(identity(42), 42);
/// assert_eq!(identity("hello"), "hello");
/// ```
#[inline]
pub fn identity<T>(value: T) -> T {
    value
}

/// Creates a function that always returns the given value, ignoring its input.
///
/// # Examples
///
/// ```
/// use algebox::compose::constant;
///
/// let values: Vec<i32> = vec![1, 2, 3].into_iter().map(constant(0)).collect();
/// assert_eq!(values, vec![0, 0, 0]);
/// ```
#[inline]
pub fn constant<T: Clone, U>(value: T) -> impl Fn(U) -> T {
    move |_| value.clone()
}

/// Swaps the arguments of a binary function.
///
/// # Laws
///
/// - **Double flip identity**: `flip(flip(f)) == f`
/// - **Flip definition**: `flip(f)(a, b) == f(b, a)`
///
/// # Examples
///
/// ```
/// use algebox::compose::flip;
///
/// fn subtract(minuend: i32, subtrahend: i32) -> i32 {
///     minuend - subtrahend
/// }
///
/// assert_eq!(flip(subtract)(3, 10), 7);
/// ```
#[inline]
pub fn flip<A, B, C, F>(function: F) -> impl Fn(B, A) -> C
where
    F: Fn(A, B) -> C,
{
    move |second_argument, first_argument| function(first_argument, second_argument)
}

/// Composes two functions right to left: `compose(f, g)(x) == f(g(x))`.
///
/// # Examples
///
/// ```
/// use algebox::compose::compose;
///
/// let add_one = |x: i32| x + 1;
/// let double = |x: i32| x * 2;
///
/// assert_eq!(compose(add_one, double)(5), 11);
/// ```
#[inline]
pub fn compose<A, B, C, F, G>(outer: F, inner: G) -> impl Fn(A) -> C
where
    F: Fn(B) -> C,
    G: Fn(A) -> B,
{
    move |value| outer(inner(value))
}

impl Function {
    /// The dynamic identity function.
    ///
    /// Every call returns its first argument, or [`Value::Unit`] without
    /// arguments.
    #[must_use]
    pub fn identity() -> Self {
        Self::new(identity)
    }

    /// A dynamic function that always returns `value`.
    #[must_use]
    pub fn constant(value: Value) -> Self {
        Self::new(constant(value))
    }

    /// Composes two dynamic functions right to left.
    ///
    /// An error raised by `inner` short-circuits; `outer` is never called.
    ///
    /// # Examples
    ///
    /// ```
    /// use algebox::typeclass::{Function, Value};
    ///
    /// let add_one = Function::lift(|x: i64| x + 1);
    /// let double = Function::lift(|x: i64| x * 2);
    ///
    /// let composed = Function::compose(&add_one, &double);
    /// assert_eq!(composed.call(Value::from(5)).unwrap(), Value::from(11));
    /// ```
    #[must_use]
    pub fn compose(outer: &Self, inner: &Self) -> Self {
        let (outer, inner) = (outer.clone(), inner.clone());
        Self::variadic(move |arguments| outer.call(inner.apply(arguments)?))
    }
}
