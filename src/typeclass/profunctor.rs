//! Profunctor type classes - adapting both ends of a computation.
//!
//! A `Profunctor` is contravariant in its input and covariant in its output:
//! `contramap` adapts what goes in, `map` what comes out, and `promap` both
//! at once. A `Strong` profunctor can additionally run on one side of a
//! [`Pair`](crate::control::Pair), passing the other side through.
//!
//! # Laws
//!
//! ## Identity Law
//!
//! ```text
//! p.promap(identity, identity) == p
//! ```
//!
//! ## Composition Law
//!
//! ```text
//! p.promap(f, g).promap(h, i) == p.promap(|x| f(h(x)), |x| i(g(x)))
//! ```
//!
//! Equality here is observational: both sides produce equal results for every
//! input.

use super::function::Function;
use super::functor::Functor;

/// A type class for computations whose input and output can both be adapted.
pub trait Profunctor: Functor {
    /// Pre-composes `function` with the computation's input.
    #[must_use]
    fn contramap(&self, function: &Function) -> Self;

    /// Pre-composes `left` and post-composes `right`.
    #[must_use]
    fn promap(&self, left: &Function, right: &Function) -> Self;
}

/// A profunctor that can operate on one or both sides of a pair.
pub trait Strong: Profunctor {
    /// Runs on the first slot of a pair input, passing the second through.
    #[must_use]
    fn first(&self) -> Self;

    /// Runs on the second slot of a pair input, passing the first through.
    #[must_use]
    fn second(&self) -> Self;

    /// Runs on both slots of a pair input independently.
    #[must_use]
    fn both(&self) -> Self;
}
