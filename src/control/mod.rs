//! Containers built on the capability-check core.
//!
//! - [`Pair`]: An ordered product of two values
//! - [`Tuple`]: Fixed-arity products of 1 to 10 values, one nominal type per
//!   arity
//! - [`Star`]: Kleisli arrows `a -> M b` over an inner Monad chosen at runtime
//!
//! [`Identity`](crate::typeclass::Identity), the trivial Monad, lives next to
//! the type classes it is the reference instance of.
//!
//! # Examples
//!
//! ## Tuples
//!
//! ```rust
//! use algebox::control::{TupleFamily, tuple2};
//! use algebox::typeclass::{Semigroup, Value};
//!
//! let family = TupleFamily::new(2).unwrap();
//! let left = family.construct(vec![Value::from("a"), Value::from("b")]).unwrap();
//! let combined = left.concat(&Value::from(tuple2("c", "d"))).unwrap();
//! assert_eq!(combined.to_string(), r#"Tuple( "ac", "bd" )"#);
//! ```
//!
//! ## Stars over a Pair
//!
//! ```rust
//! use algebox::control::{Pair, StarFamily};
//! use algebox::typeclass::{Function, Identity, Strong};
//!
//! let family = StarFamily::new(&Identity::type_rep()).unwrap();
//! let negate = family.construct(Function::lift(|n: i64| Identity::new(-n)));
//!
//! let result = negate.first().run_with(Pair::new(3, "label")).unwrap();
//! assert_eq!(result.to_string(), r#"Identity Pair( -3, "label" )"#);
//! ```

mod pair;
mod star;
mod tuple;

pub use pair::{Pair, PairType};
pub use star::{Star, StarFamily};
pub use tuple::{
    MAX_SIZE, Tuple, TupleFamily, tuple1, tuple2, tuple3, tuple4, tuple5, tuple6, tuple7,
    tuple8, tuple9, tuple10,
};
