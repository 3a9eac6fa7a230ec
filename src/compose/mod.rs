//! Function composition utilities.
//!
//! # Helper Functions
//!
//! - [`identity`]: The identity function - returns its argument unchanged
//! - [`constant`]: Creates a function that always returns the same value
//! - [`flip`]: Swaps the arguments of a binary function
//! - [`compose`]: Composes two functions right to left
//!
//! Dynamic counterparts are provided as associated functions of
//! [`Function`](crate::typeclass::Function): `Function::identity`,
//! `Function::constant` and `Function::compose`.
//!
//! # Examples
//!
//! ```
//! use algebox::compose::{compose, flip};
//!
//! let subtract = |minuend: i32, subtrahend: i32| minuend - subtrahend;
//! let from_ten = |x: i32| flip(subtract)(x, 10);
//!
//! assert_eq!(compose(from_ten, |x: i32| x * 2)(3), 4);
//! ```

mod utils;

pub use utils::{compose, constant, flip, identity};
