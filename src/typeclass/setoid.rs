//! Setoid type class - value equality across the dynamic boundary.
//!
//! `equals` compares a container with an arbitrary [`Value`]. Values of a
//! different nominal type are never equal, so `equals` is total and returns a
//! plain `bool`.

use super::guard::is_same_type;
use super::identity::Identity;
use super::value::Value;

/// A type class for containers with value-based equality.
pub trait Setoid {
    /// Returns `true` if `other` has the same nominal type and deep-equal
    /// contents.
    fn equals(&self, other: &Value) -> bool;
}

impl Setoid for Identity {
    fn equals(&self, other: &Value) -> bool {
        is_same_type(&Identity::type_rep(), other)
            && other
                .downcast_ref::<Self>()
                .is_some_and(|other| self.value().equals(other.value()))
    }
}
