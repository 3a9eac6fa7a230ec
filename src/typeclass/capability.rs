//! Capability descriptors.
//!
//! A capability is the name of a typeclass method a family declares it
//! supports. Each family carries a fixed [`Capabilities`] set used by the
//! predicate engine and for introspection. Calls themselves never go through
//! this table; they are direct method calls on the container.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize, Serializer};

/// A single typeclass method name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Capability {
    /// Applicative `ap`.
    Ap,
    /// Bifunctor `bimap`.
    Bimap,
    /// Monad `chain`.
    Chain,
    /// Semigroupoid `compose`.
    Compose,
    /// Semigroup `concat`.
    Concat,
    /// Profunctor `contramap`.
    Contramap,
    /// Setoid `equals`.
    Equals,
    /// Category `id`.
    Id,
    /// Functor `map`.
    Map,
    /// Applicative `of`.
    Of,
    /// Profunctor `promap`.
    Promap,
    /// Traversable `sequence`.
    Sequence,
    /// Traversable `traverse`.
    Traverse,
}

impl Capability {
    /// Returns the method name as it appears in error messages.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Ap => "ap",
            Self::Bimap => "bimap",
            Self::Chain => "chain",
            Self::Compose => "compose",
            Self::Concat => "concat",
            Self::Contramap => "contramap",
            Self::Equals => "equals",
            Self::Id => "id",
            Self::Map => "map",
            Self::Of => "of",
            Self::Promap => "promap",
            Self::Sequence => "sequence",
            Self::Traverse => "traverse",
        }
    }
}

impl fmt::Display for Capability {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.name())
    }
}

/// The fixed set of capabilities a family declares.
///
/// # Examples
///
/// ```rust
/// use algebox::typeclass::{Capabilities, Capability};
///
/// const SEMIGROUP_ONLY: Capabilities = Capabilities::new(&[Capability::Concat]);
///
/// assert!(SEMIGROUP_ONLY.implements(Capability::Concat));
/// assert!(!SEMIGROUP_ONLY.implements(Capability::Map));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Capabilities(&'static [Capability]);

impl Capabilities {
    /// A set declaring nothing.
    pub const NONE: Self = Self(&[]);

    /// Creates a capability set from a static list.
    pub const fn new(capabilities: &'static [Capability]) -> Self {
        Self(capabilities)
    }

    /// Returns `true` if `capability` is declared.
    pub fn implements(&self, capability: Capability) -> bool {
        self.0.contains(&capability)
    }

    /// Returns `true` if every capability in `required` is declared.
    pub fn implements_all(&self, required: &[Capability]) -> bool {
        required.iter().all(|capability| self.implements(*capability))
    }

    /// Returns the declared capabilities in declaration order.
    pub const fn as_slice(&self) -> &'static [Capability] {
        self.0
    }
}

#[cfg(feature = "serde")]
impl Serialize for Capabilities {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.as_slice())
    }
}
