//! Nominal type registry.
//!
//! Every container family owns a constant [`TypeDescriptor`] naming it, its
//! version and the capabilities it declares. Instances report a [`TypeTag`]
//! derived from their family's descriptor:
//!
//! - the *nominal name* (`"Identity"`, `"3-Tuple"`, `"Star( Identity )"`),
//!   compared by the same-type guard;
//! - the *qualified name* (`"algebox/Tuple@1"`,
//!   `"algebox/Star@2( algebox/Identity )"`), used for diagnostics.
//!
//! Versions are plain constants; building a tag never touches shared state.
//!
//! # Examples
//!
//! ```rust
//! use algebox::typeclass::{Capabilities, TypeDescriptor, TypeTag};
//!
//! const BOX: TypeDescriptor = TypeDescriptor::new("Box", Some(4), Capabilities::NONE);
//!
//! let tag = TypeTag::for_family(&BOX);
//! assert_eq!(tag.name(), "Box");
//! assert_eq!(tag.qualified(), "algebox/Box@4");
//! ```

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::capability::Capabilities;

/// Namespace prefix of every qualified type name.
pub const NAMESPACE: &str = "algebox";

/// Builds the qualified name of a family: `algebox/Name@Version`, or
/// `algebox/Name` for unversioned families.
///
/// # Examples
///
/// ```rust
/// use algebox::typeclass::qualified_name;
///
/// assert_eq!(qualified_name("Star", Some(2)), "algebox/Star@2");
/// assert_eq!(qualified_name("Identity", None), "algebox/Identity");
/// ```
pub fn qualified_name(name: &str, version: Option<u32>) -> String {
    version.map_or_else(
        || format!("{NAMESPACE}/{name}"),
        |version| format!("{NAMESPACE}/{name}@{version}"),
    )
}

/// Static description of a container family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct TypeDescriptor {
    /// The family name, e.g. `"Star"`.
    pub name: &'static str,
    /// The family version, if the family is versioned.
    pub version: Option<u32>,
    /// The typeclass methods the family declares.
    pub capabilities: Capabilities,
}

impl TypeDescriptor {
    /// Creates a descriptor. Intended for `const` items.
    pub const fn new(
        name: &'static str,
        version: Option<u32>,
        capabilities: Capabilities,
    ) -> Self {
        Self {
            name,
            version,
            capabilities,
        }
    }

    /// Returns the qualified name of the family.
    pub fn qualified_name(&self) -> String {
        qualified_name(self.name, self.version)
    }
}

/// The runtime type tag of a value.
///
/// Two tags denote the same nominal type iff their [`name`](Self::name)s are
/// equal. The qualified name carries the version and, for parameterized
/// families, the inner type.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TypeTag {
    name: String,
    qualified: String,
}

impl TypeTag {
    /// Creates a tag from explicit names.
    pub fn new(name: impl Into<String>, qualified: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            qualified: qualified.into(),
        }
    }

    /// Tag of a built-in value kind, whose qualified name is its bare name.
    pub fn primitive(name: &str) -> Self {
        Self::new(name, name)
    }

    /// Tag of a non-parameterized family.
    pub fn for_family(descriptor: &TypeDescriptor) -> Self {
        Self::new(descriptor.name, descriptor.qualified_name())
    }

    /// Tag of a family member distinguished by arity, e.g. `3-Tuple`.
    ///
    /// The qualified name is shared by every arity of the family.
    pub fn sized(descriptor: &TypeDescriptor, size: usize) -> Self {
        Self::new(
            format!("{size}-{}", descriptor.name),
            descriptor.qualified_name(),
        )
    }

    /// Tag of a family parameterized by an inner type, e.g. `Star( Identity )`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use algebox::typeclass::{Capabilities, TypeDescriptor, TypeTag};
    ///
    /// const OUTER: TypeDescriptor = TypeDescriptor::new("Outer", Some(2), Capabilities::NONE);
    /// const INNER: TypeDescriptor = TypeDescriptor::new("Inner", None, Capabilities::NONE);
    ///
    /// let tag = TypeTag::parameterized(&OUTER, &TypeTag::for_family(&INNER));
    /// assert_eq!(tag.name(), "Outer( Inner )");
    /// assert_eq!(tag.qualified(), "algebox/Outer@2( algebox/Inner )");
    /// ```
    pub fn parameterized(descriptor: &TypeDescriptor, inner: &Self) -> Self {
        Self::new(
            format!("{}( {} )", descriptor.name, inner.name),
            format!("{}( {} )", descriptor.qualified_name(), inner.qualified),
        )
    }

    /// The nominal name compared by the same-type guard.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The version-qualified name.
    pub fn qualified(&self) -> &str {
        &self.qualified
    }

    /// Returns `true` if both tags denote the same nominal type.
    pub fn is_same_nominal(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl fmt::Display for TypeTag {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(&self.qualified)
    }
}
