//! Contracts for values that cross the dynamic boundary.
//!
//! Concrete containers are used through the typeclass traits
//! ([`Functor`](super::Functor), [`Monad`](super::Monad), ...), which are
//! checked at compile time. Once a container is stored in a
//! [`Value`](super::Value) its concrete type is erased; the [`Instance`]
//! trait is what the rest of the crate can still ask of it. Likewise a
//! [`TypeRep`] stands for a whole family, the way a constructor object does,
//! and is what [`StarFamily`](crate::control::StarFamily) validates when it
//! is handed an inner Monad.
//!
//! Erased operations default to a capability violation, so an implementor
//! only overrides the ones its [`Capabilities`] declare.
//!
//! # Implementing a caller-supplied Monad
//!
//! ```rust
//! use std::any::Any;
//! use algebox::typeclass::{
//!     Capabilities, Capability, Function, Instance, TypeError, TypeRep, TypeTag, Value,
//!     inspect,
//! };
//!
//! const CAPABILITIES: Capabilities =
//!     Capabilities::new(&[Capability::Map, Capability::Chain, Capability::Of]);
//!
//! struct Boxed(Value);
//! struct BoxedType;
//!
//! fn tag() -> TypeTag {
//!     TypeTag::new("Boxed", "example/Boxed@1")
//! }
//!
//! impl Instance for Boxed {
//!     fn type_tag(&self) -> TypeTag { tag() }
//!     fn capabilities(&self) -> Capabilities { CAPABILITIES }
//!     fn inspect(&self) -> String { format!("Boxed{}", inspect(&self.0)) }
//!     fn as_any(&self) -> &dyn Any { self }
//!     fn map_erased(&self, function: &Function) -> Result<Value, TypeError> {
//!         Ok(Value::instance(Boxed(function.call(self.0.clone())?)))
//!     }
//!     fn chain_erased(&self, function: &Function) -> Result<Value, TypeError> {
//!         function.call(self.0.clone())
//!     }
//!     fn of_erased(&self, value: Value) -> Result<Value, TypeError> {
//!         Ok(Value::instance(Boxed(value)))
//!     }
//! }
//!
//! impl TypeRep for BoxedType {
//!     fn type_tag(&self) -> TypeTag { tag() }
//!     fn capabilities(&self) -> Capabilities { CAPABILITIES }
//!     fn construct(&self, arguments: Vec<Value>) -> Result<Value, TypeError> {
//!         Ok(Value::instance(Boxed(arguments.into_iter().next().unwrap_or_default())))
//!     }
//!     fn of(&self, value: Value) -> Result<Value, TypeError> {
//!         Ok(Value::instance(Boxed(value)))
//!     }
//! }
//!
//! let boxed = Value::type_rep(BoxedType).of(Value::from(2)).unwrap();
//! assert_eq!(boxed.to_string(), "Boxed 2");
//! ```

use std::any::Any;

use super::capability::{Capabilities, Capability};
use super::error::TypeError;
use super::function::Function;
use super::nominal::TypeTag;
use super::value::Value;

/// A container instance whose concrete type has been erased.
pub trait Instance: Any {
    /// The nominal type tag of this instance.
    fn type_tag(&self) -> TypeTag;

    /// The capabilities this instance's family declares.
    fn capabilities(&self) -> Capabilities;

    /// The diagnostic representation, e.g. `Identity 3`.
    fn inspect(&self) -> String;

    /// Upcast used for downcasting to the concrete container.
    fn as_any(&self) -> &dyn Any;

    /// Value-based equality against an arbitrary value.
    fn equals_erased(&self, _other: &Value) -> bool {
        false
    }

    /// Functor `map`.
    ///
    /// # Errors
    ///
    /// Capability violation unless overridden.
    fn map_erased(&self, _function: &Function) -> Result<Value, TypeError> {
        Err(missing_capability(&self.type_tag(), Capability::Map))
    }

    /// Applicative `ap`: apply the wrapped function to `other`'s contents.
    ///
    /// # Errors
    ///
    /// Capability violation unless overridden.
    fn ap_erased(&self, _other: &Value) -> Result<Value, TypeError> {
        Err(missing_capability(&self.type_tag(), Capability::Ap))
    }

    /// Monad `chain`.
    ///
    /// # Errors
    ///
    /// Capability violation unless overridden.
    fn chain_erased(&self, _function: &Function) -> Result<Value, TypeError> {
        Err(missing_capability(&self.type_tag(), Capability::Chain))
    }

    /// Semigroup `concat`.
    ///
    /// # Errors
    ///
    /// Capability violation unless overridden.
    fn concat_erased(&self, _other: &Value) -> Result<Value, TypeError> {
        Err(missing_capability(&self.type_tag(), Capability::Concat))
    }

    /// Applicative `of`, lifting a value into this instance's family.
    ///
    /// # Errors
    ///
    /// Capability violation unless overridden.
    fn of_erased(&self, _value: Value) -> Result<Value, TypeError> {
        Err(missing_capability(&self.type_tag(), Capability::Of))
    }
}

/// A type representative: the value standing for a whole family.
pub trait TypeRep {
    /// The nominal type tag shared by every instance of the family.
    fn type_tag(&self) -> TypeTag;

    /// The capabilities the family declares.
    fn capabilities(&self) -> Capabilities;

    /// Builds an instance from positional arguments.
    ///
    /// # Errors
    ///
    /// Construction or argument-shape errors specific to the family.
    fn construct(&self, arguments: Vec<Value>) -> Result<Value, TypeError>;

    /// Applicative `of`.
    ///
    /// # Errors
    ///
    /// Capability violation unless overridden.
    fn of(&self, _value: Value) -> Result<Value, TypeError> {
        Err(missing_capability(&self.type_tag(), Capability::Of))
    }
}

/// The error reported when a value is asked for a capability it lacks.
pub fn missing_capability(tag: &TypeTag, capability: Capability) -> TypeError {
    tracing::debug!(
        type_name = tag.name(),
        capability = capability.name(),
        "capability not implemented"
    );
    TypeError::capability_violation(
        format!("{}.{capability}", tag.name()),
        format!("{} does not implement {capability}", tag.name()),
    )
}
