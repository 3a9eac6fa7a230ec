//! Same-type guard.
//!
//! Binary operations (`ap`, `chain`, `concat`, `compose`, `equals`) only make
//! sense between values of one nominal type. The guard compares nominal names,
//! which already carry arity (`2-Tuple`) and inner type (`Star( Identity )`),
//! so a Tuple of another length or a Star over another Monad is rejected just
//! like a value from an unrelated family.
//!
//! A type representative and the instances it builds share a nominal name,
//! so `is_same_type(&Identity::type_rep(), &identity_value)` holds.

use super::error::TypeError;
use super::instance::Instance;
use super::nominal::TypeTag;
use super::value::Value;

/// Returns `true` if both values have the same nominal type.
///
/// # Examples
///
/// ```rust
/// use algebox::typeclass::{Identity, Value, is_same_type};
///
/// let first = Value::from(Identity::new(1));
/// let second = Value::from(Identity::new("two"));
///
/// assert!(is_same_type(&first, &second));
/// assert!(is_same_type(&Identity::type_rep(), &first));
/// assert!(!is_same_type(&first, &Value::from(1)));
/// ```
pub fn is_same_type(reference: &Value, candidate: &Value) -> bool {
    reference.type_tag().is_same_nominal(&candidate.type_tag())
}

/// Fails with a nominal mismatch unless `candidate` has the nominal type
/// described by `reference`.
///
/// # Errors
///
/// Returns [`TypeError::NominalMismatch`] attributed to `operation`, with
/// `expected` as its description.
pub fn require_same_type(
    operation: &str,
    reference: &TypeTag,
    candidate: &Value,
    expected: &str,
) -> Result<(), TypeError> {
    let found = candidate.type_tag();
    if reference.is_same_nominal(&found) {
        Ok(())
    } else {
        tracing::debug!(
            operation,
            expected = reference.name(),
            found = found.name(),
            "nominal type mismatch"
        );
        Err(TypeError::nominal_mismatch(operation, expected))
    }
}

/// Checks `candidate` like [`require_same_type`] and downcasts it.
///
/// A foreign instance that merely reports the same nominal name is rejected
/// as well.
///
/// # Errors
///
/// Returns [`TypeError::NominalMismatch`] attributed to `operation`.
pub fn require_instance<'a, T: Instance>(
    operation: &str,
    reference: &TypeTag,
    candidate: &'a Value,
    expected: &str,
) -> Result<&'a T, TypeError> {
    require_same_type(operation, reference, candidate, expected)?;
    candidate.downcast_ref::<T>().ok_or_else(|| {
        tracing::debug!(operation, expected = reference.name(), "foreign instance");
        TypeError::nominal_mismatch(operation, expected)
    })
}
