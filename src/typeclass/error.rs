//! Error types raised by containers and the capability-check core.
//!
//! Every operation in this crate validates its arguments before doing any
//! work. When a check fails the operation returns a [`TypeError`] naming the
//! offending operation and the shape it expected. There is no partial result
//! and no fallback value.

use std::convert::Infallible;

use thiserror::Error;

/// The category a [`TypeError`] belongs to.
///
/// # Examples
///
/// ```rust
/// use algebox::typeclass::{ErrorKind, TypeError};
///
/// let error = TypeError::construction("Identity", "Must wrap something");
/// assert_eq!(error.kind(), ErrorKind::Construction);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Wrong arity, a non-callable where a function was required, or a
    /// non-integer where an integer was required.
    ArgumentShape,
    /// A value lacks a capability the operation depends on.
    CapabilityViolation,
    /// Two values expected to share a nominal type do not.
    NominalMismatch,
    /// A family or instance could not be constructed.
    Construction,
}

/// A synchronous, immediately reported type error.
///
/// The rendered message is `"<operation>: <expected>"`, for example
/// `"Identity.map: Function required"`.
///
/// # Examples
///
/// ```rust
/// use algebox::typeclass::TypeError;
///
/// let error = TypeError::nominal_mismatch("Identity.ap", "Identity required");
/// assert_eq!(error.to_string(), "Identity.ap: Identity required");
/// assert_eq!(error.operation(), "Identity.ap");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TypeError {
    /// See [`ErrorKind::ArgumentShape`].
    #[error("{operation}: {expected}")]
    ArgumentShape {
        /// The operation that rejected its input.
        operation: String,
        /// Description of the expected input.
        expected: String,
    },
    /// See [`ErrorKind::CapabilityViolation`].
    #[error("{operation}: {expected}")]
    CapabilityViolation {
        /// The operation that rejected its input.
        operation: String,
        /// Description of the expected input.
        expected: String,
    },
    /// See [`ErrorKind::NominalMismatch`].
    #[error("{operation}: {expected}")]
    NominalMismatch {
        /// The operation that rejected its input.
        operation: String,
        /// Description of the expected input.
        expected: String,
    },
    /// See [`ErrorKind::Construction`].
    #[error("{operation}: {expected}")]
    Construction {
        /// The constructor that rejected its input.
        operation: String,
        /// Description of the expected input.
        expected: String,
    },
}

impl TypeError {
    /// Creates an [`ErrorKind::ArgumentShape`] error.
    pub fn argument_shape(operation: impl Into<String>, expected: impl Into<String>) -> Self {
        Self::ArgumentShape {
            operation: operation.into(),
            expected: expected.into(),
        }
    }

    /// Creates an [`ErrorKind::CapabilityViolation`] error.
    pub fn capability_violation(
        operation: impl Into<String>,
        expected: impl Into<String>,
    ) -> Self {
        Self::CapabilityViolation {
            operation: operation.into(),
            expected: expected.into(),
        }
    }

    /// Creates an [`ErrorKind::NominalMismatch`] error.
    pub fn nominal_mismatch(operation: impl Into<String>, expected: impl Into<String>) -> Self {
        Self::NominalMismatch {
            operation: operation.into(),
            expected: expected.into(),
        }
    }

    /// Creates an [`ErrorKind::Construction`] error.
    pub fn construction(operation: impl Into<String>, expected: impl Into<String>) -> Self {
        Self::Construction {
            operation: operation.into(),
            expected: expected.into(),
        }
    }

    /// Returns the category of this error.
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::ArgumentShape { .. } => ErrorKind::ArgumentShape,
            Self::CapabilityViolation { .. } => ErrorKind::CapabilityViolation,
            Self::NominalMismatch { .. } => ErrorKind::NominalMismatch,
            Self::Construction { .. } => ErrorKind::Construction,
        }
    }

    /// Returns the name of the operation that reported the error.
    pub fn operation(&self) -> &str {
        match self {
            Self::ArgumentShape { operation, .. }
            | Self::CapabilityViolation { operation, .. }
            | Self::NominalMismatch { operation, .. }
            | Self::Construction { operation, .. } => operation,
        }
    }

    /// Returns the description of the expected input.
    pub fn expected(&self) -> &str {
        match self {
            Self::ArgumentShape { expected, .. }
            | Self::CapabilityViolation { expected, .. }
            | Self::NominalMismatch { expected, .. }
            | Self::Construction { expected, .. } => expected,
        }
    }
}

// Conversions through `TryFrom<Value> for Value` are infallible.
impl From<Infallible> for TypeError {
    fn from(never: Infallible) -> Self {
        match never {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(TypeError::argument_shape("Identity.map", "Function required"), ErrorKind::ArgumentShape)]
    #[case(TypeError::capability_violation("2-Tuple.concat", "Semigroups required"), ErrorKind::CapabilityViolation)]
    #[case(TypeError::nominal_mismatch("Identity.ap", "Identity required"), ErrorKind::NominalMismatch)]
    #[case(TypeError::construction("Star", "Monad required for construction"), ErrorKind::Construction)]
    fn kind_matches_constructor(#[case] error: TypeError, #[case] expected: ErrorKind) {
        assert_eq!(error.kind(), expected);
    }

    #[rstest]
    fn display_joins_operation_and_expectation() {
        let error = TypeError::argument_shape("3-Tuple.mapAll", "Requires 3 functions");
        assert_eq!(error.to_string(), "3-Tuple.mapAll: Requires 3 functions");
        assert_eq!(error.operation(), "3-Tuple.mapAll");
        assert_eq!(error.expected(), "Requires 3 functions");
    }

    #[rstest]
    fn errors_compare_structurally() {
        let first = TypeError::construction("Identity", "Must wrap something");
        let second = TypeError::construction("Identity", "Must wrap something");
        let third = TypeError::argument_shape("Identity", "Must wrap something");

        assert_eq!(first, second);
        assert_ne!(first, third);
    }
}
