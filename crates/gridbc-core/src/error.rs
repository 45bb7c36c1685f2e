//! Error types for boundary construction and evaluation.
//!
//! Two kinds of failure exist: configuration mistakes caught while a
//! boundary is being built, and point queries that fall outside the region
//! a boundary can answer for. Neither is transient, so callers are expected
//! to surface the message verbatim rather than retry.

use std::error::Error;
use std::fmt;

/// Errors from building or evaluating grid boundaries.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum BoundaryError {
    /// A boundary specification is malformed or contradictory.
    ///
    /// Raised at construction time for axis mismatches, wrong side tagging,
    /// unsupported type identifiers, wrong-length sequences, unused mapping
    /// keys and value arrays of the wrong shape.
    InvalidConfiguration {
        /// What went wrong, naming the offending configuration value.
        reason: String,
    },
    /// A point query lies outside the region the boundary can evaluate.
    ///
    /// Along the boundary axis this means more than one step beyond
    /// `[0, size)` with no fill value supplied.
    DomainError {
        /// Axis along which the index is out of range.
        axis: usize,
        /// The offending index component.
        index: isize,
        /// Number of grid points along `axis`.
        size: usize,
    },
}

impl BoundaryError {
    /// Shorthand for [`BoundaryError::InvalidConfiguration`].
    pub fn invalid(reason: impl Into<String>) -> Self {
        Self::InvalidConfiguration {
            reason: reason.into(),
        }
    }
}

impl fmt::Display for BoundaryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidConfiguration { reason } => {
                write!(f, "invalid boundary configuration: {reason}")
            }
            Self::DomainError { axis, index, size } => {
                write!(
                    f,
                    "index {index} on axis {axis} is outside the evaluable range [-1, {size}]"
                )
            }
        }
    }
}

impl Error for BoundaryError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_configuration_message_carries_reason() {
        let err = BoundaryError::invalid("unsupported type 'foo'");
        assert_eq!(
            err.to_string(),
            "invalid boundary configuration: unsupported type 'foo'"
        );
    }

    #[test]
    fn domain_error_message_names_axis_and_index() {
        let err = BoundaryError::DomainError {
            axis: 1,
            index: -2,
            size: 4,
        };
        let msg = err.to_string();
        assert!(msg.contains("-2"), "{msg}");
        assert!(msg.contains("axis 1"), "{msg}");
        assert!(msg.contains("[-1, 4]"), "{msg}");
    }
}
