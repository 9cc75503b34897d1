//! Error types for the SysBoard engine.

use crate::status::StatusField;
use thiserror::Error;

/// Result type for engine operations.
pub type CoreResult<T> = Result<T, CoreError>;

/// Errors that can occur in SysBoard engine operations.
///
/// None of these are fatal: every operation reports to its immediate
/// caller and leaves the engine usable.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CoreError {
    /// Value does not fit the target status field's bit width.
    #[error("invalid value {value} for status field {field}: maximum is {max}")]
    InvalidStatusValue {
        /// The field being written.
        field: StatusField,
        /// The rejected value.
        value: u8,
        /// Largest value the field can hold.
        max: u8,
    },

    /// Collection is at its capacity ceiling.
    #[error("collection at capacity ({capacity} subsystems)")]
    CapacityExceeded {
        /// The ceiling that was hit.
        capacity: usize,
    },

    /// No subsystem with the given name.
    #[error("subsystem not found: {name}")]
    NotFound {
        /// Name that was searched for.
        name: String,
    },

    /// Index outside the collection's live range.
    #[error("index {index} out of range for collection of {len}")]
    IndexOutOfRange {
        /// The rejected index.
        index: usize,
        /// Number of live records.
        len: usize,
    },

    /// Data-pending flag is clear; no payload to read.
    #[error("no data pending")]
    NoData,

    /// Bulk print requested on an empty collection.
    #[error("collection is empty")]
    EmptyCollection,

    /// Filter pattern is malformed.
    #[error("invalid filter pattern: {reason}")]
    InvalidPattern {
        /// What was wrong with the pattern text.
        reason: String,
    },
}

impl CoreError {
    /// Creates a not-found error.
    pub fn not_found(name: impl Into<String>) -> Self {
        Self::NotFound { name: name.into() }
    }

    /// Creates an invalid-pattern error.
    pub fn invalid_pattern(reason: impl Into<String>) -> Self {
        Self::InvalidPattern {
            reason: reason.into(),
        }
    }

    /// Creates an invalid-status-value error.
    #[must_use]
    pub const fn invalid_status_value(field: StatusField, value: u8) -> Self {
        Self::InvalidStatusValue {
            field,
            value,
            max: field.max_value(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_strings() {
        let err = CoreError::invalid_status_value(StatusField::Power, 2);
        assert_eq!(
            err.to_string(),
            "invalid value 2 for status field PWR: maximum is 1"
        );

        let err = CoreError::not_found("engine");
        assert_eq!(err.to_string(), "subsystem not found: engine");

        let err = CoreError::CapacityExceeded { capacity: 4 };
        assert_eq!(err.to_string(), "collection at capacity (4 subsystems)");
    }
}
