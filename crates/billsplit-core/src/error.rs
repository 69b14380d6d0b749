//! Error handling for the allocation engine
//!
//! Every error is detected synchronously by the operation that raises it,
//! leaves the caller's state untouched, and is recoverable by correcting the
//! input and invoking the operation again.

use crate::input::InputField;
use thiserror::Error;

/// Errors raised by engine operations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SplitError {
    /// A required numeric field is missing, zero, negative, or non-numeric
    #[error("{field}: {reason}")]
    InvalidInput { field: InputField, reason: String },

    /// Custom contribution percentages do not add up to 100
    #[error("Total percentage is {actual_sum:.1}%. It should be 100%.")]
    PercentageMismatch { actual_sum: f64 },

    /// At least one contributor must always remain
    #[error("Cannot remove the only contributor")]
    CannotRemove,

    /// Custom contribution was requested for a single person
    #[error("Custom contribution requires more than one person (currently {number_of_people})")]
    ModeUnavailable { number_of_people: u32 },
}

impl SplitError {
    /// Create an input validation error
    pub fn invalid_input(field: InputField, reason: impl Into<String>) -> Self {
        Self::InvalidInput { field, reason: reason.into() }
    }

    /// Get the error category for logging
    pub fn category(&self) -> &'static str {
        match self {
            SplitError::InvalidInput { .. } => "invalid_input",
            SplitError::PercentageMismatch { .. } => "percentage_mismatch",
            SplitError::CannotRemove => "cannot_remove",
            SplitError::ModeUnavailable { .. } => "mode_unavailable",
        }
    }

    /// The input field at fault, if any
    pub fn field(&self) -> Option<InputField> {
        match self {
            SplitError::InvalidInput { field, .. } => Some(*field),
            _ => None,
        }
    }

    /// No error in this domain is fatal; every one is fixed by new input.
    pub fn is_recoverable(&self) -> bool {
        true
    }
}

/// Result type alias for engine operations
pub type SplitResult<T> = Result<T, SplitError>;
