//! Error types shared by the sizing pipeline and the input layer.

use thiserror::Error;

/// Failure of a single sizing run.
///
/// Every variant is local to one computation; nothing is retried and no
/// partial report is produced.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SizingError {
    /// An input field is out of range or not a finite number.
    #[error("invalid input: {field} {message}")]
    InvalidInput {
        /// Dotted field path (e.g. `"site.dod_percent"`).
        field: String,
        /// Human-readable constraint description.
        message: String,
    },
    /// A percentage of zero reached the capacity chain.
    #[error("division by zero: {field} must be greater than 0")]
    DivisionByZero {
        /// Name of the zero-valued divisor.
        field: String,
    },
    /// The input file or preset could not be loaded.
    #[error("config error: {field} {message}")]
    Config {
        /// Dotted field path or source name.
        field: String,
        /// Human-readable description.
        message: String,
    },
}

impl SizingError {
    pub(crate) fn invalid(field: &str, message: impl Into<String>) -> Self {
        Self::InvalidInput {
            field: field.to_string(),
            message: message.into(),
        }
    }
}

/// One input field that failed its range check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldViolation {
    /// Bare input field name (e.g. `"dod_percent"`).
    pub field: &'static str,
    /// Constraint the value broke.
    pub message: &'static str,
}

impl From<FieldViolation> for SizingError {
    fn from(v: FieldViolation) -> Self {
        Self::invalid(v.field, v.message)
    }
}

/// Convenience alias for results of sizing operations.
pub type SizingResult<T> = Result<T, SizingError>;
