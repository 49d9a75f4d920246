//! Validation errors.

use thiserror::Error;

/// Result type for button construction and parsing.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// A button field failed validation.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("{field} exceeds {max} characters (got {actual})")]
    TooLong {
        field: &'static str,
        max: usize,
        actual: usize,
    },

    #[error("{field} is not a valid URL: {reason}")]
    InvalidUrl { field: &'static str, reason: String },

    #[error("phoneNumber does not match required pattern: {value:?}")]
    InvalidPhoneNumber { value: String },

    #[error("type is out of valid range: {value:?}")]
    UnknownType { value: String },

    #[error("{field} could not be encoded: {reason}")]
    Encoding { field: &'static str, reason: String },

    #[error("{field} is required for this button type")]
    MissingField { field: &'static str },

    #[error("{field} is invalid: {reason}")]
    InvalidValue { field: &'static str, reason: String },
}

impl ValidationError {
    /// Name of the field that failed.
    pub fn field(&self) -> &'static str {
        match self {
            Self::TooLong { field, .. }
            | Self::InvalidUrl { field, .. }
            | Self::Encoding { field, .. }
            | Self::MissingField { field }
            | Self::InvalidValue { field, .. } => *field,
            Self::InvalidPhoneNumber { .. } => "phoneNumber",
            Self::UnknownType { .. } => "type",
        }
    }
}
