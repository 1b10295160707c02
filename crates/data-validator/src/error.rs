//! Validation Error Types

use thiserror::Error;

/// Errors during record validation
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    /// Value out of allowed range
    #[error("{field} value {value} is out of range [{min}, {max}]")]
    OutOfRange {
        field: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },

    /// Token is not parseable as the declared type
    #[error("{field} value '{value}' is not a valid number")]
    Parse { field: &'static str, value: String },

    /// Token parsed as a float but is NaN or infinite
    #[error("{field} value '{value}' is not finite")]
    NotFinite { field: &'static str, value: String },

    /// Value below the configured minimum
    #[error("{field} value {value} is below the minimum {min}")]
    BelowMinimum {
        field: &'static str,
        value: f64,
        min: f64,
    },

    /// Categorical value outside its allowed set
    #[error("{field} value '{value}' is not one of {{0, 1}}")]
    Category { field: &'static str, value: String },

    /// Empty token where a value is required
    #[error("missing value for field {0}")]
    MissingField(&'static str),
}

impl ValidationError {
    /// Field the error refers to
    pub fn field(&self) -> &'static str {
        match self {
            ValidationError::OutOfRange { field, .. }
            | ValidationError::Parse { field, .. }
            | ValidationError::NotFinite { field, .. }
            | ValidationError::BelowMinimum { field, .. }
            | ValidationError::Category { field, .. }
            | ValidationError::MissingField(field) => field,
        }
    }
}
