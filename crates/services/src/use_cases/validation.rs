//! Common validation helpers for use cases.

/// Validation error type.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("{field_name} cannot be empty")]
    Empty { field_name: &'static str },

    #[error("{field_name} is invalid: {reason}")]
    Invalid {
        field_name: &'static str,
        reason: String,
    },
}

impl ValidationError {
    pub fn invalid(field_name: &'static str, reason: impl Into<String>) -> Self {
        Self::Invalid {
            field_name,
            reason: reason.into(),
        }
    }
}

/// Validate a string is non-empty after trimming.
pub fn require_non_empty(value: &str, field_name: &'static str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::Empty { field_name });
    }
    Ok(())
}

/// Validate a collection has at least one element.
pub fn require_any<T>(values: &[T], field_name: &'static str) -> Result<(), ValidationError> {
    if values.is_empty() {
        return Err(ValidationError::Empty { field_name });
    }
    Ok(())
}

/// Validate a number is strictly greater than zero.
pub fn require_positive(value: i64, field_name: &'static str) -> Result<(), ValidationError> {
    if value <= 0 {
        return Err(ValidationError::invalid(
            field_name,
            format!("must be greater than zero (got {})", value),
        ));
    }
    Ok(())
}

/// Validate a number is zero or greater.
pub fn require_non_negative(value: i64, field_name: &'static str) -> Result<(), ValidationError> {
    if value < 0 {
        return Err(ValidationError::invalid(
            field_name,
            format!("must not be negative (got {})", value),
        ));
    }
    Ok(())
}
