//! Field-level validation for the sign-in form.
//!
//! These rules run locally, per field, and never block each other. They are
//! independent of the result of the authentication request.

use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum FieldError {
    #[error("This field is required.")]
    Required,
    #[error("Value is too short.")]
    TooShort,
}

impl FieldError {
    /// Stable code reported for the failure.
    pub fn code(self) -> &'static str {
        match self {
            Self::Required => "REQUIRED",
            Self::TooShort => "TOO_SHORT",
        }
    }
}

/// Required-field rule shared by the username and password inputs.
pub fn validate_required(value: &str) -> Result<(), FieldError> {
    if value.is_empty() {
        Err(FieldError::Required)
    } else {
        Ok(())
    }
}

/// Password rule: a present value shorter than `min_len` characters is `TOO_SHORT`.
///
/// An empty value passes here; emptiness is reported by [`validate_required`].
pub fn validate_password(value: &str, min_len: usize) -> Result<(), FieldError> {
    if !value.is_empty() && value.chars().count() < min_len {
        Err(FieldError::TooShort)
    } else {
        Ok(())
    }
}
