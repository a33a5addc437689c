//! Editable values of the sign-in form and the rules for reporting their errors.

use signin_business::{Credentials, FieldError, SubmittedValues, validate_password, validate_required};

/// Value the username field starts with.
pub const DEFAULT_USERNAME: &str = "kminchelle";
/// Value the password field starts with.
///
/// At 7 characters it is below the default minimum of
/// [`DEFAULT_MIN_PASSWORD_LEN`](signin_business::DEFAULT_MIN_PASSWORD_LEN), so the form
/// only submits it once the password is edited or `min_password_len` is lowered to 7.
pub const DEFAULT_PASSWORD: &str = "0lelplR";

/// One text input plus whether the user has edited it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldState {
    pub value: String,
    /// Set on the first edit, never reset.
    pub dirty: bool,
}

impl FieldState {
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            dirty: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormFields {
    pub username: FieldState,
    pub password: FieldState,
    /// A submit was attempted, so errors are reported even on untouched fields.
    pub submit_attempted: bool,
}

impl Default for FormFields {
    fn default() -> Self {
        Self {
            username: FieldState::new(DEFAULT_USERNAME),
            password: FieldState::new(DEFAULT_PASSWORD),
            submit_attempted: false,
        }
    }
}

impl FormFields {
    /// Replaces both values, e.g. with remembered credentials, without marking them edited.
    pub fn fill(&mut self, credentials: &Credentials) {
        self.username.value.clone_from(&credentials.username);
        self.password.value.clone_from(&credentials.password);
    }

    pub fn username_result(&self) -> Result<(), FieldError> {
        validate_required(&self.username.value)
    }

    pub fn password_result(&self, min_len: usize) -> Result<(), FieldError> {
        validate_required(&self.password.value)
            .and_then(|()| validate_password(&self.password.value, min_len))
    }

    /// Error to render under the username input, if any.
    pub fn username_error(&self) -> Option<FieldError> {
        self.reports(&self.username)
            .then(|| self.username_result().err())
            .flatten()
    }

    /// Error to render under the password input, if any.
    pub fn password_error(&self, min_len: usize) -> Option<FieldError> {
        self.reports(&self.password)
            .then(|| self.password_result(min_len).err())
            .flatten()
    }

    /// The password was edited and currently passes validation.
    pub fn password_confirmed(&self, min_len: usize) -> bool {
        self.password.dirty && self.password_result(min_len).is_ok()
    }

    /// Marks the form as submitted and returns the values if every field is valid.
    pub fn try_submit(&mut self, min_len: usize) -> Option<SubmittedValues> {
        self.submit_attempted = true;

        if self.username_result().is_err() || self.password_result(min_len).is_err() {
            return None;
        }

        Some(SubmittedValues::new(
            self.username.value.clone(),
            self.password.value.clone(),
        ))
    }

    fn reports(&self, field: &FieldState) -> bool {
        field.dirty || self.submit_attempted
    }
}
