//! Credential check against the remote sign-in endpoint.
//!
//! `authenticate` only talks to the network. What happens afterwards (messages,
//! remembering credentials) is decided by the caller, see [`crate::LoginForm`].

use log::{error, info};
use thiserror::Error;

use crate::Credentials;
use crate::http::{Client, HttpError};

/// Message shown after the endpoint accepted the credentials.
pub const SUCCESS_MESSAGE: &str = "Authentication successful.";
/// Message shown for every kind of failed attempt.
pub const FAILURE_MESSAGE: &str = "Authentication failed.";

/// Why an attempt failed. Every variant is shown to the user as [`FAILURE_MESSAGE`].
#[derive(Debug, Error)]
pub enum AuthError {
    #[error("failed to encode request body: {0}")]
    Encode(serde_json::Error),
    #[error(transparent)]
    Request(#[from] HttpError),
    #[error("endpoint rejected the credentials with status {0}")]
    Status(u16),
    #[error("response body is not JSON: {0}")]
    Parse(serde_json::Error),
}

impl AuthError {
    pub fn user_message(&self) -> &'static str {
        FAILURE_MESSAGE
    }
}

/// Which invocation site started an attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthOrigin {
    /// Automatic sign-in with remembered credentials when the form is first shown.
    Mount,
    /// The user pressed the submit button.
    Submit,
}

/// POSTs `{username, password}` as JSON to `url`.
///
/// Any 2xx response with a JSON body counts as success; the body is returned but
/// not otherwise interpreted.
pub async fn authenticate(
    url: &str,
    credentials: &Credentials,
) -> Result<serde_json::Value, AuthError> {
    let response = Client::post(url)
        .json(credentials)
        .map_err(AuthError::Encode)?
        .send()
        .await?;

    if !response.is_success() {
        return Err(AuthError::Status(response.status));
    }

    response.json().map_err(AuthError::Parse)
}

/// Logs the outcome of an attempt the same way for both invocation sites.
pub(crate) fn log_outcome(origin: AuthOrigin, result: &Result<serde_json::Value, AuthError>) {
    match result {
        Ok(data) => info!("Authentication successful ({origin:?}): {data}"),
        Err(err) => error!("Authentication error ({origin:?}): {err}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_error_maps_to_the_same_message() {
        let parse_err = serde_json::from_str::<serde_json::Value>("not json")
            .expect_err("input is not JSON");
        let errors = [
            AuthError::Status(400),
            AuthError::Request(HttpError::new("connection refused")),
            AuthError::Parse(parse_err),
        ];

        for err in errors {
            assert_eq!(err.user_message(), FAILURE_MESSAGE);
        }
    }

    #[test]
    fn test_status_error_display() {
        assert_eq!(
            AuthError::Status(401).to_string(),
            "endpoint rejected the credentials with status 401"
        );
    }
}
