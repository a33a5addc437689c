use serde::{Deserialize, Serialize};

/// Username and password, serialized as the body of the sign-in request.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl Credentials {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }
}

/// Field values handed over by the form when the user submits.
///
/// A missing or empty value falls back to the credentials already held by the form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SubmittedValues {
    pub username: Option<String>,
    pub password: Option<String>,
}

impl SubmittedValues {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: Some(username.into()),
            password: Some(password.into()),
        }
    }

    pub fn resolve(self, held: &Credentials) -> Credentials {
        fn pick(submitted: Option<String>, held: &str) -> String {
            submitted
                .filter(|value| !value.is_empty())
                .unwrap_or_else(|| held.to_string())
        }

        Credentials {
            username: pick(self.username, &held.username),
            password: pick(self.password, &held.password),
        }
    }
}
