use ustr::Ustr;

/// Endpoint the sign-in form posts credentials to.
pub const DEFAULT_AUTH_URL: &str = "https://dummyjson.com/auth/login";

/// Shortest password the form accepts.
pub const DEFAULT_MIN_PASSWORD_LEN: usize = 8;

#[derive(Debug, Clone)]
pub struct AuthConfig {
    pub auth_url: String,
    /// Passwords shorter than this fail field validation with `TOO_SHORT`.
    pub min_password_len: usize,
}

impl AuthConfig {
    pub fn new(auth_url: String) -> Self {
        Self {
            auth_url,
            min_password_len: DEFAULT_MIN_PASSWORD_LEN,
        }
    }

    /// Builds a config for a mock server, posting to `{base_url}/auth/login`.
    pub fn with_base_url(base_url: &str) -> Self {
        Self::new(format!("{}/auth/login", base_url.trim_end_matches('/')))
    }

    pub fn auth_url(&self) -> Ustr {
        Ustr::from(&self.auth_url)
    }
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self::new(DEFAULT_AUTH_URL.to_string())
    }
}
