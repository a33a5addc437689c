use signin_business::{AuthConfig, LoginForm};

use crate::widgets::FormFields;

/// Store backing "remember me" on this platform.
#[cfg(not(target_arch = "wasm32"))]
pub type AppStore = signin_business::MemoryStore;

/// Store backing "remember me" on this platform.
#[cfg(target_arch = "wasm32")]
pub type AppStore = crate::utils::browser_store::BrowserStore;

/// The main application state.
pub struct State {
    /// Credentials, "remember me" and notification messages.
    pub form: LoginForm<AppStore>,
    /// Values currently typed into the inputs.
    pub fields: FormFields,
}

impl State {
    pub fn new(config: AuthConfig, store: AppStore) -> Self {
        Self {
            form: LoginForm::new(config, store),
            fields: FormFields::default(),
        }
    }

    /// State posting to `{base_url}/auth/login`, for mock servers.
    pub fn test(base_url: &str, store: AppStore) -> Self {
        Self::new(AuthConfig::with_base_url(base_url), store)
    }
}

impl Default for State {
    fn default() -> Self {
        Self::new(AuthConfig::default(), AppStore::default())
    }
}
