//! Local persistence of remembered credentials.
//!
//! The form never touches a platform global directly. It is handed a
//! [`KeyValueStore`]: a [`MemoryStore`] in tests and on native (flushed through
//! eframe's app storage), or the browser's `localStorage` on the web.

use std::collections::BTreeMap;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::Credentials;

/// Key holding the remembered username.
pub const USERNAME_KEY: &str = "username";
/// Key holding the remembered password.
pub const PASSWORD_KEY: &str = "password";

/// String key-value storage. Failures are not reported; persistence is best effort.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str);
    fn delete(&mut self, key: &str);
}

/// Credential persistence on top of any [`KeyValueStore`].
pub trait CredentialStore: KeyValueStore {
    /// Returns the stored credentials only when both keys are present and non-empty.
    fn load(&self) -> Option<Credentials> {
        let username = self.get(USERNAME_KEY).filter(|v| !v.is_empty())?;
        let password = self.get(PASSWORD_KEY).filter(|v| !v.is_empty())?;
        Some(Credentials { username, password })
    }

    fn save(&mut self, credentials: &Credentials) {
        debug!("Remembering credentials for '{}'", credentials.username);
        self.set(USERNAME_KEY, &credentials.username);
        self.set(PASSWORD_KEY, &credentials.password);
    }

    fn clear(&mut self) {
        debug!("Forgetting remembered credentials");
        self.delete(USERNAME_KEY);
        self.delete(PASSWORD_KEY);
    }
}

impl<S: KeyValueStore + ?Sized> CredentialStore for S {}

/// In-memory store. Serializable so the native app can persist it between runs.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MemoryStore {
    entries: BTreeMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_credentials(credentials: &Credentials) -> Self {
        let mut store = Self::new();
        store.save(credentials);
        store
    }

    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) {
        self.entries.insert(key.to_string(), value.to_string());
    }

    fn delete(&mut self, key: &str) {
        self.entries.remove(key);
    }
}
