//! `localStorage`-backed credential store for the web build.

use log::warn;
use signin_business::KeyValueStore;

/// Reads and writes the browser's `window.localStorage`.
///
/// Every call looks the storage up again; when it is unavailable (private
/// mode, disabled storage) reads return `None` and writes are dropped.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserStore;

impl BrowserStore {
    fn storage() -> Option<web_sys::Storage> {
        web_sys::window()?.local_storage().ok().flatten()
    }
}

impl KeyValueStore for BrowserStore {
    fn get(&self, key: &str) -> Option<String> {
        Self::storage()?.get_item(key).ok().flatten()
    }

    fn set(&mut self, key: &str, value: &str) {
        if let Some(storage) = Self::storage()
            && let Err(err) = storage.set_item(key, value)
        {
            warn!("localStorage: failed to set '{key}': {err:?}");
        }
    }

    fn delete(&mut self, key: &str) {
        if let Some(storage) = Self::storage()
            && let Err(err) = storage.remove_item(key)
        {
            warn!("localStorage: failed to remove '{key}': {err:?}");
        }
    }
}
