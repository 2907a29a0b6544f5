//! # `localStorage` store: browser-side persistence
//!
//! [`LocalStore`] is the [`KeyValueStore`] used on the **web platform**. Entries
//! go straight to `window.localStorage` under their plain key, so a session
//! written by one tab is visible to the next page load.
//!
//! The handle is a zero-size struct that looks up `localStorage` on every call.
//! Lookups fail when storage is disabled (private mode, sandboxed iframes); in
//! that case reads return `None` and writes are logged and dropped.

use tracing::warn;
use web_sys::Storage;

use crate::kv::KeyValueStore;

/// `window.localStorage`-backed KeyValueStore.
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalStore;

impl LocalStore {
    pub fn new() -> Self {
        Self
    }

    fn storage(&self) -> Option<Storage> {
        web_sys::window()?.local_storage().ok().flatten()
    }
}

impl KeyValueStore for LocalStore {
    fn get(&self, key: &str) -> Option<String> {
        self.storage()?.get_item(key).ok().flatten()
    }

    fn set(&self, key: &str, value: &str) {
        let Some(storage) = self.storage() else {
            warn!(key, "localStorage unavailable, entry not persisted");
            return;
        };
        if storage.set_item(key, value).is_err() {
            warn!(key, "localStorage rejected write");
        }
    }

    fn remove(&self, key: &str) {
        let Some(storage) = self.storage() else {
            return;
        };
        if storage.remove_item(key).is_err() {
            warn!(key, "localStorage rejected removal");
        }
    }
}
