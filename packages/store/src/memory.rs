use std::collections::HashMap;
use std::sync::{Arc, Mutex, PoisonError};

use crate::kv::KeyValueStore;

/// In-memory KeyValueStore for testing and native fallback.
///
/// Clones share the same map, mirroring how every handle to
/// `localStorage` sees the same entries.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    entries: Arc<Mutex<HashMap<String, String>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored entries.
    pub fn len(&self) -> usize {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .get(key)
            .cloned()
    }

    fn set(&self, key: &str, value: &str) {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(key.to_string(), value.to_string());
    }

    fn remove(&self, key: &str) {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .remove(key);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Session, TOKEN_KEY, USER_NAME_KEY};

    #[test]
    fn test_set_get_remove() {
        let store = MemoryStore::new();
        assert!(store.get("token").is_none());

        store.set("token", "abc");
        assert_eq!(store.get("token").as_deref(), Some("abc"));

        store.remove("token");
        assert!(store.get("token").is_none());
        assert!(store.is_empty());
    }

    #[test]
    fn test_clones_share_entries() {
        let store = MemoryStore::new();
        let other = store.clone();

        store.set("userName", "Ada");
        assert_eq!(other.get("userName").as_deref(), Some("Ada"));
    }

    #[test]
    fn test_session_roundtrip() {
        let store = MemoryStore::new();

        // Nothing persisted yet
        assert_eq!(Session::load(&store), Session::default());

        let session = Session::new("tok-1", Some("Ada".to_string()));
        session.save(&store);
        assert_eq!(store.get(TOKEN_KEY).as_deref(), Some("tok-1"));
        assert_eq!(store.get(USER_NAME_KEY).as_deref(), Some("Ada"));

        let loaded = Session::load(&store);
        assert!(loaded.is_authenticated());
        assert_eq!(loaded, session);
    }

    #[test]
    fn test_name_without_token_is_not_a_session() {
        let store = MemoryStore::new();
        store.set(USER_NAME_KEY, "Ghost");

        let loaded = Session::load(&store);
        assert!(!loaded.is_authenticated());
        assert!(loaded.display_name.is_none());
    }

    #[test]
    fn test_empty_token_is_not_a_session() {
        let store = MemoryStore::new();
        store.set(TOKEN_KEY, "");

        assert!(!Session::load(&store).is_authenticated());
    }

    #[test]
    fn test_clear_removes_both_entries() {
        let store = MemoryStore::new();
        Session::new("tok", Some("Ada".to_string())).save(&store);
        assert_eq!(store.len(), 2);

        Session::clear(&store);
        assert!(store.is_empty());
    }

    #[test]
    fn test_save_without_name_drops_stale_name() {
        let store = MemoryStore::new();
        Session::new("old", Some("Old Name".to_string())).save(&store);

        Session::new("new", None).save(&store);
        assert_eq!(store.get(TOKEN_KEY).as_deref(), Some("new"));
        assert!(store.get(USER_NAME_KEY).is_none());
    }
}
