//! # Filesystem-backed key/value store
//!
//! [`FileStore`] persists each entry as a small file named after its key. It is
//! the native stand-in for `localStorage`, used by non-browser builds and
//! tooling so that a session survives restarts there too.
//!
//! ## Layout
//!
//! ```text
//! <base_dir>/
//! ├── token       # session token
//! └── userName    # display name
//! ```
//!
//! Use [`dirs::data_dir()`](https://docs.rs/dirs) joined with `promptdeck` for
//! a platform-appropriate base.

use std::io::ErrorKind;
use std::path::PathBuf;

use tracing::warn;

use crate::kv::KeyValueStore;

/// Filesystem-backed KeyValueStore for native builds.
#[derive(Clone, Debug)]
pub struct FileStore {
    base: PathBuf,
}

impl FileStore {
    pub fn new(base: PathBuf) -> Self {
        Self { base }
    }

    fn entry_path(&self, key: &str) -> PathBuf {
        self.base.join(key)
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Option<String> {
        std::fs::read_to_string(self.entry_path(key)).ok()
    }

    fn set(&self, key: &str, value: &str) {
        if let Err(e) = std::fs::create_dir_all(&self.base) {
            warn!(path = %self.base.display(), "failed to create store directory: {e}");
            return;
        }
        if let Err(e) = std::fs::write(self.entry_path(key), value) {
            warn!(key, "failed to persist entry: {e}");
        }
    }

    fn remove(&self, key: &str) {
        match std::fs::remove_file(self.entry_path(key)) {
            Ok(()) => {}
            Err(e) if e.kind() == ErrorKind::NotFound => {}
            Err(e) => warn!(key, "failed to remove entry: {e}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Session;

    #[test]
    fn test_entries_survive_a_new_handle() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::new(dir.path().join("promptdeck"));

        store.set("token", "persisted");

        let reopened = FileStore::new(dir.path().join("promptdeck"));
        assert_eq!(reopened.get("token").as_deref(), Some("persisted"));
    }

    #[test]
    fn test_remove_missing_entry_is_noop() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::new(dir.path().to_path_buf());

        store.remove("token");
        assert!(store.get("token").is_none());
    }

    #[test]
    fn test_session_clear_deletes_files() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::new(dir.path().to_path_buf());

        Session::new("tok", Some("Ada".to_string())).save(&store);
        assert!(dir.path().join("token").exists());
        assert!(dir.path().join("userName").exists());

        Session::clear(&store);
        assert!(!dir.path().join("token").exists());
        assert!(!dir.path().join("userName").exists());
        assert!(!Session::load(&store).is_authenticated());
    }
}
