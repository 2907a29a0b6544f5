//! # Session model and its durable layout
//!
//! [`Session`] is the whole client-side identity: an optional opaque token and
//! an optional display name. Token presence is the only signal of being
//! authenticated; there is no expiry or refresh.
//!
//! The session is persisted as two independent entries of a [`KeyValueStore`]:
//!
//! | Key | Value |
//! |-----|-------|
//! | [`TOKEN_KEY`] (`"token"`) | the session token |
//! | [`USER_NAME_KEY`] (`"userName"`) | the display name, when the server sent one |

use tracing::debug;

use crate::kv::KeyValueStore;

/// Storage key of the session token.
pub const TOKEN_KEY: &str = "token";
/// Storage key of the display name.
pub const USER_NAME_KEY: &str = "userName";

/// The current authentication state of the client.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Session {
    pub token: Option<String>,
    pub display_name: Option<String>,
}

impl Session {
    /// A session for a freshly issued token.
    pub fn new(token: impl Into<String>, display_name: Option<String>) -> Self {
        Self {
            token: Some(token.into()),
            display_name,
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }

    /// Read the session persisted in `store`.
    ///
    /// A display name without a token is ignored: the token alone decides
    /// whether a session exists. Empty strings count as absent.
    pub fn load(store: &impl KeyValueStore) -> Self {
        let token = store.get(TOKEN_KEY).filter(|t| !t.is_empty());
        let Some(token) = token else {
            return Self::default();
        };
        let display_name = store.get(USER_NAME_KEY).filter(|n| !n.is_empty());
        debug!(has_name = display_name.is_some(), "loaded persisted session");
        Self {
            token: Some(token),
            display_name,
        }
    }

    /// Write this session to `store`, replacing whatever was there.
    pub fn save(&self, store: &impl KeyValueStore) {
        match &self.token {
            Some(token) => store.set(TOKEN_KEY, token),
            None => store.remove(TOKEN_KEY),
        }
        match &self.display_name {
            Some(name) => store.set(USER_NAME_KEY, name),
            None => store.remove(USER_NAME_KEY),
        }
    }

    /// Remove both session entries from `store`.
    pub fn clear(store: &impl KeyValueStore) {
        store.remove(TOKEN_KEY);
        store.remove(USER_NAME_KEY);
    }
}
