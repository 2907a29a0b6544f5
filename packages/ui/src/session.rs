//! # Session store
//!
//! [`SessionStore`] owns the client's [`Session`] and the durable storage it is
//! mirrored to. It is an ordinary value, generic over its [`KeyValueStore`], so
//! components receive it through context and tests build one over a
//! [`store::MemoryStore`].
//!
//! ## Lifecycle
//!
//! | Step | Effect |
//! |------|--------|
//! | [`open`](SessionStore::open) | Reads the persisted token. A token found there makes the session authenticated immediately (trust-on-read). |
//! | [`verify`](SessionStore::verify) | Only with `verify_on_load`: asks the API about the restored token. Changes nothing itself. |
//! | [`revoke`](SessionStore::revoke) | Logs out after a rejected check, unless the token has been replaced meanwhile. |
//! | [`login`](SessionStore::login) | One round trip; on success persists token and display name and replaces the session. |
//! | [`register`](SessionStore::register) | One round trip; never touches the session. |
//! | [`logout`](SessionStore::logout) | Clears memory and storage synchronously. No network. |
//!
//! Clones share the storage backend, so a clone can run a login while the
//! original stays readable, and the result is installed afterwards.

use api::AuthApi;
use store::{KeyValueStore, Session, SessionSection};
use tracing::{info, warn};

use crate::error::AuthError;

/// Shown when a failed login carries no server message.
pub const LOGIN_FAILED: &str = "Login failed";
/// Shown when a failed registration carries no server message.
pub const REGISTRATION_FAILED: &str = "Registration failed";
/// Confirmation used when the server sends none.
pub const REGISTERED: &str = "Registration successful! Please login.";

/// Outcome of [`SessionStore::verify`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TokenCheck {
    /// `verify_on_load` is off; the token is trusted as stored.
    Trusted,
    /// Nothing to verify.
    NoToken,
    /// The server accepted the token.
    Valid,
    /// The server refused the token; see [`SessionStore::revoke`].
    Revoked,
    /// The server could not answer; the session was kept.
    Unverified,
}

/// The client's session plus its durable mirror.
#[derive(Clone, Debug)]
pub struct SessionStore<K> {
    storage: K,
    policy: SessionSection,
    session: Session,
}

impl<K: KeyValueStore> SessionStore<K> {
    /// Restore the persisted session from `storage`.
    pub fn open(storage: K, policy: SessionSection) -> Self {
        let session = Session::load(&storage);
        if session.is_authenticated() {
            info!(verify = policy.verify_on_load, "restored session from storage");
        }
        Self {
            storage,
            policy,
            session,
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn is_authenticated(&self) -> bool {
        self.session.is_authenticated()
    }

    pub fn token(&self) -> Option<&str> {
        self.session.token.as_deref()
    }

    pub fn display_name(&self) -> Option<&str> {
        self.session.display_name.as_deref()
    }

    pub fn policy(&self) -> SessionSection {
        self.policy
    }

    /// Log in and install the new session.
    ///
    /// On failure the current session is left untouched.
    pub async fn login<A: AuthApi>(
        &mut self,
        api: &A,
        email: &str,
        password: &str,
    ) -> Result<&Session, AuthError> {
        let grant = api
            .login(email, password)
            .await
            .map_err(|e| {
                warn!("login failed: {e}");
                AuthError::from_api(e, LOGIN_FAILED)
            })?;

        self.session = Session::new(grant.token, grant.display_name);
        self.session.save(&self.storage);
        info!("logged in");
        Ok(&self.session)
    }

    /// Create an account and return the confirmation message.
    pub async fn register<A: AuthApi>(
        &self,
        api: &A,
        name: &str,
        email: &str,
        password: &str,
    ) -> Result<String, AuthError> {
        let message = api.register(name, email, password).await.map_err(|e| {
            warn!("registration failed: {e}");
            AuthError::from_api(e, REGISTRATION_FAILED)
        })?;
        info!("registered new account");
        Ok(message.unwrap_or_else(|| REGISTERED.to_string()))
    }

    pub fn logout(&mut self) {
        self.session = Session::default();
        Session::clear(&self.storage);
        info!("logged out");
    }

    /// Apply the `verify_on_load` policy to the restored token.
    ///
    /// Neither the session nor storage is touched; a [`TokenCheck::Revoked`]
    /// answer is acted on with [`revoke`](Self::revoke).
    pub async fn verify<A: AuthApi>(&self, api: &A) -> TokenCheck {
        if !self.policy.verify_on_load {
            return TokenCheck::Trusted;
        }
        let Some(token) = self.token() else {
            return TokenCheck::NoToken;
        };
        match api.verify_token(token).await {
            Ok(true) => TokenCheck::Valid,
            Ok(false) => {
                info!("stored token was revoked");
                TokenCheck::Revoked
            }
            Err(e) => {
                warn!("could not verify stored token: {e}");
                TokenCheck::Unverified
            }
        }
    }

    /// Log out if the session still holds `token`. Returns whether it did.
    ///
    /// A login completed while the check was in flight keeps its new token.
    pub fn revoke(&mut self, token: &str) -> bool {
        if self.token() != Some(token) {
            return false;
        }
        self.logout();
        true
    }
}
