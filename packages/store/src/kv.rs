//! # Key/value storage for the session
//!
//! The browser client keeps exactly two strings across page loads: the session
//! token and the display name of the logged-in user. [`KeyValueStore`] is the
//! narrow interface every backend implements so the session logic in the `ui`
//! crate can be written once and exercised against an in-memory store in tests.
//!
//! | Backend | Platform | Module |
//! |---------|----------|--------|
//! | [`crate::LocalStore`] | web (wasm32 + `web` feature) | `local`, `window.localStorage` |
//! | [`crate::FileStore`] | native | `file_store`, one file per key |
//! | [`crate::MemoryStore`] | everywhere | `memory`, tests and fallbacks |
//!
//! ## Error handling
//!
//! Methods are infallible from the caller's point of view. A backend that cannot
//! read returns `None`, and a failed write or removal is logged and dropped. An
//! unavailable `localStorage` therefore degrades to "logged out" instead of
//! breaking the page.
//!
//! Calls are synchronous: `localStorage` is a synchronous API, and logout must
//! clear durable state before it returns.

/// Synchronous string key/value storage.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
    fn remove(&self, key: &str);
}
