//! # API crate: typed access to the prompt service
//!
//! Everything the front-end knows about the REST collaborator lives here: the
//! wire models, the error taxonomy of a round trip, and [`ApiClient`], the
//! reqwest-based implementation used by the web build.
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`client`] | [`ApiClient`]: endpoints, `Authorization` handling, client-side timeouts |
//! | [`error`] | [`ApiError`]: transport, timeout, status, decode and contract failures |
//! | [`models`] | Prompts, search/vote bodies, login/register bodies and login-grant parsing |
//!
//! ## Seams
//!
//! The `ui` crate never names [`ApiClient`] in its logic. It is written against
//! two traits, so tests substitute in-memory fakes:
//!
//! - [`AuthApi`]: identity endpoints (`login`, `register`, token verification)
//! - [`PromptApi`]: prompt endpoints (`search_prompts`, `create_prompt`, `vote`)
//!
//! Futures returned by these traits are not required to be `Send`; the browser
//! runs everything on one thread.

use std::future::Future;

pub mod client;
pub mod error;
pub mod models;

pub use client::ApiClient;
pub use error::ApiError;
pub use models::{LoginGrant, NewPrompt, Prompt, VoteKind, VoteTally};

pub use store::ClientConfig;

/// Identity endpoints.
pub trait AuthApi {
    /// Exchange credentials for a session token.
    ///
    /// A 2xx answer without a token in either accepted shape is
    /// [`ApiError::MissingToken`].
    fn login(
        &self,
        email: &str,
        password: &str,
    ) -> impl Future<Output = Result<LoginGrant, ApiError>>;

    /// Create an account. Returns the server's confirmation message, if any.
    fn register(
        &self,
        name: &str,
        email: &str,
        password: &str,
    ) -> impl Future<Output = Result<Option<String>, ApiError>>;

    /// Whether the server still accepts `token`.
    ///
    /// `Ok(false)` only for an explicit 401/403; anything else inconclusive is
    /// an error.
    fn verify_token(&self, token: &str) -> impl Future<Output = Result<bool, ApiError>>;
}

/// Prompt endpoints. `token` is the raw session token, when there is one.
pub trait PromptApi {
    fn search_prompts(
        &self,
        query: &str,
        token: Option<&str>,
    ) -> impl Future<Output = Result<Vec<Prompt>, ApiError>>;

    fn create_prompt(
        &self,
        prompt: &NewPrompt,
        token: Option<&str>,
    ) -> impl Future<Output = Result<(), ApiError>>;

    /// Record a vote. Returns the updated tally when the server sends one.
    fn vote(
        &self,
        prompt_id: &str,
        kind: VoteKind,
        token: Option<&str>,
    ) -> impl Future<Output = Result<Option<VoteTally>, ApiError>>;
}
