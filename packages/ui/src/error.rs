//! Errors surfaced by the login and registration flows.

use api::ApiError;
use thiserror::Error;

/// Why a login or registration did not go through.
///
/// `Display` is the message shown next to the submit button.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum AuthError {
    /// The server refused the request.
    #[error("{0}")]
    Rejected(String),

    /// The server said yes but sent no token.
    #[error("No token received from server")]
    MissingToken,

    /// The server could not be reached or answered garbage.
    #[error("{0}")]
    Unreachable(String),
}

impl AuthError {
    /// Classify an API failure, using `fallback` when the server gave no message.
    pub fn from_api(err: ApiError, fallback: &str) -> Self {
        match err {
            ApiError::MissingToken => AuthError::MissingToken,
            ApiError::Status { .. } => AuthError::Rejected(
                err.server_message().unwrap_or(fallback).to_string(),
            ),
            ApiError::Timeout => AuthError::Unreachable("The server took too long to respond".to_string()),
            ApiError::Transport(_) | ApiError::Decode(_) | ApiError::MissingId => {
                AuthError::Unreachable(fallback.to_string())
            }
        }
    }
}
