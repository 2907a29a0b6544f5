//! Submit handlers shared by the login, registration and new-prompt forms.
//!
//! Each takes the values of a draft that passed validation and returns the
//! message to show next to the submit button on failure.

use api::{AuthApi, NewPrompt, PromptApi};
use store::KeyValueStore;
use tracing::{info, warn};

use crate::forms::FormValues;
use crate::session::SessionStore;

/// Shown when creating a prompt fails without a server message.
pub const CREATE_FAILED: &str = "Failed to create prompt. Please try again.";

pub async fn submit_login<K: KeyValueStore, A: AuthApi>(
    session: &mut SessionStore<K>,
    api: &A,
    values: &FormValues,
) -> Result<(), String> {
    session
        .login(api, values.get("email").trim(), values.get("password"))
        .await
        .map(|_| ())
        .map_err(|e| e.to_string())
}

/// Returns the confirmation to carry over to the login page.
pub async fn submit_registration<K: KeyValueStore, A: AuthApi>(
    session: &SessionStore<K>,
    api: &A,
    values: &FormValues,
) -> Result<String, String> {
    session
        .register(
            api,
            values.get("name").trim(),
            values.get("email").trim(),
            values.get("password"),
        )
        .await
        .map_err(|e| e.to_string())
}

pub async fn submit_prompt<A: PromptApi>(
    api: &A,
    token: Option<&str>,
    values: &FormValues,
) -> Result<(), String> {
    let prompt = NewPrompt {
        title: values.get("title").trim().to_string(),
        body: values.get("prompt").to_string(),
    };
    match api.create_prompt(&prompt, token).await {
        Ok(()) => {
            info!(title = %prompt.title, "created prompt");
            Ok(())
        }
        Err(e) => {
            warn!("creating prompt failed: {e}");
            Err(e.server_message().unwrap_or(CREATE_FAILED).to_string())
        }
    }
}
