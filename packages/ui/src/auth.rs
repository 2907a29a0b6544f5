//! Session context and hooks for the UI.
//!
//! [`AuthProvider`] builds the API client from the configuration, opens the
//! persisted session, and provides three contexts to everything below it:
//!
//! - `Signal<SessionStore<PlatformStore>>` via [`use_session`]
//! - the [`ApiClient`] via [`use_api`]
//! - a one-shot [`Notice`] carried between pages via [`use_notice`]

use api::ApiClient;
use dioxus::prelude::*;
use store::{ClientConfig, SessionSection};

use crate::session::{SessionStore, TokenCheck};
use crate::storage::{make_storage, PlatformStore};

/// The session signal shared through context.
pub type SessionSignal = Signal<SessionStore<PlatformStore>>;

/// A message handed from one page to the next, such as the registration
/// confirmation shown on the login page.
#[derive(Clone, Copy, PartialEq)]
pub struct Notice(Signal<Option<String>>);

impl Notice {
    pub fn post(&mut self, message: impl Into<String>) {
        self.0.set(Some(message.into()));
    }

    /// Read and clear the pending message.
    pub fn take(&mut self) -> Option<String> {
        self.0.write().take()
    }
}

/// Get the session store. Writes re-render every reader, including the
/// route guard.
pub fn use_session() -> SessionSignal {
    use_context::<SessionSignal>()
}

pub fn use_api() -> ApiClient {
    use_context::<ApiClient>()
}

pub fn use_notice() -> Notice {
    use_context::<Notice>()
}

/// Provider component that owns the session for the whole app.
/// Wrap the router with this component.
#[component]
pub fn AuthProvider(config: ClientConfig, children: Element) -> Element {
    let client = use_hook(|| ApiClient::new(&config.api).map_err(|e| e.to_string()));

    match client {
        Ok(client) => rsx! {
            SessionProvider { client, policy: config.session, {children} }
        },
        Err(message) => {
            tracing::error!("failed to build API client: {message}");
            rsx! {
                div {
                    class: "m-8 px-2.5 py-2.5 bg-red-50 border border-red-200 rounded text-red-600 text-[0.8125rem]",
                    "Could not start the client: {message}"
                }
            }
        }
    }
}

#[component]
fn SessionProvider(client: ApiClient, policy: SessionSection, children: Element) -> Element {
    let mut session = use_signal(|| SessionStore::open(make_storage(), policy));
    let notice = use_signal(|| Option::<String>::None);
    use_context_provider(|| session);
    use_context_provider(|| Notice(notice));
    let api = use_context_provider(|| client);

    // Only does network work when `verify_on_load` is set
    use_future(move || {
        let api = api.clone();
        async move {
            let checker = session.peek().clone();
            let Some(checked) = checker.token().map(str::to_string) else {
                return;
            };
            if checker.verify(&api).await == TokenCheck::Revoked {
                session.write().revoke(&checked);
            }
        }
    });

    rsx! {
        {children}
    }
}

/// Button to log out the current user.
#[component]
pub fn LogoutButton(
    #[props(default = "Logout".to_string())] label: String,
    #[props(default = "".to_string())] class: String,
) -> Element {
    let mut session = use_session();

    rsx! {
        button {
            class: "{class}",
            onclick: move |_| session.write().logout(),
            "{label}"
        }
    }
}
