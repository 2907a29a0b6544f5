//! This crate contains the client state and shared UI for the workspace.
//!
//! The state modules ([`session`], [`guard`], [`prompt_list`], [`vote`],
//! [`forms`], [`flows`]) are plain Rust with no rendering, so they are tested
//! without a browser. The Dioxus components in [`components`] and [`views`]
//! drive them through signals and context.

pub mod components;

// Re-export icon library
pub use dioxus_free_icons::Icon;
pub mod icons {
    pub use dioxus_free_icons::icons::fa_solid_icons::*;
}

mod error;
pub use error::AuthError;

pub mod session;
pub use session::{SessionStore, TokenCheck};

pub mod guard;
pub use guard::{guard, resume_target, GuardDecision, DEFAULT_DESTINATION};

pub mod prompt_list;
pub use prompt_list::{EmptyState, FetchRequest, FetchTicket, ListPhase, PromptList};

pub mod vote;
pub use vote::{reconcile, VoteRefused, VoteTracker};

pub mod forms;
pub use forms::{FormDraft, FormValues, SubmitBlocked, ValidationError};

pub mod flows;

mod storage;
pub use storage::{make_storage, PlatformStore};

mod auth;
pub use auth::{use_api, use_notice, use_session, AuthProvider, LogoutButton, Notice, SessionSignal};

pub mod views;

#[cfg(test)]
mod testing;
