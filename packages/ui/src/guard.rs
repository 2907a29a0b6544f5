//! Route guard: may a protected view render for this session?

use store::Session;

/// Where the login page sends the user when no destination was recorded.
pub const DEFAULT_DESTINATION: &str = "/";

/// Verdict for one protected navigation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GuardDecision {
    /// Render the protected view.
    Render,
    /// Send the visitor to the login page, remembering where they were going.
    Redirect { resume: String },
}

/// Decide whether `requested` may render for `session`.
///
/// Only token presence matters; the token is not checked for freshness.
pub fn guard(session: &Session, requested: &str) -> GuardDecision {
    if session.is_authenticated() {
        GuardDecision::Render
    } else {
        GuardDecision::Redirect {
            resume: resume_target(requested).to_string(),
        }
    }
}

/// The in-app path to resume after login.
///
/// Anything that is not a local absolute path (empty, relative,
/// protocol-relative `//host`, or a full URL) resumes at
/// [`DEFAULT_DESTINATION`].
pub fn resume_target(from: &str) -> &str {
    let local = from.starts_with('/') && !from.starts_with("//") && !from.contains("://");
    if local {
        from
    } else {
        DEFAULT_DESTINATION
    }
}
