use std::str::FromStr;
use std::sync::LazyLock;

use dioxus::prelude::*;

use store::{ClientConfig, ConfigError};
use ui::{guard, resume_target, use_session, AuthProvider, GuardDecision};
use views::{Home, Login, Register};

mod views;

const MAIN_CSS: Asset = asset!("/assets/main.css");
const CONFIG_TOML: &str = include_str!("../promptdeck.toml");

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[route("/")]
    Home {},
    #[route("/login?:from")]
    Login { from: String },
    #[route("/register")]
    Register {},
    #[route("/:..segments")]
    Fallback { segments: Vec<String> },
}

/// Configuration the app runs with, and why the embedded file was rejected
/// if it was.
static LOADED: LazyLock<(ClientConfig, Option<ConfigError>)> = LazyLock::new(|| {
    match load_config(CONFIG_TOML, option_env!("PROMPTDECK_API_URL")) {
        Ok(config) => (config, None),
        Err(e) => (ClientConfig::default(), Some(e)),
    }
});

fn main() {
    let (config, problem) = &*LOADED;

    // Nothing can be logged before this point
    if let Err(e) = dioxus::logger::init(config.log.level()) {
        tracing::warn!("keeping the existing log subscriber: {e}");
    }
    if let Some(problem) = problem {
        tracing::warn!("ignoring {}: {problem}", ClientConfig::filename());
    }
    tracing::info!(base_url = %config.api.base_url, "starting promptdeck");

    dioxus::launch(App);
}

/// Parse `toml` and apply the build-time base URL override.
fn load_config(toml: &str, base_url: Option<&str>) -> Result<ClientConfig, ConfigError> {
    let config = ClientConfig::from_toml(toml)?;
    let config = match base_url {
        Some(url) => config.with_base_url(url),
        None => config,
    };
    config.validate()?;
    Ok(config)
}

/// Where to go once logged in, given the `from` query of the login page.
fn resume_route(from: &str) -> Route {
    Route::from_str(resume_target(from)).unwrap_or(Route::Home {})
}

#[component]
fn App() -> Element {
    let config = use_hook(|| LOADED.0.clone());

    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        AuthProvider {
            config,
            Router::<Route> {}
        }
    }
}

/// Renders `children` only for an authenticated session; everyone else is
/// sent to the login page with the current path to come back to.
#[component]
fn Protected(children: Element) -> Element {
    let session = use_session();
    let nav = use_navigator();
    let route = use_route::<Route>();

    let decision = guard(session.read().session(), &route.to_string());
    match decision {
        GuardDecision::Render => rsx! {
            {children}
        },
        GuardDecision::Redirect { resume } => {
            nav.replace(Route::Login { from: resume });
            rsx! {}
        }
    }
}

/// Unknown paths show the home view.
#[component]
fn Fallback(segments: Vec<String>) -> Element {
    tracing::debug!(path = %segments.join("/"), "unknown path, showing home");
    rsx! {
        Home {}
    }
}

#[cfg(test)]
mod tests {
    use store::config::DEFAULT_BASE_URL;

    use super::*;

    #[test]
    fn test_embedded_config_is_valid() {
        let config = load_config(CONFIG_TOML, None).unwrap();
        assert_eq!(config.api.base_url, DEFAULT_BASE_URL);
        assert!(!config.session.verify_on_load);
    }

    #[test]
    fn test_base_url_override() {
        let config = load_config(CONFIG_TOML, Some("http://localhost:4000")).unwrap();
        assert_eq!(config.api.base_url, "http://localhost:4000");
        assert_eq!(config.api.timeout_secs, 15);
    }

    #[test]
    fn test_invalid_override_rejected() {
        let err = load_config(CONFIG_TOML, Some("localhost:4000")).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidBaseUrl(_)));
    }

    #[test]
    fn test_invalid_file_rejected() {
        let err = load_config("[api\nbase_url = ", None).unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));

        let err = load_config("[api]\ntimeout_secs = 0\n", None).unwrap_err();
        assert!(matches!(err, ConfigError::ZeroTimeout));
    }

    #[test]
    fn test_resume_route() {
        assert_eq!(resume_route("/"), Route::Home {});
        assert_eq!(resume_route("/register"), Route::Register {});
        assert_eq!(
            resume_route("/saved/prompts"),
            Route::Fallback {
                segments: vec!["saved".to_string(), "prompts".to_string()]
            }
        );
    }

    #[test]
    fn test_resume_route_stays_on_site() {
        assert_eq!(resume_route(""), Route::Home {});
        assert_eq!(resume_route("https://evil.example"), Route::Home {});
        assert_eq!(resume_route("//evil.example"), Route::Home {});
    }
}
