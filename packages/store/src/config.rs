//! # Client configuration (`promptdeck.toml`)
//!
//! Defines the TOML file the web binary embeds at build time (filename:
//! [`ClientConfig::filename`] = `"promptdeck.toml"`). It tells the client where
//! the REST API lives and which optional policies are switched on.
//!
//! ## Structure
//!
//! ```toml
//! [api]
//! base_url = "https://prompt-node-app.onrender.com"
//! timeout_secs = 15            # client-side timeout for every request
//! authenticate_create = false  # send the session token on create-prompt
//!
//! [session]
//! verify_on_load = false       # check a restored token against the API
//!
//! [log]
//! level = "info"
//! ```
//!
//! ## Types
//!
//! | Struct | Purpose |
//! |--------|---------|
//! | [`ClientConfig`] | Top-level config. TOML parsing with validation, builder helpers, canonical filename. |
//! | [`ApiSection`] | REST collaborator: base URL, request timeout, create-prompt authentication. |
//! | [`SessionSection`] | Session policy: trust a stored token as-is, or verify it on load. |
//! | [`LogSection`] | Minimum log level for the browser console subscriber. |
//!
//! Every field has a default, so a missing or empty file is the default
//! configuration.

use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::Level;

/// Default REST endpoint of the prompt service.
pub const DEFAULT_BASE_URL: &str = "https://prompt-node-app.onrender.com";

/// Errors raised while loading a [`ClientConfig`].
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid config file: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("api.base_url must be an http(s) URL, got {0:?}")]
    InvalidBaseUrl(String),

    #[error("api.timeout_secs must be greater than zero")]
    ZeroTimeout,
}

/// Top-level configuration stored in `promptdeck.toml`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ClientConfig {
    #[serde(default)]
    pub api: ApiSection,
    #[serde(default)]
    pub session: SessionSection,
    #[serde(default)]
    pub log: LogSection,
}

/// REST collaborator settings.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ApiSection {
    /// Base URL without a trailing slash requirement; one is stripped if present.
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Client-side timeout applied to every request.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    /// Attach the session token to create-prompt requests.
    ///
    /// The endpoint is unauthenticated on the wire today; this stays off until
    /// the server expects it.
    #[serde(default)]
    pub authenticate_create: bool,
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_timeout_secs() -> u64 {
    15
}

impl Default for ApiSection {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout_secs(),
            authenticate_create: false,
        }
    }
}

impl ApiSection {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

/// Session restore policy.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionSection {
    /// Ask the API whether a token restored from storage is still accepted.
    /// When false, a stored token is trusted without a round trip.
    #[serde(default)]
    pub verify_on_load: bool,
}

/// Logging settings.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LogSection {
    #[serde(default = "default_level")]
    pub level: String,
}

fn default_level() -> String {
    "info".to_string()
}

impl Default for LogSection {
    fn default() -> Self {
        Self {
            level: default_level(),
        }
    }
}

impl LogSection {
    /// Parsed level, falling back to `INFO` for unknown names.
    pub fn level(&self) -> Level {
        self.level.parse().unwrap_or(Level::INFO)
    }
}

impl ClientConfig {
    /// The well-known filename for the config file.
    pub fn filename() -> &'static str {
        "promptdeck.toml"
    }

    /// Parse and validate a TOML document.
    pub fn from_toml(s: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Builder method to point the client at another API.
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.api.base_url = url.into();
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let url = self.api.base_url.as_str();
        if !(url.starts_with("http://") || url.starts_with("https://")) {
            return Err(ConfigError::InvalidBaseUrl(url.to_string()));
        }
        if self.api.timeout_secs == 0 {
            return Err(ConfigError::ZeroTimeout);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_file_is_default() {
        let config = ClientConfig::from_toml("").unwrap();
        assert_eq!(config, ClientConfig::default());
        assert_eq!(config.api.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.api.timeout(), Duration::from_secs(15));
        assert!(!config.api.authenticate_create);
        assert!(!config.session.verify_on_load);
        assert_eq!(config.log.level(), Level::INFO);
    }

    #[test]
    fn test_partial_sections() {
        let config = ClientConfig::from_toml(
            r#"
            [api]
            base_url = "http://localhost:4000"
            authenticate_create = true

            [session]
            verify_on_load = true

            [log]
            level = "debug"
            "#,
        )
        .unwrap();

        assert_eq!(config.api.base_url, "http://localhost:4000");
        assert_eq!(config.api.timeout_secs, 15);
        assert!(config.api.authenticate_create);
        assert!(config.session.verify_on_load);
        assert_eq!(config.log.level(), Level::DEBUG);
    }

    #[test]
    fn test_rejects_non_http_base_url() {
        let err = ClientConfig::from_toml("[api]\nbase_url = \"ftp://example.com\"").unwrap_err();
        assert!(matches!(err, ConfigError::InvalidBaseUrl(_)));
    }

    #[test]
    fn test_rejects_zero_timeout() {
        let err = ClientConfig::from_toml("[api]\ntimeout_secs = 0").unwrap_err();
        assert!(matches!(err, ConfigError::ZeroTimeout));
    }

    #[test]
    fn test_rejects_malformed_toml() {
        let err = ClientConfig::from_toml("[api\nbase_url=").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_unknown_level_falls_back_to_info() {
        let log = LogSection {
            level: "chatty".to_string(),
        };
        assert_eq!(log.level(), Level::INFO);
    }

    #[test]
    fn test_with_base_url() {
        let config = ClientConfig::default().with_base_url("https://api.example.com");
        assert_eq!(config.api.base_url, "https://api.example.com");
        assert!(config.validate().is_ok());
    }
}
