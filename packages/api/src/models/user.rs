//! # Identity request and response bodies
//!
//! Request bodies for `/users/register` and `/users/login`, and the parsing of
//! the login response into a [`LoginGrant`].
//!
//! The login endpoint has shipped two success shapes, and both are accepted:
//!
//! ```json
//! { "token": "…", "name": "Ada" }
//! { "data": { "token": "…", "name": "Ada" } }
//! ```
//!
//! A top-level value wins over a nested one. An empty token counts as absent.

use serde::{Deserialize, Serialize};

/// Body of `POST /users/login`.
#[derive(Clone, Debug, Serialize)]
pub struct Credentials<'a> {
    pub email: &'a str,
    pub password: &'a str,
}

/// Body of `POST /users/register`.
#[derive(Clone, Debug, Serialize)]
pub struct Registration<'a> {
    pub name: &'a str,
    pub email: &'a str,
    pub password: &'a str,
}

/// What a successful login hands to the session.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LoginGrant {
    pub token: String,
    pub display_name: Option<String>,
}

/// Raw login response, either shape.
#[derive(Debug, Default, Deserialize)]
pub struct LoginResponse {
    #[serde(default)]
    token: Option<String>,
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    data: Option<LoginData>,
}

#[derive(Debug, Default, Deserialize)]
struct LoginData {
    #[serde(default)]
    token: Option<String>,
    #[serde(default)]
    name: Option<String>,
}

impl LoginResponse {
    /// Extract the grant, or `None` when no token is present in either shape.
    pub fn into_grant(self) -> Option<LoginGrant> {
        let data = self.data.unwrap_or_default();
        let token = non_empty(self.token).or_else(|| non_empty(data.token))?;
        let display_name = non_empty(self.name).or_else(|| non_empty(data.name));
        Some(LoginGrant {
            token,
            display_name,
        })
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

/// Any body that may carry a human-readable `message`.
#[derive(Debug, Default, Deserialize)]
pub struct MessageBody {
    #[serde(default)]
    pub message: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grant(json: &str) -> Option<LoginGrant> {
        serde_json::from_str::<LoginResponse>(json)
            .unwrap()
            .into_grant()
    }

    #[test]
    fn test_top_level_token() {
        let g = grant(r#"{"token": "abc", "name": "Ada"}"#).unwrap();
        assert_eq!(g.token, "abc");
        assert_eq!(g.display_name.as_deref(), Some("Ada"));
    }

    #[test]
    fn test_nested_token() {
        let g = grant(r#"{"data": {"token": "xyz"}, "name": "Ada"}"#).unwrap();
        assert_eq!(g.token, "xyz");
        assert_eq!(g.display_name.as_deref(), Some("Ada"));
    }

    #[test]
    fn test_nested_name_fallback() {
        let g = grant(r#"{"data": {"token": "xyz", "name": "Grace"}}"#).unwrap();
        assert_eq!(g.display_name.as_deref(), Some("Grace"));
    }

    #[test]
    fn test_top_level_wins() {
        let g = grant(r#"{"token": "outer", "data": {"token": "inner"}}"#).unwrap();
        assert_eq!(g.token, "outer");
    }

    #[test]
    fn test_no_token_anywhere() {
        assert!(grant(r#"{"name": "Ada"}"#).is_none());
        assert!(grant(r#"{"data": {"name": "Ada"}}"#).is_none());
        assert!(grant(r#"{}"#).is_none());
    }

    #[test]
    fn test_empty_token_is_missing() {
        assert!(grant(r#"{"token": "", "data": {"token": ""}}"#).is_none());
    }
}
