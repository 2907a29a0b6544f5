//! # HTTP client for the prompt service
//!
//! [`ApiClient`] wraps a [`reqwest::Client`] and speaks the service's REST
//! contract:
//!
//! | Method | Endpoint | `Authorization` |
//! |--------|----------|-----------------|
//! | [`register`](AuthApi::register) | `POST /users/register` | no |
//! | [`login`](AuthApi::login) | `POST /users/login` | no |
//! | [`search_prompts`](PromptApi::search_prompts) | `GET /prompt/search-prompt?search=<q>` | raw token |
//! | [`create_prompt`](PromptApi::create_prompt) | `POST /prompt/create-prompt` | raw token only with `authenticate_create` |
//! | [`vote`](PromptApi::vote) | `POST /prompt/{like,dislike}-prompt/{id}` | raw token |
//!
//! The token goes into `Authorization` as-is, without a `Bearer` prefix.
//!
//! ## Timeouts
//!
//! Every round trip (send plus body) is bounded by `api.timeout_secs`. Native
//! builds hand the limit to reqwest; in the browser, where reqwest has no timer,
//! the request is raced against a `gloo-timers` sleep. Both surface as
//! [`ApiError::Timeout`].
//!
//! ## Status handling
//!
//! Any non-2xx answer becomes [`ApiError::Status`] carrying the body's
//! `message` field when one can be parsed. Success bodies are parsed with
//! `serde_json`; failures there become [`ApiError::Decode`].

use std::future::Future;
use std::time::Duration;

use percent_encoding::{utf8_percent_encode, NON_ALPHANUMERIC};
use reqwest::header::AUTHORIZATION;
use reqwest::RequestBuilder;
use serde::Deserialize;
use store::ApiSection;
use tracing::debug;

use crate::error::ApiError;
use crate::models::{
    Credentials, LoginGrant, LoginResponse, MessageBody, NewPrompt, Prompt, Registration,
    SearchResponse, VoteKind, VoteTally,
};
use crate::{AuthApi, PromptApi};

/// Typed client for the prompt service REST API.
#[derive(Clone, Debug)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    timeout: Duration,
    authenticate_create: bool,
}

/// Clients compare by configuration; the connection pool is not compared.
impl PartialEq for ApiClient {
    fn eq(&self, other: &Self) -> bool {
        self.base_url == other.base_url
            && self.timeout == other.timeout
            && self.authenticate_create == other.authenticate_create
    }
}

/// Status and raw body of a finished round trip.
struct Exchange {
    status: u16,
    body: String,
}

impl Exchange {
    fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// The body of a 2xx answer, or the status error otherwise.
    fn into_success(self) -> Result<String, ApiError> {
        if self.is_success() {
            return Ok(self.body);
        }
        let message = serde_json::from_str::<MessageBody>(&self.body)
            .ok()
            .and_then(|b| b.message);
        Err(ApiError::Status {
            status: self.status,
            message,
        })
    }
}

impl ApiClient {
    pub fn new(config: &ApiSection) -> Result<Self, ApiError> {
        let builder = reqwest::Client::builder();
        #[cfg(not(target_arch = "wasm32"))]
        let builder = builder.timeout(config.timeout());

        Ok(Self {
            http: builder.build()?,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            timeout: config.timeout(),
            authenticate_create: config.authenticate_create,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn exchange(&self, request: RequestBuilder) -> Result<Exchange, ApiError> {
        let round_trip = async {
            let response = request.send().await?;
            let status = response.status().as_u16();
            let body = response.text().await?;
            Ok::<_, ApiError>(Exchange { status, body })
        };
        let exchange = with_timeout(round_trip, self.timeout).await??;
        debug!(status = exchange.status, "response received");
        Ok(exchange)
    }
}

fn authorize(request: RequestBuilder, token: Option<&str>) -> RequestBuilder {
    match token {
        Some(token) => request.header(AUTHORIZATION, token),
        None => request,
    }
}

#[cfg(not(target_arch = "wasm32"))]
async fn with_timeout<F: Future>(fut: F, _limit: Duration) -> Result<F::Output, ApiError> {
    // The reqwest client already carries the limit.
    Ok(fut.await)
}

#[cfg(target_arch = "wasm32")]
async fn with_timeout<F: Future>(fut: F, limit: Duration) -> Result<F::Output, ApiError> {
    use futures::future::{select, Either};

    let sleep = gloo_timers::future::sleep(limit);
    futures::pin_mut!(fut);
    futures::pin_mut!(sleep);
    match select(fut, sleep).await {
        Either::Left((output, _)) => Ok(output),
        Either::Right(_) => Err(ApiError::Timeout),
    }
}

/// Vote answers come flat or wrapped in the updated prompt.
#[derive(Deserialize)]
#[serde(untagged)]
enum VoteResponse {
    Flat(VoteTally),
    Nested { prompt: VoteTally },
}

impl AuthApi for ApiClient {
    async fn login(&self, email: &str, password: &str) -> Result<LoginGrant, ApiError> {
        debug!("POST /users/login");
        let request = self
            .http
            .post(self.url("/users/login"))
            .json(&Credentials { email, password });
        let body = self.exchange(request).await?.into_success()?;
        let response: LoginResponse = serde_json::from_str(&body)?;
        response.into_grant().ok_or(ApiError::MissingToken)
    }

    async fn register(
        &self,
        name: &str,
        email: &str,
        password: &str,
    ) -> Result<Option<String>, ApiError> {
        debug!("POST /users/register");
        let request = self.http.post(self.url("/users/register")).json(&Registration {
            name,
            email,
            password,
        });
        let body = self.exchange(request).await?.into_success()?;
        // Any 2xx counts; the body is only read for an optional message.
        Ok(serde_json::from_str::<MessageBody>(&body)
            .ok()
            .and_then(|b| b.message)
            .filter(|m| !m.is_empty()))
    }

    async fn verify_token(&self, token: &str) -> Result<bool, ApiError> {
        match self.search_prompts("", Some(token)).await {
            Ok(_) => Ok(true),
            Err(e) if e.is_unauthorized() => Ok(false),
            Err(e) => Err(e),
        }
    }
}

impl PromptApi for ApiClient {
    async fn search_prompts(
        &self,
        query: &str,
        token: Option<&str>,
    ) -> Result<Vec<Prompt>, ApiError> {
        debug!(query, "GET /prompt/search-prompt");
        let request = self
            .http
            .get(self.url("/prompt/search-prompt"))
            .query(&[("search", query)]);
        let body = self
            .exchange(authorize(request, token))
            .await?
            .into_success()?;
        let response: SearchResponse = serde_json::from_str(&body)?;
        Ok(response.into_prompts())
    }

    async fn create_prompt(&self, prompt: &NewPrompt, token: Option<&str>) -> Result<(), ApiError> {
        debug!(title = %prompt.title, "POST /prompt/create-prompt");
        let request = self.http.post(self.url("/prompt/create-prompt")).json(prompt);
        let request = if self.authenticate_create {
            authorize(request, token)
        } else {
            request
        };
        self.exchange(request).await?.into_success()?;
        Ok(())
    }

    async fn vote(
        &self,
        prompt_id: &str,
        kind: VoteKind,
        token: Option<&str>,
    ) -> Result<Option<VoteTally>, ApiError> {
        if prompt_id.is_empty() {
            return Err(ApiError::MissingId);
        }
        let path = format!(
            "/prompt/{}/{}",
            kind.endpoint(),
            utf8_percent_encode(prompt_id, NON_ALPHANUMERIC)
        );
        debug!(%path, "POST vote");
        let request = self.http.post(self.url(&path));
        let body = self
            .exchange(authorize(request, token))
            .await?
            .into_success()?;
        let tally = serde_json::from_str::<VoteResponse>(&body)
            .ok()
            .map(|response| match response {
                VoteResponse::Flat(tally) => tally,
                VoteResponse::Nested { prompt } => prompt,
            });
        Ok(tally)
    }
}
