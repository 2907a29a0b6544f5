//! In-memory fakes for the API traits, shared by the unit tests.

use std::cell::RefCell;

use api::{ApiError, AuthApi, LoginGrant, NewPrompt, Prompt, PromptApi, VoteKind, VoteTally};

/// A scripted answer. `ApiError` is not `Clone`, so failures are rebuilt on
/// every call.
#[derive(Clone, Debug)]
pub enum Reply<T> {
    Ok(T),
    Status(u16, Option<&'static str>),
    MissingToken,
    Timeout,
}

impl<T: Clone> Reply<T> {
    fn result(&self) -> Result<T, ApiError> {
        match self {
            Reply::Ok(value) => Ok(value.clone()),
            Reply::Status(status, message) => Err(ApiError::Status {
                status: *status,
                message: message.map(str::to_string),
            }),
            Reply::MissingToken => Err(ApiError::MissingToken),
            Reply::Timeout => Err(ApiError::Timeout),
        }
    }
}

/// Fake service recording every call as `"<endpoint>:<argument>"`.
pub struct FakeApi {
    pub login: Reply<LoginGrant>,
    pub register: Reply<Option<String>>,
    pub verify: Reply<bool>,
    pub search: Reply<Vec<Prompt>>,
    pub create: Reply<()>,
    pub vote: Reply<Option<VoteTally>>,
    pub calls: RefCell<Vec<String>>,
}

impl Default for FakeApi {
    fn default() -> Self {
        Self {
            login: Reply::Ok(LoginGrant {
                token: "token-1".to_string(),
                display_name: Some("Ada".to_string()),
            }),
            register: Reply::Ok(None),
            verify: Reply::Ok(true),
            search: Reply::Ok(Vec::new()),
            create: Reply::Ok(()),
            vote: Reply::Ok(None),
            calls: RefCell::new(Vec::new()),
        }
    }
}

impl FakeApi {
    pub fn calls(&self) -> Vec<String> {
        self.calls.borrow().clone()
    }

    fn record(&self, call: String) {
        self.calls.borrow_mut().push(call);
    }
}

impl AuthApi for FakeApi {
    async fn login(&self, email: &str, _password: &str) -> Result<LoginGrant, ApiError> {
        self.record(format!("login:{email}"));
        self.login.result()
    }

    async fn register(
        &self,
        _name: &str,
        email: &str,
        _password: &str,
    ) -> Result<Option<String>, ApiError> {
        self.record(format!("register:{email}"));
        self.register.result()
    }

    async fn verify_token(&self, token: &str) -> Result<bool, ApiError> {
        self.record(format!("verify:{token}"));
        self.verify.result()
    }
}

impl PromptApi for FakeApi {
    async fn search_prompts(
        &self,
        query: &str,
        _token: Option<&str>,
    ) -> Result<Vec<Prompt>, ApiError> {
        self.record(format!("search:{query}"));
        self.search.result()
    }

    async fn create_prompt(&self, prompt: &NewPrompt, _token: Option<&str>) -> Result<(), ApiError> {
        self.record(format!("create:{}", prompt.title));
        self.create.result()
    }

    async fn vote(
        &self,
        prompt_id: &str,
        kind: VoteKind,
        _token: Option<&str>,
    ) -> Result<Option<VoteTally>, ApiError> {
        self.record(format!("vote:{prompt_id}:{kind:?}"));
        self.vote.result()
    }
}

/// A prompt fixture with a consistent tally.
pub fn prompt(id: &str, title: &str, body: &str, likes: u32, total: u32) -> Prompt {
    Prompt {
        id: id.to_string(),
        title: title.to_string(),
        body: body.to_string(),
        author_name: "Ada".to_string(),
        like_count: likes,
        total_votes: total,
    }
}
