mod prompt;
mod user;

pub use prompt::{
    AuthorRef, NewPrompt, Prompt, PromptRecord, SearchResponse, VoteKind, VoteTally,
    ANONYMOUS_AUTHOR,
};
pub use user::{Credentials, LoginGrant, LoginResponse, MessageBody, Registration};
