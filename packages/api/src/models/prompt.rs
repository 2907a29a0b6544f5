//! # Prompt models
//!
//! Two representations of a shared prompt:
//!
//! ## [`PromptRecord`] (wire)
//!
//! The JSON object the listing endpoint returns. Field names follow the
//! server: the text lives in `prompt`, likes in `likes`, the author is a
//! populated reference `author_id: { name }` (or a bare id string when the
//! server did not populate it), and the identifier arrives as `id` or `_id`,
//! as a string or a number. Every field is optional on the wire.
//!
//! ## [`Prompt`]
//!
//! The client-side snapshot rendered by the list and detail views. Dislikes
//! are never stored; [`Prompt::dislike_count`] derives them from the tally.
//!
//! [`SearchResponse`] accepts both listing shapes (`[...]` and
//! `{ "prompts": [...] }`). [`VoteTally`] is the optional body of a vote
//! response.

use serde::{Deserialize, Deserializer, Serialize};

/// Display name used when the server sends no author.
pub const ANONYMOUS_AUTHOR: &str = "Anonymous";

/// A prompt as shown by the client.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Prompt {
    /// Server identifier. Empty when the record carried none.
    pub id: String,
    pub title: String,
    pub body: String,
    pub author_name: String,
    pub like_count: u32,
    pub total_votes: u32,
}

impl Prompt {
    /// Dislikes derived from the tally.
    ///
    /// The server guarantees `like_count <= total_votes`; a record violating it
    /// reports zero dislikes instead of wrapping.
    pub fn dislike_count(&self) -> u32 {
        self.total_votes.saturating_sub(self.like_count)
    }

    /// Whether the record carried an identifier the vote endpoints accept.
    pub fn is_votable(&self) -> bool {
        !self.id.is_empty()
    }
}

/// A prompt as serialized by the listing endpoint.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct PromptRecord {
    #[serde(default, alias = "_id", deserialize_with = "deserialize_id")]
    pub id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default, rename = "prompt")]
    pub body: String,
    #[serde(default)]
    pub likes: u32,
    #[serde(default, rename = "totalVotes")]
    pub total_votes: u32,
    #[serde(default, rename = "author_id")]
    pub author: Option<AuthorRef>,
}

/// The `author_id` field: populated user document or bare reference.
#[derive(Clone, Debug, Deserialize)]
#[serde(untagged)]
pub enum AuthorRef {
    Populated {
        #[serde(default)]
        name: Option<String>,
    },
    Id(String),
}

impl From<PromptRecord> for Prompt {
    fn from(record: PromptRecord) -> Self {
        let author_name = match record.author {
            Some(AuthorRef::Populated { name: Some(name) }) if !name.is_empty() => name,
            _ => ANONYMOUS_AUTHOR.to_string(),
        };
        Self {
            id: record.id,
            title: record.title,
            body: record.body,
            author_name,
            like_count: record.likes,
            total_votes: record.total_votes,
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawId {
    Text(String),
    Number(i64),
}

fn deserialize_id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<RawId>::deserialize(deserializer)? {
        Some(RawId::Text(id)) => id,
        Some(RawId::Number(id)) => id.to_string(),
        None => String::new(),
    })
}

/// Body of the search endpoint: a bare array or an object wrapping one.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum SearchResponse {
    List(Vec<PromptRecord>),
    Wrapped {
        #[serde(default)]
        prompts: Vec<PromptRecord>,
    },
}

impl SearchResponse {
    /// Result set in server order.
    pub fn into_prompts(self) -> Vec<Prompt> {
        let records = match self {
            SearchResponse::List(records) => records,
            SearchResponse::Wrapped { prompts } => prompts,
        };
        records.into_iter().map(Prompt::from).collect()
    }
}

/// Body of a create-prompt request.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct NewPrompt {
    pub title: String,
    #[serde(rename = "prompt")]
    pub body: String,
}

/// Direction of a vote.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum VoteKind {
    Like,
    Dislike,
}

impl VoteKind {
    /// Path segment of the matching vote endpoint.
    pub fn endpoint(self) -> &'static str {
        match self {
            VoteKind::Like => "like-prompt",
            VoteKind::Dislike => "dislike-prompt",
        }
    }
}

/// Updated counts returned by a vote endpoint.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
pub struct VoteTally {
    pub likes: u32,
    #[serde(rename = "totalVotes")]
    pub total_votes: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(json: &str) -> Vec<Prompt> {
        serde_json::from_str::<SearchResponse>(json)
            .unwrap()
            .into_prompts()
    }

    #[test]
    fn test_bare_array_shape() {
        let prompts = parse(
            r#"[
                {"_id": "a1", "title": "Logo", "prompt": "Design a logo", "likes": 3, "totalVotes": 5,
                 "author_id": {"name": "Ada"}},
                {"_id": "b2", "title": "Poem", "prompt": "Write a poem", "likes": 0, "totalVotes": 0}
            ]"#,
        );
        assert_eq!(prompts.len(), 2);
        assert_eq!(prompts[0].id, "a1");
        assert_eq!(prompts[0].body, "Design a logo");
        assert_eq!(prompts[0].author_name, "Ada");
        assert_eq!(prompts[0].dislike_count(), 2);
        assert_eq!(prompts[1].author_name, ANONYMOUS_AUTHOR);
    }

    #[test]
    fn test_wrapped_shape() {
        let prompts = parse(r#"{"prompts": [{"id": 7, "title": "T", "prompt": "Body text"}]}"#);
        assert_eq!(prompts.len(), 1);
        assert_eq!(prompts[0].id, "7");
        assert_eq!(prompts[0].like_count, 0);
        assert_eq!(prompts[0].total_votes, 0);
    }

    #[test]
    fn test_object_without_prompts_is_empty() {
        assert!(parse(r#"{"message": "nothing here"}"#).is_empty());
    }

    #[test]
    fn test_unpopulated_author_reference() {
        let prompts = parse(r#"[{"_id": "x", "title": "T", "prompt": "P", "author_id": "64ab"}]"#);
        assert_eq!(prompts[0].author_name, ANONYMOUS_AUTHOR);
    }

    #[test]
    fn test_missing_id_is_not_votable() {
        let prompts = parse(r#"[{"title": "T", "prompt": "P"}]"#);
        assert!(prompts[0].id.is_empty());
        assert!(!prompts[0].is_votable());
    }

    #[test]
    fn test_dislikes_never_negative() {
        let fixtures = [(0, 0), (0, 4), (4, 4), (3, 10), (7, 2)];
        for (likes, total) in fixtures {
            let prompt = Prompt {
                id: "id".to_string(),
                title: String::new(),
                body: String::new(),
                author_name: String::new(),
                like_count: likes,
                total_votes: total,
            };
            if likes <= total {
                assert_eq!(prompt.dislike_count(), total - likes);
            } else {
                assert_eq!(prompt.dislike_count(), 0);
            }
        }
    }

    #[test]
    fn test_new_prompt_wire_names() {
        let body = serde_json::to_value(NewPrompt {
            title: "Logo".to_string(),
            body: "Make a logo please".to_string(),
        })
        .unwrap();
        assert_eq!(body, serde_json::json!({"title": "Logo", "prompt": "Make a logo please"}));
    }

    #[test]
    fn test_vote_tally_wire_names() {
        let tally: VoteTally = serde_json::from_str(r#"{"likes": 4, "totalVotes": 6}"#).unwrap();
        assert_eq!(tally, VoteTally { likes: 4, total_votes: 6 });
    }
}
