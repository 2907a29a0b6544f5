//! # Votes
//!
//! Counts are never changed locally before the server answers. After a vote:
//!
//! - the server returned a tally: it replaces that prompt's counts in place;
//! - the server returned no tally, or the prompt is no longer listed: the
//!   list is re-fetched with the current query;
//! - the request failed: the list stays as it was and the failure is logged.
//!
//! [`VoteTracker`] keeps at most one vote per prompt in flight and refuses
//! prompts that carry no identifier.

use std::collections::BTreeSet;

use api::{ApiError, VoteKind, VoteTally};
use thiserror::Error;
use tracing::{debug, error};

use crate::prompt_list::{FetchRequest, PromptList};

/// Why a vote was not sent.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum VoteRefused {
    #[error("prompt has no identifier")]
    MissingId,
    #[error("a vote for this prompt is already in flight")]
    InFlight,
}

/// Prompts with a vote in flight.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct VoteTracker {
    pending: BTreeSet<String>,
}

impl VoteTracker {
    pub fn begin(&mut self, prompt_id: &str) -> Result<(), VoteRefused> {
        if prompt_id.is_empty() {
            return Err(VoteRefused::MissingId);
        }
        if !self.pending.insert(prompt_id.to_string()) {
            return Err(VoteRefused::InFlight);
        }
        Ok(())
    }

    pub fn finish(&mut self, prompt_id: &str) {
        self.pending.remove(prompt_id);
    }

    pub fn is_pending(&self, prompt_id: &str) -> bool {
        self.pending.contains(prompt_id)
    }
}

/// Fold a vote outcome into `list`. Returns a fetch to run when the list
/// has to be reloaded.
pub fn reconcile(
    list: &mut PromptList,
    prompt_id: &str,
    kind: VoteKind,
    outcome: Result<Option<VoteTally>, ApiError>,
) -> Option<FetchRequest> {
    match outcome {
        Ok(Some(tally)) if list.apply_tally(prompt_id, tally) => {
            debug!(prompt_id, ?kind, "applied vote tally");
            None
        }
        Ok(_) => Some(list.refresh()),
        Err(e) => {
            error!(prompt_id, ?kind, "vote failed: {e}");
            None
        }
    }
}
