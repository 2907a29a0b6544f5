//! # Prompt list controller
//!
//! [`PromptList`] is the state behind the home view: the query being typed,
//! the current result set, which prompt is open in the detail modal, and
//! whether the add-prompt dialog is showing. It performs no I/O. Every action
//! that needs the network returns a [`FetchRequest`]; the caller runs the
//! search and hands the outcome back to [`finish`](PromptList::finish).
//!
//! ## Phases
//!
//! ```text
//!            mount / search / refresh
//!   Idle ─────────────────────────────▶ Loading
//!                                        │  non-empty result ──▶ Loaded
//!                                        │  empty result     ──▶ Empty
//!                                        └  request failed   ──▶ Empty (logged)
//! ```
//!
//! Any later fetch goes back to `Loading` from `Loaded` or `Empty`.
//!
//! ## Stale responses
//!
//! Each fetch takes the next [`FetchTicket`]. Only the newest ticket's outcome
//! is applied; an older response arriving late is dropped, so the screen
//! always reflects the last search started.
//!
//! ## Empty states
//!
//! Before the first explicit search an empty list shows a hint
//! ([`EmptyState::Hint`]). After one, an empty list that is not loading shows
//! "no results" ([`EmptyState::NoResults`]). Mount and refreshes are not
//! explicit searches.

use api::{ApiError, Prompt, VoteTally};
use tracing::{debug, error};

/// Where the controller is in its fetch cycle.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ListPhase {
    #[default]
    Idle,
    Loading,
    Loaded,
    Empty,
}

/// What to show in place of cards.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EmptyState {
    /// Cards (or a spinner) are showing.
    Hidden,
    /// Nothing searched yet: invite the user to type something.
    Hint,
    /// An explicit search matched nothing (or failed).
    NoResults,
}

/// Sequence number of a fetch.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct FetchTicket(u64);

/// A search the caller must run and report back.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FetchRequest {
    pub ticket: FetchTicket,
    pub query: String,
}

/// State of the prompt browser.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PromptList {
    query: String,
    prompts: Vec<Prompt>,
    phase: ListPhase,
    searched: bool,
    generation: u64,
    selected: Option<Prompt>,
    add_dialog_open: bool,
}

impl PromptList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
    }

    pub fn phase(&self) -> ListPhase {
        self.phase
    }

    pub fn is_loading(&self) -> bool {
        self.phase == ListPhase::Loading
    }

    /// Current result set, in server order.
    pub fn prompts(&self) -> &[Prompt] {
        &self.prompts
    }

    /// Whether an explicit search has been run.
    pub fn has_searched(&self) -> bool {
        self.searched
    }

    /// Initial listing when the view mounts. The query is still empty then,
    /// so this lists everything.
    pub fn mount(&mut self) -> FetchRequest {
        self.begin()
    }

    /// Explicit search with the current query (button or Enter).
    pub fn search(&mut self) -> FetchRequest {
        self.searched = true;
        self.begin()
    }

    /// Re-run the current query without counting as an explicit search.
    pub fn refresh(&mut self) -> FetchRequest {
        self.begin()
    }

    fn begin(&mut self) -> FetchRequest {
        self.generation += 1;
        self.phase = ListPhase::Loading;
        debug!(generation = self.generation, query = %self.query, "fetching prompts");
        FetchRequest {
            ticket: FetchTicket(self.generation),
            query: self.query.clone(),
        }
    }

    /// Apply the outcome of a fetch. Returns `false` when `ticket` is stale
    /// and the outcome was dropped.
    pub fn finish(&mut self, ticket: FetchTicket, outcome: Result<Vec<Prompt>, ApiError>) -> bool {
        if ticket != FetchTicket(self.generation) {
            debug!(?ticket, latest = self.generation, "dropping stale prompt response");
            return false;
        }
        self.prompts = match outcome {
            Ok(prompts) => prompts,
            Err(e) => {
                error!("failed to fetch prompts: {e}");
                Vec::new()
            }
        };
        self.phase = if self.prompts.is_empty() {
            ListPhase::Empty
        } else {
            ListPhase::Loaded
        };
        true
    }

    pub fn empty_state(&self) -> EmptyState {
        if !self.prompts.is_empty() {
            return EmptyState::Hidden;
        }
        if !self.searched {
            return EmptyState::Hint;
        }
        if self.is_loading() {
            EmptyState::Hidden
        } else {
            EmptyState::NoResults
        }
    }

    /// Open the detail modal for the card at `index`.
    pub fn select(&mut self, index: usize) {
        self.selected = self.prompts.get(index).cloned();
    }

    pub fn selected(&self) -> Option<&Prompt> {
        self.selected.as_ref()
    }

    pub fn close_detail(&mut self) {
        self.selected = None;
    }

    pub fn is_add_dialog_open(&self) -> bool {
        self.add_dialog_open
    }

    /// Show the add-prompt dialog and refresh the list behind it.
    pub fn open_add_dialog(&mut self) -> FetchRequest {
        self.add_dialog_open = true;
        self.refresh()
    }

    pub fn close_add_dialog(&mut self) {
        self.add_dialog_open = false;
    }

    /// A prompt was created: close the dialog and re-fetch the current query.
    pub fn prompt_created(&mut self) -> FetchRequest {
        self.add_dialog_open = false;
        self.refresh()
    }

    /// Replace the counts of prompt `id` with a server tally.
    ///
    /// Returns `false` if no prompt with that id is listed.
    pub fn apply_tally(&mut self, id: &str, tally: VoteTally) -> bool {
        let Some(prompt) = self.prompts.iter_mut().find(|p| p.id == id) else {
            return false;
        };
        prompt.like_count = tally.likes;
        prompt.total_votes = tally.total_votes;
        if let Some(selected) = self.selected.as_mut().filter(|s| s.id == id) {
            selected.like_count = tally.likes;
            selected.total_votes = tally.total_votes;
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use api::PromptApi;

    use super::*;
    use crate::testing::{prompt, FakeApi, Reply};

    async fn run<A: PromptApi>(list: &mut PromptList, api: &A, request: FetchRequest) {
        let outcome = api.search_prompts(&request.query, Some("tok")).await;
        list.finish(request.ticket, outcome);
    }

    #[tokio::test]
    async fn test_mount_lists_everything() {
        let api = FakeApi {
            search: Reply::Ok(vec![prompt("1", "Logo", "Design a logo", 1, 2)]),
            ..FakeApi::default()
        };
        let mut list = PromptList::new();
        assert_eq!(list.phase(), ListPhase::Idle);

        let request = list.mount();
        assert_eq!(request.query, "");
        assert!(list.is_loading());

        run(&mut list, &api, request).await;
        assert_eq!(list.phase(), ListPhase::Loaded);
        assert_eq!(list.prompts().len(), 1);
        assert!(!list.has_searched());
        assert_eq!(api.calls(), vec!["search:"]);
    }

    #[tokio::test]
    async fn test_hint_before_search_and_no_results_after() {
        let api = FakeApi::default();
        let mut list = PromptList::new();

        // Hint while the mount fetch is in flight and after it returns nothing
        let request = list.mount();
        assert_eq!(list.empty_state(), EmptyState::Hint);
        run(&mut list, &api, request).await;
        assert_eq!(list.phase(), ListPhase::Empty);
        assert_eq!(list.empty_state(), EmptyState::Hint);

        list.set_query("nothing-matches");
        let request = list.search();
        assert_eq!(list.empty_state(), EmptyState::Hidden);
        run(&mut list, &api, request).await;
        assert_eq!(list.empty_state(), EmptyState::NoResults);
    }

    #[tokio::test]
    async fn test_search_renders_in_order_and_detail_shows_body() {
        let api = FakeApi {
            search: Reply::Ok(vec![
                prompt("a", "Logo for a bakery", "Warm colours, a croissant.", 2, 3),
                prompt("b", "Minimal logo", "Black and white.\nNo gradients.", 0, 1),
            ]),
            ..FakeApi::default()
        };
        let mut list = PromptList::new();
        list.set_query("logo");
        let request = list.search();
        run(&mut list, &api, request).await;

        let titles: Vec<_> = list.prompts().iter().map(|p| p.title.as_str()).collect();
        assert_eq!(titles, ["Logo for a bakery", "Minimal logo"]);
        assert_eq!(api.calls(), vec!["search:logo"]);

        list.select(1);
        assert_eq!(list.selected().unwrap().body, "Black and white.\nNo gradients.");

        list.close_detail();
        assert!(list.selected().is_none());
    }

    #[tokio::test]
    async fn test_failure_swallowed_to_empty() {
        let api = FakeApi {
            search: Reply::Status(500, None),
            ..FakeApi::default()
        };
        let mut list = PromptList::new();
        list.set_query("logo");
        let request = list.search();
        run(&mut list, &api, request).await;

        assert_eq!(list.phase(), ListPhase::Empty);
        assert!(list.prompts().is_empty());
        assert_eq!(list.empty_state(), EmptyState::NoResults);
    }

    #[test]
    fn test_result_set_replaced_wholesale() {
        let mut list = PromptList::new();
        let first = list.mount();
        list.finish(first.ticket, Ok(vec![prompt("1", "a", "body one", 0, 0)]));

        let second = list.refresh();
        list.finish(second.ticket, Ok(vec![prompt("2", "b", "body two", 0, 0)]));
        assert_eq!(list.prompts().len(), 1);
        assert_eq!(list.prompts()[0].id, "2");
    }

    #[test]
    fn test_stale_response_is_dropped() {
        let mut list = PromptList::new();
        list.set_query("slow");
        let slow = list.search();
        list.set_query("fast");
        let fast = list.search();

        assert!(list.finish(fast.ticket, Ok(vec![prompt("f", "fast", "fast body", 0, 0)])));
        assert!(!list.finish(slow.ticket, Ok(vec![prompt("s", "slow", "slow body", 0, 0)])));

        assert_eq!(list.prompts()[0].id, "f");
        assert_eq!(list.phase(), ListPhase::Loaded);
    }

    #[test]
    fn test_stale_response_does_not_end_loading() {
        let mut list = PromptList::new();
        let old = list.mount();
        let _current = list.search();

        list.finish(old.ticket, Ok(Vec::new()));
        assert!(list.is_loading());
    }

    #[test]
    fn test_add_dialog_refreshes_with_current_query() {
        let mut list = PromptList::new();
        list.set_query("logo");

        let opened = list.open_add_dialog();
        assert!(list.is_add_dialog_open());
        assert_eq!(opened.query, "logo");

        let created = list.prompt_created();
        assert!(!list.is_add_dialog_open());
        assert_eq!(created.query, "logo");
        assert!(created.ticket > opened.ticket);
        assert!(!list.has_searched());
    }

    #[test]
    fn test_close_add_dialog_without_fetch() {
        let mut list = PromptList::new();
        let request = list.open_add_dialog();
        list.finish(request.ticket, Ok(Vec::new()));

        list.close_add_dialog();
        assert!(!list.is_add_dialog_open());
        assert!(!list.is_loading());
    }

    #[test]
    fn test_select_out_of_range() {
        let mut list = PromptList::new();
        list.select(3);
        assert!(list.selected().is_none());
    }

    #[test]
    fn test_apply_tally_updates_list_and_detail() {
        let mut list = PromptList::new();
        let request = list.mount();
        list.finish(
            request.ticket,
            Ok(vec![prompt("a", "A", "body a", 1, 1), prompt("b", "B", "body b", 0, 0)]),
        );
        list.select(0);

        let applied = list.apply_tally(
            "a",
            VoteTally {
                likes: 1,
                total_votes: 3,
            },
        );
        assert!(applied);
        assert_eq!(list.prompts()[0].dislike_count(), 2);
        assert_eq!(list.selected().unwrap().total_votes, 3);
        assert_eq!(list.prompts()[1].total_votes, 0);

        assert!(!list.apply_tally("zzz", VoteTally { likes: 0, total_votes: 0 }));
    }

    #[test]
    fn test_fixture_tallies_are_consistent() {
        let fixtures = [
            prompt("1", "t", "body text!", 0, 0),
            prompt("2", "t", "body text!", 3, 5),
            prompt("3", "t", "body text!", 5, 5),
        ];
        for p in fixtures {
            assert!(p.like_count <= p.total_votes);
            assert_eq!(p.dislike_count(), p.total_votes - p.like_count);
        }
    }
}
