//! The home screen: search box, result cards, detail and add-prompt modals.

use api::{PromptApi, VoteKind};
use dioxus::prelude::*;
use tracing::debug;

use super::{AddPromptDialog, PromptCard, PromptDetail};
use crate::auth::{use_api, use_session};
use crate::components::{Button, ButtonVariant};
use crate::icons::{FaMagnifyingGlass, FaPlus};
use crate::prompt_list::{EmptyState, FetchRequest, PromptList};
use crate::vote::{reconcile, VoteTracker};
use crate::Icon;

#[component]
pub fn PromptBrowser() -> Element {
    let api = use_api();
    let session = use_session();
    let mut list = use_signal(PromptList::new);
    let mut votes = use_signal(VoteTracker::default);

    let fetch_api = api.clone();
    let run_fetch = use_callback(move |request: FetchRequest| {
        let api = fetch_api.clone();
        let token = session.peek().token().map(str::to_string);
        spawn(async move {
            let outcome = api.search_prompts(&request.query, token.as_deref()).await;
            list.write().finish(request.ticket, outcome);
        });
    });

    let vote = use_callback(move |(prompt_id, kind): (String, VoteKind)| {
        if let Err(refused) = votes.write().begin(&prompt_id) {
            debug!(prompt_id, "vote not sent: {refused}");
            return;
        }
        let api = api.clone();
        let token = session.peek().token().map(str::to_string);
        spawn(async move {
            let outcome = api.vote(&prompt_id, kind, token.as_deref()).await;
            votes.write().finish(&prompt_id);
            let follow_up = reconcile(&mut list.write(), &prompt_id, kind, outcome);
            if let Some(request) = follow_up {
                run_fetch.call(request);
            }
        });
    });

    use_effect(move || {
        let request = list.write().mount();
        run_fetch.call(request);
    });

    let mut search = move || {
        if list.peek().is_loading() {
            return;
        }
        let request = list.write().search();
        run_fetch.call(request);
    };

    let state = list.read();
    let loading = state.is_loading();
    let query = state.query().to_string();

    rsx! {
        div {
            class: "flex flex-col gap-6 w-full max-w-5xl mx-auto p-6",

            div {
                class: "flex gap-2",
                input {
                    class: "flex-1 bg-white border border-neutral-300 rounded px-3 py-2 text-sm text-neutral-800 outline-none focus:border-primary-500 disabled:bg-neutral-50",
                    r#type: "search",
                    placeholder: "Search prompts...",
                    value: "{query}",
                    disabled: loading,
                    oninput: move |evt: FormEvent| list.write().set_query(evt.value()),
                    onkeydown: move |evt: KeyboardEvent| {
                        if evt.key() == Key::Enter {
                            search();
                        }
                    },
                }
                Button {
                    variant: ButtonVariant::Outline,
                    disabled: loading,
                    onclick: move |_| search(),
                    Icon { icon: FaMagnifyingGlass, width: 12, height: 12 }
                    "Search"
                }
                Button {
                    variant: ButtonVariant::Primary,
                    onclick: move |_| {
                        let request = list.write().open_add_dialog();
                        run_fetch.call(request);
                    },
                    Icon { icon: FaPlus, width: 12, height: 12 }
                    "Add Prompt"
                }
            }

            if loading {
                p { class: "text-center text-sm text-neutral-500", "Loading prompts..." }
            }

            match state.empty_state() {
                EmptyState::Hidden => rsx! {},
                EmptyState::Hint => rsx! {
                    p { class: "text-center text-sm text-neutral-500", "Type something and press Search to find prompts." }
                },
                EmptyState::NoResults => rsx! {
                    p { class: "text-center text-sm text-neutral-500", "No prompts found." }
                },
            }

            div {
                class: "grid gap-4 grid-cols-1 sm:grid-cols-2 lg:grid-cols-3",
                for (index, prompt) in state.prompts().iter().enumerate() {
                    PromptCard {
                        key: "{index}-{prompt.id}",
                        prompt: prompt.clone(),
                        voting: votes.read().is_pending(&prompt.id),
                        on_open: move |_| list.write().select(index),
                        on_vote: {
                            let prompt_id = prompt.id.clone();
                            move |kind: VoteKind| vote.call((prompt_id.clone(), kind))
                        },
                    }
                }
            }

            if let Some(prompt) = state.selected() {
                PromptDetail {
                    prompt: prompt.clone(),
                    on_close: move |_| list.write().close_detail(),
                }
            }

            if state.is_add_dialog_open() {
                AddPromptDialog {
                    on_close: move |_| list.write().close_add_dialog(),
                    on_created: move |_| {
                        let request = list.write().prompt_created();
                        run_fetch.call(request);
                    },
                }
            }
        }
    }
}
