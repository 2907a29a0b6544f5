use api::{Prompt, VoteKind};
use dioxus::prelude::*;

use crate::icons::{FaThumbsDown, FaThumbsUp};
use crate::Icon;

/// One search result. Clicking the card opens the detail view; the vote
/// buttons stop the click from reaching the card.
#[component]
pub fn PromptCard(
    prompt: Prompt,
    #[props(default)] voting: bool,
    on_open: EventHandler<()>,
    on_vote: EventHandler<VoteKind>,
) -> Element {
    let can_vote = prompt.is_votable() && !voting;
    let dislikes = prompt.dislike_count();

    rsx! {
        div {
            class: "flex flex-col gap-2 p-4 bg-white border border-neutral-200 rounded-lg cursor-pointer hover:shadow-md transition-shadow",
            onclick: move |_| on_open.call(()),

            h3 { class: "m-0 text-base font-semibold text-neutral-800 truncate", "{prompt.title}" }
            p { class: "m-0 text-sm text-neutral-600 line-clamp-3 whitespace-pre-wrap", "{prompt.body}" }

            div {
                class: "flex items-center justify-between mt-auto pt-2 text-xs text-neutral-500",
                span { "by {prompt.author_name}" }
                div {
                    class: "flex items-center gap-3",
                    button {
                        class: "inline-flex items-center gap-1 bg-transparent border-none cursor-pointer text-neutral-600 hover:text-green-600 disabled:opacity-50 disabled:cursor-not-allowed",
                        title: "Like",
                        disabled: !can_vote,
                        onclick: move |evt: Event<MouseData>| {
                            evt.stop_propagation();
                            on_vote.call(VoteKind::Like);
                        },
                        Icon { icon: FaThumbsUp, width: 12, height: 12 }
                        "{prompt.like_count}"
                    }
                    button {
                        class: "inline-flex items-center gap-1 bg-transparent border-none cursor-pointer text-neutral-600 hover:text-red-600 disabled:opacity-50 disabled:cursor-not-allowed",
                        title: "Dislike",
                        disabled: !can_vote,
                        onclick: move |evt: Event<MouseData>| {
                            evt.stop_propagation();
                            on_vote.call(VoteKind::Dislike);
                        },
                        Icon { icon: FaThumbsDown, width: 12, height: 12 }
                        "{dislikes}"
                    }
                }
            }
        }
    }
}
