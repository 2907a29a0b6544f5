use api::Prompt;
use dioxus::prelude::*;

use super::ModalOverlay;

/// Read-only view of a whole prompt. The body is shown verbatim.
#[component]
pub fn PromptDetail(prompt: Prompt, on_close: EventHandler<()>) -> Element {
    let dislikes = prompt.dislike_count();

    rsx! {
        ModalOverlay {
            title: prompt.title.clone(),
            on_close,
            p { class: "m-0 mb-4 text-xs text-neutral-500", "by {prompt.author_name}" }
            pre {
                class: "m-0 p-3 bg-neutral-50 rounded text-sm text-neutral-800 whitespace-pre-wrap break-words font-[inherit]",
                "{prompt.body}"
            }
            p {
                class: "mt-4 mb-0 text-xs text-neutral-500",
                "{prompt.like_count} likes · {dislikes} dislikes"
            }
        }
    }
}
