use dioxus::prelude::*;

use super::ModalOverlay;
use crate::auth::{use_api, use_session};
use crate::components::{Button, ButtonVariant, FormError, TextField};
use crate::flows::submit_prompt;
use crate::forms::{FormDraft, ADD_PROMPT_FORM, TITLE_MAX_CHARS};

/// Modal form for sharing a new prompt.
///
/// `on_created` fires once the server accepted the prompt; the caller closes
/// the dialog and reloads the list.
#[component]
pub fn AddPromptDialog(on_close: EventHandler<()>, on_created: EventHandler<()>) -> Element {
    let api = use_api();
    let session = use_session();
    let mut draft = use_signal(|| FormDraft::new(ADD_PROMPT_FORM));

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        let Ok(values) = draft.write().begin_submit() else {
            return;
        };
        let api = api.clone();
        let token = session.read().token().map(str::to_string);
        spawn(async move {
            let outcome = submit_prompt(&api, token.as_deref(), &values).await;
            draft.write().finish_submit(&outcome);
            if outcome.is_ok() {
                on_created.call(());
            }
        });
    };

    let form = draft.read();
    let title_len = form.value("title").chars().count();
    let submitting = form.is_submitting();

    rsx! {
        ModalOverlay {
            title: "New Prompt",
            on_close,
            form {
                class: "flex flex-col gap-4",
                onsubmit: handle_submit,

                FormError { message: form.status().map(str::to_string) }

                TextField {
                    id: "new-prompt-title",
                    label: "Title",
                    placeholder: "A short, descriptive title",
                    value: form.value("title").to_string(),
                    error: form.error("title").map(str::to_string),
                    oninput: move |value: String| draft.write().set("title", value),
                    onblur: move |_| draft.write().blur("title"),
                }
                span {
                    class: "-mt-3 self-end text-xs text-neutral-500",
                    "{title_len}/{TITLE_MAX_CHARS}"
                }

                TextField {
                    id: "new-prompt-body",
                    label: "Prompt",
                    placeholder: "Write the prompt exactly as it should be used",
                    multiline: true,
                    value: form.value("prompt").to_string(),
                    error: form.error("prompt").map(str::to_string),
                    oninput: move |value: String| draft.write().set("prompt", value),
                    onblur: move |_| draft.write().blur("prompt"),
                }

                div {
                    class: "flex gap-2 justify-end",
                    Button {
                        variant: ButtonVariant::Outline,
                        onclick: move |_| on_close.call(()),
                        "Cancel"
                    }
                    Button {
                        variant: ButtonVariant::Primary,
                        r#type: "submit",
                        disabled: submitting,
                        if submitting { "Sharing..." } else { "Share prompt" }
                    }
                }
            }
        }
    }
}
