use dioxus::prelude::*;
use ui::views::PromptBrowser;
use ui::{use_session, LogoutButton};

use crate::Protected;

/// Home page: the prompt browser behind the login guard.
#[component]
pub fn Home() -> Element {
    let session = use_session();
    let greeting = match session.read().display_name() {
        Some(name) => format!("Hi, {name}"),
        None => "Welcome".to_string(),
    };

    rsx! {
        Protected {
            div {
                class: "min-h-screen bg-neutral-50",
                header {
                    class: "flex items-center justify-between px-6 py-4 bg-white border-b border-neutral-200",
                    h1 { class: "m-0 text-xl font-bold text-neutral-800", "Promptdeck" }
                    div {
                        class: "flex items-center gap-4 text-sm text-neutral-600",
                        span { "{greeting}" }
                        LogoutButton {
                            class: "px-3 py-1.5 bg-white border border-neutral-300 rounded text-sm cursor-pointer hover:bg-neutral-50",
                        }
                    }
                }
                PromptBrowser {}
            }
        }
    }
}
