use dioxus::prelude::*;

use crate::icons::FaXmark;
use crate::Icon;

/// A full-screen overlay that centers its children in a titled modal card.
/// Clicking outside the card or on the close button triggers `on_close`.
#[component]
pub fn ModalOverlay(title: String, on_close: EventHandler<()>, children: Element) -> Element {
    rsx! {
        div {
            class: "fixed inset-0 flex items-center justify-center bg-black/30",
            style: "z-index: 2000",
            onclick: move |_| on_close.call(()),
            div {
                class: "bg-white rounded-lg shadow-lg max-w-lg w-full mx-4 max-h-[85vh] flex flex-col",
                role: "dialog",
                onclick: move |evt: Event<MouseData>| evt.stop_propagation(),
                div {
                    class: "flex items-center justify-between px-6 pt-5 pb-3",
                    h2 { class: "m-0 text-lg font-semibold text-neutral-800 break-words", "{title}" }
                    button {
                        class: "p-1 text-neutral-500 hover:text-neutral-800 bg-transparent border-none cursor-pointer",
                        title: "Close",
                        onclick: move |_| on_close.call(()),
                        Icon { icon: FaXmark, width: 14, height: 14 }
                    }
                }
                div { class: "px-6 pb-6 overflow-y-auto", {children} }
            }
        }
    }
}
