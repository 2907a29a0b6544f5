//! Small building blocks shared by the pages and dialogs.

use dioxus::prelude::*;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ButtonVariant {
    #[default]
    Primary,
    Outline,
    Ghost,
}

impl ButtonVariant {
    fn class(self) -> &'static str {
        match self {
            ButtonVariant::Primary => {
                "bg-primary-500 text-white border border-primary-500 hover:bg-primary-600"
            }
            ButtonVariant::Outline => {
                "bg-white text-neutral-800 border border-neutral-300 hover:bg-neutral-50"
            }
            ButtonVariant::Ghost => {
                "bg-transparent text-neutral-600 border border-transparent hover:bg-neutral-100"
            }
        }
    }
}

#[component]
pub fn Button(
    #[props(default)] variant: ButtonVariant,
    #[props(default = "button".to_string())] r#type: String,
    #[props(default)] disabled: bool,
    #[props(default)] class: String,
    onclick: Option<EventHandler<MouseEvent>>,
    children: Element,
) -> Element {
    let variant_class = variant.class();

    rsx! {
        button {
            class: "inline-flex items-center justify-center gap-1.5 px-4 py-2 rounded text-sm cursor-pointer disabled:opacity-50 disabled:cursor-not-allowed {variant_class} {class}",
            r#type: r#type.clone(),
            disabled,
            onclick: move |evt| {
                if let Some(handler) = onclick {
                    handler.call(evt);
                }
            },
            {children}
        }
    }
}

/// Labelled input with its validation message underneath.
#[component]
pub fn TextField(
    id: String,
    label: String,
    value: String,
    #[props(default = "text".to_string())] r#type: String,
    #[props(default)] placeholder: String,
    #[props(default)] multiline: bool,
    error: Option<String>,
    oninput: EventHandler<String>,
    onblur: EventHandler<()>,
) -> Element {
    let border = if error.is_some() {
        "border-red-400"
    } else {
        "border-neutral-300 focus:border-primary-500"
    };
    let field_class = format!(
        "w-full mt-1.5 bg-white border {border} rounded px-3 py-2 text-sm text-neutral-800 outline-none font-[inherit]"
    );

    rsx! {
        div {
            class: "flex flex-col",
            label {
                r#for: "{id}",
                class: "text-sm font-medium text-neutral-700",
                "{label}"
            }
            if multiline {
                textarea {
                    id: "{id}",
                    class: "{field_class} min-h-32 resize-y",
                    placeholder: "{placeholder}",
                    value: "{value}",
                    oninput: move |evt: FormEvent| oninput.call(evt.value()),
                    onblur: move |_| onblur.call(()),
                }
            } else {
                input {
                    id: "{id}",
                    class: "{field_class}",
                    r#type: r#type.clone(),
                    placeholder: "{placeholder}",
                    value: "{value}",
                    oninput: move |evt: FormEvent| oninput.call(evt.value()),
                    onblur: move |_| onblur.call(()),
                }
            }
            if let Some(message) = error {
                span { class: "mt-1 text-xs text-red-600", "{message}" }
            }
        }
    }
}

/// Form-level failure message.
#[component]
pub fn FormError(message: Option<String>) -> Element {
    rsx! {
        if let Some(message) = message {
            div {
                class: "px-2.5 py-2.5 bg-red-50 border border-red-200 rounded text-red-600 text-[0.8125rem]",
                "{message}"
            }
        }
    }
}

/// Form-level confirmation message.
#[component]
pub fn FormNotice(message: Option<String>) -> Element {
    rsx! {
        if let Some(message) = message {
            div {
                class: "px-2.5 py-2.5 bg-green-50 border border-green-200 rounded text-green-700 text-[0.8125rem]",
                "{message}"
            }
        }
    }
}
