//! Login page view with email/password form.

use dioxus::prelude::*;
use ui::components::{Button, ButtonVariant, FormError, FormNotice, TextField};
use ui::flows::submit_login;
use ui::forms::LOGIN_FORM;
use ui::{use_api, use_notice, use_session, FormDraft};

use crate::{resume_route, Route};

/// Login page component. `from` is the protected path to resume afterwards.
#[component]
pub fn Login(from: String) -> Element {
    let mut session = use_session();
    let api = use_api();
    let mut notice = use_notice();
    let nav = use_navigator();
    let mut draft = use_signal(|| FormDraft::new(LOGIN_FORM));
    let confirmation = use_hook(|| notice.take());

    // Already logged in
    if session.read().is_authenticated() {
        nav.replace(resume_route(&from));
    }

    let handle_login = move |evt: FormEvent| {
        evt.prevent_default();
        let Ok(values) = draft.write().begin_submit() else {
            return;
        };
        let api = api.clone();
        let destination = resume_route(&from);
        spawn(async move {
            let mut working = session.peek().clone();
            let outcome = submit_login(&mut working, &api, &values).await;
            draft.write().finish_submit(&outcome);
            if outcome.is_ok() {
                session.set(working);
                nav.replace(destination);
            }
        });
    };

    let form = draft.read();
    let submitting = form.is_submitting();

    rsx! {
        div {
            class: "flex flex-col items-center justify-center min-h-screen p-8 bg-white",

            h1 {
                class: "mb-2 text-neutral-800 font-bold text-[1.75rem]",
                "Promptdeck"
            }

            p {
                class: "mb-8 text-neutral-600 text-[0.9375rem]",
                "Sign in to browse and share prompts"
            }

            form {
                onsubmit: handle_login,
                class: "flex flex-col gap-3 w-full max-w-[320px]",

                FormNotice { message: confirmation }
                FormError { message: form.status().map(str::to_string) }

                TextField {
                    id: "login-email",
                    label: "Email",
                    r#type: "email",
                    placeholder: "you@example.com",
                    value: form.value("email").to_string(),
                    error: form.error("email").map(str::to_string),
                    oninput: move |value: String| draft.write().set("email", value),
                    onblur: move |_| draft.write().blur("email"),
                }

                TextField {
                    id: "login-password",
                    label: "Password",
                    r#type: "password",
                    value: form.value("password").to_string(),
                    error: form.error("password").map(str::to_string),
                    oninput: move |value: String| draft.write().set("password", value),
                    onblur: move |_| draft.write().blur("password"),
                }

                Button {
                    variant: ButtonVariant::Primary,
                    class: "w-full text-[0.9375rem] font-medium",
                    r#type: "submit",
                    disabled: submitting,
                    if submitting { "Signing in..." } else { "Sign in" }
                }
            }

            p {
                class: "mt-6 text-sm text-neutral-600",
                "Don't have an account? "
                Link {
                    class: "text-primary-500 no-underline",
                    to: Route::Register {},
                    "Sign up"
                }
            }
        }
    }
}
