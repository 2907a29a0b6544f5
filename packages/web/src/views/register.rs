//! Registration page view with name/email/password form.

use dioxus::prelude::*;
use ui::components::{Button, ButtonVariant, FormError, TextField};
use ui::flows::submit_registration;
use ui::forms::REGISTER_FORM;
use ui::{use_api, use_notice, use_session, FormDraft};

use crate::Route;

/// Register page component. A successful registration does not log in; it
/// moves to the login page with the confirmation message.
#[component]
pub fn Register() -> Element {
    let session = use_session();
    let api = use_api();
    let mut notice = use_notice();
    let nav = use_navigator();
    let mut draft = use_signal(|| FormDraft::new(REGISTER_FORM));

    // Already logged in
    if session.read().is_authenticated() {
        nav.replace(Route::Home {});
    }

    let handle_register = move |evt: FormEvent| {
        evt.prevent_default();
        let Ok(values) = draft.write().begin_submit() else {
            return;
        };
        let api = api.clone();
        spawn(async move {
            let working = session.peek().clone();
            let outcome = submit_registration(&working, &api, &values).await;
            draft.write().finish_submit(&outcome);
            if let Ok(message) = outcome {
                notice.post(message);
                nav.push(Route::Login {
                    from: String::new(),
                });
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
                "Create Account"
            }

            p {
                class: "mb-8 text-neutral-600 text-[0.9375rem]",
                "Sign up for Promptdeck"
            }

            form {
                onsubmit: handle_register,
                class: "flex flex-col gap-3 w-full max-w-[320px]",

                FormError { message: form.status().map(str::to_string) }

                TextField {
                    id: "register-name",
                    label: "Name",
                    value: form.value("name").to_string(),
                    error: form.error("name").map(str::to_string),
                    oninput: move |value: String| draft.write().set("name", value),
                    onblur: move |_| draft.write().blur("name"),
                }

                TextField {
                    id: "register-email",
                    label: "Email",
                    r#type: "email",
                    placeholder: "you@example.com",
                    value: form.value("email").to_string(),
                    error: form.error("email").map(str::to_string),
                    oninput: move |value: String| draft.write().set("email", value),
                    onblur: move |_| draft.write().blur("email"),
                }

                TextField {
                    id: "register-password",
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
                    if submitting { "Creating account..." } else { "Sign up" }
                }
            }

            p {
                class: "mt-6 text-sm text-neutral-600",
                "Already have an account? "
                Link {
                    class: "text-primary-500 no-underline",
                    to: Route::Login { from: String::new() },
                    "Sign in"
                }
            }
        }
    }
}
