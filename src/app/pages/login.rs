//! Login page component.
//!
//! Submits credentials through the login flow. Any logged-in state, fresh or
//! restored, moves on to reservations.

use dioxus::prelude::*;

use crate::app::api::use_api;
use crate::app::auth::{use_auth, Credentials, LoginOutcome};
use crate::app::components::{FormError, Layout, NavSection, TextInput};
use crate::app::Route;

/// Login page component.
#[component]
pub fn Login() -> Element {
    let auth = use_auth();
    let api = use_api();
    let navigator = use_navigator();

    let flow = use_hook(|| auth.login_flow(api));

    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut error = use_signal(|| None::<String>);
    let mut loading = use_signal(|| false);

    let submit = move |evt: FormEvent| {
        evt.prevent_default();
        let flow = flow.clone();
        let credentials = Credentials {
            email: email(),
            password: password(),
        };
        error.set(None);
        loading.set(true);
        spawn(async move {
            match auth.submit_login(&flow, credentials).await {
                Ok(LoginOutcome::LoggedIn(_)) => loading.set(false),
                // A newer submission owns the loading flag and error
                Ok(LoginOutcome::Superseded) => {}
                Err(e) => {
                    loading.set(false);
                    error.set(Some(e.to_string()));
                }
            }
        });
    };

    // Fresh login or a session from earlier in this tab
    use_effect(move || {
        if auth.logged_in() {
            navigator.replace(Route::Reservations {});
        }
    });

    rsx! {
        Layout {
            title: "Login".to_string(),
            section: NavSection::Login,

            div { class: "center",
                if auth.logged_in() {
                    p { aria_busy: "true",
                        "Signed in. "
                        Link { to: Route::Reservations {}, "Continue to reservations" }
                    }
                } else {
                    h1 { "Sign in" }
                    form { onsubmit: submit, novalidate: true,
                        FormError { error }
                        TextInput {
                            label: "Email",
                            name: "email",
                            input_type: "email",
                            placeholder: "email",
                            value: email(),
                            on_change: move |v| email.set(v),
                        }
                        TextInput {
                            label: "Password",
                            name: "password",
                            input_type: "password",
                            placeholder: "password",
                            value: password(),
                            on_change: move |v| password.set(v),
                        }
                        button {
                            class: "button",
                            r#type: "submit",
                            disabled: loading(),
                            aria_busy: if loading() { "true" } else { "false" },
                            if loading() { "Signing in..." } else { "login" }
                        }
                    }
                }
            }
        }
    }
}
