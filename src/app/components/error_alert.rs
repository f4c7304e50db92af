//! Inline form error bound to a page's error signal.

use dioxus::prelude::*;

/// Renders the message held in `error`, if any. Dismissing clears the signal.
#[component]
pub fn FormError(error: Signal<Option<String>>) -> Element {
    let mut error = error;
    let Some(message) = error() else {
        return rsx! {};
    };

    rsx! {
        div { class: "alert alert-error", role: "alert",
            span { "{message}" }
            button {
                class: "btn-ghost",
                r#type: "button",
                aria_label: "Dismiss",
                onclick: move |_| error.set(None),
                "×"
            }
        }
    }
}
