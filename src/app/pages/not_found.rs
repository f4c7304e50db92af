//! Not-found page, rendered for any unknown path regardless of login state.

use dioxus::prelude::*;

use crate::app::components::Layout;
use crate::app::Route;

#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    let path = format!("/{}", segments.join("/"));

    rsx! {
        Layout {
            title: "Not Found".to_string(),

            h1 { "Page not found" }
            p { "Nothing lives at " code { "{path}" } "." }
            Link { to: Route::Login {}, "Back to start" }
        }
    }
}
