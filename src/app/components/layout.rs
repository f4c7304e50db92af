//! Page chrome: head tags, nav, signed-in banner and build footer.

use dioxus::prelude::*;

use super::nav::{Nav, NavSection};
use crate::app::auth::use_auth;

const VERSION: &str = env!("HOTEL_ADMIN_VERSION");
const GIT_SHA: &str = env!("HOTEL_ADMIN_GIT_SHA");

/// Who is signed in, shown under the nav
#[component]
fn SessionBanner() -> Element {
    let auth = use_auth();
    if !auth.logged_in() {
        return rsx! {};
    }
    let who = auth.email().unwrap_or_else(|| "unknown user".to_string());

    rsx! {
        p { class: "session-banner text-muted",
            "Signed in as {who}"
            if auth.is_manager() {
                span { class: "badge", "manager" }
            }
        }
    }
}

#[component]
pub fn Layout(title: String, #[props(default)] section: NavSection, children: Element) -> Element {
    rsx! {
        document::Title { "{title} - Hotel Admin" }
        document::Link { rel: "stylesheet", href: asset!("/public/main.css") }

        Nav { section }
        main { class: "container",
            SessionBanner {}
            {children}
        }
        footer { class: "container footer",
            small { class: "text-muted", "v{VERSION} ({GIT_SHA})" }
        }
    }
}
