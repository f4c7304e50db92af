//! Logout page component.

use dioxus::prelude::*;

use crate::app::auth::use_auth;
use crate::app::components::Layout;
use crate::app::Route;

/// Clears the session on mount and returns to the login page.
#[component]
pub fn Logout() -> Element {
    let auth = use_auth();
    let navigator = use_navigator();

    use_effect(move || {
        auth.logout();
        navigator.replace(Route::Login {});
    });

    rsx! {
        Layout {
            title: "Logout".to_string(),

            p { aria_busy: "true", "Signing out..." }
        }
    }
}
