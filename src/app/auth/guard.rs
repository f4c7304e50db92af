//! Per-route access requirements and the layout that enforces them.

use dioxus::prelude::*;

use super::context::use_auth;
use super::gate::AuthState;
use crate::app::components::Layout;
use crate::app::Route;

/// What a route requires of the current user
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Access {
    Public,
    Authenticated,
    Manager,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuardDecision {
    Render,
    RedirectToLogin,
    /// Logged in, but without the manager role
    Forbidden,
}

pub fn decide(access: Access, auth: AuthState) -> GuardDecision {
    match access {
        Access::Public => GuardDecision::Render,
        _ if !auth.logged_in => GuardDecision::RedirectToLogin,
        Access::Authenticated => GuardDecision::Render,
        Access::Manager if auth.is_manager => GuardDecision::Render,
        Access::Manager => GuardDecision::Forbidden,
    }
}

impl Route {
    pub fn access(&self) -> Access {
        match self {
            Route::Login {} | Route::Logout {} | Route::NotFound { .. } => Access::Public,
            Route::Reservations {}
            | Route::ReservationCreate {}
            | Route::ReservationEdit { .. }
            | Route::RoomTypes {} => Access::Authenticated,
            Route::RoomTypeCreate {} | Route::RoomTypeEdit { .. } => Access::Manager,
        }
    }
}

/// Layout wrapping every guarded route.
///
/// Renders nothing until the client has restored the session, so the server
/// render and the first hydrated frame agree.
#[component]
pub fn Guard() -> Element {
    let auth = use_auth();
    let route = use_route::<Route>();
    let navigator = use_navigator();

    let decision = decide(route.access(), auth.state());

    // Re-derive from storage on every navigation; a stale login flips the
    // state signal and this effect runs again with the redirect.
    use_effect(use_reactive!(|route| {
        if !auth.is_ready() {
            return;
        }
        auth.resync();
        if decide(route.access(), auth.state()) == GuardDecision::RedirectToLogin {
            tracing::debug!("Redirecting {} to login", route);
            navigator.replace(Route::Login {});
        }
    }));

    if !auth.is_ready() {
        return rsx! {};
    }

    match decision {
        GuardDecision::Render => rsx! { Outlet::<Route> {} },
        GuardDecision::RedirectToLogin => rsx! {},
        GuardDecision::Forbidden => rsx! {
            Layout {
                title: "Forbidden".to_string(),
                h1 { "Managers only" }
                p { "Your account does not have permission to view this page." }
            }
        },
    }
}
