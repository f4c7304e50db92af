//! Dioxus fullstack application entry point.
//!
//! This module provides the main App component that serves as the root
//! of the Dioxus application with client-side hydration.

use dioxus::prelude::*;

pub mod api;
pub mod auth;
pub mod components;
pub mod pages;
pub mod resources;

use auth::{use_auth_provider, Guard};
use pages::{
    Login, Logout, NotFound, ReservationCreate, ReservationEdit, Reservations, RoomTypeCreate,
    RoomTypeEdit, RoomTypes,
};

/// Root app component with routing
#[component]
pub fn App() -> Element {
    // Session-derived auth state, shared by the guard, nav and pages
    use_auth_provider();

    api::use_api_provider();

    rsx! {
        Router::<Route> {}
    }
}

/// Application routes
#[derive(Clone, Routable, Debug, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Guard)]
        #[route("/")]
        Login {},
        #[route("/reservations")]
        Reservations {},
        #[route("/reservations/create")]
        ReservationCreate {},
        #[route("/reservations/edit/:id")]
        ReservationEdit { id: i64 },
        #[route("/room-types")]
        RoomTypes {},
        #[route("/room-types/create")]
        RoomTypeCreate {},
        #[route("/room-types/edit/:id")]
        RoomTypeEdit { id: i64 },
        #[route("/logout")]
        Logout {},
    #[end_layout]
    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}
