//! Navigation bar. Links depend on whether the user is logged in and a manager.

use dioxus::prelude::*;

use crate::app::auth::use_auth;
use crate::app::Route;

/// Which nav entry the current page belongs to
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum NavSection {
    #[default]
    None,
    Login,
    Reservations,
    RoomTypes,
    NewRoomType,
}

#[component]
fn NavItem(to: Route, label: &'static str, current: bool) -> Element {
    rsx! {
        li {
            if current {
                Link { to: to, class: "active", strong { "{label}" } }
            } else {
                Link { to: to, "{label}" }
            }
        }
    }
}

#[component]
pub fn Nav(section: NavSection) -> Element {
    let state = use_auth().state();

    rsx! {
        nav {
            ul {
                li { strong { "Hotel Admin" } }
            }
            ul {
                if state.logged_in {
                    NavItem {
                        to: Route::Reservations {},
                        label: "Reservations",
                        current: section == NavSection::Reservations,
                    }
                    NavItem {
                        to: Route::RoomTypes {},
                        label: "Room Types",
                        current: section == NavSection::RoomTypes,
                    }
                    if state.is_manager {
                        NavItem {
                            to: Route::RoomTypeCreate {},
                            label: "New Room Type",
                            current: section == NavSection::NewRoomType,
                        }
                    }
                    NavItem { to: Route::Logout {}, label: "Logout", current: false }
                } else {
                    NavItem {
                        to: Route::Login {},
                        label: "Login",
                        current: section == NavSection::Login,
                    }
                }
            }
        }
    }
}
