//! Room types listing page component.
//!
//! Shows every room type as a card using a Dioxus resource.

use dioxus::prelude::*;

use crate::app::api::{use_api, ApiError, RoomType};
use crate::app::auth::use_auth;
use crate::app::components::{Layout, NavSection};
use crate::app::resources;
use crate::app::Route;

/// Single room type card
#[component]
fn RoomCard(room: RoomType, editable: bool) -> Element {
    let rate = format!("{:.2}", room.rate);

    rsx! {
        article { class: "card",
            header {
                strong { "{room.name}" }
                if room.active {
                    span { class: "status-ok", " Active" }
                } else {
                    span { class: "status-disabled", " Inactive" }
                }
            }
            p { "{room.description}" }
            p { "Rate: " strong { "{rate}" } " / night" }
            if editable {
                footer {
                    Link { to: Route::RoomTypeEdit { id: room.id }, "Edit" }
                }
            }
        }
    }
}

/// Room types listing page component.
#[component]
pub fn RoomTypes() -> Element {
    let auth = use_auth();
    let api = use_api();
    let navigator = use_navigator();

    let rooms = use_resource(move || {
        let api = api.clone();
        let session = auth.session();
        async move { resources::load_room_types(api.as_ref(), &session).await }
    });

    // Token vanished between guard check and fetch
    use_effect(move || {
        if let Some(Err(ApiError::MissingToken)) = rooms.read().as_ref() {
            navigator.replace(Route::Login {});
        }
    });

    let content = match rooms.read().clone() {
        None => rsx! {
            article { aria_busy: "true", "Loading rooms..." }
        },
        Some(Err(e)) => rsx! {
            article { class: "status-err", "Could not load room types: {e}" }
        },
        Some(Ok(list)) if list.is_empty() => rsx! {
            article { "No room types yet." }
        },
        Some(Ok(list)) => {
            let editable = auth.is_manager();
            rsx! {
                div { class: "row",
                    for room in list {
                        div { class: "column", key: "{room.id}",
                            RoomCard { room: room.clone(), editable }
                        }
                    }
                }
            }
        }
    };

    rsx! {
        Layout {
            title: "Room Types".to_string(),
            section: NavSection::RoomTypes,

            h2 { "Rooms" }
            if auth.is_manager() {
                p { Link { to: Route::RoomTypeCreate {}, "Add a room type" } }
            }
            {content}
        }
    }
}
