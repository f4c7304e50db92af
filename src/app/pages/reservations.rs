//! Reservations listing page component.

use dioxus::prelude::*;

use crate::app::api::{use_api, ApiError};
use crate::app::auth::use_auth;
use crate::app::components::{Layout, NavSection};
use crate::app::resources;
use crate::app::Route;

/// Reservations listing page component.
#[component]
pub fn Reservations() -> Element {
    let auth = use_auth();
    let api = use_api();
    let navigator = use_navigator();

    let reservations = use_resource(move || {
        let api = api.clone();
        let session = auth.session();
        async move { resources::load_reservations(api.as_ref(), &session).await }
    });

    use_effect(move || {
        if let Some(Err(ApiError::MissingToken)) = reservations.read().as_ref() {
            navigator.replace(Route::Login {});
        }
    });

    let content = match reservations.read().clone() {
        None => rsx! {
            article { aria_busy: "true", "Loading reservations..." }
        },
        Some(Err(e)) => rsx! {
            article { class: "status-err", "Could not load reservations: {e}" }
        },
        Some(Ok(list)) if list.is_empty() => rsx! {
            article { "No reservations yet." }
        },
        Some(Ok(list)) => rsx! {
            table {
                thead {
                    tr {
                        th { "#" }
                        th { "Guest" }
                        th { "Room type" }
                        th { "Check-in" }
                        th { "Nights" }
                        th {}
                    }
                }
                tbody {
                    for r in list {
                        tr { key: "{r.id}",
                            td { "{r.id}" }
                            td { "{r.guest_email}" }
                            td { "{r.room_type_id}" }
                            td { "{r.check_in_date}" }
                            td { "{r.number_of_nights}" }
                            td {
                                Link { to: Route::ReservationEdit { id: r.id }, "Edit" }
                            }
                        }
                    }
                }
            }
        },
    };

    rsx! {
        Layout {
            title: "Reservations".to_string(),
            section: NavSection::Reservations,

            h2 { "Reservations" }
            p { Link { to: Route::ReservationCreate {}, "New reservation" } }
            {content}
        }
    }
}
