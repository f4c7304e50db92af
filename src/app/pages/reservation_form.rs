//! Reservation create/edit pages.

use dioxus::prelude::*;

use crate::app::api::{use_api, ApiError};
use crate::app::auth::use_auth;
use crate::app::components::{FormError, Layout, NavSection, NumberInput, TextInput};
use crate::app::resources::{self, ReservationDraft};
use crate::app::Route;

#[component]
pub fn ReservationCreate() -> Element {
    rsx! {
        ReservationEditor { id: None }
    }
}

#[component]
pub fn ReservationEdit(id: i64) -> Element {
    rsx! {
        ReservationEditor { id: Some(id) }
    }
}

#[component]
fn ReservationEditor(#[props(!optional)] id: Option<i64>) -> Element {
    let auth = use_auth();
    let api = use_api();
    let navigator = use_navigator();

    let mut draft = use_signal(ReservationDraft::new);
    let mut error = use_signal(|| None::<String>);
    let mut saving = use_signal(|| false);

    // Room types populate the select
    let rooms_api = api.clone();
    let rooms = use_resource(move || {
        let api = rooms_api.clone();
        let session = auth.session();
        async move { resources::load_room_types(api.as_ref(), &session).await }
    });

    use_effect(move || match rooms.read().as_ref() {
        Some(Err(ApiError::MissingToken)) => {
            navigator.replace(Route::Login {});
        }
        Some(Err(e)) => error.set(Some(format!("Could not load room types: {e}"))),
        _ => {}
    });

    let load_api = api.clone();
    use_effect(use_reactive!(|id| {
        let Some(id) = id else { return };
        let api = load_api.clone();
        let session = auth.session();
        spawn(async move {
            match resources::load_reservation(api.as_ref(), &session, id).await {
                Ok(r) => draft.set(r.into()),
                Err(ApiError::MissingToken) => {
                    navigator.replace(Route::Login {});
                }
                Err(e) => error.set(Some(format!("Could not load reservation {id}: {e}"))),
            }
        });
    }));

    let submit = move |evt: FormEvent| {
        evt.prevent_default();
        let body = match draft.read().to_form() {
            Ok(body) => body,
            Err(msg) => {
                error.set(Some(msg));
                return;
            }
        };
        let api = api.clone();
        let session = auth.session();
        error.set(None);
        saving.set(true);
        spawn(async move {
            let result = resources::save_reservation(api.as_ref(), &session, id, &body).await;
            saving.set(false);
            match result {
                Ok(saved) => {
                    tracing::info!("Saved reservation {}", saved.id);
                    navigator.push(Route::Reservations {});
                }
                Err(ApiError::MissingToken) => {
                    navigator.replace(Route::Login {});
                }
                Err(e) => error.set(Some(format!("Could not save reservation: {e}"))),
            }
        });
    };

    let heading = match id {
        Some(id) => format!("Edit reservation #{id}"),
        None => "New reservation".to_string(),
    };
    let current = draft();
    let room_options = match rooms.read().as_ref() {
        Some(Ok(list)) => list.clone(),
        _ => Vec::new(),
    };
    let selected = current.room_type_id;

    rsx! {
        Layout {
            title: "Reservation".to_string(),
            section: NavSection::Reservations,

            h2 { "{heading}" }
            form { onsubmit: submit, novalidate: true,
                FormError { error }
                TextInput {
                    label: "Guest email",
                    name: "guest_email",
                    input_type: "email",
                    value: current.guest_email.clone(),
                    on_change: move |v| draft.with_mut(|d| d.guest_email = v),
                }
                label { class: "field",
                    span { class: "field-label", "Room type" }
                    select {
                        name: "room_type_id",
                        onchange: move |evt| {
                            let value = evt.value().parse::<i64>().ok();
                            draft.with_mut(|d| d.room_type_id = value);
                        },
                        option { value: "", "Choose..." }
                        for room in room_options.iter() {
                            option {
                                key: "{room.id}",
                                value: "{room.id}",
                                selected: selected == Some(room.id),
                                disabled: !room.active,
                                "{room.name}"
                            }
                        }
                    }
                }
                TextInput {
                    label: "Check-in date",
                    name: "check_in_date",
                    input_type: "date",
                    value: current.check_in_date.clone(),
                    on_change: move |v| draft.with_mut(|d| d.check_in_date = v),
                }
                NumberInput {
                    label: "Nights",
                    name: "number_of_nights",
                    step: "1",
                    min: "1",
                    value: current.number_of_nights as f64,
                    on_change: move |v: f64| draft.with_mut(|d| d.number_of_nights = v.max(0.0) as u32),
                }
                div { class: "actions",
                    button { r#type: "submit", disabled: saving(), "Save" }
                    Link { to: Route::Reservations {}, "Cancel" }
                }
            }
        }
    }
}
