//! Room type create/edit pages (manager only).

use dioxus::prelude::*;

use crate::app::api::{use_api, ApiError, RoomTypeForm};
use crate::app::auth::use_auth;
use crate::app::components::{FormError, Layout, NavSection, NumberInput, TextInput, ToggleInput};
use crate::app::resources;
use crate::app::Route;

#[component]
pub fn RoomTypeCreate() -> Element {
    rsx! {
        RoomTypeEditor { id: None }
    }
}

#[component]
pub fn RoomTypeEdit(id: i64) -> Element {
    rsx! {
        RoomTypeEditor { id: Some(id) }
    }
}

/// Shared form; creates when `id` is `None`, otherwise prefills and updates.
#[component]
fn RoomTypeEditor(#[props(!optional)] id: Option<i64>) -> Element {
    let auth = use_auth();
    let api = use_api();
    let navigator = use_navigator();

    let mut form = use_signal(|| RoomTypeForm {
        active: true,
        ..RoomTypeForm::default()
    });
    let mut error = use_signal(|| None::<String>);
    let mut saving = use_signal(|| false);

    let load_api = api.clone();
    use_effect(use_reactive!(|id| {
        let Some(id) = id else { return };
        let api = load_api.clone();
        let session = auth.session();
        spawn(async move {
            match resources::load_room_type(api.as_ref(), &session, id).await {
                Ok(room) => form.set(room.into()),
                Err(ApiError::MissingToken) => {
                    navigator.replace(Route::Login {});
                }
                Err(e) => error.set(Some(format!("Could not load room type {id}: {e}"))),
            }
        });
    }));

    let submit = move |evt: FormEvent| {
        evt.prevent_default();
        let body = form();
        if let Err(msg) = resources::validate_room_type(&body) {
            error.set(Some(msg));
            return;
        }
        let api = api.clone();
        let session = auth.session();
        error.set(None);
        saving.set(true);
        spawn(async move {
            let result = resources::save_room_type(api.as_ref(), &session, id, &body).await;
            saving.set(false);
            match result {
                Ok(saved) => {
                    tracing::info!("Saved room type {}", saved.id);
                    navigator.push(Route::RoomTypes {});
                }
                Err(ApiError::MissingToken) => {
                    navigator.replace(Route::Login {});
                }
                Err(e) => error.set(Some(format!("Could not save room type: {e}"))),
            }
        });
    };

    let (title, heading) = match id {
        Some(id) => ("Edit Room Type".to_string(), format!("Edit room type #{id}")),
        None => ("New Room Type".to_string(), "New room type".to_string()),
    };
    let current = form();

    rsx! {
        Layout {
            title: title,
            section: if id.is_none() { NavSection::NewRoomType } else { NavSection::RoomTypes },

            h2 { "{heading}" }
            form { onsubmit: submit, novalidate: true,
                FormError { error }
                TextInput {
                    label: "Name",
                    name: "name",
                    value: current.name.clone(),
                    on_change: move |v| form.with_mut(|f| f.name = v),
                }
                TextInput {
                    label: "Description",
                    name: "description",
                    value: current.description.clone(),
                    on_change: move |v| form.with_mut(|f| f.description = v),
                }
                NumberInput {
                    label: "Nightly rate",
                    name: "rate",
                    step: "0.01",
                    value: current.rate,
                    on_change: move |v| form.with_mut(|f| f.rate = v),
                }
                ToggleInput {
                    label: "Active",
                    description: "Inactive room types cannot be booked",
                    checked: current.active,
                    on_change: move |v| form.with_mut(|f| f.active = v),
                }
                div { class: "actions",
                    button { r#type: "submit", disabled: saving(), "Save" }
                    Link { to: Route::RoomTypes {}, "Cancel" }
                }
            }
        }
    }
}
