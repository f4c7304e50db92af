//! Dioxus fullstack page components.
//!
//! Every page except login, logout and not-found sits behind the route guard.

mod login;
mod logout;
mod not_found;
mod reservation_form;
mod reservations;
mod room_type_form;
mod room_types;

pub use login::Login;
pub use logout::Logout;
pub use not_found::NotFound;
pub use reservation_form::{ReservationCreate, ReservationEdit};
pub use reservations::Reservations;
pub use room_type_form::{RoomTypeCreate, RoomTypeEdit};
pub use room_types::RoomTypes;
