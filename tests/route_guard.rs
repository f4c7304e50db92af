//! Route table and access rule tests.

mod common;

use common::{token_for, StubApi};
use hotel_admin::app::api::{ApiError, RoomType};
use hotel_admin::app::auth::{
    decide, logout, Access, AuthState, GuardDecision, MemoryStorage, SessionBackend, SessionStore,
};
use hotel_admin::app::resources::{load_reservations, load_room_types};
use hotel_admin::app::Route;

const MANAGER: AuthState = AuthState {
    logged_in: true,
    is_manager: true,
};
const EMPLOYEE: AuthState = AuthState {
    logged_in: true,
    is_manager: false,
};

fn route(path: &str) -> Route {
    path.parse::<Route>()
        .unwrap_or_else(|_| panic!("{path} should parse"))
}

#[test]
fn known_paths_resolve() {
    assert_eq!(route("/"), Route::Login {});
    assert_eq!(route("/reservations"), Route::Reservations {});
    assert_eq!(route("/reservations/create"), Route::ReservationCreate {});
    assert_eq!(route("/reservations/edit/12"), Route::ReservationEdit { id: 12 });
    assert_eq!(route("/room-types"), Route::RoomTypes {});
    assert_eq!(route("/room-types/create"), Route::RoomTypeCreate {});
    assert_eq!(route("/room-types/edit/3"), Route::RoomTypeEdit { id: 3 });
    assert_eq!(route("/logout"), Route::Logout {});
}

#[test]
fn unknown_paths_fall_through_to_not_found() {
    assert!(matches!(route("/nope"), Route::NotFound { .. }));
    assert!(matches!(route("/room-types/edit/abc"), Route::NotFound { .. }));
}

#[test]
fn routes_render_back_to_their_paths() {
    assert_eq!(Route::RoomTypeEdit { id: 7 }.to_string(), "/room-types/edit/7");
    assert_eq!(Route::Reservations {}.to_string(), "/reservations");
}

#[test]
fn protected_routes_redirect_when_logged_out() {
    for path in ["/reservations", "/reservations/create", "/room-types", "/room-types/create"] {
        let decision = decide(route(path).access(), AuthState::LOGGED_OUT);
        assert_eq!(decision, GuardDecision::RedirectToLogin, "{path}");
    }
}

#[test]
fn public_routes_always_render() {
    for path in ["/", "/logout", "/nope"] {
        assert_eq!(route(path).access(), Access::Public, "{path}");
        assert_eq!(decide(route(path).access(), AuthState::LOGGED_OUT), GuardDecision::Render);
    }
}

#[test]
fn room_type_editing_is_manager_only() {
    let create = route("/room-types/create").access();
    assert_eq!(decide(create, EMPLOYEE), GuardDecision::Forbidden);
    assert_eq!(decide(create, MANAGER), GuardDecision::Render);

    // Listing stays open to any logged-in user
    assert_eq!(decide(route("/room-types").access(), EMPLOYEE), GuardDecision::Render);
}

#[test]
fn loaders_make_no_request_without_a_token() {
    let stub = StubApi::new();
    let session = SessionStore::new(MemoryStorage::new());

    let rooms = tokio_test::block_on(load_room_types(&stub, &session));
    let bookings = tokio_test::block_on(load_reservations(&stub, &session));

    assert_eq!(rooms.unwrap_err(), ApiError::MissingToken);
    assert_eq!(bookings.unwrap_err(), ApiError::MissingToken);
    assert_eq!(stub.calls.get(), 0);
}

#[test]
fn loaders_send_the_session_token() {
    let stub = StubApi::new();
    stub.room_types.borrow_mut().push(RoomType {
        id: 1,
        name: "Suite".into(),
        description: String::new(),
        rate: 250.0,
        active: true,
    });
    let storage = MemoryStorage::new();
    let token = token_for("clerk@hotel.test", "employee");
    storage.set("token", &token).unwrap();
    let session = SessionStore::new(storage);

    let rooms = tokio_test::block_on(load_room_types(&stub, &session)).unwrap();

    assert_eq!(rooms.len(), 1);
    assert_eq!(stub.last_token.borrow().as_deref(), Some(token.as_str()));
}

#[test]
fn logout_from_another_view_stops_later_requests() {
    let stub = StubApi::new();
    let storage = MemoryStorage::new();
    storage.set("token", &token_for("clerk@hotel.test", "employee")).unwrap();
    let session = SessionStore::new(storage);

    tokio_test::block_on(load_room_types(&stub, &session)).unwrap();
    logout(&session);
    let after = tokio_test::block_on(load_room_types(&stub, &session));

    assert_eq!(after.unwrap_err(), ApiError::MissingToken);
    assert_eq!(stub.calls.get(), 1);
}
