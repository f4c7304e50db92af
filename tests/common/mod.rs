//! Scripted stand-in for the remote hotel API.

#![allow(dead_code)]

use std::cell::{Cell, RefCell};
use std::collections::VecDeque;
use std::rc::Rc;

use async_trait::async_trait;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use futures::channel::oneshot;

use hotel_admin::app::api::{
    ApiError, HotelApi, LoginRequest, LoginResponse, Reservation, ReservationForm, RoomType,
    RoomTypeForm,
};

/// Build a three-segment token whose claims carry `roles` and `sub`
pub fn token_for(sub: &str, roles: &str) -> String {
    let header = URL_SAFE_NO_PAD.encode(r#"{"alg":"HS256","typ":"JWT"}"#);
    let claims = URL_SAFE_NO_PAD.encode(
        serde_json::json!({ "sub": sub, "roles": roles, "iat": 1_700_000_000 }).to_string(),
    );
    format!("{header}.{claims}.c2lnbmF0dXJl")
}

pub enum LoginReply {
    Now(Result<LoginResponse, ApiError>),
    /// Resolves when the test sends on the paired channel
    Later(oneshot::Receiver<Result<LoginResponse, ApiError>>),
}

#[derive(Clone, Default)]
pub struct StubApi {
    login_replies: Rc<RefCell<VecDeque<LoginReply>>>,
    pub room_types: Rc<RefCell<Vec<RoomType>>>,
    /// When set, the room type list fails with this error
    pub room_types_error: Rc<RefCell<Option<ApiError>>>,
    pub calls: Rc<Cell<usize>>,
    pub last_token: Rc<RefCell<Option<String>>>,
    pub last_login: Rc<RefCell<Option<LoginRequest>>>,
}

impl StubApi {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reply_ok(&self, token: String) {
        self.login_replies
            .borrow_mut()
            .push_back(LoginReply::Now(Ok(LoginResponse { token })));
    }

    pub fn reply_err(&self, err: ApiError) {
        self.login_replies
            .borrow_mut()
            .push_back(LoginReply::Now(Err(err)));
    }

    /// Queue a reply the test resolves by hand
    pub fn reply_later(&self) -> oneshot::Sender<Result<LoginResponse, ApiError>> {
        let (tx, rx) = oneshot::channel();
        self.login_replies
            .borrow_mut()
            .push_back(LoginReply::Later(rx));
        tx
    }

    pub fn as_api(&self) -> Rc<dyn HotelApi> {
        Rc::new(self.clone())
    }

    fn record(&self, token: &str) {
        self.calls.set(self.calls.get() + 1);
        *self.last_token.borrow_mut() = Some(token.to_string());
    }
}

#[async_trait(?Send)]
impl HotelApi for StubApi {
    async fn login(&self, request: &LoginRequest) -> Result<LoginResponse, ApiError> {
        self.calls.set(self.calls.get() + 1);
        *self.last_login.borrow_mut() = Some(request.clone());
        let reply = self
            .login_replies
            .borrow_mut()
            .pop_front()
            .expect("unexpected login call");
        match reply {
            LoginReply::Now(result) => result,
            LoginReply::Later(rx) => rx
                .await
                .unwrap_or_else(|_| Err(ApiError::Network("dropped".into()))),
        }
    }

    async fn room_types(&self, token: &str) -> Result<Vec<RoomType>, ApiError> {
        self.record(token);
        if let Some(err) = self.room_types_error.borrow().clone() {
            return Err(err);
        }
        Ok(self.room_types.borrow().clone())
    }

    async fn room_type(&self, token: &str, id: i64) -> Result<RoomType, ApiError> {
        self.record(token);
        self.room_types
            .borrow()
            .iter()
            .find(|r| r.id == id)
            .cloned()
            .ok_or(ApiError::Status { status: 404 })
    }

    async fn create_room_type(
        &self,
        token: &str,
        form: &RoomTypeForm,
    ) -> Result<RoomType, ApiError> {
        self.record(token);
        let mut rooms = self.room_types.borrow_mut();
        let room = RoomType {
            id: rooms.len() as i64 + 1,
            name: form.name.clone(),
            description: form.description.clone(),
            rate: form.rate,
            active: form.active,
        };
        rooms.push(room.clone());
        Ok(room)
    }

    async fn update_room_type(
        &self,
        token: &str,
        id: i64,
        form: &RoomTypeForm,
    ) -> Result<RoomType, ApiError> {
        self.record(token);
        let mut rooms = self.room_types.borrow_mut();
        let room = rooms
            .iter_mut()
            .find(|r| r.id == id)
            .ok_or(ApiError::Status { status: 404 })?;
        room.name = form.name.clone();
        room.description = form.description.clone();
        room.rate = form.rate;
        room.active = form.active;
        Ok(room.clone())
    }

    async fn reservations(&self, token: &str) -> Result<Vec<Reservation>, ApiError> {
        self.record(token);
        Ok(Vec::new())
    }

    async fn reservation(&self, token: &str, _id: i64) -> Result<Reservation, ApiError> {
        self.record(token);
        Err(ApiError::Status { status: 404 })
    }

    async fn create_reservation(
        &self,
        token: &str,
        form: &ReservationForm,
    ) -> Result<Reservation, ApiError> {
        self.record(token);
        Ok(Reservation {
            id: 1,
            guest_email: form.guest_email.clone(),
            room_type_id: form.room_type_id,
            check_in_date: form.check_in_date,
            number_of_nights: form.number_of_nights,
        })
    }

    async fn update_reservation(
        &self,
        token: &str,
        id: i64,
        form: &ReservationForm,
    ) -> Result<Reservation, ApiError> {
        self.record(token);
        Ok(Reservation {
            id,
            guest_email: form.guest_email.clone(),
            room_type_id: form.room_type_id,
            check_in_date: form.check_in_date,
            number_of_nights: form.number_of_nights,
        })
    }
}
