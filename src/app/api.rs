//! Client for the remote hotel API.
//!
//! In the browser requests go through `fetch` via web-sys; natively they go
//! through reqwest. Every call except login carries a bearer token.

use std::rc::Rc;

use async_trait::async_trait;
use chrono::NaiveDate;
use dioxus::prelude::{use_context, use_context_provider};
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use url::Url;

// =============================================================================
// Auth Types
// =============================================================================

#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct LoginResponse {
    pub token: String,
}

// =============================================================================
// Room Types
// =============================================================================

#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct RoomType {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub description: String,
    /// Nightly rate
    pub rate: f64,
    #[serde(default)]
    pub active: bool,
}

/// Body for creating or editing a room type
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct RoomTypeForm {
    pub name: String,
    pub description: String,
    pub rate: f64,
    pub active: bool,
}

impl From<RoomType> for RoomTypeForm {
    fn from(room: RoomType) -> Self {
        Self {
            name: room.name,
            description: room.description,
            rate: room.rate,
            active: room.active,
        }
    }
}

// =============================================================================
// Reservation Types
// =============================================================================

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Reservation {
    pub id: i64,
    pub guest_email: String,
    pub room_type_id: i64,
    pub check_in_date: NaiveDate,
    pub number_of_nights: u32,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ReservationForm {
    pub guest_email: String,
    pub room_type_id: i64,
    pub check_in_date: NaiveDate,
    pub number_of_nights: u32,
}

impl From<Reservation> for ReservationForm {
    fn from(r: Reservation) -> Self {
        Self {
            guest_email: r.guest_email,
            room_type_id: r.room_type_id,
            check_in_date: r.check_in_date,
            number_of_nights: r.number_of_nights,
        }
    }
}

// =============================================================================
// Errors
// =============================================================================

#[derive(Debug, Clone, thiserror::Error, PartialEq, Eq)]
pub enum ApiError {
    /// No response was received
    #[error("no response from server: {0}")]
    Network(String),
    /// The server answered with a non-success status
    #[error("server responded with status {status}")]
    Status { status: u16 },
    #[error("unexpected response body: {0}")]
    Decode(String),
    #[error("not logged in")]
    MissingToken,
    #[error("invalid request url: {0}")]
    Url(String),
}

// =============================================================================
// API trait
// =============================================================================

/// Remote hotel API. Futures are not `Send` so browser fetches can implement it.
#[async_trait(?Send)]
pub trait HotelApi {
    async fn login(&self, request: &LoginRequest) -> Result<LoginResponse, ApiError>;

    async fn room_types(&self, token: &str) -> Result<Vec<RoomType>, ApiError>;
    async fn room_type(&self, token: &str, id: i64) -> Result<RoomType, ApiError>;
    async fn create_room_type(&self, token: &str, form: &RoomTypeForm)
        -> Result<RoomType, ApiError>;
    async fn update_room_type(
        &self,
        token: &str,
        id: i64,
        form: &RoomTypeForm,
    ) -> Result<RoomType, ApiError>;

    async fn reservations(&self, token: &str) -> Result<Vec<Reservation>, ApiError>;
    async fn reservation(&self, token: &str, id: i64) -> Result<Reservation, ApiError>;
    async fn create_reservation(
        &self,
        token: &str,
        form: &ReservationForm,
    ) -> Result<Reservation, ApiError>;
    async fn update_reservation(
        &self,
        token: &str,
        id: i64,
        form: &ReservationForm,
    ) -> Result<Reservation, ApiError>;
}

// =============================================================================
// HTTP implementation
// =============================================================================

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
}

impl Method {
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Put => "PUT",
        }
    }
}

#[derive(Clone, Debug)]
pub struct HttpApi {
    base: Url,
    #[cfg(not(target_arch = "wasm32"))]
    client: reqwest::Client,
}

impl HttpApi {
    pub fn new(base: Url) -> Self {
        Self {
            base,
            #[cfg(not(target_arch = "wasm32"))]
            client: reqwest::Client::new(),
        }
    }

    /// Resolve an endpoint path against the base URL
    pub fn endpoint(&self, path: &str) -> Result<Url, ApiError> {
        self.base
            .join(path.trim_start_matches('/'))
            .map_err(|e| ApiError::Url(e.to_string()))
    }

    async fn send<B: Serialize + ?Sized, R: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        token: Option<&str>,
        body: Option<&B>,
    ) -> Result<R, ApiError> {
        let url = self.endpoint(path)?;
        let body = body
            .map(serde_json::to_string)
            .transpose()
            .map_err(|e| ApiError::Decode(e.to_string()))?;

        let result = self.execute(method, &url, token, body).await;
        if let Err(ref e) = result {
            tracing::warn!("{} {} failed: {}", method.as_str(), url.path(), e);
        }
        result
    }

    #[cfg(target_arch = "wasm32")]
    async fn execute<R: DeserializeOwned>(
        &self,
        method: Method,
        url: &Url,
        token: Option<&str>,
        body: Option<String>,
    ) -> Result<R, ApiError> {
        use wasm_bindgen::JsCast;
        use wasm_bindgen_futures::JsFuture;
        use web_sys::{Headers, Request, RequestInit, Response};

        let js_err = |e: wasm_bindgen::JsValue| format!("{:?}", e);

        let window = web_sys::window().ok_or_else(|| ApiError::Network("No window".into()))?;

        let headers = Headers::new().map_err(|e| ApiError::Network(js_err(e)))?;
        headers
            .set("Content-Type", "application/json")
            .map_err(|e| ApiError::Network(js_err(e)))?;
        if let Some(token) = token {
            headers
                .set("Authorization", &format!("Bearer {token}"))
                .map_err(|e| ApiError::Network(js_err(e)))?;
        }

        let opts = RequestInit::new();
        opts.set_method(method.as_str());
        opts.set_headers(&headers);
        if let Some(body) = body {
            opts.set_body(&wasm_bindgen::JsValue::from_str(&body));
        }

        let request = Request::new_with_str_and_init(url.as_str(), &opts)
            .map_err(|e| ApiError::Network(js_err(e)))?;

        // fetch only rejects when no response arrived
        let resp_value = JsFuture::from(window.fetch_with_request(&request))
            .await
            .map_err(|e| ApiError::Network(js_err(e)))?;

        let resp: Response = resp_value
            .dyn_into()
            .map_err(|_| ApiError::Decode("Not a Response".into()))?;

        if !resp.ok() {
            return Err(ApiError::Status {
                status: resp.status(),
            });
        }

        let json = JsFuture::from(resp.json().map_err(|e| ApiError::Decode(js_err(e)))?)
            .await
            .map_err(|e| ApiError::Decode(js_err(e)))?;

        serde_wasm_bindgen::from_value(json).map_err(|e| ApiError::Decode(e.to_string()))
    }

    #[cfg(not(target_arch = "wasm32"))]
    async fn execute<R: DeserializeOwned>(
        &self,
        method: Method,
        url: &Url,
        token: Option<&str>,
        body: Option<String>,
    ) -> Result<R, ApiError> {
        let mut request = match method {
            Method::Get => self.client.get(url.clone()),
            Method::Post => self.client.post(url.clone()),
            Method::Put => self.client.put(url.clone()),
        }
        .header(reqwest::header::CONTENT_TYPE, "application/json");

        if let Some(token) = token {
            request = request.bearer_auth(token);
        }
        if let Some(body) = body {
            request = request.body(body);
        }

        let resp = request
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        let status = resp.status();
        if !status.is_success() {
            return Err(ApiError::Status {
                status: status.as_u16(),
            });
        }

        resp.json::<R>()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))
    }
}

#[async_trait(?Send)]
impl HotelApi for HttpApi {
    async fn login(&self, request: &LoginRequest) -> Result<LoginResponse, ApiError> {
        self.send(Method::Post, "/login", None, Some(request)).await
    }

    async fn room_types(&self, token: &str) -> Result<Vec<RoomType>, ApiError> {
        self.send::<(), _>(Method::Get, "/room-types", Some(token), None)
            .await
    }

    async fn room_type(&self, token: &str, id: i64) -> Result<RoomType, ApiError> {
        self.send::<(), _>(Method::Get, &format!("/room-types/{id}"), Some(token), None)
            .await
    }

    async fn create_room_type(
        &self,
        token: &str,
        form: &RoomTypeForm,
    ) -> Result<RoomType, ApiError> {
        self.send(Method::Post, "/room-types", Some(token), Some(form))
            .await
    }

    async fn update_room_type(
        &self,
        token: &str,
        id: i64,
        form: &RoomTypeForm,
    ) -> Result<RoomType, ApiError> {
        self.send(
            Method::Put,
            &format!("/room-types/{id}"),
            Some(token),
            Some(form),
        )
        .await
    }

    async fn reservations(&self, token: &str) -> Result<Vec<Reservation>, ApiError> {
        self.send::<(), _>(Method::Get, "/reservations", Some(token), None)
            .await
    }

    async fn reservation(&self, token: &str, id: i64) -> Result<Reservation, ApiError> {
        self.send::<(), _>(
            Method::Get,
            &format!("/reservations/{id}"),
            Some(token),
            None,
        )
        .await
    }

    async fn create_reservation(
        &self,
        token: &str,
        form: &ReservationForm,
    ) -> Result<Reservation, ApiError> {
        self.send(Method::Post, "/reservations", Some(token), Some(form))
            .await
    }

    async fn update_reservation(
        &self,
        token: &str,
        id: i64,
        form: &ReservationForm,
    ) -> Result<Reservation, ApiError> {
        self.send(
            Method::Put,
            &format!("/reservations/{id}"),
            Some(token),
            Some(form),
        )
        .await
    }
}

// =============================================================================
// Context
// =============================================================================

/// Install the HTTP client for the configured API base - call once at app root
pub fn use_api_provider() -> Rc<dyn HotelApi> {
    use_api_provider_with(|| {
        let base = crate::config::api_base();
        tracing::info!("Hotel API at {}", base);
        Rc::new(HttpApi::new(base)) as Rc<dyn HotelApi>
    })
}

/// Install a caller-supplied API client
pub fn use_api_provider_with(api: impl FnOnce() -> Rc<dyn HotelApi>) -> Rc<dyn HotelApi> {
    use_context_provider(api)
}

/// Get the API client - use in any component
pub fn use_api() -> Rc<dyn HotelApi> {
    use_context::<Rc<dyn HotelApi>>()
}
