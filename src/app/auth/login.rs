//! Credential submission and session establishment.

use std::cell::Cell;
use std::rc::Rc;
use std::sync::LazyLock;

use regex::Regex;

use super::claims::{Claims, ClaimsError};
use super::gate::AuthState;
use super::session::{SessionError, SessionStore};
use crate::app::api::{ApiError, HotelApi, LoginRequest};

/// Shown for both a malformed email and rejected credentials, so the message
/// does not reveal which field was wrong.
pub const INVALID_CREDENTIALS_MESSAGE: &str = "Invalid email or password";

pub const CONNECTIVITY_MESSAGE: &str =
    "Unable to reach the server. Check your connection and try again.";

static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r#"(?i)^(([^<>()\[\].,;:\s@"]+(\.[^<>()\[\].,;:\s@"]+)*)|(".+"))@(([^<>()\[\].,;:\s@"]+\.)+[^<>()\[\].,;:\s@"]{2,})$"#,
    )
    .expect("email pattern is valid")
});

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_PATTERN.is_match(email)
}

#[derive(Clone, Default, PartialEq)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoginOutcome {
    LoggedIn(AuthState),
    /// A newer submission started before this one resolved; nothing was applied
    Superseded,
}

#[derive(Debug, thiserror::Error)]
pub enum LoginError {
    #[error("{}", INVALID_CREDENTIALS_MESSAGE)]
    InvalidEmail,
    #[error("{}", INVALID_CREDENTIALS_MESSAGE)]
    InvalidCredentials,
    #[error("{}", CONNECTIVITY_MESSAGE)]
    Connectivity,
    #[error("Login failed: the server returned an unreadable token")]
    InvalidToken(#[from] ClaimsError),
    #[error("Login failed: could not save the session ({0})")]
    Storage(#[from] SessionError),
}

impl From<ApiError> for LoginError {
    fn from(err: ApiError) -> Self {
        match err {
            ApiError::Network(_) => LoginError::Connectivity,
            // The server answered; whatever it said, the login was refused
            ApiError::Status { .. }
            | ApiError::Decode(_)
            | ApiError::MissingToken
            | ApiError::Url(_) => LoginError::InvalidCredentials,
        }
    }
}

/// Login flow with single-flight semantics: only the latest submission's
/// result is ever applied.
#[derive(Clone)]
pub struct LoginFlow {
    api: Rc<dyn HotelApi>,
    session: SessionStore,
    generation: Rc<Cell<u64>>,
}

impl LoginFlow {
    pub fn new(api: Rc<dyn HotelApi>, session: SessionStore) -> Self {
        Self {
            api,
            session,
            generation: Rc::new(Cell::new(0)),
        }
    }

    pub async fn submit(&self, credentials: Credentials) -> Result<LoginOutcome, LoginError> {
        let generation = self.generation.get() + 1;
        self.generation.set(generation);

        if !is_valid_email(&credentials.email) {
            tracing::debug!("Login blocked: email failed shape check");
            return Err(LoginError::InvalidEmail);
        }

        tracing::debug!("Submitting login (attempt {})", generation);
        let request = LoginRequest {
            email: credentials.email,
            password: credentials.password,
        };
        let result = self.api.login(&request).await;

        if self.generation.get() != generation {
            tracing::debug!(
                "Discarding login response {} (latest is {})",
                generation,
                self.generation.get()
            );
            return Ok(LoginOutcome::Superseded);
        }

        let response = result.map_err(|e| {
            tracing::warn!("Login failed: {}", e);
            LoginError::from(e)
        })?;

        let claims = Claims::decode(&response.token)?;
        self.session.establish(&response.token, &claims)?;

        let state = AuthState::derive(&self.session);
        tracing::info!("Logged in (manager: {})", state.is_manager);
        Ok(LoginOutcome::LoggedIn(state))
    }
}
