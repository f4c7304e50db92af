//! Client-side session and authorization.
//!
//! The session store is written only by the login and logout flows in this
//! module; everything else gets a read-only view through `AuthContext`.

pub mod claims;
pub mod context;
pub mod gate;
pub mod guard;
pub mod login;
pub mod logout;
pub mod session;

pub use claims::{Claims, ClaimsError, Roles};
pub use context::{use_auth, use_auth_provider, use_auth_provider_with, AuthContext};
pub use gate::{reconcile, AuthState, Reconciled};
pub use guard::{decide, Access, Guard, GuardDecision};
pub use login::{
    is_valid_email, Credentials, LoginError, LoginFlow, LoginOutcome, CONNECTIVITY_MESSAGE,
    INVALID_CREDENTIALS_MESSAGE,
};
pub use logout::logout;
pub use session::{MemoryStorage, SessionBackend, SessionError, SessionStore};
