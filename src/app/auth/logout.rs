//! Session teardown.

use super::gate::AuthState;
use super::session::SessionStore;

/// Clear every session key. The API keeps no server-side session, so there is
/// nothing to call.
pub fn logout(session: &SessionStore) -> AuthState {
    session.clear();
    tracing::info!("Logged out");
    AuthState::LOGGED_OUT
}
