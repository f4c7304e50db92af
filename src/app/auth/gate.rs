//! Derivation of the authorization state from session contents.

use super::session::{SessionStore, MANAGER_ROLE};

/// Derived authorization flags. Never stored on its own.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct AuthState {
    pub logged_in: bool,
    pub is_manager: bool,
}

impl AuthState {
    pub const LOGGED_OUT: AuthState = AuthState {
        logged_in: false,
        is_manager: false,
    };

    /// `logged_in` iff a token is present; `is_manager` iff logged in with the manager role.
    pub fn derive(session: &SessionStore) -> Self {
        let logged_in = session.token().is_some();
        let is_manager = logged_in && session.role().as_deref() == Some(MANAGER_ROLE);
        Self {
            logged_in,
            is_manager,
        }
    }
}

/// Result of comparing a published state with the store
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Reconciled {
    pub state: AuthState,
    /// The published state claimed a login the store no longer backs
    pub stale: bool,
}

pub fn reconcile(current: AuthState, session: &SessionStore) -> Reconciled {
    let state = AuthState::derive(session);
    Reconciled {
        state,
        stale: current.logged_in && !state.logged_in,
    }
}
