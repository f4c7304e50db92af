//! Auth context shared by the router guard, navigation and pages.
//!
//! Provides the reactive `AuthState` signal alongside the session handle it is
//! derived from.

use std::rc::Rc;

use dioxus::prelude::*;

use super::gate::{reconcile, AuthState};
use super::login::{Credentials, LoginError, LoginFlow, LoginOutcome};
use super::logout::logout;
use super::session::SessionStore;
use crate::app::api::HotelApi;

/// Global auth state shared via context
#[derive(Clone, Copy)]
pub struct AuthContext {
    state: Signal<AuthState>,
    /// Whether the session has been read on the client
    ready: Signal<bool>,
    session: CopyValue<SessionStore>,
}

impl AuthContext {
    pub fn state(&self) -> AuthState {
        (self.state)()
    }

    pub fn logged_in(&self) -> bool {
        self.state.read().logged_in
    }

    pub fn is_manager(&self) -> bool {
        self.state.read().is_manager
    }

    pub fn is_ready(&self) -> bool {
        (self.ready)()
    }

    pub fn session(&self) -> SessionStore {
        self.session.read().clone()
    }

    pub fn token(&self) -> Option<String> {
        self.session.read().token()
    }

    pub fn email(&self) -> Option<String> {
        self.session.read().email()
    }

    /// Re-derive from storage and publish
    pub fn refresh(&self) {
        let derived = AuthState::derive(&self.session.read());
        self.publish(derived);
    }

    /// Bring the published state back in line with storage.
    ///
    /// Returns true when the published state was a stale login.
    pub fn resync(&self) -> bool {
        let current = *self.state.peek();
        let reconciled = reconcile(current, &self.session.read());
        if reconciled.stale {
            tracing::warn!("Session storage no longer holds a token; resetting auth state");
        }
        self.publish(reconciled.state);
        reconciled.stale
    }

    pub fn login_flow(&self, api: Rc<dyn HotelApi>) -> LoginFlow {
        LoginFlow::new(api, self.session())
    }

    /// Run one submission through `flow` and publish the new state on success.
    ///
    /// Superseded attempts publish nothing.
    pub async fn submit_login(
        &self,
        flow: &LoginFlow,
        credentials: Credentials,
    ) -> Result<LoginOutcome, LoginError> {
        let outcome = flow.submit(credentials).await?;
        if let LoginOutcome::LoggedIn(_) = outcome {
            self.refresh();
        }
        Ok(outcome)
    }

    pub fn logout(&self) {
        let cleared = logout(&self.session.read());
        self.publish(cleared);
    }

    fn publish(&self, next: AuthState) {
        // Skip no-op writes so subscribers don't re-render
        if *self.state.peek() != next {
            let mut state = self.state;
            state.set(next);
        }
    }

    fn mark_ready(&self) {
        let mut ready = self.ready;
        ready.set(true);
    }
}

/// Initialize auth context provider - call once at app root
pub fn use_auth_provider() -> AuthContext {
    use_auth_provider_with(SessionStore::for_current_tab)
}

/// Same as [`use_auth_provider`], over a caller-supplied session
pub fn use_auth_provider_with(session: impl FnOnce() -> SessionStore) -> AuthContext {
    let state = use_signal(AuthState::default);
    let ready = use_signal(|| false);
    let session = use_hook(|| CopyValue::new(session()));

    let ctx = use_context_provider(|| AuthContext {
        state,
        ready,
        session,
    });

    // Client-side only: storage is read after hydration
    use_effect(move || {
        ctx.refresh();
        ctx.mark_ready();
    });

    ctx
}

/// Get auth context - use in any component
pub fn use_auth() -> AuthContext {
    use_context::<AuthContext>()
}
