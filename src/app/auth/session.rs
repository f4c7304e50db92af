//! Tab-scoped session storage holding the bearer token, role and email.
//!
//! Reads are open to every component. Writes are restricted to the login and
//! logout flows in this module tree.

use std::cell::RefCell;
use std::collections::BTreeMap;
use std::rc::Rc;

use super::claims::Claims;

pub const TOKEN_KEY: &str = "token";
pub const ROLE_KEY: &str = "role";
pub const EMAIL_KEY: &str = "email";

/// Role value persisted for users holding manager privileges
pub const MANAGER_ROLE: &str = "manager";

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum SessionError {
    #[error("session storage is not available")]
    Unavailable,
    #[error("session storage rejected write to '{key}'")]
    WriteRejected { key: String },
}

/// Key/value storage surviving navigation within a tab.
///
/// No validation of value shape is performed here.
pub trait SessionBackend {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str) -> Result<(), SessionError>;
    fn remove(&self, key: &str);
    fn clear(&self);
}

/// In-memory backend. Clones share the same map.
#[derive(Clone, Debug, Default)]
pub struct MemoryStorage {
    entries: Rc<RefCell<BTreeMap<String, String>>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }
}

impl SessionBackend for MemoryStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), SessionError> {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) {
        self.entries.borrow_mut().remove(key);
    }

    fn clear(&self) {
        self.entries.borrow_mut().clear();
    }
}

/// `window.sessionStorage` backend
#[cfg(target_arch = "wasm32")]
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserSessionStorage;

#[cfg(target_arch = "wasm32")]
impl BrowserSessionStorage {
    fn storage() -> Option<web_sys::Storage> {
        web_sys::window()?.session_storage().ok().flatten()
    }
}

#[cfg(target_arch = "wasm32")]
impl SessionBackend for BrowserSessionStorage {
    fn get(&self, key: &str) -> Option<String> {
        Self::storage()?.get_item(key).ok().flatten()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), SessionError> {
        let storage = Self::storage().ok_or(SessionError::Unavailable)?;
        storage
            .set_item(key, value)
            .map_err(|_| SessionError::WriteRejected {
                key: key.to_string(),
            })
    }

    fn remove(&self, key: &str) {
        if let Some(storage) = Self::storage() {
            let _ = storage.remove_item(key);
        }
    }

    fn clear(&self) {
        if let Some(storage) = Self::storage() {
            let _ = storage.clear();
        }
    }
}

/// Raw stored values, kept so a failed write can be undone
struct Saved {
    token: Option<String>,
    role: Option<String>,
    email: Option<String>,
}

/// Shared handle to the session. Cloning is cheap.
#[derive(Clone)]
pub struct SessionStore {
    backend: Rc<dyn SessionBackend>,
}

impl SessionStore {
    pub fn new(backend: impl SessionBackend + 'static) -> Self {
        Self {
            backend: Rc::new(backend),
        }
    }

    /// Session backed by the current tab's storage.
    ///
    /// Outside the browser (server rendering) this is an empty in-memory store.
    pub fn for_current_tab() -> Self {
        #[cfg(target_arch = "wasm32")]
        {
            Self::new(BrowserSessionStorage)
        }
        #[cfg(not(target_arch = "wasm32"))]
        {
            Self::new(MemoryStorage::new())
        }
    }

    /// Bearer token, absent when logged out. Empty strings count as absent.
    pub fn token(&self) -> Option<String> {
        self.backend.get(TOKEN_KEY).filter(|t| !t.is_empty())
    }

    pub fn role(&self) -> Option<String> {
        self.backend.get(ROLE_KEY)
    }

    pub fn email(&self) -> Option<String> {
        self.backend.get(EMAIL_KEY)
    }

    /// Persist a freshly issued token and the fields extracted from its claims.
    ///
    /// All or nothing: if any write fails the previous contents are put back.
    pub(super) fn establish(&self, token: &str, claims: &Claims) -> Result<(), SessionError> {
        let saved = self.save();
        self.write(token, claims).map_err(|e| {
            tracing::warn!("Session write failed ({}); restoring previous session", e);
            self.restore(saved);
            e
        })
    }

    pub(super) fn clear(&self) {
        self.backend.clear();
    }

    fn save(&self) -> Saved {
        Saved {
            token: self.backend.get(TOKEN_KEY),
            role: self.backend.get(ROLE_KEY),
            email: self.backend.get(EMAIL_KEY),
        }
    }

    fn restore(&self, saved: Saved) {
        let entries = [
            (TOKEN_KEY, saved.token),
            (ROLE_KEY, saved.role),
            (EMAIL_KEY, saved.email),
        ];
        for (key, value) in entries {
            let restored = match value {
                Some(value) => self.backend.set(key, &value),
                None => {
                    self.backend.remove(key);
                    Ok(())
                }
            };
            if restored.is_err() {
                // Can't rebuild the old session; logged out is the only consistent state
                self.backend.clear();
                return;
            }
        }
    }

    fn write(&self, token: &str, claims: &Claims) -> Result<(), SessionError> {
        self.backend.set(TOKEN_KEY, token)?;
        if claims.is_manager() {
            self.backend.set(ROLE_KEY, MANAGER_ROLE)?;
        } else {
            self.backend.remove(ROLE_KEY);
        }
        match claims.sub.as_deref() {
            Some(email) => self.backend.set(EMAIL_KEY, email)?,
            None => self.backend.remove(EMAIL_KEY),
        }
        Ok(())
    }
}

impl std::fmt::Debug for SessionStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionStore")
            .field("token", &self.token().map(|_| "<redacted>"))
            .field("role", &self.role())
            .field("email", &self.email())
            .finish()
    }
}
