//! App-wide auth state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Provided as `RwSignal<AuthState>` context by the root `App`. The form
//! writes the session through [`SessionStore`]; route guards and the home
//! page read it reactively.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;

use super::session::{Session, SessionStore};
use crate::util::storage;

/// `localStorage` key holding the persisted session JSON.
pub const SESSION_STORAGE_KEY: &str = "authform_session";

/// Authentication state tracking the committed session and restore status.
///
/// `loading` stays true from first render until the persisted session has
/// been read, so guards do not bounce a user whose session is still on disk.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AuthState {
    pub session: Option<Session>,
    pub loading: bool,
}

impl AuthState {
    /// Initial state before the browser store has been read.
    pub fn pending() -> Self {
        Self { session: None, loading: true }
    }

    /// Rehydrate from `localStorage`. Empty outside the browser.
    pub fn restore() -> Self {
        let session = storage::load_json::<Session>(SESSION_STORAGE_KEY).filter(Session::is_valid);
        Self { session, loading: false }
    }

    pub fn is_logged_in(&self) -> bool {
        self.session.as_ref().is_some_and(Session::is_valid)
    }

    pub fn username(&self) -> Option<&str> {
        self.session.as_ref().map(|s| s.username.as_str())
    }
}

impl SessionStore for RwSignal<AuthState> {
    fn get(&self) -> Option<Session> {
        self.with_untracked(|state| state.session.clone())
    }

    fn commit(&self, session: Session) {
        storage::save_json(SESSION_STORAGE_KEY, &session);
        self.update(|state| state.session = Some(session));
    }

    fn clear(&self) {
        storage::remove(SESSION_STORAGE_KEY);
        self.update(|state| state.session = None);
    }
}
