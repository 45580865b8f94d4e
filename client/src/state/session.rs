//! Session record and the store seam the form writes to.
//!
//! DESIGN
//! ======
//! The store is owned outside the form and injected, so the form never
//! reaches for global state and tests can observe commits directly.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use std::cell::RefCell;
use std::rc::Rc;

use serde::{Deserialize, Serialize};

use crate::net::types::LogInResponse;

/// An authenticated user's access token and username.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub access_token: String,
    pub username: String,
}

impl Session {
    /// A session without a token cannot authorize anything.
    pub fn is_valid(&self) -> bool {
        !self.access_token.is_empty()
    }
}

impl From<LogInResponse> for Session {
    fn from(body: LogInResponse) -> Self {
        Self { access_token: body.access_token, username: body.username }
    }
}

/// Credential store collaborator.
pub trait SessionStore {
    /// Current session, if any.
    fn get(&self) -> Option<Session>;

    /// Replace the current session.
    fn commit(&self, session: Session);

    /// Drop the current session.
    fn clear(&self);

    fn is_logged_in(&self) -> bool {
        self.get().as_ref().is_some_and(Session::is_valid)
    }
}

/// Single-threaded in-memory store. Clones share the same slot.
#[derive(Clone, Debug, Default)]
pub struct MemorySessionStore {
    slot: Rc<RefCell<Option<Session>>>,
}

impl MemorySessionStore {
    pub fn with_session(session: Session) -> Self {
        Self { slot: Rc::new(RefCell::new(Some(session))) }
    }
}

impl SessionStore for MemorySessionStore {
    fn get(&self) -> Option<Session> {
        self.slot.borrow().clone()
    }

    fn commit(&self, session: Session) {
        *self.slot.borrow_mut() = Some(session);
    }

    fn clear(&self) {
        self.slot.borrow_mut().take();
    }
}
