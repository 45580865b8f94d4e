//! Login/signup submit flow.
//!
//! SYSTEM CONTEXT
//! ==============
//! `AuthForm` owns one controller per mounted form. The controller validates,
//! calls the backend through [`AuthApi`], writes the session through
//! [`SessionStore`] and moves the user on through [`Navigator`]. The view
//! folds the returned [`SubmitOutcome`] into its `FormState`.
//!
//! CONCURRENCY
//! ===========
//! Browser single thread. One request per form may be in flight; a second
//! submit during that window resolves to [`SubmitOutcome::Busy`]. Replies
//! that land after the form was torn down resolve to
//! [`SubmitOutcome::Abandoned`] and touch nothing.

#[cfg(test)]
#[path = "controller_test.rs"]
mod controller_test;

use std::cell::Cell;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use crate::config::{HOME_PATH, LOGIN_PATH};
use crate::net::api::{ApiError, AuthApi, decode_log_in};
use crate::net::types::HttpReply;
use crate::state::form::{Field, FormFields, FormState, Mode, Notice, SubmitOutcome};
use crate::state::session::{Session, SessionStore};
use crate::util::validation::{validate_password, validate_username};

/// Destinations the form can send the user to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Route {
    Home,
    Login,
}

impl Route {
    pub fn path(self) -> &'static str {
        match self {
            Self::Home => HOME_PATH,
            Self::Login => LOGIN_PATH,
        }
    }
}

/// Route-transition collaborator.
pub trait Navigator {
    fn navigate(&self, route: Route);
}

/// Liveness flag shared between a mounted form and its pending submit.
///
/// Clones observe the same flag; [`MountToken::abandon`] is one-way.
#[derive(Clone, Debug)]
pub struct MountToken {
    live: Arc<AtomicBool>,
}

impl Default for MountToken {
    fn default() -> Self {
        Self { live: Arc::new(AtomicBool::new(true)) }
    }
}

impl MountToken {
    pub fn is_live(&self) -> bool {
        self.live.load(Ordering::Relaxed)
    }

    pub fn abandon(&self) {
        self.live.store(false, Ordering::Relaxed);
    }
}

/// What the view should do after [`AuthFormController::on_mount`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MountAction {
    /// A session already exists; the user was sent home.
    Redirected,
    /// Render the inputs with every label cleared.
    ShowForm,
}

/// Resets the in-flight flag when the submit future completes or is dropped.
struct InFlight<'a>(&'a Cell<bool>);

impl<'a> InFlight<'a> {
    fn acquire(flag: &'a Cell<bool>) -> Option<Self> {
        if flag.replace(true) {
            return None;
        }
        Some(Self(flag))
    }
}

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        self.0.set(false);
    }
}

pub struct AuthFormController<A, S, N> {
    mode: Mode,
    api: A,
    session: S,
    navigator: N,
    token: MountToken,
    in_flight: Cell<bool>,
    notify: Box<dyn Fn(Notice)>,
}

impl<A, S, N> AuthFormController<A, S, N>
where
    A: AuthApi,
    S: SessionStore,
    N: Navigator,
{
    pub fn new(mode: Mode, api: A, session: S, navigator: N) -> Self {
        Self {
            mode,
            api,
            session,
            navigator,
            token: MountToken::default(),
            in_flight: Cell::new(false),
            notify: Box::new(|_| {}),
        }
    }

    /// Sink for notices that must be shown before the form navigates away.
    #[must_use]
    pub fn with_notifier(mut self, notify: impl Fn(Notice) + 'static) -> Self {
        self.notify = Box::new(notify);
        self
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Handle used by the view to abandon pending replies on teardown.
    pub fn token(&self) -> MountToken {
        self.token.clone()
    }

    pub fn in_flight(&self) -> bool {
        self.in_flight.get()
    }

    /// Mount/route-change guard. Safe to call repeatedly.
    pub fn on_mount(&self, state: &mut FormState) -> MountAction {
        state.clear();
        if self.session.is_logged_in() {
            self.navigator.navigate(Route::Home);
            return MountAction::Redirected;
        }
        MountAction::ShowForm
    }

    /// Run one submit attempt for the current mode.
    pub async fn submit(&self, fields: &FormFields) -> SubmitOutcome {
        let Some(_guard) = InFlight::acquire(&self.in_flight) else {
            return SubmitOutcome::Busy;
        };

        let outcome = match self.mode {
            Mode::Login => classify_log_in(self.api.log_in(&fields.log_in_request()).await),
            Mode::Signup => {
                if let Some(field) = check_signup_format(fields) {
                    return SubmitOutcome::FormatInvalid(field);
                }
                classify_sign_up(self.api.sign_up(&fields.sign_up_request()).await)
            }
        };

        if !self.token.is_live() {
            leptos::logging::log!("auth form torn down before reply; dropping {outcome:?}");
            return SubmitOutcome::Abandoned;
        }

        if let Some(notice) = outcome.notice().filter(|n| n.outlives_form()) {
            (self.notify)(notice);
        }
        match &outcome {
            SubmitOutcome::LoggedIn(session) => {
                self.session.commit(session.clone());
                self.navigator.navigate(Route::Home);
            }
            SubmitOutcome::SignedUp => self.navigator.navigate(Route::Login),
            _ => {}
        }
        outcome
    }
}

/// First failing signup field, checked username before password.
pub fn check_signup_format(fields: &FormFields) -> Option<Field> {
    if !validate_username(&fields.username) {
        return Some(Field::Username);
    }
    if !validate_password(&fields.password) {
        return Some(Field::Password);
    }
    None
}

/// Map a signup reply to its outcome.
pub fn classify_sign_up(reply: Result<HttpReply, ApiError>) -> SubmitOutcome {
    match reply {
        Ok(reply) => match reply.status {
            201 => SubmitOutcome::SignedUp,
            400 => SubmitOutcome::Mismatch,
            409 => SubmitOutcome::Conflict,
            status => {
                leptos::logging::warn!("sign-up failed with status {status}");
                SubmitOutcome::UnknownError
            }
        },
        Err(e) => {
            leptos::logging::warn!("sign-up request failed: {e}");
            SubmitOutcome::UnknownError
        }
    }
}

/// Map a login reply to its outcome. Wrong credentials, server errors and
/// transport failures are deliberately indistinguishable.
pub fn classify_log_in(reply: Result<HttpReply, ApiError>) -> SubmitOutcome {
    let reply = match reply {
        Ok(reply) => reply,
        Err(e) => {
            leptos::logging::warn!("log-in request failed: {e}");
            return SubmitOutcome::CredentialsInvalid;
        }
    };
    if reply.status != 200 {
        return SubmitOutcome::CredentialsInvalid;
    }
    match decode_log_in(&reply) {
        Ok(body) => {
            let session = Session::from(body);
            if session.is_valid() { SubmitOutcome::LoggedIn(session) } else { SubmitOutcome::CredentialsInvalid }
        }
        Err(e) => {
            leptos::logging::warn!("log-in reply unreadable: {e}");
            SubmitOutcome::CredentialsInvalid
        }
    }
}
