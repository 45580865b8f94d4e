//! Shared auth UI helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Route components apply identical redirect behavior, and the form
//! controller navigates through [`RouterNavigator`] instead of calling the
//! router directly.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::config::LOGIN_PATH;
use crate::controller::{Navigator, Route};
use crate::state::auth::AuthState;

/// [`Navigator`] over a `leptos_router` navigate function.
#[derive(Clone)]
pub struct RouterNavigator<F> {
    navigate: F,
}

impl<F> RouterNavigator<F>
where
    F: Fn(&str, NavigateOptions),
{
    pub fn new(navigate: F) -> Self {
        Self { navigate }
    }
}

impl<F> Navigator for RouterNavigator<F>
where
    F: Fn(&str, NavigateOptions),
{
    fn navigate(&self, route: Route) {
        // Replace so "back" does not return to a form the guard bounces from.
        (self.navigate)(route.path(), NavigateOptions { replace: true, ..NavigateOptions::default() });
    }
}

/// Whether a protected page should bounce to `/login`.
pub fn should_redirect_unauth(state: &AuthState) -> bool {
    !state.loading && !state.is_logged_in()
}

/// Whether the login/signup inputs may be rendered. Hidden until the
/// persisted session has been read, and for users who already hold one.
pub fn should_show_form(state: &AuthState) -> bool {
    !state.loading && !state.is_logged_in()
}

/// Redirect to `/login` whenever the session has been restored and is absent.
pub fn install_unauth_redirect<F>(auth: RwSignal<AuthState>, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        if should_redirect_unauth(&auth.get()) {
            navigate(LOGIN_PATH, NavigateOptions::default());
        }
    });
}
