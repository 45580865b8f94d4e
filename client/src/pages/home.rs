//! Landing page after login.
//!
//! SYSTEM CONTEXT
//! ==============
//! Target of the form's post-login redirect. Users without a session are sent
//! back to `/login` once the persisted session has been restored.

#[cfg(test)]
#[path = "home_test.rs"]
mod home_test;

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::state::auth::AuthState;
use crate::util::auth::install_unauth_redirect;

/// Name shown in the greeting; empty when signed out.
fn signed_in_name(state: &AuthState) -> String {
    state.username().unwrap_or_default().to_owned()
}

#[component]
pub fn HomePage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    install_unauth_redirect(auth, use_navigate());

    // `SessionStore` is called by path: importing it would shadow `Get::get` on the signal.
    let on_sign_out = move |_| crate::state::session::SessionStore::clear(&auth);

    view! {
        <Show when=move || auth.with(AuthState::is_logged_in)>
            <div class="home-page">
                <p class="home-page__greeting">
                    "Signed in as "
                    <strong>{move || auth.with(signed_in_name)}</strong>
                </p>
                <button class="auth-form__button" on:click=on_sign_out>"Sign out"</button>
            </div>
        </Show>
    }
}
