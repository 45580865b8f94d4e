//! Login and signup routes.
//!
//! Both routes render the same [`AuthForm`]; the route decides the mode, so
//! switching between them remounts the form with fresh fields and labels.

use leptos::prelude::*;

use crate::components::auth_form::AuthForm;
use crate::state::form::Mode;

/// `/login`
#[component]
pub fn LoginPage() -> impl IntoView {
    view! { <AuthForm mode=Mode::Login/> }
}

/// `/signup`
#[component]
pub fn SignupPage() -> impl IntoView {
    view! { <AuthForm mode=Mode::Signup/> }
}
