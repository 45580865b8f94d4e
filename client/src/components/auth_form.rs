//! Login / signup form.
//!
//! SYSTEM CONTEXT
//! ==============
//! Rendered by the `/login` and `/signup` pages with a fixed `mode`. Field
//! values live in local signals; the submit flow is delegated to
//! [`AuthFormController`] and its outcome is folded into [`FormState`].

use std::rc::Rc;

use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::{use_location, use_navigate};

use crate::config::ClientConfig;
use crate::controller::AuthFormController;
use crate::net::api::HttpAuthApi;
use crate::state::auth::AuthState;
use crate::state::form::{FormFields, FormState, Mode};
use crate::util::auth::{RouterNavigator, should_show_form};
use crate::util::notify::alert;

/// Footer prompt leading to the other mode.
fn switch_prompt(mode: Mode) -> &'static str {
    match mode {
        Mode::Login => "Not a member yet?",
        Mode::Signup => "Already have an account?",
    }
}

#[component]
pub fn AuthForm(mode: Mode) -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let config = use_context::<ClientConfig>().unwrap_or_else(ClientConfig::load);
    let location = use_location();

    let controller = AuthFormController::new(
        mode,
        HttpAuthApi::new(config),
        auth,
        RouterNavigator::new(use_navigate()),
    )
    .with_notifier(|notice| alert(notice.message()));
    let token = controller.token();
    on_cleanup(move || token.abandon());
    let controller = StoredValue::new_local(Rc::new(controller));

    let name = RwSignal::new(String::new());
    let username = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let confirm_password = RwSignal::new(String::new());
    let state = RwSignal::new(FormState::default());

    // Clear labels on mount and route change; bounce users who already hold a session.
    Effect::new(move || {
        location.pathname.track();
        auth.track();
        let mut next = state.get_untracked();
        controller.with_value(|c| c.on_mount(&mut next));
        state.set(next);
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let fields = FormFields {
            name: name.get_untracked(),
            username: username.get_untracked(),
            password: password.get_untracked(),
            confirm_password: confirm_password.get_untracked(),
        };

        #[cfg(feature = "hydrate")]
        {
            let controller = controller.get_value();
            if controller.in_flight() {
                return;
            }
            state.update(|s| s.in_flight = true);
            leptos::task::spawn_local(async move {
                let outcome = controller.submit(&fields).await;
                if !outcome.is_settled() {
                    return;
                }
                let _ = state.try_update(|s| {
                    s.in_flight = false;
                    s.apply(&outcome);
                });
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (fields, controller);
        }
    };

    let other = mode.other();

    view! {
        <div class="auth-page">
            <Show when=move || auth.with(should_show_form)>
                <form class="auth-form" on:submit=on_submit>
                    <h1 class="auth-form__title">{mode.title()}</h1>
                    <div class="auth-form__inputs">
                        {mode.is_signup().then(|| view! {
                            <input
                                class="auth-form__input"
                                type="text"
                                placeholder="Name"
                                required=true
                                prop:value=move || name.get()
                                on:input=move |ev| name.set(event_target_value(&ev))
                            />
                        })}
                        <input
                            class="auth-form__input"
                            type="text"
                            placeholder="Username"
                            required=true
                            prop:value=move || username.get()
                            on:input=move |ev| username.set(event_target_value(&ev))
                        />
                        <input
                            class="auth-form__input"
                            type="password"
                            placeholder="Password"
                            required=true
                            prop:value=move || password.get()
                            on:input=move |ev| password.set(event_target_value(&ev))
                        />
                        {mode.is_signup().then(|| view! {
                            <input
                                class="auth-form__input"
                                type="password"
                                placeholder="Confirm password"
                                required=true
                                prop:value=move || confirm_password.get()
                                on:input=move |ev| confirm_password.set(event_target_value(&ev))
                            />
                        })}
                    </div>
                    {move || state.get().error.map(|error| view! {
                        <label class="auth-form__error">{error.message()}</label>
                    })}
                    {move || state.get().notice.filter(|n| !n.outlives_form()).map(|notice| view! {
                        <p class="auth-form__notice">{notice.message()}</p>
                    })}
                    <button class="auth-form__button" type="submit" disabled=move || state.get().in_flight>
                        {mode.title()}
                    </button>
                    <div class="auth-form__switch">
                        {switch_prompt(mode)}
                        " "
                        <A href=other.path()>{other.title()}</A>
                    </div>
                </form>
            </Show>
        </div>
    }
}
