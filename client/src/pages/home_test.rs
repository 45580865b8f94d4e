use super::*;
use crate::state::session::{Session, SessionStore};

#[test]
fn greeting_uses_session_username() {
    let state = AuthState {
        session: Some(Session { access_token: "t1".to_owned(), username: "bob".to_owned() }),
        loading: false,
    };
    assert_eq!(signed_in_name(&state), "bob");
}

#[test]
fn greeting_empty_when_signed_out() {
    assert_eq!(signed_in_name(&AuthState::default()), "");
}

#[test]
fn sign_out_through_signal_store_hides_greeting() {
    let auth = RwSignal::new(AuthState::default());
    SessionStore::commit(&auth, Session { access_token: "t1".to_owned(), username: "bob".to_owned() });
    assert!(auth.with_untracked(AuthState::is_logged_in));

    SessionStore::clear(&auth);
    assert!(!auth.with_untracked(AuthState::is_logged_in));
    assert_eq!(auth.with_untracked(signed_in_name), "");
}
