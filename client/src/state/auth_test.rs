use super::*;

fn bob() -> Session {
    Session { access_token: "t1".to_owned(), username: "bob".to_owned() }
}

// =============================================================
// AuthState
// =============================================================

#[test]
fn auth_state_default_has_no_session() {
    let state = AuthState::default();
    assert!(state.session.is_none());
    assert!(!state.loading);
    assert!(!state.is_logged_in());
    assert_eq!(state.username(), None);
}

#[test]
fn auth_state_reports_username() {
    let state = AuthState { session: Some(bob()), loading: false };
    assert!(state.is_logged_in());
    assert_eq!(state.username(), Some("bob"));
}

#[test]
fn pending_state_is_loading() {
    let state = AuthState::pending();
    assert!(state.loading);
    assert!(!state.is_logged_in());
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn restore_is_empty_outside_browser() {
    assert_eq!(AuthState::restore(), AuthState::default());
}

// =============================================================
// SessionStore for RwSignal<AuthState>
// =============================================================

#[test]
fn signal_store_commit_and_clear() {
    let auth = RwSignal::new(AuthState::default());
    assert!(!auth.is_logged_in());

    auth.commit(bob());
    assert_eq!(SessionStore::get(&auth), Some(bob()));
    assert!(auth.get_untracked().is_logged_in());

    auth.clear();
    assert_eq!(SessionStore::get(&auth), None);
}
