use super::*;

fn bob() -> Session {
    Session { access_token: "t1".to_owned(), username: "bob".to_owned() }
}

// =============================================================
// Mode
// =============================================================

#[test]
fn mode_default_is_login() {
    assert_eq!(Mode::default(), Mode::Login);
    assert!(!Mode::Login.is_signup());
    assert!(Mode::Signup.is_signup());
}

#[test]
fn mode_paths_and_other() {
    assert_eq!(Mode::Login.path(), "/login");
    assert_eq!(Mode::Signup.path(), "/signup");
    assert_eq!(Mode::Login.other(), Mode::Signup);
    assert_eq!(Mode::Signup.other(), Mode::Login);
}

// =============================================================
// FormFields
// =============================================================

#[test]
fn form_fields_build_requests() {
    let fields = FormFields {
        name: "Bob".to_owned(),
        username: "bob_user".to_owned(),
        password: "Abcdef1!".to_owned(),
        confirm_password: "Abcdef1?".to_owned(),
    };
    let signup = fields.sign_up_request();
    assert_eq!(signup.confirm_password, "Abcdef1?");
    assert_eq!(signup.name, "Bob");

    let login = fields.log_in_request();
    assert_eq!(login.username, "bob_user");
    assert_eq!(login.password, "Abcdef1!");
}

// =============================================================
// SubmitOutcome mapping
// =============================================================

#[test]
fn outcome_maps_to_single_error() {
    assert_eq!(
        SubmitOutcome::FormatInvalid(Field::Username).form_error(),
        Some(FormError::UsernameFormatInvalid)
    );
    assert_eq!(
        SubmitOutcome::FormatInvalid(Field::Password).form_error(),
        Some(FormError::PasswordFormatInvalid)
    );
    assert_eq!(SubmitOutcome::Conflict.form_error(), Some(FormError::UsernameTaken));
    assert_eq!(SubmitOutcome::Mismatch.form_error(), Some(FormError::PasswordMismatch));
    assert_eq!(SubmitOutcome::CredentialsInvalid.form_error(), Some(FormError::CredentialsInvalid));
    assert_eq!(SubmitOutcome::SignedUp.form_error(), None);
    assert_eq!(SubmitOutcome::LoggedIn(bob()).form_error(), None);
    assert_eq!(SubmitOutcome::UnknownError.form_error(), None);
}

#[test]
fn outcome_notices() {
    assert_eq!(SubmitOutcome::SignedUp.notice(), Some(Notice::SignedUp));
    assert_eq!(SubmitOutcome::UnknownError.notice(), Some(Notice::SignUpFailed));
    assert_eq!(SubmitOutcome::Conflict.notice(), None);
    assert!(Notice::SignedUp.outlives_form());
    assert!(!Notice::SignUpFailed.outlives_form());
}

// =============================================================
// FormState::apply
// =============================================================

#[test]
fn apply_replaces_previous_error() {
    let mut state = FormState::default();
    state.apply(&SubmitOutcome::FormatInvalid(Field::Username));
    assert_eq!(state.error, Some(FormError::UsernameFormatInvalid));

    state.apply(&SubmitOutcome::Conflict);
    assert_eq!(state.error, Some(FormError::UsernameTaken));
}

#[test]
fn apply_unknown_error_clears_label_and_sets_notice() {
    let mut state = FormState { error: Some(FormError::PasswordMismatch), ..FormState::default() };
    state.apply(&SubmitOutcome::UnknownError);
    assert_eq!(state.error, None);
    assert_eq!(state.notice, Some(Notice::SignUpFailed));
}

#[test]
fn apply_ignores_busy_and_abandoned() {
    let mut state = FormState { error: Some(FormError::UsernameTaken), ..FormState::default() };
    state.apply(&SubmitOutcome::Busy);
    state.apply(&SubmitOutcome::Abandoned);
    assert_eq!(state.error, Some(FormError::UsernameTaken));
}

#[test]
fn clear_hides_everything() {
    let mut state = FormState { error: Some(FormError::CredentialsInvalid), notice: Some(Notice::SignedUp), in_flight: false };
    state.clear();
    assert_eq!(state, FormState::default());
}

#[test]
fn error_messages_are_distinct() {
    let all = [
        FormError::CredentialsInvalid,
        FormError::UsernameTaken,
        FormError::PasswordMismatch,
        FormError::UsernameFormatInvalid,
        FormError::PasswordFormatInvalid,
    ];
    for (i, a) in all.iter().enumerate() {
        for b in &all[i + 1..] {
            assert_ne!(a.message(), b.message());
        }
    }
}
