//! Form view state and the per-submit result type.
//!
//! DESIGN
//! ======
//! Every submit resolves to one [`SubmitOutcome`]. The displayed error is an
//! `Option<FormError>`, so two error labels can never be active together.

#[cfg(test)]
#[path = "form_test.rs"]
mod form_test;

use super::session::Session;
use crate::config::{LOGIN_PATH, SIGNUP_PATH};
use crate::net::types::{LogInRequest, SignUpRequest};

/// Whether a form instance logs in or signs up. Fixed by the caller.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Mode {
    #[default]
    Login,
    Signup,
}

impl Mode {
    pub fn is_signup(self) -> bool {
        matches!(self, Self::Signup)
    }

    pub fn title(self) -> &'static str {
        match self {
            Self::Login => "Log in",
            Self::Signup => "Sign up",
        }
    }

    pub fn path(self) -> &'static str {
        match self {
            Self::Login => LOGIN_PATH,
            Self::Signup => SIGNUP_PATH,
        }
    }

    /// The mode the footer link switches to.
    pub fn other(self) -> Self {
        match self {
            Self::Login => Self::Signup,
            Self::Signup => Self::Login,
        }
    }
}

/// Input field named by a format failure.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Field {
    Username,
    Password,
}

/// Raw input values, updated on every keystroke.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FormFields {
    pub name: String,
    pub username: String,
    pub password: String,
    pub confirm_password: String,
}

impl FormFields {
    pub fn sign_up_request(&self) -> SignUpRequest {
        SignUpRequest {
            name: self.name.clone(),
            username: self.username.clone(),
            password: self.password.clone(),
            confirm_password: self.confirm_password.clone(),
        }
    }

    pub fn log_in_request(&self) -> LogInRequest {
        LogInRequest { username: self.username.clone(), password: self.password.clone() }
    }
}

/// The user-facing error conditions shown under the form.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FormError {
    CredentialsInvalid,
    UsernameTaken,
    PasswordMismatch,
    UsernameFormatInvalid,
    PasswordFormatInvalid,
}

impl FormError {
    pub fn message(self) -> &'static str {
        match self {
            Self::CredentialsInvalid => "Incorrect username or password.",
            Self::UsernameTaken => "That username is already taken.",
            Self::PasswordMismatch => "Passwords do not match.",
            Self::UsernameFormatInvalid => {
                "Use a valid username: 5-20 letters, digits, underscores (_) or hyphens (-)."
            }
            Self::PasswordFormatInvalid => {
                "Use a valid password: 8-16 characters with a letter, a digit and one of !@#$%^&*."
            }
        }
    }
}

/// Transient message shown once, outside the error label.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Notice {
    SignedUp,
    SignUpFailed,
}

impl Notice {
    pub fn message(self) -> &'static str {
        match self {
            Self::SignedUp => "Sign-up complete. Please log in.",
            Self::SignUpFailed => "Something went wrong while signing up. Please try again.",
        }
    }

    /// Shown as a native alert because the form navigates away right after.
    pub fn outlives_form(self) -> bool {
        matches!(self, Self::SignedUp)
    }
}

/// Result of one submit attempt.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Signup returned 201.
    SignedUp,
    /// Login returned 200 with a usable body.
    LoggedIn(Session),
    /// Client-side format check failed; nothing was sent.
    FormatInvalid(Field),
    /// Signup returned 409.
    Conflict,
    /// Signup returned 400.
    Mismatch,
    /// Login failed for any reason.
    CredentialsInvalid,
    /// Signup failed with an unclassified status or a transport error.
    UnknownError,
    /// Dropped because another submit was still in flight.
    Busy,
    /// The form was torn down before the reply arrived.
    Abandoned,
}

impl SubmitOutcome {
    /// Error label this outcome displays, if any.
    pub fn form_error(&self) -> Option<FormError> {
        match self {
            Self::FormatInvalid(Field::Username) => Some(FormError::UsernameFormatInvalid),
            Self::FormatInvalid(Field::Password) => Some(FormError::PasswordFormatInvalid),
            Self::Conflict => Some(FormError::UsernameTaken),
            Self::Mismatch => Some(FormError::PasswordMismatch),
            Self::CredentialsInvalid => Some(FormError::CredentialsInvalid),
            Self::SignedUp | Self::LoggedIn(_) | Self::UnknownError | Self::Busy | Self::Abandoned => None,
        }
    }

    pub fn notice(&self) -> Option<Notice> {
        match self {
            Self::SignedUp => Some(Notice::SignedUp),
            Self::UnknownError => Some(Notice::SignUpFailed),
            _ => None,
        }
    }

    /// Whether the outcome came from a completed attempt and should replace
    /// the displayed state.
    pub fn is_settled(&self) -> bool {
        !matches!(self, Self::Busy | Self::Abandoned)
    }
}

/// What the form currently displays.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FormState {
    pub error: Option<FormError>,
    pub notice: Option<Notice>,
    pub in_flight: bool,
}

impl FormState {
    /// Fold a submit outcome into the displayed state.
    pub fn apply(&mut self, outcome: &SubmitOutcome) {
        if !outcome.is_settled() {
            return;
        }
        self.error = outcome.form_error();
        self.notice = outcome.notice();
    }

    /// Hide every label, as on mount or route change.
    pub fn clear(&mut self) {
        self.error = None;
        self.notice = None;
    }
}
