//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! `session` defines the credential record and store seam, `auth` is the
//! app-wide reactive store, and `form` holds per-form view state.

pub mod auth;
pub mod form;
pub mod session;
