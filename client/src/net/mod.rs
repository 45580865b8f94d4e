//! Networking modules for the auth REST endpoints.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` performs the calls and `types` defines the JSON schema shared with
//! the backend.

pub mod api;
pub mod types;
