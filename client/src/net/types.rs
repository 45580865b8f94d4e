//! Wire DTOs for the two auth endpoints.
//!
//! DESIGN
//! ======
//! Field names follow the backend's JSON (`confirmPw`, `accessToken`) via
//! serde renames so Rust code can keep snake_case.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// Body of `POST /api/sign-up`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignUpRequest {
    pub name: String,
    pub username: String,
    pub password: String,
    #[serde(rename = "confirmPw")]
    pub confirm_password: String,
}

/// Body of `POST /api/log-in`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogInRequest {
    pub username: String,
    pub password: String,
}

/// Successful `POST /api/log-in` payload.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LogInResponse {
    pub access_token: String,
    pub username: String,
}

/// Raw HTTP result: status code plus the unparsed response body.
///
/// Status classification is left to the caller; the transport only reports
/// what came back.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HttpReply {
    pub status: u16,
    pub body: String,
}

impl HttpReply {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self { status, body: body.into() }
    }
}
