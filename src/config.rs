//! Host configuration loaded from the environment (and `.env` when present).

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

const DEFAULT_PORT: u16 = 3000;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostConfig {
    /// Listen port (`PORT`).
    pub port: u16,
    /// Base URL the auth endpoints are forwarded to (`AUTH_BACKEND_URL`).
    pub backend_url: Option<String>,
}

impl HostConfig {
    /// Load from `PORT` and `AUTH_BACKEND_URL`.
    ///
    /// # Errors
    ///
    /// Returns an error if `PORT` is set but not a valid port number.
    pub fn from_env() -> Result<Self, String> {
        let _ = dotenvy::dotenv();
        Ok(Self {
            port: parse_port(std::env::var("PORT").ok().as_deref())?,
            backend_url: normalize_backend_url(std::env::var("AUTH_BACKEND_URL").ok().as_deref()),
        })
    }
}

pub(crate) fn parse_port(raw: Option<&str>) -> Result<u16, String> {
    match raw.map(str::trim) {
        None | Some("") => Ok(DEFAULT_PORT),
        Some(value) => value.parse().map_err(|_| format!("invalid PORT: {value:?}")),
    }
}

pub(crate) fn normalize_backend_url(raw: Option<&str>) -> Option<String> {
    let trimmed = raw?.trim().trim_end_matches('/');
    if trimmed.is_empty() { None } else { Some(trimmed.to_owned()) }
}
