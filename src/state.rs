//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor. It
//! holds one pooled HTTP client and the upstream auth backend, if any.

#[derive(Clone)]
pub struct AppState {
    pub http: reqwest::Client,
    pub backend_url: Option<String>,
}

impl AppState {
    #[must_use]
    pub fn new(backend_url: Option<String>) -> Self {
        Self { http: reqwest::Client::new(), backend_url }
    }
}
