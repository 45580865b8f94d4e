//! Pass-through of the two auth endpoints to the configured backend.
//!
//! The host never inspects credentials: the request body goes upstream
//! verbatim and the upstream status, `Content-Type` and body come back
//! verbatim. Only a missing or unreachable backend is answered locally.

#[cfg(test)]
#[path = "proxy_test.rs"]
mod proxy_test;

use axum::body::Bytes;
use axum::extract::State;
use axum::http::StatusCode;
use axum::http::header::CONTENT_TYPE;
use axum::response::{IntoResponse, Json, Response};

use crate::state::AppState;

pub const SIGN_UP_PATH: &str = "/api/sign-up";
pub const LOG_IN_PATH: &str = "/api/log-in";

#[derive(Debug, thiserror::Error)]
pub enum ProxyError {
    #[error("auth backend not configured")]
    NotConfigured,
    #[error("auth backend unreachable: {0}")]
    Upstream(#[from] reqwest::Error),
}

impl IntoResponse for ProxyError {
    fn into_response(self) -> Response {
        (StatusCode::BAD_GATEWAY, Json(serde_json::json!({ "error": self.to_string() }))).into_response()
    }
}

/// `POST /api/sign-up`
pub async fn sign_up(State(state): State<AppState>, body: Bytes) -> Response {
    respond(SIGN_UP_PATH, forward(&state, SIGN_UP_PATH, body).await)
}

/// `POST /api/log-in`
pub async fn log_in(State(state): State<AppState>, body: Bytes) -> Response {
    respond(LOG_IN_PATH, forward(&state, LOG_IN_PATH, body).await)
}

fn respond(path: &str, result: Result<Response, ProxyError>) -> Response {
    match result {
        Ok(response) => {
            tracing::info!(path, status = response.status().as_u16(), "auth request proxied");
            response
        }
        Err(e) => {
            tracing::warn!(path, error = %e, "auth proxy failed");
            e.into_response()
        }
    }
}

async fn forward(state: &AppState, path: &str, body: Bytes) -> Result<Response, ProxyError> {
    let base = state.backend_url.as_deref().ok_or(ProxyError::NotConfigured)?;
    let upstream = state
        .http
        .post(format!("{base}{path}"))
        .header(CONTENT_TYPE, "application/json")
        .body(body)
        .send()
        .await?;

    let status = upstream.status();
    let content_type = upstream.headers().get(CONTENT_TYPE).cloned();
    let bytes = upstream.bytes().await?;

    let mut response = (status, bytes).into_response();
    match content_type {
        Some(value) => {
            response.headers_mut().insert(CONTENT_TYPE, value);
        }
        None => {
            response.headers_mut().remove(CONTENT_TYPE);
        }
    }
    Ok(response)
}
