//! REST calls for signup and login.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): the transport reports [`ApiError::Unavailable`] since
//! these endpoints are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! The transport never interprets status codes. Any reply that arrived is
//! `Ok(HttpReply)`; only encode/transport/decode failures are errors, and the
//! form controller folds those into user-facing outcomes.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use serde::Serialize;

use super::types::{HttpReply, LogInRequest, LogInResponse, SignUpRequest};
use crate::config::{ClientConfig, LOG_IN_ENDPOINT, SIGN_UP_ENDPOINT};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    #[error("request encoding failed: {0}")]
    Encode(String),
    #[error("transport failed: {0}")]
    Transport(String),
    #[error("response decoding failed: {0}")]
    Decode(String),
    #[error("not available on server")]
    Unavailable,
}

/// Backend seam used by the form controller.
///
/// `?Send` because browser futures hold `JsValue`s and run on the main thread.
#[async_trait::async_trait(?Send)]
pub trait AuthApi {
    /// `POST /api/sign-up`.
    async fn sign_up(&self, request: &SignUpRequest) -> Result<HttpReply, ApiError>;

    /// `POST /api/log-in`.
    async fn log_in(&self, request: &LogInRequest) -> Result<HttpReply, ApiError>;
}

/// Parse the body of a successful login reply.
///
/// # Errors
///
/// Returns [`ApiError::Decode`] when the body is not the expected JSON shape.
pub fn decode_log_in(reply: &HttpReply) -> Result<LogInResponse, ApiError> {
    serde_json::from_str(&reply.body).map_err(|e| ApiError::Decode(e.to_string()))
}

/// [`AuthApi`] over `fetch`.
#[derive(Clone, Debug, Default)]
pub struct HttpAuthApi {
    config: ClientConfig,
}

impl HttpAuthApi {
    pub fn new(config: ClientConfig) -> Self {
        Self { config }
    }

    async fn post_json<T: Serialize>(&self, path: &str, body: &T) -> Result<HttpReply, ApiError> {
        let url = self.config.endpoint(path);
        #[cfg(feature = "hydrate")]
        {
            let resp = gloo_net::http::Request::post(&url)
                .json(body)
                .map_err(|e| ApiError::Encode(e.to_string()))?
                .send()
                .await
                .map_err(|e| ApiError::Transport(e.to_string()))?;
            let status = resp.status();
            let text = resp.text().await.map_err(|e| ApiError::Transport(e.to_string()))?;
            Ok(HttpReply::new(status, text))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (url, body);
            Err(ApiError::Unavailable)
        }
    }
}

#[async_trait::async_trait(?Send)]
impl AuthApi for HttpAuthApi {
    async fn sign_up(&self, request: &SignUpRequest) -> Result<HttpReply, ApiError> {
        self.post_json(SIGN_UP_ENDPOINT, request).await
    }

    async fn log_in(&self, request: &LogInRequest) -> Result<HttpReply, ApiError> {
        self.post_json(LOG_IN_ENDPOINT, request).await
    }
}
