//! HTTP client helpers (REST).
//!
//! # Design
//! - Session auth rides on same-origin cookies, so requests carry no extra headers.
//! - Non-2xx responses surface as [`ApiError::Status`]; callers decide whether the
//!   distinction matters (bootstrap does not).

use crate::core::store::DependencyId;
use floodgate_api_models::{AddTorrentByUrlRequest, AuthVerification};
use gloo_net::http::{Request, Response};
use thiserror::Error;

/// Failures raised by [`ApiClient`] calls.
#[derive(Debug, Error)]
pub(crate) enum ApiError {
    /// Request never produced a response.
    #[error("request failed: {0}")]
    Transport(String),
    /// Backend answered with a non-success status.
    #[error("unexpected status {status}")]
    Status {
        /// HTTP status code.
        status: u16,
    },
    /// Response body did not match the expected shape.
    #[error("invalid response body: {0}")]
    Decode(String),
}

#[derive(Clone, Debug)]
pub(crate) struct ApiClient {
    base_url: String,
}

impl ApiClient {
    pub(crate) fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), path)
    }

    async fn send(request: Request) -> Result<Response, ApiError> {
        let response = request
            .send()
            .await
            .map_err(|err| ApiError::Transport(err.to_string()))?;
        if response.ok() {
            Ok(response)
        } else {
            Err(ApiError::Status {
                status: response.status(),
            })
        }
    }

    /// Check the current session and learn whether registration is required.
    pub(crate) async fn verify(&self) -> Result<AuthVerification, ApiError> {
        let response = Self::send(Request::get(&self.url("/api/auth/verify"))).await?;
        response
            .json::<AuthVerification>()
            .await
            .map_err(|err| ApiError::Decode(err.to_string()))
    }

    pub(crate) async fn logout(&self) -> Result<(), ApiError> {
        Self::send(Request::post(&self.url("/api/auth/logout"))).await?;
        Ok(())
    }

    /// Probe a dependency endpoint. Only a successful status counts; the body is not read.
    pub(crate) async fn load_dependency(&self, id: DependencyId) -> Result<(), ApiError> {
        Self::send(Request::get(&self.url(id.endpoint()))).await?;
        Ok(())
    }

    pub(crate) async fn add_urls(&self, urls: Vec<String>) -> Result<(), ApiError> {
        let request = Request::post(&self.url("/api/torrents/add-urls"))
            .json(&AddTorrentByUrlRequest { urls, start: true })
            .map_err(|err| ApiError::Transport(err.to_string()))?;
        Self::send(request).await?;
        Ok(())
    }
}
