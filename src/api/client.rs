//! HTTP client for the application write endpoint
//!
//! One JSON POST per submission. A non-success response carries a
//! `{success: false, error: <message>}` body whose message is surfaced to
//! the user; transport failures map to a generic network error.

use super::payload::ApplicationPayload;
use super::traits::ApplyApi;
use async_trait::async_trait;
use serde::Deserialize;
use thiserror::Error;

/// Default write endpoint address
pub const DEFAULT_ENDPOINT: &str = "http://127.0.0.1:3000/api/apply";

/// Why a submission did not persist
#[derive(Debug, Error)]
pub enum ApiError {
    /// The endpoint answered with a failure body; the message is
    /// server-provided and may be empty
    #[error("server rejected application: {0}")]
    Server(String),
    /// The endpoint was unreachable or the exchange broke down
    #[error("request failed: {0}")]
    Network(#[from] reqwest::Error),
}

/// Response body of the write endpoint
#[derive(Debug, Default, Deserialize)]
struct ApplyResponse {
    #[serde(default)]
    success: bool,
    #[serde(default)]
    error: Option<String>,
    #[serde(default)]
    application: Option<serde_json::Value>,
}

/// Client for the application write endpoint
pub struct ApplyClient {
    http: reqwest::Client,
    endpoint: String,
}

impl ApplyClient {
    /// Create a client for the given endpoint address. The address is
    /// injected so environments and tests can point at their own store.
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            endpoint: endpoint.into(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl ApplyApi for ApplyClient {
    async fn submit_application(&self, payload: ApplicationPayload) -> Result<(), ApiError> {
        tracing::debug!(endpoint = %self.endpoint, "submitting application");

        let response = self
            .http
            .post(&self.endpoint)
            .json(&payload)
            .send()
            .await?;

        let status = response.status();
        if status.is_success() {
            let body: ApplyResponse = response.json().await.unwrap_or_default();
            tracing::info!(
                status = %status,
                persisted = body.success,
                has_record = body.application.is_some(),
                "application accepted"
            );
            Ok(())
        } else {
            let body: ApplyResponse = response.json().await.unwrap_or_default();
            let message = body.error.unwrap_or_default();
            tracing::warn!(status = %status, message = %message, "application rejected");
            Err(ApiError::Server(message))
        }
    }
}
