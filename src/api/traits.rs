//! Trait abstraction for the write endpoint to enable mocking in tests

use super::client::ApiError;
use super::payload::ApplicationPayload;
use async_trait::async_trait;

/// The single write operation the form depends on
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ApplyApi: Send + Sync {
    /// Persist a completed application. `Ok(())` means the store accepted
    /// the write; any failure carries a user-presentable reason.
    async fn submit_application(&self, payload: ApplicationPayload) -> Result<(), ApiError>;
}
