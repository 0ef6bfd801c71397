//! Client module for the application write endpoint

mod client;
mod payload;
mod traits;

pub use client::{ApiError, ApplyClient, DEFAULT_ENDPOINT};
pub use payload::ApplicationPayload;
pub use traits::ApplyApi;

#[cfg(test)]
pub use traits::MockApplyApi;
