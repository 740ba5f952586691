//! Gateway trait for the external link-shortening provider.

use crate::domain::gateways::UpstreamError;
use async_trait::async_trait;
use serde_json::Value;

/// Creates short links at a third-party provider.
///
/// # Implementations
///
/// - [`crate::infrastructure::http::ClcLinkProvider`] - JSON API over `reqwest`
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ShortLinkProvider: Send + Sync {
    /// Requests a short link for `target_url` under `domain`.
    ///
    /// Returns the provider's JSON body as-is; normalization is the caller's job.
    ///
    /// # Errors
    ///
    /// Returns [`UpstreamError::Status`] for a non-2xx response,
    /// [`UpstreamError::Decode`] for a body that is not JSON, and
    /// [`UpstreamError::Timeout`] / [`UpstreamError::Network`] for transport failures.
    async fn create_link(&self, domain: &str, target_url: &str) -> Result<Value, UpstreamError>;
}
