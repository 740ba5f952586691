//! Gateway trait for redirect resolution.

use crate::domain::gateways::UpstreamError;
use async_trait::async_trait;
use url::Url;

/// Follows the redirect chain of a URL and reports where it ends.
///
/// # Implementations
///
/// - [`crate::infrastructure::http::HttpRedirectFollower`] - `HEAD` requests via `reqwest`
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RedirectFollower: Send + Sync {
    /// Issues one request to `url` with redirects enabled and returns the final URL.
    ///
    /// A non-success status on the final hop is not an error; only transport
    /// failures are.
    ///
    /// # Errors
    ///
    /// Returns [`UpstreamError::Timeout`] or [`UpstreamError::Network`] when the
    /// request cannot complete.
    async fn follow(&self, url: &Url) -> Result<String, UpstreamError>;
}
