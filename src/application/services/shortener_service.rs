//! Link shortening service backed by an external provider.

use crate::application::deadline::within_deadline;
use crate::domain::ShortenedLink;
use crate::domain::gateways::ShortLinkProvider;
use crate::error::ApiError;
use std::sync::Arc;
use std::time::Duration;
use tracing::debug;

/// Forwards shortening requests to the provider and normalizes its answer.
pub struct ShortenerService<P: ShortLinkProvider> {
    provider: Arc<P>,
    provider_domain: String,
    timeout: Duration,
}

impl<P: ShortLinkProvider> ShortenerService<P> {
    pub fn new(provider: Arc<P>, provider_domain: impl Into<String>, timeout: Duration) -> Self {
        Self {
            provider,
            provider_domain: provider_domain.into(),
            timeout,
        }
    }

    /// Creates a short link for `target_url`.
    ///
    /// # Errors
    ///
    /// - [`ApiError::Timeout`] if the provider does not answer in time
    /// - [`ApiError::Network`] on transport failure or an undecodable body
    /// - [`ApiError::Provider`] for a non-2xx provider status
    /// - [`ApiError::ShortenFailed`] if the provider returned no link
    pub async fn shorten(&self, target_url: &str) -> Result<ShortenedLink, ApiError> {
        let payload = within_deadline(
            self.timeout,
            self.provider.create_link(&self.provider_domain, target_url),
        )
        .await?;

        let link = ShortenedLink::from_provider_payload(&payload, target_url, &self.provider_domain)
            .ok_or(ApiError::ShortenFailed)?;

        debug!(target_url, short_url = %link.short_url, "Created short link");

        Ok(link)
    }
}
