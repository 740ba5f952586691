//! Short-link resolution service.

use crate::application::deadline::within_deadline;
use crate::domain::gateways::{RedirectFollower, UpstreamError};
use crate::domain::{DomainWhitelist, ResolutionResult};
use crate::error::ErrorCode;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, warn};
use url::Url;

/// Resolves short links to their final URL and extracts product identifiers.
///
/// Each call performs at most one outbound request, bounded by the configured
/// timeout. Inputs rejected by validation or the whitelist never reach the
/// network.
pub struct ResolverService<F: RedirectFollower> {
    follower: Arc<F>,
    whitelist: DomainWhitelist,
    timeout: Duration,
}

impl<F: RedirectFollower> ResolverService<F> {
    pub fn new(follower: Arc<F>, whitelist: DomainWhitelist, timeout: Duration) -> Self {
        Self {
            follower,
            whitelist,
            timeout,
        }
    }

    /// Resolves `short_url`.
    ///
    /// # Flow
    ///
    /// 1. Parse as an absolute URL with a host (`invalid_url` otherwise)
    /// 2. Check the host against the whitelist (`not_shopee_short_url` otherwise)
    /// 3. Follow redirects under the deadline (`timeout` / `network_error` on failure)
    /// 4. Extract identifiers from the final URL; no match is not an error
    pub async fn resolve(&self, short_url: &str) -> ResolutionResult {
        let Ok(parsed) = Url::parse(short_url) else {
            return ResolutionResult::failed(short_url, ErrorCode::InvalidUrl);
        };

        let Some(host) = parsed.host_str().filter(|host| !host.is_empty()) else {
            return ResolutionResult::failed(short_url, ErrorCode::InvalidUrl);
        };

        if !self.whitelist.matches(host) {
            debug!(host, "Rejected host outside whitelist");
            return ResolutionResult::failed(short_url, ErrorCode::NotShopeeShortUrl);
        }

        match within_deadline(self.timeout, self.follower.follow(&parsed)).await {
            Ok(final_url) => {
                let result = ResolutionResult::resolved(short_url, final_url);
                debug!(
                    short_url,
                    final_url = result.final_url(),
                    product_id = result.product_id(),
                    "Resolved short link"
                );
                result
            }
            Err(UpstreamError::Timeout) => {
                warn!(short_url, timeout_ms = self.timeout.as_millis() as u64, "Resolution timed out");
                ResolutionResult::failed(short_url, ErrorCode::Timeout)
            }
            Err(e) => {
                warn!(short_url, "Resolution failed: {}", e);
                ResolutionResult::failed(short_url, ErrorCode::NetworkError)
            }
        }
    }
}
