//! Shared application state injected into handlers and middleware.

use crate::api::middleware::cors::CorsPolicy;
use crate::application::services::{ResolverService, ShortenerService};
use crate::config::Config;
use crate::domain::DomainWhitelist;
use crate::infrastructure::http::{ClcLinkProvider, HttpRedirectFollower};
use anyhow::{Context, Result};
use std::sync::Arc;

/// Link resolution service wired to the real redirect client.
pub type Resolver = ResolverService<HttpRedirectFollower>;

/// Shortening service wired to the real provider client.
pub type Shortener = ShortenerService<ClcLinkProvider>;

/// Application state shared across all request handlers.
///
/// Everything here is read-only after startup, so clones are cheap and
/// requests never coordinate.
#[derive(Clone)]
pub struct AppState {
    pub resolver: Arc<Resolver>,
    pub shortener: Arc<Shortener>,
    pub cors: Arc<CorsPolicy>,
}

impl AppState {
    pub fn new(resolver: Arc<Resolver>, shortener: Arc<Shortener>, cors: Arc<CorsPolicy>) -> Self {
        Self {
            resolver,
            shortener,
            cors,
        }
    }

    /// Builds the state with default HTTP clients from `config`.
    ///
    /// # Errors
    ///
    /// Returns an error if an HTTP client cannot be constructed.
    pub fn from_config(config: &Config) -> Result<Self> {
        let follower =
            HttpRedirectFollower::new().context("Failed to build redirect client")?;
        let provider = ClcLinkProvider::new(&config.shortener_api_url)
            .context("Failed to build shortener client")?;

        Ok(Self::with_clients(config, follower, provider))
    }

    /// Builds the state around prebuilt HTTP clients.
    pub fn with_clients(
        config: &Config,
        follower: HttpRedirectFollower,
        provider: ClcLinkProvider,
    ) -> Self {
        let resolver = ResolverService::new(
            Arc::new(follower),
            DomainWhitelist::short_links(config.whitelist_match),
            config.upstream_timeout(),
        );
        let shortener = ShortenerService::new(
            Arc::new(provider),
            config.shortener_domain.clone(),
            config.upstream_timeout(),
        );
        let cors = CorsPolicy::new(config.trusted_origin_suffix.clone());

        Self::new(Arc::new(resolver), Arc::new(shortener), Arc::new(cors))
    }
}
