//! Redirect resolution over `HEAD` requests.

use crate::domain::gateways::{RedirectFollower, UpstreamError};
use async_trait::async_trait;
use reqwest::header::{self, HeaderMap, HeaderValue};
use reqwest::redirect::Policy;
use reqwest::{Client, ClientBuilder};
use url::Url;

/// Desktop browser user agent; some redirect servers refuse unknown clients.
pub const BROWSER_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/118.0.0.0 Safari/537.36";

pub const ACCEPT_LANGUAGE: &str = "vi-VN,vi;q=0.9,en;q=0.8";

/// Maximum number of redirect hops followed before giving up, as browsers do.
pub const MAX_REDIRECTS: usize = 20;

/// Client builder preconfigured with browser headers and the redirect policy.
///
/// Exposed so callers can add transport settings (proxies, DNS overrides)
/// before building.
pub fn browser_client_builder() -> ClientBuilder {
    let mut headers = HeaderMap::new();
    headers.insert(
        header::ACCEPT_LANGUAGE,
        HeaderValue::from_static(ACCEPT_LANGUAGE),
    );

    Client::builder()
        .user_agent(BROWSER_USER_AGENT)
        .default_headers(headers)
        .redirect(Policy::limited(MAX_REDIRECTS))
}

/// [`RedirectFollower`] that issues a single `HEAD` request and follows redirects.
///
/// Using `HEAD` avoids downloading the landing page body.
#[derive(Debug, Clone)]
pub struct HttpRedirectFollower {
    client: Client,
}

impl HttpRedirectFollower {
    /// Creates a follower with the default browser client.
    ///
    /// # Errors
    ///
    /// Returns an error if the TLS backend cannot be initialized.
    pub fn new() -> reqwest::Result<Self> {
        Ok(Self::from_client(browser_client_builder().build()?))
    }

    /// Wraps a prebuilt client, normally one made from [`browser_client_builder`].
    pub fn from_client(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl RedirectFollower for HttpRedirectFollower {
    async fn follow(&self, url: &Url) -> Result<String, UpstreamError> {
        let response = self.client.head(url.clone()).send().await?;

        tracing::debug!(
            status = response.status().as_u16(),
            final_url = %response.url(),
            "Redirect chain finished"
        );

        Ok(response.url().to_string())
    }
}
