//! Client for the external link-shortening provider's creation API.

use crate::domain::gateways::{ShortLinkProvider, UpstreamError};
use async_trait::async_trait;
use reqwest::Client;
use serde::Serialize;
use serde_json::Value;

/// Default creation endpoint of the provider.
pub const DEFAULT_API_URL: &str = "https://clc.is/api/links";

/// Default domain under which links are created.
pub const DEFAULT_DOMAIN: &str = "clc.is";

#[derive(Debug, Serialize)]
struct CreateLinkRequest<'a> {
    domain: &'a str,
    target_url: &'a str,
}

/// [`ShortLinkProvider`] speaking the provider's JSON API.
///
/// # Contract
///
/// ```text
/// POST <endpoint>
/// {"domain": "clc.is", "target_url": "https://..."}
///
/// 200 [{"url": "https://clc.is/abc", "slug": "abc"}]
/// ```
#[derive(Debug, Clone)]
pub struct ClcLinkProvider {
    client: Client,
    endpoint: String,
}

impl ClcLinkProvider {
    /// Creates a provider client posting to `endpoint`.
    ///
    /// # Errors
    ///
    /// Returns an error if the TLS backend cannot be initialized.
    pub fn new(endpoint: impl Into<String>) -> reqwest::Result<Self> {
        Ok(Self::from_client(Client::builder().build()?, endpoint))
    }

    pub fn from_client(client: Client, endpoint: impl Into<String>) -> Self {
        Self {
            client,
            endpoint: endpoint.into(),
        }
    }
}

#[async_trait]
impl ShortLinkProvider for ClcLinkProvider {
    async fn create_link(&self, domain: &str, target_url: &str) -> Result<Value, UpstreamError> {
        let response = self
            .client
            .post(&self.endpoint)
            .json(&CreateLinkRequest { domain, target_url })
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!(status = status.as_u16(), "Shortening provider rejected request");
            return Err(UpstreamError::Status(status.as_u16()));
        }

        Ok(response.json::<Value>().await?)
    }
}
