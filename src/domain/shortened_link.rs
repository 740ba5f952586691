//! Normalized response of the link-shortening provider.

use serde::Serialize;
use serde_json::Value;

/// A short link created by the external provider.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ShortenedLink {
    pub short_url: String,
    pub slug: Option<String>,
    pub target_url: String,
    pub provider: String,
}

impl ShortenedLink {
    /// Normalizes a provider payload.
    ///
    /// The provider answers either with a single entry or with a sequence of
    /// entries, in which case only the first one is considered. Returns `None`
    /// when the entry has no non-empty string `url`.
    pub fn from_provider_payload(
        payload: &Value,
        target_url: impl Into<String>,
        provider: impl Into<String>,
    ) -> Option<Self> {
        let entry = match payload {
            Value::Array(entries) => entries.first()?,
            other => other,
        };

        let short_url = entry
            .get("url")
            .and_then(Value::as_str)
            .filter(|url| !url.is_empty())?;

        let slug = entry.get("slug").and_then(Value::as_str).map(str::to_string);

        Some(Self {
            short_url: short_url.to_string(),
            slug,
            target_url: target_url.into(),
            provider: provider.into(),
        })
    }
}
