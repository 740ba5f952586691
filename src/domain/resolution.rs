//! Outcome of a short-link resolution attempt.

use serde::Serialize;

use crate::domain::patterns::extract_product_ids;
use crate::error::ErrorCode;

/// Result of resolving one short link.
///
/// Built once per attempt through [`ResolutionResult::failed`] or
/// [`ResolutionResult::resolved`] and never mutated afterwards. A failed result
/// carries no URL or identifier fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolutionResult {
    short_url: String,
    final_url: Option<String>,
    #[serde(rename = "shopid")]
    shop_id: Option<String>,
    #[serde(rename = "itemid")]
    item_id: Option<String>,
    product_id: Option<String>,
    error: Option<ErrorCode>,
}

impl ResolutionResult {
    pub fn failed(short_url: impl Into<String>, error: ErrorCode) -> Self {
        Self {
            short_url: short_url.into(),
            final_url: None,
            shop_id: None,
            item_id: None,
            product_id: None,
            error: Some(error),
        }
    }

    /// Builds a successful result, extracting identifiers from `final_url`.
    pub fn resolved(short_url: impl Into<String>, final_url: String) -> Self {
        let ids = extract_product_ids(&final_url);
        let product_id = ids.as_ref().map(|ids| ids.product_id());
        let (shop_id, item_id) = match ids {
            Some(ids) => (Some(ids.shop_id), Some(ids.item_id)),
            None => (None, None),
        };

        Self {
            short_url: short_url.into(),
            final_url: Some(final_url),
            shop_id,
            item_id,
            product_id,
            error: None,
        }
    }

    pub fn short_url(&self) -> &str {
        &self.short_url
    }

    pub fn final_url(&self) -> Option<&str> {
        self.final_url.as_deref()
    }

    pub fn shop_id(&self) -> Option<&str> {
        self.shop_id.as_deref()
    }

    pub fn item_id(&self) -> Option<&str> {
        self.item_id.as_deref()
    }

    pub fn product_id(&self) -> Option<&str> {
        self.product_id.as_deref()
    }

    pub fn error(&self) -> Option<ErrorCode> {
        self.error
    }

    pub fn is_success(&self) -> bool {
        self.error.is_none()
    }
}
