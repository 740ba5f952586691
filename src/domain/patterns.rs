//! Product identifier extraction from resolved URLs.
//!
//! Patterns are tried in a fixed order and the first match wins. The order
//! matters: the trailing numeric-segment pattern also matches many URLs the
//! earlier, more specific patterns are meant to handle.

use regex::Regex;
use std::sync::LazyLock;

/// A named extraction pattern with exactly two capture groups: shop, then item.
#[derive(Debug)]
pub struct ProductPattern {
    pub name: &'static str,
    regex: Regex,
}

static PRODUCT_PATTERNS: LazyLock<[ProductPattern; 3]> = LazyLock::new(|| {
    [
        ProductPattern {
            name: "product_path",
            regex: Regex::new(r"/product/(\d+)/(\d+)").unwrap(),
        },
        ProductPattern {
            name: "dotted_id",
            regex: Regex::new(r"i\.(\d+)\.(\d+)").unwrap(),
        },
        ProductPattern {
            name: "numeric_segments",
            regex: Regex::new(r"/(\d{6,})/(\d{6,})(?:[/?]|$)").unwrap(),
        },
    ]
});

/// Returns the extraction patterns in precedence order.
pub fn product_patterns() -> &'static [ProductPattern] {
    PRODUCT_PATTERNS.as_slice()
}

/// Shop and item identifiers of a catalog product.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductIds {
    pub shop_id: String,
    pub item_id: String,
    /// Name of the pattern that produced the match.
    pub pattern: &'static str,
}

impl ProductIds {
    /// Composite key in the form `i.<shop_id>.<item_id>`.
    pub fn product_id(&self) -> String {
        format!("i.{}.{}", self.shop_id, self.item_id)
    }
}

/// Extracts product identifiers from `final_url` using the first matching pattern.
///
/// Returns `None` when no pattern matches; that is a valid outcome, not an error.
pub fn extract_product_ids(final_url: &str) -> Option<ProductIds> {
    product_patterns().iter().find_map(|pattern| {
        let caps = pattern.regex.captures(final_url)?;
        Some(ProductIds {
            shop_id: caps.get(1)?.as_str().to_string(),
            item_id: caps.get(2)?.as_str().to_string(),
            pattern: pattern.name,
        })
    })
}
