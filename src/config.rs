//! Application configuration loaded from environment variables.
//!
//! Configuration is loaded once at startup and validated before the server starts.
//! Every variable is optional; defaults reproduce the production deployment.
//!
//! ## Variables
//!
//! - `LISTEN` - Bind address (default: `0.0.0.0:8787`)
//! - `RUST_LOG` - Log level (default: `info`)
//! - `LOG_FORMAT` - Log format: `text` or `json` (default: `text`)
//! - `ENDPOINT_PATH` - The single API path (default: `/check`)
//! - `TRUSTED_ORIGIN_SUFFIX` - CORS origins ending with this are trusted (default: `huongpham.com`)
//! - `UPSTREAM_TIMEOUT_MS` - Deadline per outbound call (default: 10000, min: 1)
//! - `SHORTENER_API_URL` - Provider creation endpoint (default: `https://clc.is/api/links`)
//! - `SHORTENER_DOMAIN` - Provider domain for created links (default: `clc.is`)
//! - `WHITELIST_MATCH` - Host matching mode: `contains` or `suffix` (default: `contains`)

use anyhow::{Context, Result};
use std::env;
use std::time::Duration;

use crate::domain::HostMatch;
use crate::infrastructure::http::clc_provider::{DEFAULT_API_URL, DEFAULT_DOMAIN};

/// Service configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub listen_addr: String,
    pub log_level: String,
    pub log_format: String,
    /// Path of the single API endpoint; every other path answers 404.
    pub endpoint_path: String,
    /// Origins ending with this suffix receive `Access-Control-Allow-Origin`,
    /// in addition to any origin mentioning `localhost` or `127.0.0.1`.
    pub trusted_origin_suffix: String,
    /// Deadline for the single outbound call made per request.
    pub upstream_timeout_ms: u64,
    pub shortener_api_url: String,
    pub shortener_domain: String,
    pub whitelist_match: HostMatch,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            listen_addr: "0.0.0.0:8787".to_string(),
            log_level: "info".to_string(),
            log_format: "text".to_string(),
            endpoint_path: "/check".to_string(),
            trusted_origin_suffix: "huongpham.com".to_string(),
            upstream_timeout_ms: 10_000,
            shortener_api_url: DEFAULT_API_URL.to_string(),
            shortener_domain: DEFAULT_DOMAIN.to_string(),
            whitelist_match: HostMatch::Contains,
        }
    }
}

impl Config {
    /// Loads configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if `WHITELIST_MATCH` names an unknown mode.
    pub fn from_env() -> Result<Self> {
        let defaults = Self::default();

        let listen_addr = env::var("LISTEN").unwrap_or(defaults.listen_addr);
        let log_level = env::var("RUST_LOG").unwrap_or(defaults.log_level);
        let log_format = env::var("LOG_FORMAT").unwrap_or(defaults.log_format);
        let endpoint_path = env::var("ENDPOINT_PATH").unwrap_or(defaults.endpoint_path);
        let trusted_origin_suffix =
            env::var("TRUSTED_ORIGIN_SUFFIX").unwrap_or(defaults.trusted_origin_suffix);

        let upstream_timeout_ms = env::var("UPSTREAM_TIMEOUT_MS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(defaults.upstream_timeout_ms);

        let shortener_api_url =
            env::var("SHORTENER_API_URL").unwrap_or(defaults.shortener_api_url);
        let shortener_domain = env::var("SHORTENER_DOMAIN").unwrap_or(defaults.shortener_domain);

        let whitelist_match = match env::var("WHITELIST_MATCH") {
            Ok(v) => v
                .parse::<HostMatch>()
                .map_err(anyhow::Error::msg)
                .context("Invalid WHITELIST_MATCH")?,
            Err(_) => defaults.whitelist_match,
        };

        Ok(Self {
            listen_addr,
            log_level,
            log_format,
            endpoint_path,
            trusted_origin_suffix,
            upstream_timeout_ms,
            shortener_api_url,
            shortener_domain,
            whitelist_match,
        })
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `log_format` is not `text` or `json`
    /// - `listen_addr` is invalid
    /// - `endpoint_path` does not start with `/` or contains route syntax (`{`, `}`, `*`)
    /// - `upstream_timeout_ms` is 0 or above 120000
    /// - `shortener_api_url` is not an HTTP(S) URL
    /// - `shortener_domain` is empty
    pub fn validate(&self) -> Result<()> {
        if self.log_format != "text" && self.log_format != "json" {
            anyhow::bail!(
                "LOG_FORMAT must be 'text' or 'json', got '{}'",
                self.log_format
            );
        }

        if !self.listen_addr.contains(':') {
            anyhow::bail!(
                "LISTEN must be in format 'host:port', got '{}'",
                self.listen_addr
            );
        }

        if !self.endpoint_path.starts_with('/') || self.endpoint_path.len() < 2 {
            anyhow::bail!(
                "ENDPOINT_PATH must start with '/' and name a path, got '{}'",
                self.endpoint_path
            );
        }

        if self.endpoint_path.contains(|c: char| matches!(c, '{' | '}' | '*')) {
            anyhow::bail!(
                "ENDPOINT_PATH must be a literal path without '{{', '}}' or '*', got '{}'",
                self.endpoint_path
            );
        }

        if self.upstream_timeout_ms == 0 {
            anyhow::bail!("UPSTREAM_TIMEOUT_MS must be greater than 0");
        }

        if self.upstream_timeout_ms > 120_000 {
            anyhow::bail!(
                "UPSTREAM_TIMEOUT_MS is too large (max: 120000), got {}",
                self.upstream_timeout_ms
            );
        }

        let api_url = url::Url::parse(&self.shortener_api_url)
            .with_context(|| format!("SHORTENER_API_URL is not a URL: '{}'", self.shortener_api_url))?;
        if api_url.scheme() != "http" && api_url.scheme() != "https" {
            anyhow::bail!(
                "SHORTENER_API_URL must use http or https, got '{}'",
                self.shortener_api_url
            );
        }

        if self.shortener_domain.trim().is_empty() {
            anyhow::bail!("SHORTENER_DOMAIN must not be empty");
        }

        Ok(())
    }

    /// Deadline applied to each outbound call.
    pub fn upstream_timeout(&self) -> Duration {
        Duration::from_millis(self.upstream_timeout_ms)
    }

    /// Prints configuration summary.
    pub fn print_summary(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Listen address: {}", self.listen_addr);
        tracing::info!("  Endpoint path: {}", self.endpoint_path);
        tracing::info!("  Trusted origin suffix: {}", self.trusted_origin_suffix);
        tracing::info!("  Upstream timeout: {}ms", self.upstream_timeout_ms);
        tracing::info!(
            "  Shortener: {} ({})",
            self.shortener_domain,
            self.shortener_api_url
        );
        tracing::info!("  Whitelist match: {}", self.whitelist_match);
        tracing::info!("  Log level: {}", self.log_level);
        tracing::info!("  Log format: {}", self.log_format);
    }
}

/// Loads and validates configuration from environment variables.
///
/// # Errors
///
/// Returns an error if a variable is malformed or validation fails.
///
/// # Note
///
/// This function expects environment variables to be already loaded
/// (e.g., via `dotenvy::dotenv()` in `main.rs`).
pub fn load_from_env() -> Result<Config> {
    let config = Config::from_env()?;
    config.validate()?;
    Ok(config)
}
