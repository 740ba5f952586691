//! # Link Cleaner
//!
//! A small edge service that resolves marketplace short links to their final
//! destination, extracts product identifiers from the resolved URL, and proxies
//! short-link creation to an external provider.
//!
//! ## Architecture
//!
//! - **Domain Layer** ([`domain`]) - Whitelist, extraction patterns, results, gateway traits
//! - **Application Layer** ([`application`]) - Resolution and shortening services with deadlines
//! - **Infrastructure Layer** ([`infrastructure`]) - `reqwest` clients for the upstreams
//! - **API Layer** ([`api`]) - Handlers, query parsing, CORS and tracing middleware
//!
//! ## Endpoint
//!
//! ```text
//! GET /check?url=<percent-encoded short link>              resolve
//! GET /check?command=short&url=<percent-encoded target>    shorten
//! ```
//!
//! Each request makes at most one outbound call and keeps no state.
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via [`config::Config`].
//! See [`config`] module for available options.

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;
pub mod utils;

pub mod config;
pub mod server;

pub mod routes;

pub use error::{ApiError, ErrorCode};
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::{ResolverService, ShortenerService};
    pub use crate::domain::{DomainWhitelist, HostMatch, ResolutionResult, ShortenedLink};
    pub use crate::error::{ApiError, ErrorCode};
    pub use crate::infrastructure::http::{ClcLinkProvider, HttpRedirectFollower};
    pub use crate::state::AppState;
}
