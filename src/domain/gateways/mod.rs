//! Gateway trait definitions for the outbound calls the service makes.
//!
//! The domain layer only knows these contracts; concrete HTTP clients live in
//! `crate::infrastructure::http`. Mock implementations are generated via
//! `mockall` for unit tests.
//!
//! # Available Gateways
//!
//! - [`RedirectFollower`] - Follows a short link's redirect chain
//! - [`ShortLinkProvider`] - Creates short links at the external provider

pub mod error;
pub mod link_provider;
pub mod redirect_follower;

pub use error::UpstreamError;
pub use link_provider::ShortLinkProvider;
pub use redirect_follower::RedirectFollower;

#[cfg(test)]
pub use link_provider::MockShortLinkProvider;
#[cfg(test)]
pub use redirect_follower::MockRedirectFollower;
