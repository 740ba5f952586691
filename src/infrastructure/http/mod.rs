//! Outbound HTTP clients for the redirect servers and the shortening provider.
//!
//! Neither client sets a request timeout of its own: the deadline is applied by
//! the application services around each call.

pub mod clc_provider;
pub mod redirect_follower;

pub use clc_provider::ClcLinkProvider;
pub use redirect_follower::HttpRedirectFollower;

use crate::domain::gateways::UpstreamError;

impl From<reqwest::Error> for UpstreamError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Self::Timeout
        } else if err.is_decode() {
            Self::Decode(err.to_string())
        } else if let Some(status) = err.status() {
            Self::Status(status.as_u16())
        } else {
            Self::Network(err.to_string())
        }
    }
}
