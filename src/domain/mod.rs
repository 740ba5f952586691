//! Core domain types: whitelist, extraction patterns, results, and gateway traits.
//!
//! Nothing here performs I/O. The process-wide tables ([`whitelist`],
//! [`patterns`]) are immutable after first use and shared freely between
//! requests.

pub mod gateways;
pub mod patterns;
pub mod resolution;
pub mod shortened_link;
pub mod whitelist;

pub use patterns::{ProductIds, extract_product_ids};
pub use resolution::ResolutionResult;
pub use shortened_link::ShortenedLink;
pub use whitelist::{DomainWhitelist, HostMatch};
