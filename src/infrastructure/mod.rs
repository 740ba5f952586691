//! Infrastructure layer for external integrations.
//!
//! This layer implements the gateway traits defined by the domain layer.
//!
//! # Modules
//!
//! - [`http`] - Outbound HTTP clients built on `reqwest`

pub mod http;
