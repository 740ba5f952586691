//! HTTP middleware for request processing.
//!
//! Provides origin-based CORS headers and request tracing.

pub mod cors;
pub mod tracing;
