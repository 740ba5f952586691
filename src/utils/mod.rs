//! Utility functions shared by the request handlers.
//!
//! - [`uri_component`] - Strict percent-decoding of the `url` query parameter

pub mod uri_component;
