//! HTTP API layer for request/response handling.
//!
//! This layer translates HTTP requests into service calls and formats
//! responses according to the client contract.
//!
//! # Modules
//!
//! - [`dto`] - Query parsing and response bodies
//! - [`handlers`] - HTTP request handlers
//! - [`middleware`] - CORS and tracing middleware
//! - [`response`] - JSON body with explicit charset
//! - [`routes`] - Route configuration

pub mod dto;
pub mod handlers;
pub mod middleware;
pub mod response;
pub mod routes;
