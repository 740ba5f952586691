//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `ANY  /check`   - Link resolution / shortening (path configurable)
//! - anything else  - `404 Not found`
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **CORS** - Origin-checked headers on every response, preflights answered
//!   before routing

use crate::api;
use crate::api::handlers::not_found_handler;
use crate::api::middleware::{cors, tracing};
use crate::state::AppState;
use axum::{Router, middleware};

/// Constructs the application router with all routes and middleware.
///
/// # Arguments
///
/// - `state` - shared application state injected into all handlers
/// - `endpoint_path` - path of the check endpoint, e.g. `/check`
pub fn app_router(state: AppState, endpoint_path: &str) -> Router {
    api::routes::public_routes(endpoint_path)
        .fallback(not_found_handler)
        .with_state(state.clone())
        .layer(middleware::from_fn_with_state(state, cors::layer))
        .layer(tracing::layer())
}
