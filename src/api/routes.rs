//! API route configuration.

use crate::api::handlers::check_handler;
use crate::state::AppState;
use axum::{Router, routing::any};

/// Public API routes.
///
/// # Endpoints
///
/// - `ANY  {endpoint_path}` - Resolve (`command=clean`) or shorten (`command=short`)
///
/// The check endpoint accepts any method; dispatch depends only on the query.
/// `endpoint_path` must be a literal path, see [`crate::config::Config::validate`].
pub fn public_routes(endpoint_path: &str) -> Router<AppState> {
    Router::new().route(endpoint_path, any(check_handler))
}
