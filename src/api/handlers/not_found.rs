//! Fallback for unknown paths.

use axum::http::StatusCode;

/// Answers `404 Not Found` with a plain-text body.
pub async fn not_found_handler() -> (StatusCode, &'static str) {
    (StatusCode::NOT_FOUND, "Not found")
}
