//! HTTP request handlers for API endpoints.

pub mod check;
pub mod not_found;

pub use check::check_handler;
pub use not_found::not_found_handler;
