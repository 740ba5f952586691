//! Request operations: short-link resolution and link shortening.

pub mod resolver_service;
pub mod shortener_service;

pub use resolver_service::ResolverService;
pub use shortener_service::ShortenerService;
