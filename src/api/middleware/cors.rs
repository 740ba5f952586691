//! Origin-checked CORS headers.
//!
//! Unlike a blanket CORS layer, untrusted origins are not rejected: the request
//! is served normally and `Access-Control-Allow-Origin` is simply omitted, so
//! browsers discard the response on their side.

use axum::{
    extract::{Request, State},
    http::{HeaderMap, HeaderValue, Method, StatusCode, header},
    middleware::Next,
    response::{IntoResponse, Response},
};

use crate::state::AppState;

pub const ALLOWED_METHODS: &str = "GET, HEAD, OPTIONS";

pub const DEFAULT_ALLOWED_HEADERS: &str = "Content-Type";

/// Decides which origins may read responses.
#[derive(Debug, Clone)]
pub struct CorsPolicy {
    trusted_suffix: String,
}

impl CorsPolicy {
    pub fn new(trusted_suffix: impl Into<String>) -> Self {
        Self {
            trusted_suffix: trusted_suffix.into(),
        }
    }

    /// Local development origins are always trusted, as is any origin ending
    /// with the configured suffix.
    pub fn is_trusted_origin(&self, origin: &str) -> bool {
        origin.contains("localhost")
            || origin.contains("127.0.0.1")
            || (!self.trusted_suffix.is_empty() && origin.ends_with(&self.trusted_suffix))
    }

    /// Computes the CORS headers for a request.
    ///
    /// - `Access-Control-Allow-Methods` is always present
    /// - `Access-Control-Allow-Headers` echoes `Access-Control-Request-Headers`
    ///   or falls back to `Content-Type`
    /// - `Access-Control-Allow-Origin` echoes `Origin` only when trusted
    pub fn response_headers(&self, request: &HeaderMap) -> HeaderMap {
        let mut headers = HeaderMap::new();

        headers.insert(
            header::ACCESS_CONTROL_ALLOW_METHODS,
            HeaderValue::from_static(ALLOWED_METHODS),
        );

        let allow_headers = request
            .get(header::ACCESS_CONTROL_REQUEST_HEADERS)
            .filter(|v| !v.is_empty())
            .cloned()
            .unwrap_or_else(|| HeaderValue::from_static(DEFAULT_ALLOWED_HEADERS));
        headers.insert(header::ACCESS_CONTROL_ALLOW_HEADERS, allow_headers);

        if let Some(origin) = request.get(header::ORIGIN)
            && origin.to_str().is_ok_and(|o| self.is_trusted_origin(o))
        {
            headers.insert(header::ACCESS_CONTROL_ALLOW_ORIGIN, origin.clone());
        }

        headers
    }
}

/// Attaches CORS headers to every response and answers preflights.
///
/// `OPTIONS` requests on any path get `204 No Content` with the CORS headers
/// and no body; they never reach routing.
///
/// # Example
///
/// ```rust,ignore
/// let app = Router::new()
///     .route("/check", any(check_handler))
///     .layer(middleware::from_fn_with_state(state.clone(), cors::layer));
/// ```
pub async fn layer(State(state): State<AppState>, req: Request, next: Next) -> Response {
    let cors_headers = state.cors.response_headers(req.headers());

    if req.method() == Method::OPTIONS {
        return (StatusCode::NO_CONTENT, cors_headers).into_response();
    }

    let mut response = next.run(req).await;
    response.headers_mut().extend(cors_headers);
    response
}
