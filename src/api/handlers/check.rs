//! Handler for the check endpoint: link resolution and shortening.

use axum::{
    extract::{RawQuery, State},
    http::{HeaderValue, StatusCode, header},
    response::{IntoResponse, Response},
};

use crate::api::dto::check::{CheckQuery, Command};
use crate::api::response::JsonBody;
use crate::state::AppState;

/// Cache policy for successful resolutions; redirect targets rarely change.
const CACHE_SUCCESS: &str = "public, max-age=3600";

const CACHE_ERROR: &str = "no-store";

/// Dispatches on the `command` query parameter.
///
/// # Endpoint
///
/// `GET /check?command=<clean|short>&url=<percent-encoded link>`
///
/// `u` is accepted as an alias of `url`. `command` defaults to `clean`.
///
/// # Responses
///
/// - `command=clean` - resolution result (200) or the same shape with `error` set (400)
/// - `command=short` - created short link (200) or error envelope (400/502/504)
pub async fn check_handler(State(state): State<AppState>, RawQuery(raw): RawQuery) -> Response {
    let query = CheckQuery::from_raw(raw.as_deref());

    match query.command() {
        Command::Clean => clean_link(&state, &query).await,
        Command::Short => shorten_link(&state, &query).await,
    }
}

/// Resolves a short link and extracts product identifiers.
///
/// # Response
///
/// ```json
/// {
///   "short_url": "https://s.shopee.vn/9UuCnuLvMJ",
///   "final_url": "https://shopee.vn/product/12345/67890",
///   "shopid": "12345",
///   "itemid": "67890",
///   "product_id": "i.12345.67890",
///   "error": null
/// }
/// ```
///
/// # Errors
///
/// - `missing_url` / `invalid_url_encoding` as a bare envelope, 400
/// - `invalid_url`, `not_shopee_short_url`, `timeout`, `network_error` inside
///   the result shape, 400
async fn clean_link(state: &AppState, query: &CheckQuery) -> Response {
    let short_url = match query.link() {
        Ok(link) => link,
        Err(err) => return err.into_response(),
    };

    let result = state.resolver.resolve(&short_url).await;

    let (status, cache_control) = if result.is_success() {
        (StatusCode::OK, CACHE_SUCCESS)
    } else {
        (StatusCode::BAD_REQUEST, CACHE_ERROR)
    };

    (
        status,
        [(header::CACHE_CONTROL, HeaderValue::from_static(cache_control))],
        JsonBody(result),
    )
        .into_response()
}

/// Creates a short link at the external provider.
///
/// # Response
///
/// ```json
/// {
///   "short_url": "https://clc.is/abc",
///   "slug": "abc",
///   "target_url": "https://shopee.vn/product/1/2",
///   "provider": "clc.is"
/// }
/// ```
///
/// # Errors
///
/// - `missing_url` / `invalid_url_encoding`, 400
/// - `timeout`, 504
/// - `network_error`, `provider_error` (with upstream `status`), `shorten_failed`, 502
async fn shorten_link(state: &AppState, query: &CheckQuery) -> Response {
    let target_url = match query.link() {
        Ok(link) => link,
        Err(err) => return err.into_response(),
    };

    match state.shortener.shorten(&target_url).await {
        Ok(link) => (StatusCode::OK, JsonBody(link)).into_response(),
        Err(err) => err.into_response(),
    }
}
