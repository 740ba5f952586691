#![allow(dead_code)]

use axum::{
    Json, Router,
    extract::Path,
    http::StatusCode,
    response::{IntoResponse, Redirect},
    routing::{get, post},
};
use axum_test::TestServer;
use link_cleaner::config::Config;
use link_cleaner::infrastructure::http::redirect_follower::browser_client_builder;
use link_cleaner::infrastructure::http::{ClcLinkProvider, HttpRedirectFollower};
use link_cleaner::routes::app_router;
use link_cleaner::state::AppState;
use serde_json::{Value, json};
use std::net::SocketAddr;
use std::time::Duration;

/// Short-link host routed to the fake upstream.
pub const SHORT_HOST: &str = "s.shopee.vn";

/// Product-page host routed to the fake upstream.
pub const PRODUCT_HOST: &str = "shopee.vn";

pub const PROVIDER_DOMAIN: &str = "short.test";

/// Fake redirect server and shortening provider.
///
/// # Redirects (any host)
///
/// - `/product-link` -> `/product/12345/67890`
/// - `/dotted-link`  -> `/Some-Item-i.555.999`
/// - `/numeric-link` -> `/shop/111111/222222?x=1`
/// - `/sale-link`    -> `/m/sale`
/// - `/slow-link`    -> answers after 10s
/// - `/hops/{n}`     -> `/hops/{n-1}`, then `/product/12345/67890` at 0
///
/// # Provider
///
/// - `POST /api/links`       - `[{"url", "slug"}]` when the body matches the contract, else 422
/// - `POST /api/object`      - `{"url", "slug"}`
/// - `POST /api/empty`       - `[]`
/// - `POST /api/no-url`      - `{"slug"}`
/// - `POST /api/unavailable` - 503
/// - `POST /api/garbage`     - 200 with an HTML body
/// - `POST /api/slow`        - answers after 10s
pub fn fake_upstream() -> Router {
    Router::new()
        .route("/product-link", get(|| redirect_to("/product/12345/67890")))
        .route("/dotted-link", get(|| redirect_to("/Some-Item-i.555.999")))
        .route("/numeric-link", get(|| redirect_to("/shop/111111/222222?x=1")))
        .route("/sale-link", get(|| redirect_to("/m/sale")))
        .route("/slow-link", get(slow))
        .route("/hops/{remaining}", get(hop))
        .route("/api/links", post(create_link))
        .route(
            "/api/object",
            post(|| async { Json(json!({"url": "https://short.test/xyz", "slug": "xyz"})) }),
        )
        .route("/api/empty", post(|| async { Json(json!([])) }))
        .route("/api/no-url", post(|| async { Json(json!({"slug": "abc"})) }))
        .route(
            "/api/unavailable",
            post(|| async { StatusCode::SERVICE_UNAVAILABLE }),
        )
        .route("/api/garbage", post(|| async { "<html>oops</html>" }))
        .route("/api/slow", post(slow))
        .fallback(|| async { StatusCode::OK })
}

async fn redirect_to(path: &'static str) -> Redirect {
    Redirect::temporary(&format!("http://{PRODUCT_HOST}{path}"))
}

async fn hop(Path(remaining): Path<u32>) -> Redirect {
    match remaining {
        0 => Redirect::temporary(&format!("http://{PRODUCT_HOST}/product/12345/67890")),
        n => Redirect::temporary(&format!("http://{SHORT_HOST}/hops/{}", n - 1)),
    }
}

async fn slow() -> StatusCode {
    tokio::time::sleep(Duration::from_secs(10)).await;
    StatusCode::OK
}

async fn create_link(Json(body): Json<Value>) -> impl IntoResponse {
    let target = body["target_url"].as_str().unwrap_or_default();
    if body["domain"] != PROVIDER_DOMAIN || target.is_empty() {
        return (
            StatusCode::UNPROCESSABLE_ENTITY,
            Json(json!({"error": "bad request"})),
        );
    }

    (
        StatusCode::OK,
        Json(json!([{"url": "https://short.test/abc", "slug": "abc"}])),
    )
}

/// Serves `router` on an ephemeral local port.
pub async fn spawn_upstream(router: Router) -> SocketAddr {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });

    addr
}

/// Returns a local address nothing listens on.
pub async fn closed_port() -> SocketAddr {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    listener.local_addr().unwrap()
}

pub fn test_config(upstream: SocketAddr) -> Config {
    Config {
        upstream_timeout_ms: 2_000,
        shortener_api_url: format!("http://{upstream}/api/links"),
        shortener_domain: PROVIDER_DOMAIN.to_string(),
        ..Config::default()
    }
}

/// Builds state whose redirect client resolves the marketplace hosts to `upstream`.
pub fn create_test_state(config: &Config, upstream: SocketAddr) -> AppState {
    let redirect_client = browser_client_builder()
        .no_proxy()
        .resolve(SHORT_HOST, upstream)
        .resolve(PRODUCT_HOST, upstream)
        .build()
        .unwrap();

    let provider_client = reqwest::Client::builder().no_proxy().build().unwrap();

    AppState::with_clients(
        config,
        HttpRedirectFollower::from_client(redirect_client),
        ClcLinkProvider::from_client(provider_client, config.shortener_api_url.clone()),
    )
}

pub fn create_test_server(config: &Config, state: AppState) -> TestServer {
    TestServer::new(app_router(state, &config.endpoint_path)).unwrap()
}

/// Starts the fake upstream and a server wired to it with `customize` applied
/// to the default test configuration.
pub async fn setup_with(customize: impl FnOnce(&mut Config, SocketAddr)) -> TestServer {
    let upstream = spawn_upstream(fake_upstream()).await;

    let mut config = test_config(upstream);
    customize(&mut config, upstream);

    let state = create_test_state(&config, upstream);
    create_test_server(&config, state)
}

pub async fn setup() -> TestServer {
    setup_with(|_, _| {}).await
}
