mod common;

use axum::http::StatusCode;
use link_cleaner::config::Config;
use serde_json::{Value, json};
use std::net::SocketAddr;

const TARGET: &str = "https://shopee.vn/product/12345/67890";

/// Points the provider client at another route of the fake upstream.
fn use_provider_path(path: &'static str) -> impl FnOnce(&mut Config, SocketAddr) {
    move |config: &mut Config, upstream: SocketAddr| {
        config.shortener_api_url = format!("http://{upstream}{path}");
    }
}

#[tokio::test]
async fn test_short_creates_link() {
    let server = common::setup().await;

    let response = server
        .get("/check")
        .add_query_param("command", "short")
        .add_query_param("url", TARGET)
        .await;

    response.assert_status_ok();
    assert_eq!(
        response.header("content-type"),
        "application/json;charset=UTF-8"
    );

    assert_eq!(
        response.json::<Value>(),
        json!({
            "short_url": "https://short.test/abc",
            "slug": "abc",
            "target_url": TARGET,
            "provider": "short.test",
        })
    );
}

#[tokio::test]
async fn test_short_command_is_case_insensitive() {
    let server = common::setup().await;

    let response = server
        .get("/check")
        .add_query_param("command", "SHORT")
        .add_query_param("u", TARGET)
        .await;

    response.assert_status_ok();
    assert_eq!(response.json::<Value>()["short_url"], "https://short.test/abc");
}

#[tokio::test]
async fn test_short_does_not_require_whitelisted_target() {
    let server = common::setup().await;

    let response = server
        .get("/check")
        .add_query_param("command", "short")
        .add_query_param("url", "https://example.com/anything")
        .await;

    response.assert_status_ok();
    assert_eq!(
        response.json::<Value>()["target_url"],
        "https://example.com/anything"
    );
}

#[tokio::test]
async fn test_short_accepts_object_payload() {
    let server = common::setup_with(use_provider_path("/api/object")).await;

    let response = server
        .get("/check")
        .add_query_param("command", "short")
        .add_query_param("url", TARGET)
        .await;

    response.assert_status_ok();

    let json = response.json::<Value>();
    assert_eq!(json["short_url"], "https://short.test/xyz");
    assert_eq!(json["slug"], "xyz");
}

#[tokio::test]
async fn test_short_missing_url() {
    let server = common::setup().await;

    let response = server.get("/check").add_query_param("command", "short").await;

    response.assert_status_bad_request();
    assert_eq!(
        response.json::<Value>(),
        json!({"error": "missing_url", "message": "Use ?url=..."})
    );
}

#[tokio::test]
async fn test_short_invalid_url_encoding() {
    let server = common::setup().await;

    let response = server
        .get("/check")
        .add_query_param("command", "short")
        .add_query_param("url", "100%")
        .await;

    response.assert_status_bad_request();
    assert_eq!(response.json::<Value>()["error"], "invalid_url_encoding");
}

#[tokio::test]
async fn test_short_provider_error_carries_status() {
    let server = common::setup_with(use_provider_path("/api/unavailable")).await;

    let response = server
        .get("/check")
        .add_query_param("command", "short")
        .add_query_param("url", TARGET)
        .await;

    response.assert_status(StatusCode::BAD_GATEWAY);
    assert_eq!(
        response.json::<Value>(),
        json!({"error": "provider_error", "status": 503})
    );
}

#[tokio::test]
async fn test_short_empty_sequence_is_shorten_failed() {
    let server = common::setup_with(use_provider_path("/api/empty")).await;

    let response = server
        .get("/check")
        .add_query_param("command", "short")
        .add_query_param("url", TARGET)
        .await;

    response.assert_status(StatusCode::BAD_GATEWAY);
    assert_eq!(
        response.json::<Value>(),
        json!({"error": "shorten_failed", "message": "No link returned"})
    );
}

#[tokio::test]
async fn test_short_payload_without_url_is_shorten_failed() {
    let server = common::setup_with(use_provider_path("/api/no-url")).await;

    let response = server
        .get("/check")
        .add_query_param("command", "short")
        .add_query_param("url", TARGET)
        .await;

    response.assert_status(StatusCode::BAD_GATEWAY);
    assert_eq!(response.json::<Value>()["error"], "shorten_failed");
}

#[tokio::test]
async fn test_short_non_json_body_is_network_error() {
    let server = common::setup_with(use_provider_path("/api/garbage")).await;

    let response = server
        .get("/check")
        .add_query_param("command", "short")
        .add_query_param("url", TARGET)
        .await;

    response.assert_status(StatusCode::BAD_GATEWAY);
    assert_eq!(response.json::<Value>(), json!({"error": "network_error"}));
}

#[tokio::test]
async fn test_short_timeout() {
    let server = common::setup_with(|config, upstream| {
        config.upstream_timeout_ms = 300;
        config.shortener_api_url = format!("http://{upstream}/api/slow");
    })
    .await;

    let response = server
        .get("/check")
        .add_query_param("command", "short")
        .add_query_param("url", TARGET)
        .await;

    response.assert_status(StatusCode::GATEWAY_TIMEOUT);
    assert_eq!(response.json::<Value>(), json!({"error": "timeout"}));
}

#[tokio::test]
async fn test_short_unreachable_provider_is_network_error() {
    let unreachable = common::closed_port().await;
    let config = common::test_config(unreachable);
    let state = common::create_test_state(&config, unreachable);
    let server = common::create_test_server(&config, state);

    let response = server
        .get("/check")
        .add_query_param("command", "short")
        .add_query_param("url", TARGET)
        .await;

    response.assert_status(StatusCode::BAD_GATEWAY);
    assert_eq!(response.json::<Value>()["error"], "network_error");
}
