mod common;

use axum::{Router, routing::post};
use axum_test::TestServer;
use serde_json::json;
use shorturl::api::handlers::shorten_handler;

fn shorten_server() -> TestServer {
    let state = common::create_test_state();
    let app = Router::new()
        .route("/api/shorturl", post(shorten_handler))
        .with_state(state);

    TestServer::new(app).unwrap()
}

#[tokio::test]
async fn test_shorten_form_success() {
    let server = shorten_server();

    let response = server
        .post("/api/shorturl")
        .form(&[("url", "https://www.example.com")])
        .await;

    response.assert_status_ok();
    response.assert_json(&json!({
        "original_url": "https://www.example.com/",
        "short_url": 1
    }));
}

#[tokio::test]
async fn test_shorten_json_success() {
    let server = shorten_server();

    let response = server
        .post("/api/shorturl")
        .json(&json!({ "url": "https://rust-lang.org/learn" }))
        .await;

    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["original_url"], "https://rust-lang.org/learn");
    assert_eq!(json["short_url"], 1);
}

#[tokio::test]
async fn test_shorten_deduplication() {
    let server = shorten_server();

    let first = server
        .post("/api/shorturl")
        .form(&[("url", "https://dedup.com")])
        .await
        .json::<serde_json::Value>();

    let second = server
        .post("/api/shorturl")
        .json(&json!({ "url": "https://dedup.com" }))
        .await
        .json::<serde_json::Value>();

    assert_eq!(first, second);
    assert_eq!(first["short_url"], 1);
}

#[tokio::test]
async fn test_shorten_equivalent_spellings_share_code() {
    let server = shorten_server();

    let a = server
        .post("/api/shorturl")
        .form(&[("url", "https://example.com")])
        .await
        .json::<serde_json::Value>();

    let b = server
        .post("/api/shorturl")
        .form(&[("url", "HTTPS://EXAMPLE.COM:443/")])
        .await
        .json::<serde_json::Value>();

    assert_eq!(a["short_url"], b["short_url"]);
    assert_eq!(b["original_url"], "https://example.com/");
}

#[tokio::test]
async fn test_shorten_sequential_codes() {
    let server = shorten_server();

    for (i, url) in ["https://a.com", "https://b.com", "https://c.com"]
        .into_iter()
        .enumerate()
    {
        let json = server
            .post("/api/shorturl")
            .form(&[("url", url)])
            .await
            .json::<serde_json::Value>();

        assert_eq!(json["short_url"], i as u64 + 1);
    }
}

#[tokio::test]
async fn test_shorten_invalid_urls_return_error_body_with_200() {
    let server = shorten_server();

    for url in [
        "not-a-url",
        "ftp://example.com",
        "javascript:alert(1)",
        "http://localhost:3000",
        "www.example.com",
        "",
    ] {
        let response = server.post("/api/shorturl").form(&[("url", url)]).await;

        response.assert_status_ok();
        response.assert_json(&json!({ "error": "invalid url" }));
    }
}

#[tokio::test]
async fn test_shorten_missing_url_field() {
    let server = shorten_server();

    let response = server.post("/api/shorturl").json(&json!({})).await;

    response.assert_status_ok();
    response.assert_json(&json!({ "error": "invalid url" }));
}

#[tokio::test]
async fn test_shorten_overlong_url_is_invalid() {
    let server = shorten_server();
    let url = format!("https://example.com/{}", "a".repeat(4096));

    let response = server.post("/api/shorturl").json(&json!({ "url": url })).await;

    response.assert_status_ok();
    response.assert_json(&json!({ "error": "invalid url" }));
}

#[tokio::test]
async fn test_shorten_rejection_does_not_consume_code() {
    let server = shorten_server();

    server
        .post("/api/shorturl")
        .form(&[("url", "not-a-url")])
        .await
        .assert_status_ok();

    let json = server
        .post("/api/shorturl")
        .form(&[("url", "https://first.example.com")])
        .await
        .json::<serde_json::Value>();

    assert_eq!(json["short_url"], 1);
}

#[tokio::test]
async fn test_shorten_malformed_json_body() {
    let server = shorten_server();

    let response = server
        .post("/api/shorturl")
        .bytes("{ not json".into())
        .content_type("application/json")
        .await;

    response.assert_status_bad_request();
    response.assert_json(&json!({ "error": "malformed request body" }));
}

#[tokio::test]
async fn test_shorten_unsupported_content_type_is_invalid_url() {
    let server = shorten_server();

    let response = server.post("/api/shorturl").text("https://example.com").await;

    response.assert_status_ok();
    response.assert_json(&json!({ "error": "invalid url" }));
}

#[tokio::test]
async fn test_shorten_empty_body_is_invalid_url() {
    let server = shorten_server();

    let response = server.post("/api/shorturl").await;
    response.assert_status_ok();
    response.assert_json(&json!({ "error": "invalid url" }));

    let response = server
        .post("/api/shorturl")
        .bytes("".into())
        .content_type("application/json")
        .await;
    response.assert_status_ok();
    response.assert_json(&json!({ "error": "invalid url" }));
}

#[tokio::test]
async fn test_shorten_non_string_url_is_invalid_url() {
    let server = shorten_server();

    let response = server.post("/api/shorturl").json(&json!({ "url": 123 })).await;

    response.assert_status_ok();
    response.assert_json(&json!({ "error": "invalid url" }));

    let json = server
        .post("/api/shorturl")
        .json(&json!({ "url": "https://example.com" }))
        .await
        .json::<serde_json::Value>();
    assert_eq!(json["short_url"], 1);
}
