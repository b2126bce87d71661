mod common;

use axum::{Router, routing::get};
use axum_test::TestServer;
use shorturl::api::handlers::{health_handler, hello_handler};

#[tokio::test]
async fn test_health_endpoint_success() {
    let state = common::create_test_state();
    let app = Router::new()
        .route("/health", get(health_handler))
        .with_state(state);

    let server = TestServer::new(app).unwrap();

    let response = server.get("/health").await;

    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["status"], "healthy");
    assert_eq!(json["validation_mode"], "syntax");
    assert_eq!(json["registered_urls"], 0);
    assert!(json.get("version").is_some());
}

#[tokio::test]
async fn test_health_reports_registry_size() {
    let state = common::create_test_state();
    state
        .link_service
        .shorten("https://example.com")
        .await
        .unwrap();
    state
        .link_service
        .shorten("https://example.org")
        .await
        .unwrap();

    let app = Router::new()
        .route("/health", get(health_handler))
        .with_state(state);
    let server = TestServer::new(app).unwrap();

    let json = server.get("/health").await.json::<serde_json::Value>();

    assert_eq!(json["registered_urls"], 2);
}

#[tokio::test]
async fn test_hello_endpoint() {
    let app = Router::new().route("/api/hello", get(hello_handler));
    let server = TestServer::new(app).unwrap();

    let response = server.get("/api/hello").await;

    response.assert_status_ok();
    response.assert_json(&serde_json::json!({ "greeting": "hello API" }));
}
