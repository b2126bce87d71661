#![allow(dead_code)]

use axum_test::TestServer;
use shorturl::application::services::UrlValidator;
use shorturl::routes::router;
use shorturl::state::AppState;

pub fn create_test_state() -> AppState {
    AppState::with_validator(UrlValidator::syntax_only())
}

/// Full application router (without trailing-slash normalization).
pub fn create_test_server(state: AppState) -> TestServer {
    TestServer::new(router(state, "public")).unwrap()
}

pub async fn shorten(server: &TestServer, url: &str) -> serde_json::Value {
    let response = server.post("/api/shorturl").form(&[("url", url)]).await;
    response.assert_status_ok();
    response.json::<serde_json::Value>()
}
