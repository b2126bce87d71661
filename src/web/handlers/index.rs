//! Landing page handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::{extract::State, response::IntoResponse};

use crate::state::AppState;

/// Template for the landing page.
///
/// Renders `templates/index.html` with:
/// - A form posting to `/api/shorturl`
/// - Usage examples for both endpoints
/// - The active validation mode and registry size
#[derive(Template, WebTemplate)]
#[template(path = "index.html")]
pub struct IndexTemplate {
    pub validation_mode: String,
    pub registered_urls: usize,
    pub version: &'static str,
}

/// Renders the landing page.
///
/// # Endpoint
///
/// `GET /`
pub async fn index_handler(State(state): State<AppState>) -> impl IntoResponse {
    IndexTemplate {
        validation_mode: state.link_service.validation_mode().to_string(),
        registered_urls: state.link_service.registered_count().await,
        version: env!("CARGO_PKG_VERSION"),
    }
}
