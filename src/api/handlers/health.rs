//! Handler for health check endpoint.

use axum::{Json, extract::State};

use crate::api::dto::health::HealthResponse;
use crate::state::AppState;

/// Returns service health status.
///
/// # Endpoint
///
/// `GET /health`
///
/// The registry is in-process, so there is no external dependency to probe;
/// the response reports the active validation mode and registry size.
///
/// # Response
///
/// ```json
/// {
///   "status": "healthy",
///   "version": "0.1.0",
///   "validation_mode": "syntax",
///   "registered_urls": 3
/// }
/// ```
pub async fn health_handler(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        validation_mode: state.link_service.validation_mode().to_string(),
        registered_urls: state.link_service.registered_count().await,
    })
}
