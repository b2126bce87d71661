//! Handler for the URL shortening endpoint.

use axum::{Json, extract::State};
use validator::Validate;

use crate::api::dto::shorten::{ShortenRequest, ShortenResponse};
use crate::api::extract::JsonOrForm;
use crate::application::services::ValidationError;
use crate::error::AppError;
use crate::state::AppState;

/// Returns the short code for a URL, allocating one on first sight.
///
/// # Endpoint
///
/// `POST /api/shorturl`
///
/// # Request Body
///
/// Form-encoded (`url=https://www.example.com`) or JSON:
///
/// ```json
/// { "url": "https://www.example.com" }
/// ```
///
/// # Response
///
/// ```json
/// { "original_url": "https://www.example.com/", "short_url": 1 }
/// ```
///
/// # Errors
///
/// A rejected or missing URL yields `{ "error": "invalid url" }` with
/// status 200. An undecodable body yields 400.
pub async fn shorten_handler(
    State(state): State<AppState>,
    JsonOrForm(payload): JsonOrForm<ShortenRequest>,
) -> Result<Json<ShortenResponse>, AppError> {
    payload
        .validate()
        .map_err(|e| AppError::InvalidUrl(ValidationError::MalformedInput(e.to_string())))?;

    let candidate = payload.url.unwrap_or_default();

    let record = state.link_service.shorten(&candidate).await?;

    Ok(Json(record.into()))
}
