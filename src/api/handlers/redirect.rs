//! Handler for short URL redirect.

use axum::{
    extract::{Path, State},
    http::{StatusCode, header},
    response::IntoResponse,
};
use tracing::debug;

use crate::error::AppError;
use crate::state::AppState;

/// Redirects a short code to its original URL.
///
/// # Endpoint
///
/// `GET /api/shorturl/{id}`
///
/// The segment is taken as a raw string so that non-numeric input gets the
/// same JSON error as an unknown code instead of a path rejection.
///
/// # Response
///
/// `302 Found` with `Location` set to the stored URL.
///
/// # Errors
///
/// Returns 404 with `{ "error": "No short URL found for the given input" }`
/// for unknown, zero, negative, or non-numeric codes.
pub async fn redirect_handler(
    Path(id): Path<String>,
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let record = state.link_service.resolve(&id).await?;

    debug!("Redirecting {} to {}", record.code, record.original_url);

    Ok((
        StatusCode::FOUND,
        [(header::LOCATION, record.original_url.into_string())],
    ))
}
