//! Request-level error type and its JSON rendering.
//!
//! Every error is rendered as `{ "error": <message> }`. Invalid URLs are
//! reported with status 200 because existing clients read the body, not the
//! status, to detect rejection.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;

use crate::application::services::ValidationError;

#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
}

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("invalid url")]
    InvalidUrl(#[source] ValidationError),

    #[error("No short URL found for the given input")]
    UnknownCode,

    #[error("malformed request body")]
    MalformedBody(String),

    #[error("internal error")]
    Internal(String),
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::InvalidUrl(_) => StatusCode::OK,
            AppError::UnknownCode => StatusCode::NOT_FOUND,
            AppError::MalformedBody(_) => StatusCode::BAD_REQUEST,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match &self {
            AppError::MalformedBody(reason) => tracing::debug!("Malformed body: {}", reason),
            AppError::Internal(reason) => tracing::error!("Internal error: {}", reason),
            _ => {}
        }

        let body = ErrorBody {
            error: self.to_string(),
        };

        (self.status(), Json(body)).into_response()
    }
}
