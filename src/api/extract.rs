//! Body extractor accepting either JSON or URL-encoded forms.

use axum::{
    Form, Json,
    body::Bytes,
    extract::{FromRequest, Request},
    http::header,
};
use serde::de::DeserializeOwned;

use crate::error::AppError;

/// Deserializes the request body as JSON or as a URL-encoded form,
/// chosen by `Content-Type`.
///
/// HTML forms post `application/x-www-form-urlencoded`; API clients usually
/// send JSON. A missing body, an empty JSON body, or any other content type
/// yields `T::default()`. Only a JSON or form body that fails to decode is
/// rejected as [`AppError::MalformedBody`].
///
/// # Example
///
/// ```rust,ignore
/// async fn handler(JsonOrForm(payload): JsonOrForm<ShortenRequest>) { /* ... */ }
/// ```
#[derive(Debug)]
pub struct JsonOrForm<T>(pub T);

impl<S, T> FromRequest<S> for JsonOrForm<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Default,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let content_type = req
            .headers()
            .get(header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(|v| v.to_ascii_lowercase())
            .unwrap_or_default();

        if is_json(&content_type) {
            let bytes = Bytes::from_request(req, state)
                .await
                .map_err(|e| AppError::MalformedBody(e.body_text()))?;
            if bytes.iter().all(u8::is_ascii_whitespace) {
                return Ok(Self(T::default()));
            }
            let Json(payload) =
                Json::<T>::from_bytes(&bytes).map_err(|e| AppError::MalformedBody(e.body_text()))?;
            return Ok(Self(payload));
        }

        if content_type.starts_with("application/x-www-form-urlencoded") {
            let Form(payload) = Form::<T>::from_request(req, state)
                .await
                .map_err(|e| AppError::MalformedBody(e.body_text()))?;
            return Ok(Self(payload));
        }

        tracing::debug!("Ignoring body with content type {:?}", content_type);
        Ok(Self(T::default()))
    }
}

fn is_json(content_type: &str) -> bool {
    let essence = content_type.split(';').next().unwrap_or_default().trim();
    essence == "application/json" || essence.ends_with("+json")
}
