//! DTOs for the URL shortening endpoint.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use validator::Validate;

use crate::domain::entities::{ShortCode, ShortUrl};

/// Longest URL accepted for shortening.
pub const MAX_URL_LENGTH: u64 = 2048;

/// Request to shorten a URL.
///
/// Accepted as either `application/x-www-form-urlencoded` or JSON. A missing
/// `url` field is not a decoding error; it is reported as an invalid URL.
/// Non-string JSON values are kept in their textual form and fail validation.
#[derive(Debug, Default, Deserialize, Validate)]
pub struct ShortenRequest {
    #[serde(default, deserialize_with = "any_value_as_string")]
    #[validate(length(max = MAX_URL_LENGTH))]
    pub url: Option<String>,
}

fn any_value_as_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Value>::deserialize(deserializer)?.map(|value| match value {
        Value::String(s) => s,
        other => other.to_string(),
    }))
}

/// Successful shortening result.
///
/// `original_url` is the canonical form, which may differ from the input
/// (for example a trailing `/` is added to bare hosts).
#[derive(Debug, Serialize)]
pub struct ShortenResponse {
    pub original_url: String,
    pub short_url: ShortCode,
}

impl From<ShortUrl> for ShortenResponse {
    fn from(record: ShortUrl) -> Self {
        Self {
            original_url: record.original_url.into_string(),
            short_url: record.code,
        }
    }
}
