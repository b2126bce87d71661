//! Short URL entity and its value types.

use chrono::{DateTime, Utc};
use serde::Serialize;
use std::fmt;

/// Identifier assigned to a registered URL.
///
/// Codes start at 1 and are never zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct ShortCode(u64);

impl ShortCode {
    /// The first code a fresh registry hands out.
    pub const FIRST: ShortCode = ShortCode(1);

    /// Wraps a raw value, rejecting zero.
    pub fn new(value: u64) -> Option<Self> {
        (value > 0).then_some(Self(value))
    }

    /// Parses a path segment into a code.
    ///
    /// Only plain decimal digits are accepted. Signs, whitespace, zero, and
    /// values that overflow `u64` all yield `None`, so callers cannot tell a
    /// malformed code from an unknown one.
    pub fn parse(raw: &str) -> Option<Self> {
        if raw.is_empty() || !raw.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }

        raw.parse::<u64>().ok().and_then(Self::new)
    }

    /// Returns the raw integer value.
    pub fn get(self) -> u64 {
        self.0
    }

    /// Returns the code that follows this one.
    ///
    /// Returns `None` once the code space is exhausted.
    pub fn next(self) -> Option<Self> {
        self.0.checked_add(1).map(Self)
    }
}

impl fmt::Display for ShortCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A canonical absolute HTTP or HTTPS URL.
///
/// Built by [`crate::application::services::UrlValidator`]; the inner string
/// is the parser's serialization and doubles as the deduplication key.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct ValidUrl(String);

impl ValidUrl {
    pub(crate) fn from_canonical(canonical: String) -> Self {
        Self(canonical)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for ValidUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for ValidUrl {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// A registered mapping between a short code and its original URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShortUrl {
    pub code: ShortCode,
    pub original_url: ValidUrl,
    pub created_at: DateTime<Utc>,
}

impl ShortUrl {
    /// Creates a new record stamped with the current time.
    pub fn new(code: ShortCode, original_url: ValidUrl) -> Self {
        Self {
            code,
            original_url,
            created_at: Utc::now(),
        }
    }
}
