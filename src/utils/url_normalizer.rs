//! URL parsing and canonicalization.
//!
//! Produces the single string form used both as the registry key and as the
//! redirect target.

use regex::Regex;
use std::sync::LazyLock;
use url::Url;

/// DNS-style hostname: two or more labels separated by dots, optional root dot.
static HOSTNAME_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?:[a-z0-9_-]+\.)+[a-z0-9_-]+\.?$").expect("hostname regex is valid")
});

/// Errors that can occur during URL normalization.
#[derive(Debug, thiserror::Error)]
pub enum UrlNormalizationError {
    #[error("Invalid URL format: {0}")]
    InvalidFormat(String),

    #[error("Only HTTP and HTTPS protocols are allowed")]
    UnsupportedProtocol,

    #[error("Host does not look like a domain name: {0:?}")]
    InvalidHost(String),
}

/// Parses `input` and returns its canonical form.
///
/// # Normalization Rules
///
/// 1. **Whitespace**: Leading and trailing whitespace is trimmed
/// 2. **Protocol**: Only HTTP and HTTPS are allowed, compared case-insensitively
/// 3. **Hostname**: Lowercased and IDNA-encoded by the parser; must contain a dot
/// 4. **Default ports**: Removed (80 for HTTP, 443 for HTTPS)
/// 5. **Path**: An empty path becomes `/`; otherwise preserved
/// 6. **Query and fragment**: Preserved as-is
///
/// # Errors
///
/// Returns [`UrlNormalizationError::InvalidFormat`] for malformed or relative URLs.
/// Returns [`UrlNormalizationError::UnsupportedProtocol`] for non-HTTP(S) schemes.
/// Returns [`UrlNormalizationError::InvalidHost`] when the host is missing or
/// not domain-shaped (`localhost`, IPv6 literals, empty labels).
///
/// # Examples
///
/// ```
/// use shorturl::utils::url_normalizer::normalize_url;
///
/// assert_eq!(
///     normalize_url("HTTPS://WWW.Example.COM:443").unwrap().as_str(),
///     "https://www.example.com/"
/// );
/// assert!(normalize_url("ftp://example.com").is_err());
/// ```
pub fn normalize_url(input: &str) -> Result<Url, UrlNormalizationError> {
    let url = Url::parse(input.trim())
        .map_err(|e| UrlNormalizationError::InvalidFormat(e.to_string()))?;

    match url.scheme() {
        "http" | "https" => {}
        _ => return Err(UrlNormalizationError::UnsupportedProtocol),
    }

    let host = url.host_str().unwrap_or_default();
    if !HOSTNAME_REGEX.is_match(host) {
        return Err(UrlNormalizationError::InvalidHost(host.to_string()));
    }

    Ok(url)
}
