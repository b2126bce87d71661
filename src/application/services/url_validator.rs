//! Submitted-URL validation with a construction-time strategy.

use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use crate::domain::entities::ValidUrl;
use crate::infrastructure::dns::{HostResolver, ResolveError};
use crate::utils::url_normalizer::{UrlNormalizationError, normalize_url};
use tracing::debug;

/// Reasons a candidate URL is rejected.
#[derive(Debug, thiserror::Error)]
pub enum ValidationError {
    #[error("malformed URL: {0}")]
    MalformedInput(String),

    #[error("unsupported URL scheme")]
    UnsupportedScheme,

    #[error("host is not a domain name: {0:?}")]
    InvalidHost(String),

    #[error("host {host:?} does not resolve: {source}")]
    UnresolvableHost {
        host: String,
        #[source]
        source: ResolveError,
    },
}

impl From<UrlNormalizationError> for ValidationError {
    fn from(err: UrlNormalizationError) -> Self {
        match err {
            UrlNormalizationError::InvalidFormat(reason) => Self::MalformedInput(reason),
            UrlNormalizationError::UnsupportedProtocol => Self::UnsupportedScheme,
            UrlNormalizationError::InvalidHost(host) => Self::InvalidHost(host),
        }
    }
}

/// Which checks a [`UrlValidator`] performs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationMode {
    /// Parse, scheme, and hostname-shape checks only.
    SyntaxOnly,
    /// Syntax checks followed by one DNS lookup of the host.
    SyntaxAndResolve,
}

impl ValidationMode {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::SyntaxOnly => "syntax",
            Self::SyntaxAndResolve => "resolve",
        }
    }
}

impl fmt::Display for ValidationMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unknown validation mode name.
#[derive(Debug, thiserror::Error)]
#[error("unknown validation mode {0:?} (expected 'syntax' or 'resolve')")]
pub struct ParseValidationModeError(String);

impl FromStr for ValidationMode {
    type Err = ParseValidationModeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "syntax" | "syntax-only" => Ok(Self::SyntaxOnly),
            "resolve" | "dns" | "syntax-and-resolve" => Ok(Self::SyntaxAndResolve),
            _ => Err(ParseValidationModeError(s.to_string())),
        }
    }
}

enum Strategy {
    SyntaxOnly,
    SyntaxAndResolve(Arc<dyn HostResolver>),
}

/// Decides whether untrusted input is an acceptable absolute HTTP(S) URL.
///
/// On success the canonical form from [`normalize_url`] is returned, so two
/// spellings of the same address produce the same [`ValidUrl`].
///
/// Validation has no side effects. In [`ValidationMode::SyntaxAndResolve`]
/// the resolver is called exactly once per candidate and its failure is final.
pub struct UrlValidator {
    strategy: Strategy,
}

impl UrlValidator {
    /// Creates a validator that only checks syntax.
    pub fn syntax_only() -> Self {
        Self {
            strategy: Strategy::SyntaxOnly,
        }
    }

    /// Creates a validator that also requires the host to resolve.
    pub fn with_resolver(resolver: Arc<dyn HostResolver>) -> Self {
        Self {
            strategy: Strategy::SyntaxAndResolve(resolver),
        }
    }

    pub fn mode(&self) -> ValidationMode {
        match self.strategy {
            Strategy::SyntaxOnly => ValidationMode::SyntaxOnly,
            Strategy::SyntaxAndResolve(_) => ValidationMode::SyntaxAndResolve,
        }
    }

    /// Validates and canonicalizes `candidate`.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::MalformedInput`] if the input does not parse as an absolute URL.
    /// Returns [`ValidationError::UnsupportedScheme`] for anything but `http`/`https`.
    /// Returns [`ValidationError::InvalidHost`] if the host is not domain-shaped.
    /// Returns [`ValidationError::UnresolvableHost`] if strict mode cannot resolve the host.
    pub async fn validate(&self, candidate: &str) -> Result<ValidUrl, ValidationError> {
        let url = normalize_url(candidate)?;

        if let Strategy::SyntaxAndResolve(resolver) = &self.strategy {
            let host = url.host_str().unwrap_or_default();

            resolver
                .resolve(host)
                .await
                .map_err(|source| ValidationError::UnresolvableHost {
                    host: host.to_string(),
                    source,
                })?;

            debug!("Host {} resolved", host);
        }

        Ok(ValidUrl::from_canonical(url.into()))
    }
}
