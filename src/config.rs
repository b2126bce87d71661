//! Application configuration loaded from environment variables.
//!
//! Configuration is loaded once at startup and validated before the server starts.
//! Command-line flags (see `main.rs`) override the environment.
//!
//! ## Variables
//!
//! - `LISTEN` - Bind address (default: `0.0.0.0:3000`)
//! - `PORT` - Port used with `0.0.0.0` when `LISTEN` is not set
//! - `RUST_LOG` - Log level (default: `info`)
//! - `LOG_FORMAT` - Log format: `text` or `json` (default: `text`)
//! - `VALIDATION_MODE` - `syntax` or `resolve` (default: `syntax`)
//! - `DNS_TIMEOUT_MS` - Lookup timeout for `resolve` mode (default: 2000)
//! - `STATIC_DIR` - Directory served under `/public` (default: `public`)

use anyhow::{Context, Result};
use std::env;
use std::time::Duration;

use crate::application::services::ValidationMode;

/// Service configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub listen_addr: String,
    pub log_level: String,
    pub log_format: String,
    pub validation_mode: ValidationMode,
    /// Upper bound on a single DNS lookup in [`ValidationMode::SyntaxAndResolve`].
    /// Has no effect in syntax-only mode.
    pub dns_timeout_ms: u64,
    pub static_dir: String,
}

impl Config {
    /// Loads configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if `VALIDATION_MODE` names an unknown mode or
    /// `DNS_TIMEOUT_MS` is not an integer.
    pub fn from_env() -> Result<Self> {
        let listen_addr = Self::load_listen_addr();
        let log_level = env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
        let log_format = env::var("LOG_FORMAT").unwrap_or_else(|_| "text".to_string());

        let validation_mode = match env::var("VALIDATION_MODE") {
            Ok(raw) => raw
                .parse::<ValidationMode>()
                .context("Invalid VALIDATION_MODE")?,
            Err(_) => ValidationMode::SyntaxOnly,
        };

        let dns_timeout_ms = match env::var("DNS_TIMEOUT_MS") {
            Ok(raw) => raw
                .parse::<u64>()
                .with_context(|| format!("DNS_TIMEOUT_MS must be an integer, got '{raw}'"))?,
            Err(_) => 2000,
        };

        let static_dir = env::var("STATIC_DIR").unwrap_or_else(|_| "public".to_string());

        Ok(Self {
            listen_addr,
            log_level,
            log_format,
            validation_mode,
            dns_timeout_ms,
            static_dir,
        })
    }

    /// Resolves the bind address.
    ///
    /// Priority:
    /// 1. `LISTEN` environment variable
    /// 2. `0.0.0.0:$PORT`
    /// 3. `0.0.0.0:3000`
    fn load_listen_addr() -> String {
        if let Ok(listen) = env::var("LISTEN") {
            return listen;
        }

        let port = env::var("PORT").unwrap_or_else(|_| "3000".to_string());
        format!("0.0.0.0:{}", port)
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `log_format` is not `text` or `json`
    /// - `listen_addr` is not `host:port`
    /// - `dns_timeout_ms` is outside 1..=30000
    pub fn validate(&self) -> Result<()> {
        if self.log_format != "text" && self.log_format != "json" {
            anyhow::bail!(
                "LOG_FORMAT must be 'text' or 'json', got '{}'",
                self.log_format
            );
        }

        if !self.listen_addr.contains(':') {
            anyhow::bail!(
                "LISTEN must be in format 'host:port', got '{}'",
                self.listen_addr
            );
        }

        if self.dns_timeout_ms == 0 || self.dns_timeout_ms > 30_000 {
            anyhow::bail!(
                "DNS_TIMEOUT_MS must be between 1 and 30000, got {}",
                self.dns_timeout_ms
            );
        }

        Ok(())
    }

    pub fn dns_timeout(&self) -> Duration {
        Duration::from_millis(self.dns_timeout_ms)
    }

    /// Prints configuration summary.
    pub fn print_summary(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Listen address: {}", self.listen_addr);
        tracing::info!("  Log level: {}", self.log_level);
        tracing::info!("  Log format: {}", self.log_format);
        match self.validation_mode {
            ValidationMode::SyntaxOnly => tracing::info!("  Validation: syntax only"),
            ValidationMode::SyntaxAndResolve => tracing::info!(
                "  Validation: syntax + DNS (timeout {}ms)",
                self.dns_timeout_ms
            ),
        }
        tracing::info!("  Static dir: {}", self.static_dir);
    }
}

/// Loads and validates configuration from environment variables.
///
/// # Errors
///
/// Returns an error if a variable cannot be parsed or validation fails.
///
/// # Note
///
/// This function expects environment variables to be already loaded
/// (e.g., via `dotenvy::dotenv()` in `main.rs`).
pub fn load_from_env() -> Result<Config> {
    let config = Config::from_env()?;
    config.validate()?;
    Ok(config)
}
