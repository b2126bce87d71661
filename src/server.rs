//! HTTP server initialization and runtime setup.
//!
//! Builds the validator and registry, wires them into [`AppState`], and runs
//! the Axum server until a shutdown signal arrives.

use crate::application::services::{UrlValidator, ValidationMode};
use crate::config::Config;
use crate::infrastructure::dns::SystemResolver;
use crate::routes::app_router;
use crate::state::AppState;

use anyhow::{Context, Result};
use axum::ServiceExt;
use axum::extract::Request;
use std::net::SocketAddr;
use std::sync::Arc;

/// Builds the URL validator selected by `config`.
pub fn build_validator(config: &Config) -> UrlValidator {
    match config.validation_mode {
        ValidationMode::SyntaxOnly => UrlValidator::syntax_only(),
        ValidationMode::SyntaxAndResolve => {
            UrlValidator::with_resolver(Arc::new(SystemResolver::new(config.dns_timeout())))
        }
    }
}

/// Runs the HTTP server with the given configuration.
///
/// Initializes:
/// - URL validator (syntax-only or DNS-backed)
/// - Empty in-memory registry
/// - Axum HTTP server with graceful shutdown
///
/// # Errors
///
/// Returns an error if:
/// - The listen address does not parse
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let state = AppState::with_validator(build_validator(&config));
    tracing::info!("Registry initialized ({} validation)", config.validation_mode);

    let app = app_router(state, &config.static_dir);

    let addr: SocketAddr = config
        .listen_addr
        .parse()
        .with_context(|| format!("Invalid listen address '{}'", config.listen_addr))?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(listener, ServiceExt::<Request>::into_make_service(app))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped; registry discarded");

    Ok(())
}

/// Completes on Ctrl-C or, on Unix, SIGTERM.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl-C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to listen for SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(mode: ValidationMode) -> Config {
        Config {
            listen_addr: "127.0.0.1:0".to_string(),
            log_level: "info".to_string(),
            log_format: "text".to_string(),
            validation_mode: mode,
            dns_timeout_ms: 100,
            static_dir: "public".to_string(),
        }
    }

    #[test]
    fn test_build_validator_follows_mode() {
        assert_eq!(
            build_validator(&config(ValidationMode::SyntaxOnly)).mode(),
            ValidationMode::SyntaxOnly
        );
        assert_eq!(
            build_validator(&config(ValidationMode::SyntaxAndResolve)).mode(),
            ValidationMode::SyntaxAndResolve
        );
    }
}
