//! URL shortener service entry point.
//!
//! # Usage
//!
//! ```bash
//! # Defaults: 0.0.0.0:3000, syntax-only validation
//! cargo run
//!
//! # Require submitted hosts to resolve, log as JSON
//! cargo run -- --validation-mode resolve --log-format json
//! ```
//!
//! Flags override the environment variables documented in [`shorturl::config`].

use anyhow::Result;
use clap::Parser;
use shorturl::application::services::ValidationMode;
use shorturl::config::Config;
use shorturl::server;
use tracing_subscriber::EnvFilter;

/// In-memory URL shortener microservice.
#[derive(Parser)]
#[command(name = "shorturl")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Bind address, e.g. `127.0.0.1:8080` (overrides LISTEN / PORT)
    #[arg(long)]
    listen: Option<String>,

    /// `syntax` or `resolve` (overrides VALIDATION_MODE)
    #[arg(long)]
    validation_mode: Option<ValidationMode>,

    /// `text` or `json` (overrides LOG_FORMAT)
    #[arg(long)]
    log_format: Option<String>,
}

impl Cli {
    fn apply(self, config: &mut Config) {
        if let Some(listen) = self.listen {
            config.listen_addr = listen;
        }
        if let Some(mode) = self.validation_mode {
            config.validation_mode = mode;
        }
        if let Some(format) = self.log_format {
            config.log_format = format;
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let mut config = Config::from_env()?;
    cli.apply(&mut config);
    config.validate()?;

    init_tracing(&config);
    config.print_summary();

    server::run(config).await
}

fn init_tracing(config: &Config) {
    let filter = EnvFilter::try_new(&config.log_level).unwrap_or_else(|_| EnvFilter::new("info"));

    if config.log_format == "json" {
        tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }
}
