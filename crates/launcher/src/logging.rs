//! Logging setup
//!
//! `RUST_LOG` overrides the default filter; `--log-format` / `CIRCLES_LOG_FORMAT`
//! picks between human output and JSON lines.
//!
//! # Example
//!
//! ```text
//! RUST_LOG=circles_launcher=debug CIRCLES_LOG_FORMAT=json ./start-server
//! ```

use anyhow::Result;
use clap::ValueEnum;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Filter used when RUST_LOG is unset: library crates plus this binary
const DEFAULT_LOG_FILTER: &str = "circles_launcher=info,start_server=info";

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    /// Development: pretty formatting with colors
    Pretty,
    /// Machine-readable JSON lines
    Json,
}

/// Install the global tracing subscriber
pub fn init_logging(format: LogFormat) -> Result<()> {
    let env_filter =
        EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new(DEFAULT_LOG_FILTER))?;

    match format {
        LogFormat::Json => tracing_subscriber::registry()
            .with(env_filter)
            .with(fmt::layer().json())
            .try_init()?,
        LogFormat::Pretty => tracing_subscriber::registry()
            .with(env_filter)
            .with(fmt::layer().pretty())
            .try_init()?,
    }

    Ok(())
}
