//! Structured logging setup.
//!
//! Logs go to stderr so stdout carries only calculation output. `RUST_LOG`
//! takes precedence over the configured filter.

use crate::config::{LogFormat, LoggingConfig};
use anyhow::{Result, anyhow};
use tracing_subscriber::EnvFilter;

pub fn init_tracing(config: &LoggingConfig, verbose: bool) -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if verbose {
            EnvFilter::new("billsplit=debug")
        } else {
            EnvFilter::new(&config.filter)
        }
    });

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr);

    match config.format {
        LogFormat::Json => builder.json().try_init(),
        LogFormat::Text => builder.try_init(),
    }
    .map_err(|e| anyhow!("failed to initialise logging: {e}"))
}
