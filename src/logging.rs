//! Logging setup for the urlutils binary.

use anyhow::{anyhow, Result};
use tracing_subscriber::EnvFilter;

/// Initialize structured logging on stderr.
///
/// stdout carries the transformed text, so log lines never go there. The
/// filter comes from `RUST_LOG` when set, otherwise `warn`, or `debug` for
/// this crate when `verbose` is on.
pub fn init_logging(verbose: bool) -> Result<()> {
    let default_filter = if verbose { "warn,urlutils=debug" } else { "warn" };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .map_err(|e| anyhow!("failed to initialize logging: {}", e))?;

    tracing::debug!("urlutils logging initialized");

    Ok(())
}
