// SPDX-License-Identifier: MPL-2.0
//! Logging system initialization.
//!
//! Log records go to stderr. The level defaults to `info` and can be
//! changed with the `RUST_LOG` environment variable, for example
//! `RUST_LOG=plate_lens=debug`.

use crate::error::{Error, Result};
use tracing_subscriber::{fmt, EnvFilter};

/// Filter used when `RUST_LOG` is unset or invalid.
pub const DEFAULT_FILTER: &str = "info";

/// Builds the env filter, falling back to [`DEFAULT_FILTER`].
fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

/// Installs the global tracing subscriber.
///
/// # Errors
///
/// Returns [`Error::Config`] if a global subscriber is already installed.
pub fn init() -> Result<()> {
    let subscriber = fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(env_filter())
        .with_target(true)
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .map_err(|e| Error::Config(format!("logging: {e}")))?;

    tracing::info!("PlateLens v{} started", env!("CARGO_PKG_VERSION"));
    Ok(())
}
