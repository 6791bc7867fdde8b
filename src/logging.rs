//! # Logging
//!
//! `tracing` subscriber setup for the binary. Output goes to stderr so stdout
//! carries only the report. Nothing is logged inside a measured window.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Default filter when `RUST_LOG` is unset.
pub const DEFAULT_FILTER: &str = "cipherbench_rs=info,cipherbench=info";

/// Install the global subscriber. Honours `RUST_LOG`.
///
/// # Errors
///
/// Fails if a global subscriber is already set (e.g. called twice).
pub fn init_tracing() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .compact(),
        )
        .try_init()?;

    tracing::debug!("logging initialized");
    Ok(())
}
