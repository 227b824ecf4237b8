//! dials: live metric dashboard widgets (donut, gauge, bar, line).
//!
//! Run with:  `RUST_LOG=info dials`

use anyhow::Result;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Structured logging; RUST_LOG controls verbosity (default: info).
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    tracing::info!("dials v{} starting", env!("CARGO_PKG_VERSION"));

    dial_dashboard::run().map_err(Into::into)
}
