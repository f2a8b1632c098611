//! luxmeter: ambient light meter for a networked lux sensor.
//!
//! Run with:  `RUST_LOG=info luxmeter` (window) or `luxmeter --headless` (log only)

use anyhow::Result;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Structured logging; RUST_LOG controls verbosity (default: info).
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    tracing::info!("luxmeter v{} starting", env!("CARGO_PKG_VERSION"));

    if std::env::args().skip(1).any(|arg| arg == "--headless") {
        return lux_app::run_headless().map_err(Into::into);
    }

    lux_app::run().map_err(Into::into)
}
