//! Logging setup for the pipeline binaries.
//!
//! Filterable via `RUST_LOG` (defaults to `info`). Everything is written to
//! stderr: stdout carries nothing but the enriched topology document.

use tracing_subscriber::EnvFilter;

/// Installs the global stderr subscriber. Call once, before the pipeline runs.
pub fn init() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();
}
