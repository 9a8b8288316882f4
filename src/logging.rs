//! Structured logging setup
//!
//! The library only emits `tracing` events; the binary decides where they
//! go. Console output goes to stderr so it never mixes with rendered
//! output on stdout.
//!
//! Configure via the RUST_LOG environment variable:
//! - `RUST_LOG=warn` - every diagnostic as it is found
//! - `RUST_LOG=debug` - sourced files, skipped lines, flattened blocks
//! - `RUST_LOG=hyprkeys::core::source=debug` - module-level filtering

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

/// Level used when RUST_LOG is unset; diagnostics are printed by the CLI itself
pub const DEFAULT_FILTER: &str = "error";

/// Installs the global subscriber. Safe to call more than once.
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let console_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_line_number(true)
        .with_filter(filter);

    let _ = tracing_subscriber::registry().with(console_layer).try_init();
}
