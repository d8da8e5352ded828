//! Diagnostic logging for the CLI.
//!
//! Logs go to stderr so they never mix with the report on stdout. `RUST_LOG`
//! wins when set; otherwise `-v` picks the level.

use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Map the `-v` count to a default filter directive.
fn default_directive(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    }
}

pub fn init(verbose: u8) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbose)));

    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false),
        )
        .with(filter)
        .init();
}
