//! Logging initialization

use tracing_subscriber::EnvFilter;

/// Default filter when `RUST_LOG` is not set
pub fn default_filter(debug: bool) -> &'static str {
    if debug { "debug" } else { "warn" }
}

/// Initialize logging based on debug flag
///
/// Logs go to stderr so that query output on stdout stays clean for
/// piping. `RUST_LOG` takes precedence over the debug flag.
pub fn init_logging(debug: bool) {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(default_filter(debug))),
        )
        .with_target(debug)
        .with_file(debug)
        .with_line_number(debug)
        .init();
}
