//! Logging setup
//!
//! Diagnostics go to stderr through `tracing-subscriber`. The filter comes
//! from `RUST_LOG` when set, otherwise from the `-v` count, otherwise from
//! the configured level.

use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

/// Filter directive for a `-v` count, falling back to `configured` at zero.
pub fn filter_directive(verbose: u8, configured: &str) -> String {
    match verbose {
        0 => configured.to_string(),
        1 => "info".to_string(),
        2 => "debug".to_string(),
        _ => "trace".to_string(),
    }
}

/// Install the global subscriber. Later calls are ignored.
pub fn init(verbose: u8, configured: &str) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(filter_directive(verbose, configured)))
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .try_init();
}
