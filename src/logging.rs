//! Diagnostic output for the command-line binary.
//!
//! The library only emits `tracing` events; installing a subscriber is left
//! to the binary (or to an embedding application).

use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

pub const DEFAULT_LOG_FILTER: &str = "codegather=warn";
pub const VERBOSE_LOG_FILTER: &str = "codegather=debug";

/// Filter directives for the stderr logger. `--verbose` wins over `RUST_LOG`.
pub fn log_filter(verbose: bool, env_filter: Option<&str>) -> String {
    if verbose {
        return VERBOSE_LOG_FILTER.to_string();
    }
    match env_filter.map(str::trim) {
        Some(directives) if !directives.is_empty() => directives.to_string(),
        _ => DEFAULT_LOG_FILTER.to_string(),
    }
}

/// Install a stderr `fmt` subscriber. A second call is a no-op.
pub fn init_logging(verbose: bool) {
    let env = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    let filter = EnvFilter::try_new(log_filter(verbose, env.as_deref()))
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false),
        )
        .try_init();
}
