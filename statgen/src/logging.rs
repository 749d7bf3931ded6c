use std::env;

use tracing_subscriber::EnvFilter;

/// Log to stderr; stdout carries the generated source.
pub(crate) fn init(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::builder().parse_lossy(
        env::var(EnvFilter::DEFAULT_ENV).unwrap_or_else(|_| default.to_string()),
    );

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .compact()
        .try_init()
        .ok();
}
