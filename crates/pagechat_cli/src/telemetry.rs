//! Tracing setup for the CLI.

use tracing_subscriber::EnvFilter;

/// Initialize the fmt subscriber on stderr.
///
/// `RUST_LOG` wins when set; otherwise `--verbose` raises the default
/// level from warn to debug.
pub fn init(verbose: bool) {
    let default_directive = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}
