// ABOUTME: Tracing subscriber setup for the CLI
// ABOUTME: RUST_LOG filter with a quiet default; logs go to stderr

use agentdeck_config::constants::RUST_LOG;
use tracing_subscriber::EnvFilter;

/// Initialize tracing subscriber for structured logging.
/// `RUST_LOG` wins over `verbose` when it is set.
pub fn init(verbose: bool) {
    let default_filter = if verbose { "info" } else { "warn" };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_env(RUST_LOG).unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .with_writer(std::io::stderr)
        .with_target(false) // Don't show module paths in logs
        .compact()
        .init();
}
