//! Logging setup.
//!
//! Diagnostics go to stderr through `tracing`; command output stays on
//! stdout. `RUST_LOG` overrides the default level.

use tracing_subscriber::EnvFilter;

/// Install the global subscriber. Later calls are no-ops.
pub fn init_logging(verbose: bool) {
    let default_directive = if verbose {
        "warn,summit_register=debug,summit_core=debug"
    } else {
        "warn"
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directive));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
