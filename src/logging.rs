// src/logging.rs
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Installs the stderr subscriber. `RUST_LOG` takes precedence over the flags.
pub fn setup_logging(verbose: bool, quiet: bool) {
    let filter = if quiet {
        "error"
    } else if verbose {
        "debug"
    } else {
        "warn"
    };

    let _ = tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)))
        .try_init();
}
