//! Tracing subscriber setup.
//!
//! Logs go to stderr; stdout carries the rendered document.

use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Registry};

/// Default filter directive for the given verbosity.
#[must_use]
pub const fn default_directive(verbose: bool) -> &'static str {
    if verbose { "debug" } else { "warn" }
}

/// Installs the global subscriber. `RUST_LOG` takes precedence over the
/// verbosity flag. Calling it twice is a no-op.
pub fn init(verbose: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbose)));

    let installed = Registry::default()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false),
        )
        .with(filter)
        .try_init();

    // Only fails when a subscriber is already set, which then receives this.
    if let Err(err) = installed {
        tracing::debug!(error = %err, "Keeping existing tracing subscriber");
    }
}
