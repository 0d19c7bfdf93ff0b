//! Tracing setup for the backlog CLI.
//!
//! Logs go to stderr so `--output json` on stdout stays parseable.
//!
//!   backlog -v sprint 13              # debug events from the library
//!   RUST_LOG=backlog=trace backlog ls # fine-grained control

use anyhow::{anyhow, Result};
use tracing_subscriber::EnvFilter;

/// Default filter when `RUST_LOG` is unset.
const DEFAULT_FILTER: &str = "warn";

/// Tracing configuration options.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingConfig {
    /// Log at debug level unless `RUST_LOG` says otherwise.
    pub verbose: bool,
}

impl TracingConfig {
    fn filter(self) -> EnvFilter {
        let fallback = if self.verbose { "debug" } else { DEFAULT_FILTER };
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback))
    }
}

/// Install the global stderr subscriber.
///
/// # Errors
///
/// Returns an error if a global subscriber is already installed.
pub fn init_tracing(config: TracingConfig) -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(config.filter())
        .with_writer(std::io::stderr)
        .with_target(config.verbose)
        .compact()
        .try_init()
        .map_err(|err| anyhow!(err))
}
