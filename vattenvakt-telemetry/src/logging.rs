//! Structured logging with tracing.

use tracing_subscriber::{fmt, EnvFilter};

#[derive(Clone)]
pub struct EventLogger;

impl EventLogger {
    /// Installs the global subscriber. `RUST_LOG` wins over the configured
    /// default level.
    ///
    /// Calling this twice panics (tracing allows one global subscriber);
    /// the CLI calls it exactly once before anything else logs.
    pub fn init(default_level: &str) {
        fmt()
            .with_env_filter(
                EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| EnvFilter::new(default_level)),
            )
            .with_thread_names(true)
            .init()
    }
}
