//! Logging Config

use std::time::Duration;

use clap::{Args, ValueEnum};

/// Log output format.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    /// One line per event, for terminals.
    Compact,

    /// One JSON object per event, for log shippers.
    Json,
}

/// Logging and request logging settings.
#[derive(Debug, Args)]
pub struct LoggingConfig {
    /// Default log filter, e.g. `info` or `checkout_app=debug`. `RUST_LOG` takes precedence.
    #[arg(short = 'l', long = "log-level", env = "RUST_LOG", default_value = "info")]
    pub level: String,

    /// Log output format
    #[arg(long = "log-format", env = "LOG_FORMAT", value_enum, default_value_t = LogFormat::Compact)]
    pub format: LogFormat,

    /// Requests slower than this many milliseconds are logged as warnings
    #[arg(long, env = "SLOW_REQUEST_THRESHOLD_MS", default_value_t = 1_000)]
    pub slow_request_threshold_ms: u64,
}

impl LoggingConfig {
    /// Filter directives used when `RUST_LOG` is not set.
    ///
    /// Transport crates are held at `warn` so request logs are not drowned out.
    #[must_use]
    pub fn filter_directives(&self) -> String {
        format!("{},hyper=warn,salvo_core=warn", self.level)
    }

    #[must_use]
    pub fn slow_request_threshold(&self) -> Duration {
        Duration::from_millis(self.slow_request_threshold_ms)
    }
}
