//! Tracing subscriber setup.
//!
//! Events go to stderr so that stdout stays free for cursor output.
//! `RUST_LOG` wins over the programmatic level when set.

use tracing_subscriber::{fmt, EnvFilter};

/// Log level for the default filter
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LogLevel {
    /// Reset triggers and step events are hidden
    #[default]
    Warn,
    /// Reset triggers and every step
    Info,
    /// Adds registry and dynamic-input events
    Debug,
    /// Everything
    Trace,
}

impl LogLevel {
    fn directive(&self) -> &'static str {
        match self {
            LogLevel::Warn => "warn",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
            LogLevel::Trace => "trace",
        }
    }
}

impl From<u8> for LogLevel {
    /// 0 = warn, 1 = info, 2 = debug, 3+ = trace
    fn from(verbosity: u8) -> Self {
        match verbosity {
            0 => LogLevel::Warn,
            1 => LogLevel::Info,
            2 => LogLevel::Debug,
            _ => LogLevel::Trace,
        }
    }
}

fn env_filter(level: LogLevel) -> EnvFilter {
    if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else {
        EnvFilter::new(level.directive())
    }
}

/// Install a stderr `fmt` subscriber.
///
/// Returns `false` if a global subscriber was already installed (for
/// example by a host process embedding the library).
pub fn init_logging(level: LogLevel) -> bool {
    fmt::Subscriber::builder()
        .with_env_filter(env_filter(level))
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .is_ok()
}
