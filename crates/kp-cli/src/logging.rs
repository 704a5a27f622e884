//! Logging setup for the kp CLI

use eyre::Result;
use tracing_subscriber::EnvFilter;

/// Verbosity selected by the global `-v`/`-q` flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    Error,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    fn directive(self) -> &'static str {
        match self {
            LogLevel::Error => "error",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
            LogLevel::Trace => "trace",
        }
    }
}

/// Initialize the tracing subscriber. `RUST_LOG` takes precedence over the
/// flag-derived level. Logs go to stderr so generated headers can be piped.
pub fn setup_logs(level: LogLevel) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(level.directive()));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|e| eyre::eyre!("failed to initialize logging: {e}"))?;

    Ok(())
}
