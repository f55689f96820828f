//! Tracing subscriber setup shared by both binaries.
//!
//! Logs always go to stderr so that stdout carries only program output.

use tracing::Level;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use crate::error::ConfigError;

/// Parses a log level name: trace, debug, info, warn, error.
///
/// ## Errors
/// Returns [`ConfigError::InvalidLogLevel`] for any other value.
pub fn parse_log_level(value: &str) -> Result<Level, ConfigError> {
    match value.to_lowercase().as_str() {
        "trace" => Ok(Level::TRACE),
        "debug" => Ok(Level::DEBUG),
        "info" => Ok(Level::INFO),
        "warn" => Ok(Level::WARN),
        "error" => Ok(Level::ERROR),
        other => Err(ConfigError::InvalidLogLevel(other.to_string())),
    }
}

/// Filter used when `RUST_LOG` is unset.
///
/// `level` applies to every target, including the binaries' own; the HTTP
/// connection internals stay at `warn`.
pub fn default_directives(level: Level) -> String {
    format!("{level},hyper=warn,hyper_util=warn")
}

/// Initializes the global tracing subscriber.
///
/// `RUST_LOG` wins over `level` when set. With `json` the fmt layer emits
/// one JSON object per event.
///
/// ## Errors
/// Returns an error if a global subscriber is already installed.
pub fn init_tracing(level: Level, json: bool) -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directives(level)));

    let registry = tracing_subscriber::registry().with(filter);
    let result = if json {
        registry
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .try_init()
    } else {
        registry
            .with(
                fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_ansi(true)
                    .with_target(true)
                    .with_thread_ids(false)
                    .with_file(true)
                    .with_line_number(true),
            )
            .try_init()
    };

    result.map_err(|e| anyhow::anyhow!("failed to initialize tracing subscriber: {e}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_log_level() {
        assert_eq!(parse_log_level("debug").unwrap(), Level::DEBUG);
        assert_eq!(parse_log_level("WARN").unwrap(), Level::WARN);
    }

    #[test]
    fn test_default_directives_cover_every_target() {
        let directives = default_directives(Level::INFO);
        assert!(directives.starts_with("INFO,"));
        assert!(EnvFilter::try_new(&directives).is_ok());
    }

    #[test]
    fn test_parse_log_level_rejects_unknown() {
        let err = parse_log_level("verbose").unwrap_err();
        assert_eq!(err.to_string(), "invalid log level: verbose");
    }
}
