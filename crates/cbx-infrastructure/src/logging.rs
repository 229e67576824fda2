//! Structured logging with tracing
//!
//! Centralized logging configuration using the tracing ecosystem. The
//! resolution core emits `debug!`/`trace!` events; hosts that want to see
//! them call [`init_logging`] once at startup or install their own
//! subscriber.

use cbx_domain::error::{Error, Result};
use tracing::{Level, info};
use tracing_subscriber::{EnvFilter, Registry, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Logging configuration
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// Minimum log level: trace, debug, info, warn, or error
    pub level: String,
    /// Emit JSON-formatted events instead of human-readable ones
    pub json_format: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            json_format: false,
        }
    }
}

/// Initialize logging with the provided configuration
///
/// The `CBX_LOG` environment variable overrides the configured level with a
/// full `EnvFilter` directive.
pub fn init_logging(config: &LoggingConfig) -> Result<()> {
    let level = parse_log_level(&config.level)?;
    let filter =
        EnvFilter::try_from_env("CBX_LOG").unwrap_or_else(|_| EnvFilter::new(&config.level));

    // The two fmt layers have different types, so separate branches
    if config.json_format {
        let stdout = fmt::layer().json().with_target(true);
        Registry::default().with(filter).with(stdout).init();
    } else {
        let stdout = fmt::layer().with_target(true);
        Registry::default().with(filter).with(stdout).init();
    }

    info!("Logging initialized with level: {}", level);
    Ok(())
}

/// Parse a log level string to a tracing Level
pub fn parse_log_level(level: &str) -> Result<Level> {
    match level.to_lowercase().as_str() {
        "trace" => Ok(Level::TRACE),
        "debug" => Ok(Level::DEBUG),
        "info" => Ok(Level::INFO),
        "warn" | "warning" => Ok(Level::WARN),
        "error" => Ok(Level::ERROR),
        _ => Err(Error::Configuration {
            message: format!(
                "Invalid log level: {level}. Use trace, debug, info, warn, or error"
            ),
        }),
    }
}
