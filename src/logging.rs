//! Structured logging initialization
//!
//! Sets up a `tracing-subscriber` registry with:
//! - An `EnvFilter` built from the configured level (or `RUST_LOG`)
//! - JSON or pretty formatting
//! - Optional non-blocking output through `tracing-appender`
//!
//! Output goes to stderr so command output on stdout stays clean.

use anyhow::{Context, Result};
use std::env;
use tracing::{warn, Level};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

/// Log format: JSON for production, pretty-print for development
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Json,
    Pretty,
}

impl LogFormat {
    pub fn parse(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "json" => LogFormat::Json,
            _ => LogFormat::Pretty, // Default to pretty
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone)]
pub struct LogConfig {
    /// Log level: trace/debug/info/warn/error
    pub log_level: String,
    /// Log format: json/pretty
    pub format: LogFormat,
    /// Enable async buffered logging
    pub async_logging: bool,
    /// Module filter (comma-separated directives)
    pub target_filter: Option<String>,
    /// Include file:line location (dev only)
    pub include_location: bool,
}

const FLAG_VARS: [&str; 2] = ["NAVR_LOG_ASYNC", "NAVR_LOG_INCLUDE_LOCATION"];

/// Parse a boolean environment value: `true`/`false`, `1`/`0`, `yes`/`no`, `on`/`off`.
pub fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Some(true),
        "false" | "0" | "no" | "off" => Some(false),
        _ => None,
    }
}

fn env_flag(name: &str, default: bool) -> bool {
    env::var(name)
        .ok()
        .and_then(|s| parse_flag(&s))
        .unwrap_or(default)
}

/// Warn about flag variables that were set but not understood. Runs once a
/// subscriber is installed, since [`LogConfig::from_env`] precedes it.
fn warn_invalid_flags() {
    for name in FLAG_VARS {
        if let Ok(value) = env::var(name) {
            if parse_flag(&value).is_none() {
                warn!(var = name, value = %value, "Unrecognized boolean, using default");
            }
        }
    }
}

impl LogConfig {
    /// Parse configuration from environment variables with defaults
    pub fn from_env() -> Self {
        Self {
            log_level: env::var("NAVR_LOG_LEVEL").unwrap_or_else(|_| "warn".to_string()),
            format: LogFormat::parse(
                &env::var("NAVR_LOG_FORMAT").unwrap_or_else(|_| "pretty".to_string()),
            ),
            async_logging: env_flag("NAVR_LOG_ASYNC", false),
            target_filter: env::var("NAVR_LOG_TARGET_FILTER").ok(),
            include_location: env_flag("NAVR_LOG_INCLUDE_LOCATION", false),
        }
    }

    /// Create a default configuration for development
    pub fn default_dev() -> Self {
        Self {
            log_level: "debug".to_string(),
            format: LogFormat::Pretty,
            async_logging: false,
            target_filter: None,
            include_location: true,
        }
    }

    /// Create a default production configuration
    pub fn default_prod() -> Self {
        Self {
            log_level: "info".to_string(),
            format: LogFormat::Json,
            async_logging: true,
            target_filter: None,
            include_location: false,
        }
    }

    /// The configured level; unknown names fall back to INFO.
    pub fn level(&self) -> Level {
        match self.log_level.to_lowercase().as_str() {
            "trace" => Level::TRACE,
            "debug" => Level::DEBUG,
            "info" => Level::INFO,
            "warn" => Level::WARN,
            "error" => Level::ERROR,
            _ => Level::INFO,
        }
    }

    fn env_filter(&self) -> EnvFilter {
        let mut env_filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(self.level().as_str()));

        if let Some(target_filter) = &self.target_filter {
            for filter in target_filter.split(',') {
                let filter = filter.trim();
                if filter.is_empty() {
                    continue;
                }
                match filter.parse() {
                    Ok(directive) => env_filter = env_filter.add_directive(directive),
                    Err(_) => eprintln!("Warning: Invalid log filter directive: {}", filter),
                }
            }
        }
        env_filter
    }
}

/// Keeps the background writer alive. Drop it at exit to flush.
#[derive(Debug)]
pub struct LogGuard {
    _worker: Option<WorkerGuard>,
}

/// Initialize logging from the environment (`NAVR_LOG_*`).
pub fn init_logging() -> Result<LogGuard> {
    let guard = init_logging_with_config(&LogConfig::from_env())?;
    warn_invalid_flags();
    Ok(guard)
}

/// Initialize logging with an explicit configuration.
///
/// Fails if a global subscriber is already installed.
///
/// # Example
///
/// ```no_run
/// use navrouter::logging::{init_logging_with_config, LogConfig};
///
/// let _guard = init_logging_with_config(&LogConfig::default_dev())
///     .expect("Failed to initialize logging");
/// ```
pub fn init_logging_with_config(config: &LogConfig) -> Result<LogGuard> {
    let (writer, worker) = if config.async_logging {
        let (non_blocking, guard) = tracing_appender::non_blocking(std::io::stderr());
        (tracing_subscriber::fmt::writer::BoxMakeWriter::new(non_blocking), Some(guard))
    } else {
        (tracing_subscriber::fmt::writer::BoxMakeWriter::new(std::io::stderr), None)
    };

    let fmt_layer = match config.format {
        LogFormat::Json => tracing_subscriber::fmt::layer()
            .json()
            .with_current_span(true)
            .with_target(true)
            .with_thread_ids(true)
            .with_file(config.include_location)
            .with_line_number(config.include_location)
            .with_writer(writer)
            .boxed(),
        LogFormat::Pretty => tracing_subscriber::fmt::layer()
            .pretty()
            .with_target(true)
            .with_thread_ids(false)
            .with_file(config.include_location)
            .with_line_number(config.include_location)
            .with_writer(writer)
            .boxed(),
    };

    tracing_subscriber::registry()
        .with(config.env_filter())
        .with(fmt_layer)
        .try_init()
        .context("Failed to initialize logging")?;

    Ok(LogGuard { _worker: worker })
}
