//! Logging and tracing configuration
//!
//! Diagnostic tracing for the simulator. This is separate from the security
//! event log, which goes through an [`EventSink`](crate::events::EventSink).

use std::io;
use std::path::PathBuf;
use tracing::{debug, Level};
use tracing_appender::{non_blocking, non_blocking::WorkerGuard, rolling};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Registry};

/// Error returned when the global subscriber cannot be installed
pub type LoggingInitError = Box<dyn std::error::Error + Send + Sync>;

/// Logging configuration
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// Log level for the application
    pub level: Level,
    /// Whether to enable JSON formatting
    pub json_format: bool,
    /// Directory for daily rolling log files, if any
    pub log_directory: Option<PathBuf>,
    /// Log file prefix (if logging to file)
    pub log_file_prefix: String,
    /// Whether to enable ansi colors in console output
    pub enable_ansi: bool,
    /// Custom environment filter
    pub env_filter: Option<String>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: Level::WARN,
            json_format: false,
            log_directory: None,
            log_file_prefix: "building-security-simulator".to_string(),
            enable_ansi: true,
            env_filter: None,
        }
    }
}

impl LoggingConfig {
    /// Create a new logging configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Level from the `--verbose` / `--debug` command line flags
    ///
    /// `--debug` wins over `--verbose`; neither means WARN.
    pub fn from_flags(verbose: bool, debug: bool) -> Self {
        let level = if debug {
            Level::DEBUG
        } else if verbose {
            Level::INFO
        } else {
            Level::WARN
        };
        Self::new().with_level(level)
    }

    /// Set the log level
    pub fn with_level(mut self, level: Level) -> Self {
        self.level = level;
        self
    }

    /// Enable JSON formatting
    pub fn with_json_format(mut self) -> Self {
        self.json_format = true;
        self
    }

    /// Also write daily rolling files under `directory`
    pub fn with_file_logging(mut self, directory: impl Into<PathBuf>) -> Self {
        self.log_directory = Some(directory.into());
        self
    }

    /// Set log file prefix
    pub fn with_file_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.log_file_prefix = prefix.into();
        self
    }

    /// Disable ANSI colors
    pub fn without_ansi(mut self) -> Self {
        self.enable_ansi = false;
        self
    }

    /// Set custom environment filter
    pub fn with_env_filter(mut self, filter: impl Into<String>) -> Self {
        self.env_filter = Some(filter.into());
        self
    }

    /// Filter directive used when neither a custom filter nor `RUST_LOG` is set
    pub fn default_directive(&self) -> String {
        format!("{}={}", env!("CARGO_PKG_NAME").replace('-', "_"), self.level)
    }

    fn build_filter(&self) -> Result<EnvFilter, LoggingInitError> {
        match &self.env_filter {
            Some(filter) => Ok(EnvFilter::try_new(filter)?),
            None => Ok(EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(self.default_directive()))),
        }
    }

    /// Initialize the global tracing subscriber
    ///
    /// With file logging enabled the returned guard flushes the file writer
    /// when dropped; keep it alive for the life of the program.
    pub fn init(self) -> Result<Option<WorkerGuard>, LoggingInitError> {
        let registry = Registry::default().with(self.build_filter()?);

        let guard = match &self.log_directory {
            Some(directory) => {
                let file_appender = rolling::daily(directory, &self.log_file_prefix);
                let (file_writer, guard) = non_blocking(file_appender);
                let file_layer = fmt::layer().json().with_writer(file_writer);

                if self.json_format {
                    let console_layer = fmt::layer().json().with_writer(io::stderr);
                    registry.with(file_layer).with(console_layer).try_init()?;
                } else {
                    let console_layer =
                        fmt::layer().with_writer(io::stderr).with_ansi(self.enable_ansi);
                    registry.with(file_layer).with(console_layer).try_init()?;
                }
                Some(guard)
            }
            None => {
                if self.json_format {
                    registry.with(fmt::layer().json().with_writer(io::stderr)).try_init()?;
                } else {
                    let layer = fmt::layer().with_writer(io::stderr).with_ansi(self.enable_ansi);
                    registry.with(layer).try_init()?;
                }
                None
            }
        };

        debug!(level = %self.level, json = self.json_format, "Logging initialized");
        Ok(guard)
    }
}

/// Macro for creating structured log events with simulation context
#[macro_export]
macro_rules! sim_event {
    ($level:ident, $message:expr, $($key:ident = $value:expr),* $(,)?) => {
        tracing::$level!(
            message = $message,
            component = "simulation",
            $($key = $value,)*
        );
    };
    ($level:ident, $message:expr) => {
        tracing::$level!(
            message = $message,
            component = "simulation",
        );
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_logging_config_creation() {
        let config = LoggingConfig::new();
        assert_eq!(config.level, Level::WARN);
        assert!(!config.json_format);
        assert!(config.log_directory.is_none());
        assert_eq!(config.log_file_prefix, "building-security-simulator");
        assert!(config.enable_ansi);
        assert!(config.env_filter.is_none());
    }

    #[test]
    fn test_logging_config_builder_pattern() {
        let config = LoggingConfig::new()
            .with_level(Level::DEBUG)
            .with_json_format()
            .with_file_logging("test_logs")
            .with_file_prefix("test_prefix")
            .without_ansi()
            .with_env_filter("debug");

        assert_eq!(config.level, Level::DEBUG);
        assert!(config.json_format);
        assert_eq!(config.log_directory, Some(PathBuf::from("test_logs")));
        assert_eq!(config.log_file_prefix, "test_prefix");
        assert!(!config.enable_ansi);
        assert_eq!(config.env_filter, Some("debug".to_string()));
    }

    #[test]
    fn test_levels_from_flags() {
        assert_eq!(LoggingConfig::from_flags(false, false).level, Level::WARN);
        assert_eq!(LoggingConfig::from_flags(true, false).level, Level::INFO);
        assert_eq!(LoggingConfig::from_flags(true, true).level, Level::DEBUG);
        assert_eq!(LoggingConfig::from_flags(false, true).level, Level::DEBUG);
    }

    #[test]
    fn test_default_directive_targets_crate() {
        let config = LoggingConfig::from_flags(true, false);
        assert_eq!(config.default_directive(), "building_security_simulator=INFO");
    }

    #[test]
    fn test_invalid_custom_filter_is_rejected() {
        let config = LoggingConfig::new().with_env_filter("building_security_simulator=loud");
        assert!(config.build_filter().is_err());
    }
}
