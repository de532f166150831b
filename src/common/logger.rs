use std::path::PathBuf;
use std::str::FromStr;

use log::LevelFilter;
use log4rs::append::console::ConsoleAppender;
use log4rs::append::file::FileAppender;
use log4rs::config::runtime::ConfigErrors;
use log4rs::config::{Appender, Config, Logger, Root};
use log4rs::encode::pattern::PatternEncoder;
use log4rs::Handle;
use once_cell::sync::Lazy;
use parking_lot::Mutex;
use thiserror::Error;

/// Target name used by every log record emitted from this crate.
pub const LOG_TARGET: &str = "posting_intersect";
pub const LOG_FILE_NAME: &str = "posting_intersect.log";

const CONSOLE_APPENDER: &str = "console";
const FILE_APPENDER: &str = "file";
const LOG_PATTERN: &str = "{d(%Y-%m-%d %H:%M:%S%.3f)} {h({l:<5})} [{T}] {t} - {m}{n}";

/// Holds the installed log4rs handle so that later calls can swap the config.
pub static LOG4RS_HANDLE: Lazy<Mutex<Option<Handle>>> = Lazy::new(|| Mutex::new(None));

#[derive(Debug, Error)]
pub enum LoggerError {
    #[error("Invalid log level: '{0}'")]
    InvalidLevel(String),

    #[error("Failed to create log file appender: '{0}'")]
    FileAppenderError(#[from] std::io::Error),

    #[error("Invalid log4rs config: '{0}'")]
    ConfigError(#[from] ConfigErrors),

    #[error("Failed to install logger: '{0}'")]
    SetLoggerError(#[from] log::SetLoggerError),
}

/// Logger configuration for the posting_intersect lib.
///
/// - `log_directory`: where `posting_intersect.log` is written, `None` disables the file appender.
/// - `log_level`: one of `off`, `error`, `warn`, `info`, `debug`, `trace`.
/// - `console_display`: also write records to stdout.
/// - `only_record_crate`: drop records whose target is not this crate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoggerConfig {
    pub log_directory: Option<PathBuf>,
    pub log_level: String,
    pub console_display: bool,
    pub only_record_crate: bool,
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self { log_directory: None, log_level: "info".to_string(), console_display: true, only_record_crate: true }
    }
}

impl LoggerConfig {
    pub fn new(log_directory: Option<PathBuf>, log_level: String, console_display: bool, only_record_crate: bool) -> Self {
        Self { log_directory, log_level, console_display, only_record_crate }
    }

    pub fn level_filter(&self) -> Result<LevelFilter, LoggerError> {
        LevelFilter::from_str(&self.log_level).map_err(|_| LoggerError::InvalidLevel(self.log_level.clone()))
    }

    pub fn build_logger_config(&self) -> Result<Config, LoggerError> {
        let level = self.level_filter()?;
        let mut appenders: Vec<&str> = vec![];
        let mut builder = Config::builder();

        if self.console_display {
            let console = ConsoleAppender::builder().encoder(Box::new(PatternEncoder::new(LOG_PATTERN))).build();
            builder = builder.appender(Appender::builder().build(CONSOLE_APPENDER, Box::new(console)));
            appenders.push(CONSOLE_APPENDER);
        }
        if let Some(directory) = &self.log_directory {
            let file = FileAppender::builder()
                .encoder(Box::new(PatternEncoder::new(LOG_PATTERN)))
                .build(directory.join(LOG_FILE_NAME))?;
            builder = builder.appender(Appender::builder().build(FILE_APPENDER, Box::new(file)));
            appenders.push(FILE_APPENDER);
        }

        let config = if self.only_record_crate {
            let logger = Logger::builder().appenders(appenders).additive(false).build(LOG_TARGET, level);
            builder.logger(logger).build(Root::builder().build(LevelFilter::Off))?
        } else {
            builder.build(Root::builder().appenders(appenders).build(level))?
        };
        Ok(config)
    }
}

/// Installs the logger on first call, later calls replace the active config.
pub fn init_logger(logger_config: &LoggerConfig) -> Result<(), LoggerError> {
    let config = logger_config.build_logger_config()?;
    let mut handle = LOG4RS_HANDLE.lock();
    match handle.as_ref() {
        Some(existing) => existing.set_config(config),
        None => *handle = Some(log4rs::init_config(config)?),
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;

    use super::*;

    #[test]
    fn test_default_config_builds() {
        let config = LoggerConfig::default().build_logger_config().expect("error build logger config");
        assert_eq!(config.appenders().len(), 1);
        assert_eq!(config.loggers().len(), 1);
        assert_eq!(config.root().level(), LevelFilter::Off);
    }

    #[test]
    fn test_file_appender_config() {
        let temp_dir = TempDir::new().expect("error create temp dir");
        let logger_config = LoggerConfig::new(Some(temp_dir.path().to_path_buf()), "debug".to_string(), false, false);

        let config = logger_config.build_logger_config().expect("error build logger config");
        assert_eq!(config.appenders().len(), 1);
        assert!(config.loggers().is_empty());
        assert_eq!(config.root().level(), LevelFilter::Debug);
        assert!(temp_dir.path().join(LOG_FILE_NAME).exists());
    }

    #[test]
    fn test_invalid_level() {
        let logger_config = LoggerConfig::new(None, "verbose".to_string(), true, true);
        assert!(matches!(logger_config.build_logger_config(), Err(LoggerError::InvalidLevel(level)) if level == "verbose"));
    }
}
