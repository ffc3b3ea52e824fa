//! Console and file sinks

use crate::error::KitError;
use crate::log::{Level, LogConfig};
use crate::system::System;
use chrono::{DateTime, Local};
use console::style;
use std::error::Error;
use std::path::PathBuf;
use tracing::{debug, error};

/// Writes leveled messages to the sinks enabled in its [`LogConfig`]
///
/// The log file name is fixed when the logger is created, so every message of
/// one run lands in the same `Log{YYYYMMDD_HHMMSS}.txt` file.
///
/// # Example
/// ```
/// use consolekit::log::{LogConfig, Logger};
/// use consolekit::system::{MockSystem, System as _};
///
/// let system = MockSystem::new();
/// let logger = Logger::new(LogConfig::new("/logs").with_color(false), &system);
///
/// logger.warn("disk almost full");
///
/// assert!(system.console_lines()[0].ends_with(" - WARN  - disk almost full"));
/// assert!(system.exists(&logger.file_path()));
/// ```
pub struct Logger<'sys> {
    config: LogConfig,
    system: &'sys dyn System,
    started: DateTime<Local>,
}

impl<'sys> Logger<'sys> {
    /// Create a logger whose file is named after the current time
    #[must_use]
    pub fn new(config: LogConfig, system: &'sys dyn System) -> Self {
        Self::with_start_time(config, system, Local::now())
    }

    /// Create a logger whose file is named after `started`
    #[must_use]
    pub fn with_start_time(
        config: LogConfig,
        system: &'sys dyn System,
        started: DateTime<Local>,
    ) -> Self {
        Self {
            config,
            system,
            started,
        }
    }

    #[must_use]
    pub const fn config(&self) -> &LogConfig {
        &self.config
    }

    /// Name of this run's log file
    #[must_use]
    pub fn file_name(&self) -> String {
        format!("Log{}.txt", self.started.format("%Y%m%d_%H%M%S"))
    }

    /// Full path of this run's log file
    #[must_use]
    pub fn file_path(&self) -> PathBuf {
        self.config.directory().join(self.file_name())
    }

    /// Everything this run has written to its log file so far
    ///
    /// Returns an empty string when nothing has been written yet.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The log file exists but cannot be read
    pub fn contents(&self) -> Result<String, KitError> {
        let path = self.file_path();
        if !self.system.exists(&path) {
            return Ok(String::new());
        }

        self.system
            .read_to_string(&path)
            .map_err(|e| KitError::log(format!("Failed to read {}: {e}", path.display())))
    }

    pub fn info(&self, message: &str) {
        self.log(Level::Info, message);
    }

    pub fn warn(&self, message: &str) {
        self.log(Level::Warn, message);
    }

    pub fn error(&self, message: &str) {
        self.log(Level::Error, message);
    }

    pub fn critical(&self, message: &str) {
        self.log(Level::Critical, message);
    }

    pub fn info_with(&self, message: &str, err: &dyn Error) {
        self.log_with(Level::Info, message, err);
    }

    pub fn warn_with(&self, message: &str, err: &dyn Error) {
        self.log_with(Level::Warn, message, err);
    }

    pub fn error_with(&self, message: &str, err: &dyn Error) {
        self.log_with(Level::Error, message, err);
    }

    pub fn critical_with(&self, message: &str, err: &dyn Error) {
        self.log_with(Level::Critical, message, err);
    }

    /// Log an error on its own, including its chain of sources
    pub fn log_error(&self, level: Level, err: &dyn Error) {
        self.log(level, &describe_error(err));
    }

    /// Log a message followed by an error on the next line
    pub fn log_with(&self, level: Level, message: &str, err: &dyn Error) {
        self.log(level, &format!("{message}\n{}", describe_error(err)));
    }

    /// Log a message, reporting sink failures as diagnostics instead of failing
    pub fn log(&self, level: Level, message: &str) {
        if let Err(err) = self.try_log(level, message) {
            error!("{err}");
        }
    }

    /// Log a message to every enabled sink
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The console cannot be written
    /// - The log directory cannot be created or the log file cannot be appended to
    pub fn try_log(&self, level: Level, message: &str) -> Result<(), KitError> {
        let line = format_line(Local::now(), level, message);

        if self.config.console() {
            self.system
                .write_console(&self.styled(level, &line))
                .map_err(|e| KitError::log(format!("Failed to write to console: {e}")))?;
        }

        if self.config.file() {
            self.append_to_file(&line)?;
        }

        Ok(())
    }

    fn append_to_file(&self, line: &str) -> Result<(), KitError> {
        let directory = self.config.directory();
        if !self.system.is_dir(directory) {
            self.system.create_dir_all(directory).map_err(|e| {
                KitError::log(format!(
                    "Failed to create log directory {}: {e}",
                    directory.display()
                ))
            })?;
            debug!("Created log directory {}", directory.display());
        }

        let path = self.file_path();
        self.system
            .append(&path, format!("{line}\n").as_bytes())
            .map_err(|e| KitError::log(format!("Failed to write {}: {e}", path.display())))
    }

    fn styled(&self, level: Level, line: &str) -> String {
        if !self.config.color() {
            return line.to_owned();
        }

        match level {
            Level::Info => line.to_owned(),
            Level::Warn => style(line).yellow().to_string(),
            Level::Error => style(line).red().to_string(),
            Level::Critical => style(line).black().on_red().to_string(),
        }
    }
}

/// Format one log line
#[must_use]
pub fn format_line(time: DateTime<Local>, level: Level, message: &str) -> String {
    format!(
        "{} - {} - {message}",
        time.format("%Y-%m-%d %H:%M:%S"),
        level.tag()
    )
}

/// Render an error and its chain of sources
#[must_use]
pub fn describe_error(err: &dyn Error) -> String {
    let mut description = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        description.push_str(&format!("\n  caused by: {cause}"));
        source = cause.source();
    }
    description
}
