//! Leveled logging to the console and a per-run text file
//!
//! A [`Logger`] is built from an explicit [`LogConfig`] and writes through a
//! [`crate::system::System`]. Every message becomes one line of the form
//! `2024-05-01 13:37:00 - WARN  - message`.

pub mod config;
pub mod logger;

pub use config::LogConfig;
pub use logger::{Logger, describe_error, format_line};

use std::fmt;

/// Severity of a log message
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Level {
    Info,
    Warn,
    Error,
    Critical,
}

impl Level {
    /// Fixed-width tag written into every line
    #[must_use]
    #[inline]
    pub const fn tag(self) -> &'static str {
        match self {
            Self::Info => "INFO ",
            Self::Warn => "WARN ",
            Self::Error => "ERROR",
            Self::Critical => "CRIT ",
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag().trim_end())
    }
}
