//! Log level definitions

use super::error::LoggerError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The five severity tokens in canonical lower-case form.
///
/// `set_level` accepts these constants as well as the literal strings, so
/// `logger.set_level(levels::WARN)` and `logger.set_level("warn")` are
/// equivalent.
pub mod levels {
    pub const TRACE: &str = "trace";
    pub const DEBUG: &str = "debug";
    pub const INFO: &str = "info";
    pub const WARN: &str = "warn";
    pub const ERROR: &str = "error";
}

/// Log severity, lowest to highest. The discriminant is the rank used for
/// threshold comparison.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[derive(Default)]
pub enum LogLevel {
    Trace = 0,
    Debug = 1,
    Info = 2,
    Warn = 3,
    #[default]
    Error = 4,
}

impl LogLevel {
    /// Upper-case label, as rendered in formatted output.
    pub fn to_str(&self) -> &'static str {
        match self {
            LogLevel::Trace => "TRACE",
            LogLevel::Debug => "DEBUG",
            LogLevel::Info => "INFO",
            LogLevel::Warn => "WARN",
            LogLevel::Error => "ERROR",
        }
    }

    /// Lower-case token, the canonical external form returned by
    /// [`Logger::get_level`](super::logger::Logger::get_level).
    pub fn token(&self) -> &'static str {
        match self {
            LogLevel::Trace => levels::TRACE,
            LogLevel::Debug => levels::DEBUG,
            LogLevel::Info => levels::INFO,
            LogLevel::Warn => levels::WARN,
            LogLevel::Error => levels::ERROR,
        }
    }

    /// All levels in rank order.
    pub fn all() -> [LogLevel; 5] {
        [
            LogLevel::Trace,
            LogLevel::Debug,
            LogLevel::Info,
            LogLevel::Warn,
            LogLevel::Error,
        ]
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_str())
    }
}

impl FromStr for LogLevel {
    type Err = LoggerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            levels::TRACE => Ok(LogLevel::Trace),
            levels::DEBUG => Ok(LogLevel::Debug),
            levels::INFO => Ok(LogLevel::Info),
            levels::WARN => Ok(LogLevel::Warn),
            levels::ERROR => Ok(LogLevel::Error),
            _ => Err(LoggerError::invalid_level(s)),
        }
    }
}
