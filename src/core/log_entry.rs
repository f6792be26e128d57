//! Log entry structure

use super::log_level::LogLevel;
use chrono::{DateTime, Local};

/// One log call, captured just before formatting.
///
/// Entries are ephemeral: built when a call passes the threshold gate,
/// formatted, fanned out, and dropped. Nothing retains them afterwards.
#[derive(Debug, Clone)]
pub struct LogEntry {
    pub timestamp: DateTime<Local>,
    pub level: LogLevel,
    pub category: String,
    pub message: String,
}

impl LogEntry {
    /// Stamp a new entry with the local clock.
    pub fn new(level: LogLevel, category: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            timestamp: Local::now(),
            level,
            category: category.into(),
            message: message.into(),
        }
    }
}
