//! Entry formatting
//!
//! Turns a [`LogEntry`] into one human-readable line. Field order is fixed:
//! optional date, optional time, upper-case level, category when non-empty,
//! then the message. Each present field is followed by a single space; the
//! message carries no trailing space. Timestamps are local-clock renderings
//! with no timezone indicator.

use super::log_entry::LogEntry;
use chrono::{Datelike, Timelike};

/// Payload for [`Logger::show_date_time`](super::logger::Logger::show_date_time).
///
/// An unset flag coerces the corresponding setting to `false` rather than
/// keeping its prior value, so `DateTimeOptions::default()` resets both.
#[derive(Debug, Clone, Copy, Default)]
pub struct DateTimeOptions {
    pub show_date: Option<bool>,
    pub show_time: Option<bool>,
}

/// Date/time display configuration for formatted lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormatConfig {
    pub show_date: bool,
    pub show_time: bool,
}

impl Default for FormatConfig {
    fn default() -> Self {
        Self {
            show_date: false,
            show_time: true,
        }
    }
}

impl FormatConfig {
    /// Apply a setter payload. Unset flags become `false`.
    pub fn apply(&mut self, options: DateTimeOptions) {
        self.show_date = options.show_date.unwrap_or(false);
        self.show_time = options.show_time.unwrap_or(false);
    }

    /// Format an entry into one line.
    ///
    /// Numeric fields below 10 are zero-prefixed to two digits; fields of 10
    /// or more (including four-digit years) render as-is.
    pub fn format(&self, entry: &LogEntry) -> String {
        let ts = &entry.timestamp;
        let mut line = String::new();

        if self.show_date {
            line.push_str(&format!(
                "{:02}/{:02}/{:02} ",
                ts.month(),
                ts.day(),
                ts.year()
            ));
        }

        if self.show_time {
            line.push_str(&format!(
                "{:02}:{:02}:{:02} ",
                ts.hour(),
                ts.minute(),
                ts.second()
            ));
        }

        line.push_str(entry.level.to_str());
        line.push(' ');

        if !entry.category.is_empty() {
            line.push_str(&entry.category);
            line.push(' ');
        }

        line.push_str(&entry.message);
        line
    }
}
