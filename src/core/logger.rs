//! Main logger implementation

use super::{
    appender::Appender,
    error::Result,
    format::{DateTimeOptions, FormatConfig},
    log_entry::LogEntry,
    log_level::LogLevel,
};
use parking_lot::RwLock;

/// Synchronous leveled logger with multi-appender fan-out.
///
/// A logger owns its appender set and format configuration exclusively.
/// Calls at or above the threshold build an entry, format it once, and
/// write the same line to every appender in registration order before
/// returning; calls below the threshold touch nothing.
pub struct Logger {
    category: String,
    level: RwLock<LogLevel>,
    format: RwLock<FormatConfig>,
    appenders: RwLock<Vec<Box<dyn Appender>>>,
}

impl Logger {
    /// Create a bare logger with no appenders. Most callers go through
    /// [`create`](crate::create) instead, which installs default sinks.
    #[must_use]
    pub fn new(category: impl Into<String>, level: LogLevel) -> Self {
        Self {
            category: category.into(),
            level: RwLock::new(level),
            format: RwLock::new(FormatConfig::default()),
            appenders: RwLock::new(Vec::new()),
        }
    }

    pub fn add_appender(&mut self, appender: Box<dyn Appender>) {
        let mut appenders = self.appenders.write();
        appenders.push(appender);
    }

    /// Register an extra appender onto the existing set, leaving configured
    /// appenders in place. Intended for test harnesses observing output.
    pub fn set_test_appender(&mut self, appender: Box<dyn Appender>) {
        self.add_appender(appender);
    }

    /// Set the threshold from a severity token, case-insensitively.
    ///
    /// Unlike construction, this rejects unrecognized input with
    /// [`LoggerError::InvalidLevel`](super::error::LoggerError::InvalidLevel);
    /// the message embeds the offending value. Idempotent: each successful
    /// call fully replaces the prior gating state.
    pub fn set_level(&mut self, level: &str) -> Result<()> {
        let parsed: LogLevel = level.parse()?;
        *self.level.write() = parsed;
        Ok(())
    }

    /// Current threshold as its lower-case token.
    pub fn get_level(&self) -> &'static str {
        self.level.read().token()
    }

    /// Reconfigure date/time display. Unset flags reset to `false`, so
    /// `show_date_time(DateTimeOptions::default())` disables both. Never
    /// fails.
    pub fn show_date_time(&mut self, options: DateTimeOptions) {
        self.format.write().apply(options);
    }

    /// Gate, format, and fan out one message.
    pub fn log(&self, level: LogLevel, message: impl Into<String>) {
        if level < *self.level.read() {
            return;
        }

        let entry = LogEntry::new(level, self.category.clone(), message.into());
        let line = self.format.read().format(&entry);

        // Appender lock held across the whole fan-out so lines from one
        // instance reach every sink in program order.
        let mut appenders = self.appenders.write();
        for appender in appenders.iter_mut() {
            if let Err(e) = appender.write(&line) {
                eprintln!("[LOGGER ERROR] Appender '{}' failed: {}", appender.name(), e);
            }
        }
    }

    #[inline]
    pub fn trace(&self, message: impl Into<String>) {
        self.log(LogLevel::Trace, message);
    }

    #[inline]
    pub fn debug(&self, message: impl Into<String>) {
        self.log(LogLevel::Debug, message);
    }

    #[inline]
    pub fn info(&self, message: impl Into<String>) {
        self.log(LogLevel::Info, message);
    }

    #[inline]
    pub fn warn(&self, message: impl Into<String>) {
        self.log(LogLevel::Warn, message);
    }

    #[inline]
    pub fn error(&self, message: impl Into<String>) {
        self.log(LogLevel::Error, message);
    }

    /// Close every appender, releasing underlying resources.
    pub fn close(&mut self) -> Result<()> {
        let mut appenders = self.appenders.write();
        for appender in appenders.iter_mut() {
            appender.close()?;
        }
        Ok(())
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::new("", LogLevel::default())
    }
}
