//! # Logline
//!
//! A minimal synchronous logging library: leveled calls, threshold
//! filtering, human-readable line formatting, and fan-out to one or more
//! appenders (console, file).
//!
//! ## Features
//!
//! - **Leveled filtering**: five ordered severities gated by a mutable
//!   threshold
//! - **Multiple appenders**: console, file, and caller-supplied appenders
//! - **Synchronous delivery**: every call completes its writes before
//!   returning, in program order
//! - **Easy to use**: construct with [`create`], log with per-severity
//!   methods or the format macros
//!
//! ## Example
//!
//! ```
//! use logline::{create, LoggerConfig};
//!
//! let mut logger = create(LoggerConfig {
//!     category: "Server".to_string(),
//!     level: Some("info".to_string()),
//!     ..Default::default()
//! });
//!
//! logger.info("listening on port 8080");
//! logger.debug("dropped below threshold");
//! logger.set_level("trace").unwrap();
//! ```

pub mod appenders;
pub mod core;
pub mod macros;

pub mod prelude {
    pub use crate::appenders::{ConsoleAppender, FileAppender};
    pub use crate::core::{
        levels, Appender, DateTimeOptions, FormatConfig, LogEntry, LogLevel, Logger, LoggerConfig,
        LoggerError, Result,
    };
    pub use crate::create;
}

pub use appenders::{ConsoleAppender, FileAppender};
pub use core::{
    levels, Appender, DateTimeOptions, FormatConfig, LogEntry, LogLevel, Logger, LoggerConfig,
    LoggerError, Result,
};

/// Build a [`Logger`] from a [`LoggerConfig`], installing default appenders.
///
/// Never fails: an unrecognized `level` falls back to the default (`error`)
/// instead of propagating the error that an explicit
/// [`Logger::set_level`] call would raise. If neither a console nor a file
/// appender is explicitly requested, a console appender is installed; a
/// file path that cannot be opened is reported to stderr and skipped, with
/// console as the fallback when the appender set would otherwise be empty.
pub fn create(config: LoggerConfig) -> Logger {
    let level = config
        .level
        .as_deref()
        .and_then(|s| s.parse().ok())
        .unwrap_or_default();

    let wants_console = config.wants_console();
    let mut logger = Logger::new(config.category.clone(), level);

    if wants_console {
        logger.add_appender(Box::new(ConsoleAppender::new()));
    }

    if let Some(path) = config.file {
        match FileAppender::new(&path) {
            Ok(appender) => logger.add_appender(Box::new(appender)),
            Err(e) => {
                eprintln!(
                    "[LOGGER ERROR] cannot open log file '{}': {}",
                    path.display(),
                    e
                );
                if !wants_console {
                    logger.add_appender(Box::new(ConsoleAppender::new()));
                }
            }
        }
    }

    logger
}
