//! Core logger types and traits

pub mod appender;
pub mod config;
pub mod error;
pub mod format;
pub mod log_entry;
pub mod log_level;
pub mod logger;

pub use appender::Appender;
pub use config::LoggerConfig;
pub use error::{LoggerError, Result};
pub use format::{DateTimeOptions, FormatConfig};
pub use log_entry::LogEntry;
pub use log_level::{levels, LogLevel};
pub use logger::Logger;
