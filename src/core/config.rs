//! Logger configuration

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Options accepted by [`create`](crate::create).
///
/// All fields are optional; the library loads no configuration itself, a
/// host process fills this in programmatically or via deserialization.
///
/// Sink selection: a `file` path installs a file appender; `console: true`
/// installs a console appender alongside it. When neither is explicitly
/// requested — including `console: false` with no file — a console appender
/// is installed as the fallback so the logger never starts with zero sinks.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggerConfig {
    /// Category token included in every formatted line when non-empty.
    pub category: String,
    /// Initial threshold. Unrecognized values fall back to `error` silently;
    /// only explicit `set_level` calls reject bad input.
    pub level: Option<String>,
    pub console: Option<bool>,
    pub file: Option<PathBuf>,
}

impl LoggerConfig {
    /// Whether a console appender should be installed.
    pub(crate) fn wants_console(&self) -> bool {
        if !matches!(self.console, Some(true)) && self.file.is_none() {
            // Fallback: nothing explicitly requested leaves console on.
            true
        } else {
            self.console.unwrap_or(false)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = LoggerConfig::default();
        assert!(config.category.is_empty());
        assert!(config.level.is_none());
        assert!(config.wants_console());
    }

    #[test]
    fn test_console_fallback_table() {
        // neither requested -> console
        assert!(LoggerConfig::default().wants_console());

        // explicit false, no file -> still console (fallback)
        let config = LoggerConfig {
            console: Some(false),
            ..Default::default()
        };
        assert!(config.wants_console());

        // file only -> no console
        let config = LoggerConfig {
            file: Some(PathBuf::from("app.log")),
            ..Default::default()
        };
        assert!(!config.wants_console());

        // explicit false with file -> no console
        let config = LoggerConfig {
            console: Some(false),
            file: Some(PathBuf::from("app.log")),
            ..Default::default()
        };
        assert!(!config.wants_console());

        // explicit true with file -> both
        let config = LoggerConfig {
            console: Some(true),
            file: Some(PathBuf::from("app.log")),
            ..Default::default()
        };
        assert!(config.wants_console());
    }
}
