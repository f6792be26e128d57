//! Console appender implementation

use crate::core::{Appender, Result};

/// Writes each line to stdout, one call per line, synchronously and
/// unbuffered.
pub struct ConsoleAppender;

impl ConsoleAppender {
    pub fn new() -> Self {
        Self
    }
}

impl Default for ConsoleAppender {
    fn default() -> Self {
        Self::new()
    }
}

impl Appender for ConsoleAppender {
    fn write(&mut self, line: &str) -> Result<()> {
        println!("{}", line);
        Ok(())
    }

    fn name(&self) -> &str {
        "console"
    }
}
