//! Appender trait for log output destinations

use super::error::Result;

/// A destination for formatted log lines.
///
/// The logger core formats each entry once and hands the same line to every
/// registered appender in registration order. Appenders own their failure
/// containment: a returned error is reported by the core but never aborts
/// the remaining fan-out.
pub trait Appender: Send + Sync {
    fn write(&mut self, line: &str) -> Result<()>;

    /// Release any underlying resource. Default is a no-op for appenders
    /// that hold none.
    fn close(&mut self) -> Result<()> {
        Ok(())
    }

    fn name(&self) -> &str;
}
