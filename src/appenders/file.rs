//! File appender implementation

use crate::core::{Appender, Result};
use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::PathBuf;

/// Appends `line + '\n'` to a file opened at construction time.
///
/// Delivery is best-effort: a failed write is reported to stderr and the
/// appender closes its own stream, but the error never reaches the logger's
/// fan-out caller. No locking, no rotation, no size cap — two appenders on
/// the same path interleave however the OS lets them.
pub struct FileAppender {
    path: PathBuf,
    writer: Option<BufWriter<File>>,
}

impl FileAppender {
    /// Open `path` for append-mode writing. The handle persists for the
    /// appender's lifetime.
    pub fn new(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let file = OpenOptions::new().create(true).append(true).open(&path)?;

        Ok(Self {
            path,
            writer: Some(BufWriter::new(file)),
        })
    }

    fn close_stream(&mut self) {
        if let Some(mut writer) = self.writer.take() {
            let _ = writer.write_all(b"\n");
            let _ = writer.flush();
        }
    }
}

impl Appender for FileAppender {
    fn write(&mut self, line: &str) -> Result<()> {
        let Some(writer) = self.writer.as_mut() else {
            // Stream already closed after an earlier failure; stay silent.
            return Ok(());
        };

        let result = writer
            .write_all(line.as_bytes())
            .and_then(|()| writer.write_all(b"\n"))
            .and_then(|()| writer.flush());

        if let Err(e) = result {
            eprintln!("error writing to file '{}': {}", self.path.display(), e);
            self.close_stream();
        }

        Ok(())
    }

    /// Flush a trailing newline and release the file handle.
    fn close(&mut self) -> Result<()> {
        self.close_stream();
        Ok(())
    }

    fn name(&self) -> &str {
        "file"
    }
}

impl Drop for FileAppender {
    fn drop(&mut self) {
        if let Some(ref mut writer) = self.writer {
            let _ = writer.flush();
        }
    }
}
