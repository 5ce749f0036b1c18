//! Error log
//!
//! Append-only, dated failure journal. Unlike the report writers in
//! [`crate::reports`], records accumulate: each appends a timestamped
//! block to `Log_<yyyymmdd>.txt` in the log directory.

use std::error::Error;
use std::fs::{File, OpenOptions};
use std::io::{self, Write};
use std::path::PathBuf;

use chrono::Local;

/// Process-wide failure journal, constructed eagerly at startup.
#[derive(Debug)]
pub struct ErrorLog {
    dir: PathBuf,
}

impl ErrorLog {
    /// Open the error log in `dir`.
    ///
    /// # Errors
    ///
    /// Returns an error when today's log file cannot be opened for append;
    /// the caller treats this as a fatal startup condition.
    pub fn open(dir: impl Into<PathBuf>) -> io::Result<Self> {
        let log = ErrorLog { dir: dir.into() };

        log.handle()?;

        Ok(log)
    }

    /// Append a timestamped block for `error` and its source chain.
    ///
    /// Best-effort: an I/O failure here is traced and swallowed, never
    /// surfaced to the caller.
    pub fn record(&self, error: &(dyn Error + 'static)) {
        if let Err(io_error) = self.try_record(error) {
            tracing::warn!(%io_error, "failed to append to the error log");
        }
    }

    fn try_record(&self, error: &(dyn Error + 'static)) -> io::Result<()> {
        let mut file = self.handle()?;

        writeln!(
            file,
            "[{}] Error occurred: {error}",
            Local::now().format("%Y-%m-%d %H:%M:%S")
        )?;

        let mut source = error.source();
        while let Some(cause) = source {
            writeln!(file, "  caused by: {cause}")?;
            source = cause.source();
        }

        writeln!(file)
    }

    fn handle(&self) -> io::Result<File> {
        let path = self
            .dir
            .join(format!("Log_{}.txt", Local::now().format("%Y%m%d")));

        OpenOptions::new().create(true).append(true).open(path)
    }
}
