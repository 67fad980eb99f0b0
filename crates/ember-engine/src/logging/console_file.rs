use std::fs::File;
use std::io::{self, Write};
use std::path::Path;
use std::sync::{Mutex, PoisonError};

use chrono::{DateTime, Local, TimeZone};
use log::Level;

use super::sink::DiagnosticsSink;

/// Sink writing every record to the console and, once a destination is set,
/// to a log file.
///
/// Lines look like `[INFO][2024-05-01 12:00:00.123] message`. Errors go to
/// stderr, everything else to stdout. Timestamps are local time.
pub struct ConsoleFileSink {
    file: Mutex<Option<File>>,
    console: bool,
}

impl ConsoleFileSink {
    pub fn new() -> Self {
        Self {
            file: Mutex::new(None),
            console: true,
        }
    }

    /// File-only sink; used when stdout/stderr belong to something else.
    pub fn without_console() -> Self {
        Self {
            file: Mutex::new(None),
            console: false,
        }
    }
}

impl Default for ConsoleFileSink {
    fn default() -> Self {
        Self::new()
    }
}

impl DiagnosticsSink for ConsoleFileSink {
    fn set_destination(&self, path: &Path) -> io::Result<()> {
        let mut file = self.file.lock().unwrap_or_else(PoisonError::into_inner);
        // Drop the previous handle first so a failed open leaves no stale target.
        *file = None;
        *file = Some(File::create(path)?);
        Ok(())
    }

    fn log(&self, level: Level, message: &str) {
        let line = format_line(level, &timestamp(&Local::now()), message);

        // Console and file are written under the same lock to keep lines intact.
        let mut file = self.file.lock().unwrap_or_else(PoisonError::into_inner);

        if self.console {
            let _ = if level == Level::Error {
                io::stderr().lock().write_all(line.as_bytes())
            } else {
                io::stdout().lock().write_all(line.as_bytes())
            };
        }

        if let Some(f) = file.as_mut() {
            let _ = f.write_all(line.as_bytes()).and_then(|_| f.flush());
        }
    }
}

/// `YYYY-MM-DD HH:MM:SS.mmm` in the zone of `now`.
pub(super) fn timestamp<Tz: TimeZone>(now: &DateTime<Tz>) -> String
where
    Tz::Offset: std::fmt::Display,
{
    now.format("%Y-%m-%d %H:%M:%S%.3f").to_string()
}

pub(super) fn format_line(level: Level, timestamp: &str, message: &str) -> String {
    format!("[{}][{}] {}\n", level.as_str(), timestamp, message)
}
