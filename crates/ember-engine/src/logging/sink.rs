use std::io;
use std::path::Path;

use log::Level;

/// Append-only, thread-safe log destination.
///
/// Implementations must serialize concurrent writes so that lines from
/// different call sites never interleave.
pub trait DiagnosticsSink: Send + Sync {
    /// Redirects (and truncates) the persistent destination.
    fn set_destination(&self, path: &Path) -> io::Result<()>;

    /// Appends one record.
    fn log(&self, level: Level, message: &str);

    fn info(&self, message: &str) {
        self.log(Level::Info, message);
    }

    fn warn(&self, message: &str) {
        self.log(Level::Warn, message);
    }

    fn error(&self, message: &str) {
        self.log(Level::Error, message);
    }
}
