//! Diagnostics.
//!
//! The engine reports lifecycle events and failures through an injected
//! [`DiagnosticsSink`] instead of a hidden global. [`init_logging`] bridges the
//! `log` facade into the same sink so records from wgpu and winit end up next
//! to the engine's own lines.

mod console_file;
mod init;
mod memory;
mod sink;

pub use console_file::ConsoleFileSink;
pub use init::{init_logging, LoggingConfig, SinkLogger};
pub use log::Level;
pub use memory::{LogRecord, MemorySink};
pub use sink::DiagnosticsSink;
