use std::sync::{Arc, Once};

use log::{Log, Metadata, Record};

use super::sink::DiagnosticsSink;

/// Logger configuration.
///
/// `env_filter` follows the `env_logger` filter syntax (e.g. "info", "warn",
/// "ember_engine=debug,wgpu=warn"). When absent, `RUST_LOG` is consulted, then
/// a `warn` default keeps wgpu chatter out of the log.
#[derive(Debug, Clone, Default)]
pub struct LoggingConfig {
    pub env_filter: Option<String>,
}

/// `log::Log` bridge writing into a [`DiagnosticsSink`].
///
/// Filtering is delegated to an `env_logger` logger that is never installed
/// itself; only its directive matching is used.
pub struct SinkLogger {
    filter: env_logger::Logger,
    sink: Arc<dyn DiagnosticsSink>,
}

impl SinkLogger {
    pub fn new(config: &LoggingConfig, sink: Arc<dyn DiagnosticsSink>) -> Self {
        let mut builder = env_logger::Builder::new();

        if let Some(filter) = &config.env_filter {
            builder.parse_filters(filter);
        } else if let Ok(filter) = std::env::var("RUST_LOG") {
            builder.parse_filters(&filter);
        } else {
            builder.filter_level(log::LevelFilter::Warn);
        }

        Self {
            filter: builder.build(),
            sink,
        }
    }

    pub fn max_level(&self) -> log::LevelFilter {
        self.filter.filter()
    }
}

impl Log for SinkLogger {
    fn enabled(&self, metadata: &Metadata<'_>) -> bool {
        self.filter.enabled(metadata)
    }

    fn log(&self, record: &Record<'_>) {
        if !self.filter.matches(record) {
            return;
        }
        self.sink
            .log(record.level(), &format!("{}: {}", record.target(), record.args()));
    }

    fn flush(&self) {}
}

static INIT: Once = Once::new();

/// Installs the global `log` bridge once.
///
/// This function is idempotent; subsequent calls are ignored.
/// Intended usage is early in `main`.
pub fn init_logging(config: LoggingConfig, sink: Arc<dyn DiagnosticsSink>) {
    INIT.call_once(|| {
        let logger = SinkLogger::new(&config, sink);
        let max = logger.max_level();

        if log::set_boxed_logger(Box::new(logger)).is_ok() {
            log::set_max_level(max);
            log::debug!("logging initialized");
        }
    });
}
