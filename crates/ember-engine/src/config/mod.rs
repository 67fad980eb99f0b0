//! Engine configuration.
//!
//! Configuration is constructed programmatically by the application and
//! copied into the engine; there is no file or CLI layer.

mod engine_config;

pub use engine_config::EngineConfig;
