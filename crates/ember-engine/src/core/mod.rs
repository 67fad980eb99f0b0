//! The frame engine.
//!
//! This module defines the caller-facing runtime: [`Engine`] owns the surface
//! and runs the poll → update → render → pace loop, handing each frame to an
//! [`App`].

mod app;
mod background;
mod engine;
mod error;
mod stop;

pub use app::{App, Callbacks};
pub use background::{BackgroundFill, BackgroundImage};
pub use engine::Engine;
pub use error::EngineError;
pub use stop::StopHandle;
