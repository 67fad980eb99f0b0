//! Input subsystem.
//!
//! Public API is platform-agnostic and does not expose winit types.
//! Backends translate platform events into [`InputEvent`]s; the engine folds
//! them into the [`InputSnapshot`] through a fixed transition table.

pub(crate) mod platform;
mod state;
mod types;

pub use state::{transition, InputField, InputFilter, InputSnapshot, Transition};
pub use types::{InputEvent, Key, KeyState, MouseButton, MouseButtonState};
