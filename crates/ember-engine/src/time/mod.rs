//! Time subsystem.
//!
//! Provides testable frame timing utilities without coupling to the loop:
//! - [`Clock`] abstracts "now" and "sleep" so tests can drive time by hand
//! - [`FrameClock`] measures per-frame delta time
//! - [`FramePacer`] computes the sleep that caps the frame rate

mod clock;
mod frame_clock;
mod pacer;

pub use clock::{Clock, ManualClock, SystemClock};
pub use frame_clock::{FrameClock, FrameTime};
pub use pacer::FramePacer;
