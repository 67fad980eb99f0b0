//! winit + wgpu backend.
//!
//! [`WinitPlatform`] owns the event loop and opens one [`WinitSurface`]. The
//! loop is never handed to winit's `run_app`; the surface pumps it once per
//! frame instead, so the engine keeps control of its own loop.

mod platform;
mod pump;
mod surface;

pub use platform::WinitPlatform;
pub use surface::WinitSurface;
