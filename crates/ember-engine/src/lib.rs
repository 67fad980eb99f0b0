//! Ember engine crate.
//!
//! A single-window 2D frame loop: open a surface, drain input into a
//! snapshot, call the app's update and render hooks, clear/present, pace.
//!
//! [`core::Engine`] drives any [`surface::Platform`]; the desktop backend is
//! [`window::WinitPlatform`] (winit + wgpu).

pub mod config;
pub mod coords;
pub mod core;
pub mod device;
pub mod input;
pub mod logging;
pub mod paint;
pub mod render;
pub mod shapes;
pub mod surface;
pub mod time;
pub mod window;

#[cfg(test)]
mod testing;
