//! Paint model shared between the engine and render callbacks.
//!
//! Colors are linear premultiplied RGBA; see [`Color`].

mod color;

pub use color::Color;
