//! Coordinate types shared by the engine, the surface backends and render callbacks.
//!
//! Canonical space:
//! - Physical pixels of the surface
//! - Origin top-left
//! - +X right, +Y down
//!
//! Backends convert to NDC in shaders using the active [`Viewport`].

mod vec2;
mod viewport;

pub use vec2::Vec2;
pub use viewport::Viewport;
