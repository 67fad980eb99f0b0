//! Display surface abstraction.
//!
//! The engine drives any [`Platform`]/[`Surface`] pair; the winit + wgpu
//! backend lives in [`crate::window`]. Render callbacks only see the narrower
//! [`Canvas`] view of the surface.

mod error;
mod mesh;
mod mode;
mod traits;

pub use error::SurfaceError;
pub use mesh::{Mesh, Topology, Vertex};
pub use mode::{pick_display_mode, Decorations, DisplayMode, SurfaceRequest};
pub use traits::{Canvas, Platform, Surface, SurfaceEvent};
