//! GPU rendering subsystem.
//!
//! Renderers turn a frame's recorded draws into wgpu commands. Each renderer
//! owns its GPU resources (pipelines, buffers) and creates them lazily for the
//! current surface format.
//!
//! Convention:
//! - CPU geometry is in surface pixels (top-left origin, +Y down).
//! - Vertex shaders convert to NDC using a viewport uniform.

mod common;
mod ctx;
mod mesh;
mod texture;

pub use ctx::{RenderCtx, RenderTarget};
pub use mesh::MeshRenderer;
pub use texture::{GpuTexture, TextureRenderer, TexturedVertex};
