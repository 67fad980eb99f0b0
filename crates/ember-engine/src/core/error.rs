use std::path::PathBuf;

use crate::surface::SurfaceError;

/// Errors reported by [`Engine`](super::Engine).
#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    /// The loop or a texture upload needs an open surface.
    #[error("surface is not open; did you call initialize()?")]
    NotInitialized,

    #[error("no fullscreen display mode available")]
    NoDisplayMode,

    /// The platform returned a surface that is not open.
    #[error("failed to create window")]
    SurfaceClosed,

    #[error(transparent)]
    Surface(#[from] SurfaceError),

    #[error("failed to load clear texture {}: {source}", .path.display())]
    Texture {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    /// An update or render hook failed.
    #[error("callback failed: {0:#}")]
    Callback(anyhow::Error),
}
