/// Errors raised by a surface backend.
#[derive(Debug, thiserror::Error)]
pub enum SurfaceError {
    /// The operation needs an open surface.
    #[error("surface is closed")]
    Closed,

    /// Unrecoverable device/presentation failure (commonly out of memory).
    #[error("fatal surface error: {0}")]
    Fatal(String),

    #[error(transparent)]
    Backend(#[from] anyhow::Error),
}
