/// What the presenter should do after a failed frame acquisition.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum SurfaceErrorAction {
    /// Swapchain was reconfigured; drop this frame and try again next one.
    Reconfigured,
    /// Transient; drop this frame.
    SkipFrame,
    /// Device is unusable (commonly out of memory).
    Fatal,
}
