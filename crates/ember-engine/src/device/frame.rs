/// One acquired swapchain image plus the encoder recording into it.
///
/// Short-lived: holding it blocks acquisition of the next image. Hand it back
/// through [`Gpu::submit`](super::Gpu::submit) to present.
pub struct GpuFrame {
    pub surface_texture: wgpu::SurfaceTexture,
    pub view: wgpu::TextureView,
    pub encoder: wgpu::CommandEncoder,
}
