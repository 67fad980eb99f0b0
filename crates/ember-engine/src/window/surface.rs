use std::cell::RefCell;
use std::collections::VecDeque;
use std::ops::Range;
use std::rc::Rc;
use std::sync::Arc;
use std::time::Duration;

use anyhow::anyhow;
use image::RgbaImage;
use winit::application::ApplicationHandler;
use winit::event::WindowEvent;
use winit::event_loop::{ActiveEventLoop, EventLoop};
use winit::platform::pump_events::{EventLoopExtPumpEvents, PumpStatus};
use winit::window::{Window, WindowId};

use crate::coords::{Vec2, Viewport};
use crate::device::{Gpu, SurfaceErrorAction};
use crate::input::platform::winit::translate_window_event;
use crate::paint::Color;
use crate::render::{GpuTexture, MeshRenderer, RenderCtx, RenderTarget, TextureRenderer, TexturedVertex};
use crate::surface::{Canvas, Mesh, Surface, SurfaceError, SurfaceEvent, Topology, Vertex};

/// A winit window presenting through wgpu.
///
/// Draw calls are recorded and encoded in a single pass at `present`.
pub struct WinitSurface {
    event_loop: Rc<RefCell<EventLoop<()>>>,
    live: Option<Live>,

    meshes: MeshRenderer,
    textures: TextureRenderer,
    viewport: Viewport,

    pending: VecDeque<SurfaceEvent>,
    frame: FrameDraws,
}

struct Live {
    gpu: Gpu,
    window: Arc<Window>,
}

/// Everything recorded between `clear` and `present`.
#[derive(Default)]
struct FrameDraws {
    clear: Color,
    ops: Vec<DrawOp>,
    vertices: Vec<Vertex>,
    quads: Vec<TexturedVertex>,
}

enum DrawOp {
    Mesh { topology: Topology, range: Range<u32> },
    Texture { texture: GpuTexture, range: Range<u32> },
}

impl FrameDraws {
    fn cleared(color: Color) -> Self {
        Self {
            clear: color,
            ..Self::default()
        }
    }

    fn push_mesh(&mut self, mesh: &Mesh) {
        let start = self.vertices.len() as u32;
        self.vertices.extend(mesh.to_primitive_list());
        let end = self.vertices.len() as u32;
        if start < end {
            self.ops.push(DrawOp::Mesh {
                topology: mesh.topology,
                range: start..end,
            });
        }
    }

    fn push_texture(&mut self, texture: &GpuTexture, origin: Vec2, scale: Vec2) {
        let start = self.quads.len() as u32;
        self.quads
            .extend(TexturedVertex::quad(texture.size(), origin, scale));
        self.ops.push(DrawOp::Texture {
            texture: texture.clone(),
            range: start..self.quads.len() as u32,
        });
    }
}

impl WinitSurface {
    pub(super) fn new(event_loop: Rc<RefCell<EventLoop<()>>>, window: Arc<Window>, gpu: Gpu) -> Self {
        let (w, h) = gpu.size();
        Self {
            event_loop,
            live: Some(Live { gpu, window }),
            meshes: MeshRenderer::new(),
            textures: TextureRenderer::new(),
            viewport: Viewport::from_size(w, h),
            pending: VecDeque::new(),
            frame: FrameDraws::default(),
        }
    }
}

/// Forwards this window's events; applies resizes to the swapchain right away.
struct Collector<'a> {
    window_id: WindowId,
    gpu: &'a mut Gpu,
    out: &'a mut VecDeque<SurfaceEvent>,
}

impl ApplicationHandler for Collector<'_> {
    fn resumed(&mut self, _: &ActiveEventLoop) {}

    fn window_event(&mut self, _: &ActiveEventLoop, window_id: WindowId, event: WindowEvent) {
        if window_id != self.window_id {
            return;
        }

        if let WindowEvent::Resized(size) = &event {
            self.gpu.resize((size.width, size.height));
        }

        if let Some(ev) = lifecycle_event(&event) {
            self.out.push_back(ev);
        } else if let Some(input) = translate_window_event(&event) {
            self.out.push_back(SurfaceEvent::Input(input));
        }
    }
}

fn lifecycle_event(event: &WindowEvent) -> Option<SurfaceEvent> {
    match event {
        WindowEvent::CloseRequested | WindowEvent::Destroyed => Some(SurfaceEvent::CloseRequested),
        WindowEvent::Resized(size) => Some(SurfaceEvent::Resized {
            width: size.width,
            height: size.height,
        }),
        _ => None,
    }
}

impl Canvas for WinitSurface {
    fn size(&self) -> (u32, u32) {
        self.live.as_ref().map_or((0, 0), |l| l.gpu.size())
    }

    fn draw_mesh(&mut self, mesh: &Mesh) {
        self.frame.push_mesh(mesh);
    }
}

impl Surface for WinitSurface {
    type Texture = GpuTexture;

    fn is_open(&self) -> bool {
        self.live.is_some()
    }

    fn set_vsync(&mut self, enabled: bool) {
        if let Some(live) = self.live.as_mut() {
            live.gpu.set_vsync(enabled);
        }
    }

    fn pump_events(&mut self) {
        let Some(live) = self.live.as_mut() else {
            return;
        };

        let mut collector = Collector {
            window_id: live.window.id(),
            gpu: &mut live.gpu,
            out: &mut self.pending,
        };

        let status = self
            .event_loop
            .borrow_mut()
            .pump_app_events(Some(Duration::ZERO), &mut collector);

        if let PumpStatus::Exit(code) = status {
            log::warn!("event loop exited with code {code}");
            self.pending.push_back(SurfaceEvent::CloseRequested);
        }
    }

    fn poll_event(&mut self) -> Option<SurfaceEvent> {
        self.pending.pop_front()
    }

    fn set_viewport(&mut self, viewport: Viewport) {
        if viewport.is_valid() {
            self.viewport = viewport;
        }
    }

    fn clear(&mut self, color: Color) {
        self.frame = FrameDraws::cleared(color);
    }

    fn create_texture(&mut self, image: &RgbaImage) -> Result<GpuTexture, SurfaceError> {
        let live = self.live.as_ref().ok_or(SurfaceError::Closed)?;
        let ctx = RenderCtx::new(
            live.gpu.device(),
            live.gpu.queue(),
            live.gpu.surface_format(),
            self.viewport,
        );
        Ok(self.textures.create_texture(&ctx, image)?)
    }

    fn draw_texture(&mut self, texture: &GpuTexture, origin: Vec2, scale: Vec2) {
        self.frame.push_texture(texture, origin, scale);
    }

    fn present(&mut self) -> Result<(), SurfaceError> {
        let draws = std::mem::take(&mut self.frame);

        let live = self.live.as_mut().ok_or(SurfaceError::Closed)?;
        let (w, h) = live.gpu.size();
        if w == 0 || h == 0 {
            // Minimized; nothing to present into.
            return Ok(());
        }

        let mut frame = match live.gpu.begin_frame() {
            Ok(frame) => frame,
            Err(e) => {
                let msg = e.to_string();
                return Err(match live.gpu.handle_surface_error(e) {
                    SurfaceErrorAction::Fatal => SurfaceError::Fatal(msg),
                    SurfaceErrorAction::Reconfigured | SurfaceErrorAction::SkipFrame => {
                        SurfaceError::Backend(anyhow!("swapchain unavailable: {msg}"))
                    }
                });
            }
        };

        let ctx = RenderCtx::new(
            live.gpu.device(),
            live.gpu.queue(),
            live.gpu.surface_format(),
            self.viewport,
        );
        self.meshes.prepare(&ctx, &draws.vertices);
        self.textures.prepare(&ctx, &draws.quads);

        {
            let mut target = RenderTarget::new(&mut frame.encoder, &frame.view);
            let mut rpass = target.begin_pass(draws.clear);

            for op in &draws.ops {
                match op {
                    DrawOp::Mesh { topology, range } => {
                        self.meshes.draw(&mut rpass, *topology, range.clone());
                    }
                    DrawOp::Texture { texture, range } => {
                        self.textures.draw(&mut rpass, texture, range.clone());
                    }
                }
            }
        }

        live.gpu.submit(frame);
        Ok(())
    }

    fn close(&mut self) {
        if let Some(live) = self.live.take() {
            log::debug!("closing window {:?}", live.window.id());
        }
        self.pending.clear();
        self.frame = FrameDraws::default();
    }
}

#[cfg(test)]
mod tests {
    use winit::dpi::PhysicalSize;

    use super::*;

    #[test]
    fn close_and_resize_are_lifecycle_events() {
        assert_eq!(
            lifecycle_event(&WindowEvent::CloseRequested),
            Some(SurfaceEvent::CloseRequested)
        );
        assert_eq!(
            lifecycle_event(&WindowEvent::Resized(PhysicalSize::new(640, 480))),
            Some(SurfaceEvent::Resized {
                width: 640,
                height: 480
            })
        );
        assert_eq!(lifecycle_event(&WindowEvent::Focused(true)), None);
    }

    #[test]
    fn recorded_meshes_keep_submission_order() {
        let mut draws = FrameDraws::cleared(Color::BLACK);
        draws.push_mesh(&Mesh::rect(Vec2::zero(), Vec2::new(4.0, 4.0), Color::RED));

        let mut strip = Mesh::new(Topology::LineStrip);
        strip.push(Vec2::zero(), Color::WHITE);
        strip.push(Vec2::new(1.0, 0.0), Color::WHITE);
        strip.push(Vec2::new(1.0, 1.0), Color::WHITE);
        draws.push_mesh(&strip);
        draws.push_mesh(&Mesh::new(Topology::TriangleList));

        assert_eq!(draws.ops.len(), 2);
        assert!(matches!(
            &draws.ops[1],
            DrawOp::Mesh { topology: Topology::LineStrip, range } if *range == (6..10)
        ));
        assert_eq!(draws.vertices.len(), 10);
    }
}
