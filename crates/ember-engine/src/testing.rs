//! In-memory platform used by the engine tests.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

use anyhow::anyhow;
use image::RgbaImage;

use crate::coords::{Vec2, Viewport};
use crate::paint::Color;
use crate::surface::{
    Canvas, DisplayMode, Mesh, Platform, Surface, SurfaceError, SurfaceEvent, SurfaceRequest,
    Topology,
};

/// Recorded surface call.
#[derive(Debug, Clone, PartialEq)]
pub enum Op {
    Vsync(bool),
    Viewport(Viewport),
    Clear(Color),
    DrawTexture { size: (u32, u32), scale: Vec2 },
    Mesh(Topology, usize),
    Present,
    Close,
}

pub type OpLog = Rc<RefCell<Vec<Op>>>;

#[derive(Default)]
pub struct FakePlatform {
    modes: Vec<DisplayMode>,
    frames: Vec<Vec<SurfaceEvent>>,
    ops: OpLog,
    requests: Rc<RefCell<Vec<SurfaceRequest>>>,
    fail_open: bool,
    open_closed: bool,
    fail_present: bool,
}

impl FakePlatform {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_modes(mut self, modes: Vec<DisplayMode>) -> Self {
        self.modes = modes;
        self
    }

    /// Events delivered per frame; batch `i` is released by the `i`-th pump.
    pub fn with_frames(mut self, frames: Vec<Vec<SurfaceEvent>>) -> Self {
        self.frames = frames;
        self
    }

    pub fn failing_open(mut self) -> Self {
        self.fail_open = true;
        self
    }

    pub fn opening_closed(mut self) -> Self {
        self.open_closed = true;
        self
    }

    pub fn failing_present(mut self) -> Self {
        self.fail_present = true;
        self
    }

    pub fn ops(&self) -> OpLog {
        self.ops.clone()
    }

    pub fn requests(&self) -> Rc<RefCell<Vec<SurfaceRequest>>> {
        self.requests.clone()
    }
}

impl Platform for FakePlatform {
    type Surface = FakeSurface;

    fn fullscreen_modes(&mut self) -> Vec<DisplayMode> {
        self.modes.clone()
    }

    fn open(&mut self, request: &SurfaceRequest) -> Result<FakeSurface, SurfaceError> {
        self.requests.borrow_mut().push(request.clone());
        if self.fail_open {
            return Err(SurfaceError::Backend(anyhow!("no display")));
        }

        let size = (request.mode.width, request.mode.height);
        Ok(FakeSurface {
            open: !self.open_closed,
            size,
            frames: self.frames.drain(..).collect(),
            pending: VecDeque::new(),
            ops: self.ops.clone(),
            fail_present: self.fail_present,
        })
    }
}

pub struct FakeSurface {
    open: bool,
    size: (u32, u32),
    frames: VecDeque<Vec<SurfaceEvent>>,
    pending: VecDeque<SurfaceEvent>,
    ops: OpLog,
    fail_present: bool,
}

impl FakeSurface {
    fn record(&self, op: Op) {
        self.ops.borrow_mut().push(op);
    }
}

impl Canvas for FakeSurface {
    fn size(&self) -> (u32, u32) {
        self.size
    }

    fn draw_mesh(&mut self, mesh: &Mesh) {
        self.record(Op::Mesh(mesh.topology, mesh.vertices.len()));
    }
}

impl Surface for FakeSurface {
    /// Size of the uploaded image.
    type Texture = (u32, u32);

    fn is_open(&self) -> bool {
        self.open
    }

    fn set_vsync(&mut self, enabled: bool) {
        self.record(Op::Vsync(enabled));
    }

    /// Releases the next scripted frame batch.
    fn pump_events(&mut self) {
        let batch = self.frames.pop_front().unwrap_or_default();
        self.pending.extend(batch);
    }

    fn poll_event(&mut self) -> Option<SurfaceEvent> {
        let event = self.pending.pop_front()?;
        if let SurfaceEvent::Resized { width, height } = event {
            self.size = (width, height);
        }
        Some(event)
    }

    fn set_viewport(&mut self, viewport: Viewport) {
        self.record(Op::Viewport(viewport));
    }

    fn clear(&mut self, color: Color) {
        self.record(Op::Clear(color));
    }

    fn create_texture(&mut self, image: &RgbaImage) -> Result<(u32, u32), SurfaceError> {
        if !self.open {
            return Err(SurfaceError::Closed);
        }
        Ok(image.dimensions())
    }

    fn draw_texture(&mut self, texture: &(u32, u32), _origin: Vec2, scale: Vec2) {
        self.record(Op::DrawTexture {
            size: *texture,
            scale,
        });
    }

    fn present(&mut self) -> Result<(), SurfaceError> {
        if self.fail_present {
            return Err(SurfaceError::Fatal("device lost".into()));
        }
        self.record(Op::Present);
        Ok(())
    }

    fn close(&mut self) {
        self.open = false;
        self.record(Op::Close);
    }
}
