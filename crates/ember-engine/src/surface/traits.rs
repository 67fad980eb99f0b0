use image::RgbaImage;

use super::error::SurfaceError;
use super::mesh::Mesh;
use super::mode::{DisplayMode, SurfaceRequest};
use crate::coords::{Vec2, Viewport};
use crate::input::InputEvent;
use crate::paint::Color;

/// Normalized platform event.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum SurfaceEvent {
    /// The user asked to close the window.
    CloseRequested,
    /// New drawable size in pixels.
    Resized { width: u32, height: u32 },
    Input(InputEvent),
}

/// Per-frame draw target handed to render callbacks.
pub trait Canvas {
    /// Current drawable size in pixels.
    fn size(&self) -> (u32, u32);

    /// Queues `mesh` on top of what was drawn so far this frame.
    fn draw_mesh(&mut self, mesh: &Mesh);
}

/// The display surface owned by the engine.
///
/// A frame is `clear` → draws → `present`. Events are polled between frames.
pub trait Surface: Canvas {
    /// Backend image handle created by [`Surface::create_texture`].
    type Texture;

    fn is_open(&self) -> bool;

    fn set_vsync(&mut self, enabled: bool);

    /// Collects everything the platform has queued since the last pump.
    /// Called once at the start of every frame.
    fn pump_events(&mut self);

    /// Next pumped event; `None` once the queue is drained.
    fn poll_event(&mut self) -> Option<SurfaceEvent>;

    /// Sets the region of logical space mapped onto the surface.
    fn set_viewport(&mut self, viewport: Viewport);

    /// Starts a frame filled with `color`.
    fn clear(&mut self, color: Color);

    fn create_texture(&mut self, image: &RgbaImage) -> Result<Self::Texture, SurfaceError>;

    /// Draws `texture` with its top-left at `origin`, scaled per axis.
    fn draw_texture(&mut self, texture: &Self::Texture, origin: Vec2, scale: Vec2);

    /// Shows the finished frame.
    fn present(&mut self) -> Result<(), SurfaceError>;

    fn close(&mut self);
}

/// Factory for the engine's single surface.
pub trait Platform {
    type Surface: Surface;

    /// Fullscreen modes, best first.
    fn fullscreen_modes(&mut self) -> Vec<DisplayMode>;

    fn open(&mut self, request: &SurfaceRequest) -> Result<Self::Surface, SurfaceError>;
}
