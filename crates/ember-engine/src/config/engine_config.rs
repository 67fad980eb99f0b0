use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::paint::Color;

/// Configuration read by [`Engine`](crate::core::Engine).
///
/// Invariant: when `vsync` is on, `target_frame_rate` is ignored for pacing.
#[derive(Debug, Clone, PartialEq)]
pub struct EngineConfig {
    /// Requested surface width in pixels.
    pub width: u32,
    /// Requested surface height in pixels.
    pub height: u32,
    pub title: String,

    pub fullscreen: bool,
    pub vsync: bool,
    /// Frames per second when vsync is off. `0` leaves the loop uncapped.
    pub target_frame_rate: u32,

    pub enable_keyboard: bool,
    pub enable_mouse: bool,

    /// Solid background used when no clear texture is active.
    pub clear_color: Color,
    /// Image stretched over the surface before every frame.
    pub clear_texture_path: Option<PathBuf>,
    /// Destination of the diagnostics sink; truncated on `initialize()`.
    pub log_file: PathBuf,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            width: 1280,
            height: 720,
            title: "ember".to_string(),
            fullscreen: false,
            vsync: true,
            target_frame_rate: 60,
            enable_keyboard: true,
            enable_mouse: true,
            clear_color: Color::rgb(30, 30, 30),
            clear_texture_path: None,
            log_file: PathBuf::from("engine.log"),
        }
    }
}

impl EngineConfig {
    pub fn size(mut self, width: u32, height: u32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn fullscreen(mut self, fullscreen: bool) -> Self {
        self.fullscreen = fullscreen;
        self
    }

    pub fn vsync(mut self, vsync: bool) -> Self {
        self.vsync = vsync;
        self
    }

    pub fn target_frame_rate(mut self, fps: u32) -> Self {
        self.target_frame_rate = fps;
        self
    }

    pub fn keyboard(mut self, enabled: bool) -> Self {
        self.enable_keyboard = enabled;
        self
    }

    pub fn mouse(mut self, enabled: bool) -> Self {
        self.enable_mouse = enabled;
        self
    }

    pub fn clear_color(mut self, color: Color) -> Self {
        self.clear_color = color;
        self
    }

    pub fn clear_texture(mut self, path: impl AsRef<Path>) -> Self {
        self.clear_texture_path = Some(path.as_ref().to_path_buf());
        self
    }

    pub fn log_file(mut self, path: impl AsRef<Path>) -> Self {
        self.log_file = path.as_ref().to_path_buf();
        self
    }

    /// Target duration of one frame, or `None` when no sleep-based pacing applies.
    pub fn frame_period(&self) -> Option<Duration> {
        if self.vsync || self.target_frame_rate == 0 {
            return None;
        }
        Some(Duration::from_secs_f64(1.0 / f64::from(self.target_frame_rate)))
    }
}
