/// A display resolution.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct DisplayMode {
    pub width: u32,
    pub height: u32,
    /// Refresh rate when the platform reports one.
    pub refresh_rate_millihertz: Option<u32>,
}

impl DisplayMode {
    pub const fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            refresh_rate_millihertz: None,
        }
    }

    pub fn matches_size(&self, width: u32, height: u32) -> bool {
        self.width == width && self.height == height
    }
}

/// Window chrome.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Decorations {
    /// Title bar and close button.
    Full,
    /// Borderless; used for fullscreen.
    None,
}

/// Everything a platform needs to open the surface.
#[derive(Debug, Clone, PartialEq)]
pub struct SurfaceRequest {
    pub mode: DisplayMode,
    pub title: String,
    pub fullscreen: bool,
    pub decorations: Decorations,
}

/// Resolves the mode to open.
///
/// Windowed requests are used verbatim. Fullscreen requests take the
/// enumerated mode matching `width x height`, falling back to the first one
/// (platforms list the best mode first). `None` only when fullscreen is
/// requested and no mode is enumerated.
pub fn pick_display_mode(
    width: u32,
    height: u32,
    fullscreen: bool,
    fullscreen_modes: &[DisplayMode],
) -> Option<DisplayMode> {
    if !fullscreen {
        return Some(DisplayMode::new(width, height));
    }

    fullscreen_modes
        .iter()
        .find(|m| m.matches_size(width, height))
        .or_else(|| fullscreen_modes.first())
        .copied()
}
