use std::cell::RefCell;
use std::rc::Rc;
use std::sync::Arc;

use anyhow::Context;
use winit::dpi::PhysicalSize;
use winit::event_loop::{ActiveEventLoop, EventLoop};
use winit::window::{Fullscreen, Window};

use crate::device::{Gpu, GpuInit};
use crate::surface::{Decorations, DisplayMode, Platform, SurfaceError, SurfaceRequest};

use super::pump::{monitor_modes, to_display_mode, with_active_loop};
use super::surface::WinitSurface;

/// Desktop platform: one winit event loop shared with the surface it opens.
pub struct WinitPlatform {
    event_loop: Rc<RefCell<EventLoop<()>>>,
    gpu_init: GpuInit,
}

impl WinitPlatform {
    /// Creates the event loop. Must be called on the main thread.
    pub fn new() -> anyhow::Result<Self> {
        let event_loop = EventLoop::new().context("failed to create winit EventLoop")?;
        Ok(Self {
            event_loop: Rc::new(RefCell::new(event_loop)),
            gpu_init: GpuInit::default(),
        })
    }

    /// Overrides the GPU parameters used by surfaces opened afterwards.
    pub fn with_gpu_init(mut self, init: GpuInit) -> Self {
        self.gpu_init = init;
        self
    }
}

impl Platform for WinitPlatform {
    type Surface = WinitSurface;

    fn fullscreen_modes(&mut self) -> Vec<DisplayMode> {
        let mut event_loop = self.event_loop.borrow_mut();
        match with_active_loop(&mut event_loop, |active| {
            active
                .primary_monitor()
                .or_else(|| active.available_monitors().next())
                .map(|m| monitor_modes(&m))
                .unwrap_or_default()
        }) {
            Ok(modes) => modes,
            Err(e) => {
                log::warn!("failed to enumerate display modes: {e}");
                Vec::new()
            }
        }
    }

    fn open(&mut self, request: &SurfaceRequest) -> Result<WinitSurface, SurfaceError> {
        let window = {
            let mut event_loop = self.event_loop.borrow_mut();
            with_active_loop(&mut event_loop, |active| create_window(active, request))??
        };
        let window = Arc::new(window);

        let gpu = pollster::block_on(Gpu::new(window.clone(), self.gpu_init.clone()))
            .context("GPU initialization failed")?;

        log::info!(
            "opened {}x{} surface \"{}\"{}",
            gpu.size().0,
            gpu.size().1,
            request.title,
            if request.fullscreen { " (fullscreen)" } else { "" }
        );

        Ok(WinitSurface::new(self.event_loop.clone(), window, gpu))
    }
}

fn create_window(
    active: &ActiveEventLoop,
    request: &SurfaceRequest,
) -> Result<Window, SurfaceError> {
    let mode = request.mode;
    let mut attrs = Window::default_attributes()
        .with_title(request.title.clone())
        .with_inner_size(PhysicalSize::new(mode.width, mode.height))
        .with_decorations(request.decorations == Decorations::Full);

    if request.fullscreen {
        attrs = attrs.with_fullscreen(Some(fullscreen_for(active, mode)));
    }

    active
        .create_window(attrs)
        .context("failed to create window")
        .map_err(SurfaceError::Backend)
}

/// Exclusive mode matching `mode` on the primary monitor, else borderless.
fn fullscreen_for(active: &ActiveEventLoop, mode: DisplayMode) -> Fullscreen {
    let monitor = active.primary_monitor();

    let exclusive = monitor.as_ref().and_then(|m| {
        m.video_modes().find(|vm| {
            let dm = to_display_mode(vm);
            dm.matches_size(mode.width, mode.height)
                && mode
                    .refresh_rate_millihertz
                    .is_none_or(|hz| dm.refresh_rate_millihertz == Some(hz))
        })
    });

    match exclusive {
        Some(vm) => Fullscreen::Exclusive(vm),
        None => {
            log::warn!(
                "no exclusive {}x{} mode; using borderless fullscreen",
                mode.width,
                mode.height
            );
            Fullscreen::Borderless(monitor)
        }
    }
}
