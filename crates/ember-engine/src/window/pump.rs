use std::time::Duration;

use anyhow::anyhow;
use winit::application::ApplicationHandler;
use winit::event::WindowEvent;
use winit::event_loop::{ActiveEventLoop, EventLoop};
use winit::monitor::{MonitorHandle, VideoModeHandle};
use winit::platform::pump_events::{EventLoopExtPumpEvents, PumpStatus};
use winit::window::WindowId;

use crate::surface::{DisplayMode, SurfaceError};

/// Pumps before giving up on getting an active loop.
const PUMP_LIMIT: usize = 100;

/// Runs `f` with an active event loop and returns its result.
///
/// winit 0.30 only hands out `ActiveEventLoop` inside handler callbacks, so
/// the loop is pumped until one of them fires.
pub(super) fn with_active_loop<R>(
    event_loop: &mut EventLoop<()>,
    f: impl FnMut(&ActiveEventLoop) -> R,
) -> Result<R, SurfaceError> {
    let mut handler = RunOnce { f, out: None };

    for _ in 0..PUMP_LIMIT {
        let status = event_loop.pump_app_events(Some(Duration::ZERO), &mut handler);
        if let Some(out) = handler.out.take() {
            return Ok(out);
        }
        if let PumpStatus::Exit(code) = status {
            return Err(anyhow!("event loop exited with code {code}").into());
        }
    }

    Err(anyhow!("event loop never became active").into())
}

struct RunOnce<F, R> {
    f: F,
    out: Option<R>,
}

impl<F, R> RunOnce<F, R>
where
    F: FnMut(&ActiveEventLoop) -> R,
{
    fn run(&mut self, event_loop: &ActiveEventLoop) {
        if self.out.is_none() {
            self.out = Some((self.f)(event_loop));
        }
    }
}

impl<F, R> ApplicationHandler for RunOnce<F, R>
where
    F: FnMut(&ActiveEventLoop) -> R,
{
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        self.run(event_loop);
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        self.run(event_loop);
    }

    fn window_event(&mut self, _: &ActiveEventLoop, _: WindowId, _: WindowEvent) {}
}

/// Fullscreen modes of `monitor`, best first (largest area, then highest refresh).
pub(super) fn monitor_modes(monitor: &MonitorHandle) -> Vec<DisplayMode> {
    rank_modes(monitor.video_modes().map(|m| to_display_mode(&m)).collect())
}

pub(super) fn to_display_mode(mode: &VideoModeHandle) -> DisplayMode {
    let size = mode.size();
    DisplayMode {
        width: size.width,
        height: size.height,
        refresh_rate_millihertz: Some(mode.refresh_rate_millihertz()),
    }
}

pub(super) fn rank_modes(mut modes: Vec<DisplayMode>) -> Vec<DisplayMode> {
    modes.sort_by(|a, b| {
        let area = |m: &DisplayMode| u64::from(m.width) * u64::from(m.height);
        area(b)
            .cmp(&area(a))
            .then(b.refresh_rate_millihertz.cmp(&a.refresh_rate_millihertz))
    });
    modes.dedup();
    modes
}
