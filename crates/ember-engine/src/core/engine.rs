use std::path::Path;
use std::sync::Arc;

use crate::config::EngineConfig;
use crate::coords::Viewport;
use crate::input::{InputFilter, InputSnapshot};
use crate::logging::{ConsoleFileSink, DiagnosticsSink};
use crate::paint::Color;
use crate::surface::{
    pick_display_mode, Canvas, Decorations, Platform, Surface, SurfaceError, SurfaceEvent,
    SurfaceRequest,
};
use crate::time::{Clock, FrameClock, FramePacer, SystemClock};

use super::app::App;
use super::background::{BackgroundFill, BackgroundImage};
use super::error::EngineError;
use super::stop::StopHandle;

type TextureOf<P> = <<P as Platform>::Surface as Surface>::Texture;

/// Single-surface frame loop.
///
/// Lifecycle: [`initialize`](Self::initialize) once, then [`run`](Self::run)
/// (again after a clean stop if the surface is still open), then
/// [`shutdown`](Self::shutdown).
///
/// Everything runs on the calling thread. `run` must not be driven from two
/// threads at once; `&mut self` enforces this for safe code.
pub struct Engine<P: Platform, C: Clock = SystemClock> {
    config: EngineConfig,
    platform: P,
    clock: C,
    sink: Arc<dyn DiagnosticsSink>,

    surface: Option<P::Surface>,
    background: BackgroundFill<TextureOf<P>>,
    input: InputSnapshot,

    running: StopHandle,
    frame_clock: FrameClock,
    pacer: FramePacer,
}

impl<P: Platform> Engine<P, SystemClock> {
    /// Creates an engine logging to the console and `config.log_file`.
    pub fn new(config: EngineConfig, platform: P) -> Self {
        let clock = SystemClock::new();
        Self {
            platform,
            sink: Arc::new(ConsoleFileSink::new()),
            surface: None,
            background: BackgroundFill::new(config.clear_color),
            input: InputSnapshot::default(),
            running: StopHandle::default(),
            frame_clock: FrameClock::start(&clock),
            pacer: FramePacer::from_config(&config),
            clock,
            config,
        }
    }
}

impl<P: Platform, C: Clock> Engine<P, C> {
    /// Replaces the diagnostics sink.
    pub fn with_sink(mut self, sink: Arc<dyn DiagnosticsSink>) -> Self {
        self.sink = sink;
        self
    }

    /// Replaces the time source (tests drive a [`ManualClock`](crate::time::ManualClock)).
    pub fn with_clock<C2: Clock>(self, clock: C2) -> Engine<P, C2> {
        Engine {
            frame_clock: FrameClock::start(&clock),
            clock,
            config: self.config,
            platform: self.platform,
            sink: self.sink,
            surface: self.surface,
            background: self.background,
            input: self.input,
            running: self.running,
            pacer: self.pacer,
        }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn input(&self) -> &InputSnapshot {
        &self.input
    }

    pub fn sink(&self) -> &Arc<dyn DiagnosticsSink> {
        &self.sink
    }

    pub fn surface(&self) -> Option<&P::Surface> {
        self.surface.as_ref()
    }

    pub fn background(&self) -> &BackgroundFill<TextureOf<P>> {
        &self.background
    }

    pub fn is_running(&self) -> bool {
        self.running.is_running()
    }

    /// Handle that can end the loop from inside a callback.
    pub fn stop_handle(&self) -> StopHandle {
        self.running.clone()
    }

    fn surface_open(&self) -> bool {
        self.surface.as_ref().is_some_and(|s| s.is_open())
    }

    /// Opens the surface and primes the first frame.
    ///
    /// Every failure is logged at error level before being returned; the loop
    /// must not be started after an error.
    pub fn initialize(&mut self) -> Result<(), EngineError> {
        if let Err(e) = self.sink.set_destination(&self.config.log_file) {
            self.sink.warn(&format!(
                "failed to open log file {}: {e}",
                self.config.log_file.display()
            ));
        }
        self.sink.info("engine init...");

        match self.open_surface() {
            Ok(()) => {
                self.sink.info("engine initialized.");
                Ok(())
            }
            Err(e) => {
                self.sink.error(&format!("engine init failed: {e}"));
                Err(e)
            }
        }
    }

    fn open_surface(&mut self) -> Result<(), EngineError> {
        if let Some(mut previous) = self.surface.take() {
            previous.close();
        }
        self.background.clear_image();

        let cfg = &self.config;
        let modes = if cfg.fullscreen {
            self.platform.fullscreen_modes()
        } else {
            Vec::new()
        };
        let mode = pick_display_mode(cfg.width, cfg.height, cfg.fullscreen, &modes)
            .ok_or(EngineError::NoDisplayMode)?;

        let request = SurfaceRequest {
            mode,
            title: cfg.title.clone(),
            fullscreen: cfg.fullscreen,
            decorations: if cfg.fullscreen {
                Decorations::None
            } else {
                Decorations::Full
            },
        };

        let mut surface = self.platform.open(&request)?;
        if !surface.is_open() {
            return Err(EngineError::SurfaceClosed);
        }

        surface.set_vsync(cfg.vsync);
        if cfg.vsync {
            self.sink.info("VSync ON");
        } else if cfg.target_frame_rate > 0 {
            self.sink.info(&format!(
                "vsync off, fps capped via sleep to {}",
                cfg.target_frame_rate
            ));
        }

        self.surface = Some(surface);

        match self.config.clear_texture_path.clone() {
            // Failure already logged as a warning; solid color stays active.
            Some(path) => {
                let _ = self.set_clear_texture(&path);
            }
            None => {
                if let Some(surface) = self.surface.as_mut() {
                    surface.clear(self.background.color());
                    surface.present()?;
                }
            }
        }

        Ok(())
    }

    /// Runs the loop until [`stop`](Self::stop), a stop handle, or a close request.
    ///
    /// Hook errors end the loop and are returned as [`EngineError::Callback`].
    pub fn run<A: App + ?Sized>(&mut self, app: &mut A) -> Result<(), EngineError> {
        if !self.surface_open() {
            self.sink
                .error("run called but surface is not open. did you call initialize()?");
            return Err(EngineError::NotInitialized);
        }

        self.running.start();
        self.frame_clock.reset(&self.clock);

        let result = self.run_loop(app);

        // An error exit leaves the flag set; later runs must start from NotRunning.
        self.running.stop();
        result
    }

    fn run_loop<A: App + ?Sized>(&mut self, app: &mut A) -> Result<(), EngineError> {
        while self.running.is_running() {
            self.process_events();

            let frame = self.frame_clock.restart(&self.clock);

            app.update(frame.dt, &self.input)
                .map_err(EngineError::Callback)?;

            self.render_frame(app)?;

            self.pacer.pace(&self.frame_clock, &self.clock);
        }
        Ok(())
    }

    /// Requests the loop to end after the current iteration.
    pub fn stop(&mut self) {
        self.running.stop();
    }

    /// Drains every pending surface event into the snapshot and lifecycle state.
    fn process_events(&mut self) {
        let Some(surface) = self.surface.as_mut() else {
            return;
        };

        let filter = InputFilter {
            keyboard: self.config.enable_keyboard,
            mouse: self.config.enable_mouse,
        };

        surface.pump_events();
        while let Some(event) = surface.poll_event() {
            match event {
                SurfaceEvent::CloseRequested => {
                    self.sink.info("window close requested.");
                    self.running.stop();
                }
                SurfaceEvent::Resized { width, height } => {
                    surface.set_viewport(Viewport::from_size(width, height));
                }
                SurfaceEvent::Input(input) => {
                    self.input.apply_event(&input, filter);
                }
            }
        }
    }

    fn render_frame<A: App + ?Sized>(&mut self, app: &mut A) -> Result<(), EngineError> {
        let Some(surface) = self.surface.as_mut() else {
            return Err(EngineError::NotInitialized);
        };

        self.background.paint(surface);

        app.render(surface).map_err(EngineError::Callback)?;

        match surface.present() {
            Ok(()) => Ok(()),
            Err(SurfaceError::Backend(e)) => {
                self.sink.warn(&format!("frame skipped: {e:#}"));
                Ok(())
            }
            Err(e) => {
                self.sink.error(&format!("present failed: {e}"));
                Err(e.into())
            }
        }
    }

    /// Uses a solid background color from now on; drops any clear texture.
    pub fn set_clear_color(&mut self, color: Color) {
        self.background.set_color(color);
    }

    /// Loads `path` and stretches it over the surface as the background.
    ///
    /// On failure a warning is logged, any previous image is dropped and the
    /// solid color is used.
    pub fn set_clear_texture(&mut self, path: impl AsRef<Path>) -> Result<(), EngineError> {
        let path = path.as_ref();

        match self.load_clear_texture(path) {
            Ok(image) => {
                self.background.set_image(image);
                Ok(())
            }
            Err(e) => {
                self.sink.warn(&format!(
                    "failed to load clear texture: {} ({e})",
                    path.display()
                ));
                self.background.clear_image();
                Err(e)
            }
        }
    }

    fn load_clear_texture(
        &mut self,
        path: &Path,
    ) -> Result<BackgroundImage<TextureOf<P>>, EngineError> {
        let image = image::open(path)
            .map_err(|source| EngineError::Texture {
                path: path.to_path_buf(),
                source,
            })?
            .to_rgba8();

        let surface = self
            .surface
            .as_mut()
            .filter(|s| s.is_open())
            .ok_or(EngineError::NotInitialized)?;

        let texture = surface.create_texture(&image)?;
        let image_size = image.dimensions();

        Ok(BackgroundImage {
            texture,
            image_size,
            scale: BackgroundImage::<TextureOf<P>>::cover_scale(surface.size(), image_size),
        })
    }

    /// Closes the surface if it is open. Safe to call repeatedly.
    pub fn shutdown(&mut self) {
        self.sink.info("engine shutdown...");
        if let Some(surface) = self.surface.as_mut() {
            if surface.is_open() {
                surface.close();
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use anyhow::anyhow;
    use log::Level;

    use super::*;
    use crate::core::Callbacks;
    use crate::coords::Vec2;
    use crate::input::{InputEvent, Key, MouseButton};
    use crate::logging::MemorySink;
    use crate::surface::{DisplayMode, Mesh, Topology};
    use crate::testing::{FakePlatform, Op};
    use crate::time::ManualClock;

    struct Harness {
        engine: Engine<FakePlatform, ManualClock>,
        sink: Arc<MemorySink>,
        clock: ManualClock,
    }

    fn harness(config: EngineConfig, platform: FakePlatform) -> Harness {
        let sink = Arc::new(MemorySink::new());
        let clock = ManualClock::new();
        let engine = Engine::new(config, platform)
            .with_sink(sink.clone())
            .with_clock(clock.clone());
        Harness { engine, sink, clock }
    }

    fn windowed() -> EngineConfig {
        EngineConfig::default().size(800, 600).log_file("test.log")
    }

    /// Runs `frames` iterations, stopping from inside the update hook.
    fn run_frames(engine: &mut Engine<FakePlatform, ManualClock>, frames: usize) {
        let stop = engine.stop_handle();
        let mut seen = 0;
        let mut app = Callbacks::update_only(|_, _| {
            seen += 1;
            if seen == frames {
                stop.stop();
            }
            Ok(())
        });
        engine.run(&mut app).unwrap();
    }

    fn write_png(dir: &tempfile::TempDir, name: &str, w: u32, h: u32) -> std::path::PathBuf {
        let path = dir.path().join(name);
        image::RgbaImage::new(w, h).save(&path).unwrap();
        path
    }

    #[test]
    fn initialize_opens_windowed_surface_and_primes_a_frame() {
        let platform = FakePlatform::new();
        let ops = platform.ops();
        let requests = platform.requests();
        let mut h = harness(windowed().vsync(true), platform);

        h.engine.initialize().unwrap();

        let req = &requests.borrow()[0];
        assert_eq!(req.mode, DisplayMode::new(800, 600));
        assert_eq!(req.decorations, Decorations::Full);
        assert!(!req.fullscreen);

        assert_eq!(
            *ops.borrow(),
            vec![
                Op::Vsync(true),
                Op::Clear(h.engine.config().clear_color),
                Op::Present
            ]
        );
        assert_eq!(h.sink.destination(), Some(Path::new("test.log").to_path_buf()));
        assert!(h.sink.contains(Level::Info, "engine init..."));
        assert!(h.sink.contains(Level::Info, "engine initialized."));
    }

    #[test]
    fn fullscreen_picks_matching_mode_or_first() {
        let modes = vec![DisplayMode::new(1920, 1080), DisplayMode::new(800, 600)];

        let platform = FakePlatform::new().with_modes(modes.clone());
        let requests = platform.requests();
        let mut h = harness(windowed().fullscreen(true), platform);
        h.engine.initialize().unwrap();
        assert_eq!(requests.borrow()[0].mode, DisplayMode::new(800, 600));
        assert_eq!(requests.borrow()[0].decorations, Decorations::None);

        let platform = FakePlatform::new().with_modes(modes);
        let requests = platform.requests();
        let mut h = harness(windowed().size(1024, 768).fullscreen(true), platform);
        h.engine.initialize().unwrap();
        assert_eq!(requests.borrow()[0].mode, DisplayMode::new(1920, 1080));
    }

    #[test]
    fn fullscreen_without_modes_fails() {
        let mut h = harness(windowed().fullscreen(true), FakePlatform::new());
        assert!(matches!(h.engine.initialize(), Err(EngineError::NoDisplayMode)));
        assert!(h.sink.contains(Level::Error, "no fullscreen display mode"));
    }

    #[test]
    fn platform_failure_is_reported_not_raised() {
        let mut h = harness(windowed(), FakePlatform::new().failing_open());
        assert!(matches!(h.engine.initialize(), Err(EngineError::Surface(_))));
        assert_eq!(h.sink.count(Level::Error), 1);
        assert!(h.engine.run(&mut ()).is_err());
    }

    #[test]
    fn closed_surface_after_open_fails_init() {
        let mut h = harness(windowed(), FakePlatform::new().opening_closed());
        assert!(matches!(h.engine.initialize(), Err(EngineError::SurfaceClosed)));
        assert!(h.sink.contains(Level::Error, "failed to create window"));
    }

    #[test]
    fn run_before_initialize_is_misuse() {
        let mut h = harness(windowed(), FakePlatform::new());
        assert!(matches!(h.engine.run(&mut ()), Err(EngineError::NotInitialized)));
        assert!(h.sink.contains(Level::Error, "did you call initialize()"));
        assert!(!h.engine.is_running());
    }

    #[test]
    fn close_exits_after_rendering_the_current_frame() {
        let platform = FakePlatform::new().with_frames(vec![
            vec![],
            vec![SurfaceEvent::CloseRequested],
            vec![],
        ]);
        let ops = platform.ops();
        let mut h = harness(windowed(), platform);
        h.engine.initialize().unwrap();
        ops.borrow_mut().clear();

        let mut updates = 0;
        let mut renders = 0;
        let mut app = Callbacks::new(
            |_, _| {
                updates += 1;
                Ok(())
            },
            |canvas| {
                renders += 1;
                canvas.draw_mesh(&Mesh::rect(Vec2::zero(), Vec2::new(1.0, 1.0), Color::RED));
                Ok(())
            },
        );
        h.engine.run(&mut app).unwrap();

        assert_eq!((updates, renders), (2, 2));
        let presents = ops.borrow().iter().filter(|op| **op == Op::Present).count();
        assert_eq!(presents, 2);
        assert_eq!(ops.borrow().last(), Some(&Op::Present));
        assert!(h.sink.contains(Level::Info, "window close requested."));
        assert!(!h.engine.is_running());
    }

    #[test]
    fn run_after_stop_restarts_but_not_after_shutdown() {
        let mut h = harness(windowed(), FakePlatform::new());
        h.engine.initialize().unwrap();

        run_frames(&mut h.engine, 1);
        run_frames(&mut h.engine, 2);

        h.engine.shutdown();
        assert!(matches!(h.engine.run(&mut ()), Err(EngineError::NotInitialized)));
        assert!(h.sink.contains(Level::Error, "run called but surface is not open"));
    }

    #[test]
    fn shutdown_closes_once() {
        let platform = FakePlatform::new();
        let ops = platform.ops();
        let mut h = harness(windowed(), platform);
        h.engine.initialize().unwrap();
        h.engine.shutdown();
        h.engine.shutdown();
        let closes = ops.borrow().iter().filter(|op| **op == Op::Close).count();
        assert_eq!(closes, 1);
        let shutdowns = h
            .sink
            .records()
            .iter()
            .filter(|r| r.message == "engine shutdown...")
            .count();
        assert_eq!(shutdowns, 2);
    }

    #[test]
    fn events_drained_before_update_of_the_same_frame() {
        let platform = FakePlatform::new().with_frames(vec![
            vec![
                SurfaceEvent::Input(InputEvent::key_pressed(Key::W)),
                SurfaceEvent::Input(InputEvent::PointerMoved { x: 12, y: 34 }),
                SurfaceEvent::Input(InputEvent::button_pressed(MouseButton::Left)),
            ],
            vec![SurfaceEvent::Input(InputEvent::key_released(Key::W))],
            vec![],
        ]);
        let mut h = harness(windowed(), platform);
        h.engine.initialize().unwrap();

        let stop = h.engine.stop_handle();
        let mut seen = Vec::new();
        let mut app = Callbacks::update_only(|_, input| {
            seen.push(*input);
            if seen.len() == 3 {
                stop.stop();
            }
            Ok(())
        });
        h.engine.run(&mut app).unwrap();

        assert!(seen[0].key_w && seen[0].mouse_left);
        assert_eq!(seen[0].mouse_pos, (12, 34));
        assert!(!seen[1].key_w);
        // Sticky: no release event for the button yet.
        assert!(seen[2].mouse_left);
    }

    #[test]
    fn disabled_devices_leave_snapshot_untouched() {
        let platform = FakePlatform::new().with_frames(vec![vec![
            SurfaceEvent::Input(InputEvent::key_pressed(Key::A)),
            SurfaceEvent::Input(InputEvent::button_pressed(MouseButton::Right)),
            SurfaceEvent::Input(InputEvent::PointerMoved { x: 5, y: 5 }),
        ]]);
        let mut h = harness(windowed().keyboard(false).mouse(false), platform);
        h.engine.initialize().unwrap();
        run_frames(&mut h.engine, 1);
        assert_eq!(*h.engine.input(), InputSnapshot::default());
    }

    #[test]
    fn resize_matches_viewport_to_new_size() {
        let platform = FakePlatform::new().with_frames(vec![vec![SurfaceEvent::Resized {
            width: 1024,
            height: 512,
        }]]);
        let ops = platform.ops();
        let mut h = harness(windowed(), platform);
        h.engine.initialize().unwrap();
        run_frames(&mut h.engine, 1);

        assert!(ops
            .borrow()
            .contains(&Op::Viewport(Viewport::new(0.0, 0.0, 1024.0, 512.0))));
    }

    #[test]
    fn vsync_never_sleeps() {
        let mut h = harness(windowed().vsync(true).target_frame_rate(30), FakePlatform::new());
        h.engine.initialize().unwrap();
        run_frames(&mut h.engine, 50);
        assert!(h.clock.sleeps().is_empty());
        assert_eq!(h.clock.now(), Duration::ZERO);
    }

    #[test]
    fn zero_target_rate_is_uncapped() {
        let config = EngineConfig::default()
            .size(800, 600)
            .vsync(false)
            .target_frame_rate(0);
        let mut h = harness(config, FakePlatform::new());
        h.engine.initialize().unwrap();
        run_frames(&mut h.engine, 20);
        assert!(h.clock.sleeps().is_empty());
    }

    #[test]
    fn capped_frames_start_at_least_one_period_apart() {
        let mut h = harness(windowed().vsync(false).target_frame_rate(30), FakePlatform::new());
        h.engine.initialize().unwrap();

        let period = Duration::from_secs_f64(1.0 / 30.0);
        let clock = h.clock.clone();
        let stop = h.engine.stop_handle();
        let work = [5u64, 0, 40, 12, 33, 1];
        let mut starts = Vec::new();
        let mut deltas = Vec::new();

        let mut app = Callbacks::update_only(|dt, _| {
            starts.push(clock.now());
            deltas.push(dt);
            clock.advance(Duration::from_millis(work[starts.len() - 1]));
            if starts.len() == work.len() {
                stop.stop();
            }
            Ok(())
        });
        h.engine.run(&mut app).unwrap();

        for pair in starts.windows(2) {
            assert!(pair[1] - pair[0] >= period, "{:?}", pair);
        }
        // The 40ms frame overran its budget and must not sleep.
        let sleeps = h.clock.sleeps();
        assert_eq!(sleeps.len(), work.len() - 1);
        assert!(deltas[3] > 0.039 && deltas[3] < 0.041);
    }

    #[test]
    fn update_error_propagates_and_resets_run_state() {
        let mut h = harness(windowed(), FakePlatform::new());
        h.engine.initialize().unwrap();

        let mut app = Callbacks::update_only(|_, _| Err(anyhow!("boom")));
        let err = h.engine.run(&mut app).unwrap_err();
        assert!(matches!(err, EngineError::Callback(_)));
        assert!(err.to_string().contains("boom"));
        assert!(!h.engine.is_running());

        run_frames(&mut h.engine, 1);
    }

    #[test]
    fn render_error_skips_present() {
        let platform = FakePlatform::new();
        let ops = platform.ops();
        let mut h = harness(windowed(), platform);
        h.engine.initialize().unwrap();
        ops.borrow_mut().clear();

        let mut app = Callbacks::render_only(|_| Err(anyhow!("bad draw")));
        assert!(h.engine.run(&mut app).is_err());
        assert!(!ops.borrow().contains(&Op::Present));
    }

    #[test]
    fn failed_run_does_not_defer_events_of_the_next_run() {
        let platform = FakePlatform::new().with_frames(vec![
            vec![],
            vec![SurfaceEvent::Input(InputEvent::key_pressed(Key::W))],
        ]);
        let mut h = harness(windowed(), platform);
        h.engine.initialize().unwrap();

        let mut failing = Callbacks::render_only(|_| Err(anyhow!("bad draw")));
        assert!(h.engine.run(&mut failing).is_err());

        let stop = h.engine.stop_handle();
        let mut first = None;
        let mut app = Callbacks::update_only(|_, input| {
            first.get_or_insert(input.key_w);
            stop.stop();
            Ok(())
        });
        h.engine.run(&mut app).unwrap();

        assert_eq!(first, Some(true));
    }

    #[test]
    fn fatal_present_ends_the_loop() {
        let platform = FakePlatform::new().failing_present();
        // A configured texture skips the priming present, so init succeeds.
        let mut h = harness(windowed().clear_texture("unused.png"), platform);
        h.engine.initialize().unwrap();
        assert!(matches!(
            h.engine.run(&mut ()),
            Err(EngineError::Surface(SurfaceError::Fatal(_)))
        ));
    }

    #[test]
    fn texture_scales_per_axis_and_takes_priority() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_png(&dir, "bg.png", 400, 200);

        let platform = FakePlatform::new();
        let ops = platform.ops();
        let mut h = harness(windowed(), platform);
        h.engine.initialize().unwrap();

        h.engine.set_clear_texture(&path).unwrap();
        let image = h.engine.background().image().unwrap();
        assert_eq!(image.image_size, (400, 200));
        assert_eq!(image.scale, Vec2::new(2.0, 3.0));

        ops.borrow_mut().clear();
        run_frames(&mut h.engine, 1);
        assert_eq!(
            ops.borrow()[..2],
            [
                Op::Clear(Color::BLACK),
                Op::DrawTexture {
                    size: (400, 200),
                    scale: Vec2::new(2.0, 3.0)
                }
            ]
        );
    }

    #[test]
    fn texture_scale_is_kept_across_resize() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_png(&dir, "bg.png", 400, 200);

        let platform = FakePlatform::new().with_frames(vec![vec![SurfaceEvent::Resized {
            width: 1600,
            height: 1200,
        }]]);
        let ops = platform.ops();
        let mut h = harness(windowed(), platform);
        h.engine.initialize().unwrap();
        h.engine.set_clear_texture(&path).unwrap();

        ops.borrow_mut().clear();
        run_frames(&mut h.engine, 1);

        let draws: Vec<Op> = ops
            .borrow()
            .iter()
            .filter(|op| matches!(op, Op::DrawTexture { .. }))
            .cloned()
            .collect();
        assert_eq!(
            draws,
            vec![Op::DrawTexture {
                size: (400, 200),
                scale: Vec2::new(2.0, 3.0)
            }]
        );
        assert_eq!(
            h.engine.background().image().unwrap().scale,
            Vec2::new(2.0, 3.0)
        );
    }

    #[test]
    fn clear_color_deactivates_texture() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_png(&dir, "bg.png", 16, 16);

        let platform = FakePlatform::new();
        let ops = platform.ops();
        let mut h = harness(windowed(), platform);
        h.engine.initialize().unwrap();
        h.engine.set_clear_texture(&path).unwrap();

        let teal = Color::rgb(0, 128, 128);
        h.engine.set_clear_color(teal);
        assert!(!h.engine.background().has_image());

        ops.borrow_mut().clear();
        run_frames(&mut h.engine, 1);
        assert_eq!(ops.borrow()[0], Op::Clear(teal));
        assert!(!ops
            .borrow()
            .iter()
            .any(|op| matches!(op, Op::DrawTexture { .. })));
    }

    #[test]
    fn missing_texture_warns_and_keeps_solid_color() {
        let platform = FakePlatform::new();
        let ops = platform.ops();
        let mut h = harness(windowed(), platform);
        h.engine.initialize().unwrap();

        let err = h.engine.set_clear_texture("missing.png").unwrap_err();
        assert!(matches!(err, EngineError::Texture { .. }));
        assert!(h.sink.contains(Level::Warn, "failed to load clear texture: missing.png"));

        ops.borrow_mut().clear();
        run_frames(&mut h.engine, 1);
        assert_eq!(ops.borrow()[0], Op::Clear(h.engine.config().clear_color));
    }

    #[test]
    fn failed_reload_drops_previous_texture() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_png(&dir, "bg.png", 8, 8);

        let mut h = harness(windowed(), FakePlatform::new());
        h.engine.initialize().unwrap();
        h.engine.set_clear_texture(&path).unwrap();
        assert!(h.engine.set_clear_texture(dir.path().join("nope.png")).is_err());
        assert!(!h.engine.background().has_image());
    }

    #[test]
    fn configured_texture_failure_is_not_fatal() {
        let platform = FakePlatform::new();
        let ops = platform.ops();
        let mut h = harness(windowed().clear_texture("missing.png"), platform);

        h.engine.initialize().unwrap();
        assert!(h.sink.contains(Level::Warn, "missing.png"));
        // No priming frame when a texture path is configured.
        assert!(!ops.borrow().contains(&Op::Present));

        run_frames(&mut h.engine, 1);
        assert!(ops.borrow().contains(&Op::Clear(h.engine.config().clear_color)));
    }

    #[test]
    fn texture_before_initialize_fails_gracefully() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_png(&dir, "bg.png", 8, 8);

        let mut h = harness(windowed(), FakePlatform::new());
        assert!(matches!(
            h.engine.set_clear_texture(&path),
            Err(EngineError::NotInitialized)
        ));
        assert_eq!(h.sink.count(Level::Warn), 1);
    }

    #[test]
    fn render_hook_draws_on_top_of_background() {
        let platform = FakePlatform::new();
        let ops = platform.ops();
        let mut h = harness(windowed(), platform);
        h.engine.initialize().unwrap();
        ops.borrow_mut().clear();

        let stop = h.engine.stop_handle();
        let mut app = Callbacks::render_only(|canvas| {
            assert_eq!(canvas.size(), (800, 600));
            canvas.draw_mesh(&Mesh::rect(Vec2::zero(), Vec2::new(2.0, 2.0), Color::WHITE));
            stop.stop();
            Ok(())
        });
        h.engine.run(&mut app).unwrap();

        assert_eq!(
            *ops.borrow(),
            vec![
                Op::Clear(h.engine.config().clear_color),
                Op::Mesh(Topology::TriangleList, 6),
                Op::Present
            ]
        );
    }
}
