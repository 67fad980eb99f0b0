use std::process::ExitCode;
use std::sync::Arc;

use anyhow::Result;
use ember_engine::config::EngineConfig;
use ember_engine::coords::Vec2;
use ember_engine::core::{App, Engine};
use ember_engine::input::InputSnapshot;
use ember_engine::logging::{init_logging, ConsoleFileSink, DiagnosticsSink, LoggingConfig};
use ember_engine::paint::Color;
use ember_engine::shapes::{ellipse, EllipseDesc};
use ember_engine::surface::{Canvas, Mesh};
use ember_engine::window::WinitPlatform;

/// Player speed in pixels per second.
const SPEED: f32 = 240.0;
const PLAYER_RADIUS: f32 = 24.0;

struct Demo {
    player: Vec2,
    bounds: (u32, u32),
}

impl App for Demo {
    fn update(&mut self, dt: f32, input: &InputSnapshot) -> Result<()> {
        let (dx, dy) = input.movement();
        let step = Vec2::new(dx as f32, dy as f32) * (SPEED * dt);
        let next = self.player + step;

        let (w, h) = self.bounds;
        self.player = Vec2::new(
            next.x.clamp(PLAYER_RADIUS, (w as f32 - PLAYER_RADIUS).max(PLAYER_RADIUS)),
            next.y.clamp(PLAYER_RADIUS, (h as f32 - PLAYER_RADIUS).max(PLAYER_RADIUS)),
        );

        if input.mouse_left {
            log::debug!("click at {:?}", input.mouse_pos);
        }
        Ok(())
    }

    fn render(&mut self, canvas: &mut dyn Canvas) -> Result<()> {
        self.bounds = canvas.size();
        let (w, h) = self.bounds;

        canvas.draw_mesh(&Mesh::rect(
            Vec2::new(40.0, 40.0),
            Vec2::new(240.0, 140.0),
            Color::rgb(255, 140, 0),
        ));

        let center = Vec2::new(w as f32 * 0.5, h as f32 * 0.5);
        ellipse(
            &EllipseDesc::new(center, Vec2::new(160.0, 90.0), Color::YELLOW)
                .outline(Color::RED, 3.0)
                .points(120),
        )
        .draw(canvas);

        ellipse(&EllipseDesc::new(
            self.player,
            Vec2::new(PLAYER_RADIUS, PLAYER_RADIUS),
            Color::CYAN,
        ))
        .draw(canvas);

        Ok(())
    }
}

fn main() -> ExitCode {
    let sink: Arc<dyn DiagnosticsSink> = Arc::new(ConsoleFileSink::new());
    init_logging(LoggingConfig::default(), sink.clone());

    let config = EngineConfig::default()
        .size(1280, 720)
        .title("ember demo")
        .vsync(true)
        .target_frame_rate(120)
        .clear_color(Color::rgb(25, 28, 35))
        .log_file("ember-demo.log");

    let platform = match WinitPlatform::new() {
        Ok(platform) => platform,
        Err(e) => {
            sink.error(&format!("{e:#}"));
            return ExitCode::FAILURE;
        }
    };

    let (w, h) = (config.width, config.height);
    let mut engine = Engine::new(config, platform).with_sink(sink);

    // Failures are already logged by the engine.
    if engine.initialize().is_err() {
        return ExitCode::FAILURE;
    }

    let mut demo = Demo {
        player: Vec2::new(w as f32 * 0.5, h as f32 * 0.5),
        bounds: (w, h),
    };

    let result = engine.run(&mut demo);
    if let Err(e) = &result {
        engine.sink().error(&format!("engine stopped: {e}"));
    }
    engine.shutdown();

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(_) => ExitCode::FAILURE,
    }
}
