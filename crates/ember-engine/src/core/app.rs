use crate::input::InputSnapshot;
use crate::surface::Canvas;

/// Per-frame hooks driven by [`Engine::run`](super::Engine::run).
///
/// The engine borrows the app for the duration of `run` only. Both hooks
/// default to no-ops. Errors are not caught by the engine: they end the loop
/// and come back out of `run`.
pub trait App {
    /// Called once per frame after events are drained.
    ///
    /// `dt` is the time since the previous frame in seconds, unclamped.
    fn update(&mut self, dt: f32, input: &InputSnapshot) -> anyhow::Result<()> {
        let _ = (dt, input);
        Ok(())
    }

    /// Called once per frame after the background is drawn, before present.
    fn render(&mut self, canvas: &mut dyn Canvas) -> anyhow::Result<()> {
        let _ = canvas;
        Ok(())
    }
}

/// No hooks at all; the engine just clears and presents.
impl App for () {}

type RenderFn = fn(&mut dyn Canvas) -> anyhow::Result<()>;
type UpdateFn = fn(f32, &InputSnapshot) -> anyhow::Result<()>;

/// [`App`] built from a pair of closures.
pub struct Callbacks<U, R> {
    update: U,
    render: R,
}

impl<U, R> Callbacks<U, R>
where
    U: FnMut(f32, &InputSnapshot) -> anyhow::Result<()>,
    R: FnMut(&mut dyn Canvas) -> anyhow::Result<()>,
{
    pub fn new(update: U, render: R) -> Self {
        Self { update, render }
    }
}

impl<U> Callbacks<U, RenderFn>
where
    U: FnMut(f32, &InputSnapshot) -> anyhow::Result<()>,
{
    pub fn update_only(update: U) -> Self {
        Self {
            update,
            render: |_| Ok(()),
        }
    }
}

impl<R> Callbacks<UpdateFn, R>
where
    R: FnMut(&mut dyn Canvas) -> anyhow::Result<()>,
{
    pub fn render_only(render: R) -> Self {
        Self {
            update: |_, _| Ok(()),
            render,
        }
    }
}

impl<U, R> App for Callbacks<U, R>
where
    U: FnMut(f32, &InputSnapshot) -> anyhow::Result<()>,
    R: FnMut(&mut dyn Canvas) -> anyhow::Result<()>,
{
    fn update(&mut self, dt: f32, input: &InputSnapshot) -> anyhow::Result<()> {
        (self.update)(dt, input)
    }

    fn render(&mut self, canvas: &mut dyn Canvas) -> anyhow::Result<()> {
        (self.render)(canvas)
    }
}
