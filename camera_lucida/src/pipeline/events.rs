/// Render events - hooks invoked once per pass, in pass order.

use crate::error::Result;
use crate::graphics::GraphicsContext;

/// Receiver of the three per-frame render hooks.
///
/// Each hook gets the graphics context with the pass state already set up
/// and may draw into it; state changes made by a hook are undone when the
/// pass ends. An error aborts the frame.
pub trait RenderEvents {
    /// Texture pass: the off-screen target is bound, 2D ortho over its size
    fn on_render_texture(&mut self, _ctx: &mut dyn GraphicsContext) -> Result<()> {
        Ok(())
    }

    /// 3D pass: after the mesh, with the viewpoint's projection and view
    fn on_render_3d(&mut self, _ctx: &mut dyn GraphicsContext) -> Result<()> {
        Ok(())
    }

    /// 2D pass: top-left origin ortho over the window, depth test off
    fn on_render_2d(&mut self, _ctx: &mut dyn GraphicsContext) -> Result<()> {
        Ok(())
    }
}

type Hook<'a> = Box<dyn FnMut(&mut dyn GraphicsContext) -> Result<()> + 'a>;

/// Closure-based [`RenderEvents`]
///
/// Unset hooks do nothing.
///
/// # Example
///
/// ```no_run
/// use camera_lucida::lucida::EventHooks;
///
/// let mut frames = 0;
/// let hooks = EventHooks::new().on_render_2d(|_ctx| {
///     frames += 1;
///     Ok(())
/// });
/// ```
#[derive(Default)]
pub struct EventHooks<'a> {
    texture: Option<Hook<'a>>,
    scene: Option<Hook<'a>>,
    overlay: Option<Hook<'a>>,
}

impl<'a> EventHooks<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn on_render_texture<F>(mut self, hook: F) -> Self
    where
        F: FnMut(&mut dyn GraphicsContext) -> Result<()> + 'a,
    {
        self.texture = Some(Box::new(hook));
        self
    }

    pub fn on_render_3d<F>(mut self, hook: F) -> Self
    where
        F: FnMut(&mut dyn GraphicsContext) -> Result<()> + 'a,
    {
        self.scene = Some(Box::new(hook));
        self
    }

    pub fn on_render_2d<F>(mut self, hook: F) -> Self
    where
        F: FnMut(&mut dyn GraphicsContext) -> Result<()> + 'a,
    {
        self.overlay = Some(Box::new(hook));
        self
    }
}

fn fire(hook: &mut Option<Hook<'_>>, ctx: &mut dyn GraphicsContext) -> Result<()> {
    match hook {
        Some(hook) => hook(ctx),
        None => Ok(()),
    }
}

impl RenderEvents for EventHooks<'_> {
    fn on_render_texture(&mut self, ctx: &mut dyn GraphicsContext) -> Result<()> {
        fire(&mut self.texture, ctx)
    }

    fn on_render_3d(&mut self, ctx: &mut dyn GraphicsContext) -> Result<()> {
        fire(&mut self.scene, ctx)
    }

    fn on_render_2d(&mut self, ctx: &mut dyn GraphicsContext) -> Result<()> {
        fire(&mut self.overlay, ctx)
    }
}
