/// GraphicsContext trait - the immediate-mode graphics backend driven by the renderer

use std::rc::Rc;
use glam::Mat4;
use crate::error::Result;
use crate::graphics::{
    Color, CullMode, LineVertex, PolygonMode, RenderTarget, RenderTargetDesc,
    StateFlags, Texture, Viewport,
};

/// Graphics context the render passes issue commands into
///
/// Models a fixed-function pipeline: a current viewport, projection and
/// model-view matrices (with a matrix stack), polygon/cull/depth/color
/// state, one bound texture and one bound render target. Every setter
/// mutates global state until changed again; `push_state()`/`pop_state()`
/// save and restore the groups named by a `StateFlags` mask.
///
/// Implementations are not required to be `Send`: a GL context is bound to
/// the thread that created it.
pub trait GraphicsContext {
    /// Size of the main framebuffer (window) in pixels
    fn window_size(&self) -> (u32, u32);

    /// Allocate an off-screen render target
    ///
    /// # Arguments
    ///
    /// * `desc` - Size, sample count and color format
    fn create_render_target(&mut self, desc: &RenderTargetDesc) -> Result<Rc<dyn RenderTarget>>;

    /// Redirect drawing into `target` until `unbind_render_target()`
    fn bind_render_target(&mut self, target: &dyn RenderTarget) -> Result<()>;

    /// Resume drawing into the main framebuffer
    fn unbind_render_target(&mut self) -> Result<()>;

    /// Clear color and depth of the currently bound framebuffer
    fn clear(&mut self, color: Color) -> Result<()>;

    /// Set the viewport
    fn set_viewport(&mut self, viewport: Viewport) -> Result<()>;

    /// Replace the projection matrix
    fn set_projection(&mut self, projection: Mat4) -> Result<()>;

    /// Replace the model-view matrix
    fn load_model_view(&mut self, model_view: Mat4) -> Result<()>;

    /// Post-multiply the model-view matrix (`current = current * matrix`)
    fn multiply_model_view(&mut self, matrix: Mat4) -> Result<()>;

    /// Push the current model-view matrix on the matrix stack
    fn push_matrix(&mut self) -> Result<()>;

    /// Pop the model-view matrix stack
    fn pop_matrix(&mut self) -> Result<()>;

    /// Enable or disable depth testing
    fn set_depth_test(&mut self, enabled: bool) -> Result<()>;

    /// Set the polygon rasterization mode for both faces
    fn set_polygon_mode(&mut self, mode: PolygonMode) -> Result<()>;

    /// Set the face culling mode
    fn set_cull_mode(&mut self, mode: CullMode) -> Result<()>;

    /// Set the current draw color
    fn set_color(&mut self, color: Color) -> Result<()>;

    /// Bind a texture for subsequent draws
    fn bind_texture(&mut self, texture: &dyn Texture) -> Result<()>;

    /// Unbind the current texture
    fn unbind_texture(&mut self) -> Result<()>;

    /// Draw line segments (pairs of vertices) with the current transform
    ///
    /// # Arguments
    ///
    /// * `vertices` - Segment endpoints, two per segment
    /// * `width` - Line width in pixels
    fn draw_lines(&mut self, vertices: &[LineVertex], width: f32) -> Result<()>;

    /// Save the state groups named by `flags`
    fn push_state(&mut self, flags: StateFlags) -> Result<()>;

    /// Restore the state saved by the matching `push_state()`
    fn pop_state(&mut self) -> Result<()>;

    /// Insert a label into the command stream (frame debuggers, tests)
    fn debug_marker(&mut self, label: &str) -> Result<()>;
}
