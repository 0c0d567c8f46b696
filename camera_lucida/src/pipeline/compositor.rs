/// Compositor trait - optional GPU step blending the render with live depth.

use crate::device::OpticalDevice;
use crate::error::Result;
use crate::graphics::{GraphicsContext, Texture};

/// GPU compositing stage wrapped around the mesh draw.
///
/// How the blend is computed (shaders, uniforms) belongs to the
/// implementor. Per 3D pass the renderer calls `begin()`, binds the
/// render texture, calls `update()`, draws the mesh, then calls `end()`.
pub trait Compositor {
    /// One-time setup, called when the compositor is attached
    fn init(&mut self, ctx: &mut dyn GraphicsContext) -> Result<()>;

    /// Activate the compositing program
    fn begin(&mut self, ctx: &mut dyn GraphicsContext) -> Result<()>;

    /// Upload per-frame inputs
    ///
    /// # Arguments
    ///
    /// * `depth_device` - Calibrated depth camera
    /// * `color` - Off-screen render produced by the texture pass
    /// * `live_depth` - Current depth frame from the depth camera
    fn update(
        &mut self,
        ctx: &mut dyn GraphicsContext,
        depth_device: &dyn OpticalDevice,
        color: &dyn Texture,
        live_depth: &dyn Texture,
    ) -> Result<()>;

    /// Deactivate the compositing program
    fn end(&mut self, ctx: &mut dyn GraphicsContext) -> Result<()>;
}
