/// Mesh trait - the geometry the 3D pass textures with the off-screen render

use crate::error::Result;
use crate::graphics::GraphicsContext;

/// Drawable surface geometry.
///
/// Called inside the 3D pass with the render target's color texture bound
/// and the device-image flip applied to the model-view matrix. Loading and
/// triangulation are up to the implementor.
pub trait Mesh {
    fn draw(&self, ctx: &mut dyn GraphicsContext) -> Result<()>;
}
