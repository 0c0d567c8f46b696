/// RenderTarget trait - an off-screen color buffer the texture pass draws into

use crate::graphics::{Texture, TextureFormat};

/// Descriptor for allocating an off-screen render target
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderTargetDesc {
    /// Width in pixels
    pub width: u32,
    /// Height in pixels
    pub height: u32,
    /// Multisample count
    pub samples: u32,
    /// Color buffer format
    pub format: TextureFormat,
}

/// Render target trait
///
/// Allocated once through `GraphicsContext::create_render_target()` and
/// reused every frame. Dimensions never change after allocation.
pub trait RenderTarget {
    /// Get the width of the render target in pixels
    fn width(&self) -> u32;

    /// Get the height of the render target in pixels
    fn height(&self) -> u32;

    /// Get the multisample count
    fn samples(&self) -> u32;

    /// Resolved color buffer, sampled by the 3D pass as the mesh surface
    fn color_texture(&self) -> &dyn Texture;
}
