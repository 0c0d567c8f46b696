/// Texture trait, texture format, and texture info

/// Texture pixel format
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[allow(non_camel_case_types)]
pub enum TextureFormat {
    /// 8-bit RGBA color (off-screen render target, camera feeds)
    R8G8B8A8_UNORM,
    /// Single-channel float (live depth frames in device units)
    R32_SFLOAT,
}

/// Read-only properties of a created texture.
///
/// Returned by `Texture::info()` to query texture properties
/// without exposing backend-specific details.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextureInfo {
    /// Width in pixels
    pub width: u32,
    /// Height in pixels
    pub height: u32,
    /// Pixel format
    pub format: TextureFormat,
    /// Multisample count (0 or 1 = single sampled)
    pub samples: u32,
}

impl TextureInfo {
    /// Returns true if the texture stores more than one sample per pixel
    pub fn is_multisampled(&self) -> bool {
        self.samples > 1
    }
}

/// Texture resource trait
///
/// Implemented by backend-specific texture types. The live depth frame
/// handed to `Renderer::render` and the render target's color buffer
/// are both seen through this trait.
pub trait Texture {
    /// Get the read-only properties of this texture
    fn info(&self) -> &TextureInfo;
}
