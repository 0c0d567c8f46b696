//! Renderer configuration
//!
//! Read once by `Renderer::new()`; changing a `Config` afterwards has no
//! effect on an existing renderer.

use crate::camera::Viewpoint;
use crate::error::Result;
use crate::graphics::{RenderTargetDesc, TextureFormat};
use crate::lucida_bail;

/// Largest multisample count accepted for the off-screen target
pub const MAX_SAMPLES: u32 = 64;

/// Renderer configuration
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Off-screen render target width in pixels
    pub tex_width: u32,
    /// Off-screen render target height in pixels
    pub tex_height: u32,
    /// Off-screen multisample count (0 = no multisampling)
    pub tex_samples: u32,
    /// Viewpoint active after construction
    pub initial_viewpoint: Viewpoint,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            tex_width: 1024,
            tex_height: 768,
            tex_samples: 4,
            initial_viewpoint: Viewpoint::DepthCamera,
        }
    }
}

impl Config {
    /// Check the render target parameters
    ///
    /// # Errors
    ///
    /// `InvalidConfig` for a zero dimension, or a sample count that is
    /// neither 0 nor a power of two up to [`MAX_SAMPLES`].
    pub fn validate(&self) -> Result<()> {
        if self.tex_width == 0 || self.tex_height == 0 {
            lucida_bail!("lucida::Config", InvalidConfig,
                "render target size must be non-zero (got {}x{})", self.tex_width, self.tex_height);
        }
        let samples = self.tex_samples;
        if samples != 0 && (!samples.is_power_of_two() || samples > MAX_SAMPLES) {
            lucida_bail!("lucida::Config", InvalidConfig,
                "sample count must be 0 or a power of two <= {} (got {})", MAX_SAMPLES, samples);
        }
        Ok(())
    }

    /// Descriptor of the off-screen target this config asks for
    pub fn render_target_desc(&self) -> RenderTargetDesc {
        RenderTargetDesc {
            width: self.tex_width,
            height: self.tex_height,
            samples: self.tex_samples,
            format: TextureFormat::R8G8B8A8_UNORM,
        }
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
