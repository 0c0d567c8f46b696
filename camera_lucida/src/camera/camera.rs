/// Camera - the projection/view pair one pass renders with.
///
/// A snapshot: built fresh from a device at the start of every 3D pass,
/// since device calibration may change between frames.

use glam::Mat4;
use crate::device::OpticalDevice;
use crate::graphics::Viewport;
use super::builder::{build_projection, build_view};

/// Projection, view and viewport for one pass.
#[derive(Debug, Clone, PartialEq)]
pub struct Camera {
    view_matrix: Mat4,
    projection_matrix: Mat4,
    viewport: Viewport,
}

impl Camera {
    /// Create a camera from explicit matrices
    pub fn new(view: Mat4, projection: Mat4, viewport: Viewport) -> Self {
        Self {
            view_matrix: view,
            projection_matrix: projection,
            viewport,
        }
    }

    /// Camera looking through `device`: its calibrated frustum and pose
    pub fn from_device(device: &dyn OpticalDevice, viewport: Viewport) -> Self {
        Self::new(build_view(device), build_projection(device), viewport)
    }

    /// View matrix (world to eye).
    pub fn view_matrix(&self) -> &Mat4 {
        &self.view_matrix
    }

    /// Off-axis projection matrix.
    pub fn projection_matrix(&self) -> &Mat4 {
        &self.projection_matrix
    }

    /// Combined view-projection matrix (projection * view).
    pub fn view_projection_matrix(&self) -> Mat4 {
        self.projection_matrix * self.view_matrix
    }

    /// Viewport dimensions and depth range.
    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }
}

#[cfg(test)]
#[path = "camera_tests.rs"]
mod tests;
