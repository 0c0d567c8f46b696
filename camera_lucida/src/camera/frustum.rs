/// Frustum - asymmetric perspective view volume from lens calibration.
///
/// Bounds are given at the near plane, independently for each side, so a
/// principal point offset from the image center is represented exactly.
/// The caller (calibration) is responsible for computing the bounds.

use glam::{Mat4, Vec3, Vec4};

/// Off-axis perspective frustum.
///
/// `left`/`right`/`bottom`/`top` are measured on the near plane;
/// `near`/`far` are positive distances along the optical axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Frustum {
    pub left: f32,
    pub right: f32,
    pub bottom: f32,
    pub top: f32,
    pub near: f32,
    pub far: f32,
}

impl Frustum {
    pub fn new(left: f32, right: f32, bottom: f32, top: f32, near: f32, far: f32) -> Self {
        Self { left, right, bottom, top, near, far }
    }

    /// True when the bounds describe a non-empty perspective volume
    pub fn is_valid(&self) -> bool {
        self.left < self.right
            && self.bottom < self.top
            && self.near > 0.0
            && self.near < self.far
    }

    /// True when the optical axis passes through the center of the near plane
    pub fn is_symmetric(&self) -> bool {
        self.left == -self.right && self.bottom == -self.top
    }

    /// OpenGL-convention projection matrix with exactly these bounds.
    ///
    /// Same matrix as `glFrustum(left, right, bottom, top, near, far)`:
    /// right-handed eye space looking down -Z, clip depth in [-1, 1].
    pub fn projection_matrix(&self) -> Mat4 {
        let Self { left: l, right: r, bottom: b, top: t, near: n, far: f } = *self;

        Mat4::from_cols(
            Vec4::new(2.0 * n / (r - l), 0.0, 0.0, 0.0),
            Vec4::new(0.0, 2.0 * n / (t - b), 0.0, 0.0),
            Vec4::new((r + l) / (r - l), (t + b) / (t - b), -(f + n) / (f - n), -1.0),
            Vec4::new(0.0, 0.0, -2.0 * f * n / (f - n), 0.0),
        )
    }

    /// Near-plane corners in the device's local frame (optical axis +Z).
    ///
    /// Order: left-top, right-top, right-bottom, left-bottom.
    pub fn near_corners(&self) -> [Vec3; 4] {
        let z = self.near;
        [
            Vec3::new(self.left, self.top, z),
            Vec3::new(self.right, self.top, z),
            Vec3::new(self.right, self.bottom, z),
            Vec3::new(self.left, self.bottom, z),
        ]
    }
}

#[cfg(test)]
#[path = "frustum_tests.rs"]
mod tests;
