/// Projection and view construction from device calibration.
///
/// Both functions are pure: the same device state always yields
/// bit-identical matrices. Nothing is cached.

use glam::Mat4;
use crate::device::OpticalDevice;

/// Off-axis perspective projection with the device's exact frustum bounds
pub fn build_projection(device: &dyn OpticalDevice) -> Mat4 {
    device.frustum().projection_matrix()
}

/// Right-handed look-at view from the device's location, target and up
pub fn build_view(device: &dyn OpticalDevice) -> Mat4 {
    Mat4::look_at_rh(device.location(), device.target(), device.up())
}

#[cfg(test)]
#[path = "builder_tests.rs"]
mod tests;
