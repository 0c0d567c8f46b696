/// OpticalDevice - calibrated intrinsics and extrinsics of a projector or camera.

use glam::{Mat4, Vec3};
use crate::camera::Frustum;

/// A calibrated optical device (projector, depth camera).
///
/// Read-only from the renderer's point of view. Values may change between
/// frames (live recalibration upstream), so the renderer queries them on
/// every pass and caches nothing.
pub trait OpticalDevice {
    /// Asymmetric intrinsic frustum, near/far in device units
    fn frustum(&self) -> Frustum;

    /// Eye position in world space
    fn location(&self) -> Vec3;

    /// Point the optical axis passes through, in world space
    fn target(&self) -> Vec3;

    /// Up direction in world space
    fn up(&self) -> Vec3;

    /// Rigid device-to-world transform (optical axis along local +Z)
    ///
    /// Its translation is the device position; used for the debug orbit
    /// pivot and to place the debug frame.
    fn extrinsic_transform(&self) -> Mat4;
}
