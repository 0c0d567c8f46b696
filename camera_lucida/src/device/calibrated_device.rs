/// CalibratedDevice - passive OpticalDevice holding a calibration snapshot.
///
/// Computes nothing beyond the extrinsic matrix helper. The calibration
/// lives in a `Cell` so the owner can recalibrate through a shared reference
/// while a renderer borrows the device.

use std::cell::Cell;
use glam::{Mat4, Vec3, Vec4};
use crate::camera::Frustum;
use super::OpticalDevice;

/// Intrinsic frustum plus extrinsic pose of one device
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DeviceCalibration {
    pub frustum: Frustum,
    pub location: Vec3,
    pub target: Vec3,
    pub up: Vec3,
    pub extrinsic: Mat4,
}

impl DeviceCalibration {
    /// Calibration from a look-at pose.
    ///
    /// The extrinsic matrix is built with the optical axis on local +Z,
    /// local +Y pointing down the image and local +X to the right, with
    /// its translation at `location`.
    pub fn from_pose(frustum: Frustum, location: Vec3, target: Vec3, up: Vec3) -> Self {
        let forward = (target - location).normalize();
        let right = forward.cross(up).normalize();
        let down = forward.cross(right);
        let extrinsic = Mat4::from_cols(
            right.extend(0.0),
            down.extend(0.0),
            forward.extend(0.0),
            Vec4::new(location.x, location.y, location.z, 1.0),
        );

        Self { frustum, location, target, up, extrinsic }
    }
}

/// Device backed by a replaceable calibration snapshot
#[derive(Debug)]
pub struct CalibratedDevice {
    name: String,
    calibration: Cell<DeviceCalibration>,
}

impl CalibratedDevice {
    pub fn new(name: &str, calibration: DeviceCalibration) -> Self {
        Self {
            name: name.to_string(),
            calibration: Cell::new(calibration),
        }
    }

    /// Device name (for logs and overlays)
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Current calibration snapshot
    pub fn calibration(&self) -> DeviceCalibration {
        self.calibration.get()
    }

    /// Replace the calibration; visible to the next render pass
    pub fn recalibrate(&self, calibration: DeviceCalibration) {
        crate::lucida_debug!("lucida::CalibratedDevice", "'{}' recalibrated", self.name);
        self.calibration.set(calibration);
    }
}

impl OpticalDevice for CalibratedDevice {
    fn frustum(&self) -> Frustum {
        self.calibration.get().frustum
    }

    fn location(&self) -> Vec3 {
        self.calibration.get().location
    }

    fn target(&self) -> Vec3 {
        self.calibration.get().target
    }

    fn up(&self) -> Vec3 {
        self.calibration.get().up
    }

    fn extrinsic_transform(&self) -> Mat4 {
        self.calibration.get().extrinsic
    }
}

#[cfg(test)]
#[path = "calibrated_device_tests.rs"]
mod tests;
