/// DeviceSet - the devices a renderer borrows, one per viewpoint.

use crate::camera::Viewpoint;
use super::OpticalDevice;

/// Borrowed projector and depth camera.
///
/// The lifetime `'d` ties every renderer built from this set to the
/// devices: a device cannot be dropped while a renderer still uses it.
#[derive(Clone, Copy)]
pub struct DeviceSet<'d> {
    pub projector: &'d dyn OpticalDevice,
    pub depth_camera: &'d dyn OpticalDevice,
}

impl<'d> DeviceSet<'d> {
    pub fn new(projector: &'d dyn OpticalDevice, depth_camera: &'d dyn OpticalDevice) -> Self {
        Self { projector, depth_camera }
    }

    /// Device behind a viewpoint
    pub fn get(&self, viewpoint: Viewpoint) -> &'d dyn OpticalDevice {
        match viewpoint {
            Viewpoint::Projector => self.projector,
            Viewpoint::DepthCamera => self.depth_camera,
        }
    }
}
