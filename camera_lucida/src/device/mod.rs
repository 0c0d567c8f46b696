//! Device module - the calibrated optical devices the renderer looks through.
//!
//! The renderer never owns devices: it borrows them for its whole lifetime.
//! How a device obtains its calibration is outside this crate.

mod optical_device;
mod calibrated_device;
mod device_set;

pub use optical_device::OpticalDevice;
pub use calibrated_device::{CalibratedDevice, DeviceCalibration};
pub use device_set::DeviceSet;
