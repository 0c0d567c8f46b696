//! Camera module - frustum, projection/view construction and viewpoints.
//!
//! Turns a device's calibrated intrinsics and extrinsics into the matrices
//! the 3D pass renders with, and selects which device to look through.

mod builder;
mod camera;
mod frustum;
mod viewpoint;

pub use builder::{build_projection, build_view};
pub use camera::Camera;
pub use frustum::Frustum;
pub use viewpoint::{Viewpoint, ViewpointSelector};
