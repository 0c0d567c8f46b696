use glam::{Mat4, Vec3};
use crate::camera::Frustum;
use crate::device::{CalibratedDevice, DeviceCalibration};
use super::*;

fn device(frustum: Frustum) -> CalibratedDevice {
    CalibratedDevice::new(
        "depth",
        DeviceCalibration::from_pose(
            frustum,
            Vec3::new(120.0, -40.0, 800.0),
            Vec3::new(0.0, 10.0, 0.0),
            Vec3::Y,
        ),
    )
}

// ============================================================================
// build_projection
// ============================================================================

#[test]
fn test_build_projection_uses_device_frustum() {
    let frustum = Frustum::new(-12.5, 7.5, -4.0, 11.0, 2.0, 1500.0);
    let device = device(frustum);

    assert_eq!(build_projection(&device), frustum.projection_matrix());
}

#[test]
fn test_build_projection_symmetric_scenario() {
    let device = device(Frustum::new(-10.0, 10.0, -10.0, 10.0, 1.0, 1000.0));

    let expected = Mat4::perspective_rh_gl(2.0 * 10.0_f32.atan(), 1.0, 1.0, 1000.0);
    assert!(build_projection(&device).abs_diff_eq(expected, 1e-5));
}

#[test]
fn test_build_projection_is_pure() {
    let device = device(Frustum::new(-3.0, 9.0, -2.0, 5.0, 0.5, 300.0));

    let first = build_projection(&device);
    let second = build_projection(&device);
    assert_eq!(first.to_cols_array(), second.to_cols_array());
}

// ============================================================================
// build_view
// ============================================================================

#[test]
fn test_build_view_matches_look_at() {
    let device = device(Frustum::new(-1.0, 1.0, -1.0, 1.0, 1.0, 10.0));

    let expected = Mat4::look_at_rh(
        Vec3::new(120.0, -40.0, 800.0),
        Vec3::new(0.0, 10.0, 0.0),
        Vec3::Y,
    );
    assert_eq!(build_view(&device), expected);
}

#[test]
fn test_build_view_moves_eye_to_origin() {
    let device = device(Frustum::new(-1.0, 1.0, -1.0, 1.0, 1.0, 10.0));
    let view = build_view(&device);

    let eye = view.transform_point3(Vec3::new(120.0, -40.0, 800.0));
    assert!(eye.abs_diff_eq(Vec3::ZERO, 1e-3));

    // Target lies on the -Z axis in eye space
    let target = view.transform_point3(Vec3::new(0.0, 10.0, 0.0));
    assert!(target.x.abs() < 1e-3);
    assert!(target.y.abs() < 1e-3);
    assert!(target.z < 0.0);
}

#[test]
fn test_build_view_is_pure() {
    let device = device(Frustum::new(-1.0, 1.0, -1.0, 1.0, 1.0, 10.0));

    let first = build_view(&device);
    let second = build_view(&device);
    assert_eq!(first.to_cols_array(), second.to_cols_array());
}
