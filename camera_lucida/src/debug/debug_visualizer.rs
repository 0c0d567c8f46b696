/// Debug visualizer - device frustum wireframes and axis triads.
///
/// Geometry is generated in the device's local frame (optical axis +Z) and
/// placed in the world by the device's extrinsic transform.

use glam::Vec3;
use crate::camera::Frustum;
use crate::device::OpticalDevice;
use crate::error::Result;
use crate::graphics::{Color, GraphicsContext, LineVertex, StateFlags, StateGuard};

/// Length of each axis of the triad, in device units
pub const AXIS_LENGTH: f32 = 50.0;

/// Line width of the axis triad
pub const AXIS_LINE_WIDTH: f32 = 2.0;

/// Line width of the frustum wireframe
pub const FRUSTUM_LINE_WIDTH: f32 = 1.0;

/// Frustum wireframe: four edges from the eye to the near-plane corners,
/// then the near-plane rectangle. Two vertices per segment.
pub fn frustum_lines(frustum: &Frustum, color: Color) -> Vec<LineVertex> {
    let corners = frustum.near_corners();
    let mut vertices = Vec::with_capacity(16);

    for corner in corners {
        vertices.push(LineVertex::new(Vec3::ZERO, color));
        vertices.push(LineVertex::new(corner, color));
    }
    for i in 0..corners.len() {
        vertices.push(LineVertex::new(corners[i], color));
        vertices.push(LineVertex::new(corners[(i + 1) % corners.len()], color));
    }

    vertices
}

/// X/Y/Z axes from the origin, in red, green and blue
pub fn axis_lines(length: f32) -> Vec<LineVertex> {
    [(Vec3::X, Color::RED), (Vec3::Y, Color::GREEN), (Vec3::Z, Color::BLUE)]
        .into_iter()
        .flat_map(|(axis, color)| {
            [LineVertex::new(Vec3::ZERO, color), LineVertex::new(axis * length, color)]
        })
        .collect()
}

/// Raw bytes of a vertex slice, ready for a vertex buffer upload
pub fn vertex_bytes(vertices: &[LineVertex]) -> &[u8] {
    bytemuck::cast_slice(vertices)
}

/// Draw `device`'s frustum and axis triad at its calibrated pose.
///
/// Transform and color are restored before returning.
pub fn draw_device_frame(
    ctx: &mut dyn GraphicsContext,
    device: &dyn OpticalDevice,
    color: Color,
) -> Result<()> {
    let mut frame = StateGuard::new(ctx, StateFlags::TRANSFORM | StateFlags::COLOR)?;

    frame.multiply_model_view(device.extrinsic_transform())?;
    frame.set_color(color)?;
    frame.draw_lines(&frustum_lines(&device.frustum(), color), FRUSTUM_LINE_WIDTH)?;
    frame.draw_lines(&axis_lines(AXIS_LENGTH), AXIS_LINE_WIDTH)?;

    Ok(())
}

#[cfg(test)]
#[path = "debug_visualizer_tests.rs"]
mod tests;
