/// SceneTransform - manual orbit/zoom applied on top of the calibrated view.
///
/// Only meaningful in debug mode: the renderer gates every mutation on its
/// debug flag and applies `matrix()` only while debug is on.

use glam::{Mat4, Vec2, Vec3};

/// Default zoom step, in device units (mm) per pixel of vertical drag
pub const DEFAULT_ZOOM_STEP: f32 = -50.0;

/// Default rotation step, in degrees per pixel of drag
pub const DEFAULT_ROTATION_STEP: f32 = -0.2;

/// Orbit/zoom state driven by pointer drags.
#[derive(Debug, Clone, PartialEq)]
pub struct SceneTransform {
    translation: f32,
    rotation: Vec3,
    pivot: Vec3,
    zoom_step: f32,
    rotation_step: f32,
    last_pointer: Vec2,
}

impl SceneTransform {
    /// Controller orbiting around `pivot`, with the default steps
    pub fn new(pivot: Vec3) -> Self {
        Self::with_steps(pivot, DEFAULT_ZOOM_STEP, DEFAULT_ROTATION_STEP)
    }

    pub fn with_steps(pivot: Vec3, zoom_step: f32, rotation_step: f32) -> Self {
        Self {
            translation: 0.0,
            rotation: Vec3::ZERO,
            pivot,
            zoom_step,
            rotation_step,
            last_pointer: Vec2::ZERO,
        }
    }

    /// Translation along the view axis
    pub fn translation(&self) -> f32 {
        self.translation
    }

    /// Rotation about X, Y and Z in degrees
    pub fn rotation(&self) -> Vec3 {
        self.rotation
    }

    pub fn pivot(&self) -> Vec3 {
        self.pivot
    }

    pub fn zoom_step(&self) -> f32 {
        self.zoom_step
    }

    pub fn rotation_step(&self) -> f32 {
        self.rotation_step
    }

    /// Pointer position the next drag delta is measured from
    pub fn last_pointer(&self) -> Vec2 {
        self.last_pointer
    }

    /// Zero translation and rotation. Pivot and steps are kept.
    pub fn reset(&mut self) {
        self.translation = 0.0;
        self.rotation = Vec3::ZERO;
    }

    /// Record the drag reference position
    pub fn on_drag_start(&mut self, x: f32, y: f32) {
        self.last_pointer = Vec2::new(x, y);
    }

    /// Apply the drag delta since the last reference position.
    ///
    /// Zoom drags move along the view axis by the vertical delta; other
    /// drags rotate about X (vertical delta) and Y (horizontal delta).
    /// The reference position is updated in both cases.
    pub fn on_drag(&mut self, x: f32, y: f32, zoom: bool) {
        let pointer = Vec2::new(x, y);
        let delta = pointer - self.last_pointer;

        if zoom {
            self.translation += -delta.y * self.zoom_step;
        } else {
            self.rotation.x += delta.y * self.rotation_step;
            self.rotation.y -= delta.x * self.rotation_step;
        }

        self.last_pointer = pointer;
    }

    /// `T(0,0,tz) * T(pivot) * Rx * Ry * Rz * T(-pivot)`
    pub fn matrix(&self) -> Mat4 {
        Mat4::from_translation(Vec3::new(0.0, 0.0, self.translation))
            * Mat4::from_translation(self.pivot)
            * Mat4::from_rotation_x(self.rotation.x.to_radians())
            * Mat4::from_rotation_y(self.rotation.y.to_radians())
            * Mat4::from_rotation_z(self.rotation.z.to_radians())
            * Mat4::from_translation(-self.pivot)
    }
}

#[cfg(test)]
#[path = "scene_transform_tests.rs"]
mod tests;
