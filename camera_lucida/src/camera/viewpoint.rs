/// Viewpoint - which calibrated device the 3D pass looks through.

use crate::device::{DeviceSet, OpticalDevice};
use crate::graphics::Color;

/// The available viewpoints, in cycling order.
///
/// Every mapping over this enum is an exhaustive `match`: adding a device
/// fails to compile until each mapping handles it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Viewpoint {
    Projector,
    DepthCamera,
}

impl Viewpoint {
    /// All viewpoints in cycling order
    pub const ALL: [Viewpoint; 2] = [Viewpoint::Projector, Viewpoint::DepthCamera];

    /// Following viewpoint, wrapping from the last to the first
    pub fn next(self) -> Self {
        match self {
            Viewpoint::Projector => Viewpoint::DepthCamera,
            Viewpoint::DepthCamera => Viewpoint::Projector,
        }
    }

    /// Preceding viewpoint, wrapping from the first to the last
    pub fn prev(self) -> Self {
        match self {
            Viewpoint::Projector => Viewpoint::DepthCamera,
            Viewpoint::DepthCamera => Viewpoint::Projector,
        }
    }

    /// Human-readable label for overlays
    pub fn label(self) -> &'static str {
        match self {
            Viewpoint::Projector => "projector viewpoint",
            Viewpoint::DepthCamera => "depth camera viewpoint",
        }
    }

    /// Color of this device's frame in the debug overlay
    pub fn debug_color(self) -> Color {
        match self {
            Viewpoint::Projector => Color::YELLOW,
            Viewpoint::DepthCamera => Color::MAGENTA,
        }
    }
}

/// Cyclic selector over [`Viewpoint`]. Exactly one viewpoint is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ViewpointSelector {
    current: Viewpoint,
}

impl ViewpointSelector {
    pub fn new(initial: Viewpoint) -> Self {
        Self { current: initial }
    }

    /// Active viewpoint
    pub fn current(&self) -> Viewpoint {
        self.current
    }

    /// Device behind the active viewpoint
    pub fn current_device<'d>(&self, devices: &DeviceSet<'d>) -> &'d dyn OpticalDevice {
        devices.get(self.current)
    }

    /// Label of the active viewpoint
    pub fn describe(&self) -> &'static str {
        self.current.label()
    }

    /// Advance to the next viewpoint and return it
    pub fn next(&mut self) -> Viewpoint {
        self.current = self.current.next();
        self.current
    }

    /// Go back to the previous viewpoint and return it
    pub fn prev(&mut self) -> Viewpoint {
        self.current = self.current.prev();
        self.current
    }

    /// Jump straight to `viewpoint`
    pub fn select(&mut self, viewpoint: Viewpoint) {
        self.current = viewpoint;
    }
}

impl Default for ViewpointSelector {
    fn default() -> Self {
        Self::new(Viewpoint::DepthCamera)
    }
}

#[cfg(test)]
#[path = "viewpoint_tests.rs"]
mod tests;
