/*!
# Camera Lucida

Render pipeline for projector-camera augmented reality.

A scene is rendered through the calibrated frustum and pose of one optical
device (a projector or a depth camera) onto a mesh textured with an
off-screen render, optionally composited on the GPU with the live depth
feed. A debug mode overlays each device's frustum and axes and lets the
user orbit and zoom the scene.

## Architecture

- **GraphicsContext**: Immediate-mode graphics backend trait (`RecordingContext` for headless use)
- **StateGuard**: Scoped save/restore of pipeline state
- **OpticalDevice**: Calibrated intrinsics/extrinsics, borrowed by the renderer
- **Frustum / Camera**: Off-axis projection and look-at view from calibration
- **ViewpointSelector**: Which device the 3D pass looks through
- **SceneTransform**: Debug orbit/zoom controller
- **Renderer**: Texture pass, 3D pass, 2D pass

Everything is single-threaded: a graphics context belongs to one thread.
*/

// Internal modules
mod error;
mod config;
pub mod log;
pub mod graphics;
pub mod camera;
pub mod device;
pub mod control;
pub mod debug;
pub mod pipeline;

// Main lucida namespace module
pub mod lucida {
    // Error types
    pub use crate::error::{Error, Result};

    // Configuration
    pub use crate::config::{Config, MAX_SAMPLES};

    // Renderer and its extension points
    pub use crate::pipeline::{Compositor, EventHooks, Mesh, RenderEvents, Renderer};

    // Viewpoints and devices
    pub use crate::camera::{Viewpoint, ViewpointSelector};
    pub use crate::device::{CalibratedDevice, DeviceCalibration, DeviceSet, OpticalDevice};

    // Logging sub-module (types only, macros live at the crate root)
    pub mod log {
        pub use crate::log::{
            DefaultLogger, LogEntry, LogSeverity, Logger,
            min_severity, reset_logger, set_logger, set_min_severity,
        };
    }

    // Graphics backend sub-module
    pub mod graphics {
        pub use crate::graphics::*;
    }

    // Projection and view sub-module
    pub mod camera {
        pub use crate::camera::*;
    }

    // Input sub-module
    pub mod control {
        pub use crate::control::*;
    }

    // Debug overlay sub-module
    pub mod debug {
        pub use crate::debug::*;
    }
}

// Re-export math library at crate root
pub use glam;
