//! Control module - interactive scene manipulation for debug mode.

mod pointer;
mod scene_transform;

pub use pointer::{PointerEvent, PointerInput};
pub use scene_transform::{SceneTransform, DEFAULT_ROTATION_STEP, DEFAULT_ZOOM_STEP};
