//! Pipeline module - the per-frame render sequence and its extension points.

mod compositor;
mod events;
mod mesh;
mod render_pipeline;

pub use compositor::Compositor;
pub use events::{EventHooks, RenderEvents};
pub use mesh::Mesh;
pub use render_pipeline::{
    Renderer, OVERLAY_PASS_MARKER, SCENE_PASS_MARKER, TEXTURE_PASS_MARKER,
};
