/// Graphics module - backend abstraction the render passes drive

pub mod graphics_context;
pub mod state;
pub mod state_guard;
pub mod texture;
pub mod render_target;
pub mod recording_context;

pub use graphics_context::*;
pub use state::*;
pub use state_guard::*;
pub use texture::*;
pub use render_target::*;
pub use recording_context::*;
