//! Debug module - overlay geometry showing where each device sits and looks.

mod debug_visualizer;

pub use debug_visualizer::{
    axis_lines, draw_device_frame, frustum_lines, vertex_bytes,
    AXIS_LENGTH, AXIS_LINE_WIDTH, FRUSTUM_LINE_WIDTH,
};
