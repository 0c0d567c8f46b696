/// Recording graphics context (no GPU required)
///
/// Tracks pipeline state the way a fixed-function driver would and records
/// every command, so passes can be verified headless: command order, final
/// state after a frame, and behavior when a backend call fails.

use std::rc::Rc;
use glam::Mat4;
use crate::error::Result;
use crate::graphics::{
    Color, CullMode, GraphicsContext, LineVertex, PolygonMode, RenderTarget,
    RenderTargetDesc, StateFlags, Texture, TextureFormat, TextureInfo, Viewport,
};
use crate::lucida_bail;

// ============================================================================
// Recorded resources
// ============================================================================

/// Texture created by or handed to a RecordingContext
#[derive(Debug, Clone)]
pub struct RecordedTexture {
    pub info: TextureInfo,
}

impl RecordedTexture {
    pub fn new(info: TextureInfo) -> Self {
        Self { info }
    }

    /// Single-channel float texture, the usual live depth frame
    pub fn depth_frame(width: u32, height: u32) -> Self {
        Self::new(TextureInfo {
            width,
            height,
            format: TextureFormat::R32_SFLOAT,
            samples: 0,
        })
    }
}

impl Texture for RecordedTexture {
    fn info(&self) -> &TextureInfo {
        &self.info
    }
}

/// Render target created by a RecordingContext
#[derive(Debug)]
pub struct RecordedRenderTarget {
    desc: RenderTargetDesc,
    color: RecordedTexture,
}

impl RenderTarget for RecordedRenderTarget {
    fn width(&self) -> u32 {
        self.desc.width
    }

    fn height(&self) -> u32 {
        self.desc.height
    }

    fn samples(&self) -> u32 {
        self.desc.samples
    }

    fn color_texture(&self) -> &dyn Texture {
        &self.color
    }
}

// ============================================================================
// Commands and state
// ============================================================================

/// One recorded graphics command
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    CreateRenderTarget(RenderTargetDesc),
    BindRenderTarget { width: u32, height: u32 },
    UnbindRenderTarget,
    Clear(Color),
    SetViewport(Viewport),
    SetProjection(Mat4),
    LoadModelView(Mat4),
    MultiplyModelView(Mat4),
    PushMatrix,
    PopMatrix,
    SetDepthTest(bool),
    SetPolygonMode(PolygonMode),
    SetCullMode(CullMode),
    SetColor(Color),
    BindTexture(TextureInfo),
    UnbindTexture,
    DrawLines { vertices: Vec<LineVertex>, width: f32 },
    PushState(StateFlags),
    PopState,
    Marker(String),
}

/// Snapshot of the tracked pipeline state
#[derive(Debug, Clone, PartialEq)]
pub struct PipelineState {
    pub viewport: Viewport,
    pub projection: Mat4,
    pub model_view: Mat4,
    pub matrix_stack: Vec<Mat4>,
    pub polygon_mode: PolygonMode,
    pub cull_mode: CullMode,
    pub depth_test: bool,
    pub color: Color,
    pub bound_texture: Option<TextureInfo>,
    pub bound_target: Option<(u32, u32)>,
}

impl PipelineState {
    fn initial(width: u32, height: u32) -> Self {
        Self {
            viewport: Viewport::full(width, height),
            projection: Mat4::IDENTITY,
            model_view: Mat4::IDENTITY,
            matrix_stack: Vec::new(),
            polygon_mode: PolygonMode::Fill,
            cull_mode: CullMode::None,
            depth_test: false,
            color: Color::WHITE,
            bound_texture: None,
            bound_target: None,
        }
    }

    fn restore(&mut self, saved: PipelineState, flags: StateFlags) {
        if flags.contains(StateFlags::VIEWPORT) {
            self.viewport = saved.viewport;
        }
        if flags.contains(StateFlags::TRANSFORM) {
            self.projection = saved.projection;
            self.model_view = saved.model_view;
            self.matrix_stack = saved.matrix_stack;
        }
        if flags.contains(StateFlags::POLYGON) {
            self.polygon_mode = saved.polygon_mode;
        }
        if flags.contains(StateFlags::CULL) {
            self.cull_mode = saved.cull_mode;
        }
        if flags.contains(StateFlags::DEPTH) {
            self.depth_test = saved.depth_test;
        }
        if flags.contains(StateFlags::COLOR) {
            self.color = saved.color;
        }
        if flags.contains(StateFlags::TEXTURE) {
            self.bound_texture = saved.bound_texture;
        }
        if flags.contains(StateFlags::RENDER_TARGET) {
            self.bound_target = saved.bound_target;
        }
    }
}

// ============================================================================
// RecordingContext
// ============================================================================

type FailurePredicate = Box<dyn Fn(&Command) -> bool>;

/// Headless GraphicsContext that records commands and tracks state
pub struct RecordingContext {
    window_size: (u32, u32),
    state: PipelineState,
    saved: Vec<(StateFlags, PipelineState)>,
    commands: Vec<Command>,
    fail_when: Option<FailurePredicate>,
}

impl RecordingContext {
    /// Create a context for a `width` x `height` window
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            window_size: (width, height),
            state: PipelineState::initial(width, height),
            saved: Vec::new(),
            commands: Vec::new(),
            fail_when: None,
        }
    }

    /// Make every command matching `predicate` fail with a BackendError
    ///
    /// A failing command is neither applied nor recorded. `pop_state()` is
    /// never failed, so state guards can always unwind.
    pub fn fail_when<F>(&mut self, predicate: F)
    where
        F: Fn(&Command) -> bool + 'static,
    {
        self.fail_when = Some(Box::new(predicate));
    }

    /// Stop injecting failures
    pub fn clear_failures(&mut self) {
        self.fail_when = None;
    }

    /// All recorded commands, oldest first
    pub fn commands(&self) -> &[Command] {
        &self.commands
    }

    /// Forget recorded commands (state is kept)
    pub fn clear_commands(&mut self) {
        self.commands.clear();
    }

    /// Labels of all recorded debug markers, oldest first
    pub fn markers(&self) -> Vec<&str> {
        self.commands
            .iter()
            .filter_map(|cmd| match cmd {
                Command::Marker(label) => Some(label.as_str()),
                _ => None,
            })
            .collect()
    }

    /// Current pipeline state
    pub fn state(&self) -> &PipelineState {
        &self.state
    }

    /// Number of unmatched `push_state()` calls
    pub fn state_depth(&self) -> usize {
        self.saved.len()
    }

    fn record(&mut self, command: Command) -> Result<()> {
        if let Some(predicate) = &self.fail_when {
            if predicate(&command) {
                lucida_bail!("lucida::RecordingContext", BackendError,
                    "Injected failure on {:?}", command);
            }
        }
        self.commands.push(command);
        Ok(())
    }
}

impl GraphicsContext for RecordingContext {
    fn window_size(&self) -> (u32, u32) {
        self.window_size
    }

    fn create_render_target(&mut self, desc: &RenderTargetDesc) -> Result<Rc<dyn RenderTarget>> {
        if desc.width == 0 || desc.height == 0 {
            lucida_bail!("lucida::RecordingContext", InvalidResource,
                "create_render_target: zero-sized target {}x{}", desc.width, desc.height);
        }
        self.record(Command::CreateRenderTarget(*desc))?;
        Ok(Rc::new(RecordedRenderTarget {
            desc: *desc,
            color: RecordedTexture::new(TextureInfo {
                width: desc.width,
                height: desc.height,
                format: desc.format,
                samples: desc.samples,
            }),
        }))
    }

    fn bind_render_target(&mut self, target: &dyn RenderTarget) -> Result<()> {
        let (width, height) = (target.width(), target.height());
        self.record(Command::BindRenderTarget { width, height })?;
        self.state.bound_target = Some((width, height));
        Ok(())
    }

    fn unbind_render_target(&mut self) -> Result<()> {
        self.record(Command::UnbindRenderTarget)?;
        self.state.bound_target = None;
        Ok(())
    }

    fn clear(&mut self, color: Color) -> Result<()> {
        self.record(Command::Clear(color))
    }

    fn set_viewport(&mut self, viewport: Viewport) -> Result<()> {
        self.record(Command::SetViewport(viewport))?;
        self.state.viewport = viewport;
        Ok(())
    }

    fn set_projection(&mut self, projection: Mat4) -> Result<()> {
        self.record(Command::SetProjection(projection))?;
        self.state.projection = projection;
        Ok(())
    }

    fn load_model_view(&mut self, model_view: Mat4) -> Result<()> {
        self.record(Command::LoadModelView(model_view))?;
        self.state.model_view = model_view;
        Ok(())
    }

    fn multiply_model_view(&mut self, matrix: Mat4) -> Result<()> {
        self.record(Command::MultiplyModelView(matrix))?;
        self.state.model_view *= matrix;
        Ok(())
    }

    fn push_matrix(&mut self) -> Result<()> {
        self.record(Command::PushMatrix)?;
        self.state.matrix_stack.push(self.state.model_view);
        Ok(())
    }

    fn pop_matrix(&mut self) -> Result<()> {
        let Some(top) = self.state.matrix_stack.last().copied() else {
            lucida_bail!("lucida::RecordingContext", BackendError, "pop_matrix: matrix stack underflow");
        };
        self.record(Command::PopMatrix)?;
        self.state.matrix_stack.pop();
        self.state.model_view = top;
        Ok(())
    }

    fn set_depth_test(&mut self, enabled: bool) -> Result<()> {
        self.record(Command::SetDepthTest(enabled))?;
        self.state.depth_test = enabled;
        Ok(())
    }

    fn set_polygon_mode(&mut self, mode: PolygonMode) -> Result<()> {
        self.record(Command::SetPolygonMode(mode))?;
        self.state.polygon_mode = mode;
        Ok(())
    }

    fn set_cull_mode(&mut self, mode: CullMode) -> Result<()> {
        self.record(Command::SetCullMode(mode))?;
        self.state.cull_mode = mode;
        Ok(())
    }

    fn set_color(&mut self, color: Color) -> Result<()> {
        self.record(Command::SetColor(color))?;
        self.state.color = color;
        Ok(())
    }

    fn bind_texture(&mut self, texture: &dyn Texture) -> Result<()> {
        let info = *texture.info();
        self.record(Command::BindTexture(info))?;
        self.state.bound_texture = Some(info);
        Ok(())
    }

    fn unbind_texture(&mut self) -> Result<()> {
        self.record(Command::UnbindTexture)?;
        self.state.bound_texture = None;
        Ok(())
    }

    fn draw_lines(&mut self, vertices: &[LineVertex], width: f32) -> Result<()> {
        if vertices.len() % 2 != 0 {
            lucida_bail!("lucida::RecordingContext", InvalidResource,
                "draw_lines: odd vertex count {}", vertices.len());
        }
        self.record(Command::DrawLines { vertices: vertices.to_vec(), width })
    }

    fn push_state(&mut self, flags: StateFlags) -> Result<()> {
        self.record(Command::PushState(flags))?;
        self.saved.push((flags, self.state.clone()));
        Ok(())
    }

    fn pop_state(&mut self) -> Result<()> {
        let Some((flags, saved)) = self.saved.pop() else {
            lucida_bail!("lucida::RecordingContext", BackendError, "pop_state: state stack underflow");
        };
        self.state.restore(saved, flags);
        self.commands.push(Command::PopState);
        Ok(())
    }

    fn debug_marker(&mut self, label: &str) -> Result<()> {
        self.record(Command::Marker(label.to_string()))
    }
}

#[cfg(test)]
#[path = "recording_context_tests.rs"]
mod tests;
