/// Renderer - the three-pass camera lucida frame.
///
/// Texture pass into the off-screen target, 3D pass looking through the
/// active device, then a 2D overlay pass. All graphics state a frame
/// touches is restored before `render()` returns, on success or error.

use std::rc::Rc;
use glam::{Mat4, Vec3};
use crate::camera::{Camera, Viewpoint, ViewpointSelector};
use crate::config::Config;
use crate::control::{PointerEvent, SceneTransform};
use crate::debug::draw_device_frame;
use crate::device::{DeviceSet, OpticalDevice};
use crate::error::Result;
use crate::graphics::{
    Color, CullMode, GraphicsContext, PolygonMode, RenderTarget, StateFlags, StateGuard,
    Texture, Viewport,
};
use crate::{lucida_debug, lucida_err, lucida_info, lucida_trace, lucida_warn};
use super::{Compositor, Mesh, RenderEvents};

/// Debug marker emitted at the start of the texture pass
pub const TEXTURE_PASS_MARKER: &str = "texture pass";
/// Debug marker emitted at the start of the 3D pass
pub const SCENE_PASS_MARKER: &str = "3d pass";
/// Debug marker emitted at the start of the 2D pass
pub const OVERLAY_PASS_MARKER: &str = "2d pass";

/// Position of a device's frame in the debug draw order
fn debug_frame_rank(viewpoint: Viewpoint) -> u8 {
    match viewpoint {
        Viewpoint::DepthCamera => 0,
        Viewpoint::Projector => 1,
    }
}

/// Bind the render texture, feed the compositor and draw the mesh
fn draw_composited(
    ctx: &mut dyn GraphicsContext,
    compositor: &mut dyn Compositor,
    depth_device: &dyn OpticalDevice,
    surface: &dyn Texture,
    live_depth: &dyn Texture,
    mesh: &dyn Mesh,
) -> Result<()> {
    ctx.bind_texture(surface)?;
    compositor.update(ctx, depth_device, surface, live_depth)?;
    mesh.draw(ctx)?;
    ctx.unbind_texture()
}

/// Renders a scene through a calibrated device.
///
/// Borrows its devices for `'d`: the devices outlive the renderer.
pub struct Renderer<'d> {
    devices: DeviceSet<'d>,
    target: Rc<dyn RenderTarget>,
    selector: ViewpointSelector,
    scene: SceneTransform,
    debug: bool,
    compositor: Option<Box<dyn Compositor + 'd>>,
    warned_no_compositor: bool,
}

impl<'d> Renderer<'d> {
    /// Validate `config`, allocate the off-screen target and fix the orbit
    /// pivot at the depth camera's position.
    ///
    /// # Errors
    ///
    /// `InvalidConfig` if `config` fails validation, `InitializationFailed`
    /// if the render target cannot be allocated.
    pub fn new(
        ctx: &mut dyn GraphicsContext,
        devices: DeviceSet<'d>,
        config: &Config,
    ) -> Result<Self> {
        config.validate()?;

        let target = ctx
            .create_render_target(&config.render_target_desc())
            .map_err(|err| lucida_err!("lucida::Renderer", InitializationFailed,
                "render target allocation failed: {}", err))?;

        let pivot = devices.depth_camera.extrinsic_transform().w_axis.truncate();
        let selector = ViewpointSelector::new(config.initial_viewpoint);

        lucida_info!("lucida::Renderer", "Render target {}x{} ({} samples), {}",
            target.width(), target.height(), target.samples(), selector.describe());

        Ok(Self {
            devices,
            target,
            selector,
            scene: SceneTransform::new(pivot),
            debug: false,
            compositor: None,
            warned_no_compositor: false,
        })
    }

    /// Attach a GPU compositor, running its `init()` first.
    ///
    /// Replaces any previously attached compositor. On error nothing is
    /// attached.
    pub fn attach_compositor(
        &mut self,
        ctx: &mut dyn GraphicsContext,
        mut compositor: Box<dyn Compositor + 'd>,
    ) -> Result<()> {
        compositor.init(ctx)?;
        self.compositor = Some(compositor);
        self.warned_no_compositor = false;
        lucida_debug!("lucida::Renderer", "Compositor attached");
        Ok(())
    }

    pub fn has_compositor(&self) -> bool {
        self.compositor.is_some()
    }

    // ===== DEBUG MODE =====

    pub fn is_debug(&self) -> bool {
        self.debug
    }

    pub fn set_debug(&mut self, debug: bool) {
        self.debug = debug;
    }

    /// Flip debug mode and return the new value
    pub fn toggle_debug(&mut self) -> bool {
        self.debug = !self.debug;
        lucida_debug!("lucida::Renderer", "Debug mode {}", if self.debug { "on" } else { "off" });
        self.debug
    }

    // ===== VIEWPOINT =====

    pub fn viewpoint(&self) -> Viewpoint {
        self.selector.current()
    }

    pub fn next_viewpoint(&mut self) -> Viewpoint {
        let viewpoint = self.selector.next();
        lucida_info!("lucida::Renderer", "Switched to {}", viewpoint.label());
        viewpoint
    }

    pub fn prev_viewpoint(&mut self) -> Viewpoint {
        let viewpoint = self.selector.prev();
        lucida_info!("lucida::Renderer", "Switched to {}", viewpoint.label());
        viewpoint
    }

    pub fn select_viewpoint(&mut self, viewpoint: Viewpoint) {
        self.selector.select(viewpoint);
    }

    /// Label of the active viewpoint, for overlays
    pub fn viewpoint_info(&self) -> &'static str {
        self.selector.describe()
    }

    // ===== SCENE CONTROL =====

    pub fn scene_transform(&self) -> &SceneTransform {
        &self.scene
    }

    /// Undo all manual orbit and zoom
    pub fn reset_scene(&mut self) {
        self.scene.reset();
    }

    /// Record the drag reference position
    pub fn on_pointer_down(&mut self, x: f32, y: f32) {
        self.scene.on_drag_start(x, y);
    }

    /// Orbit (or zoom) the scene. Ignored unless debug mode is on.
    pub fn on_pointer_drag(&mut self, x: f32, y: f32, zoom: bool) {
        if !self.debug {
            return;
        }
        self.scene.on_drag(x, y, zoom);
    }

    pub fn handle_pointer(&mut self, event: PointerEvent) {
        match event {
            PointerEvent::Down { x, y } => self.on_pointer_down(x, y),
            PointerEvent::Drag { x, y, zoom } => self.on_pointer_drag(x, y, zoom),
        }
    }

    // ===== RESOURCES =====

    pub fn devices(&self) -> &DeviceSet<'d> {
        &self.devices
    }

    /// Off-screen target written by the texture pass
    pub fn render_target(&self) -> &dyn RenderTarget {
        &*self.target
    }

    /// Release the render target and stop borrowing the devices
    pub fn dispose(self) {
        lucida_debug!("lucida::Renderer", "Disposing renderer");
    }

    // ===== FRAME =====

    /// Render one frame: texture pass, 3D pass, 2D pass.
    ///
    /// Each callback of `events` fires exactly once, in that order. If a
    /// pass fails, the remaining passes are skipped and the error is
    /// returned; graphics state is restored either way.
    ///
    /// # Arguments
    ///
    /// * `mesh` - Surface the render is projected onto
    /// * `live_depth` - Current depth frame, forwarded to the compositor
    /// * `gpu_compositing` - Route the mesh draw through the compositor
    /// * `wireframe` - Draw the mesh as lines, without culling
    pub fn render(
        &mut self,
        ctx: &mut dyn GraphicsContext,
        events: &mut dyn RenderEvents,
        mesh: &dyn Mesh,
        live_depth: &dyn Texture,
        gpu_compositing: bool,
        wireframe: bool,
    ) -> Result<()> {
        lucida_trace!("lucida::Renderer", "Frame through {} (debug: {}, wireframe: {})",
            self.selector.describe(), self.debug, wireframe);
        let mut frame = StateGuard::new(ctx, StateFlags::all())?;

        self.texture_pass(&mut *frame, events)?;
        self.scene_pass(&mut *frame, events, mesh, live_depth, gpu_compositing, wireframe)?;
        self.overlay_pass(&mut *frame, events)?;

        Ok(())
    }

    fn texture_pass(
        &self,
        ctx: &mut dyn GraphicsContext,
        events: &mut dyn RenderEvents,
    ) -> Result<()> {
        let mut pass = StateGuard::new(
            ctx,
            StateFlags::RENDER_TARGET | StateFlags::VIEWPORT | StateFlags::TRANSFORM | StateFlags::COLOR,
        )?;
        pass.debug_marker(TEXTURE_PASS_MARKER)?;

        let (width, height) = (self.target.width(), self.target.height());
        pass.bind_render_target(&*self.target)?;
        pass.set_viewport(Viewport::full(width, height))?;
        pass.clear(Color::TRANSPARENT)?;
        pass.set_projection(Mat4::orthographic_rh_gl(0.0, width as f32, 0.0, height as f32, -1.0, 1.0))?;
        pass.load_model_view(Mat4::IDENTITY)?;
        pass.set_color(Color::WHITE)?;

        events.on_render_texture(&mut *pass)?;

        pass.unbind_render_target()
    }

    fn scene_pass(
        &mut self,
        ctx: &mut dyn GraphicsContext,
        events: &mut dyn RenderEvents,
        mesh: &dyn Mesh,
        live_depth: &dyn Texture,
        gpu_compositing: bool,
        wireframe: bool,
    ) -> Result<()> {
        let mut pass = StateGuard::new(
            ctx,
            StateFlags::POLYGON
                | StateFlags::CULL
                | StateFlags::DEPTH
                | StateFlags::COLOR
                | StateFlags::TRANSFORM
                | StateFlags::VIEWPORT
                | StateFlags::TEXTURE,
        )?;
        pass.debug_marker(SCENE_PASS_MARKER)?;

        pass.clear(Color::BLACK)?;
        pass.set_depth_test(true)?;
        if wireframe {
            pass.set_polygon_mode(PolygonMode::Line)?;
            pass.set_cull_mode(CullMode::None)?;
        } else {
            pass.set_polygon_mode(PolygonMode::Fill)?;
            pass.set_cull_mode(CullMode::Back)?;
        }
        pass.set_color(Color::WHITE)?;

        let device = self.selector.current_device(&self.devices);
        if !device.frustum().is_valid() {
            lucida_warn!("lucida::Renderer", "Degenerate frustum for {}: {:?}",
                self.selector.describe(), device.frustum());
        }
        let (width, height) = pass.window_size();
        let camera = Camera::from_device(device, Viewport::full(width, height));
        pass.set_viewport(*camera.viewport())?;
        pass.set_projection(*camera.projection_matrix())?;
        pass.load_model_view(*camera.view_matrix())?;

        if self.debug {
            pass.multiply_model_view(self.scene.matrix())?;
            let mut order = Viewpoint::ALL;
            order.sort_by_key(|viewpoint| debug_frame_rank(*viewpoint));
            for viewpoint in order {
                draw_device_frame(&mut *pass, self.devices.get(viewpoint), viewpoint.debug_color())?;
            }
        }

        // Device images are stored flipped on both axes
        pass.push_matrix()?;
        pass.multiply_model_view(Mat4::from_scale(Vec3::new(-1.0, -1.0, 1.0)))?;

        let surface = self.target.color_texture();
        match self.compositor.as_mut() {
            Some(compositor) if gpu_compositing => {
                compositor.begin(&mut *pass)?;
                // end() runs even when the draw fails; the first error wins
                let drawn = draw_composited(
                    &mut *pass,
                    &mut **compositor,
                    self.devices.depth_camera,
                    surface,
                    live_depth,
                    mesh,
                );
                let ended = compositor.end(&mut *pass);
                drawn.and(ended)?;
            }
            _ => {
                if gpu_compositing && !self.warned_no_compositor {
                    lucida_warn!("lucida::Renderer",
                        "GPU compositing requested without a compositor, drawing the plain render");
                    self.warned_no_compositor = true;
                }
                pass.bind_texture(surface)?;
                mesh.draw(&mut *pass)?;
                pass.unbind_texture()?;
            }
        }

        pass.pop_matrix()?;

        events.on_render_3d(&mut *pass)
    }

    fn overlay_pass(
        &self,
        ctx: &mut dyn GraphicsContext,
        events: &mut dyn RenderEvents,
    ) -> Result<()> {
        let mut pass = StateGuard::new(
            ctx,
            StateFlags::DEPTH | StateFlags::TRANSFORM | StateFlags::VIEWPORT | StateFlags::COLOR,
        )?;
        pass.debug_marker(OVERLAY_PASS_MARKER)?;

        let (width, height) = pass.window_size();
        pass.set_depth_test(false)?;
        pass.set_viewport(Viewport::full(width, height))?;
        pass.set_projection(Mat4::orthographic_rh_gl(0.0, width as f32, height as f32, 0.0, -1.0, 1.0))?;
        pass.load_model_view(Mat4::IDENTITY)?;
        pass.set_color(Color::WHITE)?;

        events.on_render_2d(&mut *pass)
    }
}

impl Drop for Renderer<'_> {
    fn drop(&mut self) {
        lucida_debug!("lucida::Renderer", "Renderer released ({}x{} target)",
            self.target.width(), self.target.height());
    }
}

#[cfg(test)]
#[path = "render_pipeline_tests.rs"]
mod tests;
