//! Integration tests for the render pipeline with a headless context
//!
//! These tests drive whole sessions through the public API: devices,
//! renderer, pointer input and several frames.
//! No GPU required.
//!
//! Run with: cargo test --test pipeline_integration_tests

use camera_lucida::glam::{Mat4, Vec3};
use camera_lucida::lucida::camera::{build_projection, Frustum};
use camera_lucida::lucida::control::PointerInput;
use camera_lucida::lucida::graphics::{
    Color, Command, GraphicsContext, LineVertex, PolygonMode, RecordedTexture, RecordingContext,
};
use camera_lucida::lucida::{
    CalibratedDevice, Config, DeviceCalibration, DeviceSet, EventHooks, Mesh, Renderer,
    Result, Viewpoint,
};
use winit::dpi::PhysicalPosition;
use winit::event::{ElementState, MouseButton};
use winit::keyboard::ModifiersState;

// ============================================================================
// HELPERS
// ============================================================================

/// Flat quad drawn as its outline
struct QuadMesh {
    half_size: f32,
}

impl Mesh for QuadMesh {
    fn draw(&self, ctx: &mut dyn GraphicsContext) -> Result<()> {
        let s = self.half_size;
        let corners = [
            Vec3::new(-s, -s, 0.0),
            Vec3::new(s, -s, 0.0),
            Vec3::new(s, s, 0.0),
            Vec3::new(-s, s, 0.0),
        ];
        let vertices: Vec<LineVertex> = (0..4)
            .flat_map(|i| {
                [
                    LineVertex::new(corners[i], Color::WHITE),
                    LineVertex::new(corners[(i + 1) % 4], Color::WHITE),
                ]
            })
            .collect();
        ctx.draw_lines(&vertices, 1.0)
    }
}

fn create_devices() -> (CalibratedDevice, CalibratedDevice) {
    let projector = CalibratedDevice::new(
        "projector",
        DeviceCalibration::from_pose(
            Frustum::new(-7.5, 8.5, -1.0, 9.0, 1.0, 5000.0),
            Vec3::new(-300.0, 120.0, 1600.0),
            Vec3::new(0.0, 0.0, 0.0),
            Vec3::Y,
        ),
    );
    let depth = CalibratedDevice::new(
        "depth",
        DeviceCalibration::from_pose(
            Frustum::new(-10.0, 10.0, -10.0, 10.0, 1.0, 1000.0),
            Vec3::new(250.0, 0.0, 950.0),
            Vec3::new(0.0, 0.0, 0.0),
            Vec3::Y,
        ),
    );
    (projector, depth)
}

fn scene_projection(ctx: &RecordingContext) -> Mat4 {
    ctx.commands()
        .iter()
        .filter_map(|cmd| match cmd {
            Command::SetProjection(m) => Some(*m),
            _ => None,
        })
        .nth(1)
        .unwrap()
}

// ============================================================================
// SESSION TESTS
// ============================================================================

#[test]
fn test_integration_frames_leave_context_untouched() {
    let (projector, depth) = create_devices();
    let mut ctx = RecordingContext::new(1280, 720);
    let mut renderer = Renderer::new(&mut ctx, DeviceSet::new(&projector, &depth), &Config::default()).unwrap();
    let live_depth = RecordedTexture::depth_frame(640, 480);
    let mesh = QuadMesh { half_size: 200.0 };
    let before = ctx.state().clone();

    for frame in 0..6 {
        let wireframe = frame % 2 == 0;
        if frame == 3 {
            renderer.toggle_debug();
        }
        renderer
            .render(&mut ctx, &mut EventHooks::new(), &mesh, &live_depth, false, wireframe)
            .unwrap();
        assert_eq!(ctx.state(), &before, "frame {} leaked state", frame);
    }
    assert_eq!(ctx.state_depth(), 0);
}

#[test]
fn test_integration_viewpoint_cycle() {
    let (projector, depth) = create_devices();
    let mut ctx = RecordingContext::new(1280, 720);
    let mut renderer = Renderer::new(&mut ctx, DeviceSet::new(&projector, &depth), &Config::default()).unwrap();
    let live_depth = RecordedTexture::depth_frame(640, 480);
    let mesh = QuadMesh { half_size: 200.0 };

    let mut seen = Vec::new();
    for _ in 0..Viewpoint::ALL.len() {
        ctx.clear_commands();
        renderer
            .render(&mut ctx, &mut EventHooks::new(), &mesh, &live_depth, false, false)
            .unwrap();
        let device = renderer.devices().get(renderer.viewpoint());
        assert_eq!(scene_projection(&ctx), build_projection(device));
        seen.push(renderer.viewpoint_info());
        renderer.next_viewpoint();
    }

    assert_eq!(seen, vec!["depth camera viewpoint", "projector viewpoint"]);
    assert_eq!(renderer.viewpoint(), Viewpoint::DepthCamera);
}

#[test]
fn test_integration_pointer_zoom_session() {
    let (projector, depth) = create_devices();
    let mut ctx = RecordingContext::new(1280, 720);
    let mut renderer = Renderer::new(&mut ctx, DeviceSet::new(&projector, &depth), &Config::default()).unwrap();
    let mut input = PointerInput::new();

    // Drag before debug mode: nothing moves
    input.cursor_moved(PhysicalPosition::new(100.0, 100.0));
    if let Some(event) = input.mouse_input(ElementState::Pressed, MouseButton::Right) {
        renderer.handle_pointer(event);
    }
    if let Some(event) = input.cursor_moved(PhysicalPosition::new(100.0, 150.0)) {
        renderer.handle_pointer(event);
    }
    input.mouse_input(ElementState::Released, MouseButton::Right);
    assert_eq!(renderer.scene_transform().translation(), 0.0);

    // Shift + left drag in debug mode zooms
    renderer.set_debug(true);
    input.modifiers_changed(ModifiersState::SHIFT);
    if let Some(event) = input.mouse_input(ElementState::Pressed, MouseButton::Left) {
        renderer.handle_pointer(event);
    }
    if let Some(event) = input.cursor_moved(PhysicalPosition::new(100.0, 200.0)) {
        renderer.handle_pointer(event);
    }
    assert_eq!(renderer.scene_transform().translation(), 2500.0);

    // The zoom reaches the 3D pass
    renderer
        .render(
            &mut ctx,
            &mut EventHooks::new(),
            &QuadMesh { half_size: 10.0 },
            &RecordedTexture::depth_frame(640, 480),
            false,
            false,
        )
        .unwrap();
    let zoom = renderer.scene_transform().matrix();
    assert!(ctx.commands().contains(&Command::MultiplyModelView(zoom)));
    assert!(zoom.w_axis.z != 0.0);
}

#[test]
fn test_integration_overlay_hook_draws_label() {
    let (projector, depth) = create_devices();
    let mut ctx = RecordingContext::new(1280, 720);
    let mut renderer = Renderer::new(&mut ctx, DeviceSet::new(&projector, &depth), &Config::default()).unwrap();
    let label = renderer.viewpoint_info();
    let mut hooks = EventHooks::new().on_render_2d(|ctx| ctx.debug_marker(label));

    renderer
        .render(
            &mut ctx,
            &mut hooks,
            &QuadMesh { half_size: 10.0 },
            &RecordedTexture::depth_frame(640, 480),
            false,
            true,
        )
        .unwrap();

    assert_eq!(ctx.markers().last(), Some(&"depth camera viewpoint"));
    assert_eq!(ctx.state().polygon_mode, PolygonMode::Fill);
}

#[test]
fn test_integration_backend_failure_is_recoverable() {
    let (projector, depth) = create_devices();
    let mut ctx = RecordingContext::new(1280, 720);
    let mut renderer = Renderer::new(&mut ctx, DeviceSet::new(&projector, &depth), &Config::default()).unwrap();
    let live_depth = RecordedTexture::depth_frame(640, 480);
    let mesh = QuadMesh { half_size: 50.0 };
    let before = ctx.state().clone();

    ctx.fail_when(|cmd| matches!(cmd, Command::DrawLines { .. }));
    assert!(renderer
        .render(&mut ctx, &mut EventHooks::new(), &mesh, &live_depth, false, true)
        .is_err());
    assert_eq!(ctx.state(), &before);

    // Next frame renders normally once the backend recovers
    ctx.clear_failures();
    renderer
        .render(&mut ctx, &mut EventHooks::new(), &mesh, &live_depth, false, true)
        .unwrap();
    assert_eq!(ctx.state(), &before);
}
