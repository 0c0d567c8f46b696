//! Integration tests for the logging facade
//!
//! These tests verify that renderer activity reaches a custom logger.
//! No GPU required.
//!
//! Run with: cargo test --test logging_integration_tests

use camera_lucida::glam::Vec3;
use camera_lucida::lucida::camera::Frustum;
use camera_lucida::lucida::graphics::{Command, RecordedTexture, RecordingContext};
use camera_lucida::lucida::log::{self, LogEntry, LogSeverity, Logger};
use camera_lucida::lucida::{
    CalibratedDevice, Config, DeviceCalibration, DeviceSet, EventHooks, Mesh, Renderer, Result,
};
use camera_lucida::lucida::graphics::GraphicsContext;
use serial_test::serial;
use std::sync::{Arc, Mutex};

// ============================================================================
// TEST LOGGER IMPLEMENTATION
// ============================================================================

/// Test logger that captures log entries for verification
struct TestLogger {
    entries: Arc<Mutex<Vec<LogEntry>>>,
}

impl TestLogger {
    fn new() -> (Self, Arc<Mutex<Vec<LogEntry>>>) {
        let entries = Arc::new(Mutex::new(Vec::new()));
        (Self { entries: entries.clone() }, entries)
    }
}

impl Logger for TestLogger {
    fn log(&self, entry: &LogEntry) {
        self.entries.lock().unwrap().push(entry.clone());
    }
}

struct EmptyMesh;

impl Mesh for EmptyMesh {
    fn draw(&self, _ctx: &mut dyn GraphicsContext) -> Result<()> {
        Ok(())
    }
}

fn device(name: &str, x: f32) -> CalibratedDevice {
    CalibratedDevice::new(
        name,
        DeviceCalibration::from_pose(
            Frustum::new(-10.0, 10.0, -10.0, 10.0, 1.0, 1000.0),
            Vec3::new(x, 0.0, 900.0),
            Vec3::ZERO,
            Vec3::Y,
        ),
    )
}

// ============================================================================
// LOGGING TESTS
// ============================================================================

#[test]
#[serial]
fn test_integration_custom_logger() {
    let (test_logger, entries) = TestLogger::new();
    log::set_logger(test_logger);

    log::set_min_severity(LogSeverity::Trace);
    camera_lucida::lucida_info!("test::module", "Test info message");
    camera_lucida::lucida_warn!("test::module", "Test warning message");
    camera_lucida::lucida_error!("test::module", "Test error message");

    {
        let captured = entries.lock().unwrap();
        assert_eq!(captured.len(), 3);

        assert_eq!(captured[0].severity, LogSeverity::Info);
        assert_eq!(captured[0].source, "test::module");
        assert_eq!(captured[0].message, "Test info message");

        assert_eq!(captured[1].severity, LogSeverity::Warn);
        assert_eq!(captured[1].message, "Test warning message");

        assert_eq!(captured[2].severity, LogSeverity::Error);
        assert!(captured[2].file.is_some());
        assert!(captured[2].line.is_some());
    }

    log::set_min_severity(LogSeverity::Debug);
    log::reset_logger();
}

#[test]
#[serial]
fn test_integration_renderer_logs_viewpoint_switch() {
    let (test_logger, entries) = TestLogger::new();
    log::set_logger(test_logger);

    let (projector, depth) = (device("projector", -200.0), device("depth", 200.0));
    let mut ctx = RecordingContext::new(640, 480);
    let mut renderer = Renderer::new(&mut ctx, DeviceSet::new(&projector, &depth), &Config::default()).unwrap();
    renderer.next_viewpoint();

    {
        let captured = entries.lock().unwrap();
        assert!(captured
            .iter()
            .any(|e| e.source == "lucida::Renderer" && e.message.contains("projector viewpoint")));
    }

    drop(renderer);
    log::reset_logger();
}

#[test]
#[serial]
fn test_integration_backend_error_is_logged() {
    let (test_logger, entries) = TestLogger::new();
    log::set_logger(test_logger);

    let (projector, depth) = (device("projector", -200.0), device("depth", 200.0));
    let mut ctx = RecordingContext::new(640, 480);
    let mut renderer = Renderer::new(&mut ctx, DeviceSet::new(&projector, &depth), &Config::default()).unwrap();
    ctx.fail_when(|cmd| matches!(cmd, Command::SetDepthTest(true)));

    let result = renderer.render(
        &mut ctx,
        &mut EventHooks::new(),
        &EmptyMesh,
        &RecordedTexture::depth_frame(64, 48),
        false,
        false,
    );
    assert!(result.is_err());

    {
        let captured = entries.lock().unwrap();
        let errors: Vec<_> = captured
            .iter()
            .filter(|e| e.severity == LogSeverity::Error)
            .collect();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].source, "lucida::RecordingContext");
        assert!(errors[0].message.contains("SetDepthTest"));
    }

    drop(renderer);
    log::reset_logger();
}

#[test]
#[serial]
fn test_integration_degenerate_frustum_is_warned() {
    let (test_logger, entries) = TestLogger::new();
    log::set_logger(test_logger);

    let (projector, depth) = (device("projector", -200.0), device("depth", 200.0));
    let mut ctx = RecordingContext::new(640, 480);
    let mut renderer = Renderer::new(&mut ctx, DeviceSet::new(&projector, &depth), &Config::default()).unwrap();
    let mut calibration = depth.calibration();
    calibration.frustum = Frustum::new(5.0, -5.0, -10.0, 10.0, 1.0, 1000.0);
    depth.recalibrate(calibration);

    renderer
        .render(
            &mut ctx,
            &mut EventHooks::new(),
            &EmptyMesh,
            &RecordedTexture::depth_frame(64, 48),
            false,
            false,
        )
        .unwrap();

    {
        let captured = entries.lock().unwrap();
        assert!(captured.iter().any(|e| e.severity == LogSeverity::Warn
            && e.source == "lucida::Renderer"
            && e.message.contains("depth camera viewpoint")));
    }

    drop(renderer);
    log::reset_logger();
}
