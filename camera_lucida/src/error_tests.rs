//! Unit tests for error.rs
//!
//! Tests all Error variants, their Display output, and the logging macros.

use crate::error::{Error, Result};

// ============================================================================
// ERROR DISPLAY TESTS
// ============================================================================

#[test]
fn test_backend_error_display() {
    let err = Error::BackendError("state stack underflow".to_string());
    let display = format!("{}", err);
    assert!(display.contains("Backend error"));
    assert!(display.contains("state stack underflow"));
}

#[test]
fn test_invalid_config_display() {
    let err = Error::InvalidConfig("tex_width must be > 0".to_string());
    assert_eq!(format!("{}", err), "Invalid config: tex_width must be > 0");
}

#[test]
fn test_invalid_resource_display() {
    let err = Error::InvalidResource("render target has no color texture".to_string());
    let display = format!("{}", err);
    assert!(display.contains("Invalid resource"));
    assert!(display.contains("no color texture"));
}

#[test]
fn test_initialization_failed_display() {
    let err = Error::InitializationFailed("compositor shader missing".to_string());
    let display = format!("{}", err);
    assert!(display.contains("Initialization failed"));
    assert!(display.contains("compositor shader missing"));
}

#[test]
fn test_error_is_std_error() {
    let err = Error::BackendError("x".to_string());
    let _: &dyn std::error::Error = &err;
}

#[test]
fn test_error_clone_and_eq() {
    let err = Error::InvalidConfig("samples".to_string());
    assert_eq!(err.clone(), err);
    assert_ne!(err, Error::InvalidResource("samples".to_string()));
}

// ============================================================================
// MACROS
// ============================================================================

#[test]
fn test_lucida_err_builds_variant() {
    let err = crate::lucida_err!("lucida::test", InvalidResource, "texture {} missing", 7);
    assert_eq!(err, Error::InvalidResource("texture 7 missing".to_string()));
}

#[test]
fn test_lucida_bail_returns_early() {
    fn check(value: u32) -> Result<u32> {
        if value == 0 {
            crate::lucida_bail!("lucida::test", InvalidConfig, "value must be > 0");
        }
        Ok(value * 2)
    }

    assert_eq!(check(3), Ok(6));
    assert_eq!(check(0), Err(Error::InvalidConfig("value must be > 0".to_string())));
}

#[test]
fn test_error_propagation_with_question_mark() {
    fn inner() -> Result<i32> {
        Err(Error::BackendError("lost context".to_string()))
    }

    fn outer() -> Result<i32> {
        inner()?;
        Ok(42)
    }

    assert!(outer().is_err());
}
