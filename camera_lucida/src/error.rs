//! Error types for the camera lucida renderer
//!
//! This module defines the error types used throughout the crate,
//! including graphics backend failures, configuration and resource errors.

use std::fmt;

/// Result type for camera lucida operations
pub type Result<T> = std::result::Result<T, Error>;

/// Camera lucida errors
#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// Graphics backend error (GL, Vulkan, recording context, etc.)
    BackendError(String),

    /// Configuration rejected by validation
    InvalidConfig(String),

    /// Invalid resource (texture, render target, etc.)
    InvalidResource(String),

    /// Initialization failed (render target allocation, compositor setup)
    InitializationFailed(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::BackendError(msg) => write!(f, "Backend error: {}", msg),
            Error::InvalidConfig(msg) => write!(f, "Invalid config: {}", msg),
            Error::InvalidResource(msg) => write!(f, "Invalid resource: {}", msg),
            Error::InitializationFailed(msg) => write!(f, "Initialization failed: {}", msg),
        }
    }
}

impl std::error::Error for Error {}

/// Build an [`Error`] and log it at ERROR severity with file:line
///
/// # Example
///
/// ```no_run
/// # use camera_lucida::lucida_err;
/// let err = lucida_err!("lucida::Config", InvalidConfig, "width must be > 0 (got {})", 0);
/// ```
#[macro_export]
macro_rules! lucida_err {
    ($source:expr, $variant:ident, $($arg:tt)*) => {{
        let message = format!($($arg)*);
        $crate::lucida_error!($source, "{}", message);
        $crate::lucida::Error::$variant(message)
    }};
}

/// Log an error and return it from the enclosing function
///
/// # Example
///
/// ```no_run
/// # use camera_lucida::lucida_bail;
/// fn check(depth: usize) -> camera_lucida::lucida::Result<()> {
///     if depth == 0 {
///         lucida_bail!("lucida::Recording", BackendError, "state stack underflow");
///     }
///     Ok(())
/// }
/// ```
#[macro_export]
macro_rules! lucida_bail {
    ($source:expr, $variant:ident, $($arg:tt)*) => {
        return Err($crate::lucida_err!($source, $variant, $($arg)*))
    };
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
