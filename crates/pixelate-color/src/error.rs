//! Error types for color operations

use thiserror::Error;

/// Errors that can occur during color operations
#[derive(Debug, Error)]
pub enum ColorError {
    /// Core error
    #[error("core error: {0}")]
    Core(#[from] pixelate_core::Error),

    /// Invalid parameters
    #[error("invalid parameters: {0}")]
    InvalidParameters(String),
}

/// Result type for color operations
pub type ColorResult<T> = Result<T, ColorError>;
