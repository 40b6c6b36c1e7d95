//! Error types for pixelate-transform

use thiserror::Error;

/// Errors that can occur during dimension normalization and resampling
#[derive(Debug, Error)]
pub enum TransformError {
    /// Core library error
    #[error("core error: {0}")]
    Core(#[from] pixelate_core::Error),

    /// Block size must be at least 1
    #[error("invalid block size: {0}")]
    InvalidBlockSize(u32),

    /// Rounding drove a raster extent to zero
    #[error("rounding produced an empty raster from {width}x{height}")]
    VanishingOutput { width: u32, height: u32 },

    /// Invalid transformation parameters
    #[error("invalid parameters: {0}")]
    InvalidParameters(String),
}

/// Result type for transform operations
pub type TransformResult<T> = Result<T, TransformError>;
