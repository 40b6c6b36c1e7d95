//! Error types for the pipeline
//!
//! Stage-level errors are folded into a small caller-facing taxonomy:
//! bad configuration, bad dimensions, allocation failure, internal
//! algorithm failure, or cancellation.

use pixelate_color::ColorError;
use pixelate_transform::TransformError;
use thiserror::Error;

/// Errors surfaced by a pipeline run
#[derive(Debug, Error)]
pub enum PipelineError {
    /// A configuration value is out of range
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    /// The input or an intermediate raster has unusable dimensions
    #[error("invalid dimensions: {width}x{height}")]
    InvalidDimension { width: u32, height: u32 },

    /// A pixel buffer could not be allocated
    #[error("resource exhausted: allocation failed")]
    ResourceExhausted,

    /// A stage failed internally
    #[error("algorithm failure: {0}")]
    AlgorithmFailure(String),

    /// The run was cancelled at a stage boundary
    #[error("cancelled")]
    Cancelled,
}

/// Result type for pipeline operations
pub type PipelineResult<T> = Result<T, PipelineError>;

impl From<pixelate_core::Error> for PipelineError {
    fn from(err: pixelate_core::Error) -> Self {
        use pixelate_core::Error;
        match err {
            Error::InvalidDimension { width, height } => {
                PipelineError::InvalidDimension { width, height }
            }
            Error::AllocationFailed => PipelineError::ResourceExhausted,
            Error::InvalidParameter(msg) => PipelineError::InvalidParameter(msg),
            other => PipelineError::AlgorithmFailure(other.to_string()),
        }
    }
}

impl From<TransformError> for PipelineError {
    fn from(err: TransformError) -> Self {
        match err {
            TransformError::Core(e) => e.into(),
            TransformError::InvalidBlockSize(bs) => {
                PipelineError::InvalidParameter(format!("block_size {} is invalid", bs))
            }
            TransformError::VanishingOutput { width, height } => {
                PipelineError::InvalidDimension { width, height }
            }
            TransformError::InvalidParameters(msg) => PipelineError::InvalidParameter(msg),
        }
    }
}

impl From<ColorError> for PipelineError {
    fn from(err: ColorError) -> Self {
        match err {
            ColorError::Core(e) => e.into(),
            ColorError::InvalidParameters(msg) => PipelineError::InvalidParameter(msg),
        }
    }
}
