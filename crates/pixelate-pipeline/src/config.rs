//! Pipeline configuration

use crate::error::{PipelineError, PipelineResult};
use pixelate_color::ReduceStrategy;
use pixelate_transform::RoundPolicy;

/// Configuration for a pipeline run
///
/// Built once by the caller and treated as immutable for the duration
/// of the run.
#[derive(Debug, Clone, Copy)]
pub struct PipelineConfig {
    /// Edge length of the square reduction blocks, must be >= 1
    pub block_size: u32,
    /// Policy for rounding the input extents to block multiples
    pub rounding: RoundPolicy,
    /// Block reduction strategy
    pub strategy: ReduceStrategy,
    /// Treat every pixel as opaque during mode tallying
    pub ignore_alpha: bool,
    /// Number of palette colors after quantization, must be >= 1
    pub cluster_count: u32,
    /// Seed for the quantizer's random initialization
    pub cluster_seed: u64,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            block_size: 4,
            rounding: RoundPolicy::Up,
            strategy: ReduceStrategy::Mean,
            ignore_alpha: false,
            cluster_count: 16,
            cluster_seed: 42,
        }
    }
}

impl PipelineConfig {
    /// Validate the configuration.
    ///
    /// Called before any raster work; a rejected configuration never
    /// touches pixel data.
    ///
    /// # Errors
    ///
    /// Returns [`PipelineError::InvalidParameter`] if `block_size` or
    /// `cluster_count` is 0.
    pub fn validate(&self) -> PipelineResult<()> {
        if self.block_size == 0 {
            return Err(PipelineError::InvalidParameter(
                "block_size must be >= 1".to_string(),
            ));
        }
        if self.cluster_count == 0 {
            return Err(PipelineError::InvalidParameter(
                "cluster_count must be >= 1".to_string(),
            ));
        }
        Ok(())
    }
}
