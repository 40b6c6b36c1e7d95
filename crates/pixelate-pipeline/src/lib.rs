//! pixelate-pipeline - Orchestration of the pixelization stages
//!
//! Runs the three stages in order on a single raster:
//!
//! 1. Normalize the dimensions to block multiples (pixelate-transform)
//! 2. Reduce each block to one representative color (pixelate-color)
//! 3. Quantize the palette with a seeded clustering pass (pixelate-color)
//!
//! Each run is a pure, synchronous computation over its own raster
//! copies; nothing is shared between invocations. Long runs can be
//! cancelled cooperatively at stage boundaries via [`run_with_cancel`].

mod config;
mod error;

pub use config::PipelineConfig;
pub use error::{PipelineError, PipelineResult};

use pixelate_color::{KmeansOptions, ReduceOptions, quantize_colors, reduce_blocks};
use pixelate_core::Raster;
use pixelate_transform::normalize_to_blocks;
use std::sync::atomic::{AtomicBool, Ordering};

/// Run the full pixelization pipeline on a raster.
///
/// The configuration is validated before any pixel data is touched.
/// Returns a new raster whose dimensions are the normalized (block
/// multiple) extents of the input.
///
/// # Errors
///
/// - [`PipelineError::InvalidParameter`] for an invalid configuration.
/// - [`PipelineError::InvalidDimension`] if normalization would produce
///   an empty raster.
pub fn run(raster: &Raster, config: &PipelineConfig) -> PipelineResult<Raster> {
    let cancel = AtomicBool::new(false);
    run_with_cancel(raster, config, &cancel)
}

/// Run the pipeline with a cooperative cancellation flag.
///
/// The flag is checked before each stage; once a stage has started it
/// runs to completion. A cancelled run returns
/// [`PipelineError::Cancelled`] and produces no output.
pub fn run_with_cancel(
    raster: &Raster,
    config: &PipelineConfig,
    cancel: &AtomicBool,
) -> PipelineResult<Raster> {
    config.validate()?;

    check_cancel(cancel)?;
    let normalized = normalize_to_blocks(raster, config.block_size, config.rounding)?;

    check_cancel(cancel)?;
    let reduced = reduce_blocks(
        &normalized,
        &ReduceOptions {
            block_size: config.block_size,
            strategy: config.strategy,
            ignore_alpha: config.ignore_alpha,
        },
    )?;

    check_cancel(cancel)?;
    let quantized = quantize_colors(
        &reduced,
        &KmeansOptions::new(config.cluster_count, config.cluster_seed),
    )?;

    Ok(quantized)
}

#[inline]
fn check_cancel(cancel: &AtomicBool) -> PipelineResult<()> {
    if cancel.load(Ordering::Relaxed) {
        Err(PipelineError::Cancelled)
    } else {
        Ok(())
    }
}
