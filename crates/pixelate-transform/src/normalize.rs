//! Dimension normalization
//!
//! Rounds raster extents to an integral number of blocks before block
//! reduction. Each extent is rounded independently under a selectable
//! policy; if either extent changes, the raster is resampled to the new
//! dimensions.

use crate::error::{TransformError, TransformResult};
use crate::resize::resize_bilinear;
use pixelate_core::Raster;

/// Rounding policy for normalizing an extent to a block-size multiple
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RoundPolicy {
    /// Round up to the next multiple of the block size
    #[default]
    Up,
    /// Round down to the previous multiple of the block size
    Down,
    /// Round to the "nearest" multiple.
    ///
    /// Historically this floors to the lower multiple, making it identical
    /// to [`RoundPolicy::Down`]; true nearest-multiple rounding would
    /// compare the remainder against half the block size. The floor
    /// behavior is kept for output compatibility.
    Nearest,
    /// Keep the extent unchanged
    Keep,
}

/// Round a single extent to a multiple of `block_size` under `policy`.
///
/// Returns the rounded extent; the result can be 0 under `Down`/`Nearest`
/// when `block_size > dim`, which callers must treat as an error for
/// raster dimensions.
pub fn rounded_extent(dim: u32, block_size: u32, policy: RoundPolicy) -> u32 {
    match policy {
        RoundPolicy::Up => dim.div_ceil(block_size) * block_size,
        RoundPolicy::Down | RoundPolicy::Nearest => (dim / block_size) * block_size,
        RoundPolicy::Keep => dim,
    }
}

/// Normalize a raster so both extents are multiples of `block_size`.
///
/// If the rounded extents equal the current ones the input is returned
/// unchanged (cheap Arc clone); otherwise the raster is resampled with
/// bilinear interpolation.
///
/// # Errors
///
/// - [`TransformError::InvalidBlockSize`] if `block_size` is 0.
/// - [`TransformError::VanishingOutput`] if rounding drives either extent
///   to 0 (`block_size` larger than the extent under `Down`/`Nearest`).
pub fn normalize_to_blocks(
    raster: &Raster,
    block_size: u32,
    policy: RoundPolicy,
) -> TransformResult<Raster> {
    if block_size == 0 {
        return Err(TransformError::InvalidBlockSize(block_size));
    }

    let (w, h) = (raster.width(), raster.height());
    let new_w = rounded_extent(w, block_size, policy);
    let new_h = rounded_extent(h, block_size, policy);

    if new_w == 0 || new_h == 0 {
        return Err(TransformError::VanishingOutput {
            width: w,
            height: h,
        });
    }

    if new_w == w && new_h == h {
        return Ok(raster.clone());
    }

    resize_bilinear(raster, new_w, new_h)
}
