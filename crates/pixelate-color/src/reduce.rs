//! Block reduction
//!
//! Partitions a raster into non-overlapping square blocks and replaces
//! each block with a single representative color. Two strategies are
//! available:
//!
//! - [`ReduceStrategy::Mean`] - per-channel arithmetic mean
//! - [`ReduceStrategy::Mode`] - most frequent (R,G,B) triple, with an
//!   alpha-aware transparency policy
//!
//! Blocks are laid out on a grid anchored at the origin; when the
//! dimensions are not exact multiples of the block size, the trailing
//! blocks are clamped to the raster edge and reduced like any other.
//! The normalization stage removes partial blocks upstream, but the
//! reducer does not depend on it.

use crate::error::{ColorError, ColorResult};
use pixelate_core::{Raster, RasterMut};
use std::collections::HashMap;

/// Strategy for reducing a block to a single color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReduceStrategy {
    /// Per-channel arithmetic mean over all pixels in the block.
    ///
    /// All channels are averaged, including alpha when present.
    #[default]
    Mean,
    /// Most frequent (R,G,B) triple in the block.
    ///
    /// Fully transparent pixels (alpha 0) are tallied in a separate
    /// bucket; when that bucket wins, the block is left unchanged.
    Mode,
}

/// Options for block reduction
#[derive(Debug, Clone, Copy)]
pub struct ReduceOptions {
    /// Edge length of the square blocks in pixels
    pub block_size: u32,
    /// Reduction strategy
    pub strategy: ReduceStrategy,
    /// Treat every pixel as opaque during mode tallying
    pub ignore_alpha: bool,
}

impl Default for ReduceOptions {
    fn default() -> Self {
        Self {
            block_size: 4,
            strategy: ReduceStrategy::Mean,
            ignore_alpha: false,
        }
    }
}

/// Reduce every block of a raster to a single representative color.
///
/// Returns a new raster of the same dimensions and layout; the input is
/// not modified.
///
/// # Errors
///
/// Returns [`ColorError::InvalidParameters`] if `block_size` is 0.
pub fn reduce_blocks(raster: &Raster, options: &ReduceOptions) -> ColorResult<Raster> {
    let bs = options.block_size;
    if bs == 0 {
        return Err(ColorError::InvalidParameters(
            "block_size must be >= 1".to_string(),
        ));
    }

    let (w, h) = (raster.width(), raster.height());
    let mut out = raster.to_mut();

    for by in (0..h).step_by(bs as usize) {
        let bh = bs.min(h - by);
        for bx in (0..w).step_by(bs as usize) {
            let bw = bs.min(w - bx);
            match options.strategy {
                ReduceStrategy::Mean => reduce_block_mean(raster, &mut out, bx, by, bw, bh),
                ReduceStrategy::Mode => {
                    reduce_block_mode(raster, &mut out, bx, by, bw, bh, options.ignore_alpha)
                }
            }
        }
    }

    Ok(out.into())
}

/// Reduce blocks with the default strategy and the given block size.
pub fn reduce_blocks_simple(raster: &Raster, block_size: u32) -> ColorResult<Raster> {
    reduce_blocks(
        raster,
        &ReduceOptions {
            block_size,
            ..Default::default()
        },
    )
}

/// Fill a block with the per-channel mean of its pixels.
///
/// Sums are accumulated in `u64` so the largest block cannot overflow;
/// the mean truncates toward zero like integer division.
fn reduce_block_mean(src: &Raster, out: &mut RasterMut, bx: u32, by: u32, bw: u32, bh: u32) {
    let channels = src.channels() as usize;
    let mut sums = [0u64; 4];

    for y in by..by + bh {
        let row = src.row_data(y);
        let start = bx as usize * channels;
        for px in row[start..start + bw as usize * channels].chunks_exact(channels) {
            for (sum, &v) in sums.iter_mut().zip(px) {
                *sum += v as u64;
            }
        }
    }

    let count = (bw as u64) * (bh as u64);
    let mut mean = [0u8; 4];
    for (m, sum) in mean.iter_mut().zip(&sums) {
        *m = (sum / count) as u8;
    }

    for y in by..by + bh {
        let row = out.row_data_mut(y);
        let start = bx as usize * channels;
        for px in row[start..start + bw as usize * channels].chunks_exact_mut(channels) {
            px.copy_from_slice(&mean[..channels]);
        }
    }
}

/// Fill a block with its most frequent (R,G,B) triple.
///
/// Fully transparent pixels are counted in a sentinel bucket (`None`
/// key) unless `ignore_alpha` is set or the raster has no alpha channel.
/// Ties are broken by first occurrence during the block scan. A winning
/// sentinel bucket leaves the block untouched; otherwise only the RGB
/// channels are overwritten and alpha is preserved.
fn reduce_block_mode(
    src: &Raster,
    out: &mut RasterMut,
    bx: u32,
    by: u32,
    bw: u32,
    bh: u32,
    ignore_alpha: bool,
) {
    let count_transparent = src.layout().has_alpha() && !ignore_alpha;

    // Buckets in first-seen order, with an index for O(1) tallying.
    let mut buckets: Vec<(Option<(u8, u8, u8)>, u32)> = Vec::new();
    let mut index: HashMap<Option<(u8, u8, u8)>, usize> = HashMap::new();

    for y in by..by + bh {
        for x in bx..bx + bw {
            let (r, g, b, a) = src.get_rgba_unchecked(x, y);
            let key = if count_transparent && a == 0 {
                None
            } else {
                Some((r, g, b))
            };
            match index.get(&key) {
                Some(&i) => buckets[i].1 += 1,
                None => {
                    index.insert(key, buckets.len());
                    buckets.push((key, 1));
                }
            }
        }
    }

    let mut winner = buckets[0];
    for &bucket in &buckets[1..] {
        if bucket.1 > winner.1 {
            winner = bucket;
        }
    }

    // A winning transparent bucket leaves the block as-is.
    let Some((r, g, b)) = winner.0 else {
        return;
    };

    for y in by..by + bh {
        for x in bx..bx + bw {
            out.set_rgb_unchecked(x, y, r, g, b);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pixelate_core::{ChannelLayout, Raster};

    fn mean_options(bs: u32) -> ReduceOptions {
        ReduceOptions {
            block_size: bs,
            strategy: ReduceStrategy::Mean,
            ignore_alpha: false,
        }
    }

    fn mode_options(bs: u32) -> ReduceOptions {
        ReduceOptions {
            block_size: bs,
            strategy: ReduceStrategy::Mode,
            ignore_alpha: false,
        }
    }

    #[test]
    fn test_zero_block_size_rejected() {
        let raster = Raster::new(4, 4, ChannelLayout::Rgb).unwrap();
        let err = reduce_blocks(&raster, &mean_options(0)).unwrap_err();
        assert!(matches!(err, ColorError::InvalidParameters(_)));
    }

    #[test]
    fn test_trailing_partial_blocks_clamped() {
        // 6x6 with block 4: trailing blocks are 2 wide / 2 tall
        let raster = Raster::new(6, 6, ChannelLayout::Rgb).unwrap();
        let mut rm = raster.try_into_mut().unwrap();
        for y in 0..6 {
            for x in 0..6 {
                rm.set_rgb_unchecked(x, y, (x * 40) as u8, (y * 40) as u8, 0);
            }
        }
        let raster: Raster = rm.into();

        let out = reduce_blocks(&raster, &mean_options(4)).unwrap();
        // Right-edge block spans x 4..6, y 0..4: mean x-channel = (160+200)/2
        assert_eq!(out.get_rgb(5, 0), Some((180, 60, 0)));
        // Corner block spans x 4..6, y 4..6
        assert_eq!(out.get_rgb(5, 5), Some((180, 180, 0)));
        // Full block at the origin is untouched by the clamping
        assert_eq!(out.get_rgb(0, 0), Some((60, 60, 0)));
    }

    #[test]
    fn test_mean_block_uniformity() {
        let raster = Raster::new(8, 8, ChannelLayout::Rgb).unwrap();
        let mut rm = raster.try_into_mut().unwrap();
        for y in 0..8 {
            for x in 0..8 {
                rm.set_rgb_unchecked(x, y, (x * 30) as u8, (y * 30) as u8, 100);
            }
        }
        let raster: Raster = rm.into();

        let out = reduce_blocks(&raster, &mean_options(4)).unwrap();
        for (bx, by) in [(0, 0), (4, 0), (0, 4), (4, 4)] {
            let first = out.get_rgb(bx, by).unwrap();
            for y in by..by + 4 {
                for x in bx..bx + 4 {
                    assert_eq!(out.get_rgb(x, y), Some(first));
                }
            }
        }
    }

    #[test]
    fn test_mean_truncates() {
        // 2x2 block of values 0, 1, 1, 1 -> sum 3, mean 3/4 = 0
        let data = vec![
            0, 0, 0, /* */ 1, 1, 1, //
            1, 1, 1, /* */ 1, 1, 1,
        ];
        let raster = Raster::from_vec(2, 2, ChannelLayout::Rgb, data).unwrap();
        let out = reduce_blocks(&raster, &mean_options(2)).unwrap();
        assert_eq!(out.get_rgb(0, 0), Some((0, 0, 0)));
    }

    #[test]
    fn test_mean_averages_alpha() {
        let raster = Raster::new(2, 2, ChannelLayout::Rgba).unwrap();
        let mut rm = raster.try_into_mut().unwrap();
        rm.set_rgba_unchecked(0, 0, 100, 100, 100, 0);
        rm.set_rgba_unchecked(1, 0, 100, 100, 100, 255);
        rm.set_rgba_unchecked(0, 1, 100, 100, 100, 255);
        rm.set_rgba_unchecked(1, 1, 100, 100, 100, 255);
        let raster: Raster = rm.into();

        let out = reduce_blocks(&raster, &mean_options(2)).unwrap();
        // (0 + 255 * 3) / 4 = 191
        assert_eq!(out.get_rgba(0, 0), Some((100, 100, 100, 191)));
    }

    #[test]
    fn test_mode_majority_wins() {
        let raster = Raster::new(2, 2, ChannelLayout::Rgb).unwrap();
        let mut rm = raster.try_into_mut().unwrap();
        rm.set_rgb_unchecked(0, 0, 10, 20, 30);
        rm.set_rgb_unchecked(1, 0, 10, 20, 30);
        rm.set_rgb_unchecked(0, 1, 10, 20, 30);
        rm.set_rgb_unchecked(1, 1, 200, 200, 200);
        let raster: Raster = rm.into();

        let out = reduce_blocks(&raster, &mode_options(2)).unwrap();
        for y in 0..2 {
            for x in 0..2 {
                assert_eq!(out.get_rgb(x, y), Some((10, 20, 30)));
            }
        }
    }

    #[test]
    fn test_mode_tie_breaks_first_seen() {
        // Two colors with equal counts; the one scanned first wins.
        let raster = Raster::new(2, 2, ChannelLayout::Rgb).unwrap();
        let mut rm = raster.try_into_mut().unwrap();
        rm.set_rgb_unchecked(0, 0, 1, 1, 1);
        rm.set_rgb_unchecked(1, 0, 2, 2, 2);
        rm.set_rgb_unchecked(0, 1, 1, 1, 1);
        rm.set_rgb_unchecked(1, 1, 2, 2, 2);
        let raster: Raster = rm.into();

        let out = reduce_blocks(&raster, &mode_options(2)).unwrap();
        assert_eq!(out.get_rgb(1, 1), Some((1, 1, 1)));
    }

    #[test]
    fn test_mode_transparent_block_untouched() {
        let raster = Raster::new(2, 2, ChannelLayout::Rgba).unwrap();
        let mut rm = raster.try_into_mut().unwrap();
        // 3 transparent pixels (different colors), 1 opaque
        rm.set_rgba_unchecked(0, 0, 10, 0, 0, 0);
        rm.set_rgba_unchecked(1, 0, 20, 0, 0, 0);
        rm.set_rgba_unchecked(0, 1, 30, 0, 0, 0);
        rm.set_rgba_unchecked(1, 1, 99, 99, 99, 255);
        let raster: Raster = rm.into();

        let out = reduce_blocks(&raster, &mode_options(2)).unwrap();
        assert_eq!(out.data(), raster.data());
    }

    #[test]
    fn test_mode_preserves_alpha_on_fill() {
        let raster = Raster::new(2, 2, ChannelLayout::Rgba).unwrap();
        let mut rm = raster.try_into_mut().unwrap();
        rm.set_rgba_unchecked(0, 0, 5, 5, 5, 200);
        rm.set_rgba_unchecked(1, 0, 5, 5, 5, 150);
        rm.set_rgba_unchecked(0, 1, 5, 5, 5, 100);
        rm.set_rgba_unchecked(1, 1, 7, 7, 7, 50);
        let raster: Raster = rm.into();

        let out = reduce_blocks(&raster, &mode_options(2)).unwrap();
        assert_eq!(out.get_rgba(0, 0), Some((5, 5, 5, 200)));
        assert_eq!(out.get_rgba(1, 1), Some((5, 5, 5, 50)));
    }

    #[test]
    fn test_mode_ignore_alpha_counts_transparent_colors() {
        let raster = Raster::new(2, 2, ChannelLayout::Rgba).unwrap();
        let mut rm = raster.try_into_mut().unwrap();
        // All transparent but sharing a color; with ignore_alpha the
        // color wins instead of the sentinel bucket.
        rm.set_rgba_unchecked(0, 0, 42, 42, 42, 0);
        rm.set_rgba_unchecked(1, 0, 42, 42, 42, 0);
        rm.set_rgba_unchecked(0, 1, 42, 42, 42, 0);
        rm.set_rgba_unchecked(1, 1, 9, 9, 9, 255);
        let raster: Raster = rm.into();

        let options = ReduceOptions {
            block_size: 2,
            strategy: ReduceStrategy::Mode,
            ignore_alpha: true,
        };
        let out = reduce_blocks(&raster, &options).unwrap();
        assert_eq!(out.get_rgb(1, 1), Some((42, 42, 42)));
    }

    #[test]
    fn test_simple_uses_mean() {
        let raster = Raster::new(4, 4, ChannelLayout::Rgb).unwrap();
        let mut rm = raster.try_into_mut().unwrap();
        rm.fill_rgb(50, 60, 70);
        let raster: Raster = rm.into();

        let out = reduce_blocks_simple(&raster, 4).unwrap();
        assert_eq!(out.get_rgb(3, 3), Some((50, 60, 70)));
    }

    #[test]
    fn test_block_size_one_is_identity() {
        let raster = Raster::new(3, 3, ChannelLayout::Rgb).unwrap();
        let mut rm = raster.try_into_mut().unwrap();
        for y in 0..3 {
            for x in 0..3 {
                rm.set_rgb_unchecked(x, y, (x + y * 3) as u8, 0, 0);
            }
        }
        let raster: Raster = rm.into();

        let mean = reduce_blocks(&raster, &mean_options(1)).unwrap();
        let mode = reduce_blocks(&raster, &mode_options(1)).unwrap();
        assert_eq!(mean.data(), raster.data());
        assert_eq!(mode.data(), raster.data());
    }
}
