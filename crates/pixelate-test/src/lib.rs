//! pixelate-test - Regression test framework for the pixelate pipeline
//!
//! Supports three modes:
//!
//! - **Generate**: Create golden files for comparison
//! - **Compare**: Compare results with golden files
//! - **Display**: Run tests without comparison
//!
//! # Usage
//!
//! ```ignore
//! use pixelate_test::{RegParams, gradient_rgb};
//!
//! let mut rp = RegParams::new("blockreduce");
//! let src = gradient_rgb(64, 48).unwrap();
//! rp.compare_values(64.0, src.width() as f64, 0.0);
//! assert!(rp.cleanup());
//! ```
//!
//! # Environment Variables
//!
//! - `REGTEST_MODE`: Set to "generate", "compare", or "display"
//!
//! The pipeline has no codec I/O, so test inputs are synthetic rasters
//! built by the generator functions below rather than decoded files.

mod error;
mod params;

pub use error::{TestError, TestResult};
pub use params::{RegParams, RegTestMode};

use pixelate_core::{ChannelLayout, Raster};

/// Get the path to the workspace root
fn workspace_root() -> String {
    let manifest_dir = env!("CARGO_MANIFEST_DIR");
    // pixelate-test is at crates/pixelate-test, so go up two directories
    format!("{}/../..", manifest_dir)
}

/// Get the path to the golden files directory
pub fn golden_dir() -> String {
    format!("{}/tests/golden", workspace_root())
}

/// Get the path to the regout (regression output) directory
pub fn regout_dir() -> String {
    format!("{}/tests/regout", workspace_root())
}

/// Build a uniform single-color RGB raster.
pub fn uniform_rgb(width: u32, height: u32, rgb: (u8, u8, u8)) -> TestResult<Raster> {
    let mut data = Vec::with_capacity(width as usize * height as usize * 3);
    for _ in 0..width as usize * height as usize {
        data.extend_from_slice(&[rgb.0, rgb.1, rgb.2]);
    }
    Ok(Raster::from_vec(width, height, ChannelLayout::Rgb, data)?)
}

/// Build an RGB raster with a two-axis color gradient.
///
/// Red varies along x, green along y, blue along the diagonal; adjacent
/// pixels differ, which exercises reduction and clustering on a busy
/// color set.
pub fn gradient_rgb(width: u32, height: u32) -> TestResult<Raster> {
    let mut data = Vec::with_capacity(width as usize * height as usize * 3);
    for y in 0..height {
        for x in 0..width {
            let r = ((x * 255) / width.max(1)) as u8;
            let g = ((y * 255) / height.max(1)) as u8;
            let b = (((x + y) * 255) / (width + height).max(1)) as u8;
            data.extend_from_slice(&[r, g, b]);
        }
    }
    Ok(Raster::from_vec(width, height, ChannelLayout::Rgb, data)?)
}

/// Build an RGBA checkerboard alternating between two colors.
///
/// Cells of size `cell` alternate between `a` and `b`; both colors are
/// fully opaque.
pub fn checkerboard_rgba(
    width: u32,
    height: u32,
    cell: u32,
    a: (u8, u8, u8),
    b: (u8, u8, u8),
) -> TestResult<Raster> {
    let cell = cell.max(1);
    let mut data = Vec::with_capacity(width as usize * height as usize * 4);
    for y in 0..height {
        for x in 0..width {
            let c = if ((x / cell) + (y / cell)) % 2 == 0 { a } else { b };
            data.extend_from_slice(&[c.0, c.1, c.2, 255]);
        }
    }
    Ok(Raster::from_vec(width, height, ChannelLayout::Rgba, data)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_uniform_rgb() {
        let r = uniform_rgb(5, 3, (10, 20, 30)).unwrap();
        assert_eq!((r.width(), r.height()), (5, 3));
        assert_eq!(r.get_rgb(4, 2), Some((10, 20, 30)));
    }

    #[test]
    fn test_gradient_has_many_colors() {
        let r = gradient_rgb(16, 16).unwrap();
        let mut colors = std::collections::HashSet::new();
        for y in 0..16 {
            for x in 0..16 {
                colors.insert(r.get_rgb(x, y).unwrap());
            }
        }
        assert!(colors.len() > 16);
    }

    #[test]
    fn test_checkerboard_cells() {
        let r = checkerboard_rgba(8, 8, 4, (255, 0, 0), (0, 0, 255)).unwrap();
        assert_eq!(r.get_rgba(0, 0), Some((255, 0, 0, 255)));
        assert_eq!(r.get_rgba(4, 0), Some((0, 0, 255, 255)));
        assert_eq!(r.get_rgba(0, 4), Some((0, 0, 255, 255)));
        assert_eq!(r.get_rgba(4, 4), Some((255, 0, 0, 255)));
    }
}
