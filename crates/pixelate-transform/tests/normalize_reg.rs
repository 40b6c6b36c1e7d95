//! Regression test for dimension normalization

use pixelate_test::{RegParams, gradient_rgb, uniform_rgb};
use pixelate_transform::{RoundPolicy, normalize_to_blocks, rounded_extent};

#[test]
fn normalize_reg() {
    let mut rp = RegParams::new("normalize");

    // Extent rounding table
    rp.compare_values(12.0, rounded_extent(10, 4, RoundPolicy::Up) as f64, 0.0);
    rp.compare_values(8.0, rounded_extent(10, 4, RoundPolicy::Down) as f64, 0.0);
    rp.compare_values(8.0, rounded_extent(10, 4, RoundPolicy::Nearest) as f64, 0.0);
    rp.compare_values(10.0, rounded_extent(10, 4, RoundPolicy::Keep) as f64, 0.0);
    rp.compare_values(10.0, rounded_extent(10, 5, RoundPolicy::Up) as f64, 0.0);

    // Upscaling a gradient to the padded extents
    let src = gradient_rgb(30, 22).unwrap();
    let up = normalize_to_blocks(&src, 8, RoundPolicy::Up).unwrap();
    rp.compare_values(32.0, up.width() as f64, 0.0);
    rp.compare_values(24.0, up.height() as f64, 0.0);
    rp.write_raster_and_check(&up).unwrap();

    // Downscaling the same gradient
    let down = normalize_to_blocks(&src, 8, RoundPolicy::Down).unwrap();
    rp.compare_values(24.0, down.width() as f64, 0.0);
    rp.compare_values(16.0, down.height() as f64, 0.0);
    rp.write_raster_and_check(&down).unwrap();

    // Resampling a flat image keeps it flat
    let flat = uniform_rgb(10, 10, (33, 66, 99)).unwrap();
    let resized = normalize_to_blocks(&flat, 4, RoundPolicy::Up).unwrap();
    let mut uniform = true;
    for y in 0..resized.height() {
        for x in 0..resized.width() {
            uniform &= resized.get_rgb(x, y) == Some((33, 66, 99));
        }
    }
    rp.compare_values(1.0, uniform as u32 as f64, 0.0);

    // Already-aligned dimensions come back unchanged
    let aligned = normalize_to_blocks(&src, 2, RoundPolicy::Up).unwrap();
    rp.compare_rasters(&aligned, &src);

    assert!(rp.cleanup());
}
