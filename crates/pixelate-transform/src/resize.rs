//! Bilinear resampling
//!
//! Resamples a raster to arbitrary target dimensions using edge-clamped
//! bilinear interpolation. All channels are interpolated, alpha included.
//! The dimension normalizer only needs "some standard interpolated resize";
//! the exact kernel is not load-bearing for the downstream stages.

use crate::error::{TransformError, TransformResult};
use pixelate_core::{Raster, color};

/// Resample a raster to `new_width` x `new_height` with bilinear
/// interpolation.
///
/// Source coordinates are mapped through pixel centers, so an identity
/// resize reproduces the input exactly.
///
/// # Errors
///
/// Returns [`TransformError::InvalidParameters`] if either target extent
/// is zero.
pub fn resize_bilinear(raster: &Raster, new_width: u32, new_height: u32) -> TransformResult<Raster> {
    if new_width == 0 || new_height == 0 {
        return Err(TransformError::InvalidParameters(format!(
            "target dimensions must be positive; got {new_width}x{new_height}"
        )));
    }

    if new_width == raster.width() && new_height == raster.height() {
        return Ok(raster.clone());
    }

    let src_w = raster.width();
    let src_h = raster.height();
    let channels = raster.channels() as usize;

    let size = new_width as usize * new_height as usize * channels;
    let mut out_data = Vec::new();
    out_data
        .try_reserve_exact(size)
        .map_err(|_| pixelate_core::Error::AllocationFailed)?;

    let scale_x = src_w as f64 / new_width as f64;
    let scale_y = src_h as f64 / new_height as f64;

    for y in 0..new_height {
        // Pixel-center mapping, clamped to the source grid
        let sy = ((y as f64 + 0.5) * scale_y - 0.5).max(0.0);
        let y0 = (sy as u32).min(src_h - 1);
        let y1 = (y0 + 1).min(src_h - 1);
        let fy = sy - y0 as f64;

        for x in 0..new_width {
            let sx = ((x as f64 + 0.5) * scale_x - 0.5).max(0.0);
            let x0 = (sx as u32).min(src_w - 1);
            let x1 = (x0 + 1).min(src_w - 1);
            let fx = sx - x0 as f64;

            let p00 = pixel_channels(raster, x0, y0, channels);
            let p10 = pixel_channels(raster, x1, y0, channels);
            let p01 = pixel_channels(raster, x0, y1, channels);
            let p11 = pixel_channels(raster, x1, y1, channels);

            for c in 0..channels {
                let top = p00[c] as f64 * (1.0 - fx) + p10[c] as f64 * fx;
                let bottom = p01[c] as f64 * (1.0 - fx) + p11[c] as f64 * fx;
                out_data.push(color::clamp_channel(top * (1.0 - fy) + bottom * fy + 0.5));
            }
        }
    }

    Ok(Raster::from_vec(
        new_width,
        new_height,
        raster.layout(),
        out_data,
    )?)
}

#[inline]
fn pixel_channels(raster: &Raster, x: u32, y: u32, channels: usize) -> [u8; 4] {
    let (r, g, b, a) = raster.get_rgba_unchecked(x, y);
    let mut px = [r, g, b, 255];
    if channels == 4 {
        px[3] = a;
    }
    px
}

#[cfg(test)]
mod tests {
    use super::*;
    use pixelate_core::ChannelLayout;

    fn gradient(w: u32, h: u32) -> Raster {
        let raster = Raster::new(w, h, ChannelLayout::Rgb).unwrap();
        let mut rm = raster.try_into_mut().unwrap();
        for y in 0..h {
            for x in 0..w {
                rm.set_rgb_unchecked(x, y, (x * 255 / w) as u8, (y * 255 / h) as u8, 128);
            }
        }
        rm.into()
    }

    #[test]
    fn test_identity_resize_is_cheap_clone() {
        let src = gradient(16, 12);
        let out = resize_bilinear(&src, 16, 12).unwrap();
        assert_eq!(out.data(), src.data());
        // Same Arc, not a copy
        assert_eq!(out.data().as_ptr(), src.data().as_ptr());
    }

    #[test]
    fn test_resize_dimensions() {
        let src = gradient(10, 10);
        let out = resize_bilinear(&src, 12, 8).unwrap();
        assert_eq!(out.width(), 12);
        assert_eq!(out.height(), 8);
        assert_eq!(out.layout(), src.layout());
    }

    #[test]
    fn test_uniform_stays_uniform() {
        let raster = Raster::new(7, 5, ChannelLayout::Rgb).unwrap();
        let mut rm = raster.try_into_mut().unwrap();
        rm.fill_rgb(90, 120, 200);
        let src: Raster = rm.into();

        let out = resize_bilinear(&src, 13, 9).unwrap();
        for y in 0..9 {
            for x in 0..13 {
                assert_eq!(out.get_rgb(x, y), Some((90, 120, 200)));
            }
        }
    }

    #[test]
    fn test_alpha_interpolated() {
        let raster = Raster::new(2, 1, ChannelLayout::Rgba).unwrap();
        let mut rm = raster.try_into_mut().unwrap();
        rm.set_rgba_unchecked(0, 0, 0, 0, 0, 0);
        rm.set_rgba_unchecked(1, 0, 0, 0, 0, 200);
        let src: Raster = rm.into();

        let out = resize_bilinear(&src, 4, 1).unwrap();
        let (_, _, _, a_left) = out.get_rgba(0, 0).unwrap();
        let (_, _, _, a_right) = out.get_rgba(3, 0).unwrap();
        assert!(a_left < a_right);
    }

    #[test]
    fn test_zero_target_rejected() {
        let src = gradient(4, 4);
        assert!(resize_bilinear(&src, 0, 4).is_err());
        assert!(resize_bilinear(&src, 4, 0).is_err());
    }
}
