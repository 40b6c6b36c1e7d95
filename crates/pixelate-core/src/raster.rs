//! Raster - the main image container
//!
//! The `Raster` structure is the unit of image data exchanged between
//! pipeline stages.
//!
//! # Pixel layout
//!
//! - Image data is stored as interleaved 8-bit channels, row-major
//! - Rows are densely packed (no padding)
//! - Channel order is R, G, B and optionally A
//!
//! # Ownership model
//!
//! `Raster` uses `Arc` for efficient cloning (shared ownership).
//! To modify pixel data, convert to `RasterMut` via [`Raster::try_into_mut`]
//! or [`Raster::to_mut`], then convert back with `Into<Raster>`.

use crate::error::{Error, Result};
use std::sync::Arc;

/// Channel layout of a raster
///
/// The pipeline handles 3-channel (RGB) and 4-channel (RGBA) images;
/// everything else is rejected at construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u32)]
pub enum ChannelLayout {
    /// 3 channels: red, green, blue
    Rgb = 3,
    /// 4 channels: red, green, blue, alpha
    Rgba = 4,
}

impl ChannelLayout {
    /// Create `ChannelLayout` from a raw channel count.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidChannelCount`] if `channels` is not 3 or 4.
    pub fn from_channels(channels: u32) -> Result<Self> {
        match channels {
            3 => Ok(ChannelLayout::Rgb),
            4 => Ok(ChannelLayout::Rgba),
            _ => Err(Error::InvalidChannelCount(channels)),
        }
    }

    /// Get the number of channels per pixel.
    pub fn channels(self) -> u32 {
        self as u32
    }

    /// Check whether this layout carries an alpha channel.
    pub fn has_alpha(self) -> bool {
        matches!(self, ChannelLayout::Rgba)
    }
}

/// Internal raster data
#[derive(Debug)]
struct RasterData {
    /// Width in pixels
    width: u32,
    /// Height in pixels
    height: u32,
    /// Channel layout (RGB or RGBA)
    layout: ChannelLayout,
    /// Interleaved channel data, row-major
    data: Vec<u8>,
}

impl RasterData {
    #[inline]
    fn pixel_offset(&self, x: u32, y: u32) -> usize {
        ((y as usize * self.width as usize) + x as usize) * self.layout.channels() as usize
    }

    #[inline]
    fn in_bounds(&self, x: u32, y: u32) -> bool {
        x < self.width && y < self.height
    }
}

/// Raster - main image container
///
/// `Raster` is the fundamental image type of the pipeline. It uses
/// reference counting via `Arc` for efficient cloning.
///
/// # Examples
///
/// ```
/// use pixelate_core::{ChannelLayout, Raster};
///
/// // Create a new RGB raster, zero-initialized
/// let raster = Raster::new(640, 480, ChannelLayout::Rgb).unwrap();
/// assert_eq!(raster.width(), 640);
/// assert_eq!(raster.height(), 480);
/// ```
#[derive(Debug, Clone)]
pub struct Raster {
    inner: Arc<RasterData>,
}

impl Raster {
    /// Create a new raster with the specified dimensions and layout.
    ///
    /// The pixel data is initialized to zero.
    ///
    /// # Arguments
    ///
    /// * `width` - Width in pixels (must be > 0)
    /// * `height` - Height in pixels (must be > 0)
    /// * `layout` - Channel layout
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimension`] if width or height is 0, or
    /// [`Error::AllocationFailed`] if the pixel buffer cannot be allocated.
    pub fn new(width: u32, height: u32, layout: ChannelLayout) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidDimension { width, height });
        }

        let size = (width as usize)
            .checked_mul(height as usize)
            .and_then(|n| n.checked_mul(layout.channels() as usize))
            .ok_or(Error::AllocationFailed)?;

        let mut data = Vec::new();
        data.try_reserve_exact(size)
            .map_err(|_| Error::AllocationFailed)?;
        data.resize(size, 0);

        Ok(Raster {
            inner: Arc::new(RasterData {
                width,
                height,
                layout,
                data,
            }),
        })
    }

    /// Create a raster from an existing interleaved pixel buffer.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimension`] if width or height is 0, or
    /// [`Error::BufferSizeMismatch`] if the buffer length does not equal
    /// `width * height * channels`.
    pub fn from_vec(width: u32, height: u32, layout: ChannelLayout, data: Vec<u8>) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidDimension { width, height });
        }

        let expected = width as usize * height as usize * layout.channels() as usize;
        if data.len() != expected {
            return Err(Error::BufferSizeMismatch {
                expected,
                actual: data.len(),
            });
        }

        Ok(Raster {
            inner: Arc::new(RasterData {
                width,
                height,
                layout,
                data,
            }),
        })
    }

    /// Get the image width in pixels.
    #[inline]
    pub fn width(&self) -> u32 {
        self.inner.width
    }

    /// Get the image height in pixels.
    #[inline]
    pub fn height(&self) -> u32 {
        self.inner.height
    }

    /// Get the channel layout.
    #[inline]
    pub fn layout(&self) -> ChannelLayout {
        self.inner.layout
    }

    /// Get the number of channels per pixel.
    #[inline]
    pub fn channels(&self) -> u32 {
        self.inner.layout.channels()
    }

    /// Get raw access to the interleaved pixel data.
    #[inline]
    pub fn data(&self) -> &[u8] {
        &self.inner.data
    }

    /// Get the pixel data for a single row.
    ///
    /// # Panics
    ///
    /// Panics if `y >= height`.
    #[inline]
    pub fn row_data(&self, y: u32) -> &[u8] {
        let stride = self.inner.width as usize * self.channels() as usize;
        let start = y as usize * stride;
        &self.inner.data[start..start + stride]
    }

    /// Get the number of strong references to this raster.
    #[inline]
    pub fn ref_count(&self) -> usize {
        Arc::strong_count(&self.inner)
    }

    /// Get RGB values at (x, y).
    ///
    /// Returns `None` if coordinates are out of bounds.
    pub fn get_rgb(&self, x: u32, y: u32) -> Option<(u8, u8, u8)> {
        if !self.inner.in_bounds(x, y) {
            return None;
        }
        Some(self.get_rgb_unchecked(x, y))
    }

    /// Get RGB values without bounds checking.
    ///
    /// # Panics
    ///
    /// Panics if `x >= width` or `y >= height`.
    #[inline]
    pub fn get_rgb_unchecked(&self, x: u32, y: u32) -> (u8, u8, u8) {
        let i = self.inner.pixel_offset(x, y);
        let d = &self.inner.data;
        (d[i], d[i + 1], d[i + 2])
    }

    /// Get RGBA values at (x, y).
    ///
    /// For an RGB raster the alpha component is reported as 255.
    /// Returns `None` if coordinates are out of bounds.
    pub fn get_rgba(&self, x: u32, y: u32) -> Option<(u8, u8, u8, u8)> {
        if !self.inner.in_bounds(x, y) {
            return None;
        }
        Some(self.get_rgba_unchecked(x, y))
    }

    /// Get RGBA values without bounds checking.
    ///
    /// # Panics
    ///
    /// Panics if `x >= width` or `y >= height`.
    #[inline]
    pub fn get_rgba_unchecked(&self, x: u32, y: u32) -> (u8, u8, u8, u8) {
        let i = self.inner.pixel_offset(x, y);
        let d = &self.inner.data;
        let a = if self.inner.layout.has_alpha() {
            d[i + 3]
        } else {
            255
        };
        (d[i], d[i + 1], d[i + 2], a)
    }

    /// Check if two rasters have the same width, height, and layout.
    pub fn sizes_equal(&self, other: &Raster) -> bool {
        self.inner.width == other.inner.width
            && self.inner.height == other.inner.height
            && self.inner.layout == other.inner.layout
    }

    /// Create a new zero-filled raster with the same dimensions and layout.
    pub fn create_template(&self) -> Self {
        Raster {
            inner: Arc::new(RasterData {
                width: self.inner.width,
                height: self.inner.height,
                layout: self.inner.layout,
                data: vec![0u8; self.inner.data.len()],
            }),
        }
    }

    /// Create a deep copy of this raster.
    ///
    /// Unlike `clone()` which shares data via Arc, this creates
    /// a completely independent copy.
    pub fn deep_clone(&self) -> Self {
        Raster {
            inner: Arc::new(RasterData {
                width: self.inner.width,
                height: self.inner.height,
                layout: self.inner.layout,
                data: self.inner.data.clone(),
            }),
        }
    }

    /// Try to get mutable access to the pixel data.
    ///
    /// Succeeds only if there is exactly one reference to the data.
    /// If successful, returns a [`RasterMut`] that allows modification.
    pub fn try_into_mut(self) -> std::result::Result<RasterMut, Self> {
        match Arc::try_unwrap(self.inner) {
            Ok(data) => Ok(RasterMut { inner: data }),
            Err(arc) => Err(Raster { inner: arc }),
        }
    }

    /// Create a mutable copy of this raster.
    ///
    /// Always creates a new copy that can be modified.
    pub fn to_mut(&self) -> RasterMut {
        RasterMut {
            inner: RasterData {
                width: self.inner.width,
                height: self.inner.height,
                layout: self.inner.layout,
                data: self.inner.data.clone(),
            },
        }
    }
}

/// Mutable raster
///
/// Allows modification of pixel data. Convert back to an immutable
/// [`Raster`] using `Into<Raster>`. The split enforces exclusive access
/// at compile time.
#[derive(Debug)]
pub struct RasterMut {
    inner: RasterData,
}

impl RasterMut {
    /// Get the image width.
    #[inline]
    pub fn width(&self) -> u32 {
        self.inner.width
    }

    /// Get the image height.
    #[inline]
    pub fn height(&self) -> u32 {
        self.inner.height
    }

    /// Get the channel layout.
    #[inline]
    pub fn layout(&self) -> ChannelLayout {
        self.inner.layout
    }

    /// Get the number of channels per pixel.
    #[inline]
    pub fn channels(&self) -> u32 {
        self.inner.layout.channels()
    }

    /// Get raw access to the pixel data.
    #[inline]
    pub fn data(&self) -> &[u8] {
        &self.inner.data
    }

    /// Get mutable access to the pixel data.
    #[inline]
    pub fn data_mut(&mut self) -> &mut [u8] {
        &mut self.inner.data
    }

    /// Get mutable pixel data for a single row.
    ///
    /// # Panics
    ///
    /// Panics if `y >= height`.
    #[inline]
    pub fn row_data_mut(&mut self, y: u32) -> &mut [u8] {
        let stride = self.inner.width as usize * self.inner.layout.channels() as usize;
        let start = y as usize * stride;
        &mut self.inner.data[start..start + stride]
    }

    /// Get RGB values at (x, y).
    pub fn get_rgb(&self, x: u32, y: u32) -> Option<(u8, u8, u8)> {
        if !self.inner.in_bounds(x, y) {
            return None;
        }
        Some(self.get_rgb_unchecked(x, y))
    }

    /// Get RGB values without bounds checking.
    ///
    /// # Panics
    ///
    /// Panics if `x >= width` or `y >= height`.
    #[inline]
    pub fn get_rgb_unchecked(&self, x: u32, y: u32) -> (u8, u8, u8) {
        let i = self.inner.pixel_offset(x, y);
        let d = &self.inner.data;
        (d[i], d[i + 1], d[i + 2])
    }

    /// Get RGBA values at (x, y).
    ///
    /// For an RGB raster the alpha component is reported as 255.
    pub fn get_rgba(&self, x: u32, y: u32) -> Option<(u8, u8, u8, u8)> {
        if !self.inner.in_bounds(x, y) {
            return None;
        }
        let i = self.inner.pixel_offset(x, y);
        let d = &self.inner.data;
        let a = if self.inner.layout.has_alpha() {
            d[i + 3]
        } else {
            255
        };
        Some((d[i], d[i + 1], d[i + 2], a))
    }

    /// Set the RGB channels at (x, y), leaving alpha untouched.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfBounds`] if coordinates are out of bounds.
    pub fn set_rgb(&mut self, x: u32, y: u32, r: u8, g: u8, b: u8) -> Result<()> {
        if !self.inner.in_bounds(x, y) {
            return Err(Error::OutOfBounds {
                x,
                y,
                width: self.inner.width,
                height: self.inner.height,
            });
        }
        self.set_rgb_unchecked(x, y, r, g, b);
        Ok(())
    }

    /// Set the RGB channels without bounds checking, leaving alpha untouched.
    ///
    /// # Panics
    ///
    /// Panics if `x >= width` or `y >= height`.
    #[inline]
    pub fn set_rgb_unchecked(&mut self, x: u32, y: u32, r: u8, g: u8, b: u8) {
        let i = self.inner.pixel_offset(x, y);
        let d = &mut self.inner.data;
        d[i] = r;
        d[i + 1] = g;
        d[i + 2] = b;
    }

    /// Set an RGBA pixel at (x, y).
    ///
    /// On an RGB raster the alpha value is ignored.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfBounds`] if coordinates are out of bounds.
    pub fn set_rgba(&mut self, x: u32, y: u32, r: u8, g: u8, b: u8, a: u8) -> Result<()> {
        if !self.inner.in_bounds(x, y) {
            return Err(Error::OutOfBounds {
                x,
                y,
                width: self.inner.width,
                height: self.inner.height,
            });
        }
        self.set_rgba_unchecked(x, y, r, g, b, a);
        Ok(())
    }

    /// Set an RGBA pixel without bounds checking.
    ///
    /// # Panics
    ///
    /// Panics if `x >= width` or `y >= height`.
    #[inline]
    pub fn set_rgba_unchecked(&mut self, x: u32, y: u32, r: u8, g: u8, b: u8, a: u8) {
        let i = self.inner.pixel_offset(x, y);
        let d = &mut self.inner.data;
        d[i] = r;
        d[i + 1] = g;
        d[i + 2] = b;
        if self.inner.layout.has_alpha() {
            d[i + 3] = a;
        }
    }

    /// Fill the whole raster with one RGB color (alpha set to 255 if present).
    pub fn fill_rgb(&mut self, r: u8, g: u8, b: u8) {
        let channels = self.inner.layout.channels() as usize;
        for px in self.inner.data.chunks_exact_mut(channels) {
            px[0] = r;
            px[1] = g;
            px[2] = b;
            if channels == 4 {
                px[3] = 255;
            }
        }
    }
}

impl From<RasterMut> for Raster {
    fn from(raster_mut: RasterMut) -> Self {
        Raster {
            inner: Arc::new(raster_mut.inner),
        }
    }
}
