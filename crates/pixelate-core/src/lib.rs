//! Pixelate Core - Basic data structures for the pixelization pipeline
//!
//! This crate provides the fundamental data structures used throughout
//! the pixelate workspace:
//!
//! - [`Raster`] / [`RasterMut`] - The main image container (immutable / mutable)
//! - [`ChannelLayout`] - RGB vs. RGBA channel layout
//! - [`color`] - Channel-level helper functions

pub mod error;
pub mod raster;

pub use error::{Error, Result};
pub use raster::{ChannelLayout, Raster, RasterMut};

/// Channel-level helper functions shared by the reduction and
/// quantization stages.
pub mod color {
    /// Clamp a floating-point channel value to [0, 255] and truncate.
    ///
    /// Truncation (not rounding) matches the integer-division behavior of
    /// the block-mean path, so both snapping paths agree.
    #[inline]
    pub fn clamp_channel(value: f64) -> u8 {
        value.clamp(0.0, 255.0) as u8
    }

    /// Squared Euclidean distance between two RGB triples.
    #[inline]
    pub fn squared_distance(a: (u8, u8, u8), b: (u8, u8, u8)) -> u32 {
        let dr = a.0 as i32 - b.0 as i32;
        let dg = a.1 as i32 - b.1 as i32;
        let db = a.2 as i32 - b.2 as i32;
        (dr * dr + dg * dg + db * db) as u32
    }

}
