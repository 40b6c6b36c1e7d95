//! pixelate-transform - Dimension normalization for the pixelate pipeline
//!
//! This crate prepares a raster for block reduction:
//!
//! - Extent rounding to block-size multiples ([`normalize`])
//! - Bilinear resampling to the rounded dimensions ([`resize`])

mod error;
pub mod normalize;
pub mod resize;

pub use error::{TransformError, TransformResult};
pub use normalize::{RoundPolicy, normalize_to_blocks, rounded_extent};
pub use resize::resize_bilinear;
