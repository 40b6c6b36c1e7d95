//! pixelate-color - Color operations for the pixelate pipeline
//!
//! This crate implements the two color stages of the pipeline:
//!
//! - Block reduction ([`reduce`]) - collapse fixed-size blocks to a
//!   single representative color (mean or mode)
//! - Color quantization ([`kmeans`]) - cluster the palette down to a
//!   bounded number of colors with a deterministic seed

mod error;
pub mod kmeans;
pub mod reduce;

pub use error::{ColorError, ColorResult};
pub use kmeans::{KmeansOptions, quantize_colors, quantize_colors_simple};
pub use reduce::{ReduceOptions, ReduceStrategy, reduce_blocks, reduce_blocks_simple};
