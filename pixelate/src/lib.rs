//! Pixelate - Image pixelization pipeline
//!
//! Pixelate turns an image into block art in three deterministic
//! stages:
//!
//! 1. Normalize the dimensions to a whole number of fixed-size blocks
//! 2. Reduce each block to a single representative color (mean or mode)
//! 3. Quantize the palette to a bounded number of colors with a seeded
//!    clustering pass
//!
//! # Example
//!
//! ```
//! use pixelate::{ChannelLayout, Raster};
//! use pixelate::pipeline::{PipelineConfig, run};
//!
//! let raster = Raster::new(30, 22, ChannelLayout::Rgb).unwrap();
//! let out = run(&raster, &PipelineConfig::default()).unwrap();
//! // Extents are padded up to the next block multiple
//! assert_eq!(out.width(), 32);
//! assert_eq!(out.height(), 24);
//! ```

// Re-export core types (primary data structures used everywhere)
pub use pixelate_core::*;

// Re-export domain crates as modules to avoid name conflicts
pub use pixelate_color as color_ops;
pub use pixelate_pipeline as pipeline;
pub use pixelate_transform as transform;
