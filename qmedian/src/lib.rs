//! qmedian - Median-cut palette quantizer
//!
//! Reduces any number of color maps (image pixels or whole palettes) to
//! one shared palette, and tells each input color which palette slot it
//! ended up in.
//!
//! # Overview
//!
//! - Register color maps of 3-byte (RGB) or 4-byte (RGB plus an ignored
//!   byte) records; each registration returns the offset of that map in
//!   the index map.
//! - Reduce to the requested width. The quantizer is consumed.
//! - Read the palette and the index map from the [`Reduction`].
//!
//! # Example
//!
//! Combining two palettes into one of at most four colors:
//!
//! ```
//! use qmedian::{Quantizer, Rgb};
//!
//! let warm = [255, 0, 0, 250, 10, 0, 255, 200, 0];
//! let cool = [0, 0, 255, 0, 200, 255, 0, 0, 250];
//!
//! let mut q = Quantizer::new();
//! let warm_base = q.register(&warm, 3, 3).unwrap();
//! let cool_base = q.register(&cool, 3, 3).unwrap();
//! assert_eq!(cool_base, 3);
//!
//! let reduction = q.reduce(4).unwrap();
//! assert_eq!(reduction.width(), 4);
//!
//! let slot = reduction.lookup(warm_base, 2).unwrap();
//! let color: Rgb = reduction.palette().get(slot).unwrap();
//! assert!(slot < 4);
//! assert_eq!(reduction.index_map().len(), 6);
//! # let _ = color;
//! ```

// Re-export core types (primary data structures used everywhere)
pub use qmedian_core::*;

// Re-export the quantizer
pub use qmedian_quant as quant;
pub use qmedian_quant::{
    ColorMapSpan, QuantError, QuantResult, Quantizer, ReduceOptions, Reduction, quantize_pixels,
};
