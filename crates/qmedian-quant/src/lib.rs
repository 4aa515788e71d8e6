//! qmedian Quant - Median-cut palette quantization
//!
//! This crate reduces one or more sets of 24-bit colors to a shared palette:
//!
//! - **Registration** ([`registry`]): Append color maps to one working set
//! - **Group analysis** ([`analyze`]): Widest channel, spread and sum of a group
//! - **Bucket sort** ([`sort`]): Stable single-pass sort along one channel
//! - **Median split** ([`split`]): Cut a sorted group at its channel median
//! - **Duplicate collapsing** ([`dedupe`]): Pull identical colors out of the working set
//! - **Palette synthesis** ([`synthesize`]): One palette entry per group
//! - **Reduction** ([`quantize`]): The driver tying it all together
//!
//! # Example
//!
//! ```
//! use qmedian_quant::Quantizer;
//!
//! let mut q = Quantizer::new();
//! let first = q.register(&[255, 0, 0, 0, 0, 255], 2, 3).unwrap();
//! let second = q.register(&[255, 0, 0, 0], 1, 4).unwrap();
//! let reduction = q.reduce(256).unwrap();
//!
//! assert_eq!(reduction.width(), 2);
//! assert_eq!(reduction.lookup(first, 0), reduction.lookup(second, 0));
//! ```

pub mod analyze;
pub mod dedupe;
pub mod error;
pub mod options;
pub mod quantize;
pub mod registry;
pub mod sort;
pub mod split;
pub mod synthesize;

// Re-export core types
pub use qmedian_core;

// Re-export error types
pub use error::{QuantError, QuantResult};

pub use options::ReduceOptions;
pub use quantize::{Quantizer, Reduction, quantize_pixels};
pub use registry::{ColorMapSpan, ColorRegistry};
