//! qmedian-test - Regression test support for qmedian
//!
//! Provides the bookkeeping used by the `*_reg` tests of the quantizer
//! crates, and deterministic color fixtures.
//!
//! # Usage
//!
//! ```ignore
//! use qmedian_test::{RegParams, distinct_colors, pack_rgb};
//!
//! let mut rp = RegParams::new("reduce");
//! rp.compare_values(16.0, reduction.width() as f64, 0.0);
//! assert!(rp.cleanup());
//! ```

mod error;
mod fixtures;
mod params;

pub use error::{TestError, TestResult};
pub use fixtures::{distinct_colors, gradient_rgbx, pack_rgb, pack_rgbx, random_colors};
pub use params::RegParams;
