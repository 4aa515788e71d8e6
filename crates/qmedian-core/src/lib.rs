//! qmedian Core - Basic data structures for palette quantization
//!
//! This crate provides the types shared by the quantizer and its callers:
//!
//! - [`Rgb`] / [`Channel`] - 24-bit colors and channel selectors
//! - [`ColorEntry`] - A registered color with its index-map slot
//! - [`Palette`] - Ordered palette produced by quantization
//! - [`alloc`] - Fallible allocation helpers
//! - [`Error`] / [`Result`] - Error handling

pub mod alloc;
pub mod color;
pub mod error;
pub mod palette;

pub use color::{Channel, ColorEntry, Rgb};
pub use error::{Error, Result};
pub use palette::Palette;
