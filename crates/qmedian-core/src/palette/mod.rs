//! Palette - ordered list of RGB entries produced by quantization
//!
//! A palette has a fixed maximum number of entries, set when it is
//! created. Entries are addressed by their slot index.

mod serial;

use crate::alloc;
use crate::color::Rgb;
use crate::error::{Error, Result};

/// Color palette
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    colors: Vec<Rgb>,
    max_entries: usize,
}

impl Palette {
    /// Create an empty palette holding at most `max_entries` colors
    pub fn new(max_entries: usize) -> Result<Self> {
        if max_entries == 0 {
            return Err(Error::InvalidParameter(
                "palette must allow at least one entry".to_string(),
            ));
        }
        Ok(Self {
            colors: Vec::new(),
            max_entries,
        })
    }

    /// Create an empty palette with storage for all `max_entries` colors
    /// reserved up front.
    pub fn with_capacity(max_entries: usize) -> Result<Self> {
        let mut palette = Self::new(max_entries)?;
        palette.colors = alloc::try_with_capacity(max_entries)?;
        Ok(palette)
    }

    /// Get the number of colors
    #[inline]
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    /// Check if empty
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// Get maximum number of entries
    #[inline]
    pub fn max_entries(&self) -> usize {
        self.max_entries
    }

    /// Get a color by index
    pub fn get(&self, index: usize) -> Option<Rgb> {
        self.colors.get(index).copied()
    }

    /// Add a color, returning its slot index
    pub fn add_color(&mut self, color: Rgb) -> Result<usize> {
        if self.colors.len() >= self.max_entries {
            return Err(Error::PaletteFull {
                max_entries: self.max_entries,
            });
        }
        alloc::try_grow(&mut self.colors, 1)?;
        self.colors.push(color);
        Ok(self.colors.len() - 1)
    }

    /// Add an RGB color
    pub fn add_rgb(&mut self, r: u8, g: u8, b: u8) -> Result<usize> {
        self.add_color(Rgb::new(r, g, b))
    }

    /// Find the slot holding exactly this color
    pub fn get_index(&self, color: Rgb) -> Option<usize> {
        self.colors.iter().position(|&c| c == color)
    }

    /// Check if the palette holds this exact color
    pub fn contains(&self, color: Rgb) -> bool {
        self.get_index(color).is_some()
    }

    /// Get all colors as a slice
    pub fn colors(&self) -> &[Rgb] {
        &self.colors
    }

    /// Iterate over the colors in slot order
    pub fn iter(&self) -> impl Iterator<Item = Rgb> + '_ {
        self.colors.iter().copied()
    }
}
