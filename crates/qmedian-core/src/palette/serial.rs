//! Packed byte layout for Palette
//!
//! Consecutive `r,g,b` triples in slot order; a full 256-entry palette is
//! 768 bytes.

use super::Palette;
use crate::alloc;
use crate::error::{Error, Result};

impl Palette {
    /// Pack the palette as consecutive `r,g,b` bytes.
    pub fn to_packed_rgb(&self) -> Result<Vec<u8>> {
        let mut out = alloc::try_with_capacity(self.len() * 3)?;
        for c in self.iter() {
            out.extend_from_slice(&c.to_array());
        }
        Ok(out)
    }

    /// Build a palette from consecutive `r,g,b` bytes.
    pub fn from_packed_rgb(bytes: &[u8], max_entries: usize) -> Result<Self> {
        if bytes.len() % 3 != 0 {
            return Err(Error::InvalidParameter(format!(
                "packed palette length {} is not a multiple of 3",
                bytes.len()
            )));
        }
        let mut palette = Self::new(max_entries)?;
        for rgb in bytes.chunks_exact(3) {
            palette.add_rgb(rgb[0], rgb[1], rgb[2])?;
        }
        Ok(palette)
    }
}
