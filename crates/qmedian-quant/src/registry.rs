//! Color registry
//!
//! Owns the flat working set of colors contributed by every registered
//! color map. Registration is append-only and never deduplicates.

use crate::{QuantError, QuantResult};
use qmedian_core::{ColorEntry, Rgb, alloc};

/// Location of one registered color map inside the flattened index map
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorMapSpan {
    /// Index-map slot of the map's first color
    pub base: usize,
    /// Number of colors in the map
    pub len: usize,
}

impl ColorMapSpan {
    /// Index-map slot of the color at `local_index`, if inside the map
    pub fn slot(&self, local_index: usize) -> Option<usize> {
        (local_index < self.len).then(|| self.base + local_index)
    }
}

/// Working set of registered colors
#[derive(Debug, Default)]
pub struct ColorRegistry {
    entries: Vec<ColorEntry>,
    maps: Vec<ColorMapSpan>,
}

impl ColorRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `color_count` colors read from `stride`-byte records.
    ///
    /// Returns the index-map slot of the first appended color. On error
    /// the registry is left unchanged.
    pub fn register(
        &mut self,
        colors: &[u8],
        color_count: usize,
        stride: usize,
    ) -> QuantResult<usize> {
        if !matches!(stride, 3 | 4) {
            return Err(QuantError::InvalidStride(stride));
        }
        let needed = color_count
            .checked_mul(stride)
            .ok_or_else(|| QuantError::InvalidParameters(format!(
                "color count {color_count} overflows with stride {stride}"
            )))?;
        if colors.len() < needed {
            return Err(QuantError::BufferTooSmall {
                needed,
                actual: colors.len(),
            });
        }

        let base = self.entries.len();
        alloc::try_grow(&mut self.entries, color_count)?;
        alloc::try_grow(&mut self.maps, 1)?;

        let records = colors[..needed].chunks_exact(stride);
        for (i, color) in records.filter_map(Rgb::from_record).enumerate() {
            self.entries.push(ColorEntry::new(color, base + i));
        }
        self.maps.push(ColorMapSpan {
            base,
            len: color_count,
        });

        Ok(base)
    }

    /// Total number of registered colors
    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if no colors have been registered
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Registered color maps in registration order
    pub fn maps(&self) -> &[ColorMapSpan] {
        &self.maps
    }

    /// Take ownership of the working set and the map list
    pub fn into_parts(self) -> (Vec<ColorEntry>, Vec<ColorMapSpan>) {
        (self.entries, self.maps)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bases_follow_running_total() {
        let mut reg = ColorRegistry::new();
        let data = vec![0u8; 256 * 3];
        assert_eq!(reg.register(&data, 256, 3).unwrap(), 0);
        assert_eq!(reg.register(&data, 256, 3).unwrap(), 256);
        assert_eq!(reg.register(&data, 256, 3).unwrap(), 512);
        assert_eq!(reg.len(), 768);
        assert_eq!(reg.maps()[2], ColorMapSpan { base: 512, len: 256 });
    }

    #[test]
    fn test_stride_four_skips_padding() {
        let mut reg = ColorRegistry::new();
        reg.register(&[1, 2, 3, 200, 4, 5, 6, 201], 2, 4).unwrap();
        let (entries, _) = reg.into_parts();
        let colors: Vec<Rgb> = entries.iter().map(|e| e.color).collect();
        assert_eq!(colors, vec![Rgb::new(1, 2, 3), Rgb::new(4, 5, 6)]);
        assert_eq!(entries[1].original_index, 1);
        assert_eq!(entries[1].reserved, 0);
    }

    #[test]
    fn test_no_dedup_at_registration() {
        let mut reg = ColorRegistry::new();
        reg.register(&[9, 9, 9, 9, 9, 9], 2, 3).unwrap();
        assert_eq!(reg.len(), 2);
    }

    #[test]
    fn test_invalid_input_leaves_registry_unchanged() {
        let mut reg = ColorRegistry::new();
        reg.register(&[1, 2, 3], 1, 3).unwrap();

        assert!(matches!(
            reg.register(&[0; 10], 2, 5),
            Err(QuantError::InvalidStride(5))
        ));
        assert!(matches!(
            reg.register(&[0; 5], 2, 3),
            Err(QuantError::BufferTooSmall { needed: 6, actual: 5 })
        ));
        assert_eq!(reg.len(), 1);
        assert_eq!(reg.maps().len(), 1);
    }

    #[test]
    fn test_empty_map_is_recorded() {
        let mut reg = ColorRegistry::new();
        reg.register(&[1, 2, 3], 1, 3).unwrap();
        assert_eq!(reg.register(&[], 0, 3).unwrap(), 1);
        assert_eq!(reg.maps()[1], ColorMapSpan { base: 1, len: 0 });
    }

    #[test]
    fn test_span_slot() {
        let span = ColorMapSpan { base: 10, len: 3 };
        assert_eq!(span.slot(2), Some(12));
        assert_eq!(span.slot(3), None);
    }
}
