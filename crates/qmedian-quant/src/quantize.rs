//! Median-cut palette reduction
//!
//! Colors from any number of color maps are registered into one
//! [`Quantizer`], which is then consumed by [`Quantizer::reduce`]:
//!
//! 1. identical colors are collapsed into one representative,
//! 2. if the distinct colors fit the requested width they become the
//!    palette directly,
//! 3. otherwise the group with the widest channel spread is repeatedly
//!    sorted along that channel and cut at its median until the width is
//!    reached,
//! 4. each group becomes one palette entry,
//! 5. optionally the palette is reduced once more to sort it.

use crate::analyze::{Group, widest_group};
use crate::dedupe::collapse_duplicates;
use crate::options::ReduceOptions;
use crate::registry::{ColorMapSpan, ColorRegistry};
use crate::sort::bucket_sort;
use crate::split::median_cut_point;
use crate::synthesize::{palette_from_distinct, palette_from_groups, resolve_duplicates};
use crate::{QuantError, QuantResult};
use log::{debug, trace};
use qmedian_core::{ColorEntry, Palette, alloc};

/// Collects colors for a single reduction
#[derive(Debug, Default)]
pub struct Quantizer {
    registry: ColorRegistry,
    options: ReduceOptions,
}

impl Quantizer {
    /// Create an empty quantizer with default options
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty quantizer with the given options
    pub fn with_options(options: ReduceOptions) -> Self {
        Self {
            registry: ColorRegistry::new(),
            options,
        }
    }

    /// Register a color map.
    ///
    /// Reads `color_count` colors of `stride` bytes each (3 for packed RGB,
    /// 4 for RGB plus an ignored byte) and returns the index-map slot where
    /// this map's colors begin.
    pub fn register(
        &mut self,
        colors: &[u8],
        color_count: usize,
        stride: usize,
    ) -> QuantResult<usize> {
        self.registry.register(colors, color_count, stride)
    }

    /// Total number of registered colors
    pub fn color_count(&self) -> usize {
        self.registry.len()
    }

    /// Registered color maps in registration order
    pub fn color_maps(&self) -> &[ColorMapSpan] {
        self.registry.maps()
    }

    /// Reduce all registered colors to at most `width` palette entries.
    pub fn reduce(self, width: usize) -> QuantResult<Reduction> {
        if width == 0 {
            return Err(QuantError::InvalidWidth(width));
        }
        if self.registry.is_empty() {
            return Err(QuantError::EmptyInput);
        }

        let total = self.registry.len();
        let (mut colors, maps) = self.registry.into_parts();
        let mut index_map = alloc::try_filled(0usize, total)?;

        let duplicates = collapse_duplicates(&mut colors)?;
        debug!(
            "reducing {} colors ({} distinct, {} duplicates) to width {}",
            total,
            colors.len(),
            duplicates.len(),
            width
        );

        let palette = if colors.len() <= width {
            debug!("{} distinct colors fit, skipping split", colors.len());
            palette_from_distinct(&mut colors, &mut index_map)?
        } else {
            let groups = split_groups(&mut colors, width)?;
            palette_from_groups(&colors, &groups, &mut index_map)?
        };
        resolve_duplicates(&duplicates, &mut index_map);

        let reduction = Reduction {
            index_map,
            palette,
            maps,
        };
        let reduction = if self.options.reorder {
            reduction.reorder()?
        } else {
            reduction
        };
        debug!("achieved palette width {}", reduction.width());
        Ok(reduction)
    }
}

/// Partition distinct colors into at most `width` groups.
fn split_groups(colors: &mut [ColorEntry], width: usize) -> QuantResult<Vec<Group>> {
    let mut groups = alloc::try_with_capacity(width.min(colors.len()))?;
    groups.push(Group::analyzed(colors, 0, colors.len(), None));

    while groups.len() < width {
        let i = widest_group(&groups);
        let group = groups[i];
        let channel = group.stats.channel;

        if group.sorted_by != Some(channel) {
            bucket_sort(&mut colors[group.start..group.end], channel)?;
            groups[i].sorted_by = Some(channel);
        }

        let members = &colors[group.start..group.end];
        let Some(cut) = median_cut_point(members, channel, group.stats.sum) else {
            debug!(
                "group {} ({} colors) cannot be split, stopping at {} groups",
                i,
                group.len(),
                groups.len()
            );
            break;
        };

        let mid = group.start + cut;
        trace!(
            "split group {} at {} along {:?} (spread {})",
            i, mid, channel, group.stats.spread
        );
        groups[i] = Group::analyzed(colors, group.start, mid, Some(channel));
        groups.push(Group::analyzed(colors, mid, group.end, Some(channel)));
    }

    Ok(groups)
}

/// Result of a reduction
#[derive(Debug, Clone)]
pub struct Reduction {
    index_map: Vec<usize>,
    palette: Palette,
    maps: Vec<ColorMapSpan>,
}

impl Reduction {
    /// Achieved palette width
    pub fn width(&self) -> usize {
        self.palette.len()
    }

    /// Palette slot of every registered color, by index-map slot
    pub fn index_map(&self) -> &[usize] {
        &self.index_map
    }

    /// Reduced palette
    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    /// Color maps that were registered, in registration order
    pub fn color_maps(&self) -> &[ColorMapSpan] {
        &self.maps
    }

    /// Palette slot of color `local_index` of the map registered at `base`
    pub fn lookup(&self, base: usize, local_index: usize) -> Option<usize> {
        let span = self.maps.iter().find(|m| m.base == base && m.len > 0)?;
        span.slot(local_index).map(|slot| self.index_map[slot])
    }

    /// Index map as bytes, for palettes of at most 256 entries
    pub fn index_map_u8(&self) -> QuantResult<Vec<u8>> {
        if self.width() > 256 {
            return Err(QuantError::InvalidParameters(format!(
                "palette width {} does not fit in a byte index",
                self.width()
            )));
        }
        let mut out = alloc::try_with_capacity(self.index_map.len())?;
        // every slot is below a width of at most 256
        out.extend(self.index_map.iter().map(|&slot| slot as u8));
        Ok(out)
    }

    /// Split into the index map and the palette
    pub fn into_parts(self) -> (Vec<usize>, Palette) {
        (self.index_map, self.palette)
    }

    /// Reduce the palette against itself and remap every slot through the
    /// result.
    fn reorder(mut self) -> QuantResult<Reduction> {
        let width = self.palette.len();
        let packed = self.palette.to_packed_rgb()?;

        let mut inner = Quantizer::with_options(ReduceOptions { reorder: false });
        inner.register(&packed, width, 3)?;
        let inner = inner.reduce(width)?;

        for slot in self.index_map.iter_mut() {
            *slot = inner.index_map[*slot];
        }
        self.palette = inner.palette;
        Ok(self)
    }
}

/// Reduce a single pixel buffer of `stride`-byte records to at most
/// `width` colors.
pub fn quantize_pixels(data: &[u8], stride: usize, width: usize) -> QuantResult<Reduction> {
    if !matches!(stride, 3 | 4) {
        return Err(QuantError::InvalidStride(stride));
    }
    if data.len() % stride != 0 {
        return Err(QuantError::InvalidParameters(format!(
            "pixel buffer length {} is not a multiple of stride {stride}",
            data.len()
        )));
    }
    let mut q = Quantizer::new();
    q.register(data, data.len() / stride, stride)?;
    q.reduce(width)
}
