//! Duplicate collapsing
//!
//! Identical colors are brought next to each other by a multi-channel
//! bucket sort and then pulled out of the working set. Each pulled color
//! records the index-map slot of the first color of its run, which stays
//! in the working set.

use crate::QuantResult;
use crate::sort::{CHANNEL_SORT_ORDER, sort_by_channels};
use qmedian_core::{ColorEntry, alloc};

/// Remove duplicates from `colors`, returning them.
///
/// On return `colors` holds only channel-distinct colors, ordered by green,
/// then blue, then red. Every returned duplicate has `representative` set
/// to the `original_index` of a color still in `colors`.
pub fn collapse_duplicates(colors: &mut Vec<ColorEntry>) -> QuantResult<Vec<ColorEntry>> {
    sort_by_channels(colors, &CHANNEL_SORT_ORDER)?;

    let mut duplicates = Vec::new();
    let mut kept = 0;
    for i in 0..colors.len() {
        let entry = colors[i];
        if kept > 0 && colors[kept - 1].color == entry.color {
            alloc::try_grow(&mut duplicates, 1)?;
            duplicates.push(ColorEntry {
                representative: Some(colors[kept - 1].original_index),
                ..entry
            });
        } else {
            colors[kept] = entry;
            kept += 1;
        }
    }
    colors.truncate(kept);

    Ok(duplicates)
}
