//! Group analysis
//!
//! Finds the channel along which a group of colors is most spread out.

use qmedian_core::{Channel, ColorEntry};

/// Split statistics for one group
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GroupStats {
    /// Channel with the largest `max - min`
    pub channel: Channel,
    /// `max - min` along `channel`
    pub spread: u8,
    /// Sum of all values along `channel`
    pub sum: u64,
}

/// A contiguous range of the distinct working set that becomes one
/// palette slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Group {
    pub start: usize,
    pub end: usize,
    pub stats: GroupStats,
    /// Channel the range is currently ordered by, if any
    pub sorted_by: Option<Channel>,
}

impl Group {
    /// Analyze `colors[start..end]` as a new group
    pub fn analyzed(
        colors: &[ColorEntry],
        start: usize,
        end: usize,
        sorted_by: Option<Channel>,
    ) -> Self {
        Self {
            start,
            end,
            stats: analyze_group(&colors[start..end]),
            sorted_by,
        }
    }

    /// Number of colors in the group
    #[inline]
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    /// Check if the group holds no colors
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

/// Index of the group with the largest spread; the lowest index wins ties.
pub fn widest_group(groups: &[Group]) -> usize {
    let mut best = 0;
    for (n, g) in groups.iter().enumerate() {
        if g.stats.spread > groups[best].stats.spread {
            best = n;
        }
    }
    best
}

/// Analyze a group of colors.
///
/// Ties between channels go to red, then green, then blue. An empty group
/// reports zero spread on red.
pub fn analyze_group(group: &[ColorEntry]) -> GroupStats {
    let mut min = [u8::MAX; 3];
    let mut max = [u8::MIN; 3];
    let mut sum = [0u64; 3];

    for entry in group {
        for (ch, v) in entry.color.to_array().into_iter().enumerate() {
            min[ch] = min[ch].min(v);
            max[ch] = max[ch].max(v);
            sum[ch] += u64::from(v);
        }
    }

    let mut best = GroupStats {
        channel: Channel::Red,
        spread: 0,
        sum: sum[Channel::Red.index()],
    };
    if group.is_empty() {
        return best;
    }
    for channel in Channel::ALL {
        let ch = channel.index();
        let spread = max[ch] - min[ch];
        if spread > best.spread {
            best = GroupStats {
                channel,
                spread,
                sum: sum[ch],
            };
        }
    }
    best
}
