//! Median split of a sorted group
//!
//! The cut is placed where the running channel total first exceeds half of
//! the group's channel sum. The color that crosses the half starts the
//! upper part, unless it is the first color, in which case it forms the
//! lower part on its own.

use qmedian_core::{Channel, ColorEntry};

/// Find the cut position of a group sorted by `channel`.
///
/// `sum` is the group's total along `channel`. Returns `cut` such that the
/// lower part is `group[..cut]` and the upper part is `group[cut..]`, or
/// `None` if either part would be empty.
pub fn median_cut_point(group: &[ColorEntry], channel: Channel, sum: u64) -> Option<usize> {
    let half = sum / 2;
    let mut total = 0u64;
    let crossing = group.iter().position(|entry| {
        total += u64::from(entry.channel(channel));
        total > half
    })?;
    let cut = crossing.max(1);
    (cut < group.len()).then_some(cut)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analyze::analyze_group;
    use qmedian_core::Rgb;

    fn red_group(values: &[u8]) -> Vec<ColorEntry> {
        values
            .iter()
            .enumerate()
            .map(|(i, &r)| ColorEntry::new(Rgb::new(r, 0, 0), i))
            .collect()
    }

    fn cut(values: &[u8]) -> Option<usize> {
        let g = red_group(values);
        let stats = analyze_group(&g);
        median_cut_point(&g, Channel::Red, stats.sum)
    }

    #[test]
    fn test_even_values() {
        // sum 100, half 50: 10+20+30 = 60 crosses at index 2
        assert_eq!(cut(&[10, 20, 30, 40]), Some(2));
    }

    #[test]
    fn test_crossing_first_color_stays_in_lower_part() {
        assert_eq!(cut(&[250, 5, 5]), Some(1));
    }

    #[test]
    fn test_two_colors() {
        assert_eq!(cut(&[200, 210]), Some(1));
        assert_eq!(cut(&[0, 255]), Some(1));
    }

    #[test]
    fn test_heavy_last_color_starts_upper_part() {
        assert_eq!(cut(&[0, 0, 255]), Some(2));
    }

    #[test]
    fn test_unsplittable() {
        assert_eq!(cut(&[7]), None);
        assert_eq!(cut(&[]), None);
        assert_eq!(cut(&[0, 0, 0]), None);
    }
}
