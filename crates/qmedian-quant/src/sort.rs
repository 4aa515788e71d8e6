//! Bucket sort of color groups
//!
//! A single counting pass over 256 buckets keyed by one channel, followed
//! by a scatter into a scratch buffer. The sort is stable, so successive
//! passes over different channels compose into a lexicographic order with
//! the last pass as the primary key.

use crate::QuantResult;
use qmedian_core::{Channel, ColorEntry, alloc};

/// Channel order of the multi-channel sort used to bring identical colors
/// together and to order an unreduced palette.
pub const CHANNEL_SORT_ORDER: [Channel; 3] = [Channel::Red, Channel::Blue, Channel::Green];

/// Stably sort a group in ascending order of one channel.
pub fn bucket_sort(group: &mut [ColorEntry], channel: Channel) -> QuantResult<()> {
    if group.len() < 2 {
        return Ok(());
    }

    let mut offsets = [0usize; 256];
    for entry in group.iter() {
        offsets[usize::from(entry.channel(channel))] += 1;
    }
    let mut next = 0;
    for slot in offsets.iter_mut() {
        let count = *slot;
        *slot = next;
        next += count;
    }

    let mut sorted = alloc::try_filled(group[0], group.len())?;
    for entry in group.iter() {
        let slot = &mut offsets[usize::from(entry.channel(channel))];
        sorted[*slot] = *entry;
        *slot += 1;
    }
    group.copy_from_slice(&sorted);
    Ok(())
}

/// Apply one stable bucket sort per channel, in the given order.
pub fn sort_by_channels(group: &mut [ColorEntry], order: &[Channel]) -> QuantResult<()> {
    for &channel in order {
        bucket_sort(group, channel)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use qmedian_core::Rgb;

    fn group(colors: &[(u8, u8, u8)]) -> Vec<ColorEntry> {
        colors
            .iter()
            .enumerate()
            .map(|(i, &c)| ColorEntry::new(Rgb::from(c), i))
            .collect()
    }

    fn indices(g: &[ColorEntry]) -> Vec<usize> {
        g.iter().map(|e| e.original_index).collect()
    }

    #[test]
    fn test_sort_ascending() {
        let mut g = group(&[(30, 0, 0), (10, 0, 0), (255, 0, 0), (0, 0, 0)]);
        bucket_sort(&mut g, Channel::Red).unwrap();
        assert_eq!(indices(&g), vec![3, 1, 0, 2]);
    }

    #[test]
    fn test_sort_is_stable() {
        let mut g = group(&[(5, 1, 0), (5, 0, 0), (1, 9, 0), (5, 2, 0)]);
        bucket_sort(&mut g, Channel::Red).unwrap();
        assert_eq!(indices(&g), vec![2, 0, 1, 3]);
    }

    #[test]
    fn test_sort_other_channel() {
        let mut g = group(&[(0, 0, 9), (0, 0, 3), (0, 0, 6)]);
        bucket_sort(&mut g, Channel::Blue).unwrap();
        assert_eq!(indices(&g), vec![1, 2, 0]);
    }

    #[test]
    fn test_multi_channel_last_pass_is_primary() {
        let mut g = group(&[(2, 1, 0), (1, 1, 0), (9, 0, 0), (1, 0, 5)]);
        sort_by_channels(&mut g, &CHANNEL_SORT_ORDER).unwrap();
        // green is the primary key, then blue, then red
        assert_eq!(indices(&g), vec![2, 3, 1, 0]);
    }

    #[test]
    fn test_trivial_groups() {
        let mut empty: Vec<ColorEntry> = Vec::new();
        bucket_sort(&mut empty, Channel::Red).unwrap();
        let mut one = group(&[(1, 2, 3)]);
        bucket_sort(&mut one, Channel::Green).unwrap();
        assert_eq!(indices(&one), vec![0]);
    }
}
