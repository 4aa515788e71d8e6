//! Palette synthesis
//!
//! Turns the final partition of the working set into palette entries and
//! fills the index map. Palette entries are always pairwise distinct, so
//! one entry per group survives a later reduction of the palette itself.

use crate::QuantResult;
use crate::analyze::Group;
use crate::sort::{CHANNEL_SORT_ORDER, sort_by_channels};
use qmedian_core::{ColorEntry, Palette, Rgb, alloc};
use std::collections::HashSet;

/// Groups whose widest spread is at most this are represented by one of
/// their own colors instead of the mean.
const NEAR_UNIFORM_SPREAD: u8 = 1;

/// Build a palette holding every distinct color once.
///
/// `colors` is reordered by green, then blue, then red, and each color's
/// position becomes its palette slot.
pub fn palette_from_distinct(
    colors: &mut [ColorEntry],
    index_map: &mut [usize],
) -> QuantResult<Palette> {
    sort_by_channels(colors, &CHANNEL_SORT_ORDER)?;

    let mut palette = Palette::with_capacity(colors.len().max(1))?;
    for entry in colors.iter() {
        index_map[entry.original_index] = palette.add_color(entry.color)?;
    }
    Ok(palette)
}

/// Build one palette entry per group.
///
/// A group whose color is already taken by an earlier group falls back to
/// its first member not yet in the palette, then to the nearest free color.
pub fn palette_from_groups(
    colors: &[ColorEntry],
    groups: &[Group],
    index_map: &mut [usize],
) -> QuantResult<Palette> {
    let mut palette = Palette::with_capacity(groups.len().max(1))?;
    let mut used: HashSet<Rgb> = alloc::try_set_with_capacity(groups.len())?;
    for group in groups {
        let members = &colors[group.start..group.end];
        let preferred = if group.stats.spread > NEAR_UNIFORM_SPREAD {
            mean_color(members)
        } else {
            members[0].color
        };
        let color = if used.contains(&preferred) {
            members
                .iter()
                .map(|entry| entry.color)
                .find(|c| !used.contains(c))
                .unwrap_or_else(|| nearest_free_color(&used, preferred))
        } else {
            preferred
        };
        used.insert(color);
        let slot = palette.add_color(color)?;
        for entry in members {
            index_map[entry.original_index] = slot;
        }
    }
    Ok(palette)
}

/// Point every duplicate at its representative's slot.
pub fn resolve_duplicates(duplicates: &[ColorEntry], index_map: &mut [usize]) {
    for dup in duplicates {
        if let Some(rep) = dup.representative {
            index_map[dup.original_index] = index_map[rep];
        }
    }
}

/// Closest color to `center`, by largest channel difference, that is not
/// in `used`. Candidates at equal distance are tried in red, green, blue
/// order.
fn nearest_free_color(used: &HashSet<Rgb>, center: Rgb) -> Rgb {
    let [cr, cg, cb] = center.to_array().map(i32::from);
    let span = |c: i32, d: i32| (c - d).max(0)..=(c + d).min(255);
    for d in 1..=255 {
        for r in span(cr, d) {
            for g in span(cg, d) {
                // inside the shell only the two blue faces are at distance d
                let on_face = (r - cr).abs() == d || (g - cg).abs() == d;
                for b in span(cb, d) {
                    if !on_face && (b - cb).abs() != d {
                        continue;
                    }
                    let c = Rgb::new(r as u8, g as u8, b as u8);
                    if !used.contains(&c) {
                        return c;
                    }
                }
            }
        }
    }
    // fewer groups than colors exist, so some color is always free
    center
}

/// Per-channel mean, rounded half up. `members` must not be empty.
fn mean_color(members: &[ColorEntry]) -> Rgb {
    let count = members.len() as u64;
    let mut sum = [0u64; 3];
    for entry in members {
        for (s, v) in sum.iter_mut().zip(entry.color.to_array()) {
            *s += u64::from(v);
        }
    }
    // a mean of u8 values always fits in u8
    let [r, g, b] = sum.map(|s| ((s + count / 2) / count) as u8);
    Rgb::new(r, g, b)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entries(colors: &[(u8, u8, u8)]) -> Vec<ColorEntry> {
        colors
            .iter()
            .enumerate()
            .map(|(i, &c)| ColorEntry::new(Rgb::from(c), i))
            .collect()
    }

    #[test]
    fn test_mean_rounds_half_up() {
        let g = entries(&[(0, 0, 0), (1, 3, 255)]);
        assert_eq!(mean_color(&g), Rgb::new(1, 2, 128));
        let g = entries(&[(10, 10, 10), (10, 10, 11), (10, 10, 11)]);
        assert_eq!(mean_color(&g), Rgb::new(10, 10, 11));
    }

    #[test]
    fn test_near_uniform_group_uses_member_color() {
        let colors = entries(&[(100, 100, 100), (101, 100, 100), (0, 0, 0), (50, 0, 0)]);
        let groups = [
            Group::analyzed(&colors, 0, 2, None),
            Group::analyzed(&colors, 2, 4, None),
        ];
        let mut index_map = vec![usize::MAX; 4];
        let pal = palette_from_groups(&colors, &groups, &mut index_map).unwrap();

        assert_eq!(pal.get(0), Some(Rgb::new(100, 100, 100)));
        assert_eq!(pal.get(1), Some(Rgb::new(25, 0, 0)));
        assert_eq!(index_map, vec![0, 0, 1, 1]);
    }

    #[test]
    fn test_coinciding_means_take_a_free_member() {
        let colors = entries(&[(0, 0, 0), (10, 0, 0), (4, 0, 0), (6, 0, 0)]);
        let groups = [
            Group::analyzed(&colors, 0, 2, None),
            Group::analyzed(&colors, 2, 4, None),
        ];
        let mut index_map = vec![usize::MAX; 4];
        let pal = palette_from_groups(&colors, &groups, &mut index_map).unwrap();

        assert_eq!(pal.colors(), &[Rgb::new(5, 0, 0), Rgb::new(4, 0, 0)]);
        assert_eq!(index_map, vec![0, 0, 1, 1]);
    }

    #[test]
    fn test_taken_members_fall_back_to_nearest_free_color() {
        let colors = entries(&[(0, 0, 0), (2, 0, 0), (1, 0, 0)]);
        let groups = [
            Group::analyzed(&colors, 0, 2, None),
            Group::analyzed(&colors, 2, 3, None),
        ];
        let mut index_map = vec![usize::MAX; 3];
        let pal = palette_from_groups(&colors, &groups, &mut index_map).unwrap();

        assert_eq!(pal.colors(), &[Rgb::new(1, 0, 0), Rgb::new(0, 0, 0)]);
        assert_eq!(index_map, vec![0, 0, 1]);
    }

    #[test]
    fn test_nearest_free_color_searches_outward() {
        let mut used = HashSet::new();
        assert_eq!(nearest_free_color(&used, Rgb::new(255, 255, 255)), Rgb::new(254, 254, 254));

        for c in [(0, 0, 0), (0, 0, 1), (0, 1, 0), (0, 1, 1), (1, 0, 0)] {
            used.insert(Rgb::from(c));
        }
        assert_eq!(nearest_free_color(&used, Rgb::new(0, 0, 0)), Rgb::new(1, 0, 1));
    }

    #[test]
    fn test_distinct_palette_is_sorted() {
        let mut colors = entries(&[(0, 9, 0), (5, 0, 0), (0, 0, 7)]);
        let mut index_map = vec![usize::MAX; 3];
        let pal = palette_from_distinct(&mut colors, &mut index_map).unwrap();

        assert_eq!(
            pal.colors(),
            &[Rgb::new(5, 0, 0), Rgb::new(0, 0, 7), Rgb::new(0, 9, 0)]
        );
        assert_eq!(index_map, vec![2, 0, 1]);
    }

    #[test]
    fn test_resolve_duplicates() {
        let mut dup = ColorEntry::new(Rgb::new(1, 1, 1), 2);
        dup.representative = Some(0);
        let mut index_map = vec![4, 3, usize::MAX];
        resolve_duplicates(&[dup], &mut index_map);
        assert_eq!(index_map, vec![4, 3, 4]);
    }
}
