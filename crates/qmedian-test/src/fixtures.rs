//! Deterministic color fixtures

use crate::error::{TestError, TestResult};
use qmedian_core::Rgb;
use std::collections::HashSet;

/// Number of distinct 24-bit colors
const COLOR_SPACE: usize = 1 << 24;

/// Linear congruential generator, same constants as the classic C `rand`.
struct Lcg(u32);

impl Lcg {
    fn next_byte(&mut self) -> u8 {
        self.0 = self.0.wrapping_mul(1_103_515_245).wrapping_add(12345);
        ((self.0 >> 16) & 0xff) as u8
    }

    fn next_color(&mut self) -> Rgb {
        let r = self.next_byte();
        let g = self.next_byte();
        let b = self.next_byte();
        Rgb::new(r, g, b)
    }
}

/// `n` pseudo-random colors, all distinct, reproducible from `seed`.
pub fn distinct_colors(n: usize, seed: u32) -> TestResult<Vec<Rgb>> {
    if n > COLOR_SPACE {
        return Err(TestError::Fixture(format!(
            "cannot draw {n} distinct colors from a space of {COLOR_SPACE}"
        )));
    }
    let mut rng = Lcg(seed);
    let mut seen = HashSet::with_capacity(n);
    let mut out = Vec::with_capacity(n);
    while out.len() < n {
        let c = rng.next_color();
        if seen.insert(c) {
            out.push(c);
        }
    }
    Ok(out)
}

/// `n` pseudo-random colors, duplicates allowed.
pub fn random_colors(n: usize, seed: u32) -> Vec<Rgb> {
    let mut rng = Lcg(seed);
    (0..n).map(|_| rng.next_color()).collect()
}

/// Pack colors as 3-byte records.
pub fn pack_rgb(colors: &[Rgb]) -> Vec<u8> {
    colors.iter().flat_map(|c| c.to_array()).collect()
}

/// Pack colors as 4-byte records with `pad` as the fourth byte.
pub fn pack_rgbx(colors: &[Rgb], pad: u8) -> Vec<u8> {
    colors
        .iter()
        .flat_map(|c| [c.r, c.g, c.b, pad])
        .collect()
}

/// A `width` x `height` RGBX image: red along x, green along y, blue
/// constant.
pub fn gradient_rgbx(width: u32, height: u32, blue: u8) -> Vec<u8> {
    let mut out = Vec::with_capacity((width * height * 4) as usize);
    for y in 0..height {
        for x in 0..width {
            let r = ((x * 255) / width.max(1)) as u8;
            let g = ((y * 255) / height.max(1)) as u8;
            out.extend_from_slice(&[r, g, blue, 255]);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_distinct_colors_are_distinct_and_stable() {
        let a = distinct_colors(500, 7).unwrap();
        let b = distinct_colors(500, 7).unwrap();
        assert_eq!(a, b);
        let set: HashSet<Rgb> = a.iter().copied().collect();
        assert_eq!(set.len(), 500);
    }

    #[test]
    fn test_too_many_colors() {
        assert!(distinct_colors(COLOR_SPACE + 1, 1).is_err());
    }

    #[test]
    fn test_packing() {
        let colors = [Rgb::new(1, 2, 3), Rgb::new(4, 5, 6)];
        assert_eq!(pack_rgb(&colors), vec![1, 2, 3, 4, 5, 6]);
        assert_eq!(pack_rgbx(&colors, 9), vec![1, 2, 3, 9, 4, 5, 6, 9]);
    }

    #[test]
    fn test_gradient_size() {
        assert_eq!(gradient_rgbx(10, 4, 0).len(), 160);
    }
}
