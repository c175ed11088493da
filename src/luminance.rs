//! RGB to luminance using the BT.601 weights.

use crate::grid::IntensityGrid;
use image::{Rgb, RgbImage};

/// `floor(0.299 R + 0.587 G + 0.114 B)`.
///
/// Computed in integer thousandths: the float sum of the three products
/// lands just below `k` for many grays and would floor to `k - 1`.
#[inline]
pub fn luminance(pixel: Rgb<u8>) -> u8 {
    let [r, g, b] = pixel.0.map(u32::from);
    let y = (299 * r + 587 * g + 114 * b) / 1000;
    y.min(255) as u8
}

/// Luminance of every pixel.
pub fn luminance_grid(image: &RgbImage) -> IntensityGrid {
    IntensityGrid::from_fn(image.width(), image.height(), |x, y| luminance(*image.get_pixel(x, y)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gray_is_fixed_point() {
        for k in 0..=255u8 {
            assert_eq!(luminance(Rgb([k, k, k])), k, "gray {k}");
        }
    }

    #[test]
    fn test_primaries() {
        assert_eq!(luminance(Rgb([255, 0, 0])), 76);
        assert_eq!(luminance(Rgb([0, 255, 0])), 149);
        assert_eq!(luminance(Rgb([0, 0, 255])), 29);
    }

    #[test]
    fn test_grid_matches_pixels() {
        let mut img = RgbImage::new(2, 1);
        img.put_pixel(1, 0, Rgb([255, 255, 255]));
        let grid = luminance_grid(&img);
        assert_eq!(grid.as_slice(), &[0, 255]);
    }
}
