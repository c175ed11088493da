//! Sobel gradient magnitude.

use crate::grid::IntensityGrid;
use crate::luminance::luminance_grid;
use image::RgbImage;

/// Horizontal-gradient kernel.
const SOBEL_X: [[i32; 3]; 3] = [[-1, 0, 1], [-2, 0, 2], [-1, 0, 1]];
/// Vertical-gradient kernel.
const SOBEL_Y: [[i32; 3]; 3] = [[-1, -2, -1], [0, 0, 0], [1, 2, 1]];

/// Edge strength (0-255) of every pixel of `image`.
pub fn detect_edges(image: &RgbImage) -> IntensityGrid {
    sobel(&luminance_grid(image))
}

/// Apply the Sobel operator to interior pixels of `gray`.
///
/// Magnitude is `floor(sqrt(gx² + gy²))` saturated at 255. The one-pixel
/// border stays 0, and grids narrower or shorter than 3 come back all zero.
pub fn sobel(gray: &IntensityGrid) -> IntensityGrid {
    let (width, height) = (gray.width(), gray.height());
    let mut edges = IntensityGrid::zeroed(width, height);
    if width < 3 || height < 3 {
        return edges;
    }

    for y in 1..height - 1 {
        for x in 1..width - 1 {
            let (gx, gy) = gradient(gray, x, y);
            edges.set(x, y, magnitude(gx, gy));
        }
    }
    edges
}

fn gradient(gray: &IntensityGrid, x: u32, y: u32) -> (i32, i32) {
    let mut gx = 0;
    let mut gy = 0;
    for ky in 0..3 {
        for kx in 0..3 {
            let v = i32::from(gray.get(x + kx - 1, y + ky - 1));
            gx += v * SOBEL_X[ky as usize][kx as usize];
            gy += v * SOBEL_Y[ky as usize][kx as usize];
        }
    }
    (gx, gy)
}

/// Truncating square root. `gx² + gy²` stays below 2^22, well inside the
/// range where `f64::sqrt` is exact enough for the floor to be correct.
#[inline]
fn magnitude(gx: i32, gy: i32) -> u8 {
    let sq = (gx * gx + gy * gy) as u32;
    let root = f64::from(sq).sqrt() as u32;
    root.min(255) as u8
}
