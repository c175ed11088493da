//! Rendering modes: per-pixel composition of luminance, edges and palettes.

use crate::edge::detect_edges;
use crate::grid::IntensityGrid;
use crate::luminance::luminance_grid;
use crate::palette::{self, Palette};
use crate::{PicasciiError, Result};
use image::RgbImage;
use serde::Deserialize;
use std::fmt;
use std::str::FromStr;

/// Edge strength above which Enhanced emits the densest edge glyph.
const STRONG_EDGE: u8 = 150;
/// Edge strength above which Enhanced darkens the tone.
const MEDIUM_EDGE: u8 = 80;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RenderMode {
    /// Luminance over the 11-glyph ramp
    #[default]
    Simple,
    /// Luminance over the fine ramp
    Detailed,
    /// Inverted luminance over Unicode shade blocks
    Block,
    /// Sobel magnitude over the edge ramp
    Edge,
    /// Edges fused with tone
    Enhanced,
}

type RenderFn = fn(&RgbImage) -> Result<String>;

/// Indexed by `RenderMode as usize`.
const RENDERERS: [RenderFn; 5] = [render_simple, render_detailed, render_block, render_edge, render_enhanced];

impl RenderMode {
    pub const ALL: [RenderMode; 5] = [
        RenderMode::Simple,
        RenderMode::Detailed,
        RenderMode::Block,
        RenderMode::Edge,
        RenderMode::Enhanced,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            RenderMode::Simple => "simple",
            RenderMode::Detailed => "detailed",
            RenderMode::Block => "block",
            RenderMode::Edge => "edge",
            RenderMode::Enhanced => "enhanced",
        }
    }

    /// Case-insensitive lookup that falls back to `Simple`.
    pub fn from_name_lossy(name: &str) -> Self {
        name.parse().unwrap_or_default()
    }

    /// Whether the pipeline boosts contrast before this mode runs.
    pub fn wants_contrast(&self) -> bool {
        matches!(self, RenderMode::Edge | RenderMode::Enhanced)
    }

    fn renderer(self) -> RenderFn {
        RENDERERS[self as usize]
    }
}

impl FromStr for RenderMode {
    type Err = PicasciiError;

    fn from_str(s: &str) -> Result<Self> {
        let lower = s.to_ascii_lowercase();
        RenderMode::ALL
            .into_iter()
            .find(|m| m.name() == lower)
            .ok_or_else(|| PicasciiError::Config(format!("unknown render mode: {s}")))
    }
}

impl fmt::Display for RenderMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Render `image` at its own size, one newline-terminated line per row.
pub fn render(image: &RgbImage, mode: RenderMode) -> Result<String> {
    (mode.renderer())(image)
}

fn render_tone(image: &RgbImage, palette: Palette) -> Result<String> {
    let lum = luminance_grid(image);
    assemble(&lum, |x, y| palette.glyph(i32::from(lum.get(x, y))))
}

fn render_simple(image: &RgbImage) -> Result<String> {
    render_tone(image, palette::SIMPLE)
}

fn render_detailed(image: &RgbImage) -> Result<String> {
    render_tone(image, palette::DETAILED)
}

fn render_block(image: &RgbImage) -> Result<String> {
    let lum = luminance_grid(image);
    assemble(&lum, |x, y| palette::BLOCK.glyph_inverted(i32::from(lum.get(x, y))))
}

fn render_edge(image: &RgbImage) -> Result<String> {
    let edges = detect_edges(image);
    assemble(&edges, |x, y| palette::EDGE.glyph(i32::from(edges.get(x, y))))
}

fn render_enhanced(image: &RgbImage) -> Result<String> {
    let lum = luminance_grid(image);
    let edges = detect_edges(image);
    assemble(&lum, |x, y| fuse(lum.get(x, y), edges.get(x, y)))
}

/// Enhanced per-pixel rule. First matching branch wins.
pub fn fuse(luminance: u8, edge: u8) -> Result<char> {
    if edge > STRONG_EDGE {
        Ok(palette::EDGE.first())
    } else if edge > MEDIUM_EDGE {
        let darkened = (i32::from(luminance) - i32::from(edge) / 2).max(0);
        palette::DETAILED.glyph(darkened)
    } else {
        palette::DETAILED.glyph(i32::from(luminance))
    }
}

/// Build the text for a `grid`-sized image from a per-pixel glyph function.
///
/// Rows are rendered independently and joined top to bottom.
fn assemble<F>(grid: &IntensityGrid, glyph_at: F) -> Result<String>
where
    F: Fn(u32, u32) -> Result<char> + Sync,
{
    let width = grid.width();
    let render_row = |y: u32| -> Result<String> {
        let mut line = String::with_capacity(width as usize + 1);
        for x in 0..width {
            line.push(glyph_at(x, y)?);
        }
        line.push('\n');
        Ok(line)
    };

    #[cfg(not(target_arch = "wasm32"))]
    let rows: Vec<String> = {
        use rayon::prelude::*;
        (0..grid.height()).into_par_iter().map(render_row).collect::<Result<_>>()?
    };
    #[cfg(target_arch = "wasm32")]
    let rows: Vec<String> = (0..grid.height()).map(render_row).collect::<Result<_>>()?;

    Ok(rows.concat())
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgb;

    fn lines(text: &str) -> Vec<&str> {
        text.lines().collect()
    }

    #[test]
    fn test_mode_parsing() {
        assert_eq!("simple".parse::<RenderMode>().unwrap(), RenderMode::Simple);
        assert_eq!("DETAILED".parse::<RenderMode>().unwrap(), RenderMode::Detailed);
        assert_eq!("Block".parse::<RenderMode>().unwrap(), RenderMode::Block);
        assert!("sketch".parse::<RenderMode>().is_err());
        assert_eq!(RenderMode::from_name_lossy("EnHaNcEd"), RenderMode::Enhanced);
        assert_eq!(RenderMode::from_name_lossy("sketch"), RenderMode::Simple);
        assert_eq!(RenderMode::from_name_lossy(""), RenderMode::Simple);
    }

    #[test]
    fn test_renderer_table_matches_modes() {
        for (i, mode) in RenderMode::ALL.into_iter().enumerate() {
            assert_eq!(mode as usize, i);
            assert_eq!(mode.to_string().parse::<RenderMode>().unwrap(), mode);
        }
        assert!(RenderMode::Edge.wants_contrast());
        assert!(RenderMode::Enhanced.wants_contrast());
        assert!(!RenderMode::Simple.wants_contrast());
        assert!(!RenderMode::Detailed.wants_contrast());
        assert!(!RenderMode::Block.wants_contrast());
    }

    #[test]
    fn test_white_simple_is_lightest_glyph() {
        let img = RgbImage::from_pixel(10, 10, Rgb([255, 255, 255]));
        let text = render(&img, RenderMode::Simple).unwrap();
        let rows = lines(&text);
        assert_eq!(rows.len(), 10);
        for row in rows {
            assert_eq!(row.chars().count(), 10);
            assert!(row.chars().all(|c| c == palette::SIMPLE.last()));
        }
        assert!(text.ends_with('\n'));
    }

    #[test]
    fn test_black_block_is_solid() {
        let img = RgbImage::from_pixel(10, 10, Rgb([0, 0, 0]));
        let text = render(&img, RenderMode::Block).unwrap();
        assert_eq!(lines(&text).len(), 10);
        assert!(text.lines().all(|r| r.chars().count() == 10 && r.chars().all(|c| c == '█')));
    }

    #[test]
    fn test_every_mode_keeps_shape() {
        let img = RgbImage::from_fn(7, 4, |x, y| Rgb([(x * 30) as u8, (y * 60) as u8, 90]));
        for mode in RenderMode::ALL {
            let text = render(&img, mode).unwrap();
            let rows = lines(&text);
            assert_eq!(rows.len(), 4, "{mode}");
            assert!(rows.iter().all(|r| r.chars().count() == 7), "{mode}");
        }
    }

    #[test]
    fn test_edge_mode_on_flat_image_is_uniform() {
        // zero magnitude maps to index 0 of the edge ramp
        let img = RgbImage::from_pixel(6, 6, Rgb([30, 30, 30]));
        let text = render(&img, RenderMode::Edge).unwrap();
        assert!(text.lines().all(|r| r.chars().all(|c| c == palette::EDGE.first())));
    }

    #[test]
    fn test_fuse_strong_edge_ignores_tone() {
        for lum in [0, 17, 128, 255] {
            assert_eq!(fuse(lum, 200).unwrap(), '@');
            assert_eq!(fuse(lum, 151).unwrap(), palette::EDGE.first());
        }
    }

    #[test]
    fn test_fuse_medium_edge_darkens() {
        // 200 - 100 / 2 = 150
        assert_eq!(fuse(200, 100).unwrap(), palette::DETAILED.glyph(150).unwrap());
        // clamps at zero
        assert_eq!(fuse(10, 150).unwrap(), palette::DETAILED.first());
    }

    #[test]
    fn test_enhanced_medium_edge_pixels() {
        // Columns 100, 100, 125, 125: gx = 4 * 25 = 100 on both inner columns
        let img = RgbImage::from_fn(4, 3, |x, _| if x < 2 { Rgb([100, 100, 100]) } else { Rgb([125, 125, 125]) });
        let text = render(&img, RenderMode::Enhanced).unwrap();
        let middle: Vec<char> = text.lines().nth(1).unwrap().chars().collect();
        assert_eq!(middle[1], palette::DETAILED.glyph(100 - 50).unwrap());
        assert_eq!(middle[2], palette::DETAILED.glyph(125 - 50).unwrap());
        // border pixels carry no edge and keep their tone
        assert_eq!(middle[0], palette::DETAILED.glyph(100).unwrap());
        assert_eq!(middle[3], palette::DETAILED.glyph(125).unwrap());
    }

    #[test]
    fn test_fuse_weak_edge_uses_tone() {
        assert_eq!(fuse(255, 80).unwrap(), palette::DETAILED.last());
        assert_eq!(fuse(123, 0).unwrap(), palette::DETAILED.glyph(123).unwrap());
    }

    #[test]
    fn test_render_is_deterministic() {
        let img = RgbImage::from_fn(16, 9, |x, y| Rgb([(x * 16) as u8, (y * 28) as u8, ((x + y) * 9) as u8]));
        for mode in RenderMode::ALL {
            assert_eq!(render(&img, mode).unwrap(), render(&img, mode).unwrap());
        }
    }
}
