//! Pipeline controller: size the working grid, pre-process it, render it.

use crate::render::{render, RenderMode};
use crate::{PicasciiError, Result};
use image::imageops::{self, FilterType};
use image::RgbImage;
use log::debug;

/// Glyph cells are roughly this much wider than they are tall.
pub const CELL_ASPECT: f64 = 0.55;

/// Contrast multiplier applied before edge-based modes.
pub const CONTRAST_BOOST: f32 = 1.15;

/// Output height in rows for `width` columns of a `src_width` x `src_height`
/// image: `floor((width * src_height / src_width) * 0.55)`, where the inner
/// division is integer division.
pub fn target_height(width: u32, src_width: u32, src_height: u32) -> Result<u32> {
    if width == 0 || src_width == 0 || src_height == 0 {
        return Err(PicasciiError::InvalidDimensions { width, height: 0 });
    }
    let rows = u64::from(width) * u64::from(src_height) / u64::from(src_width);
    let height = (rows as f64 * CELL_ASPECT) as u32;
    if height < 1 {
        return Err(PicasciiError::InvalidDimensions { width, height });
    }
    Ok(height)
}

/// Scale pixel values away from mid-gray by `factor`, saturating at 0 and 255.
pub fn boost_contrast(image: &RgbImage, factor: f32) -> RgbImage {
    // imageops::contrast scales by ((100 + c) / 100)^2
    let percent = (factor.sqrt() - 1.0) * 100.0;
    imageops::contrast(image, percent)
}

/// Options for a single pipeline run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Options {
    pub width: u32,
    pub mode: RenderMode,
    pub invert: bool,
}

impl Default for Options {
    fn default() -> Self {
        Self { width: 100, mode: RenderMode::default(), invert: false }
    }
}

/// Run the full pipeline on `source`. The source is never modified; resize,
/// inversion and contrast work on a private copy.
pub fn run(source: &RgbImage, options: &Options) -> Result<String> {
    let width = options.width;
    let height = target_height(width, source.width(), source.height())?;
    debug!(
        "resizing {}x{} -> {}x{} for mode {}",
        source.width(),
        source.height(),
        width,
        height,
        options.mode
    );

    let mut working = imageops::resize(source, width, height, FilterType::CatmullRom);

    if options.invert {
        imageops::invert(&mut working);
    }

    if options.mode.wants_contrast() {
        debug!("boosting contrast by {CONTRAST_BOOST}");
        working = boost_contrast(&working, CONTRAST_BOOST);
    }

    render(&working, options.mode)
}
