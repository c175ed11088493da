//! Glyph palettes and the intensity-to-glyph quantizer.
//!
//! Tone and edge palettes run from the densest glyph (index 0, darkest tone)
//! to the sparsest glyph (last index, lightest tone). The block palette runs
//! empty to solid and is read with inverted intensity.

use crate::{PicasciiError, Result};

/// Fine-detail ramp used by `Detailed` and `Enhanced`.
#[rustfmt::skip]
const DETAILED_GLYPHS: &[char] = &[
    '@', '#', 'M', 'N', 'W', 'Q', 'B', 'D', 'R', '$', '8', '&', '%', '0', 'H', 'U', 'A',
    'G', 'X', 'h', 'q', 'K', 'P', 'd', 'b', 'p', 'k', 'w', 'a', 'o', 'g', 'Z', 'O', 'V',
    'n', 'u', 's', 'x', 'z', 'f', 'c', 'r', '*', '{', '}', '[', ']', '(', ')', '/', '\\',
    '|', 'j', 't', 'l', 'i', '!', '<', '>', '+', '~', '?', ';', ':', '^', ',', '\'', '.',
    ' ',
];

const SIMPLE_GLYPHS: &[char] = &['@', '#', 'S', '%', '?', '*', '+', ';', ':', ',', ' '];

const EDGE_GLYPHS: &[char] = &['@', '#', '|', '/', '\\', '-', '+', '\'', '.', ' '];

/// Empty to solid, so `255 - v` puts black on the full block.
const BLOCK_GLYPHS: &[char] = &[' ', '░', '▒', '▓', '█'];

/// ~70 glyphs for fine tonal detail.
pub const DETAILED: Palette = Palette::from_static(DETAILED_GLYPHS);
/// 11-glyph coarse ramp.
pub const SIMPLE: Palette = Palette::from_static(SIMPLE_GLYPHS);
/// 10-glyph ramp for gradient magnitude.
pub const EDGE: Palette = Palette::from_static(EDGE_GLYPHS);
/// 5 Unicode shade blocks.
pub const BLOCK: Palette = Palette::from_static(BLOCK_GLYPHS);

/// An ordered, immutable glyph ramp with at least two glyphs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    glyphs: &'static [char],
}

impl Palette {
    /// Built-in tables only; they all hold at least two glyphs.
    const fn from_static(glyphs: &'static [char]) -> Self {
        Self { glyphs }
    }

    /// Validate a new palette.
    pub fn new(glyphs: &'static [char]) -> Result<Self> {
        if glyphs.len() < 2 {
            return Err(PicasciiError::DegeneratePalette(glyphs.len()));
        }
        Ok(Self { glyphs })
    }

    pub fn len(&self) -> usize {
        self.glyphs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.glyphs.is_empty()
    }

    pub fn glyphs(&self) -> &'static [char] {
        self.glyphs
    }

    /// Glyph at index 0.
    pub fn first(&self) -> char {
        self.glyphs[0]
    }

    /// Glyph at the last index.
    pub fn last(&self) -> char {
        self.glyphs[self.glyphs.len() - 1]
    }

    /// Quantize `value` (0-255) to an index: `floor(value * (N - 1) / 255)`.
    ///
    /// Values outside 0-255 are rejected rather than clamped.
    pub fn index_of(&self, value: i32) -> Result<usize> {
        let n = self.glyphs.len();
        if n < 2 {
            return Err(PicasciiError::DegeneratePalette(n));
        }
        if !(0..=255).contains(&value) {
            return Err(PicasciiError::OutOfRange(value));
        }
        Ok(value as usize * (n - 1) / 255)
    }

    /// Glyph for `value` (0-255).
    pub fn glyph(&self, value: i32) -> Result<char> {
        self.index_of(value).map(|i| self.glyphs[i])
    }

    /// Glyph for `255 - value`. With an empty-to-solid ramp dark tones land
    /// on the solid end.
    pub fn glyph_inverted(&self, value: i32) -> Result<char> {
        if !(0..=255).contains(&value) {
            return Err(PicasciiError::OutOfRange(value));
        }
        self.glyph(255 - value)
    }
}
