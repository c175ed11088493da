//! Image to ASCII/Unicode glyph art with tone, block and edge-aware modes.

pub mod config;
pub mod edge;
pub mod grid;
pub mod luminance;
pub mod palette;
pub mod pipeline;
pub mod render;

#[cfg(target_arch = "wasm32")]
pub mod wasm;

pub use config::Settings;
pub use grid::IntensityGrid;
pub use palette::Palette;
pub use pipeline::Options;
pub use render::{render, RenderMode};

use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PicasciiError {
    #[error("image file '{}' not found", .0.display())]
    FileNotFound(PathBuf),
    #[error("Image error: {0}")]
    Decode(#[from] image::ImageError),
    #[error("invalid output dimensions {width}x{height}")]
    InvalidDimensions { width: u32, height: u32 },
    #[error("palette needs at least 2 glyphs, got {0}")]
    DegeneratePalette(usize),
    #[error("intensity {0} outside 0-255")]
    OutOfRange(i32),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Config error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, PicasciiError>;

/// Main converter
#[derive(Debug, Clone, Default)]
pub struct Converter {
    options: Options,
}

impl Converter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_options(options: Options) -> Self {
        Self { options }
    }

    pub fn with_width(mut self, width: u32) -> Self {
        self.options.width = width;
        self
    }

    pub fn with_mode(mut self, mode: RenderMode) -> Self {
        self.options.mode = mode;
        self
    }

    pub fn with_invert(mut self, enabled: bool) -> Self {
        self.options.invert = enabled;
        self
    }

    pub fn options(&self) -> &Options {
        &self.options
    }

    pub fn convert(&self, image: &image::DynamicImage) -> Result<String> {
        pipeline::run(&image.to_rgb8(), &self.options)
    }

    /// Decode the file at `path` and convert it. Existence is checked before
    /// any decoding is attempted.
    pub fn convert_path(&self, path: impl AsRef<Path>) -> Result<String> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(PicasciiError::FileNotFound(path.to_path_buf()));
        }
        let image = image::open(path)?;
        self.convert(&image)
    }
}
