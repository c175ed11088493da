//! JSON settings file.
//!
//! ```json
//! { "width": 120, "mode": "block", "invert": false }
//! ```
//!
//! Every key is optional; values given on the command line win.

use crate::pipeline::Options;
use crate::render::RenderMode;
use crate::{PicasciiError, Result};
use serde::Deserialize;
use std::path::Path;

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    pub width: Option<u32>,
    pub mode: Option<RenderMode>,
    pub invert: Option<bool>,
}

impl Settings {
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json(&text)
    }

    pub fn from_json(text: &str) -> Result<Self> {
        serde_json::from_str(text).map_err(|e| PicasciiError::Config(e.to_string()))
    }

    /// Overlay these settings onto `base`.
    pub fn apply(&self, base: Options) -> Options {
        Options {
            width: self.width.unwrap_or(base.width),
            mode: self.mode.unwrap_or(base.mode),
            invert: self.invert.unwrap_or(base.invert),
        }
    }
}
