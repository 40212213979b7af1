//! Render modes.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::MosaicError;

/// How a tiled image is rendered into its output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RenderMode {
    /// Source pixels kept, separator lines drawn at interior tile seams
    Grid,
    /// Every tile replaced by its average color
    Palette,
}

impl RenderMode {
    /// Every supported mode; also the default mode set when none is
    /// requested explicitly.
    pub const ALL: [RenderMode; 2] = [RenderMode::Grid, RenderMode::Palette];

    /// Lowercase name, used as the suffix in derived output file names.
    pub fn suffix(&self) -> &'static str {
        match self {
            RenderMode::Grid => "grid",
            RenderMode::Palette => "palette",
        }
    }
}

impl fmt::Display for RenderMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.suffix())
    }
}

impl FromStr for RenderMode {
    type Err = MosaicError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "grid" => Ok(RenderMode::Grid),
            "palette" => Ok(RenderMode::Palette),
            _ => Err(MosaicError::UnsupportedMode(s.to_string())),
        }
    }
}
