//! Sizing configuration shared by the renderers and the batch processor.

use serde::{Deserialize, Serialize};

/// Tile grid dimensions and optional output resolution for a render batch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SizingConfig {
    /// Number of tile rows (>= 1)
    pub grid_rows: u32,
    /// Number of tile columns (>= 1)
    pub grid_cols: u32,
    /// Output width in pixels; 0 inherits the source width
    #[serde(default)]
    pub output_width: u32,
    /// Output height in pixels; 0 inherits the source height
    #[serde(default)]
    pub output_height: u32,
}

impl Default for SizingConfig {
    fn default() -> Self {
        Self {
            grid_rows: 8,
            grid_cols: 8,
            output_width: 0,
            output_height: 0,
        }
    }
}

impl SizingConfig {
    /// Explicit output dimensions, when both are configured positive.
    pub fn output_override(&self) -> Option<(u32, u32)> {
        if self.output_width > 0 && self.output_height > 0 {
            Some((self.output_width, self.output_height))
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_8x8_inheriting_source_size() {
        let sizing = SizingConfig::default();
        assert_eq!(sizing.grid_rows, 8);
        assert_eq!(sizing.grid_cols, 8);
        assert_eq!(sizing.output_override(), None);
    }

    #[test]
    fn test_output_override_requires_both_dimensions() {
        let mut sizing = SizingConfig::default();
        sizing.output_width = 320;
        assert_eq!(sizing.output_override(), None);

        sizing.output_height = 240;
        assert_eq!(sizing.output_override(), Some((320, 240)));
    }
}
