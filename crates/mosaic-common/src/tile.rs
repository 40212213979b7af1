//! Tile geometry and grid partitioning.

use serde::{Deserialize, Serialize};

/// A rectangular sub-region of an image in pixel coordinates.
///
/// Bounds are half-open: the tile covers columns `[col_start, col_end)`
/// and rows `[row_start, row_end)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Tile {
    /// First row (y) covered by the tile
    pub row_start: u32,
    /// First column (x) covered by the tile
    pub col_start: u32,
    /// One past the last covered row
    pub row_end: u32,
    /// One past the last covered column
    pub col_end: u32,
}

impl Tile {
    pub fn new(row_start: u32, col_start: u32, row_end: u32, col_end: u32) -> Self {
        Self {
            row_start,
            col_start,
            row_end,
            col_end,
        }
    }

    /// Tile width in pixels.
    pub fn width(&self) -> u32 {
        self.col_end - self.col_start
    }

    /// Tile height in pixels.
    pub fn height(&self) -> u32 {
        self.row_end - self.row_start
    }

    /// Number of pixels covered by the tile.
    pub fn area(&self) -> u64 {
        self.width() as u64 * self.height() as u64
    }

    /// True when the tile covers no pixels.
    pub fn is_empty(&self) -> bool {
        self.area() == 0
    }
}

/// Partition a `width x height` rectangle into a row-major grid of
/// exactly `rows x cols` tiles.
///
/// Base tile dimensions come from integer division; the remainder pixels
/// are absorbed one at a time by the first rows and the first columns, so
/// tile dimensions differ by at most one pixel. The width remainder is
/// re-applied identically on every row. Coverage is exhaustive with no
/// overlap, and the output is deterministic for identical inputs.
///
/// When `rows` or `cols` exceed the pixel dimensions the excess tiles are
/// zero-height or zero-width; the tile count stays `rows * cols`.
///
/// Callers must pass positive `width`, `height`, `rows` and `cols`.
pub fn partition(width: u32, height: u32, rows: u32, cols: u32) -> Vec<Tile> {
    let base_width = width / cols;
    let extra_width = width % cols;
    let base_height = height / rows;
    let extra_height = height % rows;

    let mut tiles = Vec::with_capacity(rows as usize * cols as usize);
    let mut row_start = 0;
    for row in 0..rows {
        let mut row_end = row_start + base_height;
        if row < extra_height {
            row_end += 1;
        }

        let mut col_start = 0;
        for col in 0..cols {
            let mut col_end = col_start + base_width;
            if col < extra_width {
                col_end += 1;
            }
            tiles.push(Tile::new(row_start, col_start, row_end, col_end));
            col_start = col_end;
        }

        row_start = row_end;
    }

    tiles
}
