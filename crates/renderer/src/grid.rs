//! Grid-overlay rendering: source pixels with interior seam lines.

use image::{Rgba, RgbaImage};
use mosaic_common::Tile;

/// Separator line color (opaque black).
const LINE_COLOR: Rgba<u8> = Rgba([0, 0, 0, 255]);

/// Render a grid overlay.
///
/// Copies source pixels verbatim into `destination`, then draws a
/// one-pixel vertical line at the column just inside each tile's right
/// edge and a one-pixel horizontal line just inside each bottom edge.
/// Edges coinciding with the image boundary are left unmarked, so only
/// interior seams appear and a single-tile grid reproduces the source
/// exactly.
///
/// The destination must have the source's dimensions; grid mode never
/// resizes.
pub fn render_grid(source: &RgbaImage, tiles: &[Tile], destination: &mut RgbaImage) {
    let (width, height) = source.dimensions();

    for tile in tiles {
        if tile.is_empty() {
            continue;
        }

        for y in tile.row_start..tile.row_end {
            for x in tile.col_start..tile.col_end {
                destination.put_pixel(x, y, *source.get_pixel(x, y));
            }
        }

        if tile.col_end != width {
            for y in tile.row_start..tile.row_end {
                destination.put_pixel(tile.col_end - 1, y, LINE_COLOR);
            }
        }

        if tile.row_end != height {
            for x in tile.col_start..tile.col_end {
                destination.put_pixel(x, tile.row_end - 1, LINE_COLOR);
            }
        }
    }
}
