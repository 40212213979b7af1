//! Palette-mosaic rendering: each tile becomes its average color.

use image::{Rgba, RgbaImage};
use mosaic_common::{MosaicResult, Tile};
use rayon::prelude::*;
use tracing::debug;

use crate::average::region_average;

/// Minimum source pixels to benefit from a parallel averaging pass.
const PARALLEL_THRESHOLD: u64 = 4096; // 64x64 or larger

/// Render a palette mosaic.
///
/// For each index `i`, the average color of `input_grid[i]` in `source`
/// is flood-filled into `output_grid[i]` of `destination`. The two grids
/// must be the paired row-major partitions of the source and destination
/// rectangles (same rows x cols). Averaging always samples the source at
/// its native resolution, so a differently-sized destination produces a
/// resized mosaic without interpolation.
///
/// Tiles are independent, so the averaging pass runs in parallel for
/// larger sources; the result is identical either way.
pub fn render_palette(
    source: &RgbaImage,
    input_grid: &[Tile],
    destination: &mut RgbaImage,
    output_grid: &[Tile],
) -> MosaicResult<()> {
    debug_assert_eq!(input_grid.len(), output_grid.len());

    let colors = average_pass(source, input_grid, output_grid)?;

    for (tile, color) in output_grid.iter().zip(&colors) {
        let Some(color) = color else { continue };
        for y in tile.row_start..tile.row_end {
            for x in tile.col_start..tile.col_end {
                destination.put_pixel(x, y, *color);
            }
        }
    }

    Ok(())
}

/// Average color for one (input, output) tile pair.
///
/// An empty output tile has nothing to paint, so its input is never
/// sampled; this keeps degenerate grids (more rows/cols than pixels)
/// renderable end to end.
fn tile_color(source: &RgbaImage, input: Tile, output: Tile) -> MosaicResult<Option<Rgba<u8>>> {
    if output.is_empty() {
        return Ok(None);
    }
    region_average(source, input).map(Some)
}

fn average_pass(
    source: &RgbaImage,
    input_grid: &[Tile],
    output_grid: &[Tile],
) -> MosaicResult<Vec<Option<Rgba<u8>>>> {
    let source_pixels = source.width() as u64 * source.height() as u64;

    if source_pixels >= PARALLEL_THRESHOLD {
        debug!(tiles = input_grid.len(), "parallel averaging pass");
        input_grid
            .par_iter()
            .zip(output_grid.par_iter())
            .map(|(input, output)| tile_color(source, *input, *output))
            .collect()
    } else {
        input_grid
            .iter()
            .zip(output_grid.iter())
            .map(|(input, output)| tile_color(source, *input, *output))
            .collect()
    }
}
