//! Average color of a rectangular image region.

use image::{Rgba, RgbaImage};
use mosaic_common::{MosaicError, MosaicResult, Tile};

/// Compute the mean color of `tile` within `source`.
///
/// Channel sums use u64 accumulators, so no realistic image size can
/// overflow; each channel mean truncates (integer division). The result
/// is always fully opaque.
///
/// The tile must lie within the source bounds. A zero-area tile yields
/// `MosaicError::DegenerateTile` rather than dividing by zero.
pub fn region_average(source: &RgbaImage, tile: Tile) -> MosaicResult<Rgba<u8>> {
    let pixels = tile.area();
    if pixels == 0 {
        return Err(MosaicError::DegenerateTile { tile });
    }

    let mut r_total: u64 = 0;
    let mut g_total: u64 = 0;
    let mut b_total: u64 = 0;
    for y in tile.row_start..tile.row_end {
        for x in tile.col_start..tile.col_end {
            let Rgba([r, g, b, _]) = *source.get_pixel(x, y);
            r_total += r as u64;
            g_total += g as u64;
            b_total += b as u64;
        }
    }

    Ok(Rgba([
        (r_total / pixels) as u8,
        (g_total / pixels) as u8,
        (b_total / pixels) as u8,
        255,
    ]))
}
