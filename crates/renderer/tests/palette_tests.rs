//! Tests for palette-mosaic rendering.

use image::{Rgba, RgbaImage};
use mosaic_common::{partition, Tile};
use renderer::{region_average, render_palette};

fn checkerboard(width: u32, height: u32, a: Rgba<u8>, b: Rgba<u8>) -> RgbaImage {
    let mut img = RgbaImage::new(width, height);
    for (x, y, px) in img.enumerate_pixels_mut() {
        *px = if (x + y) % 2 == 0 { a } else { b };
    }
    img
}

// ============================================================================
// Same-size rendering
// ============================================================================

#[test]
fn test_every_output_tile_is_flood_filled() {
    let source = checkerboard(12, 12, Rgba([255, 0, 0, 255]), Rgba([0, 0, 255, 255]));
    let grid = partition(12, 12, 3, 3);

    let mut dst = RgbaImage::new(12, 12);
    render_palette(&source, &grid, &mut dst, &grid).unwrap();

    for tile in &grid {
        let expected = region_average(&source, *tile).unwrap();
        for y in tile.row_start..tile.row_end {
            for x in tile.col_start..tile.col_end {
                assert_eq!(*dst.get_pixel(x, y), expected, "at ({}, {})", x, y);
            }
        }
    }
}

#[test]
fn test_output_is_always_opaque() {
    let mut source = RgbaImage::new(6, 6);
    for (x, _, px) in source.enumerate_pixels_mut() {
        *px = Rgba([120, 130, 140, (x * 40) as u8]);
    }
    let grid = partition(6, 6, 2, 2);

    let mut dst = RgbaImage::new(6, 6);
    render_palette(&source, &grid, &mut dst, &grid).unwrap();

    assert!(dst.pixels().all(|px| px.0[3] == 255));
}

#[test]
fn test_rendering_is_idempotent() {
    let source = checkerboard(20, 14, Rgba([10, 200, 30, 255]), Rgba([90, 40, 160, 255]));
    let grid = partition(20, 14, 4, 5);

    let mut first = RgbaImage::new(20, 14);
    render_palette(&source, &grid, &mut first, &grid).unwrap();

    let mut second = RgbaImage::new(20, 14);
    render_palette(&source, &grid, &mut second, &grid).unwrap();

    assert_eq!(first.as_raw(), second.as_raw());
}

// ============================================================================
// Resolution remapping
// ============================================================================

#[test]
fn test_resized_output_keeps_source_averages() {
    // Left half red, right half blue; averaging samples the 8x8 source
    // while painting a 4x2 destination.
    let mut source = RgbaImage::new(8, 8);
    for (x, _, px) in source.enumerate_pixels_mut() {
        *px = if x < 4 {
            Rgba([255, 0, 0, 255])
        } else {
            Rgba([0, 0, 255, 255])
        };
    }

    let input_grid = partition(8, 8, 1, 2);
    let output_grid = partition(4, 2, 1, 2);

    let mut dst = RgbaImage::new(4, 2);
    render_palette(&source, &input_grid, &mut dst, &output_grid).unwrap();

    for y in 0..2 {
        for x in 0..2 {
            assert_eq!(*dst.get_pixel(x, y), Rgba([255, 0, 0, 255]));
            assert_eq!(*dst.get_pixel(x + 2, y), Rgba([0, 0, 255, 255]));
        }
    }
}

#[test]
fn test_upscaled_output_covers_every_pixel() {
    let source = checkerboard(5, 5, Rgba([0, 0, 0, 255]), Rgba([255, 255, 255, 255]));
    let input_grid = partition(5, 5, 2, 2);
    let output_grid = partition(50, 30, 2, 2);

    let mut dst = RgbaImage::new(50, 30);
    render_palette(&source, &input_grid, &mut dst, &output_grid).unwrap();

    // The zero-initialized buffer is transparent; every pixel must have
    // been painted opaque.
    assert!(dst.pixels().all(|px| px.0[3] == 255));
}

// ============================================================================
// Degenerate tiles
// ============================================================================

#[test]
fn test_empty_input_tile_with_painted_output_fails() {
    let source = RgbaImage::from_pixel(4, 4, Rgba([1, 2, 3, 255]));

    // Pair a zero-area input tile with a paintable output tile.
    let input_grid = [Tile::new(0, 0, 0, 0)];
    let output_grid = [Tile::new(0, 0, 4, 4)];

    let mut dst = RgbaImage::new(4, 4);
    let err = render_palette(&source, &input_grid, &mut dst, &output_grid).unwrap_err();
    assert!(matches!(
        err,
        mosaic_common::MosaicError::DegenerateTile { .. }
    ));
}
