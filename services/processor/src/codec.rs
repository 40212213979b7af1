//! Image decode/encode at the filesystem boundary.

use std::path::Path;

use image::{ImageFormat, RgbaImage};
use mosaic_common::{MosaicError, MosaicResult};

/// Decode a source image into RGBA.
///
/// The format is sniffed by the `image` crate; any failure to open or
/// decode becomes `MosaicError::Decode` for the calling unit.
pub fn read_image(path: &Path) -> MosaicResult<RgbaImage> {
    let img = image::open(path).map_err(|e| MosaicError::Decode {
        path: path.display().to_string(),
        message: e.to_string(),
    })?;
    Ok(img.to_rgba8())
}

/// Encode an image to disk.
///
/// The derived output path keeps the source extension, but the bytes are
/// always lossless PNG, whatever the extension says.
pub fn write_image(image: &RgbaImage, path: &Path) -> MosaicResult<()> {
    image
        .save_with_format(path, ImageFormat::Png)
        .map_err(|e| MosaicError::Encode {
            path: path.display().to_string(),
            message: e.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgba;

    const PNG_SIGNATURE: [u8; 8] = [137, 80, 78, 71, 13, 10, 26, 10];

    #[test]
    fn test_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tiny.png");

        let img = RgbaImage::from_pixel(3, 2, Rgba([9, 8, 7, 255]));
        write_image(&img, &path).unwrap();

        let back = read_image(&path).unwrap();
        assert_eq!(back.dimensions(), (3, 2));
        assert_eq!(*back.get_pixel(2, 1), Rgba([9, 8, 7, 255]));
    }

    #[test]
    fn test_output_is_png_even_with_jpg_extension() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("photo-palette.jpg");

        let img = RgbaImage::from_pixel(2, 2, Rgba([1, 2, 3, 255]));
        write_image(&img, &path).unwrap();

        let bytes = std::fs::read(&path).unwrap();
        assert_eq!(&bytes[0..8], &PNG_SIGNATURE);
    }

    #[test]
    fn test_unreadable_source_is_a_decode_error() {
        let err = read_image(Path::new("/nonexistent/missing.png")).unwrap_err();
        assert!(matches!(err, MosaicError::Decode { .. }));
    }

    #[test]
    fn test_non_image_content_is_a_decode_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("not-an-image.png");
        std::fs::write(&path, b"plain text, not pixels").unwrap();

        let err = read_image(&path).unwrap_err();
        assert!(matches!(err, MosaicError::Decode { .. }));
    }
}
