//! Pixel rendering for image mosaics.
//!
//! Implements the two render modes over `image::RgbaImage` buffers:
//! - Palette: every tile replaced by its average color
//! - Grid: source pixels with separator lines at interior tile seams

pub mod average;
pub mod grid;
pub mod palette;

pub use average::region_average;
pub use grid::render_grid;
pub use palette::render_palette;
