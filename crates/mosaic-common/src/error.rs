//! Error types for mosaic processing.

use thiserror::Error;

use crate::tile::Tile;

/// Result type alias using MosaicError.
pub type MosaicResult<T> = Result<T, MosaicError>;

/// Primary error type for mosaic operations.
///
/// Every error stays local to the (path, mode) unit it occurred in; the
/// batch coordinator aggregates them without aborting sibling units.
#[derive(Debug, Error)]
pub enum MosaicError {
    /// Source image unreadable or in an unrecognized format.
    #[error("failed to decode '{path}': {message}")]
    Decode { path: String, message: String },

    /// Output image could not be encoded or written.
    #[error("failed to encode '{path}': {message}")]
    Encode { path: String, message: String },

    /// Mode name outside the supported enumeration.
    #[error("unsupported render mode '{0}', expected one of [grid | palette]")]
    UnsupportedMode(String),

    /// A zero-area tile reached the region averager.
    #[error("cannot average zero-area tile {tile:?}")]
    DegenerateTile { tile: Tile },
}
