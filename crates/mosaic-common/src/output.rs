//! Derived output path naming.

use std::path::{Path, PathBuf};

use crate::mode::RenderMode;

/// Derive the output path for a (source path, mode) pair.
///
/// Inserts `-<mode>` before the final extension: `photo.jpg` becomes
/// `photo-palette.jpg`. Only the last dot separates the extension, so
/// multi-dot stems are kept whole, and directory components are preserved.
/// A source without an extension gets the suffix appended to its name.
pub fn output_path(source: &Path, mode: RenderMode) -> PathBuf {
    let stem = source
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();

    let name = match source.extension() {
        Some(ext) => format!("{}-{}.{}", stem, mode.suffix(), ext.to_string_lossy()),
        None => format!("{}-{}", stem, mode.suffix()),
    };

    source.with_file_name(name)
}
