//! Batch configuration assembled from command-line arguments.
//!
//! Validation collects every problem before the process exits, so a user
//! with three mistakes sees all three at once.

use std::path::{Path, PathBuf};
use std::str::FromStr;

use clap::Parser;
use thiserror::Error;
use walkdir::WalkDir;

use mosaic_common::{MosaicError, RenderMode, SizingConfig};

/// File extensions accepted when scanning directories.
const IMAGE_EXTENSIONS: [&str; 3] = ["jpg", "jpeg", "png"];

#[derive(Parser, Debug)]
#[command(name = "processor")]
#[command(about = "Batch image mosaic processor")]
pub struct Args {
    /// Input image files
    #[arg(short, long = "input", num_args = 1..)]
    pub inputs: Vec<PathBuf>,

    /// Directories scanned recursively for image files (jpg, jpeg, png)
    #[arg(short, long = "dir")]
    pub dirs: Vec<PathBuf>,

    /// Tile grid as ROWSxCOLS; also accepts ROWS*COLS or two values
    #[arg(short, long, num_args = 1..=2, default_value = "8x8")]
    pub grid: Vec<String>,

    /// Output resolution for palette mode as WIDTHxHEIGHT (0x0 inherits the source)
    #[arg(short, long, num_args = 1..=2)]
    pub resolution: Vec<String>,

    /// Render modes to produce (grid, palette); default: all modes
    #[arg(short, long = "mode")]
    pub modes: Vec<String>,

    /// Log level
    #[arg(long, default_value = "info")]
    pub log_level: String,
}

/// A problem found while assembling the configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("not enough input files to process; pass --input <FILE>... or --dir <DIR>...")]
    NoInputFiles,

    #[error("invalid dimension pair '{value}': {reason}; acceptable formats: 8x8, 8*8, \"8 8\"")]
    InvalidDimensions { value: String, reason: String },

    #[error("number of grid rows and columns must be >= 1, got {rows}x{cols}")]
    InvalidGrid { rows: u32, cols: u32 },

    #[error(transparent)]
    Mode(#[from] MosaicError),

    #[error("failed to scan directory '{path}': {message}")]
    DirWalk { path: String, message: String },
}

/// Validated batch configuration.
#[derive(Debug, Clone)]
pub struct Config {
    pub input_files: Vec<PathBuf>,
    pub sizing: SizingConfig,
    pub modes: Vec<RenderMode>,
}

impl Config {
    /// Build and validate a configuration, collecting every error.
    pub fn from_args(args: &Args) -> Result<Config, Vec<ConfigError>> {
        let mut errors = Vec::new();
        let defaults = SizingConfig::default();

        let mut input_files = args.inputs.clone();
        for dir in &args.dirs {
            match scan_directory(dir) {
                Ok(mut files) => input_files.append(&mut files),
                Err(e) => errors.push(e),
            }
        }
        if input_files.is_empty() {
            errors.push(ConfigError::NoInputFiles);
        }

        let (grid_rows, grid_cols) = match parse_dimensions(&args.grid.join(" ")) {
            Ok(pair) => pair,
            Err(e) => {
                errors.push(e);
                (defaults.grid_rows, defaults.grid_cols)
            }
        };
        if grid_rows < 1 || grid_cols < 1 {
            errors.push(ConfigError::InvalidGrid {
                rows: grid_rows,
                cols: grid_cols,
            });
        }

        let (output_width, output_height) = if args.resolution.is_empty() {
            (0, 0)
        } else {
            match parse_dimensions(&args.resolution.join(" ")) {
                Ok(pair) => pair,
                Err(e) => {
                    errors.push(e);
                    (0, 0)
                }
            }
        };

        let modes = if args.modes.is_empty() {
            RenderMode::ALL.to_vec()
        } else {
            let mut modes = Vec::with_capacity(args.modes.len());
            for name in &args.modes {
                match RenderMode::from_str(name) {
                    Ok(mode) => {
                        if !modes.contains(&mode) {
                            modes.push(mode);
                        }
                    }
                    Err(e) => errors.push(e.into()),
                }
            }
            modes
        };

        if !errors.is_empty() {
            return Err(errors);
        }

        Ok(Config {
            input_files,
            sizing: SizingConfig {
                grid_rows,
                grid_cols,
                output_width,
                output_height,
            },
            modes,
        })
    }
}

/// Parse a `ROWSxCOLS` / `WIDTHxHEIGHT` pair.
///
/// `x`, `*` and whitespace all separate the two numbers, so `8x8`, `8*8`
/// and `"8 8"` are equivalent.
fn parse_dimensions(value: &str) -> Result<(u32, u32), ConfigError> {
    let uniform: String = value
        .trim()
        .chars()
        .map(|c| if c == 'x' || c == '*' { ' ' } else { c })
        .collect();

    let parts: Vec<&str> = uniform.split_whitespace().collect();
    if parts.len() != 2 {
        return Err(ConfigError::InvalidDimensions {
            value: value.to_string(),
            reason: format!("expected two numbers, got {}", parts.len()),
        });
    }

    let mut numbers = [0u32; 2];
    for (slot, part) in numbers.iter_mut().zip(&parts) {
        *slot = part
            .parse::<u32>()
            .map_err(|_| ConfigError::InvalidDimensions {
                value: value.to_string(),
                reason: format!("can't convert '{}' to a number", part),
            })?;
    }

    Ok((numbers[0], numbers[1]))
}

/// Recursively collect image files (by extension) under `dir`.
fn scan_directory(dir: &Path) -> Result<Vec<PathBuf>, ConfigError> {
    let mut files = Vec::new();
    for entry in WalkDir::new(dir) {
        let entry = entry.map_err(|e| ConfigError::DirWalk {
            path: dir.display().to_string(),
            message: e.to_string(),
        })?;
        if entry.file_type().is_file() && is_image_file(entry.path()) {
            files.push(entry.into_path());
        }
    }
    Ok(files)
}

fn is_image_file(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| IMAGE_EXTENSIONS.contains(&ext.to_ascii_lowercase().as_str()))
        .unwrap_or(false)
}
