//! Concurrent batch rendering across (file, mode) pairs.

use std::path::PathBuf;

use image::RgbaImage;
use tokio::sync::mpsc;
use tracing::{info, warn};

use mosaic_common::{output_path, partition, MosaicError, MosaicResult, RenderMode, SizingConfig};
use renderer::{render_grid, render_palette};

use crate::codec;
use crate::config::Config;

/// One unit of work: a single (source path, render mode) pair.
#[derive(Debug, Clone)]
struct RenderJob {
    path: PathBuf,
    mode: RenderMode,
    sizing: SizingConfig,
}

/// Posted exactly once by every unit, success or failure.
#[derive(Debug)]
struct JobOutcome {
    path: PathBuf,
    mode: RenderMode,
    result: MosaicResult<PathBuf>,
}

/// Render every (input file, mode) pair concurrently.
///
/// Each pair becomes one independent blocking task that decodes, tiles,
/// renders and encodes on its own; no state is shared between units. All
/// tasks launch eagerly, then post exactly one outcome on a channel sized
/// for the whole batch, and the drain loop waits for every outcome before
/// returning. A failed unit never aborts its siblings; the returned list
/// carries every failure in completion order.
pub async fn process_batch(config: Config) -> Vec<MosaicError> {
    let jobs: Vec<RenderJob> = config
        .input_files
        .iter()
        .flat_map(|path| {
            config.modes.iter().map(|mode| RenderJob {
                path: path.clone(),
                mode: *mode,
                sizing: config.sizing,
            })
        })
        .collect();

    let total = jobs.len();
    if total == 0 {
        return Vec::new();
    }

    let (tx, mut rx) = mpsc::channel(total);
    for job in jobs {
        let tx = tx.clone();
        tokio::task::spawn_blocking(move || {
            // The channel holds the whole batch, so this send never blocks.
            let _ = tx.blocking_send(job.run());
        });
    }
    drop(tx);

    let mut errors = Vec::new();
    for completed in 1..=total {
        let Some(outcome) = rx.recv().await else { break };
        match outcome.result {
            Ok(output) => info!(
                mode = %outcome.mode,
                path = %outcome.path.display(),
                output = %output.display(),
                completed,
                total,
                "render complete"
            ),
            Err(e) => {
                warn!(
                    mode = %outcome.mode,
                    path = %outcome.path.display(),
                    error = %e,
                    completed,
                    total,
                    "render failed"
                );
                errors.push(e);
            }
        }
    }

    errors
}

impl RenderJob {
    /// Run the unit to completion; every failure path ends in an outcome.
    fn run(self) -> JobOutcome {
        let result = self.execute();
        JobOutcome {
            path: self.path,
            mode: self.mode,
            result,
        }
    }

    /// Decode, tile, render and encode one (path, mode) pair.
    ///
    /// Only palette mode honors a configured output resolution; grid mode
    /// always renders at the source dimensions.
    fn execute(&self) -> MosaicResult<PathBuf> {
        let source = codec::read_image(&self.path)?;
        let (width, height) = source.dimensions();
        let rows = self.sizing.grid_rows;
        let cols = self.sizing.grid_cols;
        let input_grid = partition(width, height, rows, cols);

        let destination = match self.mode {
            RenderMode::Grid => {
                let mut destination = RgbaImage::new(width, height);
                render_grid(&source, &input_grid, &mut destination);
                destination
            }
            RenderMode::Palette => {
                let (out_width, out_height) =
                    self.sizing.output_override().unwrap_or((width, height));
                let output_grid = if (out_width, out_height) == (width, height) {
                    input_grid.clone()
                } else {
                    partition(out_width, out_height, rows, cols)
                };
                let mut destination = RgbaImage::new(out_width, out_height);
                render_palette(&source, &input_grid, &mut destination, &output_grid)?;
                destination
            }
        };

        let output = output_path(&self.path, self.mode);
        codec::write_image(&destination, &output)?;
        Ok(output)
    }
}
