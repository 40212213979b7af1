//! Batch image mosaic processor.
//!
//! Renders every (input file, mode) pair concurrently:
//! - Palette mode replaces each grid tile with its average color
//! - Grid mode overlays separator lines at interior tile seams
//! - One output file per pair, named `<stem>-<mode>.<ext>`

mod codec;
mod config;
mod process;

use std::time::Instant;

use anyhow::Result;
use clap::Parser;
use tracing::{error, info, Level};
use tracing_subscriber::FmtSubscriber;

use config::{Args, Config};

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize tracing
    let level = match args.log_level.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .finish();

    tracing::subscriber::set_global_default(subscriber)?;

    let config = match Config::from_args(&args) {
        Ok(config) => config,
        Err(errors) => {
            for e in &errors {
                error!(error = %e, "configuration error");
            }
            std::process::exit(1);
        }
    };

    info!(
        files = config.input_files.len(),
        modes = config.modes.len(),
        rows = config.sizing.grid_rows,
        cols = config.sizing.grid_cols,
        "starting batch"
    );

    let started = Instant::now();
    let errors = process::process_batch(config).await;
    info!(
        elapsed_secs = started.elapsed().as_secs_f64(),
        "batch complete"
    );

    if !errors.is_empty() {
        for e in &errors {
            error!(error = %e, "image processing error");
        }
        std::process::exit(1);
    }

    Ok(())
}
