//! Command-line interface for generating a mosaic from the current configuration

use crate::io::configuration::{
    DEFAULT_COMPRESSION_RATE, DEFAULT_INPUT_DIR, DEFAULT_OUTPUT_DIR, DEFAULT_TILE_EDGE_LENGTH,
    DEFAULT_TILE_SET_ROOT, MosaicConfig,
};
use crate::io::error::Result;
use crate::io::progress::{NoProgress, ProgressSink, TerminalProgress};
use crate::mosaic::pipeline::MosaicPipeline;
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "tessera")]
#[command(
    author,
    version,
    about = "Build a photo-mosaic out of a set of tile images"
)]
/// Command-line arguments for a mosaic run
pub struct Cli {
    /// Source image file name inside the input directory
    #[arg(value_name = "IMAGE")]
    pub source_image_name: String,

    /// Tile set subdirectory inside the tile set root
    #[arg(short, long)]
    pub tile_set: String,

    /// Pixel width and height of every tile
    #[arg(short = 'e', long, default_value_t = DEFAULT_TILE_EDGE_LENGTH)]
    pub tile_edge: u32,

    /// Divisor applied to the source dimensions before gridding
    #[arg(short, long, default_value_t = DEFAULT_COMPRESSION_RATE)]
    pub compression: f64,

    /// Directory containing one subdirectory per tile set
    #[arg(long, default_value = DEFAULT_TILE_SET_ROOT)]
    pub tile_root: PathBuf,

    /// Directory the source image is read from
    #[arg(long, default_value = DEFAULT_INPUT_DIR)]
    pub input_dir: PathBuf,

    /// Directory the mosaic is written to
    #[arg(long, default_value = DEFAULT_OUTPUT_DIR)]
    pub output_dir: PathBuf,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,
}

impl Cli {
    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }

    /// Run configuration described by these arguments
    pub fn to_config(&self) -> MosaicConfig {
        MosaicConfig {
            tile_set_root: self.tile_root.clone(),
            input_dir: self.input_dir.clone(),
            output_dir: self.output_dir.clone(),
            ..MosaicConfig::new(
                self.source_image_name.clone(),
                self.tile_set.clone(),
                self.tile_edge,
                self.compression,
            )
        }
    }
}

/// Drives one mosaic run with the reporter chosen on the command line
pub struct MosaicRunner {
    pipeline: MosaicPipeline,
    progress: Box<dyn ProgressSink>,
}

impl MosaicRunner {
    /// Validate the arguments and prepare the run
    ///
    /// # Errors
    ///
    /// Returns [`crate::MosaicError::Configuration`] for any invalid setting
    pub fn new(cli: &Cli) -> Result<Self> {
        let pipeline = MosaicPipeline::new(cli.to_config())?;
        let progress: Box<dyn ProgressSink> = if cli.should_show_progress() {
            Box::new(TerminalProgress::new())
        } else {
            Box::new(NoProgress)
        };

        Ok(Self { pipeline, progress })
    }

    /// Generate and save the mosaic, returning the written path
    ///
    /// # Errors
    ///
    /// Returns the failing stage's error, tagged with its phase
    pub fn run(&mut self) -> Result<PathBuf> {
        self.pipeline.run(self.progress.as_mut())
    }
}
