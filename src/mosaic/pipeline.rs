//! End-to-end mosaic generation for one configuration
//!
//! Stages run strictly in sequence: the palette is fully loaded and indexed
//! before the source is decoded, and the canvas is persisted once at the end.
//! Every error leaving a stage is tagged with its [`Phase`].

use crate::io::configuration::MosaicConfig;
use crate::io::error::{Phase, Result, WithPhase};
use crate::io::image::{load_source_image, save_canvas};
use crate::io::progress::ProgressSink;
use crate::mosaic::compositor::Compositor;
use crate::palette::builder::{Palette, PaletteBuilder};
use image::RgbImage;
use log::info;
use std::path::PathBuf;

/// Runs palette loading, compositing and saving for a validated configuration
#[derive(Debug, Clone)]
pub struct MosaicPipeline {
    config: MosaicConfig,
}

impl MosaicPipeline {
    /// Validate `config` and wrap it
    ///
    /// # Errors
    ///
    /// Returns [`crate::MosaicError::Configuration`] for any invalid setting
    pub fn new(config: MosaicConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Configuration this pipeline runs with
    pub const fn config(&self) -> &MosaicConfig {
        &self.config
    }

    /// Load the configured tile set
    ///
    /// # Errors
    ///
    /// Returns a [`Phase::PaletteLoad`] error if the tile set cannot be listed
    /// or contains no decodable tile
    pub fn load_palette(&self, progress: &mut dyn ProgressSink) -> Result<Palette> {
        PaletteBuilder::new(self.config.tile_edge_length)
            .build(&self.config.tile_set_path(), progress)
            .in_phase(Phase::PaletteLoad)
    }

    /// Decode the source image and composite it from `palette`
    ///
    /// # Errors
    ///
    /// Returns a [`Phase::Compositing`] error if the source cannot be read or
    /// the grid sizes cannot be derived
    pub fn render(&self, palette: &Palette, progress: &mut dyn ProgressSink) -> Result<RgbImage> {
        let source = load_source_image(&self.config.source_path()).in_phase(Phase::Compositing)?;
        Compositor::new(
            palette,
            self.config.tile_edge_length,
            self.config.compression_rate,
        )
        .compose(&source, progress)
        .in_phase(Phase::Compositing)
    }

    /// Generate the mosaic and write it to the output directory
    ///
    /// Returns the path that was written.
    ///
    /// # Errors
    ///
    /// Returns the first failing stage's error, tagged with its phase
    pub fn run(&self, progress: &mut dyn ProgressSink) -> Result<PathBuf> {
        let palette = self.load_palette(progress)?;
        info!("Palette ready with {} tiles", palette.len());

        let canvas = self.render(&palette, progress)?;

        let output_path = self.config.output_path();
        save_canvas(&canvas, &output_path).in_phase(Phase::Save)?;
        info!("Mosaic saved to '{}'", output_path.display());

        Ok(output_path)
    }
}
