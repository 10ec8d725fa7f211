//! Defaults, fixed settings and the validated run configuration

use crate::io::error::{Result, configuration_error};
use image::imageops::FilterType;
use std::path::PathBuf;

/// Default pixel width and height of every tile
pub const DEFAULT_TILE_EDGE_LENGTH: u32 = 35;

/// Default divisor applied to the source dimensions
pub const DEFAULT_COMPRESSION_RATE: f64 = 2.0;

/// Directory holding one subdirectory per tile set
pub const DEFAULT_TILE_SET_ROOT: &str = "tile_set";

/// Directory the source image is read from
pub const DEFAULT_INPUT_DIR: &str = "input";

/// Directory the mosaic is written to
pub const DEFAULT_OUTPUT_DIR: &str = "output";

// Held constant so repeated runs produce identical output
/// Filter used for tile resizing and source downsampling
pub const RESAMPLING_FILTER: FilterType = FilterType::CatmullRom;

/// Width of progress bars in characters
pub const PROGRESS_BAR_WIDTH: u16 = 50;

/// Settings for one mosaic run
///
/// Built once at startup and handed to each stage by reference.
#[derive(Debug, Clone, PartialEq)]
pub struct MosaicConfig {
    /// File name of the image to convert, relative to `input_dir`
    pub source_image_name: String,
    /// Subdirectory of `tile_set_root` holding the tiles
    pub tile_set_name: String,
    /// Pixels per tile side
    pub tile_edge_length: u32,
    /// Divisor applied to the source dimensions before gridding
    pub compression_rate: f64,
    /// Root of all tile sets
    pub tile_set_root: PathBuf,
    /// Directory containing the source image
    pub input_dir: PathBuf,
    /// Directory receiving the mosaic
    pub output_dir: PathBuf,
}

impl MosaicConfig {
    /// Configuration with the default directory layout
    pub fn new(
        source_image_name: impl Into<String>,
        tile_set_name: impl Into<String>,
        tile_edge_length: u32,
        compression_rate: f64,
    ) -> Self {
        Self {
            source_image_name: source_image_name.into(),
            tile_set_name: tile_set_name.into(),
            tile_edge_length,
            compression_rate,
            tile_set_root: PathBuf::from(DEFAULT_TILE_SET_ROOT),
            input_dir: PathBuf::from(DEFAULT_INPUT_DIR),
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
        }
    }

    /// Check every setting before any file is touched
    ///
    /// # Errors
    ///
    /// Returns [`crate::MosaicError::Configuration`] if:
    /// - The source image or tile set name is empty
    /// - The tile edge length is zero
    /// - The compression rate is not a finite positive number
    pub fn validate(&self) -> Result<()> {
        if self.source_image_name.trim().is_empty() {
            return Err(configuration_error(
                "source_image_name",
                &self.source_image_name,
                &"must name a file",
            ));
        }
        if self.tile_set_name.trim().is_empty() {
            return Err(configuration_error(
                "tile_set_name",
                &self.tile_set_name,
                &"must name a tile set directory",
            ));
        }
        if self.tile_edge_length == 0 {
            return Err(configuration_error(
                "tile_edge_length",
                &self.tile_edge_length,
                &"must be positive",
            ));
        }
        if !self.compression_rate.is_finite() || self.compression_rate <= 0.0 {
            return Err(configuration_error(
                "compression_rate",
                &self.compression_rate,
                &"must be a finite number greater than zero",
            ));
        }
        Ok(())
    }

    /// Directory of the selected tile set
    pub fn tile_set_path(&self) -> PathBuf {
        self.tile_set_root.join(&self.tile_set_name)
    }

    /// Location of the source image
    pub fn source_path(&self) -> PathBuf {
        self.input_dir.join(&self.source_image_name)
    }

    /// Location the mosaic is written to, under the source's file name
    pub fn output_path(&self) -> PathBuf {
        self.output_dir.join(&self.source_image_name)
    }
}
