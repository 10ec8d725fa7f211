//! Single tile decoding, resizing and mean color extraction

use crate::io::configuration::RESAMPLING_FILTER;
use crate::io::error::{MosaicError, Result};
use image::{RgbImage, imageops};
use ndarray::{Array3, Axis};
use std::path::Path;

/// Representative color of a tile, one averaged value per RGB channel
pub type MeanColor = [f64; 3];

/// Square tile raster paired with its mean color
#[derive(Debug, Clone)]
pub struct Tile {
    image: RgbImage,
    mean: MeanColor,
}

impl Tile {
    /// Wrap an already sized raster and compute its mean color
    pub fn from_image(image: RgbImage) -> Self {
        let mean = mean_color(&image);
        Self { image, mean }
    }

    /// Decode a tile file and resize it to an `edge` x `edge` footprint
    ///
    /// # Errors
    ///
    /// Returns [`MosaicError::TileDecode`] if the file cannot be opened or decoded
    pub fn load<P: AsRef<Path>>(path: P, edge: u32) -> Result<Self> {
        let path = path.as_ref();
        let decoded = image::open(path).map_err(|e| MosaicError::TileDecode {
            path: path.to_path_buf(),
            source: e,
        })?;
        let resized = imageops::resize(&decoded.to_rgb8(), edge, edge, RESAMPLING_FILTER);
        Ok(Self::from_image(resized))
    }

    /// Tile raster
    pub const fn image(&self) -> &RgbImage {
        &self.image
    }

    /// Mean color of the raster
    pub const fn mean(&self) -> MeanColor {
        self.mean
    }

    /// Split into raster and mean color
    pub fn into_parts(self) -> (RgbImage, MeanColor) {
        (self.image, self.mean)
    }
}

/// Average pixel value over both spatial axes
///
/// Rows are averaged first, then columns. An image without pixels averages to black.
pub fn mean_color(image: &RgbImage) -> MeanColor {
    let (width, height) = image.dimensions();
    let samples: Vec<f64> = image.as_raw().iter().map(|&v| f64::from(v)).collect();

    let Ok(pixels) = Array3::from_shape_vec((height as usize, width as usize, 3), samples) else {
        return [0.0; 3];
    };

    pixels
        .mean_axis(Axis(0))
        .and_then(|rows| rows.mean_axis(Axis(0)))
        .map_or([0.0; 3], |channels| {
            let mut mean = [0.0; 3];
            for (slot, value) in mean.iter_mut().zip(channels.iter()) {
                *slot = *value;
            }
            mean
        })
}
