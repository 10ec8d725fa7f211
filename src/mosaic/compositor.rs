//! Per-cell tile selection and pasting

use crate::io::configuration::RESAMPLING_FILTER;
use crate::io::error::{Result, computation_error};
use crate::io::progress::{ProgressScope, ProgressSink};
use crate::math::vector::Vector2;
use crate::mosaic::geometry::MosaicGeometry;
use crate::palette::builder::Palette;
use image::{RgbImage, imageops};
use log::info;

/// Label shown while cells are filled
pub const COMPOSITING_LABEL: &str = "Generating mosaic";

/// Fills an output canvas with palette tiles
#[derive(Debug, Clone, Copy)]
pub struct Compositor<'a> {
    palette: &'a Palette,
    tile_edge: u32,
    compression_rate: f64,
}

impl<'a> Compositor<'a> {
    /// Compositor drawing from `palette`
    ///
    /// Palette tiles are expected to be `tile_edge` pixels square.
    pub const fn new(palette: &'a Palette, tile_edge: u32, compression_rate: f64) -> Self {
        Self {
            palette,
            tile_edge,
            compression_rate,
        }
    }

    /// Sizes this compositor would use for `source`
    ///
    /// # Errors
    ///
    /// Propagates size arithmetic failures from [`MosaicGeometry::new`]
    pub fn geometry(&self, source: &RgbImage) -> Result<MosaicGeometry> {
        let (width, height) = source.dimensions();
        MosaicGeometry::new(
            Vector2::new(width, height),
            self.tile_edge,
            self.compression_rate,
        )
    }

    /// Build the mosaic for `source`
    ///
    /// The source is downsampled to the grid size, then every cell is replaced
    /// by the tile whose mean color is closest to that cell's pixel. Tiles that
    /// overhang the canvas edge are clipped. A grid with a zero-length axis
    /// yields a blank canvas.
    ///
    /// # Errors
    ///
    /// Returns an error if the sizes cannot be derived or a cell has no
    /// matching tile
    pub fn compose(&self, source: &RgbImage, progress: &mut dyn ProgressSink) -> Result<RgbImage> {
        let geometry = self.geometry(source)?;
        let mut canvas = RgbImage::new(geometry.canvas.x, geometry.canvas.y);
        info!(
            "Compositing {}x{} cells onto a {}x{} canvas",
            geometry.grid.x, geometry.grid.y, geometry.canvas.x, geometry.canvas.y
        );

        if geometry.is_empty() {
            return Ok(canvas);
        }

        let downsampled =
            imageops::resize(source, geometry.grid.x, geometry.grid.y, RESAMPLING_FILTER);

        let mut scope = ProgressScope::start(progress, COMPOSITING_LABEL, geometry.cell_count());
        for cell in geometry.cells() {
            let pixel = downsampled
                .get_pixel_checked(cell.x, cell.y)
                .ok_or_else(|| computation_error("cell sampling", &format!("{cell} outside grid")))?;
            let tile = self
                .palette
                .closest_tile(pixel.0)
                .ok_or_else(|| computation_error("tile lookup", &format!("no tile for {cell}")))?;

            let origin = geometry.cell_origin(cell);
            imageops::replace(&mut canvas, tile, origin.x, origin.y);
            scope.advance();
        }

        Ok(canvas)
    }
}
