//! Grid and canvas size arithmetic
//!
//! The source is divided by the compression rate to get the grid, one cell
//! per output tile. The canvas is `round(source * tile_edge / rate)`, which
//! equals `grid * tile_edge` whenever the rate divides the source evenly.

use crate::io::error::Result;
use crate::math::vector::Vector2;

/// Sizes derived from one source image and run configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MosaicGeometry {
    /// Source image size in pixels
    pub source: Vector2<u32>,
    /// Grid size in cells, also the downsampled image size
    pub grid: Vector2<u32>,
    /// Output canvas size in pixels
    pub canvas: Vector2<u32>,
    /// Pixels per tile side
    pub tile_edge: u32,
}

impl MosaicGeometry {
    /// Derive grid and canvas sizes
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `compression_rate` is zero ([`crate::MosaicError::DivisionByZero`])
    /// - A derived size is negative, NaN or too large for `u32`
    ///   ([`crate::MosaicError::TypeMismatch`])
    pub fn new(source: Vector2<u32>, tile_edge: u32, compression_rate: f64) -> Result<Self> {
        let source_f = source.to_f64();

        let grid = source_f.divide_scalar(compression_rate)?.round_to::<u32>()?;
        let canvas = (source_f * f64::from(tile_edge))
            .divide_scalar(compression_rate)?
            .round_to::<u32>()?;

        Ok(Self {
            source,
            grid,
            canvas,
            tile_edge,
        })
    }

    /// Number of grid cells
    pub const fn cell_count(&self) -> usize {
        self.grid.x as usize * self.grid.y as usize
    }

    /// Whether the grid has a zero-length axis
    pub const fn is_empty(&self) -> bool {
        self.grid.x == 0 || self.grid.y == 0
    }

    /// Pixel offset of the top-left corner of a cell
    pub fn cell_origin(&self, cell: Vector2<u32>) -> Vector2<i64> {
        Vector2::new(i64::from(cell.x), i64::from(cell.y)) * i64::from(self.tile_edge)
    }

    /// Cells in column-major order: `x` on the outer loop, `y` on the inner
    pub fn cells(&self) -> impl Iterator<Item = Vector2<u32>> + use<> {
        let grid = self.grid;
        (0..grid.x).flat_map(move |x| (0..grid.y).map(move |y| Vector2::new(x, y)))
    }
}
