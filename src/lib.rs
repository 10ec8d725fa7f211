//! Photo-mosaic generation from a set of tile images
//!
//! Tiles are reduced to their mean color and indexed in a k-d tree. The source
//! image is downsampled to one pixel per grid cell, and each cell is replaced
//! by the tile whose mean color is nearest to that pixel.

#![forbid(unsafe_code)]

/// Configuration, errors, image files, progress and command line
pub mod io;
/// Two-component vector arithmetic
pub mod math;
/// Grid geometry, compositing and the end-to-end pipeline
pub mod mosaic;
/// Tile loading, mean colors and nearest-color lookup
pub mod palette;

pub use io::error::{MosaicError, Result};
