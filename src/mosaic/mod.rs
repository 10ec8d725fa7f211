//! Mosaic assembly from a palette and a source image

/// Tile pasting onto the output canvas
pub mod compositor;
/// Grid and canvas size arithmetic
pub mod geometry;
/// Sequenced palette, compositing and save stages
pub mod pipeline;

pub use compositor::Compositor;
pub use geometry::MosaicGeometry;
pub use pipeline::MosaicPipeline;
