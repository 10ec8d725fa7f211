//! Tile palette construction and color search
//!
//! This module contains:
//! - Per-tile decoding and mean color extraction
//! - The palette builder that loads a whole tile set
//! - The k-d tree color index

/// Tile set loading into a palette
pub mod builder;
/// Nearest mean color index
pub mod index;
/// Single tile loading and mean color
pub mod tile;

pub use builder::{Palette, PaletteBuilder};
pub use index::ColorIndex;
pub use tile::{MeanColor, Tile};
