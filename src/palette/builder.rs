//! Tile set loading into a searchable palette

use crate::io::error::{MosaicError, Result};
use crate::io::progress::{ProgressScope, ProgressSink};
use crate::palette::index::ColorIndex;
use crate::palette::tile::{MeanColor, Tile};
use image::RgbImage;
use log::{debug, info, warn};
use std::path::{Path, PathBuf};

/// Label shown while tiles are read
pub const LOADING_LABEL: &str = "Loading tile set";

/// Loaded tiles, their mean colors and the index over those colors
///
/// `tiles[i]` is always described by `colors[i]`; the index answers with
/// positions into both.
#[derive(Debug)]
pub struct Palette {
    tiles: Vec<RgbImage>,
    index: ColorIndex,
    skipped: usize,
}

impl Palette {
    /// Assemble a palette from decoded tiles
    ///
    /// # Errors
    ///
    /// Returns [`MosaicError::EmptyPalette`] if `tiles` is empty
    pub fn from_tiles(tiles: Vec<Tile>, skipped: usize, source: &Path) -> Result<Self> {
        if tiles.is_empty() {
            return Err(MosaicError::EmptyPalette {
                tile_set: source.to_path_buf(),
                skipped,
            });
        }

        let (images, colors): (Vec<RgbImage>, Vec<MeanColor>) =
            tiles.into_iter().map(Tile::into_parts).unzip();

        Ok(Self {
            tiles: images,
            index: ColorIndex::new(&colors),
            skipped,
        })
    }

    /// Tile rasters in load order
    pub fn tiles(&self) -> &[RgbImage] {
        &self.tiles
    }

    /// Mean colors, parallel to [`Palette::tiles`]
    pub fn colors(&self) -> &[MeanColor] {
        self.index.colors()
    }

    /// Index over the mean colors
    pub const fn index(&self) -> &ColorIndex {
        &self.index
    }

    /// Number of tiles
    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    /// Always false for a constructed palette
    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    /// Directory entries that failed to decode
    pub const fn skipped(&self) -> usize {
        self.skipped
    }

    /// Tile whose mean color is closest to an RGB pixel
    pub fn closest_tile(&self, rgb: [u8; 3]) -> Option<&RgbImage> {
        self.index
            .nearest_rgb(rgb)
            .and_then(|entry| self.tiles.get(entry))
    }
}

/// Reads every file of a tile set directory into a [`Palette`]
#[derive(Debug, Clone, Copy)]
pub struct PaletteBuilder {
    tile_edge: u32,
}

impl PaletteBuilder {
    /// Builder producing `tile_edge` x `tile_edge` tiles
    pub const fn new(tile_edge: u32) -> Self {
        Self { tile_edge }
    }

    /// Load every decodable image in `directory`
    ///
    /// Entries that fail to decode are skipped and counted. Progress advances
    /// once per entry whether it loaded or not.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The directory cannot be listed
    /// - Not a single entry decodes ([`MosaicError::EmptyPalette`])
    pub fn build(&self, directory: &Path, progress: &mut dyn ProgressSink) -> Result<Palette> {
        let entries = list_tile_files(directory)?;
        info!(
            "Loading {} candidate tiles from '{}'",
            entries.len(),
            directory.display()
        );

        let mut tiles = Vec::with_capacity(entries.len());
        let mut skipped = 0;
        {
            let mut scope = ProgressScope::start(progress, LOADING_LABEL, entries.len());
            for path in &entries {
                match Tile::load(path, self.tile_edge) {
                    Ok(tile) => tiles.push(tile),
                    Err(error) => {
                        debug!("Skipping tile: {error}");
                        skipped += 1;
                    }
                }
                scope.advance();
            }
        }

        if skipped > 0 {
            warn!(
                "Skipped {skipped} of {} entries in '{}'",
                entries.len(),
                directory.display()
            );
        }

        Palette::from_tiles(tiles, skipped, directory)
    }
}

/// Directory entries sorted by path
///
/// # Errors
///
/// Returns [`MosaicError::FileSystem`] if the directory or one of its entries
/// cannot be read
pub fn list_tile_files(directory: &Path) -> Result<Vec<PathBuf>> {
    let read_error = |source| MosaicError::FileSystem {
        path: directory.to_path_buf(),
        operation: "list tile set",
        source,
    };

    let mut files = Vec::new();
    for entry in std::fs::read_dir(directory).map_err(read_error)? {
        files.push(entry.map_err(read_error)?.path());
    }
    files.sort();
    Ok(files)
}
