//! Unit tests mirroring the src layout, plus fixtures shared between them

#![allow(missing_docs, clippy::unwrap_used, clippy::expect_used, clippy::panic)]


use image::{Rgb, RgbImage};
use std::path::{Path, PathBuf};
use tempfile::TempDir;
use tessera::io::configuration::MosaicConfig;
use tessera::io::progress::ProgressSink;

/// Square image filled with one color
pub fn solid(edge: u32, color: [u8; 3]) -> RgbImage {
    RgbImage::from_pixel(edge, edge, Rgb(color))
}

/// Save `image` as `dir/name`, returning the written path
pub fn save_png(dir: &Path, name: &str, image: &RgbImage) -> PathBuf {
    let path = dir.join(name);
    image.save(&path).expect("fixture image should save");
    path
}

/// Records every progress signal for later assertions
#[derive(Debug, Default)]
pub struct RecordingProgress {
    pub starts: Vec<(String, u64)>,
    pub advances: u64,
    pub finishes: u64,
}

impl ProgressSink for RecordingProgress {
    fn start(&mut self, label: &str, total: u64) {
        self.starts.push((label.to_string(), total));
    }

    fn advance(&mut self) {
        self.advances += 1;
    }

    fn finish(&mut self) {
        self.finishes += 1;
    }
}

/// Temporary `tile_set/<name>`, `input` and `output` layout
pub struct Workspace {
    pub root: TempDir,
    pub config: MosaicConfig,
}

impl Workspace {
    /// Layout with black and white 4-pixel tiles and a 4x2 source image
    ///
    /// The left half of the source is near black, the right half near white.
    pub fn black_and_white() -> Self {
        let root = tempfile::tempdir().expect("temp dir");
        let mut config = MosaicConfig::new("source.png", "mono", 4, 1.0);
        config.tile_set_root = root.path().join("tile_set");
        config.input_dir = root.path().join("input");
        config.output_dir = root.path().join("output");

        let tiles = config.tile_set_path();
        std::fs::create_dir_all(&tiles).expect("tile dir");
        std::fs::create_dir_all(&config.input_dir).expect("input dir");
        save_png(&tiles, "black.png", &solid(4, [0, 0, 0]));
        save_png(&tiles, "white.png", &solid(4, [255, 255, 255]));

        let source = RgbImage::from_fn(4, 2, |x, _| {
            if x < 2 {
                Rgb([12, 8, 10])
            } else {
                Rgb([240, 250, 245])
            }
        });
        save_png(&config.input_dir, "source.png", &source);

        Self { root, config }
    }
}
