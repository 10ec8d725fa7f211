//! Source image decoding and mosaic persistence

use crate::io::error::{MosaicError, Result};
use image::RgbImage;
use std::path::Path;

/// Decode the source image as 8-bit RGB
///
/// # Errors
///
/// Returns [`MosaicError::ImageLoad`] if the file cannot be opened or decoded
pub fn load_source_image(path: &Path) -> Result<RgbImage> {
    let image = image::open(path).map_err(|e| MosaicError::ImageLoad {
        path: path.to_path_buf(),
        source: e,
    })?;
    Ok(image.to_rgb8())
}

/// Write the canvas to `output_path`, creating the parent directory if needed
///
/// The format follows the file extension.
///
/// # Errors
///
/// Returns an error if:
/// - The canvas has a zero-length axis ([`MosaicError::InvalidDimensions`])
/// - The parent directory cannot be created
/// - The image cannot be encoded or written
pub fn save_canvas(canvas: &RgbImage, output_path: &Path) -> Result<()> {
    let (width, height) = canvas.dimensions();
    if width == 0 || height == 0 {
        return Err(MosaicError::InvalidDimensions {
            width,
            height,
            reason: "cannot encode an image without pixels".to_string(),
        });
    }

    if let Some(parent) = output_path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| MosaicError::FileSystem {
            path: parent.to_path_buf(),
            operation: "create directory",
            source: e,
        })?;
    }

    canvas
        .save(output_path)
        .map_err(|e| MosaicError::ImageExport {
            path: output_path.to_path_buf(),
            source: e,
        })
}
