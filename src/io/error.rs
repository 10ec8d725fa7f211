//! Error types and phase context for mosaic generation

use std::fmt;
use std::path::PathBuf;

/// Pipeline stage an error surfaced in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Reading the tile set and computing mean colors
    PaletteLoad,
    /// Loading the source image and filling the canvas
    Compositing,
    /// Writing the finished canvas to disk
    Save,
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::PaletteLoad => write!(f, "palette load"),
            Self::Compositing => write!(f, "compositing"),
            Self::Save => write!(f, "save"),
        }
    }
}

/// Main error type for all mosaic operations
#[derive(Debug)]
pub enum MosaicError {
    /// A required setting is missing or out of range
    Configuration {
        /// Name of the offending setting
        setting: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// Failed to load the source image
    ImageLoad {
        /// Path to the image file
        path: PathBuf,
        /// Underlying image loading error
        source: image::ImageError,
    },

    /// A single tile could not be decoded
    ///
    /// Never fatal on its own: the palette builder skips the file and moves on.
    TileDecode {
        /// Path to the tile file
        path: PathBuf,
        /// Underlying decoding error
        source: image::ImageError,
    },

    /// No tile in the set could be decoded
    EmptyPalette {
        /// Directory the tiles were read from
        tile_set: PathBuf,
        /// Number of entries that were skipped
        skipped: usize,
    },

    /// A numeric value could not be represented in the requested type
    TypeMismatch {
        /// Name of the conversion that failed
        operation: &'static str,
        /// Description of the failure
        reason: String,
    },

    /// Vector or scalar division with a zero divisor
    DivisionByZero {
        /// Name of the operation that divided
        operation: &'static str,
    },

    /// Canvas or grid has a zero-length axis where an area is required
    InvalidDimensions {
        /// Width in pixels
        width: u32,
        /// Height in pixels
        height: u32,
        /// Description of what required a non-empty area
        reason: String,
    },

    /// Failed to save the generated mosaic
    ImageExport {
        /// Path where export was attempted
        path: PathBuf,
        /// Underlying image export error
        source: image::ImageError,
    },

    /// General file system operation failure
    FileSystem {
        /// Path involved in the operation
        path: PathBuf,
        /// Description of the operation that failed
        operation: &'static str,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// Computation produced an inconsistent result
    Computation {
        /// Name of the computation that failed
        operation: &'static str,
        /// Description of the failure
        reason: String,
    },

    /// An error tagged with the pipeline phase it came from
    Phase {
        /// Phase that failed
        phase: Phase,
        /// Error raised inside the phase
        source: Box<MosaicError>,
    },
}

impl MosaicError {
    /// Phase the error was tagged with, if any
    pub const fn phase(&self) -> Option<Phase> {
        match self {
            Self::Phase { phase, .. } => Some(*phase),
            _ => None,
        }
    }

    /// Innermost error, with any phase tags removed
    pub fn root(&self) -> &Self {
        match self {
            Self::Phase { source, .. } => source.root(),
            other => other,
        }
    }
}

impl fmt::Display for MosaicError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Configuration {
                setting,
                value,
                reason,
            } => {
                write!(f, "Invalid setting '{setting}' = '{value}': {reason}")
            }
            Self::ImageLoad { path, source } => {
                write!(f, "Failed to load image '{}': {source}", path.display())
            }
            Self::TileDecode { path, source } => {
                write!(f, "Failed to decode tile '{}': {source}", path.display())
            }
            Self::EmptyPalette { tile_set, skipped } => {
                write!(
                    f,
                    "No usable tiles in '{}' ({skipped} entries skipped)",
                    tile_set.display()
                )
            }
            Self::TypeMismatch { operation, reason } => {
                write!(f, "Type mismatch in {operation}: {reason}")
            }
            Self::DivisionByZero { operation } => {
                write!(f, "Division by zero in {operation}")
            }
            Self::InvalidDimensions {
                width,
                height,
                reason,
            } => {
                write!(f, "Invalid dimensions {width}x{height}: {reason}")
            }
            Self::ImageExport { path, source } => {
                write!(
                    f,
                    "Failed to export image to '{}': {source}",
                    path.display()
                )
            }
            Self::FileSystem {
                path,
                operation,
                source,
            } => {
                write!(
                    f,
                    "File system error during {operation} on '{}': {source}",
                    path.display()
                )
            }
            Self::Computation { operation, reason } => {
                write!(f, "Computation error in {operation}: {reason}")
            }
            Self::Phase { phase, source } => {
                write!(f, "{phase} failed: {source}")
            }
        }
    }
}

impl std::error::Error for MosaicError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::ImageLoad { source, .. }
            | Self::TileDecode { source, .. }
            | Self::ImageExport { source, .. } => Some(source),
            Self::FileSystem { source, .. } => Some(source),
            Self::Phase { source, .. } => Some(source.as_ref()),
            _ => None,
        }
    }
}

/// Convenience type alias for mosaic results
pub type Result<T> = std::result::Result<T, MosaicError>;

/// Tags errors with the pipeline phase they escaped from
pub trait WithPhase<T> {
    /// Wrap the error, if any, in [`MosaicError::Phase`]
    ///
    /// An error that already carries a phase keeps its original tag.
    ///
    /// # Errors
    ///
    /// Propagates the original error with the phase applied
    fn in_phase(self, phase: Phase) -> Result<T>;
}

impl<T, E> WithPhase<T> for std::result::Result<T, E>
where
    E: Into<MosaicError>,
{
    fn in_phase(self, phase: Phase) -> Result<T> {
        self.map_err(|e| {
            let error = e.into();
            if error.phase().is_some() {
                error
            } else {
                MosaicError::Phase {
                    phase,
                    source: Box::new(error),
                }
            }
        })
    }
}

impl From<image::ImageError> for MosaicError {
    fn from(err: image::ImageError) -> Self {
        Self::ImageLoad {
            path: PathBuf::from("<unknown>"),
            source: err,
        }
    }
}

impl From<std::io::Error> for MosaicError {
    fn from(err: std::io::Error) -> Self {
        Self::FileSystem {
            path: PathBuf::from("<unknown>"),
            operation: "unknown",
            source: err,
        }
    }
}

/// Create a configuration error
pub fn configuration_error(
    setting: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> MosaicError {
    MosaicError::Configuration {
        setting,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

/// Create a computation error
pub fn computation_error(operation: &'static str, reason: &impl ToString) -> MosaicError {
    MosaicError::Computation {
        operation,
        reason: reason.to_string(),
    }
}

/// Create a type mismatch error
pub fn type_mismatch(operation: &'static str, reason: &impl ToString) -> MosaicError {
    MosaicError::TypeMismatch {
        operation,
        reason: reason.to_string(),
    }
}
