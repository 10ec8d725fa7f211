//! Input/output surfaces around the mosaic core

/// Command-line arguments and the run driver
pub mod cli;
/// Defaults, fixed settings and run configuration
pub mod configuration;
/// Error taxonomy and phase tagging
pub mod error;
/// Source decoding and canvas persistence
pub mod image;
/// Progress sinks and scoped progress tasks
pub mod progress;
