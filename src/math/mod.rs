//! Numeric utilities

/// Two-component vector with scalar broadcast arithmetic
pub mod vector;

pub use vector::{ByNorm, Vector2};
