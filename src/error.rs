//! Construction errors.

use thiserror::Error;

/// Errors raised when a grid is created with unusable dimensions.
///
/// Out-of-range coordinates are never errors: reads return dead and writes
/// are dropped.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum GridError {
    #[error("grid width {width} is not a multiple of 8")]
    InvalidDimension { width: u32 },
    #[error("grid dimensions must be non-zero, got {width}x{height}")]
    ZeroDimension { width: u32, height: u32 },
    #[error("grid dimensions {width}x{height} exceed the coordinate range")]
    Oversized { width: u32, height: u32 },
}
