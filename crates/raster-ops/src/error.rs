//! Error types for raster operations.

use thiserror::Error;

/// Error type for raster operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum OpsError {
    /// Invalid buffer or format metadata.
    #[error(transparent)]
    Core(#[from] raster_core::Error),

    /// Channel index outside `0..=3`.
    #[error("invalid channel index {0} (expected 0..=3)")]
    InvalidChannel(usize),

    /// A source or destination region leaves its image.
    #[error("invalid region: {0}")]
    InvalidRegion(String),

    /// A point lies outside the image.
    #[error("point ({x}, {y}) out of bounds for image {width}x{height}")]
    OutOfBounds {
        /// X coordinate
        x: i64,
        /// Y coordinate
        y: i64,
        /// Image width
        width: u32,
        /// Image height
        height: u32,
    },

    /// Supplied data does not match the region size.
    #[error("size mismatch: {0}")]
    SizeMismatch(String),
}

/// Result type for raster operations.
pub type OpsResult<T> = Result<T, OpsError>;
