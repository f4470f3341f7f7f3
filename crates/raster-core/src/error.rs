//! Error types for raster-core operations.
//!
//! Every constructor that can be handed inconsistent metadata (a stride that
//! is too small, a frame that leaves its buffer, an unknown format id) fails
//! fast with one of the variants below instead of building a value that
//! would later index out of bounds.
//!
//! # Usage
//!
//! ```rust
//! use raster_core::{Error, PixelFormat};
//!
//! let err = PixelFormat::try_from(7u32).unwrap_err();
//! assert!(matches!(err, Error::InvalidFormat { .. }));
//! ```
//!
//! # Dependencies
//!
//! - [`thiserror`] - For derive macro error implementation

use thiserror::Error;

/// Result type alias using [`Error`] as the error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while describing pixel buffers and their views.
///
/// # Categories
///
/// - **Format errors**: [`InvalidFormat`](Error::InvalidFormat)
/// - **Layout errors**: [`InvalidDimensions`](Error::InvalidDimensions),
///   [`InvalidStride`](Error::InvalidStride), [`BufferTooSmall`](Error::BufferTooSmall)
/// - **Bounds errors**: [`InvalidRegion`](Error::InvalidRegion)
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// Pixel format id or name is not one of the supported channel orders.
    ///
    /// # Example
    ///
    /// ```rust
    /// use raster_core::Error;
    ///
    /// let err = Error::invalid_format("YUV420");
    /// assert!(err.to_string().contains("YUV420"));
    /// ```
    #[error("unsupported pixel format: {format}")]
    InvalidFormat {
        /// Format id or name as supplied by the caller
        format: String,
    },

    /// Width/height cannot describe a buffer (overflow or mismatch with data).
    #[error("invalid dimensions: {width}x{height} ({reason})")]
    InvalidDimensions {
        /// Requested width
        width: u32,
        /// Requested height
        height: u32,
        /// Reason why dimensions are invalid
        reason: String,
    },

    /// Stride is smaller than a row or not pixel-aligned.
    #[error("stride {stride} is invalid for width {width} (minimum {min_stride}, multiple of 4)")]
    InvalidStride {
        /// Provided stride
        stride: usize,
        /// Minimum required stride
        min_stride: usize,
        /// Buffer width
        width: u32,
    },

    /// Byte storage is shorter than `stride * height`.
    #[error("buffer holds {actual} bytes, {required} required")]
    BufferTooSmall {
        /// Bytes required by the layout
        required: usize,
        /// Bytes actually supplied
        actual: usize,
    },

    /// A frame does not fit inside its backing buffer.
    #[error("region ({rx}, {ry}, {rw}x{rh}) exceeds buffer bounds {width}x{height}")]
    InvalidRegion {
        /// Region X origin
        rx: u32,
        /// Region Y origin
        ry: u32,
        /// Region width
        rw: u32,
        /// Region height
        rh: u32,
        /// Buffer width
        width: u32,
        /// Buffer height
        height: u32,
    },
}

impl Error {
    /// Creates an [`Error::InvalidFormat`] error.
    #[inline]
    pub fn invalid_format(format: impl Into<String>) -> Self {
        Self::InvalidFormat {
            format: format.into(),
        }
    }

    /// Creates an [`Error::InvalidDimensions`] error.
    #[inline]
    pub fn invalid_dimensions(width: u32, height: u32, reason: impl Into<String>) -> Self {
        Self::InvalidDimensions {
            width,
            height,
            reason: reason.into(),
        }
    }

    /// Creates an [`Error::InvalidRegion`] error.
    #[inline]
    pub fn invalid_region(rx: u32, ry: u32, rw: u32, rh: u32, width: u32, height: u32) -> Self {
        Self::InvalidRegion {
            rx,
            ry,
            rw,
            rh,
            width,
            height,
        }
    }

    /// Returns `true` if this is a bounds-related error.
    #[inline]
    pub fn is_bounds_error(&self) -> bool {
        matches!(self, Self::InvalidRegion { .. } | Self::BufferTooSmall { .. })
    }

    /// Returns `true` if this is a format error.
    #[inline]
    pub fn is_format_error(&self) -> bool {
        matches!(self, Self::InvalidFormat { .. })
    }
}
