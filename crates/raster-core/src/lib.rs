//! # raster-core
//!
//! Core types for raw raster processing on packed 32-bit-per-pixel bitmaps.
//!
//! This crate provides the data model the `raster-ops` algorithms scan over:
//!
//! - [`PixelBuffer`] - Contiguous byte storage with format/premultiplied/transparent metadata
//! - [`Frame`], [`ImageView`], [`ImageViewMut`] - Logical images inside a (possibly shared) buffer
//! - [`PixelFormat`] - The three supported channel orders
//! - [`Rgba`], [`PixelCodec`] - Per-pixel decode/encode
//! - [`clamp`] - Saturating arithmetic and fixed-point alpha tables
//! - [`Rectangle`], [`Point`] - Logical geometry
//! - [`ViewWindow`] - Clipped integer iteration windows with stride addressing
//! - [`ColorTables`], [`ColorMatrix`] - Lookup-table providers for color transforms
//!
//! ## Crate Structure
//!
//! ```text
//! raster-core (this crate)
//!    ^
//!    |
//!    +-- raster-ops (pixel-buffer operations)
//!    +-- raster-tests (integration tests)
//!    +-- raster-bench (benchmarks)
//! ```
//!
//! ## Feature Flags
//!
//! - `serde` - Serialization for [`PixelFormat`], [`Rectangle`], [`Point`],
//!   [`Frame`] and [`ColorMatrix`]

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod buffer;
pub mod clamp;
pub mod color_matrix;
pub mod error;
pub mod format;
pub mod image;
pub mod pixel;
pub mod rect;
pub mod window;

// Re-exports for convenience
pub use buffer::PixelBuffer;
pub use color_matrix::{ColorMatrix, ColorTables, IDENTITY_TABLE, LookupTables, Table};
pub use error::{Error, Result};
pub use format::{
    BYTES_PER_PIXEL, CHANNEL_ALPHA, CHANNEL_BLUE, CHANNEL_GREEN, CHANNEL_RED, PixelFormat,
};
pub use image::{Frame, ImageView, ImageViewMut};
pub use pixel::{PixelCodec, Rgba};
pub use rect::{Point, Rectangle};
pub use window::ViewWindow;

/// Prelude module for convenient imports.
///
/// ```
/// use raster_core::prelude::*;
/// ```
pub mod prelude {
    pub use crate::buffer::PixelBuffer;
    pub use crate::color_matrix::{ColorMatrix, ColorTables, LookupTables};
    pub use crate::error::{Error, Result};
    pub use crate::format::PixelFormat;
    pub use crate::image::{Frame, ImageView, ImageViewMut};
    pub use crate::pixel::{PixelCodec, Rgba};
    pub use crate::rect::{Point, Rectangle};
    pub use crate::window::ViewWindow;
}
