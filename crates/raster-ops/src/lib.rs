//! # raster-ops
//!
//! Pixel-buffer operations over [`raster_core`] images.
//!
//! Every operation works on one or two logical images (an [`ImageView`] or
//! [`ImageViewMut`] over a [`PixelBuffer`]) and decodes pixels through the
//! image's own channel order, so sources and destinations may be stored in
//! different formats.
//!
//! # Modules
//!
//! - [`color`] - Lookup-table color transforms
//! - [`channel`] - Single-channel copies
//! - [`copy`] - Rectangular blits and alpha compositing
//! - [`merge`] - Weighted per-channel blending
//! - [`fill`] - Rectangle and flood fills
//! - [`pixels`] - Bulk pixel export and import
//! - [`alpha`] - Premultiplication
//! - [`format`] - In-place channel order conversion
//! - [`resize`] - Bilinear resize
//!
//! # Regions
//!
//! Single-image operations and [`copy_channel`] clip their rectangles to the
//! image and treat an empty result as a no-op. [`copy_pixels`] and [`merge`]
//! do not clip: their rectangle must fit both images, or
//! [`OpsError::InvalidRegion`] is returned before anything is written.
//!
//! # Example
//!
//! ```rust
//! use raster_core::{PixelBuffer, PixelFormat, Rectangle};
//! use raster_ops::{fill_rect, get_pixels};
//!
//! let mut buf = PixelBuffer::new(2, 2, PixelFormat::Rgba32);
//! let bounds = buf.view().bounds();
//! fill_rect(&mut buf.view_mut(), bounds, 0x000000FF);
//!
//! let bytes = get_pixels(&buf.view(), bounds, PixelFormat::Rgba32);
//! assert_eq!(bytes, [0, 0, 0, 0xFF].repeat(4));
//! ```
//!
//! [`ImageView`]: raster_core::ImageView
//! [`ImageViewMut`]: raster_core::ImageViewMut
//! [`PixelBuffer`]: raster_core::PixelBuffer

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod alpha;
pub mod channel;
pub mod color;
pub mod copy;
mod error;
pub mod fill;
pub mod format;
pub mod merge;
pub mod pixels;
mod region;
pub mod resize;

pub use alpha::{multiply_alpha, unmultiply_alpha};
pub use channel::copy_channel;
pub use color::color_transform;
pub use copy::copy_pixels;
pub use error::{OpsError, OpsResult};
pub use fill::{fill_rect, flood_fill};
pub use format::{set_format, set_format_id};
pub use merge::{MERGE_SCALE, merge};
pub use pixels::{get_pixels, get_pixels_into, set_pixels};
pub use resize::{resize, resize_into};
