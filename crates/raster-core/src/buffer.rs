//! Owned 32-bit-per-pixel byte storage.
//!
//! A [`PixelBuffer`] is a contiguous `stride * height` byte array plus the
//! metadata every operation needs: channel order, premultiplication state
//! and whether the alpha channel is meaningful.
//!
//! # Memory Layout
//!
//! ```text
//! row 0: [p0 p1 p2 ... p(w-1)] [padding to stride]
//! row 1: [p0 p1 p2 ... p(w-1)] [padding to stride]
//! ...
//! ```
//!
//! Each `p` is four bytes in [`PixelFormat`] order.
//!
//! # Usage
//!
//! ```rust
//! use raster_core::{PixelBuffer, PixelFormat};
//!
//! let buf = PixelBuffer::new(16, 8, PixelFormat::Rgba32).with_transparent(true);
//! assert_eq!(buf.stride(), 64);
//! assert_eq!(buf.len(), 64 * 8);
//! ```

use crate::format::{BYTES_PER_PIXEL, PixelFormat};
use crate::image::{Frame, ImageView, ImageViewMut};
use crate::{Error, Result};

/// Contiguous RGBA-family pixel storage.
///
/// # Invariants
///
/// - `data.len() == stride * height`
/// - `stride >= width * 4` and `stride % 4 == 0`
#[derive(Clone, PartialEq, Eq)]
pub struct PixelBuffer {
    data: Vec<u8>,
    width: u32,
    height: u32,
    stride: usize,
    format: PixelFormat,
    premultiplied: bool,
    transparent: bool,
}

impl PixelBuffer {
    /// Creates a zero-filled, tightly packed buffer.
    ///
    /// # Panics
    ///
    /// Panics if `width * height * 4` overflows `usize`.
    pub fn new(width: u32, height: u32, format: PixelFormat) -> Self {
        let stride = width as usize * BYTES_PER_PIXEL;
        Self {
            data: vec![0; stride * height as usize],
            width,
            height,
            stride,
            format,
            premultiplied: false,
            transparent: false,
        }
    }

    /// Wraps tightly packed pixel bytes.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimensions`] if `data.len() != width * height * 4`.
    pub fn from_data(width: u32, height: u32, format: PixelFormat, data: Vec<u8>) -> Result<Self> {
        let stride = min_stride(width, height)?;
        let expected = stride
            .checked_mul(height as usize)
            .ok_or_else(|| Error::invalid_dimensions(width, height, "size overflows usize"))?;
        if data.len() != expected {
            return Err(Error::invalid_dimensions(
                width,
                height,
                format!("expected {} bytes, got {}", expected, data.len()),
            ));
        }
        Ok(Self {
            data,
            width,
            height,
            stride,
            format,
            premultiplied: false,
            transparent: false,
        })
    }

    /// Wraps pixel bytes whose rows are `stride` bytes apart.
    ///
    /// # Errors
    ///
    /// - [`Error::InvalidStride`] if `stride < width * 4` or is not a multiple of 4
    /// - [`Error::BufferTooSmall`] if `data.len() < stride * height`
    ///
    /// Trailing bytes beyond `stride * height` are dropped.
    pub fn with_stride(
        width: u32,
        height: u32,
        stride: usize,
        format: PixelFormat,
        mut data: Vec<u8>,
    ) -> Result<Self> {
        let min = min_stride(width, height)?;
        if stride < min || stride % BYTES_PER_PIXEL != 0 {
            return Err(Error::InvalidStride {
                stride,
                min_stride: min,
                width,
            });
        }
        let required = stride
            .checked_mul(height as usize)
            .ok_or_else(|| Error::invalid_dimensions(width, height, "size overflows usize"))?;
        if data.len() < required {
            return Err(Error::BufferTooSmall {
                required,
                actual: data.len(),
            });
        }
        data.truncate(required);
        Ok(Self {
            data,
            width,
            height,
            stride,
            format,
            premultiplied: false,
            transparent: false,
        })
    }

    /// Sets the premultiplied flag.
    #[inline]
    pub fn with_premultiplied(mut self, premultiplied: bool) -> Self {
        self.premultiplied = premultiplied;
        self
    }

    /// Sets the transparent flag.
    #[inline]
    pub fn with_transparent(mut self, transparent: bool) -> Self {
        self.transparent = transparent;
        self
    }

    /// Width in pixels.
    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Height in pixels.
    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Bytes per row.
    #[inline]
    pub fn stride(&self) -> usize {
        self.stride
    }

    /// Returns `true` when rows carry no padding.
    #[inline]
    pub fn is_packed(&self) -> bool {
        self.stride == self.width as usize * BYTES_PER_PIXEL
    }

    /// Channel order of the stored pixels.
    #[inline]
    pub fn format(&self) -> PixelFormat {
        self.format
    }

    /// Whether colors are stored premultiplied by alpha.
    #[inline]
    pub fn premultiplied(&self) -> bool {
        self.premultiplied
    }

    /// Whether the alpha channel carries meaningful transparency.
    #[inline]
    pub fn transparent(&self) -> bool {
        self.transparent
    }

    /// Records a new channel order without touching the bytes.
    ///
    /// Use `raster_ops::set_format` to actually reorder the pixels.
    #[inline]
    pub fn set_format_tag(&mut self, format: PixelFormat) {
        self.format = format;
    }

    /// Records the premultiplication state without touching the bytes.
    #[inline]
    pub fn set_premultiplied(&mut self, premultiplied: bool) {
        self.premultiplied = premultiplied;
    }

    /// Sets the transparent flag.
    #[inline]
    pub fn set_transparent(&mut self, transparent: bool) {
        self.transparent = transparent;
    }

    /// Raw bytes.
    #[inline]
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Mutable raw bytes.
    #[inline]
    pub fn data_mut(&mut self) -> &mut [u8] {
        &mut self.data
    }

    /// Byte length of the storage.
    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns `true` if the buffer holds no bytes.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Consumes the buffer, returning its bytes.
    #[inline]
    pub fn into_data(self) -> Vec<u8> {
        self.data
    }

    /// Frame covering the whole buffer.
    #[inline]
    pub fn full_frame(&self) -> Frame {
        Frame::new(self.width, self.height)
    }

    /// View of the whole buffer.
    #[inline]
    pub fn view(&self) -> ImageView<'_> {
        ImageView::whole(self)
    }

    /// Mutable view of the whole buffer.
    #[inline]
    pub fn view_mut(&mut self) -> ImageViewMut<'_> {
        ImageViewMut::whole(self)
    }

    /// View of a sub-frame, e.g. one cell of an atlas.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidRegion`] if `frame` leaves the buffer.
    #[inline]
    pub fn frame(&self, frame: Frame) -> Result<ImageView<'_>> {
        ImageView::new(self, frame)
    }

    /// Mutable view of a sub-frame.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidRegion`] if `frame` leaves the buffer.
    #[inline]
    pub fn frame_mut(&mut self, frame: Frame) -> Result<ImageViewMut<'_>> {
        ImageViewMut::new(self, frame)
    }
}

impl std::fmt::Debug for PixelBuffer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PixelBuffer")
            .field("width", &self.width)
            .field("height", &self.height)
            .field("stride", &self.stride)
            .field("format", &self.format)
            .field("premultiplied", &self.premultiplied)
            .field("transparent", &self.transparent)
            .field("len", &self.data.len())
            .finish()
    }
}

fn min_stride(width: u32, height: u32) -> Result<usize> {
    (width as usize)
        .checked_mul(BYTES_PER_PIXEL)
        .ok_or_else(|| Error::invalid_dimensions(width, height, "row size overflows usize"))
}
