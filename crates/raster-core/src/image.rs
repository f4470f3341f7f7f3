//! Logical images over a shared [`PixelBuffer`].
//!
//! An image is a [`Frame`] (its own width/height plus an origin inside the
//! buffer) together with a borrow of the buffer. Several frames can describe
//! different cells of one atlas buffer.
//!
//! - [`ImageView`] - shared borrow, used as the source of operations
//! - [`ImageViewMut`] - exclusive borrow, used as the destination
//!
//! Construction checks that the frame lies inside the buffer, so the
//! addressing helpers below never leave the storage.
//!
//! # Usage
//!
//! ```rust
//! use raster_core::{Frame, PixelBuffer, PixelFormat, Rgba};
//!
//! let mut atlas = PixelBuffer::new(8, 4, PixelFormat::Rgba32);
//! let mut cell = atlas.frame_mut(Frame::at(4, 0, 4, 4)).unwrap();
//! cell.set_pixel(0, 0, Rgba::new(1, 2, 3, 4));
//!
//! assert_eq!(atlas.view().pixel(4, 0), Some(Rgba::new(1, 2, 3, 4)));
//! ```

use crate::format::BYTES_PER_PIXEL;
use crate::pixel::{PixelCodec, Rgba};
use crate::{Error, PixelBuffer, PixelFormat, Rectangle, Result};

/// Size and origin of a logical image inside its buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Frame {
    /// Logical width in pixels
    pub width: u32,
    /// Logical height in pixels
    pub height: u32,
    /// Column of the frame origin inside the buffer
    pub offset_x: u32,
    /// Row of the frame origin inside the buffer
    pub offset_y: u32,
}

impl Frame {
    /// Frame at the buffer origin.
    #[inline]
    pub const fn new(width: u32, height: u32) -> Self {
        Self::at(0, 0, width, height)
    }

    /// Frame at `(offset_x, offset_y)`.
    #[inline]
    pub const fn at(offset_x: u32, offset_y: u32, width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            offset_x,
            offset_y,
        }
    }

    /// Returns `true` if the frame lies at the buffer origin.
    #[inline]
    pub const fn at_origin(&self) -> bool {
        self.offset_x == 0 && self.offset_y == 0
    }

    fn check(&self, buffer: &PixelBuffer) -> Result<()> {
        let right = self.offset_x as u64 + self.width as u64;
        let bottom = self.offset_y as u64 + self.height as u64;
        if right > buffer.width() as u64 || bottom > buffer.height() as u64 {
            return Err(Error::invalid_region(
                self.offset_x,
                self.offset_y,
                self.width,
                self.height,
                buffer.width(),
                buffer.height(),
            ));
        }
        Ok(())
    }
}

macro_rules! impl_view_common {
    ($ty:ident) => {
        impl<'a> $ty<'a> {
            /// Backing buffer.
            #[inline]
            pub fn buffer(&self) -> &PixelBuffer {
                &*self.buffer
            }

            /// Frame describing this image inside the buffer.
            #[inline]
            pub fn frame(&self) -> Frame {
                self.frame
            }

            /// Logical width.
            #[inline]
            pub fn width(&self) -> u32 {
                self.frame.width
            }

            /// Logical height.
            #[inline]
            pub fn height(&self) -> u32 {
                self.frame.height
            }

            /// Frame origin column inside the buffer.
            #[inline]
            pub fn offset_x(&self) -> u32 {
                self.frame.offset_x
            }

            /// Frame origin row inside the buffer.
            #[inline]
            pub fn offset_y(&self) -> u32 {
                self.frame.offset_y
            }

            /// Bytes per buffer row.
            #[inline]
            pub fn stride(&self) -> usize {
                self.buffer.stride()
            }

            /// Channel order of the buffer.
            #[inline]
            pub fn format(&self) -> PixelFormat {
                self.buffer.format()
            }

            /// Whether the buffer stores premultiplied colors.
            #[inline]
            pub fn premultiplied(&self) -> bool {
                self.buffer.premultiplied()
            }

            /// Whether the buffer's alpha channel is meaningful.
            #[inline]
            pub fn transparent(&self) -> bool {
                self.buffer.transparent()
            }

            /// Codec for the buffer's format.
            #[inline]
            pub fn codec(&self) -> PixelCodec {
                PixelCodec::new(self.buffer.format(), self.buffer.premultiplied())
            }

            /// Raw bytes of the whole buffer.
            #[inline]
            pub fn data(&self) -> &[u8] {
                self.buffer.data()
            }

            /// Logical bounds `(0, 0, width, height)`.
            #[inline]
            pub fn bounds(&self) -> Rectangle {
                Rectangle::from_pixels(0, 0, self.frame.width, self.frame.height)
            }

            /// Returns `true` if the frame covers the entire buffer.
            #[inline]
            pub fn covers_buffer(&self) -> bool {
                self.frame.at_origin()
                    && self.frame.width == self.buffer.width()
                    && self.frame.height == self.buffer.height()
            }

            /// Byte offset of the logical pixel `(x, y)`.
            ///
            /// Caller guarantees `x < width` and `y < height`.
            #[inline]
            pub fn pixel_offset(&self, x: u32, y: u32) -> usize {
                debug_assert!(x < self.frame.width && y < self.frame.height);
                self.buffer.stride() * (y + self.frame.offset_y) as usize
                    + (x + self.frame.offset_x) as usize * BYTES_PER_PIXEL
            }

            /// Decoded pixel at logical `(x, y)`, or `None` outside the frame.
            #[inline]
            pub fn pixel(&self, x: u32, y: u32) -> Option<Rgba> {
                if x < self.frame.width && y < self.frame.height {
                    Some(self.codec().read(self.buffer.data(), self.pixel_offset(x, y)))
                } else {
                    None
                }
            }
        }
    };
}

/// Read-only logical image.
#[derive(Debug, Clone, Copy)]
pub struct ImageView<'a> {
    buffer: &'a PixelBuffer,
    frame: Frame,
}

impl<'a> ImageView<'a> {
    /// View of `frame` inside `buffer`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidRegion`] if the frame leaves the buffer.
    pub fn new(buffer: &'a PixelBuffer, frame: Frame) -> Result<Self> {
        frame.check(buffer)?;
        Ok(Self { buffer, frame })
    }

    /// View covering the whole buffer.
    #[inline]
    pub fn whole(buffer: &'a PixelBuffer) -> Self {
        Self {
            frame: buffer.full_frame(),
            buffer,
        }
    }
}

impl_view_common!(ImageView);

/// Mutable logical image.
#[derive(Debug)]
pub struct ImageViewMut<'a> {
    buffer: &'a mut PixelBuffer,
    frame: Frame,
}

impl<'a> ImageViewMut<'a> {
    /// Mutable view of `frame` inside `buffer`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidRegion`] if the frame leaves the buffer.
    pub fn new(buffer: &'a mut PixelBuffer, frame: Frame) -> Result<Self> {
        frame.check(buffer)?;
        Ok(Self { buffer, frame })
    }

    /// Mutable view covering the whole buffer.
    #[inline]
    pub fn whole(buffer: &'a mut PixelBuffer) -> Self {
        Self {
            frame: buffer.full_frame(),
            buffer,
        }
    }

    /// Reborrows as a read-only view.
    #[inline]
    pub fn as_view(&self) -> ImageView<'_> {
        ImageView {
            buffer: &*self.buffer,
            frame: self.frame,
        }
    }

    /// Mutable access to the backing buffer.
    #[inline]
    pub fn buffer_mut(&mut self) -> &mut PixelBuffer {
        self.buffer
    }

    /// Mutable raw bytes of the whole buffer.
    #[inline]
    pub fn data_mut(&mut self) -> &mut [u8] {
        self.buffer.data_mut()
    }

    /// Encodes `pixel` at logical `(x, y)`. Returns `false` outside the frame.
    #[inline]
    pub fn set_pixel(&mut self, x: u32, y: u32, pixel: Rgba) -> bool {
        if x >= self.frame.width || y >= self.frame.height {
            return false;
        }
        let offset = self.pixel_offset(x, y);
        let codec = self.codec();
        codec.write(self.buffer.data_mut(), offset, pixel);
        true
    }
}

impl_view_common!(ImageViewMut);
