//! Clipped, integer-aligned iteration windows.
//!
//! [`ViewWindow`] turns a caller's (possibly fractional, possibly
//! out-of-range) [`Rectangle`] into the integer region an operation is
//! allowed to touch, plus the byte addressing for it. It is the single place
//! where rectangle-to-offset arithmetic lives.
//!
//! # Clipping rules
//!
//! 1. `x` and `y` are raised to 0.
//! 2. `width`/`height` are cut so that `x + width <= image.width` and
//!    `y + height <= image.height`, then floored at 0.
//! 3. The origin is rounded up and the size rounded down, so edges move
//!    inward.
//!
//! A rectangle partly outside the image is silently truncated; one fully
//! outside yields an empty window. Neither is an error.
//!
//! # Example
//!
//! ```rust
//! use raster_core::{PixelBuffer, PixelFormat, Rectangle, ViewWindow};
//!
//! let buf = PixelBuffer::new(10, 10, PixelFormat::Rgba32);
//! let win = ViewWindow::new(&buf.view(), Rectangle::new(-3.0, 8.5, 5.0, 4.0));
//! assert_eq!((win.x(), win.y(), win.width(), win.height()), (0, 9, 5, 1));
//! assert_eq!(win.row(0), 40 * 9);
//! ```

use crate::format::BYTES_PER_PIXEL;
use crate::{ImageView, Rectangle};

/// Integer iteration window over one image.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewWindow {
    rect: Rectangle,
    bounds: (u32, u32),
    origin: (u32, u32),
    stride: usize,
    x: u32,
    y: u32,
    width: u32,
    height: u32,
    offset: usize,
}

impl ViewWindow {
    /// Clips `rect` against `image` and resolves its addressing.
    pub fn new(image: &ImageView<'_>, rect: Rectangle) -> Self {
        let (bw, bh) = (image.width() as f64, image.height() as f64);
        let mut r = rect;
        // NaN compares false everywhere; treat it as 0 up front.
        for v in [&mut r.x, &mut r.y, &mut r.width, &mut r.height] {
            if v.is_nan() {
                *v = 0.0;
            }
        }
        if r.x < 0.0 {
            r.x = 0.0;
        }
        if r.y < 0.0 {
            r.y = 0.0;
        }
        if r.x + r.width > bw {
            r.width = bw - r.x;
        }
        if r.y + r.height > bh {
            r.height = bh - r.y;
        }
        if r.width < 0.0 {
            r.width = 0.0;
        }
        if r.height < 0.0 {
            r.height = 0.0;
        }

        let mut window = Self {
            rect: r,
            bounds: (image.width(), image.height()),
            origin: (image.offset_x(), image.offset_y()),
            stride: image.stride(),
            x: 0,
            y: 0,
            width: 0,
            height: 0,
            offset: 0,
        };
        window.resolve();
        window
    }

    /// Window covering the whole image.
    #[inline]
    pub fn full(image: &ImageView<'_>) -> Self {
        Self::new(image, image.bounds())
    }

    /// Re-intersects with the box `(x, y, width, height)`.
    ///
    /// Only ever shrinks the window. Returns a new value; `self` is unchanged.
    pub fn clip(&self, x: f64, y: f64, width: f64, height: f64) -> Self {
        let mut window = *self;
        window.rect = self.rect.contract(x, y, width, height);
        window.resolve();
        window
    }

    fn resolve(&mut self) {
        let x = self.rect.x.ceil();
        let y = self.rect.y.ceil();
        let w = self.rect.width.floor();
        let h = self.rect.height.floor();
        // Float-to-int casts saturate; the clipping above keeps them in range.
        self.x = x as u32;
        self.y = y as u32;
        self.width = w as u32;
        self.height = h as u32;
        // An inward-rounded origin can still sit one column past a
        // fractional right edge; keep the window inside the image.
        self.width = self.width.min(self.bounds.0.saturating_sub(self.x));
        self.height = self.height.min(self.bounds.1.saturating_sub(self.y));
        if self.is_empty() {
            self.offset = 0;
            return;
        }
        self.offset = self.stride * (self.y + self.origin.1) as usize
            + (self.x + self.origin.0) as usize * BYTES_PER_PIXEL;
    }

    /// Clipped rectangle in logical coordinates (before integer rounding).
    #[inline]
    pub fn rect(&self) -> Rectangle {
        self.rect
    }

    /// First column, in logical image coordinates.
    #[inline]
    pub fn x(&self) -> u32 {
        self.x
    }

    /// First row, in logical image coordinates.
    #[inline]
    pub fn y(&self) -> u32 {
        self.y
    }

    /// Width in whole pixels.
    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Height in whole pixels.
    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Bytes per buffer row.
    #[inline]
    pub fn stride(&self) -> usize {
        self.stride
    }

    /// Byte offset of the window's first pixel.
    #[inline]
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Returns `true` if the window holds no pixels.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Number of pixels in the window.
    #[inline]
    pub fn pixel_count(&self) -> usize {
        self.width as usize * self.height as usize
    }

    /// Byte offset of the first pixel in window row `y`.
    #[inline]
    pub fn row(&self, y: u32) -> usize {
        self.offset + self.stride * y as usize
    }

    /// Byte range of window row `y` (all `width` pixels).
    #[inline]
    pub fn row_range(&self, y: u32) -> std::ops::Range<usize> {
        let start = self.row(y);
        start..start + self.width as usize * BYTES_PER_PIXEL
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Frame, PixelBuffer, PixelFormat};

    fn win(buf: &PixelBuffer, r: Rectangle) -> (u32, u32, u32, u32) {
        let w = ViewWindow::new(&buf.view(), r);
        (w.x(), w.y(), w.width(), w.height())
    }

    #[test]
    fn test_inside_is_unchanged() {
        let buf = PixelBuffer::new(8, 8, PixelFormat::Rgba32);
        assert_eq!(win(&buf, Rectangle::new(1.0, 2.0, 3.0, 4.0)), (1, 2, 3, 4));
    }

    #[test]
    fn test_truncates_overhang() {
        let buf = PixelBuffer::new(8, 8, PixelFormat::Rgba32);
        assert_eq!(win(&buf, Rectangle::new(6.0, 5.0, 10.0, 10.0)), (6, 5, 2, 3));
    }

    #[test]
    fn test_negative_origin_keeps_width() {
        // x is raised to 0 but the width is only cut by the right edge
        let buf = PixelBuffer::new(8, 8, PixelFormat::Rgba32);
        assert_eq!(win(&buf, Rectangle::new(-2.0, -1.0, 3.0, 3.0)), (0, 0, 3, 3));
    }

    #[test]
    fn test_outside_is_empty() {
        let buf = PixelBuffer::new(4, 4, PixelFormat::Rgba32);
        let w = ViewWindow::new(&buf.view(), Rectangle::new(10.0, 10.0, 2.0, 2.0));
        assert!(w.is_empty());
        assert_eq!(w.pixel_count(), 0);
    }

    #[test]
    fn test_fractional_edges_round_inward() {
        let buf = PixelBuffer::new(8, 8, PixelFormat::Rgba32);
        assert_eq!(win(&buf, Rectangle::new(0.5, 1.2, 2.9, 3.99)), (1, 2, 2, 3));
        // origin rounds up past a fractional right edge at the image border
        assert_eq!(win(&buf, Rectangle::new(7.5, 0.0, 1.0, 1.0)), (8, 0, 0, 1));
    }

    #[test]
    fn test_nan_is_zero() {
        let buf = PixelBuffer::new(4, 4, PixelFormat::Rgba32);
        assert_eq!(win(&buf, Rectangle::new(f64::NAN, 1.0, 2.0, f64::NAN)), (0, 1, 2, 0));
    }

    #[test]
    fn test_offset_uses_frame_origin() {
        let buf = PixelBuffer::new(8, 8, PixelFormat::Rgba32);
        let view = buf.frame(Frame::at(2, 3, 4, 4)).unwrap();
        let w = ViewWindow::new(&view, Rectangle::new(1.0, 1.0, 10.0, 10.0));
        assert_eq!((w.width(), w.height()), (3, 3));
        assert_eq!(w.offset(), 32 * 4 + 3 * 4);
        assert_eq!(w.row(2), 32 * 6 + 3 * 4);
        assert_eq!(w.row_range(0), 140..152);
    }

    #[test]
    fn test_clip_only_shrinks() {
        let buf = PixelBuffer::new(8, 8, PixelFormat::Rgba32);
        let w = ViewWindow::full(&buf.view());
        let c = w.clip(2.0, 2.0, 100.0, 3.0);
        assert_eq!((c.x(), c.y(), c.width(), c.height()), (2, 2, 6, 3));
        assert_eq!(c.offset(), 32 * 2 + 8);
        // original window untouched
        assert_eq!((w.width(), w.height()), (8, 8));
    }
}
