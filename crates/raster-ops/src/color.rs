//! Per-channel color transforms through lookup tables.
//!
//! # Example
//!
//! ```rust
//! use raster_core::{ColorMatrix, PixelBuffer, PixelFormat, Rgba};
//! use raster_ops::color_transform;
//!
//! let mut buf = PixelBuffer::new(2, 2, PixelFormat::Rgba32);
//! buf.view_mut().set_pixel(0, 0, Rgba::new(200, 100, 50, 255));
//!
//! let invert = ColorMatrix::from_multipliers([-1.0, -1.0, -1.0, 1.0], [1.0, 1.0, 1.0, 0.0]);
//! let bounds = buf.view().bounds();
//! color_transform(&mut buf.view_mut(), bounds, &invert);
//!
//! assert_eq!(buf.view().pixel(0, 0), Some(Rgba::new(55, 155, 205, 255)));
//! ```

use raster_core::{BYTES_PER_PIXEL, ColorTables, ImageViewMut, Rectangle, Rgba, ViewWindow};
use tracing::trace;

/// Maps every pixel of `rect` through the four channel tables of `tables`.
///
/// The rectangle is clipped to the image; pixels outside it are untouched.
pub fn color_transform<T>(image: &mut ImageViewMut<'_>, rect: Rectangle, tables: &T)
where
    T: ColorTables + ?Sized,
{
    let window = ViewWindow::new(&image.as_view(), rect);
    trace!(
        x = window.x(),
        y = window.y(),
        width = window.width(),
        height = window.height(),
        format = %image.format(),
        "color_transform"
    );
    if window.is_empty() {
        return;
    }

    let [red, green, blue, alpha] = tables.tables();
    let codec = image.codec();
    let data = image.data_mut();

    for y in 0..window.height() {
        let row = window.row(y);
        for x in 0..window.width() as usize {
            let offset = row + x * BYTES_PER_PIXEL;
            let px = codec.read(data, offset);
            let out = Rgba::new(
                red[px.r as usize],
                green[px.g as usize],
                blue[px.b as usize],
                alpha[px.a as usize],
            );
            codec.write(data, offset, out);
        }
    }
}
