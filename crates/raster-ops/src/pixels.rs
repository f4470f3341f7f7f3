//! Bulk pixel export and import.
//!
//! External byte runs are row-major, tightly packed, and exactly as wide as
//! the clipped window of the requested rectangle. Each run carries its own
//! [`PixelFormat`]; it is transcoded to or from the buffer's format on the
//! way through.

use crate::{OpsError, OpsResult};
use raster_core::{
    BYTES_PER_PIXEL, ImageView, ImageViewMut, PixelCodec, PixelFormat, Rectangle, ViewWindow,
};
use tracing::{debug, trace};

/// Reads `rect` of `image` as `format` bytes.
///
/// The rectangle is clipped to the image first; the result holds
/// `width * height * 4` bytes of the clipped window.
///
/// # Example
///
/// ```rust
/// use raster_core::{PixelBuffer, PixelFormat, Rectangle, Rgba};
/// use raster_ops::get_pixels;
///
/// let mut buf = PixelBuffer::new(2, 1, PixelFormat::Bgra32);
/// buf.view_mut().set_pixel(1, 0, Rgba::new(1, 2, 3, 4));
///
/// let bytes = get_pixels(&buf.view(), Rectangle::new(1.0, 0.0, 5.0, 5.0), PixelFormat::Rgba32);
/// assert_eq!(bytes, vec![1, 2, 3, 4]);
/// ```
pub fn get_pixels(image: &ImageView<'_>, rect: Rectangle, format: PixelFormat) -> Vec<u8> {
    let mut out = Vec::new();
    get_pixels_into(image, rect, format, &mut out);
    out
}

/// Like [`get_pixels`], but writes into `out`, reusing its allocation.
///
/// `out` is cleared first.
pub fn get_pixels_into(
    image: &ImageView<'_>,
    rect: Rectangle,
    format: PixelFormat,
    out: &mut Vec<u8>,
) {
    let window = ViewWindow::new(image, rect);
    out.clear();
    trace!(
        width = window.width(),
        height = window.height(),
        from = %image.format(),
        to = %format,
        "get_pixels"
    );
    if window.is_empty() {
        return;
    }
    out.reserve(window.pixel_count() * BYTES_PER_PIXEL);
    let data = image.data();

    if format == image.format() {
        if is_whole_packed_buffer(image, &window) {
            trace!("get_pixels: whole buffer");
            out.extend_from_slice(data);
            return;
        }
        for y in 0..window.height() {
            out.extend_from_slice(&data[window.row_range(y)]);
        }
        return;
    }

    let perm = PixelCodec::transcode(image.format(), format);
    for y in 0..window.height() {
        for px in data[window.row_range(y)].chunks_exact(BYTES_PER_PIXEL) {
            out.extend(perm.iter().map(|&i| px[i]));
        }
    }
}

/// Writes `bytes`, laid out in `format`, into `rect` of `image`.
///
/// The rectangle is clipped to the image and `bytes` is read row-major with
/// the clipped width. Extra trailing bytes are ignored.
///
/// # Errors
///
/// Returns [`OpsError::SizeMismatch`] if `bytes` holds fewer than
/// `width * height` pixels of the clipped window; the image is untouched in
/// that case.
///
/// # Example
///
/// ```rust
/// use raster_core::{PixelBuffer, PixelFormat, Rectangle, Rgba};
/// use raster_ops::set_pixels;
///
/// let mut buf = PixelBuffer::new(2, 2, PixelFormat::Argb32);
/// let rect = Rectangle::new(0.0, 1.0, 1.0, 1.0);
/// set_pixels(&mut buf.view_mut(), rect, &[9, 8, 7, 6], PixelFormat::Rgba32).unwrap();
/// assert_eq!(buf.view().pixel(0, 1), Some(Rgba::new(9, 8, 7, 6)));
/// ```
pub fn set_pixels(
    image: &mut ImageViewMut<'_>,
    rect: Rectangle,
    bytes: &[u8],
    format: PixelFormat,
) -> OpsResult<()> {
    let window = ViewWindow::new(&image.as_view(), rect);
    let required = window.pixel_count() * BYTES_PER_PIXEL;
    trace!(
        width = window.width(),
        height = window.height(),
        from = %format,
        to = %image.format(),
        "set_pixels"
    );
    if bytes.len() < required {
        debug!(required, actual = bytes.len(), "set_pixels: source too short");
        return Err(OpsError::SizeMismatch(format!(
            "{}x{} window needs {} bytes, got {}",
            window.width(),
            window.height(),
            required,
            bytes.len()
        )));
    }
    if window.is_empty() {
        return Ok(());
    }

    let row_bytes = window.width() as usize * BYTES_PER_PIXEL;
    let dest_format = image.format();
    let same_format = format == dest_format;
    let whole = is_whole_packed_buffer(&image.as_view(), &window);
    let data = image.data_mut();

    if same_format {
        if whole {
            trace!("set_pixels: whole buffer");
            data.copy_from_slice(&bytes[..required]);
            return Ok(());
        }
        for (y, src) in (0..window.height()).zip(bytes.chunks_exact(row_bytes)) {
            data[window.row_range(y)].copy_from_slice(src);
        }
        return Ok(());
    }

    let perm = PixelCodec::transcode(format, dest_format);
    for (y, src) in (0..window.height()).zip(bytes.chunks_exact(row_bytes)) {
        for (out, px) in data[window.row_range(y)]
            .chunks_exact_mut(BYTES_PER_PIXEL)
            .zip(src.chunks_exact(BYTES_PER_PIXEL))
        {
            for (slot, &from) in out.iter_mut().zip(perm.iter()) {
                *slot = px[from];
            }
        }
    }
    Ok(())
}

/// Window spans a tightly packed buffer from its origin to its far corner.
fn is_whole_packed_buffer(image: &ImageView<'_>, window: &ViewWindow) -> bool {
    let buffer = image.buffer();
    image.covers_buffer()
        && buffer.is_packed()
        && window.x() == 0
        && window.y() == 0
        && window.width() == buffer.width()
        && window.height() == buffer.height()
}
