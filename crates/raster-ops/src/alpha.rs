//! Alpha premultiplication.
//!
//! Both operations run over every pixel slot of the buffer, row padding
//! included, and flip the buffer's premultiplied flag. They do not check the
//! flag first: calling either twice applies it twice.
//!
//! Multiplication rounds to nearest through the 16-bit alpha table in
//! [`raster_core::clamp`], so a multiply/unmultiply pair is exact for fully
//! opaque pixels. Fully transparent pixels are skipped by both, so they
//! keep whatever color bytes they carry.

use raster_core::clamp::{multiply, unmultiply};
use raster_core::{BYTES_PER_PIXEL, PixelBuffer};
use tracing::trace;

/// Premultiplies red, green and blue by alpha in place.
///
/// Pixels with zero alpha are left as they are.
///
/// ```rust
/// use raster_core::{PixelBuffer, PixelFormat, Rgba};
/// use raster_ops::multiply_alpha;
///
/// let mut buf = PixelBuffer::new(1, 1, PixelFormat::Rgba32);
/// buf.view_mut().set_pixel(0, 0, Rgba::new(255, 100, 0, 128));
/// multiply_alpha(&mut buf);
///
/// assert_eq!(buf.view().pixel(0, 0), Some(Rgba::new(128, 50, 0, 128)));
/// assert!(buf.premultiplied());
/// ```
pub fn multiply_alpha(buffer: &mut PixelBuffer) {
    trace!(
        width = buffer.width(),
        height = buffer.height(),
        format = %buffer.format(),
        "multiply_alpha"
    );
    let alpha_at = buffer.format().alpha_position();
    for px in buffer.data_mut().chunks_exact_mut(BYTES_PER_PIXEL) {
        let a = px[alpha_at];
        if a == 0 {
            continue;
        }
        for (i, c) in px.iter_mut().enumerate() {
            if i != alpha_at {
                *c = multiply(*c, a);
            }
        }
    }
    buffer.set_premultiplied(true);
}

/// Reverses [`multiply_alpha`] in place.
///
/// Channels are divided by alpha, rounded, and saturated at 255. Pixels with
/// zero alpha are left as they are.
pub fn unmultiply_alpha(buffer: &mut PixelBuffer) {
    trace!(
        width = buffer.width(),
        height = buffer.height(),
        format = %buffer.format(),
        "unmultiply_alpha"
    );
    let alpha_at = buffer.format().alpha_position();
    for px in buffer.data_mut().chunks_exact_mut(BYTES_PER_PIXEL) {
        let a = px[alpha_at];
        for (i, c) in px.iter_mut().enumerate() {
            if i == alpha_at {
                continue;
            }
            if let Some(v) = unmultiply(*c, a) {
                *c = v;
            }
        }
    }
    buffer.set_premultiplied(false);
}
