//! Pixel blits, optionally alpha-composited.
//!
//! # Compositing
//!
//! With `merge_alpha` set and a transparent source, each pixel is composited
//! with the straight-alpha "over" operator:
//!
//! ```text
//! outA = srcA + destA * (1 - srcA)
//! outC = (srcC * srcA + destC * destA * (1 - srcA)) / outA
//! ```
//!
//! A zero `outA` (both pixels fully transparent) yields a fully transparent
//! black pixel instead of dividing.

use crate::OpsResult;
use crate::region::BlitRegion;
use raster_core::clamp::clamp;
use raster_core::{BYTES_PER_PIXEL, ImageView, ImageViewMut, PixelCodec, Point, Rectangle, Rgba};
use tracing::{debug, trace};

/// Copies `src_rect` of `src` to `dest_point` of `dest`.
///
/// Without `merge_alpha`, or when `src` is not transparent, pixels are
/// copied verbatim (transcoded if the two buffers use different channel
/// orders). Otherwise the source is composited over the destination, see the
/// [module docs](self).
///
/// The rectangle is truncated to whole pixels but not clipped.
///
/// # Errors
///
/// Returns [`OpsError::InvalidRegion`](crate::OpsError::InvalidRegion) if the
/// source rectangle or its destination placement leaves either image; the
/// destination is untouched in that case.
///
/// # Example
///
/// ```rust
/// use raster_core::{PixelBuffer, PixelFormat, Point, Rectangle, Rgba};
/// use raster_ops::copy_pixels;
///
/// let mut src = PixelBuffer::new(2, 2, PixelFormat::Rgba32);
/// src.view_mut().set_pixel(1, 1, Rgba::new(9, 9, 9, 255));
/// let mut dest = PixelBuffer::new(4, 4, PixelFormat::Rgba32);
///
/// let rect = Rectangle::new(1.0, 1.0, 1.0, 1.0);
/// copy_pixels(&mut dest.view_mut(), &src.view(), rect, Point::new(3.0, 0.0), false).unwrap();
/// assert_eq!(dest.view().pixel(3, 0), Some(Rgba::new(9, 9, 9, 255)));
/// ```
pub fn copy_pixels(
    dest: &mut ImageViewMut<'_>,
    src: &ImageView<'_>,
    src_rect: Rectangle,
    dest_point: Point,
    merge_alpha: bool,
) -> OpsResult<()> {
    let Some(region) = BlitRegion::resolve(&dest.as_view(), src, src_rect, dest_point)? else {
        trace!(%src_rect, "copy_pixels: empty source rectangle");
        return Ok(());
    };

    let composite = merge_alpha && src.transparent();
    debug!(
        width = region.width,
        height = region.height,
        src_format = %src.format(),
        dest_format = %dest.format(),
        composite,
        "copy_pixels"
    );

    if composite {
        composite_over(dest, src, &region);
    } else if src.format() == dest.format() {
        copy_rows(dest, src, &region);
    } else {
        transcode_rows(dest, src, &region);
    }
    Ok(())
}

fn copy_rows(dest: &mut ImageViewMut<'_>, src: &ImageView<'_>, region: &BlitRegion) {
    let row_bytes = region.row_bytes();
    for row in 0..region.height {
        let s = region.src_row(src, row);
        let d = region.dest_row(&dest.as_view(), row);
        dest.data_mut()[d..d + row_bytes].copy_from_slice(&src.data()[s..s + row_bytes]);
    }
}

fn transcode_rows(dest: &mut ImageViewMut<'_>, src: &ImageView<'_>, region: &BlitRegion) {
    let perm = PixelCodec::transcode(src.format(), dest.format());
    let row_bytes = region.row_bytes();
    for row in 0..region.height {
        let s = region.src_row(src, row);
        let d = region.dest_row(&dest.as_view(), row);
        let src_row = &src.data()[s..s + row_bytes];
        let dest_row = &mut dest.data_mut()[d..d + row_bytes];
        for (out, px) in dest_row
            .chunks_exact_mut(BYTES_PER_PIXEL)
            .zip(src_row.chunks_exact(BYTES_PER_PIXEL))
        {
            for (slot, &from) in out.iter_mut().zip(perm.iter()) {
                *slot = px[from];
            }
        }
    }
}

fn composite_over(dest: &mut ImageViewMut<'_>, src: &ImageView<'_>, region: &BlitRegion) {
    let src_codec = src.codec();
    let dest_codec = dest.codec();
    for row in 0..region.height {
        let mut s = region.src_row(src, row);
        let mut d = region.dest_row(&dest.as_view(), row);
        for _ in 0..region.width {
            let fg = src_codec.read(src.data(), s);
            let bg = dest_codec.read(dest.data(), d);
            dest_codec.write(dest.data_mut(), d, over(fg, bg));
            s += BYTES_PER_PIXEL;
            d += BYTES_PER_PIXEL;
        }
    }
}

/// Straight-alpha "over" of two 8-bit pixels, rounded to nearest.
pub fn over(fg: Rgba, bg: Rgba) -> Rgba {
    let src_alpha = fg.a as f32 / 255.0;
    let dest_alpha = bg.a as f32 / 255.0;
    let one_minus_src = 1.0 - src_alpha;
    let out_alpha = src_alpha + dest_alpha * one_minus_src;
    if out_alpha <= 0.0 {
        return Rgba::default();
    }

    let blend = |s: u8, d: u8| -> u8 {
        let c = (s as f32 * src_alpha + d as f32 * dest_alpha * one_minus_src) / out_alpha;
        clamp((0.5 + c) as i32)
    };
    Rgba::new(
        blend(fg.r, bg.r),
        blend(fg.g, bg.g),
        blend(fg.b, bg.b),
        clamp((0.5 + out_alpha * 255.0) as i32),
    )
}
