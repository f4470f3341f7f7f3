//! Bilinear image resize.
//!
//! Each destination pixel samples the source at its centre:
//!
//! ```text
//! u = ((x + 0.5) / new_width) * src_width - 0.5
//! ```
//!
//! and likewise for `v`. The coordinate is split into an integer index and a
//! fractional weight in exact integer arithmetic, so equal sizes map every
//! pixel onto itself with zero weight and resize becomes a plain copy.
//! Coordinates left of the first pixel centre clamp to it; neighbours past
//! the right or bottom edge collapse onto the last row or column.
//!
//! Red, green and blue are blended and rounded to nearest. Alpha is not
//! blended: it is the base pixel's alpha, or zero when any neighbour that
//! carries weight is fully transparent.
//!
//! # Example
//!
//! ```rust
//! use raster_core::{PixelBuffer, PixelFormat, Rgba};
//! use raster_ops::resize;
//!
//! let mut src = PixelBuffer::new(2, 1, PixelFormat::Rgba32);
//! src.view_mut().set_pixel(0, 0, Rgba::new(0, 0, 0, 255));
//! src.view_mut().set_pixel(1, 0, Rgba::new(200, 200, 200, 255));
//!
//! let out = resize(&src.view(), 4, 1).unwrap();
//! assert_eq!(out.view().pixel(0, 0), Some(Rgba::new(0, 0, 0, 255)));
//! assert_eq!(out.view().pixel(1, 0), Some(Rgba::new(50, 50, 50, 255)));
//! assert_eq!(out.view().pixel(3, 0), Some(Rgba::new(200, 200, 200, 255)));
//! ```

use crate::OpsResult;
use raster_core::clamp::clamp;
use raster_core::{Error, ImageView, PixelBuffer, Rgba};
use tracing::{debug, trace};

/// Resizes `src` into a new buffer of `new_width` x `new_height`.
///
/// The result has the source's format and flags.
///
/// # Errors
///
/// Returns [`OpsError::Core`](crate::OpsError::Core) with
/// [`Error::InvalidDimensions`] if `src` is empty but the target is not.
pub fn resize(src: &ImageView<'_>, new_width: u32, new_height: u32) -> OpsResult<PixelBuffer> {
    let mut dest = PixelBuffer::new(new_width, new_height, src.format())
        .with_premultiplied(src.premultiplied())
        .with_transparent(src.transparent());
    resize_into(src, &mut dest)?;
    Ok(dest)
}

/// Resizes `src` to fill all of `dest`.
///
/// The target size is `dest`'s size. `dest` keeps its own format, stride and
/// flags; pixels are encoded in its format.
///
/// # Alpha
///
/// Only neighbours with non-zero weight are checked for zero alpha, and
/// positions left of or above the first pixel centre clamp onto it. An
/// upscaled edge pixel therefore keeps its base alpha even when the zero
/// weighted neighbour to its right or below is fully transparent, where a
/// rule that tested all four neighbours would zero it. Equal sizes never
/// change alpha as a result.
///
/// # Errors
///
/// As for [`resize`].
pub fn resize_into(src: &ImageView<'_>, dest: &mut PixelBuffer) -> OpsResult<()> {
    let (src_w, src_h) = (src.width(), src.height());
    let (new_w, new_h) = (dest.width(), dest.height());
    if new_w == 0 || new_h == 0 {
        trace!(new_w, new_h, "resize: empty target");
        return Ok(());
    }
    if src_w == 0 || src_h == 0 {
        debug!(src_w, src_h, new_w, new_h, "resize: empty source");
        return Err(Error::invalid_dimensions(src_w, src_h, "cannot resize an empty image").into());
    }
    debug!(
        src_w,
        src_h,
        new_w,
        new_h,
        from = %src.format(),
        to = %dest.format(),
        "resize"
    );

    let columns = sample_axis(src_w, new_w);
    let rows = sample_axis(src_h, new_h);

    let src_codec = src.codec();
    let src_data = src.data();
    let read = |x: u32, y: u32| src_codec.read(src_data, src.pixel_offset(x, y));

    let mut out = dest.view_mut();
    let dest_codec = out.codec();
    for (y, row) in rows.iter().enumerate() {
        for (x, col) in columns.iter().enumerate() {
            let p00 = read(col.index, row.index);
            let p10 = read(col.next, row.index);
            let p01 = read(col.index, row.next);
            let p11 = read(col.next, row.next);

            let (ur, vr) = (col.ratio, row.ratio);
            let lerp = |c00: u8, c10: u8, c01: u8, c11: u8| -> u8 {
                let top = c00 as f32 + (c10 as f32 - c00 as f32) * ur;
                let bottom = c01 as f32 + (c11 as f32 - c01 as f32) * ur;
                clamp((top + (bottom - top) * vr + 0.5) as i32)
            };

            let hole = (ur > 0.0 && p10.a == 0)
                || (vr > 0.0 && p01.a == 0)
                || (ur > 0.0 && vr > 0.0 && p11.a == 0);
            let px = Rgba::new(
                lerp(p00.r, p10.r, p01.r, p11.r),
                lerp(p00.g, p10.g, p01.g, p11.g),
                lerp(p00.b, p10.b, p01.b, p11.b),
                if hole { 0 } else { p00.a },
            );

            let offset = out.pixel_offset(x as u32, y as u32);
            dest_codec.write(out.data_mut(), offset, px);
        }
    }
    Ok(())
}

/// Source sample for one destination column or row.
#[derive(Debug, Clone, Copy, PartialEq)]
struct AxisSample {
    /// Base source index.
    index: u32,
    /// Following source index, collapsed onto `index` at the far edge.
    next: u32,
    /// Weight of `next`, in `[0, 1)`.
    ratio: f32,
}

/// Maps each of `dest_len` destination positions onto `src_len` source pixels.
fn sample_axis(src_len: u32, dest_len: u32) -> Vec<AxisSample> {
    let src_len = src_len as u64;
    let dest_len = dest_len as u64;
    let denom = 2 * dest_len;
    (0..dest_len)
        .map(|i| {
            // (2i + 1) * src / (2 * dest) - 1/2, scaled by 2 * dest
            let num = ((2 * i + 1) * src_len).saturating_sub(dest_len);
            let index = (num / denom).min(src_len - 1);
            let ratio = if index == src_len - 1 {
                0.0
            } else {
                (num % denom) as f32 / denom as f32
            };
            AxisSample {
                index: index as u32,
                next: (index + 1).min(src_len - 1) as u32,
                ratio,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::OpsError;
    use approx::assert_relative_eq;
    use raster_core::{Frame, PixelFormat};

    fn numbered(w: u32, h: u32, format: PixelFormat) -> PixelBuffer {
        let data = (0..w * h * 4).map(|i| (i * 7) as u8).collect();
        PixelBuffer::from_data(w, h, format, data).unwrap()
    }

    #[test]
    fn test_sample_axis_identity() {
        for (i, s) in sample_axis(5, 5).iter().enumerate() {
            assert_eq!(s.index, i as u32);
            assert_eq!(s.next, (i as u32 + 1).min(4));
            assert_eq!(s.ratio, 0.0);
        }
    }

    #[test]
    fn test_sample_axis_upscale_two() {
        let s = sample_axis(2, 4);
        // u = -0.25, 0.25, 0.75, 1.25
        assert_eq!((s[0].index, s[0].next), (0, 1));
        assert_relative_eq!(s[0].ratio, 0.0);
        assert_eq!((s[1].index, s[1].next), (0, 1));
        assert_relative_eq!(s[1].ratio, 0.25);
        assert_eq!((s[2].index, s[2].next), (0, 1));
        assert_relative_eq!(s[2].ratio, 0.75);
        assert_eq!((s[3].index, s[3].next), (1, 1));
        assert_relative_eq!(s[3].ratio, 0.0);
    }

    #[test]
    fn test_sample_axis_downscale() {
        let s = sample_axis(4, 2);
        // u = 0.5, 2.5
        assert_eq!((s[0].index, s[1].index), (0, 2));
        assert_relative_eq!(s[0].ratio, 0.5);
        assert_relative_eq!(s[1].ratio, 0.5);
    }

    #[test]
    fn test_same_size_is_identity() {
        for format in PixelFormat::ALL {
            let src = numbered(5, 3, format);
            let out = resize(&src.view(), 5, 3).unwrap();
            assert_eq!(out, src);
        }
    }

    #[test]
    fn test_single_pixel_upscale() {
        let mut src = PixelBuffer::new(1, 1, PixelFormat::Bgra32);
        src.view_mut().set_pixel(0, 0, Rgba::new(10, 20, 30, 40));
        let out = resize(&src.view(), 3, 2).unwrap();
        for y in 0..2 {
            for x in 0..3 {
                assert_eq!(out.view().pixel(x, y), Some(Rgba::new(10, 20, 30, 40)));
            }
        }
    }

    #[test]
    fn test_transparent_neighbour_zeroes_alpha() {
        let mut src = PixelBuffer::new(2, 1, PixelFormat::Rgba32).with_transparent(true);
        src.view_mut().set_pixel(0, 0, Rgba::new(100, 100, 100, 255));
        src.view_mut().set_pixel(1, 0, Rgba::new(0, 0, 0, 0));
        let out = resize(&src.view(), 4, 1).unwrap();
        let view = out.view();
        assert_eq!(view.pixel(0, 0), Some(Rgba::new(100, 100, 100, 255)));
        assert_eq!(view.pixel(1, 0), Some(Rgba::new(75, 75, 75, 0)));
        assert_eq!(view.pixel(3, 0), Some(Rgba::new(0, 0, 0, 0)));
        assert!(out.transparent());
    }

    #[test]
    fn test_same_size_keeps_alpha_beside_transparent() {
        let mut src = PixelBuffer::new(2, 2, PixelFormat::Rgba32).with_transparent(true);
        src.view_mut().set_pixel(0, 0, Rgba::new(10, 20, 30, 200));
        let out = resize(&src.view(), 2, 2).unwrap();
        assert_eq!(out.view().pixel(0, 0), Some(Rgba::new(10, 20, 30, 200)));
        assert_eq!(out, src);
    }

    #[test]
    fn test_reads_from_frame() {
        let mut atlas = PixelBuffer::new(4, 4, PixelFormat::Rgba32);
        atlas.frame_mut(Frame::at(2, 2, 2, 2)).unwrap().set_pixel(1, 1, Rgba::new(9, 9, 9, 9));
        let cell = atlas.frame(Frame::at(2, 2, 2, 2)).unwrap();
        let out = resize(&cell, 2, 2).unwrap();
        assert_eq!(out.view().pixel(1, 1), Some(Rgba::new(9, 9, 9, 9)));
        assert_eq!(out.view().pixel(0, 0), Some(Rgba::default()));
    }

    #[test]
    fn test_into_other_format_and_stride() {
        let mut src = PixelBuffer::new(1, 1, PixelFormat::Rgba32);
        src.view_mut().set_pixel(0, 0, Rgba::new(1, 2, 3, 4));
        let mut dest =
            PixelBuffer::with_stride(2, 1, 12, PixelFormat::Argb32, vec![0xEE; 12]).unwrap();
        resize_into(&src.view(), &mut dest).unwrap();
        assert_eq!(&dest.data()[..8], &[4, 1, 2, 3, 4, 1, 2, 3]);
        assert_eq!(&dest.data()[8..], &[0xEE; 4]);
    }

    #[test]
    fn test_empty_source_rejected() {
        let src = PixelBuffer::new(0, 0, PixelFormat::Rgba32);
        let err = resize(&src.view(), 2, 2).unwrap_err();
        assert!(matches!(err, OpsError::Core(Error::InvalidDimensions { .. })));
        assert!(resize(&src.view(), 0, 0).unwrap().is_empty());
    }
}
