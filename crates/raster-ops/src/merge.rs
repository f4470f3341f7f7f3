//! Fixed-weight per-channel blending of two images.

use crate::OpsResult;
use crate::region::BlitRegion;
use raster_core::{BYTES_PER_PIXEL, ImageView, ImageViewMut, Point, Rectangle, Rgba};
use tracing::{debug, trace};

/// Full weight of a merge multiplier.
pub const MERGE_SCALE: i32 = 256;

/// Blends `src_rect` of `src` into `dest` at `dest_point`.
///
/// `multipliers` are the source weights for red, green, blue and alpha, each
/// in `0..=256`; values outside that range are clamped. Every destination
/// channel becomes
///
/// ```text
/// (src * m + dest * (256 - m)) / 256
/// ```
///
/// truncated, so `256` copies the source channel and `0` keeps the
/// destination. Channels are matched by meaning, so the two images may use
/// different byte orders.
///
/// # Errors
///
/// Returns [`OpsError::InvalidRegion`](crate::OpsError::InvalidRegion) when
/// the rectangle or its placement leaves either image.
///
/// # Example
///
/// ```rust
/// use raster_core::{PixelBuffer, PixelFormat, Point, Rgba};
/// use raster_ops::merge;
///
/// let mut src = PixelBuffer::new(1, 1, PixelFormat::Rgba32);
/// src.view_mut().set_pixel(0, 0, Rgba::new(200, 200, 200, 200));
/// let mut dest = PixelBuffer::new(1, 1, PixelFormat::Rgba32);
///
/// let rect = src.view().bounds();
/// merge(&mut dest.view_mut(), &src.view(), rect, Point::ZERO, [128, 256, 0, 128]).unwrap();
/// assert_eq!(dest.view().pixel(0, 0), Some(Rgba::new(100, 200, 0, 100)));
/// ```
pub fn merge(
    dest: &mut ImageViewMut<'_>,
    src: &ImageView<'_>,
    src_rect: Rectangle,
    dest_point: Point,
    multipliers: [i32; 4],
) -> OpsResult<()> {
    let weights = multipliers.map(|m| m.clamp(0, MERGE_SCALE));
    let Some(region) = BlitRegion::resolve(&dest.as_view(), src, src_rect, dest_point)? else {
        trace!(%src_rect, "merge: empty source rectangle");
        return Ok(());
    };
    debug!(
        width = region.width,
        height = region.height,
        red = weights[0],
        green = weights[1],
        blue = weights[2],
        alpha = weights[3],
        "merge"
    );

    let src_codec = src.codec();
    let dest_codec = dest.codec();
    for row in 0..region.height {
        let mut s = region.src_row(src, row);
        let mut d = region.dest_row(&dest.as_view(), row);
        for _ in 0..region.width {
            let fg = src_codec.read(src.data(), s).to_array();
            let bg = dest_codec.read(dest.data(), d).to_array();
            let out = std::array::from_fn(|c| blend(fg[c], bg[c], weights[c]));
            dest_codec.write(dest.data_mut(), d, Rgba::from_array(out));
            s += BYTES_PER_PIXEL;
            d += BYTES_PER_PIXEL;
        }
    }
    Ok(())
}

#[inline]
fn blend(src: u8, dest: u8, weight: i32) -> u8 {
    ((src as i32 * weight + dest as i32 * (MERGE_SCALE - weight)) / MERGE_SCALE) as u8
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::OpsError;
    use raster_core::{Frame, PixelBuffer, PixelFormat};

    fn solid(w: u32, h: u32, format: PixelFormat, px: Rgba) -> PixelBuffer {
        let mut buf = PixelBuffer::new(w, h, format);
        let mut view = buf.view_mut();
        for y in 0..h {
            for x in 0..w {
                view.set_pixel(x, y, px);
            }
        }
        buf
    }

    #[test]
    fn test_blend_extremes() {
        assert_eq!(blend(255, 0, 256), 255);
        assert_eq!(blend(255, 7, 0), 7);
        assert_eq!(blend(255, 0, 128), 127);
    }

    #[test]
    fn test_full_weight_copies_source() {
        let src = solid(2, 2, PixelFormat::Rgba32, Rgba::new(1, 2, 3, 4));
        let mut dest = solid(2, 2, PixelFormat::Bgra32, Rgba::new(90, 90, 90, 90));
        let bounds = src.view().bounds();
        merge(&mut dest.view_mut(), &src.view(), bounds, Point::ZERO, [256; 4]).unwrap();
        assert_eq!(dest.view().pixel(1, 1), Some(Rgba::new(1, 2, 3, 4)));
    }

    #[test]
    fn test_zero_weight_keeps_dest() {
        let src = solid(2, 2, PixelFormat::Rgba32, Rgba::new(1, 2, 3, 4));
        let mut dest = solid(2, 2, PixelFormat::Rgba32, Rgba::new(90, 91, 92, 93));
        let before = dest.clone();
        merge(&mut dest.view_mut(), &src.view(), src.view().bounds(), Point::ZERO, [0; 4]).unwrap();
        assert_eq!(dest, before);
    }

    #[test]
    fn test_multipliers_are_clamped() {
        let src = solid(1, 1, PixelFormat::Rgba32, Rgba::new(10, 10, 10, 10));
        let mut dest = solid(1, 1, PixelFormat::Rgba32, Rgba::new(50, 50, 50, 50));
        let bounds = src.view().bounds();
        merge(&mut dest.view_mut(), &src.view(), bounds, Point::ZERO, [999, -5, 256, 0]).unwrap();
        assert_eq!(dest.view().pixel(0, 0), Some(Rgba::new(10, 50, 10, 50)));
    }

    #[test]
    fn test_reads_source_at_source_offset() {
        let mut src = PixelBuffer::new(3, 3, PixelFormat::Rgba32);
        src.view_mut().set_pixel(2, 2, Rgba::new(77, 77, 77, 77));
        let mut dest = PixelBuffer::new(2, 2, PixelFormat::Rgba32);
        merge(
            &mut dest.view_mut(),
            &src.view(),
            Rectangle::new(2.0, 2.0, 1.0, 1.0),
            Point::ZERO,
            [256; 4],
        )
        .unwrap();
        assert_eq!(dest.view().pixel(0, 0), Some(Rgba::new(77, 77, 77, 77)));
    }

    #[test]
    fn test_into_atlas_frame() {
        let src = solid(1, 1, PixelFormat::Rgba32, Rgba::new(200, 0, 0, 0));
        let mut atlas = PixelBuffer::new(4, 4, PixelFormat::Rgba32);
        let mut cell = atlas.frame_mut(Frame::at(2, 2, 2, 2)).unwrap();
        let bounds = src.view().bounds();
        merge(&mut cell, &src.view(), bounds, Point::new(1.0, 1.0), [128, 0, 0, 0]).unwrap();
        assert_eq!(atlas.view().pixel(3, 3), Some(Rgba::new(100, 0, 0, 0)));
    }

    #[test]
    fn test_rejects_placement_outside_dest() {
        let src = solid(2, 2, PixelFormat::Rgba32, Rgba::new(1, 1, 1, 1));
        let mut dest = PixelBuffer::new(2, 2, PixelFormat::Rgba32);
        let bounds = src.view().bounds();
        let err = merge(&mut dest.view_mut(), &src.view(), bounds, Point::new(0.0, 1.0), [256; 4])
            .unwrap_err();
        assert!(matches!(err, OpsError::InvalidRegion(_)));
    }

    #[test]
    fn test_rejects_infinite_rect() {
        let src = PixelBuffer::new(2, 2, PixelFormat::Rgba32);
        let mut dest = PixelBuffer::new(2, 2, PixelFormat::Rgba32);
        let rect = Rectangle::new(f64::NEG_INFINITY, 0.0, f64::INFINITY, 1.0);
        let err = merge(&mut dest.view_mut(), &src.view(), rect, Point::ZERO, [256; 4])
            .unwrap_err();
        assert!(matches!(err, OpsError::InvalidRegion(_)));
        assert!(dest.data().iter().all(|&b| b == 0));
    }
}
