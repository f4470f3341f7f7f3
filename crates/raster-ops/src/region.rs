//! Source/destination placement for two-image blits.
//!
//! `copy_pixels` and `merge` walk the source rectangle directly instead of
//! clipping it through a [`raster_core::ViewWindow`]. The rectangle is
//! truncated to whole pixels, mapped onto the destination through the
//! destination point, and both placements must then lie inside their
//! images; anything else is rejected before a byte is written. Coordinates
//! that are not finite or do not fit `i64` are rejected the same way.

use crate::{OpsError, OpsResult};
use raster_core::{BYTES_PER_PIXEL, ImageView, Point, Rectangle};
use tracing::debug;

/// Validated lockstep region of a source and destination image.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct BlitRegion {
    pub src_x: u32,
    pub src_y: u32,
    pub dest_x: u32,
    pub dest_y: u32,
    pub width: u32,
    pub height: u32,
}

impl BlitRegion {
    /// Resolves `src_rect` on `src` and its placement at `dest_point` on `dest`.
    ///
    /// Returns `Ok(None)` for a degenerate (empty) rectangle.
    pub fn resolve(
        dest: &ImageView<'_>,
        src: &ImageView<'_>,
        src_rect: Rectangle,
        dest_point: Point,
    ) -> OpsResult<Option<Self>> {
        let (Some(x0), Some(y0), Some(x1), Some(y1)) = (
            trunc(src_rect.x),
            trunc(src_rect.y),
            trunc(src_rect.x + src_rect.width),
            trunc(src_rect.y + src_rect.height),
        ) else {
            debug!(%src_rect, "blit source rectangle is not finite");
            return Err(OpsError::InvalidRegion(format!(
                "source rectangle {src_rect} is not finite"
            )));
        };
        if x1 <= x0 || y1 <= y0 {
            return Ok(None);
        }
        let (Some(w), Some(h)) = (x1.checked_sub(x0), y1.checked_sub(y0)) else {
            debug!(%src_rect, "blit source rectangle too large");
            return Err(OpsError::InvalidRegion(format!(
                "source rectangle {src_rect} is too large"
            )));
        };
        let (Some(dx), Some(dy)) = (trunc(dest_point.x), trunc(dest_point.y)) else {
            debug!(x = dest_point.x, y = dest_point.y, "blit destination is not finite");
            return Err(OpsError::InvalidRegion(format!(
                "destination ({}, {}) is not finite",
                dest_point.x, dest_point.y
            )));
        };

        let fits = |x: i64, y: i64, iw: u32, ih: u32| {
            x >= 0
                && y >= 0
                && x.checked_add(w).is_some_and(|r| r <= iw as i64)
                && y.checked_add(h).is_some_and(|b| b <= ih as i64)
        };
        if !fits(x0, y0, src.width(), src.height()) {
            debug!(%src_rect, "blit source rectangle leaves source image");
            return Err(OpsError::InvalidRegion(format!(
                "source {}x{} at ({}, {}) exceeds source image {}x{}",
                w,
                h,
                x0,
                y0,
                src.width(),
                src.height()
            )));
        }
        if !fits(dx, dy, dest.width(), dest.height()) {
            debug!(dx, dy, w, h, "blit destination leaves destination image");
            return Err(OpsError::InvalidRegion(format!(
                "destination {}x{} at ({}, {}) exceeds destination image {}x{}",
                w,
                h,
                dx,
                dy,
                dest.width(),
                dest.height()
            )));
        }

        // All values were just checked to lie within u32 image bounds.
        Ok(Some(Self {
            src_x: x0 as u32,
            src_y: y0 as u32,
            dest_x: dx as u32,
            dest_y: dy as u32,
            width: w as u32,
            height: h as u32,
        }))
    }

    /// Byte offset of the first source pixel in region row `row`.
    #[inline]
    pub fn src_row(&self, src: &ImageView<'_>, row: u32) -> usize {
        src.pixel_offset(self.src_x, self.src_y + row)
    }

    /// Byte offset of the first destination pixel in region row `row`.
    #[inline]
    pub fn dest_row(&self, dest: &ImageView<'_>, row: u32) -> usize {
        dest.pixel_offset(self.dest_x, self.dest_y + row)
    }

    /// Byte length of one region row.
    #[inline]
    pub fn row_bytes(&self) -> usize {
        self.width as usize * BYTES_PER_PIXEL
    }
}

/// Truncates toward zero; `None` for NaN, infinities and values outside `i64`.
#[inline]
fn trunc(v: f64) -> Option<i64> {
    // 2^63 is the first value past i64::MAX
    const LIMIT: f64 = 9_223_372_036_854_775_808.0;
    let t = v.trunc();
    (t.is_finite() && t > -LIMIT && t < LIMIT).then_some(t as i64)
}
