//! Single-channel copy between images.

use crate::{OpsError, OpsResult};
use raster_core::{BYTES_PER_PIXEL, ImageView, ImageViewMut, Point, Rectangle, ViewWindow};
use tracing::{debug, trace};

/// Copies channel `src_channel` of `src` into channel `dest_channel` of `dest`.
///
/// Channels are numbered R=0, G=1, B=2, A=3 in decoded order, so the copy
/// works across different byte orders. The other three destination channels
/// are left as they were.
///
/// `src_rect` is clipped to `src`; the destination window starts at
/// `dest_point`, has the clipped source size, and is clipped to `dest` in
/// turn. Both windows advance in lockstep.
///
/// # Errors
///
/// Returns [`OpsError::InvalidChannel`] if either channel index is above 3.
///
/// # Example
///
/// ```rust
/// use raster_core::{PixelBuffer, PixelFormat, Point, Rgba};
/// use raster_ops::copy_channel;
///
/// let mut src = PixelBuffer::new(1, 1, PixelFormat::Rgba32);
/// src.view_mut().set_pixel(0, 0, Rgba::new(7, 0, 0, 0));
/// let mut dest = PixelBuffer::new(1, 1, PixelFormat::Bgra32);
///
/// let rect = src.view().bounds();
/// copy_channel(&mut dest.view_mut(), &src.view(), rect, Point::ZERO, 0, 3).unwrap();
/// assert_eq!(dest.view().pixel(0, 0), Some(Rgba::new(0, 0, 0, 7)));
/// ```
pub fn copy_channel(
    dest: &mut ImageViewMut<'_>,
    src: &ImageView<'_>,
    src_rect: Rectangle,
    dest_point: Point,
    src_channel: usize,
    dest_channel: usize,
) -> OpsResult<()> {
    for channel in [src_channel, dest_channel] {
        if channel > 3 {
            debug!(channel, "copy_channel: channel index out of range");
            return Err(OpsError::InvalidChannel(channel));
        }
    }

    let src_window = ViewWindow::new(src, src_rect);
    let dest_window = ViewWindow::new(
        &dest.as_view(),
        Rectangle::new(
            dest_point.x,
            dest_point.y,
            src_window.width() as f64,
            src_window.height() as f64,
        ),
    );
    trace!(
        src_channel,
        dest_channel,
        width = dest_window.width(),
        height = dest_window.height(),
        "copy_channel"
    );
    if dest_window.is_empty() {
        return Ok(());
    }

    let src_codec = src.codec();
    let dest_codec = dest.codec();
    let src_data = src.data();
    let dest_data = dest.data_mut();

    for y in 0..dest_window.height() {
        let mut src_pos = src_window.row(y);
        let mut dest_pos = dest_window.row(y);
        for _ in 0..dest_window.width() {
            let value = src_codec.read(src_data, src_pos).to_array()[src_channel];
            let mut channels = dest_codec.read(dest_data, dest_pos).to_array();
            channels[dest_channel] = value;
            dest_codec.write(dest_data, dest_pos, channels.into());

            src_pos += BYTES_PER_PIXEL;
            dest_pos += BYTES_PER_PIXEL;
        }
    }

    Ok(())
}
