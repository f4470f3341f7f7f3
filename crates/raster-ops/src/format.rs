//! In-place channel order conversion.

use crate::OpsResult;
use raster_core::{BYTES_PER_PIXEL, PixelBuffer, PixelCodec, PixelFormat};
use tracing::{debug, trace};

/// Rewrites every pixel of `buffer` into `format` and retags the buffer.
///
/// Converting to the current format is a no-op. Row padding is permuted too,
/// which keeps it meaningless but harmless.
///
/// ```rust
/// use raster_core::{PixelBuffer, PixelFormat};
/// use raster_ops::set_format;
///
/// let mut buf = PixelBuffer::from_data(1, 1, PixelFormat::Rgba32, vec![1, 2, 3, 4]).unwrap();
/// set_format(&mut buf, PixelFormat::Argb32);
/// assert_eq!(buf.data(), &[4, 1, 2, 3]);
/// assert_eq!(buf.format(), PixelFormat::Argb32);
/// ```
pub fn set_format(buffer: &mut PixelBuffer, format: PixelFormat) {
    let from = buffer.format();
    if from == format {
        trace!(%format, "set_format: already in target format");
        return;
    }
    trace!(%from, to = %format, width = buffer.width(), height = buffer.height(), "set_format");

    let perm = PixelCodec::transcode(from, format);
    for px in buffer.data_mut().chunks_exact_mut(BYTES_PER_PIXEL) {
        let src = [px[0], px[1], px[2], px[3]];
        for (slot, &i) in px.iter_mut().zip(perm.iter()) {
            *slot = src[i];
        }
    }
    buffer.set_format_tag(format);
}

/// [`set_format`] from a raw format id (`0` RGBA32, `1` ARGB32, `2` BGRA32).
///
/// # Errors
///
/// Returns [`OpsError::Core`](crate::OpsError::Core) wrapping
/// [`raster_core::Error::InvalidFormat`] for any other id; the buffer is left
/// untouched.
pub fn set_format_id(buffer: &mut PixelBuffer, id: u32) -> OpsResult<()> {
    let format = PixelFormat::try_from(id)
        .inspect_err(|_| debug!(id, "set_format: unknown format id"))?;
    set_format(buffer, format);
    Ok(())
}
