//! Solid rectangle fills and seed flood fills.
//!
//! Colors enter both operations as packed `0xRRGGBBAA` words and are encoded
//! into the image's own byte order once, up front.

use std::collections::VecDeque;

use crate::{OpsError, OpsResult};
use raster_core::{BYTES_PER_PIXEL, ImageViewMut, Rectangle, Rgba, ViewWindow};
use tracing::{debug, trace};

/// Fills `rect` of `image` with `color` (`0xRRGGBBAA`).
///
/// The rectangle is clipped to the image. When it spans the whole of a
/// tightly packed buffer, the buffer is filled in one pass.
///
/// # Example
///
/// ```rust
/// use raster_core::{PixelBuffer, PixelFormat, Rgba};
/// use raster_ops::fill_rect;
///
/// let mut buf = PixelBuffer::new(2, 2, PixelFormat::Argb32);
/// let bounds = buf.view().bounds();
/// fill_rect(&mut buf.view_mut(), bounds, 0x11223344);
///
/// assert_eq!(&buf.data()[..4], &[0x44, 0x11, 0x22, 0x33]);
/// assert_eq!(buf.view().pixel(1, 1), Some(Rgba::new(0x11, 0x22, 0x33, 0x44)));
/// ```
pub fn fill_rect(image: &mut ImageViewMut<'_>, rect: Rectangle, color: u32) {
    let bytes = image.codec().encode(Rgba::from_packed(color));

    if covers_whole_buffer(image, rect) {
        trace!(color = format_args!("{color:#010x}"), "fill_rect: whole buffer");
        let data = image.data_mut();
        if bytes.iter().all(|&b| b == bytes[0]) {
            data.fill(bytes[0]);
        } else {
            for px in data.chunks_exact_mut(BYTES_PER_PIXEL) {
                px.copy_from_slice(&bytes);
            }
        }
        return;
    }

    let window = ViewWindow::new(&image.as_view(), rect);
    trace!(
        x = window.x(),
        y = window.y(),
        width = window.width(),
        height = window.height(),
        "fill_rect"
    );
    let data = image.data_mut();
    for y in 0..window.height() {
        for px in data[window.row_range(y)].chunks_exact_mut(BYTES_PER_PIXEL) {
            px.copy_from_slice(&bytes);
        }
    }
}

/// Whole-buffer check for the single-pass fill.
fn covers_whole_buffer(image: &ImageViewMut<'_>, rect: Rectangle) -> bool {
    let buffer = image.buffer();
    image.covers_buffer()
        && buffer.is_packed()
        && rect.x == 0.0
        && rect.y == 0.0
        && rect.width == buffer.width() as f64
        && rect.height == buffer.height() as f64
}

/// Replaces the 4-connected region around `(x, y)` with `color` (`0xRRGGBBAA`).
///
/// A pixel belongs to the region when its decoded RGBA matches the seed's
/// exactly. On images without the transparent flag, alpha is treated as
/// `0xFF` for the seed, the candidates and the fill color alike, so the
/// stored alpha never blocks a fill there. Filling a region that already has
/// the fill color is a no-op.
///
/// # Errors
///
/// Returns [`OpsError::OutOfBounds`] if the seed lies outside the image.
///
/// # Example
///
/// ```rust
/// use raster_core::{PixelBuffer, PixelFormat, Rgba};
/// use raster_ops::flood_fill;
///
/// let mut buf = PixelBuffer::new(3, 3, PixelFormat::Rgba32);
/// flood_fill(&mut buf.view_mut(), 1, 1, 0xFFFFFFFF).unwrap();
/// assert_eq!(buf.view().pixel(0, 2), Some(Rgba::new(255, 255, 255, 255)));
/// ```
pub fn flood_fill(image: &mut ImageViewMut<'_>, x: i64, y: i64, color: u32) -> OpsResult<()> {
    let (width, height) = (image.width(), image.height());
    if x < 0 || y < 0 || x >= width as i64 || y >= height as i64 {
        debug!(x, y, width, height, "flood_fill: seed outside image");
        return Err(OpsError::OutOfBounds { x, y, width, height });
    }
    let (x, y) = (x as u32, y as u32);

    let transparent = image.transparent();
    let normalize = |px: Rgba| if transparent { px } else { px.opaque() };
    let codec = image.codec();

    let fill = normalize(Rgba::from_packed(color));
    let target = normalize(codec.read(image.data(), image.pixel_offset(x, y)));
    if target == fill {
        trace!(x, y, "flood_fill: seed already has fill color");
        return Ok(());
    }
    debug!(x, y, width, height, transparent, "flood_fill");

    let mut queue = VecDeque::new();
    let seed = image.pixel_offset(x, y);
    codec.write(image.data_mut(), seed, fill);
    queue.push_back((x, y));

    let mut filled = 1usize;
    while let Some((cx, cy)) = queue.pop_front() {
        for (dx, dy) in [(0i64, -1i64), (-1, 0), (1, 0), (0, 1)] {
            let nx = cx as i64 + dx;
            let ny = cy as i64 + dy;
            if nx < 0 || ny < 0 || nx >= width as i64 || ny >= height as i64 {
                continue;
            }
            let (nx, ny) = (nx as u32, ny as u32);
            let offset = image.pixel_offset(nx, ny);
            if normalize(codec.read(image.data(), offset)) != target {
                continue;
            }
            codec.write(image.data_mut(), offset, fill);
            queue.push_back((nx, ny));
            filled += 1;
        }
    }

    trace!(filled, "flood_fill: done");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use raster_core::{Frame, PixelBuffer, PixelFormat};

    const WHITE: Rgba = Rgba::new(255, 255, 255, 255);
    const BLACK: Rgba = Rgba::new(0, 0, 0, 255);

    #[test]
    fn test_fill_whole_buffer_uniform_bytes() {
        let mut buf = PixelBuffer::new(3, 2, PixelFormat::Bgra32);
        let bounds = buf.view().bounds();
        fill_rect(&mut buf.view_mut(), bounds, 0x7F7F7F7F);
        assert!(buf.data().iter().all(|&b| b == 0x7F));
    }

    #[test]
    fn test_fill_whole_buffer_mixed_bytes() {
        let mut buf = PixelBuffer::new(2, 2, PixelFormat::Bgra32);
        let bounds = buf.view().bounds();
        fill_rect(&mut buf.view_mut(), bounds, 0x01020304);
        for px in buf.data().chunks_exact(4) {
            assert_eq!(px, &[3, 2, 1, 4]);
        }
    }

    #[test]
    fn test_fill_partial_rect_is_clipped() {
        let mut buf = PixelBuffer::new(3, 3, PixelFormat::Rgba32);
        fill_rect(&mut buf.view_mut(), Rectangle::new(1.0, 1.0, 10.0, 10.0), 0xFFFFFFFF);
        let view = buf.view();
        assert_eq!(view.pixel(0, 0), Some(Rgba::default()));
        assert_eq!(view.pixel(0, 2), Some(Rgba::default()));
        assert_eq!(view.pixel(1, 1), Some(WHITE));
        assert_eq!(view.pixel(2, 2), Some(WHITE));
    }

    #[test]
    fn test_fill_padded_buffer_keeps_padding() {
        let mut buf = PixelBuffer::with_stride(2, 2, 12, PixelFormat::Rgba32, vec![9; 24]).unwrap();
        let bounds = buf.view().bounds();
        fill_rect(&mut buf.view_mut(), bounds, 0);
        assert_eq!(&buf.data()[8..12], &[9, 9, 9, 9]);
        assert_eq!(&buf.data()[20..24], &[9, 9, 9, 9]);
        assert!(buf.data()[..8].iter().all(|&b| b == 0));
    }

    #[test]
    fn test_fill_atlas_frame_stays_inside() {
        let mut atlas = PixelBuffer::new(4, 4, PixelFormat::Rgba32);
        let mut cell = atlas.frame_mut(Frame::at(2, 2, 2, 2)).unwrap();
        let bounds = cell.bounds();
        fill_rect(&mut cell, bounds, 0xFFFFFFFF);
        let view = atlas.view();
        assert_eq!(view.pixel(1, 1), Some(Rgba::default()));
        assert_eq!(view.pixel(2, 2), Some(WHITE));
        assert_eq!(view.pixel(3, 3), Some(WHITE));
    }

    #[test]
    fn test_flood_fill_out_of_bounds() {
        let mut buf = PixelBuffer::new(2, 2, PixelFormat::Rgba32);
        let err = flood_fill(&mut buf.view_mut(), 2, 0, 0xFFFFFFFF).unwrap_err();
        assert_eq!(err, OpsError::OutOfBounds { x: 2, y: 0, width: 2, height: 2 });
        assert!(flood_fill(&mut buf.view_mut(), 0, -1, 0xFFFFFFFF).is_err());
    }

    #[test]
    fn test_flood_fill_ignores_alpha_when_opaque() {
        // stored alpha differs but the image is not flagged transparent
        let mut buf = PixelBuffer::new(2, 1, PixelFormat::Rgba32);
        buf.view_mut().set_pixel(1, 0, Rgba::new(0, 0, 0, 17));
        flood_fill(&mut buf.view_mut(), 0, 0, 0xFF0000FF).unwrap();
        assert_eq!(buf.view().pixel(1, 0), Some(Rgba::new(255, 0, 0, 255)));
    }

    #[test]
    fn test_flood_fill_alpha_matters_when_transparent() {
        let mut buf = PixelBuffer::new(2, 1, PixelFormat::Rgba32).with_transparent(true);
        buf.view_mut().set_pixel(1, 0, Rgba::new(0, 0, 0, 17));
        flood_fill(&mut buf.view_mut(), 0, 0, 0xFF000080).unwrap();
        assert_eq!(buf.view().pixel(0, 0), Some(Rgba::new(255, 0, 0, 0x80)));
        assert_eq!(buf.view().pixel(1, 0), Some(Rgba::new(0, 0, 0, 17)));
    }

    #[test]
    fn test_flood_fill_noop_when_seed_matches() {
        let mut buf = PixelBuffer::new(2, 2, PixelFormat::Rgba32);
        fill_rect(&mut buf.view_mut(), Rectangle::from_size(2.0, 2.0), 0x000000FF);
        let before = buf.clone();
        flood_fill(&mut buf.view_mut(), 1, 1, 0x000000FF).unwrap();
        assert_eq!(buf, before);
    }

    #[test]
    fn test_flood_fill_bounded_by_frame() {
        let mut atlas = PixelBuffer::new(4, 1, PixelFormat::Rgba32);
        let mut cell = atlas.frame_mut(Frame::at(1, 0, 2, 1)).unwrap();
        flood_fill(&mut cell, 0, 0, 0xFFFFFFFF).unwrap();
        let view = atlas.view();
        assert_eq!(view.pixel(0, 0), Some(Rgba::default()));
        assert_eq!(view.pixel(1, 0), Some(WHITE));
        assert_eq!(view.pixel(2, 0), Some(WHITE));
        assert_eq!(view.pixel(3, 0), Some(Rgba::default()));
    }

    #[test]
    fn test_flood_fill_stops_at_walls() {
        // column 1 is a wall
        let mut buf = PixelBuffer::new(3, 3, PixelFormat::Rgba32);
        fill_rect(&mut buf.view_mut(), Rectangle::from_size(3.0, 3.0), 0x000000FF);
        fill_rect(&mut buf.view_mut(), Rectangle::new(1.0, 0.0, 1.0, 3.0), 0x0000FFFF);
        flood_fill(&mut buf.view_mut(), 0, 0, 0xFFFFFFFF).unwrap();
        let view = buf.view();
        for y in 0..3 {
            assert_eq!(view.pixel(0, y), Some(WHITE));
            assert_eq!(view.pixel(2, y), Some(BLACK));
        }
    }
}
