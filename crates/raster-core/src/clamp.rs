//! Saturating byte arithmetic and fixed-point alpha scaling.
//!
//! The tables are process-wide, immutable and built on first use, so they
//! are safe to read from any thread.

use std::sync::LazyLock;

static ALPHA16: LazyLock<[u32; 256]> = LazyLock::new(|| {
    let mut table = [0u32; 256];
    for (a, slot) in table.iter_mut().enumerate() {
        *slot = (a as u32) * 257;
    }
    table
});

/// Saturates `x` to `[0, 255]`.
#[inline]
pub fn clamp(x: i32) -> u8 {
    x.clamp(0, 255) as u8
}

/// 8.8 fixed-point scale for alpha `a`: `a * 257`, i.e. `(a << 8) | a`.
///
/// `(channel * alpha16(a)) >> 16` approximates `channel * a / 255`.
#[inline]
pub fn alpha16(a: u8) -> u32 {
    ALPHA16[a as usize]
}

/// Scales `channel` by `a / 255`, rounded to nearest.
///
/// Exact for `a == 255` and `a == 0`.
///
/// ```rust
/// use raster_core::clamp::multiply;
/// assert_eq!(multiply(255, 255), 255);
/// assert_eq!(multiply(200, 0), 0);
/// assert_eq!(multiply(255, 128), 128);
/// ```
#[inline]
pub fn multiply(channel: u8, a: u8) -> u8 {
    ((channel as u32 * alpha16(a) + 0x8000) >> 16) as u8
}

/// Divides a premultiplied `channel` by `a / 255`, rounded and saturated.
///
/// Returns `None` for `a == 0`, where the color cannot be recovered.
#[inline]
pub fn unmultiply(channel: u8, a: u8) -> Option<u8> {
    if a == 0 {
        return None;
    }
    let a = a as i32;
    Some(clamp((channel as i32 * 255 + a / 2) / a))
}
