//! Single-pixel decode/encode.
//!
//! [`Rgba`] is the transient, channel-ordered value operations work on;
//! [`PixelCodec`] moves it in and out of a byte buffer for one
//! [`PixelFormat`]. The codec is built once per call site, so inner loops
//! never branch on the format.
//!
//! Decoding and encoding only permute bytes. Whether the stored colors are
//! premultiplied is metadata carried next to the buffer; the codec records
//! it but never converts between the two representations (that is what the
//! explicit alpha operations are for).
//!
//! # Example
//!
//! ```rust
//! use raster_core::{PixelCodec, PixelFormat, Rgba};
//!
//! let codec = PixelCodec::new(PixelFormat::Argb32, false);
//! let mut data = [0u8; 4];
//! codec.write(&mut data, 0, Rgba::new(1, 2, 3, 4));
//! assert_eq!(data, [4, 1, 2, 3]);
//! assert_eq!(codec.read(&data, 0), Rgba::new(1, 2, 3, 4));
//! ```

use crate::format::{BYTES_PER_PIXEL, PixelFormat};

/// Four 8-bit channels in `r, g, b, a` order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[repr(C)]
pub struct Rgba {
    /// Red channel
    pub r: u8,
    /// Green channel
    pub g: u8,
    /// Blue channel
    pub b: u8,
    /// Alpha channel
    pub a: u8,
}

impl Rgba {
    /// Creates a pixel from its channels.
    #[inline]
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Unpacks a `0xRRGGBBAA` color.
    ///
    /// ```rust
    /// use raster_core::Rgba;
    /// assert_eq!(Rgba::from_packed(0x11223344), Rgba::new(0x11, 0x22, 0x33, 0x44));
    /// ```
    #[inline]
    pub const fn from_packed(color: u32) -> Self {
        let [r, g, b, a] = color.to_be_bytes();
        Self { r, g, b, a }
    }

    /// Packs into `0xRRGGBBAA`.
    #[inline]
    pub const fn to_packed(self) -> u32 {
        u32::from_be_bytes([self.r, self.g, self.b, self.a])
    }

    /// Channels as an array indexed by channel number (R=0, G=1, B=2, A=3).
    #[inline]
    pub const fn to_array(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }

    /// Builds a pixel from an array indexed by channel number.
    #[inline]
    pub const fn from_array(c: [u8; 4]) -> Self {
        Self::new(c[0], c[1], c[2], c[3])
    }

    /// Returns channel `index` (R=0, G=1, B=2, A=3), or `None` if out of range.
    #[inline]
    pub const fn channel(self, index: usize) -> Option<u8> {
        match index {
            0 => Some(self.r),
            1 => Some(self.g),
            2 => Some(self.b),
            3 => Some(self.a),
            _ => None,
        }
    }

    /// Mutable access to channel `index`, or `None` if out of range.
    #[inline]
    pub fn channel_mut(&mut self, index: usize) -> Option<&mut u8> {
        match index {
            0 => Some(&mut self.r),
            1 => Some(&mut self.g),
            2 => Some(&mut self.b),
            3 => Some(&mut self.a),
            _ => None,
        }
    }

    /// Same pixel with alpha replaced by `0xFF`.
    #[inline]
    pub const fn opaque(self) -> Self {
        Self { a: 0xFF, ..self }
    }
}

impl From<[u8; 4]> for Rgba {
    fn from(c: [u8; 4]) -> Self {
        Self::from_array(c)
    }
}

impl From<Rgba> for [u8; 4] {
    fn from(px: Rgba) -> Self {
        px.to_array()
    }
}

/// Reads and writes [`Rgba`] values for one fixed [`PixelFormat`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PixelCodec {
    format: PixelFormat,
    premultiplied: bool,
    positions: [usize; 4],
}

impl PixelCodec {
    /// Creates a codec for `format`.
    ///
    /// `premultiplied` is recorded for callers that need to know how the
    /// decoded colors should be interpreted; it does not change the bytes.
    #[inline]
    pub const fn new(format: PixelFormat, premultiplied: bool) -> Self {
        Self {
            format,
            premultiplied,
            positions: format.positions(),
        }
    }

    /// Format this codec reads and writes.
    #[inline]
    pub const fn format(&self) -> PixelFormat {
        self.format
    }

    /// Whether decoded colors are premultiplied by alpha.
    #[inline]
    pub const fn premultiplied(&self) -> bool {
        self.premultiplied
    }

    /// Decodes the pixel starting at `offset`.
    ///
    /// # Panics
    ///
    /// Panics if `offset + 4 > data.len()`.
    #[inline]
    pub fn read(&self, data: &[u8], offset: usize) -> Rgba {
        let px = &data[offset..offset + BYTES_PER_PIXEL];
        let [r, g, b, a] = self.positions;
        Rgba::new(px[r], px[g], px[b], px[a])
    }

    /// Encodes `pixel` at `offset`.
    ///
    /// # Panics
    ///
    /// Panics if `offset + 4 > data.len()`.
    #[inline]
    pub fn write(&self, data: &mut [u8], offset: usize, pixel: Rgba) {
        let px = &mut data[offset..offset + BYTES_PER_PIXEL];
        let [r, g, b, a] = self.positions;
        px[r] = pixel.r;
        px[g] = pixel.g;
        px[b] = pixel.b;
        px[a] = pixel.a;
    }

    /// Encodes `pixel` into a standalone 4-byte array.
    #[inline]
    pub fn encode(&self, pixel: Rgba) -> [u8; 4] {
        let mut out = [0u8; 4];
        self.write(&mut out, 0, pixel);
        out
    }

    /// Byte permutation that rewrites a `from` pixel as a `to` pixel.
    ///
    /// `out[i] = src[perm[i]]` for each destination byte `i`. Computed by
    /// composing the two position tables.
    ///
    /// ```rust
    /// use raster_core::{PixelCodec, PixelFormat};
    ///
    /// let perm = PixelCodec::transcode(PixelFormat::Rgba32, PixelFormat::Argb32);
    /// let src = [10, 20, 30, 40];
    /// let out = perm.map(|i| src[i]);
    /// assert_eq!(out, [40, 10, 20, 30]);
    /// ```
    #[inline]
    pub const fn transcode(from: PixelFormat, to: PixelFormat) -> [usize; 4] {
        let src = from.positions();
        let dst = to.positions();
        let mut perm = [0usize; 4];
        let mut channel = 0;
        while channel < 4 {
            perm[dst[channel]] = src[channel];
            channel += 1;
        }
        perm
    }
}
